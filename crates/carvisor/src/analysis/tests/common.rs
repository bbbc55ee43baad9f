use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::response::Response;
use serde_json::Value;

use crate::analysis::listing::{AnalysisRequest, PartReport};
use crate::analysis::mechanical::{
    AssessorError, DrivetrainIdentification, MechanicalAssessment, MechanicalAssessor,
};
use crate::analysis::service::AnalysisService;
use crate::analysis::store::{ListingId, ListingStore, StoreError, StoredListing};

pub(super) const TEST_YEAR: i32 = 2025;

/// Average listing from the model's reference cases: 2015, 120k km, 150hp.
pub(super) fn average_request() -> AnalysisRequest {
    AnalysisRequest {
        year: Some(2015),
        mileage: Some(120_000),
        engine_power: Some("150 hp".to_string()),
        engine_volume: Some("1600 cc".to_string()),
        reference_year: Some(TEST_YEAR),
        ..AnalysisRequest::default()
    }
}

pub(super) fn good_request() -> AnalysisRequest {
    AnalysisRequest {
        year: Some(2020),
        mileage: Some(50_000),
        engine_power: Some("120".to_string()),
        engine_volume: Some("1560".to_string()),
        make: Some("Toyota".to_string()),
        series: Some("Corolla".to_string()),
        model: Some("1.6 Vision".to_string()),
        fuel_type: Some("Gasoline".to_string()),
        transmission: Some("Manual".to_string()),
        parts: Some(PartReport::default()),
        reference_year: Some(TEST_YEAR),
        ..AnalysisRequest::default()
    }
}

pub(super) fn poor_request() -> AnalysisRequest {
    AnalysisRequest {
        year: Some(2005),
        mileage: Some(320_000),
        engine_power: Some("75".to_string()),
        engine_volume: Some("1390".to_string()),
        make: Some("Rover".to_string()),
        model: Some("75".to_string()),
        parts: Some(PartReport {
            changed: vec!["Tavan".to_string(), "Motor Kaputu".to_string()],
            painted: vec!["Bagaj Kapagi".to_string()],
            local_painted: Vec::new(),
        }),
        reference_year: Some(TEST_YEAR),
        ..AnalysisRequest::default()
    }
}

#[derive(Default)]
pub(super) struct MemoryStore {
    listings: Mutex<HashMap<ListingId, StoredListing>>,
}

impl MemoryStore {
    pub(super) fn with_listing(listing: StoredListing) -> Self {
        let store = Self::default();
        store
            .listings
            .lock()
            .expect("store mutex poisoned")
            .insert(listing.listing_id.clone(), listing);
        store
    }
}

impl ListingStore for MemoryStore {
    fn fetch(&self, id: &ListingId) -> Result<Option<StoredListing>, StoreError> {
        let guard = self.listings.lock().expect("store mutex poisoned");
        Ok(guard.get(id).cloned())
    }
}

pub(super) struct UnavailableStore;

impl ListingStore for UnavailableStore {
    fn fetch(&self, _id: &ListingId) -> Result<Option<StoredListing>, StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }
}

/// Assessor stub returning a fixed score and counting how often it runs.
pub(super) struct FixedAssessor {
    score: u8,
    calls: AtomicUsize,
}

impl FixedAssessor {
    pub(super) fn new(score: u8) -> Self {
        Self {
            score,
            calls: AtomicUsize::new(0),
        }
    }

    pub(super) fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

impl MechanicalAssessor for FixedAssessor {
    fn assess(&self, request: &AnalysisRequest) -> Result<MechanicalAssessment, AssessorError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        Ok(MechanicalAssessment {
            mechanical_score: self.score,
            identification: DrivetrainIdentification {
                engine_code: "TEST-1".to_string(),
                transmission_name: "TEST-MT5".to_string(),
                generation: None,
            },
            general_comment: format!(
                "stub assessment for {}",
                request.make.as_deref().unwrap_or("unknown make")
            ),
            engine_reliability: "no chronic issues on record".to_string(),
            transmission_reliability: "no chronic issues on record".to_string(),
            km_endurance_check: "mileage within expected envelope".to_string(),
            verdict: "Low Risk / Buy".to_string(),
        })
    }
}

pub(super) struct FailingAssessor;

impl MechanicalAssessor for FailingAssessor {
    fn assess(&self, _request: &AnalysisRequest) -> Result<MechanicalAssessment, AssessorError> {
        Err(AssessorError::Transport("upstream timeout".to_string()))
    }
}

pub(super) fn service_with(
    store: Arc<MemoryStore>,
    assessor: Arc<FixedAssessor>,
) -> AnalysisService<MemoryStore, FixedAssessor> {
    AnalysisService::new(store, assessor, Duration::from_secs(300))
}

pub(super) fn stored_listing(id: &str, owner: &str, attributes: AnalysisRequest) -> StoredListing {
    StoredListing {
        listing_id: ListingId(id.to_string()),
        owner_id: owner.to_string(),
        source_url: Some(format!("https://listings.example/{id}")),
        attributes,
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
