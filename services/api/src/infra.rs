use carvisor::analysis::listing::{
    parse_spec_number, AnalysisRequest, PartReport, DEFAULT_ENGINE_POWER_HP,
};
use carvisor::analysis::mechanical::{
    AssessorError, DrivetrainIdentification, MechanicalAssessment, MechanicalAssessor,
};
use carvisor::analysis::store::{ListingId, ListingStore, StoreError, StoredListing};
use chrono::{Datelike, Utc};
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default)]
pub(crate) struct InMemoryListingStore {
    listings: Mutex<HashMap<ListingId, StoredListing>>,
}

impl InMemoryListingStore {
    pub(crate) fn seeded() -> Self {
        let store = Self::default();
        for listing in seed_listings() {
            store
                .listings
                .lock()
                .expect("store mutex poisoned")
                .insert(listing.listing_id.clone(), listing);
        }
        store
    }
}

impl ListingStore for InMemoryListingStore {
    fn fetch(&self, id: &ListingId) -> Result<Option<StoredListing>, StoreError> {
        let guard = self.listings.lock().expect("store mutex poisoned");
        Ok(guard.get(id).cloned())
    }
}

/// Deterministic stand-in for the production mechanical-reliability service.
///
/// Scores from the listing attributes alone so the service runs without any
/// external collaborator: a well-kept recent car lands in the mid 80s, age and
/// mileage erode the score from there.
pub(crate) struct HeuristicAssessor;

impl MechanicalAssessor for HeuristicAssessor {
    fn assess(&self, request: &AnalysisRequest) -> Result<MechanicalAssessment, AssessorError> {
        let current_year = request.reference_year.unwrap_or_else(|| Utc::now().year());
        let age = request
            .year
            .map(|year| (current_year - year).max(0) as u32)
            .unwrap_or(10);
        let mileage = request.mileage.unwrap_or(150_000);
        let horsepower =
            parse_spec_number(request.engine_power.as_deref(), DEFAULT_ENGINE_POWER_HP);

        let age_wear = age.saturating_sub(10).saturating_mul(2).min(20);
        let mileage_wear = (mileage.saturating_sub(100_000) / 20_000).min(15);
        let score = 85u32.saturating_sub(age_wear).saturating_sub(mileage_wear);
        let score = score.clamp(30, 95) as u8;

        let make = request.make.as_deref().unwrap_or("unknown make");
        let model = request.model.as_deref().unwrap_or("unspecified model");

        Ok(MechanicalAssessment {
            mechanical_score: score,
            identification: DrivetrainIdentification {
                engine_code: format!("{horsepower}hp unit"),
                transmission_name: request
                    .transmission
                    .clone()
                    .unwrap_or_else(|| "unknown transmission".to_string()),
                generation: None,
            },
            general_comment: format!("{make} {model}, assessed from listing attributes only"),
            engine_reliability: if age > 15 {
                "aged engine, budget for gaskets and mounts".to_string()
            } else {
                "no chronic issues assumed at this age".to_string()
            },
            transmission_reliability: "no transmission-specific data available".to_string(),
            km_endurance_check: if mileage > 250_000 {
                format!("{mileage} km is past the typical service life of most drivetrains")
            } else {
                format!("{mileage} km is within the expected envelope")
            },
            verdict: if score >= 70 {
                "Low Risk / Buy".to_string()
            } else if score >= 50 {
                "Medium Risk / Inspect First".to_string()
            } else {
                "High Risk / Avoid".to_string()
            },
        })
    }
}

pub(crate) fn seed_listings() -> Vec<StoredListing> {
    vec![
        StoredListing {
            listing_id: ListingId("demo-corolla".to_string()),
            owner_id: "demo-user".to_string(),
            source_url: Some("https://listings.example/demo-corolla".to_string()),
            attributes: AnalysisRequest {
                year: Some(2020),
                mileage: Some(48_000),
                engine_power: Some("132 hp".to_string()),
                engine_volume: Some("1598 cc".to_string()),
                make: Some("Toyota".to_string()),
                series: Some("Corolla".to_string()),
                model: Some("1.6 Vision".to_string()),
                fuel_type: Some("Gasoline".to_string()),
                transmission: Some("Automatic".to_string()),
                parts: Some(PartReport::default()),
                ..AnalysisRequest::default()
            },
        },
        StoredListing {
            listing_id: ListingId("demo-megane".to_string()),
            owner_id: "demo-user".to_string(),
            source_url: Some("https://listings.example/demo-megane".to_string()),
            attributes: AnalysisRequest {
                year: Some(2012),
                mileage: Some(210_000),
                engine_power: Some("101-125".to_string()),
                engine_volume: Some("1461 cc".to_string()),
                make: Some("Renault".to_string()),
                series: Some("Megane".to_string()),
                model: Some("1.5 dCi".to_string()),
                fuel_type: Some("Diesel".to_string()),
                transmission: Some("Manual".to_string()),
                parts: Some(PartReport {
                    changed: vec!["Motor Kaputu".to_string()],
                    painted: vec!["Sol On Camurluk".to_string(), "On Tampon".to_string()],
                    local_painted: Vec::new(),
                }),
                ..AnalysisRequest::default()
            },
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heuristic_assessor_rewards_young_low_mileage_cars() {
        let listing = seed_listings().remove(0);
        let assessment = HeuristicAssessor
            .assess(&listing.attributes)
            .expect("assessment");
        assert!(assessment.mechanical_score >= 80);
        assert!(assessment.verdict.contains("Buy"));
    }

    #[test]
    fn heuristic_assessor_erodes_with_age_and_mileage() {
        let request = AnalysisRequest {
            year: Some(2000),
            mileage: Some(400_000),
            reference_year: Some(2025),
            ..AnalysisRequest::default()
        };
        let assessment = HeuristicAssessor.assess(&request).expect("assessment");
        // Full age (20) and mileage (15) wear off the 85 base.
        assert_eq!(assessment.mechanical_score, 50);
    }

    #[test]
    fn seeded_store_serves_demo_listings() {
        let store = InMemoryListingStore::seeded();
        let listing = store
            .fetch(&ListingId("demo-corolla".to_string()))
            .expect("fetch")
            .expect("present");
        assert_eq!(listing.owner_id, "demo-user");
    }
}
