use crate::analysis::listing::AnalysisRequest;
use serde::{Deserialize, Serialize};

/// Identifier wrapper for stored listings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListingId(pub String);

/// A crawled listing as the external data store hands it to the pipeline.
/// The store owns normalization; attributes arrive in the canonical request
/// schema already.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredListing {
    pub listing_id: ListingId,
    pub owner_id: String,
    pub source_url: Option<String>,
    pub attributes: AnalysisRequest,
}

/// Error enumeration for store failures.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("listing not found")]
    NotFound,
    #[error("listing store unavailable: {0}")]
    Unavailable(String),
}

/// Seam for the external listing data store. Only the fetch the scoring
/// pipeline needs is modeled here; CRUD browsing belongs to the host
/// application.
pub trait ListingStore: Send + Sync {
    fn fetch(&self, id: &ListingId) -> Result<Option<StoredListing>, StoreError>;
}
