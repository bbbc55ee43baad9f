//! The buyability scoring pipeline.
//!
//! Three independent sub-analyses feed one blended verdict:
//!
//! - [`health`] scores the listing's numeric attributes into a 0-100
//!   statistical health score with a per-feature breakdown;
//! - [`damage`] turns the reported painted/changed parts into a rule-based
//!   crash score with line-item deductions;
//! - [`mechanical`] is the seam for the external reliability assessor;
//! - [`buyability`] blends whichever component scores are present into the
//!   final tiered result.
//!
//! [`service::AnalysisService`] wires the pieces together behind the HTTP
//! router and the CLI.

pub mod buyability;
pub(crate) mod cache;
pub mod damage;
pub mod health;
pub mod listing;
pub mod mechanical;
pub mod router;
pub mod service;
pub mod store;

#[cfg(test)]
mod tests;

pub use buyability::{
    blend, BlendBreakdown, BlendError, BuyabilityScore, BuyabilityTier, ComponentKind,
    ComponentScores,
};
pub use damage::{assess_damage, DamageAnalysis, DamageVerdict, PartCondition, PartDeduction, PartGroup};
pub use health::{
    BuyDecision, FeatureScores, HealthFeature, HealthScoreError, HealthScorer, RiskLevel,
    StatisticalAnalysis, TopFeature, BUYABLE_THRESHOLD,
};
pub use listing::{AnalysisRequest, PartReport};
pub use mechanical::{
    AssessorError, DrivetrainIdentification, MechanicalAssessment, MechanicalAssessor,
};
pub use router::analysis_router;
pub use service::{AnalysisResponse, AnalysisService, AnalysisServiceError};
pub use store::{ListingId, ListingStore, StoreError, StoredListing};
