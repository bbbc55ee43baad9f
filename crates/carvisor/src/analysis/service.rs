use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Datelike, Utc};
use serde::Serialize;
use tracing::{info, warn};

use super::buyability::{blend, BlendError, BuyabilityScore, ComponentScores};
use super::cache::TtlCache;
use super::damage::{assess_damage, DamageAnalysis};
use super::health::{HealthScoreError, HealthScorer, StatisticalAnalysis};
use super::listing::AnalysisRequest;
use super::mechanical::{MechanicalAssessment, MechanicalAssessor};
use super::store::{ListingId, ListingStore, StoreError};

/// Full hybrid analysis response: the three sub-analyses plus the blended
/// verdict. `damage: None` means the listing carried no part data at all,
/// which is distinct from a pristine (empty) part report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResponse {
    pub statistical: StatisticalAnalysis,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mechanical: Option<MechanicalAssessment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub damage: Option<DamageAnalysis>,
    pub buyability: BuyabilityScore,
    pub analyzed_at: DateTime<Utc>,
}

/// Error raised by the analysis service.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisServiceError {
    #[error(transparent)]
    Health(#[from] HealthScoreError),
    #[error(transparent)]
    Blend(#[from] BlendError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("listing does not belong to the requesting user")]
    Forbidden,
}

/// Service composing the scorers, the blender, and the two external seams.
///
/// Every scoring step is pure and synchronous; the service only adds
/// collaborator wiring, graceful degradation for the mechanical assessor,
/// and a TTL cache for repeated per-listing analysis.
pub struct AnalysisService<S, M> {
    store: Arc<S>,
    assessor: Arc<M>,
    cache: TtlCache<AnalysisResponse>,
}

impl<S, M> AnalysisService<S, M>
where
    S: ListingStore + 'static,
    M: MechanicalAssessor + 'static,
{
    pub fn new(store: Arc<S>, assessor: Arc<M>, cache_ttl: Duration) -> Self {
        Self {
            store,
            assessor,
            cache: TtlCache::new(cache_ttl),
        }
    }

    /// Run the full hybrid analysis for an ad-hoc request.
    ///
    /// The statistical score is a hard requirement; the mechanical and
    /// damage components are blended in when available and skipped
    /// otherwise, never failing the pipeline.
    pub fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResponse, AnalysisServiceError> {
        let current_year = request
            .reference_year
            .unwrap_or_else(|| Utc::now().year());
        let scorer = HealthScorer::new(current_year);

        let statistical = scorer.score(request)?;

        let mechanical = self.mechanical_assessment(request);

        let damage = request.parts.as_ref().map(assess_damage);

        let buyability = self.blend_components(&statistical, mechanical.as_ref(), damage.as_ref())?;

        Ok(AnalysisResponse {
            statistical,
            mechanical,
            damage,
            buyability,
            analyzed_at: Utc::now(),
        })
    }

    /// Analyze a stored listing after an ownership check, serving repeat
    /// requests from the TTL cache.
    pub fn analyze_listing(
        &self,
        listing_id: &ListingId,
        user_id: &str,
    ) -> Result<AnalysisResponse, AnalysisServiceError> {
        let listing = self
            .store
            .fetch(listing_id)?
            .ok_or(StoreError::NotFound)?;

        if listing.owner_id != user_id {
            return Err(AnalysisServiceError::Forbidden);
        }

        if let Some(cached) = self.cache.get(&listing_id.0) {
            info!(listing_id = %listing_id.0, "serving analysis from cache");
            return Ok(cached);
        }

        let response = self.analyze(&listing.attributes)?;
        self.cache.insert(listing_id.0.clone(), response.clone());
        Ok(response)
    }

    /// The assessor is only consulted when there is enough identifying data
    /// to say anything useful, and its failures degrade to "no mechanical
    /// component" rather than failing the analysis.
    fn mechanical_assessment(&self, request: &AnalysisRequest) -> Option<MechanicalAssessment> {
        if request.make.is_none() && request.model.is_none() {
            info!("skipping mechanical assessment: no make/model provided");
            return None;
        }

        match self.assessor.assess(request) {
            Ok(assessment) => Some(assessment),
            Err(err) => {
                warn!(error = %err, "mechanical assessment unavailable, continuing without it");
                None
            }
        }
    }

    fn blend_components(
        &self,
        statistical: &StatisticalAnalysis,
        mechanical: Option<&MechanicalAssessment>,
        damage: Option<&DamageAnalysis>,
    ) -> Result<BuyabilityScore, BlendError> {
        blend(ComponentScores {
            statistical: Some(statistical.risk_score),
            mechanical: mechanical.map(|m| m.mechanical_score),
            crash: damage.map(|d| d.score),
        })
    }
}
