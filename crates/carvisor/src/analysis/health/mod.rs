//! Statistical health scorer.
//!
//! Maps a partial listing record to a 0-100 health score plus a per-feature
//! breakdown. Six bounded sub-scores over age, usage, and engine attributes
//! are folded through fixed weights; the result is deterministic and carries
//! enough breakdown data to audit every verdict.

mod features;
mod risk;

pub use features::{DerivedAttributes, FeatureScores, HealthFeature};
pub use risk::RiskLevel;

use crate::analysis::listing::{
    parse_spec_number, AnalysisRequest, DEFAULT_ENGINE_POWER_HP, DEFAULT_ENGINE_VOLUME_CCM,
};
use serde::{Deserialize, Serialize};

/// Minimum health score for a `Buyable` decision.
pub const BUYABLE_THRESHOLD: u8 = 50;

/// Binary decision derived from the health score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BuyDecision {
    Buyable,
    NotBuyable,
}

/// One of the top contributing features, ranked by weighted contribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopFeature {
    pub feature: HealthFeature,
    pub label: &'static str,
    pub value: f32,
    pub weighted_contribution: f32,
}

/// Full statistical analysis result for a listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatisticalAnalysis {
    /// 0-100; higher means safer to buy.
    pub risk_score: u8,
    pub decision: BuyDecision,
    pub risk_level: RiskLevel,
    pub feature_scores: FeatureScores,
    pub risk_factors: Vec<String>,
    pub top_features: Vec<TopFeature>,
    pub explanation: &'static str,
    pub recommendation: &'static str,
}

/// Raised when the listing lacks the fields the model cannot default.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HealthScoreError {
    #[error("listing is missing required fields (year, mileage) for statistical analysis")]
    InsufficientData,
}

/// Stateless scorer pinned to a reference calendar year.
#[derive(Debug, Clone, Copy)]
pub struct HealthScorer {
    current_year: i32,
}

impl HealthScorer {
    pub fn new(current_year: i32) -> Self {
        Self { current_year }
    }

    pub fn current_year(&self) -> i32 {
        self.current_year
    }

    /// Derive the model inputs from the raw request. Year and mileage are
    /// required; engine specs fall back to documented defaults.
    pub fn derive_attributes(
        &self,
        request: &AnalysisRequest,
    ) -> Result<DerivedAttributes, HealthScoreError> {
        let (Some(year), Some(mileage)) = (request.year, request.mileage) else {
            return Err(HealthScoreError::InsufficientData);
        };

        let car_age = (self.current_year - year).max(1);
        let horsepower =
            parse_spec_number(request.engine_power.as_deref(), DEFAULT_ENGINE_POWER_HP);
        let engine_volume_ccm =
            parse_spec_number(request.engine_volume.as_deref(), DEFAULT_ENGINE_VOLUME_CCM);

        Ok(DerivedAttributes {
            year,
            mileage,
            car_age,
            km_per_year: mileage as f32 / car_age as f32,
            horsepower,
            engine_volume_ccm,
        })
    }

    pub fn score(&self, request: &AnalysisRequest) -> Result<StatisticalAnalysis, HealthScoreError> {
        let attrs = self.derive_attributes(request)?;
        let (feature_scores, weighted_sum) = features::score_features(&attrs, self.current_year);

        let risk_score = (weighted_sum * 100.0).round().clamp(0.0, 100.0) as u8;
        let decision = if risk_score >= BUYABLE_THRESHOLD {
            BuyDecision::Buyable
        } else {
            BuyDecision::NotBuyable
        };

        let mut ranked: Vec<TopFeature> = HealthFeature::ALL
            .into_iter()
            .map(|feature| TopFeature {
                feature,
                label: feature.label(),
                value: attrs.feature_value(feature),
                weighted_contribution: feature.weight() * feature_scores.get(feature),
            })
            .collect();
        ranked.sort_by(|a, b| b.weighted_contribution.total_cmp(&a.weighted_contribution));
        ranked.truncate(3);

        Ok(StatisticalAnalysis {
            risk_score,
            decision,
            risk_level: RiskLevel::from_score(risk_score),
            risk_factors: risk::risk_factors(&attrs, &feature_scores),
            feature_scores,
            top_features: ranked,
            explanation: risk::explanation(risk_score),
            recommendation: risk::recommendation(risk_score),
        })
    }
}
