//! Buyability blender.
//!
//! Combines up to three independently sourced component scores (statistical
//! health, mechanical reliability, crash/paint) into a single tiered 0-100
//! verdict. The blend deliberately favors caution: the weakest component
//! pulls the result down through a minimum blend, a geometric-mean dampener,
//! and threshold penalties, while uniformly strong listings earn a small
//! bonus.

use serde::{Deserialize, Serialize};

const WEIGHT_STATISTICAL: f64 = 0.25;
const WEIGHT_MECHANICAL: f64 = 0.40;
const WEIGHT_CRASH: f64 = 0.35;

/// How hard the minimum component pulls the weighted average.
const ALPHA_MIN_PULL: f64 = 0.30;
/// Weight of the geometric-mean dampener.
const BETA_GM_DAMPENER: f64 = 0.05;

const THRESHOLD_CRITICAL: u8 = 25;
const THRESHOLD_SERIOUS: u8 = 40;
const THRESHOLD_CAUTION: u8 = 50;

const PENALTY_CRITICAL: u32 = 25;
const PENALTY_SERIOUS: u32 = 12;
const PENALTY_CAUTION: u32 = 5;

/// All present components at or above this earn the safe bonus.
const SAFE_THRESHOLD: u8 = 70;
const BONUS_SAFE: u32 = 5;

/// Score caps keeping the numeric result consistent with the tier.
const CAP_KACIN: u8 = 30;
const CAP_RISKLI: u8 = 50;

/// Five ordered buy-recommendation tiers, from avoid to safe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BuyabilityTier {
    Kacin,
    Riskli,
    Dikkat,
    Normal,
    Guvenli,
}

impl BuyabilityTier {
    pub const fn label(self) -> &'static str {
        match self {
            BuyabilityTier::Kacin => "AVOID - Serious issues detected",
            BuyabilityTier::Riskli => "RISKY - Careful inspection required",
            BuyabilityTier::Dikkat => "CAUTION - Some concerns present",
            BuyabilityTier::Normal => "NORMAL - Acceptable condition",
            BuyabilityTier::Guvenli => "SAFE - Good overall condition",
        }
    }
}

/// Identifies which sub-analysis a component score came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentKind {
    Statistical,
    Mechanical,
    Crash,
}

impl ComponentKind {
    pub const fn description(self) -> &'static str {
        match self {
            ComponentKind::Statistical => "Statistical health score",
            ComponentKind::Mechanical => "Mechanical reliability score",
            ComponentKind::Crash => "Damage score",
        }
    }

    const fn weight(self) -> f64 {
        match self {
            ComponentKind::Statistical => WEIGHT_STATISTICAL,
            ComponentKind::Mechanical => WEIGHT_MECHANICAL,
            ComponentKind::Crash => WEIGHT_CRASH,
        }
    }
}

/// Component scores offered to the blender; any may be absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentScores {
    pub statistical: Option<u8>,
    pub mechanical: Option<u8>,
    pub crash: Option<u8>,
}

impl ComponentScores {
    fn present(&self) -> Vec<(ComponentKind, u8)> {
        [
            (ComponentKind::Statistical, self.statistical),
            (ComponentKind::Mechanical, self.mechanical),
            (ComponentKind::Crash, self.crash),
        ]
        .into_iter()
        .filter_map(|(kind, score)| score.map(|score| (kind, score)))
        .collect()
    }
}

/// Numeric trail of the blend, exposed for transparency and debugging.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlendBreakdown {
    pub weighted_average: f64,
    pub min_score: u8,
    pub blended_score: f64,
    pub penalty_applied: u32,
    pub bonus_applied: u32,
}

/// Final blended verdict with full breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuyabilityScore {
    pub final_score: u8,
    pub tier: BuyabilityTier,
    pub tier_label: &'static str,
    pub components: ComponentScores,
    pub breakdown: BlendBreakdown,
    pub calculation_summary: String,
    pub warning: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BlendError {
    #[error("insufficient components: at least one component score is required")]
    InsufficientComponents,
}

/// Blend the present component scores into a final tiered verdict.
pub fn blend(components: ComponentScores) -> Result<BuyabilityScore, BlendError> {
    let present = components.present();
    if present.is_empty() {
        return Err(BlendError::InsufficientComponents);
    }

    // Weights renormalized over whichever components showed up.
    let total_weight: f64 = present.iter().map(|(kind, _)| kind.weight()).sum();
    let weighted_average: f64 = present
        .iter()
        .map(|(kind, score)| f64::from(*score) * (kind.weight() / total_weight))
        .sum();

    let min_score = present
        .iter()
        .map(|(_, score)| *score)
        .min()
        .expect("at least one component present");

    let base = weighted_average * (1.0 - ALPHA_MIN_PULL) + f64::from(min_score) * ALPHA_MIN_PULL;

    // Geometric mean punishes imbalance between components; a single
    // component has nothing to dampen.
    let blended = if present.len() >= 2 {
        let product: f64 = present
            .iter()
            .map(|(_, score)| f64::from(*score).max(0.1))
            .product();
        let gm = product.powf(1.0 / present.len() as f64);
        base * (1.0 - BETA_GM_DAMPENER) + gm * BETA_GM_DAMPENER
    } else {
        base
    };

    let penalty = if min_score <= THRESHOLD_CRITICAL {
        PENALTY_CRITICAL
    } else if min_score <= THRESHOLD_SERIOUS {
        PENALTY_SERIOUS
    } else if min_score <= THRESHOLD_CAUTION {
        PENALTY_CAUTION
    } else {
        0
    };

    let all_safe = present.iter().all(|(_, score)| *score >= SAFE_THRESHOLD);

    let tier = if min_score <= THRESHOLD_CRITICAL {
        BuyabilityTier::Kacin
    } else if min_score <= THRESHOLD_SERIOUS {
        BuyabilityTier::Riskli
    } else if min_score <= THRESHOLD_CAUTION {
        BuyabilityTier::Dikkat
    } else if all_safe {
        BuyabilityTier::Guvenli
    } else {
        BuyabilityTier::Normal
    };

    let bonus = if tier == BuyabilityTier::Guvenli {
        BONUS_SAFE
    } else {
        0
    };

    let mut final_score = blended - f64::from(penalty) + f64::from(bonus);
    final_score = match tier {
        BuyabilityTier::Kacin => final_score.min(f64::from(CAP_KACIN)),
        BuyabilityTier::Riskli => final_score.min(f64::from(CAP_RISKLI)),
        _ => final_score,
    };
    let final_score = final_score.round().clamp(0.0, 100.0) as u8;

    let warning = if min_score <= THRESHOLD_CRITICAL {
        let critical: Vec<&str> = present
            .iter()
            .filter(|(_, score)| *score <= THRESHOLD_CRITICAL)
            .map(|(kind, _)| kind.description())
            .collect();
        Some(format!("Critical warning: {} critically low", critical.join(", ")))
    } else if min_score <= THRESHOLD_SERIOUS {
        Some("Attention: some component scores are at a concerning level".to_string())
    } else {
        None
    };

    let score_parts: Vec<String> = present
        .iter()
        .map(|(kind, score)| {
            let tag = match kind {
                ComponentKind::Statistical => "S",
                ComponentKind::Mechanical => "M",
                ComponentKind::Crash => "C",
            };
            format!("{tag}={score}")
        })
        .collect();
    let calculation_summary = format!(
        "Scores: {} | Weighted avg: {weighted_average:.1} | Min: {min_score} | \
         Blended: {blended:.1} | Penalty: -{penalty} | Bonus: +{bonus} | Result: {final_score}",
        score_parts.join(", ")
    );

    Ok(BuyabilityScore {
        final_score,
        tier,
        tier_label: tier.label(),
        components,
        breakdown: BlendBreakdown {
            weighted_average,
            min_score,
            blended_score: blended,
            penalty_applied: penalty,
            bonus_applied: bonus,
        },
        calculation_summary,
        warning,
    })
}
