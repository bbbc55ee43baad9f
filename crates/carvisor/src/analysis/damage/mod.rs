//! Crash/paint deduction engine.
//!
//! Converts the three bodywork condition lists (changed, painted, locally
//! painted) into a 0-100 damage score with line-item deductions and advisory
//! text drawn from a fixed table. Scoring starts from 100 (pristine) and only
//! ever deducts.

mod parts;

pub use parts::{normalize_part_name, resolve_part_group, PartCondition, PartGroup};

use crate::analysis::listing::PartReport;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::warn;

/// Verdict tiers mapped from the damage score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DamageVerdict {
    Excellent,
    Good,
    Caution,
    Danger,
    DoNotBuy,
}

impl DamageVerdict {
    pub fn from_score(score: u8) -> Self {
        match score {
            90..=100 => DamageVerdict::Excellent,
            70..=89 => DamageVerdict::Good,
            50..=69 => DamageVerdict::Caution,
            25..=49 => DamageVerdict::Danger,
            _ => DamageVerdict::DoNotBuy,
        }
    }

    pub const fn risk_level(self) -> &'static str {
        match self {
            DamageVerdict::Excellent => "Minimal Risk",
            DamageVerdict::Good => "Low Risk",
            DamageVerdict::Caution => "Medium Risk",
            DamageVerdict::Danger => "High Risk",
            DamageVerdict::DoNotBuy => "Very High Risk",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            DamageVerdict::Excellent => {
                "EXCELLENT - No or minimal damage history. Safe to buy."
            }
            DamageVerdict::Good => "GOOD - Minor cosmetic repairs present. Acceptable buy.",
            DamageVerdict::Caution => {
                "CAUTION - Notable damage history. A detailed inspection is essential."
            }
            DamageVerdict::Danger => "DANGER - Serious damage history. Buying is not advised.",
            DamageVerdict::DoNotBuy => "DO NOT BUY - Heavily damaged vehicle. Safety risk.",
        }
    }

    pub const fn summary(self) -> &'static str {
        match self {
            DamageVerdict::Excellent => {
                "Vehicle is in near-perfect condition with little or no painted or replaced \
                 bodywork."
            }
            DamageVerdict::Good => {
                "Minor cosmetic repairs are present but nothing points to structural damage."
            }
            DamageVerdict::Caution => {
                "Visible repair traces were found. A professional inspection is recommended."
            }
            DamageVerdict::Danger => {
                "The vehicle has a serious damage history and may have structural problems."
            }
            DamageVerdict::DoNotBuy => {
                "The vehicle has a very heavy damage history and may be unsafe."
            }
        }
    }
}

/// One resolved line-item deduction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartDeduction {
    /// The part name exactly as the listing reported it.
    pub part_name: String,
    /// Resolved deduction group, if the name matched the table.
    pub part_group: Option<PartGroup>,
    pub condition: PartCondition,
    pub deduction: u32,
    pub advice: String,
}

/// Complete damage assessment for a listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DamageAnalysis {
    pub score: u8,
    pub total_deduction: u32,
    pub deductions: Vec<PartDeduction>,
    pub verdict: DamageVerdict,
    pub verdict_label: &'static str,
    pub risk_level: &'static str,
    pub summary: &'static str,
}

/// Score a part report. Empty lists are the pristine case (100, no
/// deductions); callers distinguish "no part data at all" before getting here.
///
/// A part appearing in more than one condition list is only charged once, at
/// its most severe condition: lists are walked in severity order and a
/// normalized part key that already produced a deduction is skipped.
pub fn assess_damage(report: &PartReport) -> DamageAnalysis {
    let mut deductions = Vec::new();
    let mut total_deduction: u32 = 0;
    let mut seen: HashSet<String> = HashSet::new();

    let passes: [(&[String], PartCondition); 3] = [
        (&report.changed, PartCondition::Changed),
        (&report.painted, PartCondition::Painted),
        (&report.local_painted, PartCondition::LocalPainted),
    ];

    for (names, condition) in passes {
        for raw_name in names {
            let key = normalize_part_name(raw_name);
            if key.is_empty() {
                continue;
            }
            // Most severe condition wins when the same part shows up in
            // several lists; only the first (worst) occurrence is charged.
            if !seen.insert(key) {
                continue;
            }
            let group = resolve_part_group(raw_name);

            let (deduction, advice) = match group {
                Some(group) => (
                    group.deduction(condition),
                    group.advice(condition).to_string(),
                ),
                None => {
                    warn!(part = %raw_name, condition = condition.label(), "unknown part in damage report");
                    (
                        parts::unknown_part_deduction(condition),
                        parts::unknown_part_advice(raw_name, condition),
                    )
                }
            };

            total_deduction += deduction;
            deductions.push(PartDeduction {
                part_name: raw_name.clone(),
                part_group: group,
                condition,
                deduction,
                advice,
            });
        }
    }

    let score = 100u32.saturating_sub(total_deduction) as u8;
    let verdict = DamageVerdict::from_score(score);

    DamageAnalysis {
        score,
        total_deduction,
        deductions,
        verdict,
        verdict_label: verdict.label(),
        risk_level: verdict.risk_level(),
        summary: verdict.summary(),
    }
}
