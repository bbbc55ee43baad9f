use super::features::{DerivedAttributes, FeatureScores};
use serde::{Deserialize, Serialize};

/// Coarse risk category derived from the 0-100 risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    Minimal,
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    pub fn from_score(score: u8) -> Self {
        match score {
            71..=100 => RiskLevel::Minimal,
            51..=70 => RiskLevel::Low,
            31..=50 => RiskLevel::Moderate,
            _ => RiskLevel::High,
        }
    }
}

pub(crate) fn explanation(score: u8) -> &'static str {
    match score {
        86..=100 => "Minimal risk - Excellent condition vehicle",
        71..=85 => "Very low risk - Good condition vehicle",
        51..=70 => "Low risk - Generally acceptable condition",
        31..=50 => "Moderate risk - Some concerns, thorough inspection recommended",
        _ => "High risk - Multiple concerns with vehicle condition",
    }
}

pub(crate) fn recommendation(score: u8) -> &'static str {
    match score {
        71..=100 => "Recommended - This vehicle appears to be in good condition",
        51..=70 => "Consider - Acceptable condition, but verify with inspection",
        31..=50 => "Caution - Multiple factors require attention",
        _ => "Not Recommended - Significant concerns detected",
    }
}

const WEAK_FEATURE_FLOOR: f32 = 0.4;

/// Spell out the concrete concerns behind a score so the verdict is auditable.
pub(crate) fn risk_factors(attrs: &DerivedAttributes, scores: &FeatureScores) -> Vec<String> {
    let mut risks = Vec::new();

    if attrs.car_age > 15 {
        risks.push(format!("High vehicle age: {} years old", attrs.car_age));
    } else if attrs.car_age > 10 {
        risks.push(format!("Moderate vehicle age: {} years old", attrs.car_age));
    }

    let km_per_year = attrs.km_per_year as u32;
    if km_per_year > 20_000 {
        risks.push(format!("High yearly mileage: {km_per_year} km/year"));
    } else if km_per_year > 15_000 {
        risks.push(format!("Above average yearly mileage: {km_per_year} km/year"));
    }

    if attrs.mileage > 250_000 {
        risks.push(format!("Very high total mileage: {} km", attrs.mileage));
    } else if attrs.mileage > 150_000 {
        risks.push(format!("High total mileage: {} km", attrs.mileage));
    }

    if attrs.horsepower < 80 {
        risks.push(format!("Low engine power: {} HP", attrs.horsepower));
    }

    if attrs.engine_volume_ccm < 1200 {
        risks.push(format!("Small engine size: {} cc", attrs.engine_volume_ccm));
    } else if attrs.engine_volume_ccm > 2000 {
        risks.push(format!(
            "Large engine size: {} cc (higher maintenance)",
            attrs.engine_volume_ccm
        ));
    }

    let (weakest, value) = scores.weakest();
    if value < WEAK_FEATURE_FLOOR {
        risks.push(format!(
            "Weakest factor: {} (score: {value:.2})",
            weakest.label()
        ));
    }

    risks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::health::features::score_features;

    fn attrs(year: i32, mileage: u32, hp: u32, ccm: u32, current_year: i32) -> DerivedAttributes {
        let car_age = (current_year - year).max(1);
        DerivedAttributes {
            year,
            mileage,
            car_age,
            km_per_year: mileage as f32 / car_age as f32,
            horsepower: hp,
            engine_volume_ccm: ccm,
        }
    }

    #[test]
    fn clean_listing_has_no_risk_factors() {
        let attrs = attrs(2021, 30_000, 150, 1600, 2025);
        let (scores, _) = score_features(&attrs, 2025);
        assert!(risk_factors(&attrs, &scores).is_empty());
    }

    #[test]
    fn worn_listing_collects_multiple_factors() {
        let attrs = attrs(2005, 320_000, 75, 1390, 2025);
        let (scores, _) = score_features(&attrs, 2025);
        let risks = risk_factors(&attrs, &scores);

        assert!(risks.iter().any(|r| r.starts_with("High vehicle age")));
        assert!(risks.iter().any(|r| r.starts_with("Very high total mileage")));
        assert!(risks.iter().any(|r| r.starts_with("Low engine power")));
        assert!(risks.iter().any(|r| r.starts_with("Weakest factor")));
    }

    #[test]
    fn risk_level_bands_match_score_ranges() {
        assert_eq!(RiskLevel::from_score(90), RiskLevel::Minimal);
        assert_eq!(RiskLevel::from_score(71), RiskLevel::Minimal);
        assert_eq!(RiskLevel::from_score(63), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(40), RiskLevel::Moderate);
        assert_eq!(RiskLevel::from_score(10), RiskLevel::High);
    }
}
