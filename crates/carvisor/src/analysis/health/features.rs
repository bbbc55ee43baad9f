use serde::{Deserialize, Serialize};

/// The six listing attributes feeding the statistical health score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthFeature {
    VehicleAge,
    YearlyMileage,
    TotalMileage,
    ModelYear,
    EnginePower,
    EngineVolume,
}

impl HealthFeature {
    pub const ALL: [HealthFeature; 6] = [
        HealthFeature::VehicleAge,
        HealthFeature::YearlyMileage,
        HealthFeature::TotalMileage,
        HealthFeature::ModelYear,
        HealthFeature::EnginePower,
        HealthFeature::EngineVolume,
    ];

    /// Fixed rubric weights; the constant set sums to exactly 1.0.
    pub const fn weight(self) -> f32 {
        match self {
            HealthFeature::VehicleAge => 0.25,
            HealthFeature::YearlyMileage => 0.25,
            HealthFeature::TotalMileage => 0.20,
            HealthFeature::ModelYear => 0.10,
            HealthFeature::EnginePower => 0.10,
            HealthFeature::EngineVolume => 0.10,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            HealthFeature::VehicleAge => "Vehicle age",
            HealthFeature::YearlyMileage => "Yearly mileage",
            HealthFeature::TotalMileage => "Total mileage",
            HealthFeature::ModelYear => "Model year",
            HealthFeature::EnginePower => "Engine power",
            HealthFeature::EngineVolume => "Engine displacement",
        }
    }
}

/// Raw numeric inputs after parsing, defaulting, and age derivation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedAttributes {
    pub year: i32,
    pub mileage: u32,
    /// Floored at 1 so current-year cars do not divide by zero.
    pub car_age: i32,
    pub km_per_year: f32,
    pub horsepower: u32,
    pub engine_volume_ccm: u32,
}

impl DerivedAttributes {
    pub fn feature_value(&self, feature: HealthFeature) -> f32 {
        match feature {
            HealthFeature::VehicleAge => self.car_age as f32,
            HealthFeature::YearlyMileage => self.km_per_year,
            HealthFeature::TotalMileage => self.mileage as f32,
            HealthFeature::ModelYear => self.year as f32,
            HealthFeature::EnginePower => self.horsepower as f32,
            HealthFeature::EngineVolume => self.engine_volume_ccm as f32,
        }
    }
}

/// Per-feature sub-scores, each clamped to [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureScores {
    pub age_score: f32,
    pub km_per_year_score: f32,
    pub total_km_score: f32,
    pub model_year_score: f32,
    pub hp_score: f32,
    pub ccm_score: f32,
}

impl FeatureScores {
    pub fn get(&self, feature: HealthFeature) -> f32 {
        match feature {
            HealthFeature::VehicleAge => self.age_score,
            HealthFeature::YearlyMileage => self.km_per_year_score,
            HealthFeature::TotalMileage => self.total_km_score,
            HealthFeature::ModelYear => self.model_year_score,
            HealthFeature::EnginePower => self.hp_score,
            HealthFeature::EngineVolume => self.ccm_score,
        }
    }

    /// The feature with the lowest sub-score, for risk-factor callouts.
    pub fn weakest(&self) -> (HealthFeature, f32) {
        HealthFeature::ALL
            .into_iter()
            .map(|feature| (feature, self.get(feature)))
            .min_by(|(_, a), (_, b)| a.total_cmp(b))
            .expect("feature set is non-empty")
    }
}

fn clamp_unit(value: f32) -> f32 {
    value.clamp(0.0, 1.0)
}

/// Score each feature and fold them into the weighted health sum (0-1).
pub(crate) fn score_features(
    attrs: &DerivedAttributes,
    current_year: i32,
) -> (FeatureScores, f32) {
    // Newer is better across a 20 year window.
    let age_score = clamp_unit(1.0 - attrs.car_age as f32 / 20.0);
    // Lighter yearly usage is better; 30k km/year zeroes the score.
    let km_per_year_score = clamp_unit(1.0 - attrs.km_per_year / 30_000.0);
    // Total odometer reading against a 400k km ceiling.
    let total_km_score = clamp_unit(1.0 - attrs.mileage as f32 / 400_000.0);
    // Model year scaled across the 1959..current_year production range. The
    // denominator is floored at 1 so a degenerate reference year cannot
    // divide by zero and leak NaN into the weighted sum.
    let model_year_span = (current_year - 1959).max(1);
    let model_year_score = clamp_unit((attrs.year - 1959) as f32 / model_year_span as f32);
    // 50-250 HP band.
    let hp_score = clamp_unit((attrs.horsepower as f32 - 50.0) / 200.0);
    // Displacement sweet spot around 1450cc; extremes on both sides penalized.
    let ccm_score = clamp_unit(1.0 - (attrs.engine_volume_ccm as f32 - 1450.0).abs() / 1000.0);

    let scores = FeatureScores {
        age_score,
        km_per_year_score,
        total_km_score,
        model_year_score,
        hp_score,
        ccm_score,
    };

    let weighted_sum = HealthFeature::ALL
        .into_iter()
        .map(|feature| feature.weight() * scores.get(feature))
        .sum();

    (scores, weighted_sum)
}
