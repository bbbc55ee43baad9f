use super::common::*;
use crate::analysis::health::{
    BuyDecision, HealthScoreError, HealthScorer, RiskLevel, BUYABLE_THRESHOLD,
};
use crate::analysis::listing::AnalysisRequest;

fn scorer() -> HealthScorer {
    HealthScorer::new(TEST_YEAR)
}

#[test]
fn scores_the_reference_average_listing() {
    let analysis = scorer().score(&average_request()).expect("scorable");

    // 2015 / 120k km / 150hp / 1600cc at reference year 2025.
    let scores = analysis.feature_scores;
    assert!((scores.age_score - 0.5).abs() < 1e-6);
    assert!((scores.km_per_year_score - 0.6).abs() < 1e-6);
    assert!((scores.total_km_score - 0.7).abs() < 1e-6);
    assert!((scores.model_year_score - 56.0 / 66.0).abs() < 1e-6);
    assert!((scores.hp_score - 0.5).abs() < 1e-6);
    assert!((scores.ccm_score - 0.85).abs() < 1e-6);

    assert_eq!(analysis.risk_score, 63);
    assert_eq!(analysis.decision, BuyDecision::Buyable);
    assert_eq!(analysis.risk_level, RiskLevel::Low);
}

#[test]
fn missing_year_or_mileage_is_insufficient_data() {
    let no_year = AnalysisRequest {
        year: None,
        ..average_request()
    };
    let no_mileage = AnalysisRequest {
        mileage: None,
        ..average_request()
    };

    assert_eq!(
        scorer().score(&no_year),
        Err(HealthScoreError::InsufficientData)
    );
    assert_eq!(
        scorer().score(&no_mileage),
        Err(HealthScoreError::InsufficientData)
    );
}

#[test]
fn future_model_years_floor_car_age_at_one() {
    let request = AnalysisRequest {
        year: Some(TEST_YEAR + 2),
        mileage: Some(500),
        ..AnalysisRequest::default()
    };
    let request = AnalysisRequest {
        reference_year: Some(TEST_YEAR),
        ..request
    };

    let attrs = scorer().derive_attributes(&request).expect("derivable");
    assert_eq!(attrs.car_age, 1);
    assert!((attrs.km_per_year - 500.0).abs() < f32::EPSILON);
}

#[test]
fn absent_engine_specs_use_documented_defaults() {
    let request = AnalysisRequest {
        year: Some(2018),
        mileage: Some(90_000),
        engine_power: None,
        engine_volume: Some("not listed".to_string()),
        reference_year: Some(TEST_YEAR),
        ..AnalysisRequest::default()
    };

    let attrs = scorer().derive_attributes(&request).expect("derivable");
    assert_eq!(attrs.horsepower, 100);
    assert_eq!(attrs.engine_volume_ccm, 1500);
}

#[test]
fn score_is_bounded_for_extreme_listings() {
    let wrecked = AnalysisRequest {
        year: Some(1960),
        mileage: Some(2_000_000),
        engine_power: Some("30".to_string()),
        engine_volume: Some("5000".to_string()),
        reference_year: Some(TEST_YEAR),
        ..AnalysisRequest::default()
    };
    let showroom = AnalysisRequest {
        year: Some(TEST_YEAR),
        mileage: Some(0),
        engine_power: Some("250".to_string()),
        engine_volume: Some("1450".to_string()),
        reference_year: Some(TEST_YEAR),
        ..AnalysisRequest::default()
    };

    let low = scorer().score(&wrecked).expect("scorable");
    let high = scorer().score(&showroom).expect("scorable");

    assert!(low.risk_score <= 100);
    assert!(high.risk_score <= 100);
    assert!(low.risk_score < BUYABLE_THRESHOLD);
    assert_eq!(low.decision, BuyDecision::NotBuyable);
    assert_eq!(high.decision, BuyDecision::Buyable);
}

#[test]
fn earliest_reference_year_still_produces_a_valid_score() {
    let request = AnalysisRequest {
        year: Some(1959),
        mileage: Some(10_000),
        reference_year: Some(1959),
        ..AnalysisRequest::default()
    };

    let analysis = HealthScorer::new(1959)
        .score(&request)
        .expect("scorable despite the degenerate year span");

    assert_eq!(analysis.feature_scores.model_year_score, 0.0);
    assert!(analysis.risk_score <= 100);
    // The other five sub-scores still contribute; the score must not
    // collapse to zero through an undefined model-year term.
    assert!(analysis.risk_score > 0);
}

#[test]
fn top_features_are_ranked_by_weighted_contribution() {
    let analysis = scorer().score(&average_request()).expect("scorable");

    assert_eq!(analysis.top_features.len(), 3);
    let contributions: Vec<f32> = analysis
        .top_features
        .iter()
        .map(|feature| feature.weighted_contribution)
        .collect();
    assert!(contributions.windows(2).all(|pair| pair[0] >= pair[1]));
}

#[test]
fn worn_listing_reports_risk_factors() {
    let analysis = scorer().score(&poor_request()).expect("scorable");

    assert!(analysis.risk_score < BUYABLE_THRESHOLD);
    assert!(!analysis.risk_factors.is_empty());
    assert!(analysis
        .risk_factors
        .iter()
        .any(|risk| risk.contains("total mileage")));
}
