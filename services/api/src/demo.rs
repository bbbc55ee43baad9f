use crate::infra::{seed_listings, HeuristicAssessor, InMemoryListingStore};
use carvisor::analysis::listing::AnalysisRequest;
use carvisor::analysis::service::{AnalysisResponse, AnalysisService};
use carvisor::error::AppError;
use clap::Args;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

#[derive(Args, Debug)]
pub(crate) struct AnalyzeArgs {
    /// Path to a JSON file holding the listing attributes to analyze
    #[arg(long)]
    pub(crate) file: PathBuf,
    /// Pretty-print the JSON report instead of the text summary
    #[arg(long)]
    pub(crate) json: bool,
    /// Override the calendar year used for age math
    #[arg(long)]
    pub(crate) reference_year: Option<i32>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Override the calendar year used for age math
    #[arg(long)]
    pub(crate) reference_year: Option<i32>,
}

fn demo_service() -> AnalysisService<InMemoryListingStore, HeuristicAssessor> {
    AnalysisService::new(
        Arc::new(InMemoryListingStore::seeded()),
        Arc::new(HeuristicAssessor),
        Duration::from_secs(60),
    )
}

pub(crate) fn run_analyze(args: AnalyzeArgs) -> Result<(), AppError> {
    let AnalyzeArgs {
        file,
        json,
        reference_year,
    } = args;

    let raw = std::fs::read_to_string(&file)?;
    let mut request: AnalysisRequest = serde_json::from_str(&raw)
        .map_err(|err| std::io::Error::new(ErrorKind::InvalidData, err))?;
    if reference_year.is_some() {
        request.reference_year = reference_year;
    }

    let response = demo_service().analyze(&request)?;

    if json {
        let rendered = serde_json::to_string_pretty(&response)
            .map_err(|err| std::io::Error::new(ErrorKind::InvalidData, err))?;
        println!("{rendered}");
    } else {
        render_report(&file.display().to_string(), &request, &response);
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs { reference_year } = args;
    let service = demo_service();

    println!("CarVisor hybrid analysis demo");

    for listing in seed_listings() {
        let mut request = listing.attributes.clone();
        if reference_year.is_some() {
            request.reference_year = reference_year;
        }
        let response = service.analyze(&request)?;
        render_report(&listing.listing_id.0, &request, &response);
    }

    // A listing without any bodywork section, to show the degraded path.
    let mut sparse = AnalysisRequest {
        year: Some(2008),
        mileage: Some(280_000),
        make: Some("Fiat".to_string()),
        model: Some("Linea".to_string()),
        parts: None,
        ..AnalysisRequest::default()
    };
    if reference_year.is_some() {
        sparse.reference_year = reference_year;
    }
    let response = service.analyze(&sparse)?;
    render_report("sparse-listing", &sparse, &response);

    Ok(())
}

fn render_report(label: &str, request: &AnalysisRequest, response: &AnalysisResponse) {
    let subject = match (&request.make, &request.series) {
        (Some(make), Some(series)) => format!("{make} {series}"),
        (Some(make), None) => make.clone(),
        _ => "unidentified vehicle".to_string(),
    };

    println!("\n=== {label}: {subject} ===");
    if let (Some(year), Some(mileage)) = (request.year, request.mileage) {
        println!("{year} model, {mileage} km");
    }

    let statistical = &response.statistical;
    println!(
        "Statistical health: {}/100 ({:?}) -> {:?}",
        statistical.risk_score, statistical.risk_level, statistical.decision
    );
    println!("  {}", statistical.explanation);
    for factor in &statistical.risk_factors {
        println!("  ! {factor}");
    }
    for feature in &statistical.top_features {
        println!(
            "  + {} = {:.2} (contribution {:.3})",
            feature.label, feature.value, feature.weighted_contribution
        );
    }

    match &response.mechanical {
        Some(mechanical) => {
            println!(
                "Mechanical: {}/100, {}",
                mechanical.mechanical_score, mechanical.verdict
            );
            println!("  {}", mechanical.general_comment);
        }
        None => println!("Mechanical: unavailable"),
    }

    match &response.damage {
        Some(damage) => {
            println!("Damage: {}/100, {}", damage.score, damage.verdict_label);
            for deduction in &damage.deductions {
                println!(
                    "  - {} ({}): -{} points",
                    deduction.part_name,
                    deduction.condition.label(),
                    deduction.deduction
                );
            }
        }
        None => println!("Damage: no bodywork data in the listing"),
    }

    let buyability = &response.buyability;
    println!(
        "Buyability: {}/100 -> {}",
        buyability.final_score, buyability.tier_label
    );
    println!("  {}", buyability.calculation_summary);
    if let Some(warning) = &buyability.warning {
        println!("  WARNING: {warning}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_listings_analyze_cleanly() {
        let service = demo_service();
        for listing in seed_listings() {
            let mut request = listing.attributes;
            request.reference_year = Some(2025);
            service
                .analyze(&request)
                .expect("demo listings must always analyze");
        }
    }

    #[test]
    fn sparse_listing_skips_damage_but_still_scores() {
        let service = demo_service();
        let request = AnalysisRequest {
            year: Some(2008),
            mileage: Some(280_000),
            make: Some("Fiat".to_string()),
            model: Some("Linea".to_string()),
            reference_year: Some(2025),
            ..AnalysisRequest::default()
        };

        let response = service.analyze(&request).expect("analysis");
        assert!(response.damage.is_none());
        assert!(response.mechanical.is_some());
    }
}
