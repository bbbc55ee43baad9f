use crate::analysis::damage::{assess_damage, DamageVerdict, PartCondition, PartGroup};
use crate::analysis::listing::PartReport;

#[test]
fn empty_report_is_pristine() {
    let analysis = assess_damage(&PartReport::default());

    assert_eq!(analysis.score, 100);
    assert_eq!(analysis.total_deduction, 0);
    assert!(analysis.deductions.is_empty());
    assert_eq!(analysis.verdict, DamageVerdict::Excellent);
}

#[test]
fn changed_hood_applies_structural_deduction() {
    let report = PartReport {
        changed: vec!["hood".to_string()],
        ..PartReport::default()
    };
    let analysis = assess_damage(&report);

    assert_eq!(analysis.score, 65);
    assert_eq!(analysis.total_deduction, 35);
    assert_eq!(analysis.deductions.len(), 1);

    let deduction = &analysis.deductions[0];
    assert_eq!(deduction.part_group, Some(PartGroup::Hood));
    assert_eq!(deduction.condition, PartCondition::Changed);
    assert_eq!(deduction.deduction, 35);
    assert!(deduction.advice.contains("frontal collision"));
    assert_eq!(analysis.verdict, DamageVerdict::Caution);
}

#[test]
fn cosmetic_repairs_stay_in_the_good_band() {
    let report = PartReport {
        painted: vec!["Motor Kaputu".to_string()],
        local_painted: vec!["arka tampon".to_string()],
        ..PartReport::default()
    };
    let analysis = assess_damage(&report);

    // Painted hood (15) plus locally painted bumper (1).
    assert_eq!(analysis.score, 84);
    assert_eq!(analysis.deductions.len(), 2);
    assert_eq!(analysis.verdict, DamageVerdict::Good);
}

#[test]
fn unknown_parts_get_default_deductions() {
    let report = PartReport {
        changed: vec!["muffler".to_string()],
        painted: vec!["mirror cap".to_string()],
        local_painted: vec!["wheel hub".to_string()],
        ..PartReport::default()
    };
    let analysis = assess_damage(&report);

    assert_eq!(analysis.total_deduction, 15 + 8 + 4);
    assert_eq!(analysis.score, 73);
    assert_eq!(analysis.deductions.len(), 3);
    assert!(analysis.deductions[0].part_group.is_none());
    assert!(analysis.deductions[0].advice.contains("Unknown part replacement"));
}

#[test]
fn most_severe_condition_wins_for_duplicated_parts() {
    let report = PartReport {
        changed: vec!["kaput".to_string()],
        painted: vec!["kaput".to_string()],
        local_painted: vec!["KAPUT".to_string()],
        ..PartReport::default()
    };
    let analysis = assess_damage(&report);

    assert_eq!(analysis.deductions.len(), 1);
    assert_eq!(analysis.deductions[0].condition, PartCondition::Changed);
    assert_eq!(analysis.total_deduction, 35);
}

#[test]
fn heavy_damage_clamps_score_at_zero() {
    let report = PartReport {
        changed: vec![
            "Tavan".to_string(),
            "Motor Kaputu".to_string(),
            "Bagaj Kapagi".to_string(),
        ],
        painted: vec!["sol arka camurluk".to_string()],
        ..PartReport::default()
    };
    let analysis = assess_damage(&report);

    // 60 + 35 + 20 + 10 exceeds the 100-point scale.
    assert_eq!(analysis.total_deduction, 125);
    assert_eq!(analysis.score, 0);
    assert_eq!(analysis.deductions.len(), 4);
    assert_eq!(analysis.verdict, DamageVerdict::DoNotBuy);
}

#[test]
fn verdict_bands_match_thresholds() {
    assert_eq!(DamageVerdict::from_score(100), DamageVerdict::Excellent);
    assert_eq!(DamageVerdict::from_score(90), DamageVerdict::Excellent);
    assert_eq!(DamageVerdict::from_score(89), DamageVerdict::Good);
    assert_eq!(DamageVerdict::from_score(70), DamageVerdict::Good);
    assert_eq!(DamageVerdict::from_score(69), DamageVerdict::Caution);
    assert_eq!(DamageVerdict::from_score(50), DamageVerdict::Caution);
    assert_eq!(DamageVerdict::from_score(49), DamageVerdict::Danger);
    assert_eq!(DamageVerdict::from_score(25), DamageVerdict::Danger);
    assert_eq!(DamageVerdict::from_score(24), DamageVerdict::DoNotBuy);
    assert_eq!(DamageVerdict::from_score(0), DamageVerdict::DoNotBuy);
}

#[test]
fn blank_part_names_are_ignored() {
    let report = PartReport {
        painted: vec!["   ".to_string(), String::new()],
        ..PartReport::default()
    };
    let analysis = assess_damage(&report);

    assert_eq!(analysis.score, 100);
    assert!(analysis.deductions.is_empty());
}
