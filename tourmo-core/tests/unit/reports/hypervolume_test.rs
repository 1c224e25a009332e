use super::*;
use crate::helpers::models::create_named_set;
use crate::models::ObjectiveBounds;
use crate::utils::create_silent_logger;

fn create_calculator() -> HypervolumeCalculator {
    HypervolumeCalculator::new(ObjectiveBounds::default(), create_silent_logger())
}

#[test]
fn can_evaluate_every_algorithm_in_input_order() {
    let calculator = create_calculator();
    let reference = calculator.reference_point();
    let sets = vec![
        create_named_set("NSGA-II", &[[250., 450., -5.5, -5.5]]),
        create_named_set("SPEA2", &[[250., 450., -5.5, -5.5], [100., 700., -3., -2.]]),
    ];

    let rows = evaluate_all(sets.as_slice(), &calculator, &reference);

    assert_eq!(rows.iter().map(|row| row.algorithm.as_str()).collect::<Vec<_>>(), vec!["NSGA-II", "SPEA2"]);
    assert_eq!(rows.iter().map(|row| row.solution_count).collect::<Vec<_>>(), vec![1, 2]);
    assert!(rows[0].raw_hypervolume > 0.);
    assert!(rows[1].raw_hypervolume > rows[0].raw_hypervolume);
    assert!(rows[0].hypervolume > 0.);
    assert!(rows.iter().all(|row| row.issues.is_empty()));
}

#[test]
fn can_calculate_raw_hypervolume_in_original_units() {
    let calculator = create_calculator();
    let reference = calculator.reference_point();
    let set = create_named_set("MOVNS", &[[250., 450., -5.5, -5.5]]);

    let row = evaluate_one(&set, &calculator, &reference);

    let expected = (reference.cost() - 250.) * (reference.time() - 450.) * (5.5 - 0.9) * (5.5 - 0.9);
    assert!((row.raw_hypervolume - expected).abs() < 1e-6);
}

#[test]
fn can_produce_zero_row_for_empty_set() {
    let calculator = create_calculator();
    let reference = calculator.reference_point();
    let set = create_named_set("MOEA/D", &[]);

    let row = evaluate_one(&set, &calculator, &reference);

    assert!(row.is_empty());
    assert_eq!((row.hypervolume, row.raw_hypervolume), (0., 0.));
    assert_eq!(row.issues, vec![DataQualityIssue::EmptySolutionSet]);
}

#[test]
fn can_merge_issues_of_raw_and_normalized_calculations() {
    let calculator = create_calculator();
    let reference = calculator.reference_point();
    let set = create_named_set("NSGA-II", &[[600., 300., -5., -3.], [250., 450., -5.5, -5.5]]);

    let row = evaluate_one(&set, &calculator, &reference);

    let excluded = row.issues.iter().filter(|issue| matches!(issue, DataQualityIssue::ExcludedPoints { .. })).count();
    assert_eq!(excluded, 1);
    assert!(row.raw_hypervolume > 0.);
}
