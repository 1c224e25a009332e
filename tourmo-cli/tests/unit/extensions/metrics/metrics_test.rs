use super::*;
use crate::helpers::*;

#[test]
fn can_get_coverage_metrics() {
    let sets = vec![
        create_named_set("A", &[[1., 1., -5., -5.]]),
        create_named_set("B", &[[2., 2., -3., -3.], [5., 5., -1., -1.]]),
    ];

    let rows = get_coverage_metrics(sets.as_slice(), &create_silent_logger()).unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].coverage_a_b, 1.);
    assert_eq!(rows[1].coverage_a_b, 0.);
}

#[test]
fn can_reject_coverage_of_single_set() {
    let sets = vec![create_named_set("A", &[[1., 1., -5., -5.]])];

    let result = get_coverage_metrics(sets.as_slice(), &create_silent_logger());

    assert_eq!(result.unwrap_err().to_string(), "binary coverage requires at least two solution sets, found 1");
}

#[test]
fn can_get_hypervolume_metrics() {
    let (logger, messages) = create_test_logger();
    let sets = vec![
        create_named_set("NSGA-II", &[[120., 310., -6., -3.], [95., 420., -7., -4.]]),
        create_named_set("MOEA/D", &[]),
    ];

    let metrics = get_hypervolume_metrics(sets.as_slice(), ObjectiveBounds::default(), logger).unwrap();

    assert_eq!(metrics.reference, ObjectiveBounds::default().reference_point());
    assert_eq!(metrics.rows.len(), 2);
    assert!(metrics.rows[0].raw_hypervolume > 0.);
    assert!(metrics.rows[0].hypervolume > 0.);
    assert_eq!(metrics.rows[1].raw_hypervolume, 0.);
    assert!(
        messages
            .lock()
            .unwrap()
            .iter()
            .any(|msg| msg == "skipping hypervolume calculation for MOEA/D due to empty solution set")
    );
}

#[test]
fn can_reject_invalid_bounds() {
    let mut bounds = ObjectiveBounds::default();
    bounds.reference.minimized = 0.5;
    let sets = vec![create_named_set("A", &[[1., 1., -5., -5.]])];

    let result = get_hypervolume_metrics(sets.as_slice(), bounds, create_silent_logger());

    assert!(result.is_err());
}

#[test]
fn can_reject_hypervolume_without_sets() {
    let result = get_hypervolume_metrics(&[], ObjectiveBounds::default(), create_silent_logger());

    assert!(result.is_err());
}
