use super::*;

parameterized_test! {can_check_dominance, (p, q, is_dominated, is_weakly_dominated), {
    can_check_dominance_impl(p, q, is_dominated, is_weakly_dominated);
}}

can_check_dominance! {
    case_01_better_in_one: (vec![1., 2.], vec![2., 2.], true, true),
    case_02_equal: (vec![1., 2.], vec![1., 2.], false, true),
    case_03_trade_off: (vec![1., 3.], vec![2., 2.], false, false),
    case_04_worse: (vec![3., 3.], vec![2., 2.], false, false),
    case_05_better_in_all: (vec![0., 0., -6., -6.], vec![1., 1., -5., -5.], true, true),
    case_06_negated_counts: (vec![1., 1., -5., -5.], vec![2., 2., -3., -3.], true, true),
    case_07_worse_in_last: (vec![1., 1., -5., -2.], vec![2., 2., -3., -3.], false, false),
    case_08_single: (vec![1.], vec![2.], true, true),
}

fn can_check_dominance_impl(p: Vec<Float>, q: Vec<Float>, is_dominated: bool, is_weakly_dominated: bool) {
    assert_eq!(dominates(&p, &q), is_dominated);
    assert_eq!(weakly_dominates(&p, &q), is_weakly_dominated);
}

fn get_points() -> Vec<Vec<Float>> {
    vec![
        vec![100., 200., -3., -2.],
        vec![150., 150., -3., -2.],
        vec![100., 200., -4., -2.],
        vec![90., 210., -1., -1.],
        vec![100., 200., -3., -2.],
    ]
}

#[test]
fn can_keep_dominance_irreflexive_and_weak_dominance_reflexive() {
    get_points().iter().for_each(|p| {
        assert!(!dominates(p, p));
        assert!(weakly_dominates(p, p));
    });
}

#[test]
fn can_keep_dominance_asymmetric() {
    let points = get_points();

    points.iter().for_each(|p| {
        points.iter().filter(|q| dominates(p, *q)).for_each(|q| assert!(!dominates(q, p)));
    });
}

#[test]
fn can_imply_weak_dominance_from_dominance() {
    let points = get_points();

    points.iter().for_each(|p| {
        points.iter().filter(|q| dominates(p, *q)).for_each(|q| assert!(weakly_dominates(p, q)));
    });
}

#[test]
fn can_use_objective_vectors_and_slices() {
    let p = crate::models::ObjectiveVector::from_counts(100., 200., 5., 3.);
    let q = crate::models::ObjectiveVector::from_counts(100., 200., 4., 3.);

    assert!(dominates(&p, &q));
    assert!(dominates(&p.as_slice()[1..], &q.as_slice()[1..]));
    assert!(!dominates(&p.as_slice()[..2], &q.as_slice()[..2]));
}

#[test]
fn can_treat_vectors_of_different_length_as_incomparable() {
    let short = vec![1.];
    let long = vec![2., 2.];

    assert!(!dominates(short.as_slice(), long.as_slice()));
    assert!(!dominates(long.as_slice(), short.as_slice()));
    assert!(!weakly_dominates(short.as_slice(), long.as_slice()));
    assert!(!weakly_dominates(long.as_slice(), short.as_slice()));
}
