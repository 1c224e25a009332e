use super::*;

parameterized_test! {can_compare_floats, (a, b, expected), {
    assert_eq!(compare_floats(a, b), expected);
}}

can_compare_floats! {
    case_01: (1., 2., Ordering::Less),
    case_02: (2., 1., Ordering::Greater),
    case_03: (1., 1., Ordering::Equal),
    case_04: (Float::NAN, 1., Ordering::Greater),
    case_05: (1., Float::NAN, Ordering::Less),
    case_06: (Float::NAN, Float::NAN, Ordering::Equal),
    case_07: (-0., 0., Ordering::Equal),
}

#[test]
fn can_sort_with_nan_at_tail() {
    let mut values = vec![3., Float::NAN, 1., 2.];

    values.sort_by(|a, b| compare_floats(*a, *b));

    assert_eq!(&values[..3], &[1., 2., 3.]);
    assert!(values[3].is_nan());
}
