use super::*;

#[test]
fn can_use_default_bounds() {
    let bounds = ObjectiveBounds::default();

    assert_eq!(bounds.ideal_point().values(), &[0., 60., -10., -10.]);
    assert_eq!(bounds.nadir_point().values(), &[500., 840., -1., -1.]);
    assert!(bounds.validate().is_ok());
}

#[test]
fn can_place_reference_point_beyond_nadir() {
    let bounds = ObjectiveBounds::default();

    let reference = bounds.reference_point();

    assert_approx_eq!(reference.values()[0], 550.);
    assert_approx_eq!(reference.values()[1], 924.);
    assert_approx_eq!(reference.values()[2], -0.9);
    assert_approx_eq!(reference.values()[3], -0.9);
    assert!(crate::algorithms::dominance::dominates(&bounds.nadir_point(), &reference));
}

#[test]
fn can_read_bounds_config_with_default_factors() {
    let json = r#"{
      "ideal": { "cost": 10, "time": 30, "attractions": 8, "neighborhoods": 5 },
      "nadir": { "cost": 300, "time": 600, "attractions": 2, "neighborhoods": 1 }
    }"#;

    let bounds = read_bounds_config(BufReader::new(json.as_bytes())).expect("cannot read config");

    assert_eq!(bounds.ideal.cost, 10.);
    assert_eq!(bounds.nadir.attractions, 2.);
    assert_eq!(bounds.reference, ReferenceFactors::default());
}

#[test]
fn can_read_bounds_config_with_factors() {
    let json = r#"{
      "ideal": { "cost": 0, "time": 60, "attractions": 10, "neighborhoods": 10 },
      "nadir": { "cost": 500, "time": 840, "attractions": 1, "neighborhoods": 1 },
      "reference": { "minimized": 1.5, "maximized": 0.5 }
    }"#;

    let bounds = read_bounds_config(BufReader::new(json.as_bytes())).expect("cannot read config");

    assert_eq!(bounds.reference_point().values(), &[750., 1260., -0.5, -0.5]);
}

#[test]
fn can_reject_malformed_bounds_config() {
    let result = read_bounds_config(BufReader::new("{ \"ideal\": 1 }".as_bytes()));

    assert!(result.unwrap_err().to_string().starts_with("cannot deserialize bounds config"));
}

parameterized_test! {can_validate_bounds, (bounds, expected), {
    can_validate_bounds_impl(bounds, expected);
}}

can_validate_bounds! {
    case_01_ideal_worse: (with_ideal(|ideal| ideal.cost = 600.), Some("ideal of objective 'cost' is worse than nadir")),
    case_02_ideal_worse_maximized: (
        with_ideal(|ideal| ideal.attractions = 0.),
        Some("ideal of objective 'attractions' is worse than nadir"),
    ),
    case_03_non_finite: (
        with_nadir(|nadir| nadir.time = Float::INFINITY),
        Some("bound of objective 'time' is not finite"),
    ),
    case_04_minimized_factor: (
        with_factors(0.9, 0.9),
        Some("minimized reference factor should be not less than 1, got 0.9"),
    ),
    case_05_maximized_factor: (with_factors(1.1, 1.2), Some("maximized reference factor should be in [0, 1], got 1.2")),
    case_06_degenerate_is_valid: (with_ideal(|ideal| ideal.cost = 500.), None),
}

fn with_ideal(update: fn(&mut ObjectiveValues)) -> ObjectiveBounds {
    let mut bounds = ObjectiveBounds::default();
    update(&mut bounds.ideal);
    bounds
}

fn with_nadir(update: fn(&mut ObjectiveValues)) -> ObjectiveBounds {
    let mut bounds = ObjectiveBounds::default();
    update(&mut bounds.nadir);
    bounds
}

fn with_factors(minimized: Float, maximized: Float) -> ObjectiveBounds {
    ObjectiveBounds { reference: ReferenceFactors { minimized, maximized }, ..ObjectiveBounds::default() }
}

fn can_validate_bounds_impl(bounds: ObjectiveBounds, expected: Option<&str>) {
    let result = bounds.validate();

    match expected {
        Some(expected) => assert_eq!(result.unwrap_err().to_string(), expected),
        None => assert!(result.is_ok()),
    }
}
