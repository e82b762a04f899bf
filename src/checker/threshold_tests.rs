use super::*;

#[test]
fn both_bounds_disabled_always_pass() {
    let verdict = Thresholds::new(-1.0, -1.0).evaluate(50);
    assert!(verdict.min_pass);
    assert!(verdict.max_pass);
}

#[test]
fn min_bound_fails_below_minimum() {
    let verdict = Thresholds::new(100.0, -1.0).evaluate(50);
    assert!(!verdict.min_pass);
    assert!(verdict.max_pass);
}

#[test]
fn max_bound_fails_above_maximum() {
    let verdict = Thresholds::new(-1.0, 40.0).evaluate(50);
    assert!(verdict.min_pass);
    assert!(!verdict.max_pass);
}

#[test]
fn bounds_are_inclusive() {
    let verdict = Thresholds::new(50.0, 50.0).evaluate(50);
    assert!(verdict.min_pass);
    assert!(verdict.max_pass);
}

#[test]
fn bounds_evaluate_independently() {
    let verdict = Thresholds::new(10.0, 20.0).evaluate(30);
    assert!(verdict.min_pass);
    assert!(!verdict.max_pass);

    let verdict = Thresholds::new(40.0, 100.0).evaluate(30);
    assert!(!verdict.min_pass);
    assert!(verdict.max_pass);
}

#[test]
fn any_negative_value_disables_a_bound() {
    let verdict = Thresholds::new(-0.5, -123.0).evaluate(0);
    assert!(verdict.min_pass);
    assert!(verdict.max_pass);
}

#[test]
fn zero_is_an_enabled_bound() {
    let thresholds = Thresholds::new(0.0, 0.0);
    assert!(thresholds.min_enabled());
    assert!(thresholds.max_enabled());

    let verdict = thresholds.evaluate(1);
    assert!(verdict.min_pass);
    assert!(!verdict.max_pass);
}

#[test]
fn fractional_bounds_compare_against_integer_counts() {
    let verdict = Thresholds::new(49.5, -1.0).evaluate(50);
    assert!(verdict.min_pass);

    let verdict = Thresholds::new(50.5, -1.0).evaluate(50);
    assert!(!verdict.min_pass);
}
