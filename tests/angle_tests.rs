use dubins2d::Angle;
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-12,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn wrapping() {
    assert_close(Angle::new(0.0).radians(), 0.0);
    assert_close(Angle::new(PI).radians(), PI);
    assert_close(Angle::new(-PI).radians(), PI);
    assert_close(Angle::new(2.0 * PI).radians(), 0.0);
    assert_close(Angle::new(-2.0 * PI).radians(), 0.0);
    assert_close(Angle::new(-FRAC_PI_2).radians(), 3.0 * FRAC_PI_2);
    assert_close(Angle::new(-FRAC_PI_2 - 10.0 * PI).radians(), 3.0 * FRAC_PI_2);
    assert_close(Angle::new(-FRAC_PI_2 + 10.0 * PI).radians(), 3.0 * FRAC_PI_2);
}

#[test]
fn wrapped_value_is_always_canonical() {
    for k in -20..20 {
        let raw = 0.37 + 0.81 * k as f64;
        let wrapped = Angle::new(raw).radians();
        assert!((0.0..2.0 * PI).contains(&wrapped), "raw {raw} -> {wrapped}");
    }
}

#[test]
fn signed_difference() {
    let cases = [
        (0.0, 0.0, 0.0),
        (FRAC_PI_2, 0.0, FRAC_PI_2),
        (-FRAC_PI_2, 0.0, -FRAC_PI_2),
        (-PI, PI, 0.0),
        (-FRAC_PI_4, FRAC_PI_4, -FRAC_PI_2),
        (FRAC_PI_4, -FRAC_PI_4, FRAC_PI_2),
    ];
    for (a, b, expected) in cases {
        assert_close(Angle::new(a).signed_difference(Angle::new(b)), expected);
    }
}

#[test]
fn positive_difference() {
    let cases = [
        (0.0, 0.0, 0.0),
        (FRAC_PI_2, 0.0, FRAC_PI_2),
        (-FRAC_PI_2, 0.0, 3.0 * FRAC_PI_2),
        (-PI, PI, 0.0),
        (-FRAC_PI_4, FRAC_PI_4, 3.0 * FRAC_PI_2),
        (FRAC_PI_4, -FRAC_PI_4, FRAC_PI_2),
    ];
    for (a, b, expected) in cases {
        assert_close(Angle::new(a).positive_difference(Angle::new(b)), expected);
    }
}

#[test]
fn negative_difference() {
    let cases = [
        (0.0, 0.0, 0.0),
        (FRAC_PI_2, 0.0, -3.0 * FRAC_PI_2),
        (-FRAC_PI_2, 0.0, -FRAC_PI_2),
        (-PI, PI, 0.0),
        (-FRAC_PI_4, FRAC_PI_4, -FRAC_PI_2),
        (FRAC_PI_4, -FRAC_PI_4, -3.0 * FRAC_PI_2),
    ];
    for (a, b, expected) in cases {
        assert_close(Angle::new(a).negative_difference(Angle::new(b)), expected);
    }
}
