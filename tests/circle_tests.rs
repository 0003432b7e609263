use dubins2d::{Circle, DirectedCircle, Rotation, inside, tangent_line, transfer_circle};
use nalgebra::Point2;

fn directed(center: (f64, f64), radius: f64, rotation: Rotation) -> DirectedCircle {
    DirectedCircle::new(Circle::new(Point2::new(center.0, center.1), radius), rotation)
}

const SENSES: [Rotation; 2] = [Rotation::Clockwise, Rotation::CounterClockwise];

fn sense_sign(rotation: Rotation) -> f64 {
    match rotation {
        Rotation::Clockwise => -1.0,
        Rotation::CounterClockwise => 1.0,
    }
}

/// The radius vector at each tangent point must be perpendicular to the
/// tangent direction, and the side it falls on must match the circle's
/// rotation sense, for all four sense combinations.
#[test]
fn tangent_points_are_perpendicular_and_correctly_oriented() {
    for sense_a in SENSES {
        for sense_b in SENSES {
            let a = directed((0.0, 0.0), 2.0, sense_a);
            let b = directed((5.0, 1.0), 1.5, sense_b);

            let line = tangent_line(&a, &b)
                .unwrap_or_else(|| panic!("tangent {sense_a:?}/{sense_b:?} must exist"));
            let direction = line.b - line.a;
            let radius_a = line.a - a.circle.center;
            let radius_b = line.b - b.circle.center;

            assert!(radius_a.dot(&direction).abs() < 1e-9);
            assert!(radius_b.dot(&direction).abs() < 1e-9);

            // outer(radius, travel direction) is positive on a CCW circle and
            // negative on a CW one.
            assert!(radius_a.perp(&direction) * sense_sign(sense_a) > 0.0);
            assert!(radius_b.perp(&direction) * sense_sign(sense_b) > 0.0);
        }
    }
}

#[test]
fn tangent_point_radii_match_circle_radii() {
    let a = directed((-1.0, 2.0), 2.0, Rotation::CounterClockwise);
    let b = directed((6.0, -1.0), 0.5, Rotation::Clockwise);

    let line = tangent_line(&a, &b).unwrap();
    assert!(((line.a - a.circle.center).norm() - a.circle.radius).abs() < 1e-9);
    assert!(((line.b - b.circle.center).norm() - b.circle.radius).abs() < 1e-9);
}

#[test]
fn concentric_circles_have_no_tangent() {
    for sense_a in SENSES {
        for sense_b in SENSES {
            let a = directed((1.0, 1.0), 2.0, sense_a);
            let b = directed((1.0, 1.0), 2.0, sense_b);
            assert!(tangent_line(&a, &b).is_none());
        }
    }
}

/// Inner tangents (opposite senses) stop existing once the circles overlap;
/// outer tangents (same sense) survive.
#[test]
fn overlapping_circles_keep_only_same_sense_tangents() {
    let cw_a = directed((0.0, 0.0), 2.0, Rotation::Clockwise);
    let cw_b = directed((1.0, 0.0), 2.0, Rotation::Clockwise);
    let ccw_b = directed((1.0, 0.0), 2.0, Rotation::CounterClockwise);

    assert!(tangent_line(&cw_a, &cw_b).is_some());
    assert!(tangent_line(&cw_a, &ccw_b).is_none());
}

/// A transfer circle of radius `r` must sit at distance `r_a + r` from `a`
/// and `r_b + r` from `b`, and turn opposite to its inputs.
#[test]
fn transfer_circle_is_tangent_to_both_inputs() {
    let a = Circle::new(Point2::new(0.0, 0.0), 2.0);
    let b = Circle::new(Point2::new(5.0, 0.0), 2.0);

    for sense in SENSES {
        let connector = transfer_circle(&a, &b, sense, 2.0).unwrap();
        assert_eq!(connector.rotation, sense.opposite());
        assert!((connector.circle.radius - 2.0).abs() < 1e-12);
        assert!(((connector.circle.center - a.center).norm() - 4.0).abs() < 1e-9);
        assert!(((connector.circle.center - b.center).norm() - 4.0).abs() < 1e-9);
    }
}

/// CW inputs put the connector on one side of the center line, CCW inputs
/// on the other.
#[test]
fn transfer_circle_side_follows_rotation_sense() {
    let a = Circle::new(Point2::new(0.0, 0.0), 2.0);
    let b = Circle::new(Point2::new(5.0, 0.0), 2.0);

    let from_cw = transfer_circle(&a, &b, Rotation::Clockwise, 2.0).unwrap();
    let from_ccw = transfer_circle(&a, &b, Rotation::CounterClockwise, 2.0).unwrap();

    assert!(from_cw.circle.center.y < 0.0);
    assert!(from_ccw.circle.center.y > 0.0);
}

#[test]
fn transfer_circle_fails_when_centers_too_far() {
    let a = Circle::new(Point2::new(0.0, 0.0), 2.0);
    let b = Circle::new(Point2::new(10.0, 0.0), 2.0);
    assert!(transfer_circle(&a, &b, Rotation::Clockwise, 1.0).is_none());
}

#[test]
fn transfer_circle_fails_when_one_circle_contains_the_other() {
    let outer = Circle::new(Point2::new(0.0, 0.0), 5.0);
    let inner = Circle::new(Point2::new(1.0, 0.0), 1.0);
    assert!(transfer_circle(&outer, &inner, Rotation::Clockwise, 2.0).is_none());
    assert!(transfer_circle(&inner, &outer, Rotation::Clockwise, 2.0).is_none());
}

#[test]
fn containment_is_reflexive() {
    let a = Circle::new(Point2::new(3.0, -2.0), 1.5);
    assert!(inside(&a, &a));
}

#[test]
fn smaller_circle_never_contains_larger() {
    let small = Circle::new(Point2::new(0.0, 0.0), 1.0);
    let large = Circle::new(Point2::new(0.0, 0.0), 2.0);
    assert!(!inside(&small, &large));
    assert!(inside(&large, &small));
}

#[test]
fn containment_respects_distance() {
    let a = Circle::new(Point2::new(0.0, 0.0), 5.0);
    let contained = Circle::new(Point2::new(2.0, 0.0), 3.0);
    let protruding = Circle::new(Point2::new(2.5, 0.0), 3.0);
    assert!(inside(&a, &contained));
    assert!(!inside(&a, &protruding));
}
