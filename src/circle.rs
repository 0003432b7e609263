//! Circles, rotation sense, and the transfer solvers.
//!
//! The two solvers here are the geometric heart of the crate: given two
//! circles tagged with a traversal sense, [`tangent_line`] finds the unique
//! straight segment a vehicle can follow from one to the other without a
//! curvature jump, and [`transfer_circle`] finds the connecting circle of a
//! requested radius tangent to both, for the all-arc families.

use crate::angle::Angle;
use crate::float_types::Real;
use crate::line::Line2D;
use nalgebra::{Point2, Vector2};

/// A circle: center and non-negative radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    /// Center of the circle
    pub center: Point2<Real>,
    /// Radius of the circle
    pub radius: Real,
}

impl Circle {
    pub const fn new(center: Point2<Real>, radius: Real) -> Self {
        Self { center, radius }
    }

    /// Angle of `point` as seen from this circle's center.
    pub fn angle_to(&self, point: Point2<Real>) -> Angle {
        let v = point - self.center;
        Angle::new(v.y.atan2(v.x))
    }
}

/// Traversal sense around a circle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    Clockwise,
    CounterClockwise,
}

impl Rotation {
    pub const fn opposite(self) -> Self {
        match self {
            Rotation::Clockwise => Rotation::CounterClockwise,
            Rotation::CounterClockwise => Rotation::Clockwise,
        }
    }

    /// Angular direction of travel: `+1` counter-clockwise, `-1` clockwise.
    pub(crate) const fn direction(self) -> Real {
        match self {
            Rotation::Clockwise => -1.0,
            Rotation::CounterClockwise => 1.0,
        }
    }
}

/// A circle tagged with its traversal sense.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectedCircle {
    pub circle: Circle,
    pub rotation: Rotation,
}

impl DirectedCircle {
    pub const fn new(circle: Circle, rotation: Rotation) -> Self {
        Self { circle, rotation }
    }
}

/// Rotate a vector by +90°.
pub(crate) fn perpendicular(v: Vector2<Real>) -> Vector2<Real> {
    Vector2::new(-v.y, v.x)
}

struct UnitSeparation {
    u: Vector2<Real>,
    distance: Real,
}

/// Unit vector and distance from `a`'s center to `b`'s center, or `None`
/// when the centers are too close for any unique tangent to exist (one
/// circle inside or concentric with the other, per the radii difference).
fn unit_separation(a: &Circle, b: &Circle) -> Option<UnitSeparation> {
    let v = b.center - a.center;
    let dist_sq = v.norm_squared();
    let radii_diff = a.radius - b.radius;

    if dist_sq <= radii_diff * radii_diff {
        return None;
    }

    let distance = dist_sq.sqrt();
    Some(UnitSeparation { u: v / distance, distance })
}

fn tangent_impl(a: &Circle, b: &Circle, sign1: Real, sign2: Real) -> Option<Line2D> {
    let sep = unit_separation(a, b)?;

    let c = (a.radius - sign1 * b.radius) / sep.distance;
    if c * c > 1.0 {
        return None;
    }
    let h = (1.0 - c * c).max(0.0).sqrt();

    let n = c * sep.u + sign2 * h * perpendicular(sep.u);

    Some(Line2D::new(
        a.center + a.radius * n,
        b.center + sign1 * b.radius * n,
    ))
}

/// Tangent line for continuous-curvature travel from circle `a` to circle
/// `b`, oriented start to end. `None` when no such line exists or it is not
/// unique for this pair of rotation senses.
///
/// Each sense combination selects a sign pair applied to one generic
/// construction: the inner/outer tangent choice (`sign1`) and which side of
/// the center line the tangent normal falls on (`sign2`).
pub fn tangent_line(a: &DirectedCircle, b: &DirectedCircle) -> Option<Line2D> {
    use Rotation::{Clockwise, CounterClockwise};
    let (sign1, sign2) = match (a.rotation, b.rotation) {
        (Clockwise, Clockwise) => (1.0, 1.0),
        (Clockwise, CounterClockwise) => (-1.0, 1.0),
        (CounterClockwise, Clockwise) => (-1.0, -1.0),
        (CounterClockwise, CounterClockwise) => (1.0, -1.0),
    };
    tangent_impl(&a.circle, &b.circle, sign1, sign2)
}

/// Connecting circle of radius `r` externally tangent to both `a` and `b`,
/// where `rotation` is the shared traversal sense of `a` and `b`. The result
/// carries the opposite sense: the vehicle reverses its turn on the
/// connecting arc.
///
/// `None` when either circle contains the other or the centers are too far
/// apart for a circle of radius `r` to reach both.
pub fn transfer_circle(
    a: &Circle,
    b: &Circle,
    rotation: Rotation,
    r: Real,
) -> Option<DirectedCircle> {
    if inside(a, b) || inside(b, a) {
        return None;
    }

    let v = b.center - a.center;
    let dist_sq = v.norm_squared();

    let radius_ac = a.radius + r;
    let radius_bc = b.radius + r;
    let radius_ac_sq = radius_ac * radius_ac;
    let radius_bc_sq = radius_bc * radius_bc;

    if dist_sq > radius_ac_sq + radius_bc_sq + radius_ac * radius_bc {
        return None;
    }

    // Triangle (a.center, b.center, transfer center): foot-of-perpendicular
    // parameter along v, then the perpendicular offset to the apex.
    let dist_ap = (dist_sq + radius_ac_sq - radius_bc_sq) / (2.0 * dist_sq);
    let dist_pc = (radius_ac_sq / dist_sq - dist_ap * dist_ap).max(0.0).sqrt();

    let sign = match rotation {
        Rotation::Clockwise => 1.0,
        Rotation::CounterClockwise => -1.0,
    };
    let center = a.center + dist_ap * v - sign * dist_pc * perpendicular(v);

    Some(DirectedCircle::new(
        Circle::new(center, r),
        rotation.opposite(),
    ))
}

/// True iff circle `b` lies entirely within circle `a`.
pub fn inside(a: &Circle, b: &Circle) -> bool {
    if a.radius < b.radius {
        // b cannot be contained in a
        return false;
    }

    let v = b.center - a.center;
    let max_dist = a.radius - b.radius;
    v.norm_squared() <= max_dist * max_dist
}
