//! Circular arcs with a traversal sense.

use crate::angle::Angle;
use crate::circle::{Circle, DirectedCircle, Rotation};
use crate::float_types::Real;

/// A directed arc: a circle, a rotation sense, and the boundary angles.
///
/// A counter-clockwise arc sweeps from `start_angle` to `end_angle` by
/// increasing angle, a clockwise arc by decreasing angle; the swept length
/// is well defined regardless of where in `[0, 2π)` the boundaries wrap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arc {
    pub circle: Circle,
    pub rotation: Rotation,
    pub start_angle: Angle,
    pub end_angle: Angle,
}

impl Arc {
    /// A zero-sweep arc anchored at `angle`. The path builders extend one
    /// boundary once the tangent geometry is known.
    pub const fn anchored(circle: Circle, rotation: Rotation, angle: Angle) -> Self {
        Self {
            circle,
            rotation,
            start_angle: angle,
            end_angle: angle,
        }
    }

    /// The underlying circle tagged with this arc's sense.
    pub const fn directed(&self) -> DirectedCircle {
        DirectedCircle::new(self.circle, self.rotation)
    }

    /// Swept angle from `start_angle` to `end_angle` in this arc's sense,
    /// always non-negative.
    pub fn sweep(&self) -> Real {
        match self.rotation {
            Rotation::CounterClockwise => self.end_angle.positive_difference(self.start_angle),
            Rotation::Clockwise => self.end_angle.negative_difference(self.start_angle).abs(),
        }
    }

    /// Arc length along the swept angle.
    pub fn length(&self) -> Real {
        self.circle.radius * self.sweep()
    }
}
