//! Directed line segments.

use crate::float_types::Real;
use nalgebra::Point2;

/// An ordered pair of points, traversed `a` to `b`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line2D {
    /// Start point of the segment
    pub a: Point2<Real>,
    /// End point of the segment
    pub b: Point2<Real>,
}

impl Line2D {
    pub const fn new(a: Point2<Real>, b: Point2<Real>) -> Self {
        Self { a, b }
    }

    /// Squared length of the segment.
    pub fn length_squared(&self) -> Real {
        (self.b - self.a).norm_squared()
    }

    /// Length of the segment.
    pub fn length(&self) -> Real {
        (self.b - self.a).norm()
    }
}
