//! The six Dubins path families and their candidates.
//!
//! Each candidate is built once from the start/end tangent circles, fixing
//! its geometry and total length; an infeasible construction (no tangent
//! line or no transfer circle) yields an infinite length so the candidate
//! simply cannot win selection, rather than an error.

use crate::arc::Arc;
use crate::circle::{tangent_line, transfer_circle};
use crate::dubins::{Options, State};
use crate::float_types::Real;
use crate::line::Line2D;
use crate::sampling::{sample_arc, sample_line, state_on_arc, stride_for};

/// The six canonical path families, in construction (and tie-break) order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathFamily {
    /// left arc, straight, left arc
    Lsl,
    /// right arc, straight, right arc
    Rsr,
    /// right arc, straight, left arc
    Rsl,
    /// left arc, straight, right arc
    Lsr,
    /// left arc, right arc, left arc
    Lrl,
    /// right arc, left arc, right arc
    Rlr,
}

impl PathFamily {
    /// All families in construction order.
    pub const ALL: [PathFamily; 6] = [
        PathFamily::Lsl,
        PathFamily::Rsr,
        PathFamily::Rsl,
        PathFamily::Lsr,
        PathFamily::Lrl,
        PathFamily::Rlr,
    ];

    pub(crate) const fn index(self) -> usize {
        match self {
            PathFamily::Lsl => 0,
            PathFamily::Rsr => 1,
            PathFamily::Rsl => 2,
            PathFamily::Lsr => 3,
            PathFamily::Lrl => 4,
            PathFamily::Rlr => 5,
        }
    }
}

/// Sub-segment geometry of a feasible candidate.
#[derive(Debug, Clone, Copy, PartialEq)]
enum PathGeometry {
    /// curve-straight-curve
    Csc { start: Arc, line: Line2D, end: Arc },
    /// curve-curve-curve
    Ccc { start: Arc, mid: Arc, end: Arc },
}

/// One path family's candidate between a fixed start and end pose.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathCandidate {
    family: PathFamily,
    geometry: Option<PathGeometry>,
    length: Real,
}

impl PathCandidate {
    /// Curve-straight-curve candidate. `start` and `end` arrive anchored at
    /// their pose angles; the tangent line fixes their free boundaries.
    pub(crate) fn csc(family: PathFamily, mut start: Arc, mut end: Arc) -> Self {
        let Some(line) = tangent_line(&start.directed(), &end.directed()) else {
            return Self::infeasible(family);
        };

        start.end_angle = start.circle.angle_to(line.a);
        end.start_angle = end.circle.angle_to(line.b);

        let length = start.length() + line.length() + end.length();
        Self {
            family,
            geometry: Some(PathGeometry::Csc { start, line, end }),
            length,
        }
    }

    /// Curve-curve-curve candidate between two same-sense arcs. The
    /// connecting radius is the mean of the outer radii, which collapses to
    /// the common turning radius in the usual equal-radii case.
    pub(crate) fn ccc(family: PathFamily, mut start: Arc, mut end: Arc) -> Self {
        let r = 0.5 * (start.circle.radius + end.circle.radius);
        let Some(connector) = transfer_circle(&start.circle, &end.circle, start.rotation, r)
        else {
            return Self::infeasible(family);
        };

        // Tangency points lie on the center lines, so each boundary angle is
        // the bearing of the neighboring circle's center.
        let mid = Arc {
            circle: connector.circle,
            rotation: connector.rotation,
            start_angle: connector.circle.angle_to(start.circle.center),
            end_angle: connector.circle.angle_to(end.circle.center),
        };
        start.end_angle = start.circle.angle_to(connector.circle.center);
        end.start_angle = end.circle.angle_to(connector.circle.center);

        let length = start.length() + mid.length() + end.length();
        Self {
            family,
            geometry: Some(PathGeometry::Ccc { start, mid, end }),
            length,
        }
    }

    pub(crate) const fn infeasible(family: PathFamily) -> Self {
        Self {
            family,
            geometry: None,
            length: Real::INFINITY,
        }
    }

    pub const fn family(&self) -> PathFamily {
        self.family
    }

    /// Total path length, `+∞` when the family is geometrically infeasible
    /// between these poses.
    pub const fn length(&self) -> Real {
        self.length
    }

    pub const fn is_feasible(&self) -> bool {
        self.geometry.is_some()
    }

    /// Evenly spaced states along the path, start pose through end pose.
    ///
    /// An infeasible candidate samples to an empty sequence; a zero-length
    /// candidate (coincident poses) to its single start state. `options` is
    /// assumed validated by the caller.
    pub(crate) fn sample(&self, options: &Options) -> Vec<State> {
        let Some(geometry) = &self.geometry else {
            return Vec::new();
        };
        if self.length <= 0.0 {
            let (PathGeometry::Csc { start, .. } | PathGeometry::Ccc { start, .. }) = geometry;
            return vec![state_on_arc(start, 0.0)];
        }

        let stride = stride_for(self.length, options);
        let mut states = Vec::with_capacity((self.length / stride) as usize + 4);

        match geometry {
            PathGeometry::Csc { start, line, end } => {
                let owed = sample_arc(&mut states, start, stride, 0.0);
                let owed = sample_line(&mut states, line, stride, owed);
                sample_arc(&mut states, end, stride, owed);
            },
            PathGeometry::Ccc { start, mid, end } => {
                let owed = sample_arc(&mut states, start, stride, 0.0);
                let owed = sample_arc(&mut states, mid, stride, owed);
                sample_arc(&mut states, end, stride, owed);
            },
        }

        states
    }
}
