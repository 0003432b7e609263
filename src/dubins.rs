//! The Dubins shortest-path solver.
//!
//! [`Dubins::new`] builds the four tangent circles for the start and end
//! poses, constructs all six family candidates, and keeps the index of the
//! shortest; length queries and sampling then dispatch to the winner (or to
//! any named family on request).

use crate::angle::Angle;
use crate::arc::Arc;
use crate::circle::{Circle, Rotation};
use crate::errors::ValidationError;
use crate::float_types::{FRAC_PI_2, Real};
use crate::path::{PathCandidate, PathFamily};
use nalgebra::{Point2, Vector2};

/// A pose on the path: position plus heading in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct State {
    pub position: Point2<Real>,
    pub heading: Real,
}

impl State {
    pub const fn new(position: Point2<Real>, heading: Real) -> Self {
        Self { position, heading }
    }
}

/// Sampling configuration. `turning_radius` constrains the path geometry;
/// the other two fields only shape the sampled output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Options {
    /// Turning radius of the Dubins car
    pub turning_radius: Real,
    /// Max distance between consecutive states on a returned path
    pub max_segment_length: Real,
    /// Minimum number of segments on a returned path
    pub min_number_of_segments: u32,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            turning_radius: 1.0,
            max_segment_length: 0.1,
            min_number_of_segments: 30,
        }
    }
}

impl Options {
    /// Reject malformed configuration before any geometry is attempted.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.turning_radius.is_finite() || self.turning_radius <= 0.0 {
            return Err(ValidationError::InvalidTurningRadius(self.turning_radius));
        }
        if !self.max_segment_length.is_finite() || self.max_segment_length <= 0.0 {
            return Err(ValidationError::InvalidMaxSegmentLength(
                self.max_segment_length,
            ));
        }
        if self.min_number_of_segments < 1 {
            return Err(ValidationError::InvalidMinNumberOfSegments(
                self.min_number_of_segments,
            ));
        }
        Ok(())
    }
}

/// The four tangent circles of a pose pair, as zero-sweep arcs anchored at
/// their pose angles.
struct TangentCircles {
    start_left: Arc,
    start_right: Arc,
    end_left: Arc,
    end_right: Arc,
}

impl TangentCircles {
    fn new(start: &State, end: &State, radius: Real) -> Self {
        Self {
            start_left: Self::left_of(start, radius),
            start_right: Self::right_of(start, radius),
            end_left: Self::left_of(end, radius),
            end_right: Self::right_of(end, radius),
        }
    }

    /// Circle 90° left of the heading; the pose sits at bearing
    /// `heading - π/2` from its center.
    fn left_of(pose: &State, radius: Real) -> Arc {
        let u = heading_left(pose.heading);
        Arc::anchored(
            Circle::new(pose.position + radius * u, radius),
            Rotation::CounterClockwise,
            Angle::new(pose.heading - FRAC_PI_2),
        )
    }

    /// Circle 90° right of the heading; the pose sits at bearing
    /// `heading + π/2` from its center.
    fn right_of(pose: &State, radius: Real) -> Arc {
        let u = heading_left(pose.heading);
        Arc::anchored(
            Circle::new(pose.position - radius * u, radius),
            Rotation::Clockwise,
            Angle::new(pose.heading + FRAC_PI_2),
        )
    }
}

/// Unit vector 90° left of `heading`.
fn heading_left(heading: Real) -> Vector2<Real> {
    Vector2::new((heading + FRAC_PI_2).cos(), (heading + FRAC_PI_2).sin())
}

/// A solved Dubins shortest path between two poses.
///
/// All six family candidates are constructed eagerly and kept, so the
/// non-optimal families remain inspectable and sampleable. The value is
/// immutable after construction; sampling is a repeatable read.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dubins {
    candidates: [PathCandidate; 6],
    best: Option<usize>,
}

impl Dubins {
    /// Solve the shortest path from `start` to `end` under
    /// `options.turning_radius`.
    pub fn new(start: &State, end: &State, options: &Options) -> Result<Self, ValidationError> {
        options.validate()?;
        let circles = TangentCircles::new(start, end, options.turning_radius);

        Ok(Self::from_candidates([
            PathCandidate::csc(PathFamily::Lsl, circles.start_left, circles.end_left),
            PathCandidate::csc(PathFamily::Rsr, circles.start_right, circles.end_right),
            PathCandidate::csc(PathFamily::Rsl, circles.start_right, circles.end_left),
            PathCandidate::csc(PathFamily::Lsr, circles.start_left, circles.end_right),
            PathCandidate::ccc(PathFamily::Lrl, circles.start_left, circles.end_left),
            PathCandidate::ccc(PathFamily::Rlr, circles.start_right, circles.end_right),
        ]))
    }

    /// Strict-`<` linear scan: the first candidate at the minimum length
    /// wins, so ties resolve deterministically in construction order.
    fn from_candidates(candidates: [PathCandidate; 6]) -> Self {
        let mut best = None;
        let mut best_length = Real::INFINITY;
        for (index, candidate) in candidates.iter().enumerate() {
            if candidate.length() < best_length {
                best_length = candidate.length();
                best = Some(index);
            }
        }
        Self { candidates, best }
    }

    /// Length of the shortest feasible path, `+∞` if every family is
    /// infeasible.
    pub fn length(&self) -> Real {
        self.best
            .map_or(Real::INFINITY, |index| self.candidates[index].length())
    }

    /// Which family won selection, `None` if every family is infeasible.
    pub fn family(&self) -> Option<PathFamily> {
        self.best.map(|index| self.candidates[index].family())
    }

    /// The candidate for a named family, optimal or not.
    pub const fn candidate(&self, family: PathFamily) -> &PathCandidate {
        &self.candidates[family.index()]
    }

    /// Evenly spaced states along the shortest path; empty if every family
    /// is infeasible.
    pub fn segmented_path(&self, options: &Options) -> Result<Vec<State>, ValidationError> {
        options.validate()?;
        Ok(self
            .best
            .map_or_else(Vec::new, |index| self.candidates[index].sample(options)))
    }

    /// Evenly spaced states along the named family's path, optimal or not;
    /// empty if that family is infeasible.
    pub fn segmented(
        &self,
        family: PathFamily,
        options: &Options,
    ) -> Result<Vec<State>, ValidationError> {
        options.validate()?;
        Ok(self.candidate(family).sample(options))
    }

    /// Sampled left-straight-left path.
    pub fn segmented_lsl(&self, options: &Options) -> Result<Vec<State>, ValidationError> {
        self.segmented(PathFamily::Lsl, options)
    }

    /// Sampled right-straight-right path.
    pub fn segmented_rsr(&self, options: &Options) -> Result<Vec<State>, ValidationError> {
        self.segmented(PathFamily::Rsr, options)
    }

    /// Sampled right-straight-left path.
    pub fn segmented_rsl(&self, options: &Options) -> Result<Vec<State>, ValidationError> {
        self.segmented(PathFamily::Rsl, options)
    }

    /// Sampled left-straight-right path.
    pub fn segmented_lsr(&self, options: &Options) -> Result<Vec<State>, ValidationError> {
        self.segmented(PathFamily::Lsr, options)
    }

    /// Sampled left-right-left path.
    pub fn segmented_lrl(&self, options: &Options) -> Result<Vec<State>, ValidationError> {
        self.segmented(PathFamily::Lrl, options)
    }

    /// Sampled right-left-right path.
    pub fn segmented_rlr(&self, options: &Options) -> Result<Vec<State>, ValidationError> {
        self.segmented(PathFamily::Rlr, options)
    }
}
