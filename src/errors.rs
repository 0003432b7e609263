//! Validation errors

use crate::float_types::Real;
use std::fmt::Display;

/// Configuration problems a caller can hand us. Geometric infeasibility of a
/// single path family is *not* an error; it is an infinite-length candidate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// (InvalidConfiguration) `turning_radius` must be finite and positive
    InvalidTurningRadius(Real),
    /// (InvalidConfiguration) `max_segment_length` must be finite and positive
    InvalidMaxSegmentLength(Real),
    /// (InvalidConfiguration) `min_number_of_segments` must be at least 1
    InvalidMinNumberOfSegments(u32),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::InvalidTurningRadius(radius) => write!(
                f,
                "(InvalidConfiguration) turning_radius must be finite and positive, got: {}",
                radius
            ),
            ValidationError::InvalidMaxSegmentLength(length) => write!(
                f,
                "(InvalidConfiguration) max_segment_length must be finite and positive, got: {}",
                length
            ),
            ValidationError::InvalidMinNumberOfSegments(count) => write!(
                f,
                "(InvalidConfiguration) min_number_of_segments must be at least 1, got: {}",
                count
            ),
        }
    }
}
