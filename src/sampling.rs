//! Uniform-stride sampling of path sub-segments.
//!
//! A path is walked sub-segment by sub-segment with one fixed stride. Each
//! walker starts at the offset still owed from the previous sub-segment and
//! returns the stride distance owed past its own end, so sample spacing is
//! uniform across sub-segment boundaries instead of restarting at each one.

use crate::angle::wrap_heading;
use crate::arc::Arc;
use crate::dubins::{Options, State};
use crate::float_types::{EPSILON, FRAC_PI_2, Real};
use crate::line::Line2D;
use nalgebra::Vector2;

/// Stride between samples for a path of `length`: the largest spacing that
/// stays within `max_segment_length` and yields at least
/// `min_number_of_segments` segments.
pub(crate) fn stride_for(length: Real, options: &Options) -> Real {
    let num_segments = (length / options.max_segment_length)
        .ceil()
        .max(options.min_number_of_segments as Real);
    length / num_segments
}

/// Rounding tolerance for a sub-segment's end boundary, never more than
/// half a stride so the loop cannot overshoot by a whole sample.
fn boundary_guard(stride: Real) -> Real {
    EPSILON.min(0.5 * stride)
}

/// State at `travelled` arc length past the arc's start boundary. Heading is
/// perpendicular to the radius vector, oriented with the arc's sense and
/// wrapped into `(-π, π]`.
pub(crate) fn state_on_arc(arc: &Arc, travelled: Real) -> State {
    let direction = arc.rotation.direction();
    let theta = arc.start_angle.radians() + direction * travelled / arc.circle.radius;
    State {
        position: arc.circle.center
            + arc.circle.radius * Vector2::new(theta.cos(), theta.sin()),
        heading: wrap_heading(theta + direction * FRAC_PI_2),
    }
}

/// Sample `arc` at `offset`, `offset + stride`, ... while within the swept
/// length, pushing states onto `states`. Returns the stride distance owed
/// past the arc's end.
pub(crate) fn sample_arc(states: &mut Vec<State>, arc: &Arc, stride: Real, offset: Real) -> Real {
    let swept = arc.length();
    let mut travelled = offset;
    // The guard keeps float rounding from dropping a sample that lands on
    // the boundary itself; capping it below the stride keeps it from
    // admitting extra samples past the end on sub-EPSILON strides.
    let guard = boundary_guard(stride);
    while travelled <= swept + guard {
        states.push(state_on_arc(arc, travelled));
        travelled += stride;
    }
    travelled - swept
}

/// Sample `line` at `offset`, `offset + stride`, ... while within its
/// length, pushing states onto `states`. Heading is constant along the
/// segment. Returns the stride distance owed past the line's end.
pub(crate) fn sample_line(
    states: &mut Vec<State>,
    line: &Line2D,
    stride: Real,
    offset: Real,
) -> Real {
    let v = line.b - line.a;
    let length = v.norm();
    if length <= 0.0 {
        // Degenerate straight segment (poses exactly 2R apart); nothing to
        // emit, the owed stride passes straight through.
        return offset;
    }
    let heading = v.y.atan2(v.x);
    let direction = v / length;

    let guard = boundary_guard(stride);
    let mut travelled = offset;
    while travelled <= length + guard {
        states.push(State {
            position: line.a + travelled * direction,
            heading,
        });
        travelled += stride;
    }
    travelled - length
}
