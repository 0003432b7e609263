//! Shortest paths for a vehicle with a minimum turning radius (a **Dubins
//! car**) between a start pose and an end pose, built from tangent lines and
//! transfer circles between directed circles.
//!
//! [`Dubins::new`] constructs all six canonical path families, four
//! curve-straight-curve (LSL, RSR, RSL, LSR) and two curve-curve-curve
//! (LRL, RLR), selects the globally shortest, and re-samples any of them
//! into evenly spaced [`State`]s on demand. The computation is pure and
//! deterministic: every type is an immutable value after construction, so
//! independent solves may run on separate threads without synchronization.
//!
//! # Features
//! - **f64**: use f64 as Real (default)
//! - **f32**: use f32 as Real, this conflicts with f64
//!
//! # Example
//! ```
//! use dubins2d::{Dubins, Options, State};
//! use nalgebra::Point2;
//!
//! let start = State::new(Point2::new(0.0, 0.0), 0.0);
//! let end = State::new(Point2::new(4.0, 4.0), core::f64::consts::FRAC_PI_2);
//! let options = Options {
//!     turning_radius: 1.0,
//!     ..Options::default()
//! };
//!
//! let path = Dubins::new(&start, &end, &options).unwrap();
//! assert!(path.length().is_finite());
//! let states = path.segmented_path(&options).unwrap();
//! assert!(states.len() >= options.min_number_of_segments as usize);
//! ```

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod angle;
pub mod arc;
pub mod circle;
pub mod dubins;
pub mod errors;
pub mod float_types;
pub mod line;
pub mod path;
mod sampling;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use angle::Angle;
pub use arc::Arc;
pub use circle::{Circle, DirectedCircle, Rotation, inside, tangent_line, transfer_circle};
pub use dubins::{Dubins, Options, State};
pub use errors::ValidationError;
pub use line::Line2D;
pub use path::{PathCandidate, PathFamily};
