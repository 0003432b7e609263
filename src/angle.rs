//! Angles on the unit circle, stored wrapped to `[0, 2π)`.

use crate::float_types::{PI, Real, TAU};
use std::fmt::Display;

/// An angle normalized to `[0, 2π)`.
///
/// Construction wraps, so a stored value is always canonical; the three
/// circular differences are right-handed (`a - b`).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Angle(Real);

impl Angle {
    pub const ZERO: Self = Self(0.0);

    /// Wrap `radians` into `[0, 2π)`.
    pub fn new(radians: Real) -> Self {
        Self((TAU + (radians % TAU)) % TAU)
    }

    /// The canonical value, in `[0, 2π)`.
    pub const fn radians(self) -> Real {
        self.0
    }

    /// Signed difference `self - other` in `[-π, π)`-adjacent form: the
    /// shortest rotation taking `other` onto `self`.
    pub fn signed_difference(self, other: Self) -> Real {
        ((self.0 - other.0 + 3.0 * PI) % TAU) - PI
    }

    /// Positive difference `self - other` in `[0, 2π)`: the counter-clockwise
    /// sweep from `other` to `self`.
    pub fn positive_difference(self, other: Self) -> Real {
        let diff = self.signed_difference(other);
        if diff < 0.0 { diff + TAU } else { diff }
    }

    /// Negative difference `self - other` in `(-2π, 0]`: the clockwise sweep
    /// from `other` to `self`, as a non-positive value.
    pub fn negative_difference(self, other: Self) -> Real {
        let diff = self.signed_difference(other);
        if diff > 0.0 { diff - TAU } else { diff }
    }
}

impl From<Real> for Angle {
    fn from(radians: Real) -> Self {
        Self::new(radians)
    }
}

impl Display for Angle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Wrap a raw heading into `(-π, π]`.
pub(crate) fn wrap_heading(radians: Real) -> Real {
    let wrapped = Angle::new(radians).radians();
    if wrapped > PI { wrapped - TAU } else { wrapped }
}
