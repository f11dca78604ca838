//! Floating-point comparison.
//!
//! Bitwise `==` on `f64` stops being useful after the first rounding step, so
//! every equality in this crate goes through [`almost_equal`]: a relative bound
//! scaled by machine epsilon and a ULP multiplier, with an absolute floor at the
//! smallest normal positive value so that values near zero still compare equal.

use crate::constants::RESOLUTION;

/// Returns `true` when `a` and `b` are within `resolution` ULPs of each other.
///
/// The test is `|a - b| <= EPSILON * |a + b| * resolution` or
/// `|a - b| < f64::MIN_POSITIVE`. NaN is never almost equal to anything.
///
/// Infinities follow the formula too. An infinite value is almost equal to
/// every finite value, because both sides of the relative bound are infinite.
/// Two infinities are never almost equal, because their difference (or their
/// sum, for opposite signs) is NaN. This carries over to `==` on vectors, so a
/// component produced by dividing by zero matches any finite component.
///
/// ```
/// use isometry_core::math::almost_equal;
///
/// assert!(almost_equal(0.1 + 0.2, 0.3, 4));
/// assert!(!almost_equal(1.0, 1.0 + 1e-9, 4));
/// assert!(almost_equal(f64::INFINITY, 1.0, 4));
/// assert!(!almost_equal(f64::INFINITY, f64::INFINITY, 4));
/// ```
#[inline]
pub fn almost_equal(a: f64, b: f64, resolution: u32) -> bool {
    let diff = (a - b).abs();
    diff <= f64::EPSILON * (a + b).abs() * f64::from(resolution) || diff < f64::MIN_POSITIVE
}

/// [`almost_equal`] at the crate-wide [`RESOLUTION`].
#[inline]
pub fn approx_eq(a: f64, b: f64) -> bool {
    almost_equal(a, b, RESOLUTION)
}
