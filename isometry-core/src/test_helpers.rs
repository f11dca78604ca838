//! ULP-distance assertions for tests.
//!
//! The `==` on [`Vector3`] and [`Matrix3`] answers yes or no. When a test needs
//! to know how far apart two values are, or wants a bound other than
//! [`RESOLUTION`](crate::constants::RESOLUTION), these helpers report the distance
//! in units in the last place.

use crate::{Matrix3, Vector3};

/// Maps an `f64` onto a `u64` whose ordering matches numeric ordering, so that
/// adjacent floats map to adjacent integers.
#[inline]
pub fn ordered_bits(x: f64) -> u64 {
    let bits = x.to_bits();
    if bits & 0x8000_0000_0000_0000 != 0 {
        !bits
    } else {
        bits | 0x8000_0000_0000_0000
    }
}

/// Number of representable `f64` values between `a` and `b`.
#[inline]
pub fn ulp_diff(a: f64, b: f64) -> u64 {
    ordered_bits(a).abs_diff(ordered_bits(b))
}

#[track_caller]
pub fn assert_ulp_le(a: f64, b: f64, max_ulp: u64, ctx: &str) {
    // +0.0 and -0.0 sit one step apart in the ordered mapping.
    if a == 0.0 && b == 0.0 {
        return;
    }
    assert!(
        a.is_finite() && b.is_finite(),
        "non-finite value in {}: a={} b={}",
        ctx,
        a,
        b
    );
    let d = ulp_diff(a, b);
    assert!(
        d <= max_ulp,
        "{}: ULP={} exceeds {}, a={} (0x{:016x}) b={} (0x{:016x})",
        ctx,
        d,
        max_ulp,
        a,
        a.to_bits(),
        b,
        b.to_bits()
    );
}

#[track_caller]
pub fn assert_vector_ulp_le(a: &Vector3, b: &Vector3, max_ulp: u64, ctx: &str) {
    for (i, (&ca, &cb)) in a.to_array().iter().zip(b.to_array().iter()).enumerate() {
        assert_ulp_le(ca, cb, max_ulp, &format!("{} [component {}]", ctx, i));
    }
}

#[track_caller]
pub fn assert_matrix_ulp_le(a: &Matrix3, b: &Matrix3, max_ulp: u64, ctx: &str) {
    for (i, (ra, rb)) in a.rows().iter().zip(b.rows().iter()).enumerate() {
        assert_vector_ulp_le(ra, rb, max_ulp, &format!("{} [row {}]", ctx, i));
    }
}

#[macro_export]
macro_rules! assert_ulp_lt {
    ($a:expr, $b:expr, $max_ulp:expr) => {
        $crate::test_helpers::assert_ulp_le(
            $a,
            $b,
            $max_ulp,
            &format!(
                "ULP check failed: {} vs {} (max_ulp={})",
                stringify!($a),
                stringify!($b),
                $max_ulp
            ),
        )
    };
    ($a:expr, $b:expr, $max_ulp:expr, $($arg:tt)*) => {
        $crate::test_helpers::assert_ulp_le($a, $b, $max_ulp, &format!($($arg)*))
    };
}
