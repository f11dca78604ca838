/// ULP multiplier used by every equality comparison in the crate.
///
/// Two components compare equal when they differ by at most
/// `f64::EPSILON * |a + b| * RESOLUTION`. Chained arithmetic that drifts further
/// than that needs [`almost_equal`](crate::math::almost_equal) with a larger value.
pub const RESOLUTION: u32 = 4;

/// Number of components in a [`Vector3`](crate::Vector3) and rows in a
/// [`Matrix3`](crate::Matrix3).
pub const DIMENSION: usize = 3;

pub const MATRIX_ELEMENTS: usize = DIMENSION * DIMENSION;
