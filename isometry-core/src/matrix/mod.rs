//! 3D vectors and 3x3 matrices.
//!
//! - [`Vector3`]: three `f64` components with elementwise arithmetic
//! - [`Matrix3`]: three [`Vector3`] rows with row-wise arithmetic and a determinant

mod matrix3;
mod vector3;

pub use matrix3::Matrix3;
pub use vector3::Vector3;
