//! 3D vector and 3x3 matrix value types.
//!
//! `isometry-core` provides two small `Copy` types, [`Vector3`] and [`Matrix3`],
//! with operator overloads, checked indexing, named constants, and an equality
//! that tolerates floating-point rounding.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`matrix`] | [`Vector3`] and [`Matrix3`] |
//! | [`math`] | [`almost_equal`](math::almost_equal), the ULP-scaled comparison |
//! | [`constants`] | [`RESOLUTION`](constants::RESOLUTION) and dimensions |
//! | [`errors`] | [`IsometryError`] and [`IsometryResult`] |
//! | [`test_helpers`] | ULP assertions for tests |
//!
//! # Elementwise Semantics
//!
//! `*` and `/` between two vectors (or two matrices) operate component by
//! component. The geometric products are named methods:
//!
//! ```
//! use isometry_core::{Matrix3, Vector3};
//!
//! let v = Vector3::new(3.0, 4.0, 0.0);
//! assert_eq!(v.norm(), 5.0);
//! assert_eq!(v * v, Vector3::new(9.0, 16.0, 0.0));
//! assert_eq!(v.dot(&v), 25.0);
//! assert_eq!(Vector3::UNIT_X.cross(&Vector3::UNIT_Y), Vector3::UNIT_Z);
//!
//! assert_eq!(Matrix3::IDENTITY.det(), 1.0);
//! ```
//!
//! # Errors
//!
//! Checked accessors and literal constructors return [`IsometryResult`].
//! Arithmetic never fails: division by a zero component yields infinity or NaN.
//!
//! ```
//! use isometry_core::{Matrix3, Vector3};
//!
//! assert!(Vector3::from_slice(&[1.0, 2.0]).unwrap_err().is_invalid_argument());
//! assert!(Matrix3::IDENTITY.col(3).unwrap_err().is_out_of_range());
//! ```

pub mod constants;
pub mod errors;
pub mod math;
pub mod matrix;
mod validate;

pub use errors::{IsometryError, IsometryResult};
pub use matrix::{Matrix3, Vector3};

pub mod test_helpers;
