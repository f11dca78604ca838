//! 3x3 matrices built from three [`Vector3`] rows.
//!
//! [`Matrix3`] owns its rows and synthesizes columns on demand. Its arithmetic
//! mirrors [`Vector3`]: `+` and `-` work row by row, and `*` / `/` between two
//! matrices are row-wise Hadamard operations, NOT the matrix product. Use the
//! determinant and the row/column accessors for the linear-algebra side.
//!
//! ```
//! use isometry_core::{Matrix3, Vector3};
//!
//! let m = Matrix3::from_row_major([
//!     1.0, 2.0, 3.0,
//!     4.0, 5.0, 6.0,
//!     7.0, 8.0, 10.0,
//! ]);
//!
//! assert_eq!(m.row(1).unwrap(), &Vector3::new(4.0, 5.0, 6.0));
//! assert_eq!(m.col(2).unwrap(), Vector3::new(3.0, 6.0, 10.0));
//! assert_eq!(m.det(), -3.0);
//!
//! // Row-wise Hadamard, not the matrix product:
//! assert_eq!(Matrix3::IDENTITY * m, Matrix3::from_row_major([
//!     1.0, 0.0, 0.0,
//!     0.0, 5.0, 0.0,
//!     0.0, 0.0, 10.0,
//! ]));
//! ```
//!
//! # Storage Layout
//!
//! Rows are stored in order; the element at row `i`, column `j` is `m[i][j]`.
//! `m[i]` yields the row itself and panics out of range, while
//! [`row`](Matrix3::row), [`row_mut`](Matrix3::row_mut) and [`col`](Matrix3::col)
//! return [`IsometryError::OutOfRange`](crate::IsometryError::OutOfRange) instead.

use super::Vector3;
use crate::constants::MATRIX_ELEMENTS;
use crate::validate::{validate_index, validate_literal};
use crate::IsometryResult;
use std::fmt;

/// A 3x3 matrix stored as three row vectors.
///
/// ```
/// use isometry_core::{Matrix3, Vector3};
///
/// let from_rows = Matrix3::new(Vector3::UNIT_X, Vector3::UNIT_Y, Vector3::UNIT_Z);
/// let from_literal = Matrix3::from_slice(&[
///     1.0, 0.0, 0.0,
///     0.0, 1.0, 0.0,
///     0.0, 0.0, 1.0,
/// ]).unwrap();
///
/// assert_eq!(from_rows, Matrix3::IDENTITY);
/// assert_eq!(from_literal, Matrix3::IDENTITY);
/// ```
// Equality is row-wise and inherits the Vector3 tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Matrix3 {
    rows: [Vector3; 3],
}

impl Matrix3 {
    pub const IDENTITY: Self = Self::new(Vector3::UNIT_X, Vector3::UNIT_Y, Vector3::UNIT_Z);
    pub const ZERO: Self = Self::new(Vector3::ZERO, Vector3::ZERO, Vector3::ZERO);
    pub const ONES: Self = Self::from_array([[1.0, 1.0, 1.0], [1.0, 1.0, 1.0], [1.0, 1.0, 1.0]]);

    #[inline]
    pub const fn new(r1: Vector3, r2: Vector3, r3: Vector3) -> Self {
        Self { rows: [r1, r2, r3] }
    }

    /// Creates a matrix from a row-major 3x3 array: `elements[i][j]` is row `i`,
    /// column `j`.
    pub const fn from_array(elements: [[f64; 3]; 3]) -> Self {
        Self::new(
            Vector3::from_array(elements[0]),
            Vector3::from_array(elements[1]),
            Vector3::from_array(elements[2]),
        )
    }

    /// Creates a matrix from nine scalars in row-major order.
    pub const fn from_row_major(e: [f64; 9]) -> Self {
        Self::from_array([[e[0], e[1], e[2]], [e[3], e[4], e[5]], [e[6], e[7], e[8]]])
    }

    /// Creates a matrix from a literal of exactly nine values in row-major order.
    ///
    /// Any other length is rejected with
    /// [`IsometryError::InvalidArgument`](crate::IsometryError::InvalidArgument).
    pub fn from_slice(values: &[f64]) -> IsometryResult<Self> {
        validate_literal::<MATRIX_ELEMENTS>("Matrix3::from_slice", values)
            .map(Self::from_row_major)
    }

    pub fn to_array(&self) -> [[f64; 3]; 3] {
        [
            self.rows[0].to_array(),
            self.rows[1].to_array(),
            self.rows[2].to_array(),
        ]
    }

    pub fn rows(&self) -> &[Vector3; 3] {
        &self.rows
    }

    /// Returns row `index`.
    pub fn row(&self, index: usize) -> IsometryResult<&Vector3> {
        let index = validate_index("Matrix3::row", index)?;
        Ok(&self.rows[index])
    }

    /// Returns row `index` for in-place modification.
    pub fn row_mut(&mut self, index: usize) -> IsometryResult<&mut Vector3> {
        let index = validate_index("Matrix3::row_mut", index)?;
        Ok(&mut self.rows[index])
    }

    /// Returns column `index`, assembled from element `index` of each row.
    pub fn col(&self, index: usize) -> IsometryResult<Vector3> {
        let index = validate_index("Matrix3::col", index)?;
        Ok(self.col_unchecked(index))
    }

    pub fn transpose(&self) -> Self {
        Self::new(
            self.col_unchecked(0),
            self.col_unchecked(1),
            self.col_unchecked(2),
        )
    }

    /// Computes the determinant by cofactor expansion along the first row.
    ///
    /// ```
    /// use isometry_core::Matrix3;
    ///
    /// assert_eq!(Matrix3::IDENTITY.det(), 1.0);
    /// assert_eq!(Matrix3::ZERO.det(), 0.0);
    /// assert_eq!(Matrix3::ONES.det(), 0.0);
    /// ```
    pub fn det(&self) -> f64 {
        let [r1, r2, r3] = &self.rows;

        r1[0] * (r2[1] * r3[2] - r2[2] * r3[1]) - r1[1] * (r2[0] * r3[2] - r2[2] * r3[0])
            + r1[2] * (r2[0] * r3[1] - r2[1] * r3[0])
    }

    /// Row-wise comparison at a caller-chosen ULP multiplier.
    pub fn almost_eq(&self, other: &Self, resolution: u32) -> bool {
        self.rows
            .iter()
            .zip(other.rows.iter())
            .all(|(a, b)| a.almost_eq(b, resolution))
    }

    fn col_unchecked(&self, index: usize) -> Vector3 {
        Vector3::new(
            self.rows[0][index],
            self.rows[1][index],
            self.rows[2][index],
        )
    }

    fn map_rows(&self, f: impl Fn(Vector3) -> Vector3) -> Self {
        Self::new(f(self.rows[0]), f(self.rows[1]), f(self.rows[2]))
    }

    fn zip_rows(&self, other: &Self, f: impl Fn(Vector3, Vector3) -> Vector3) -> Self {
        Self::new(
            f(self.rows[0], other.rows[0]),
            f(self.rows[1], other.rows[1]),
            f(self.rows[2], other.rows[2]),
        )
    }
}

impl From<[[f64; 3]; 3]> for Matrix3 {
    fn from(elements: [[f64; 3]; 3]) -> Self {
        Self::from_array(elements)
    }
}

impl TryFrom<&[f64]> for Matrix3 {
    type Error = crate::IsometryError;

    fn try_from(values: &[f64]) -> IsometryResult<Self> {
        Self::from_slice(values)
    }
}

macro_rules! impl_row_wise_op {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $op:tt) => {
        impl std::ops::$trait for Matrix3 {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self {
                self.zip_rows(&rhs, |a, b| a $op b)
            }
        }

        impl std::ops::$trait<&Matrix3> for Matrix3 {
            type Output = Matrix3;

            fn $method(self, rhs: &Matrix3) -> Matrix3 {
                self.zip_rows(rhs, |a, b| a $op b)
            }
        }

        impl std::ops::$trait<Matrix3> for &Matrix3 {
            type Output = Matrix3;

            fn $method(self, rhs: Matrix3) -> Matrix3 {
                self.zip_rows(&rhs, |a, b| a $op b)
            }
        }

        impl std::ops::$trait<&Matrix3> for &Matrix3 {
            type Output = Matrix3;

            fn $method(self, rhs: &Matrix3) -> Matrix3 {
                self.zip_rows(rhs, |a, b| a $op b)
            }
        }

        impl std::ops::$assign_trait for Matrix3 {
            fn $assign_method(&mut self, rhs: Self) {
                *self = self.zip_rows(&rhs, |a, b| a $op b);
            }
        }

        impl std::ops::$assign_trait<&Matrix3> for Matrix3 {
            fn $assign_method(&mut self, rhs: &Matrix3) {
                *self = self.zip_rows(rhs, |a, b| a $op b);
            }
        }
    };
}

impl_row_wise_op!(Add, add, AddAssign, add_assign, +);
impl_row_wise_op!(Sub, sub, SubAssign, sub_assign, -);
impl_row_wise_op!(Mul, mul, MulAssign, mul_assign, *);
impl_row_wise_op!(Div, div, DivAssign, div_assign, /);

/// Matrix * scalar
impl std::ops::Mul<f64> for Matrix3 {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        self.map_rows(|row| row * scalar)
    }
}

/// scalar * Matrix
impl std::ops::Mul<Matrix3> for f64 {
    type Output = Matrix3;

    fn mul(self, matrix: Matrix3) -> Matrix3 {
        matrix * self
    }
}

/// Matrix *= scalar
impl std::ops::MulAssign<f64> for Matrix3 {
    fn mul_assign(&mut self, scalar: f64) {
        for row in &mut self.rows {
            *row *= scalar;
        }
    }
}

impl std::ops::Neg for Matrix3 {
    type Output = Self;

    fn neg(self) -> Self {
        self.map_rows(|row| -row)
    }
}

/// m[i] row access (panics if i > 2)
impl std::ops::Index<usize> for Matrix3 {
    type Output = Vector3;

    fn index(&self, index: usize) -> &Vector3 {
        match self.rows.get(index) {
            Some(row) => row,
            None => panic!("Matrix3 row index out of bounds: {}", index),
        }
    }
}

/// m[i] = row mutable access (panics if i > 2)
impl std::ops::IndexMut<usize> for Matrix3 {
    fn index_mut(&mut self, index: usize) -> &mut Vector3 {
        match self.rows.get_mut(index) {
            Some(row) => row,
            None => panic!("Matrix3 row index out of bounds: {}", index),
        }
    }
}

impl fmt::Display for Matrix3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Matrix3:")?;
        for row in &self.rows {
            writeln!(f, "  {}", row)?;
        }
        Ok(())
    }
}
