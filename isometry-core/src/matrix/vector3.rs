//! 3D vectors with elementwise arithmetic and ULP-tolerant equality.
//!
//! [`Vector3`] is a plain `Copy` value: three `f64` components stored inline.
//! Arithmetic is componentwise throughout, including `*` and `/` between two
//! vectors, which compute the Hadamard product and quotient. The geometric
//! products are the named methods [`dot`](Vector3::dot) and
//! [`cross`](Vector3::cross).
//!
//! ```
//! use isometry_core::Vector3;
//!
//! let a = Vector3::new(1.0, 2.0, 3.0);
//! let b = Vector3::new(4.0, 5.0, 6.0);
//!
//! assert_eq!(a * b, Vector3::new(4.0, 10.0, 18.0));  // componentwise
//! assert_eq!(a.dot(&b), 32.0);                        // inner product
//! assert_eq!(Vector3::UNIT_X.cross(&Vector3::UNIT_Y), Vector3::UNIT_Z);
//! ```
//!
//! # Equality
//!
//! `==` compares each component pair with
//! [`almost_equal`](crate::math::almost_equal) at [`RESOLUTION`] ULPs, so
//! results of chained arithmetic still compare equal to their exact values.
//! Vectors also compare against `[f64; 3]` arrays and `&[f64]` slices; a slice
//! whose length is not 3 is simply unequal.
//!
//! ```
//! use isometry_core::Vector3;
//!
//! let v = Vector3::new(0.1, 0.2, 0.3) * 3.0;
//! assert_eq!(v, [0.3, 0.6, 0.9]);
//! assert_ne!(v, &[0.3, 0.6][..]);
//! ```
//!
//! # Indexing
//!
//! [`get`](Vector3::get), [`get_mut`](Vector3::get_mut) and [`set`](Vector3::set)
//! return [`IsometryError::OutOfRange`](crate::IsometryError::OutOfRange) for any
//! index other than 0, 1 or 2. The `v[i]` syntax panics on the same input.
use crate::constants::{DIMENSION, RESOLUTION};
use crate::math::almost_equal;
use crate::validate::{validate_index, validate_literal};
use crate::IsometryResult;
use std::fmt;

/// A 3D vector of `f64` components.
///
/// ```
/// use isometry_core::Vector3;
///
/// let v = Vector3::new(1.0, 2.0, 3.0);
/// let origin = Vector3::default();
/// let from_literal = Vector3::from_slice(&[1.0, 2.0, 3.0]).unwrap();
///
/// assert_eq!(origin, Vector3::ZERO);
/// assert_eq!(from_literal, v);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Vector3 {
    x: f64,
    y: f64,
    z: f64,
}

impl Vector3 {
    /// `(0, 0, 0)`
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    /// `(1, 0, 0)`
    pub const UNIT_X: Self = Self::new(1.0, 0.0, 0.0);
    /// `(0, 1, 0)`
    pub const UNIT_Y: Self = Self::new(0.0, 1.0, 0.0);
    /// `(0, 0, 1)`
    pub const UNIT_Z: Self = Self::new(0.0, 0.0, 1.0);

    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub const fn from_array(arr: [f64; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }

    /// Creates a vector from a literal of exactly three values.
    ///
    /// Any other length is rejected with
    /// [`IsometryError::InvalidArgument`](crate::IsometryError::InvalidArgument).
    ///
    /// ```
    /// use isometry_core::Vector3;
    ///
    /// assert!(Vector3::from_slice(&[1.0, 2.0, 3.0]).is_ok());
    /// assert!(Vector3::from_slice(&[1.0, 2.0, 3.0, 4.0]).is_err());
    /// ```
    pub fn from_slice(values: &[f64]) -> IsometryResult<Self> {
        validate_literal::<DIMENSION>("Vector3::from_slice", values).map(Self::from_array)
    }

    #[inline]
    pub fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.y
    }

    #[inline]
    pub fn z(&self) -> f64 {
        self.z
    }

    #[inline]
    pub fn x_mut(&mut self) -> &mut f64 {
        &mut self.x
    }

    #[inline]
    pub fn y_mut(&mut self) -> &mut f64 {
        &mut self.y
    }

    #[inline]
    pub fn z_mut(&mut self) -> &mut f64 {
        &mut self.z
    }

    #[inline]
    pub fn set_x(&mut self, value: f64) {
        self.x = value;
    }

    #[inline]
    pub fn set_y(&mut self, value: f64) {
        self.y = value;
    }

    #[inline]
    pub fn set_z(&mut self, value: f64) {
        self.z = value;
    }

    /// Returns the component at the given index (0=x, 1=y, 2=z).
    pub fn get(&self, index: usize) -> IsometryResult<f64> {
        validate_index("Vector3::get", index).map(|i| self[i])
    }

    /// Returns a mutable reference to the component at the given index.
    pub fn get_mut(&mut self, index: usize) -> IsometryResult<&mut f64> {
        let index = validate_index("Vector3::get_mut", index)?;
        Ok(&mut self[index])
    }

    /// Sets the component at the given index (0=x, 1=y, 2=z).
    pub fn set(&mut self, index: usize, value: f64) -> IsometryResult<()> {
        let index = validate_index("Vector3::set", index)?;
        self[index] = value;
        Ok(())
    }

    /// Inner product `x*rhs.x + y*rhs.y + z*rhs.z`.
    #[inline]
    pub fn dot(&self, rhs: &Self) -> f64 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    /// Right-handed cross product.
    ///
    /// ```
    /// use isometry_core::Vector3;
    ///
    /// assert_eq!(Vector3::UNIT_Y.cross(&Vector3::UNIT_Z), Vector3::UNIT_X);
    /// assert_eq!(Vector3::UNIT_Z.cross(&Vector3::UNIT_X), Vector3::UNIT_Y);
    /// ```
    pub fn cross(&self, rhs: &Self) -> Self {
        Self::new(
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
        )
    }

    /// Euclidean length.
    #[inline]
    pub fn norm(&self) -> f64 {
        libm::sqrt(self.dot(self))
    }

    /// Componentwise comparison at a caller-chosen ULP multiplier.
    ///
    /// `==` is this method with [`RESOLUTION`].
    pub fn almost_eq(&self, other: &Self, resolution: u32) -> bool {
        almost_equal(self.x, other.x, resolution)
            && almost_equal(self.y, other.y, resolution)
            && almost_equal(self.z, other.z, resolution)
    }

}

impl From<[f64; 3]> for Vector3 {
    fn from(arr: [f64; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Vector3> for [f64; 3] {
    fn from(vec: Vector3) -> Self {
        vec.to_array()
    }
}

impl TryFrom<&[f64]> for Vector3 {
    type Error = crate::IsometryError;

    fn try_from(values: &[f64]) -> IsometryResult<Self> {
        Self::from_slice(values)
    }
}

impl PartialEq for Vector3 {
    fn eq(&self, other: &Self) -> bool {
        self.almost_eq(other, RESOLUTION)
    }
}

impl PartialEq<[f64; 3]> for Vector3 {
    fn eq(&self, other: &[f64; 3]) -> bool {
        *self == Self::from_array(*other)
    }
}

impl PartialEq<[f64]> for Vector3 {
    fn eq(&self, other: &[f64]) -> bool {
        match <[f64; 3]>::try_from(other) {
            Ok(arr) => *self == arr,
            Err(_) => false,
        }
    }
}

impl PartialEq<&[f64]> for Vector3 {
    fn eq(&self, other: &&[f64]) -> bool {
        *self == **other
    }
}

macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $op:tt) => {
        impl std::ops::$trait for Vector3 {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self {
                Self::new(self.x $op rhs.x, self.y $op rhs.y, self.z $op rhs.z)
            }
        }

        impl std::ops::$trait<&Vector3> for Vector3 {
            type Output = Vector3;

            fn $method(self, rhs: &Vector3) -> Vector3 {
                self $op *rhs
            }
        }

        impl std::ops::$trait<Vector3> for &Vector3 {
            type Output = Vector3;

            fn $method(self, rhs: Vector3) -> Vector3 {
                *self $op rhs
            }
        }

        impl std::ops::$trait<&Vector3> for &Vector3 {
            type Output = Vector3;

            fn $method(self, rhs: &Vector3) -> Vector3 {
                *self $op *rhs
            }
        }
    };
}

macro_rules! impl_assign_op {
    ($trait:ident, $method:ident, $op:tt) => {
        impl std::ops::$trait for Vector3 {
            fn $method(&mut self, rhs: Self) {
                self.x $op rhs.x;
                self.y $op rhs.y;
                self.z $op rhs.z;
            }
        }

        impl std::ops::$trait<&Vector3> for Vector3 {
            fn $method(&mut self, rhs: &Vector3) {
                *self $op *rhs;
            }
        }
    };
}

impl_binary_op!(Add, add, +);
impl_binary_op!(Sub, sub, -);
// Hadamard product and quotient, not dot/cross.
impl_binary_op!(Mul, mul, *);
impl_binary_op!(Div, div, /);

impl_assign_op!(AddAssign, add_assign, +=);
impl_assign_op!(SubAssign, sub_assign, -=);
impl_assign_op!(MulAssign, mul_assign, *=);
impl_assign_op!(DivAssign, div_assign, /=);

/// Vector * scalar
impl std::ops::Mul<f64> for Vector3 {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

/// scalar * Vector
impl std::ops::Mul<Vector3> for f64 {
    type Output = Vector3;

    fn mul(self, vec: Vector3) -> Vector3 {
        vec * self
    }
}

/// Vector *= scalar
impl std::ops::MulAssign<f64> for Vector3 {
    fn mul_assign(&mut self, scalar: f64) {
        self.x *= scalar;
        self.y *= scalar;
        self.z *= scalar;
    }
}

/// -Vector
impl std::ops::Neg for Vector3 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

/// v[i] indexing (panics if i > 2)
impl std::ops::Index<usize> for Vector3 {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vector3 index out of bounds: {}", index),
        }
    }
}

/// v[i] = value mutable indexing (panics if i > 2)
impl std::ops::IndexMut<usize> for Vector3 {
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("Vector3 index out of bounds: {}", index),
        }
    }
}

/// Lossy debug rendering: each component truncated toward zero.
impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(x: {}, y: {}, z: {})",
            self.x as i32, self.y as i32, self.z as i32
        )
    }
}
