//! Three-component vector backed by `glam::DVec3`.
//!
//! Storage is delegated to `glam` so dot/cross/length share its
//! implementations, while this wrapper owns the checked, loosely typed API:
//! construction from numeric-like inputs, integer indexing and the
//! explicit operator contract.

mod dispatch;
mod ops;
mod repr;

use crate::error::{VectorError, VectorResult};
use crate::value::{Operand, Value};
use config::constants::{within, VectorConfig, EPSILON};
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// A vector of exactly three `f64` components.
///
/// # Construction
///
/// ```
/// use aots_vector::Vector3;
///
/// // Typed construction
/// let v = Vector3::new(1.0, 2.0, 3.0);
///
/// // From numeric-like inputs, each converted to float
/// let w = Vector3::try_new(1, "2", 3.0).unwrap();
/// assert_eq!(v, w);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vector3 {
    inner: DVec3,
}

impl Vector3 {
    /// Creates a new vector from x, y, z components.
    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            inner: DVec3::new(x, y, z),
        }
    }

    /// Creates a vector from three numeric-like inputs.
    ///
    /// Each input is converted to a float; the first failure is returned as
    /// [`VectorError::ValueConversion`].
    ///
    /// ```
    /// use aots_vector::{Vector3, VectorError};
    ///
    /// let v = Vector3::try_new(1, 2.5, true).unwrap();
    /// assert_eq!(v, Vector3::new(1.0, 2.5, 1.0));
    ///
    /// assert!(matches!(
    ///     Vector3::try_new(1, "two", 3),
    ///     Err(VectorError::ValueConversion(_))
    /// ));
    /// ```
    pub fn try_new(
        r1: impl Into<Value>,
        r2: impl Into<Value>,
        r3: impl Into<Value>,
    ) -> VectorResult<Self> {
        Ok(Self::new(
            r1.into().to_f64()?,
            r2.into().to_f64()?,
            r3.into().to_f64()?,
        ))
    }

    /// Returns the zero vector `[0, 0, 0]`.
    #[inline]
    pub fn zero() -> Self {
        Self::default()
    }

    /// First component.
    #[inline]
    pub fn x(&self) -> f64 {
        self.inner.x
    }

    /// Second component.
    #[inline]
    pub fn y(&self) -> f64 {
        self.inner.y
    }

    /// Third component.
    #[inline]
    pub fn z(&self) -> f64 {
        self.inner.z
    }

    /// Returns the components as a `[f64; 3]` array.
    #[inline]
    pub fn to_array(&self) -> [f64; 3] {
        self.inner.to_array()
    }

    /// Returns the component at `index`.
    ///
    /// The index must be an integer in `0..=2` or a boolean (`false` is 0,
    /// `true` is 1); other kinds fail with
    /// [`VectorError::TypeMismatch`], other integers with
    /// [`VectorError::IndexOutOfRange`].
    ///
    /// ```
    /// use aots_vector::{Vector3, VectorError};
    ///
    /// let v = Vector3::new(1.0, 2.0, 3.0);
    /// assert_eq!(v.get(1), Ok(2.0));
    /// assert_eq!(v.get(true), Ok(2.0));
    /// assert!(matches!(v.get(1.0), Err(VectorError::TypeMismatch(_))));
    /// assert!(matches!(v.get(-1), Err(VectorError::IndexOutOfRange { .. })));
    /// ```
    pub fn get(&self, index: impl Into<Value>) -> VectorResult<f64> {
        let index = index.into().to_index()?;
        Ok(self.inner[index])
    }

    /// Stores `value`, converted to a float, at `index`.
    ///
    /// The index is validated before the value is converted. On any error
    /// the vector is left unchanged.
    ///
    /// ```
    /// use aots_vector::Vector3;
    ///
    /// let mut v = Vector3::zero();
    /// v.set(2, "4.5").unwrap();
    /// assert_eq!(v.z(), 4.5);
    /// ```
    pub fn set(&mut self, index: impl Into<Value>, value: impl Into<Value>) -> VectorResult<()> {
        let index = index.into().to_index()?;
        self.inner[index] = value.into().to_f64()?;
        Ok(())
    }

    /// Computes the dot product with another vector.
    ///
    /// ```
    /// use aots_vector::Vector3;
    ///
    /// let a = Vector3::new(1.0, 2.0, 3.0);
    /// let b = Vector3::new(4.0, 5.0, 6.0);
    /// assert_eq!(a.dot(&b), 32.0);
    /// ```
    #[inline]
    pub fn dot(&self, other: &Self) -> f64 {
        self.inner.dot(other.inner)
    }

    /// Computes the right-handed cross product with another vector.
    ///
    /// ```
    /// use aots_vector::Vector3;
    ///
    /// let x = Vector3::new(1.0, 0.0, 0.0);
    /// let y = Vector3::new(0.0, 1.0, 0.0);
    /// assert_eq!(x.cross(&y), Vector3::new(0.0, 0.0, 1.0));
    /// ```
    #[inline]
    pub fn cross(&self, other: &Self) -> Self {
        Self {
            inner: self.inner.cross(other.inner),
        }
    }

    /// Euclidean norm `sqrt(x² + y² + z²)`.
    #[inline]
    pub fn magnitude(&self) -> f64 {
        self.inner.length()
    }

    /// Float conversion of a vector, which is its magnitude.
    #[inline]
    pub fn to_f64(&self) -> f64 {
        self.magnitude()
    }

    /// Unary plus: a new vector with the same components.
    #[inline]
    pub fn identity(&self) -> Self {
        Self::new(self.x(), self.y(), self.z())
    }

    /// Multiplies by either kind of operand.
    ///
    /// A vector operand yields the dot product as [`Operand::Scalar`]; a
    /// scalar operand yields the scaled vector as [`Operand::Vector`].
    ///
    /// ```
    /// use aots_vector::{Operand, Vector3};
    ///
    /// let v = Vector3::new(1.0, 2.0, 3.0);
    /// assert_eq!(v.multiply(v), Operand::Scalar(14.0));
    /// assert_eq!(v.multiply(2.0), Operand::Vector(Vector3::new(2.0, 4.0, 6.0)));
    /// ```
    pub fn multiply(&self, rhs: impl Into<Operand>) -> Operand {
        match rhs.into() {
            Operand::Vector(other) => Operand::Scalar(self.dot(&other)),
            Operand::Scalar(k) => Operand::Vector(*self * k),
        }
    }

    /// Divides by a scalar operand.
    ///
    /// Dividing by a vector is a [`VectorError::TypeMismatch`]; dividing by
    /// zero is [`VectorError::DivisionByZero`].
    pub fn divide(&self, rhs: impl Into<Operand>) -> VectorResult<Self> {
        match rhs.into() {
            Operand::Vector(_) => Err(VectorError::type_mismatch(
                "cannot divide a vector by another vector",
            )),
            Operand::Scalar(k) => self.checked_div(k),
        }
    }

    /// Scales by the reciprocal of `k`, failing on zero instead of producing
    /// infinite components.
    pub fn checked_div(&self, k: f64) -> VectorResult<Self> {
        if k == 0.0 {
            return Err(VectorError::DivisionByZero);
        }
        Ok(*self / k)
    }

    /// Component-wise comparison within [`EPSILON`].
    pub fn approx_eq(&self, other: &Self) -> bool {
        self.approx_eq_within(other, EPSILON)
    }

    /// Component-wise comparison within the configured tolerance.
    ///
    /// ```
    /// use aots_vector::Vector3;
    /// use config::VectorConfig;
    ///
    /// let cfg = VectorConfig::new(0.01).unwrap();
    /// let a = Vector3::new(1.0, 2.0, 3.0);
    /// let b = Vector3::new(1.001, 2.0, 3.0);
    /// assert!(a.approx_eq_with(&b, &cfg));
    /// assert!(!a.approx_eq(&b));
    /// ```
    pub fn approx_eq_with(&self, other: &Self, config: &VectorConfig) -> bool {
        self.approx_eq_within(other, config.tolerance)
    }

    fn approx_eq_within(&self, other: &Self, tolerance: f64) -> bool {
        self.to_array()
            .iter()
            .zip(other.to_array())
            .all(|(a, b)| within(*a, b, tolerance))
    }
}

impl From<[f64; 3]> for Vector3 {
    fn from(arr: [f64; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }
}

impl From<Vector3> for [f64; 3] {
    fn from(v: Vector3) -> Self {
        v.to_array()
    }
}

impl From<DVec3> for Vector3 {
    fn from(inner: DVec3) -> Self {
        Self { inner }
    }
}

impl From<Vector3> for DVec3 {
    fn from(v: Vector3) -> Self {
        v.inner
    }
}
