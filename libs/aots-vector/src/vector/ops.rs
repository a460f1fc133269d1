//! Typed arithmetic operators for [`Vector3`].
//!
//! Only the operators that mean something for a three-component vector are
//! implemented. `%`, `<<`, `&`, `!` and friends are intentionally absent, so
//! using them on a vector is a compile error rather than a silent result.

use super::Vector3;
use std::ops::{Add, AddAssign, Div, Index, IndexMut, Mul, Neg, Sub, SubAssign};

/// Vector + Vector → Vector
impl Add for Vector3 {
    type Output = Vector3;

    fn add(self, rhs: Self) -> Self {
        Self::from(self.inner + rhs.inner)
    }
}

/// &Vector + &Vector → Vector
impl Add<&Vector3> for &Vector3 {
    type Output = Vector3;

    fn add(self, rhs: &Vector3) -> Vector3 {
        *self + *rhs
    }
}

/// Vector - Vector → Vector, defined as `a + (-b)`
impl Sub for Vector3 {
    type Output = Vector3;

    fn sub(self, rhs: Self) -> Self {
        self + (-rhs)
    }
}

/// &Vector - &Vector → Vector
impl Sub<&Vector3> for &Vector3 {
    type Output = Vector3;

    fn sub(self, rhs: &Vector3) -> Vector3 {
        *self - *rhs
    }
}

/// Vector * Vector → dot product
impl Mul for Vector3 {
    type Output = f64;

    fn mul(self, rhs: Self) -> f64 {
        self.dot(&rhs)
    }
}

/// &Vector * &Vector → dot product
impl Mul<&Vector3> for &Vector3 {
    type Output = f64;

    fn mul(self, rhs: &Vector3) -> f64 {
        self.dot(rhs)
    }
}

/// Vector * scalar → Vector
impl Mul<f64> for Vector3 {
    type Output = Vector3;

    fn mul(self, k: f64) -> Self {
        Self::from(self.inner * k)
    }
}

/// scalar * Vector → Vector, same as `Vector * scalar`
impl Mul<Vector3> for f64 {
    type Output = Vector3;

    fn mul(self, v: Vector3) -> Vector3 {
        v * self
    }
}

/// Vector / scalar → Vector, scaled by the reciprocal
///
/// Follows IEEE semantics: dividing by zero yields infinite or NaN
/// components. Use [`Vector3::checked_div`] for an error instead.
impl Div<f64> for Vector3 {
    type Output = Vector3;

    fn div(self, k: f64) -> Self {
        self * (1.0 / k)
    }
}

/// -Vector → Vector
impl Neg for Vector3 {
    type Output = Vector3;

    fn neg(self) -> Self {
        Self::from(-self.inner)
    }
}

/// -&Vector → Vector
impl Neg for &Vector3 {
    type Output = Vector3;

    fn neg(self) -> Vector3 {
        -*self
    }
}

/// Vector += Vector, overwriting the receiver's components
impl AddAssign for Vector3 {
    fn add_assign(&mut self, rhs: Self) {
        let sum = *self + rhs;
        self.inner = sum.inner;
    }
}

/// Vector -= Vector, overwriting the receiver's components
impl SubAssign for Vector3 {
    fn sub_assign(&mut self, rhs: Self) {
        let difference = *self - rhs;
        self.inner = difference.inner;
    }
}

/// v[i] indexing (panics if i > 2)
impl Index<usize> for Vector3 {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.inner[index]
    }
}

/// v[i] = value mutable indexing (panics if i > 2)
impl IndexMut<usize> for Vector3 {
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        &mut self.inner[index]
    }
}
