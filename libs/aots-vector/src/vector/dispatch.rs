//! Operator dispatch over dynamic [`Value`] operands.
//!
//! Each entry point covers one [`OperatorForm`]. Operators a vector does not
//! define return [`VectorError::Unsupported`]; they never fall back to a
//! default value.

use super::Vector3;
use crate::error::{VectorError, VectorResult};
use crate::operator::{BinaryOp, OperatorForm, UnaryOp};
use crate::value::{Operand, Value};

impl Vector3 {
    /// Evaluates `self ∘ rhs`.
    ///
    /// ```
    /// use aots_vector::{BinaryOp, Value, Vector3};
    ///
    /// let v = Vector3::new(1.0, 2.0, 3.0);
    /// let w = Value::from(Vector3::new(4.0, 5.0, 6.0));
    /// assert_eq!(v.binary(BinaryOp::Add, &w), Ok(Value::from(Vector3::new(5.0, 7.0, 9.0))));
    /// assert_eq!(v.binary(BinaryOp::Mul, &w), Ok(Value::Float(32.0)));
    /// assert!(v.binary(BinaryOp::Pow, &Value::from(2)).unwrap_err().is_unsupported());
    /// ```
    pub fn binary(&self, op: BinaryOp, rhs: &Value) -> VectorResult<Value> {
        match op {
            BinaryOp::Add => self.add_value(rhs).map(Value::Vector),
            BinaryOp::Sub => self.sub_value(rhs).map(Value::Vector),
            BinaryOp::Mul => self.mul_value(rhs),
            BinaryOp::MatMul => self.cross_value(rhs).map(Value::Vector),
            BinaryOp::TrueDiv => self.div_value(rhs).map(Value::Vector),
            unsupported => Err(VectorError::unsupported(unsupported, OperatorForm::Forward)),
        }
    }

    /// Evaluates `lhs ∘ self`, where the vector is the right operand.
    ///
    /// Add and subtract require `lhs` to be a vector. Multiply and cross
    /// product reuse the forward operator with the operands swapped, so
    /// `k * v == v * k` and `u @ v` evaluates as `v @ u` (no sign flip).
    pub fn reflected(&self, op: BinaryOp, lhs: &Value) -> VectorResult<Value> {
        match op {
            BinaryOp::Add => match lhs {
                Value::Vector(left) => Ok(Value::Vector(*left + *self)),
                other => Err(VectorError::type_mismatch(format!(
                    "cannot add a {} and a vector",
                    other.type_name()
                ))),
            },
            BinaryOp::Sub => match lhs {
                Value::Vector(left) => Ok(Value::Vector(*left - *self)),
                other => Err(VectorError::type_mismatch(format!(
                    "cannot subtract a vector from a {}",
                    other.type_name()
                ))),
            },
            BinaryOp::Mul => self.mul_value(lhs),
            BinaryOp::MatMul => self.cross_value(lhs).map(Value::Vector),
            unsupported => Err(VectorError::unsupported(
                unsupported,
                OperatorForm::Reflected,
            )),
        }
    }

    /// Evaluates `self ∘= rhs`, overwriting this vector's components.
    ///
    /// Only `+=` and `-=` are defined. On error the vector is unchanged.
    ///
    /// ```
    /// use aots_vector::{BinaryOp, Value, Vector3};
    ///
    /// let mut v = Vector3::new(1.0, 1.0, 1.0);
    /// v.in_place(BinaryOp::Add, &Value::from(Vector3::new(1.0, 2.0, 3.0))).unwrap();
    /// assert_eq!(v, Vector3::new(2.0, 3.0, 4.0));
    /// assert!(v.in_place(BinaryOp::Mul, &Value::from(2)).unwrap_err().is_unsupported());
    /// ```
    pub fn in_place(&mut self, op: BinaryOp, rhs: &Value) -> VectorResult<()> {
        let result = match op {
            BinaryOp::Add => self.add_value(rhs)?,
            BinaryOp::Sub => self.sub_value(rhs)?,
            unsupported => {
                return Err(VectorError::unsupported(unsupported, OperatorForm::InPlace))
            }
        };
        self.inner = result.inner;
        Ok(())
    }

    /// Evaluates a unary operator or conversion.
    ///
    /// ```
    /// use aots_vector::{UnaryOp, Value, Vector3};
    ///
    /// let v = Vector3::new(3.0, 4.0, 0.0);
    /// assert_eq!(v.unary(UnaryOp::Abs), Ok(Value::Float(5.0)));
    /// assert_eq!(v.unary(UnaryOp::Float), Ok(Value::Float(5.0)));
    /// assert!(v.unary(UnaryOp::Int).unwrap_err().is_unsupported());
    /// ```
    pub fn unary(&self, op: UnaryOp) -> VectorResult<Value> {
        match op {
            UnaryOp::Neg => Ok(Value::Vector(-*self)),
            UnaryOp::Pos => Ok(Value::Vector(self.identity())),
            UnaryOp::Abs => Ok(Value::Float(self.magnitude())),
            UnaryOp::Float => Ok(Value::Float(self.to_f64())),
            unsupported => Err(VectorError::unsupported(unsupported, OperatorForm::Forward)),
        }
    }

    fn add_value(&self, rhs: &Value) -> VectorResult<Vector3> {
        match rhs {
            Value::Vector(other) => Ok(*self + *other),
            other => Err(VectorError::type_mismatch(format!(
                "cannot add a vector and a {}",
                other.type_name()
            ))),
        }
    }

    fn sub_value(&self, rhs: &Value) -> VectorResult<Vector3> {
        match rhs {
            Value::Vector(other) => Ok(*self + (-*other)),
            other => Err(VectorError::type_mismatch(format!(
                "cannot subtract a {} from a vector",
                other.type_name()
            ))),
        }
    }

    fn mul_value(&self, rhs: &Value) -> VectorResult<Value> {
        let operand = Operand::try_from(rhs).map_err(|_| {
            VectorError::type_mismatch(format!(
                "cannot multiply a vector by a {} ({rhs})",
                rhs.type_name()
            ))
        })?;
        Ok(Value::from(self.multiply(operand)))
    }

    fn cross_value(&self, rhs: &Value) -> VectorResult<Vector3> {
        match rhs {
            Value::Vector(other) => Ok(self.cross(other)),
            other => Err(VectorError::type_mismatch(format!(
                "cross product is not defined between a vector and a {}",
                other.type_name()
            ))),
        }
    }

    fn div_value(&self, rhs: &Value) -> VectorResult<Vector3> {
        let operand = match rhs {
            Value::Vector(other) => Operand::Vector(*other),
            scalar => scalar.to_f64().map(Operand::Scalar).map_err(|_| {
                VectorError::type_mismatch(format!(
                    "cannot divide a vector by a {} ({rhs})",
                    rhs.type_name()
                ))
            })?,
        };
        self.divide(operand)
    }
}
