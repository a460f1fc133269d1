//! Loosely typed operands accepted by the dynamic vector API.
//!
//! [`Value`] covers every "numeric-like" input a caller can hand to
//! [`Vector3::try_new`](crate::Vector3::try_new), [`Vector3::get`](crate::Vector3::get)
//! or the operator dispatch. [`Operand`] is the closed, typed set that
//! arithmetic actually works on.

use crate::error::{VectorError, VectorResult};
use crate::vector::Vector3;
use config::constants::DIMENSION;
use std::fmt;

/// A dynamic value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Absence of a value.
    None,
    /// Boolean, converts to `1.0` / `0.0` and indexes as 0 / 1.
    Bool(bool),
    /// Integer, the primary index kind.
    Int(i64),
    /// Float.
    Float(f64),
    /// Text, converted by parsing its trimmed content.
    Str(String),
    /// A vector; converts to a float through its magnitude.
    Vector(Vector3),
}

impl Value {
    /// Short type name used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::None => "none",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "str",
            Value::Vector(_) => "vector",
        }
    }

    /// Converts the value to a float.
    /// - Bool(true) -> 1.0, Bool(false) -> 0.0
    /// - Int / Float -> numeric value
    /// - Str -> parse of the trimmed text, `_` allowed between digits
    /// - Vector -> magnitude
    /// - None -> ValueConversion error
    ///
    /// ```
    /// use aots_vector::{Value, Vector3};
    ///
    /// assert_eq!(Value::from(" 2.5 ").to_f64(), Ok(2.5));
    /// assert_eq!(Value::from("1_000").to_f64(), Ok(1000.0));
    /// assert_eq!(Value::from(true).to_f64(), Ok(1.0));
    /// assert_eq!(Value::from(Vector3::new(3.0, 4.0, 0.0)).to_f64(), Ok(5.0));
    /// assert!(Value::from("abc").to_f64().is_err());
    /// ```
    pub fn to_f64(&self) -> VectorResult<f64> {
        match self {
            Value::Bool(b) => Ok(if *b { 1.0 } else { 0.0 }),
            Value::Int(i) => Ok(*i as f64),
            Value::Float(x) => Ok(*x),
            Value::Str(s) => strip_digit_separators(s.trim())
                .and_then(|digits| digits.parse::<f64>().ok())
                .ok_or_else(|| VectorError::ValueConversion(format!("'{s}'"))),
            Value::Vector(v) => Ok(v.magnitude()),
            Value::None => Err(VectorError::ValueConversion("none".to_string())),
        }
    }

    /// Converts the value to a component index.
    ///
    /// Integers are indices, and so are booleans (`false` is 0, `true` is 1);
    /// anything else is a type mismatch. Integers outside `0..DIMENSION` are
    /// out of range.
    pub fn to_index(&self) -> VectorResult<usize> {
        match self {
            Value::Bool(b) => Ok(usize::from(*b)),
            Value::Int(i) => usize::try_from(*i)
                .ok()
                .filter(|index| *index < DIMENSION)
                .ok_or(VectorError::IndexOutOfRange {
                    index: *i,
                    last: DIMENSION - 1,
                }),
            other => Err(VectorError::type_mismatch(format!(
                "vector index must be an integer, not {}",
                other.type_name()
            ))),
        }
    }
}

/// Removes `_` digit separators, rejecting any `_` not between two digits.
fn strip_digit_separators(text: &str) -> Option<String> {
    let bytes = text.as_bytes();
    for (i, byte) in bytes.iter().enumerate() {
        if *byte == b'_' {
            let before = i.checked_sub(1).and_then(|j| bytes.get(j));
            let after = bytes.get(i + 1);
            let between_digits =
                before.is_some_and(u8::is_ascii_digit) && after.is_some_and(u8::is_ascii_digit);
            if !between_digits {
                return None;
            }
        }
    }
    Some(text.replace('_', ""))
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<f32> for Value {
    fn from(x: f32) -> Self {
        Value::Float(f64::from(x))
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<u32> for Value {
    fn from(i: u32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<Vector3> for Value {
    fn from(v: Vector3) -> Self {
        Value::Vector(v)
    }
}

impl From<&Value> for Value {
    fn from(v: &Value) -> Self {
        v.clone()
    }
}

impl From<Operand> for Value {
    fn from(operand: Operand) -> Self {
        match operand {
            Operand::Vector(v) => Value::Vector(v),
            Operand::Scalar(x) => Value::Float(x),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::None => write!(f, "none"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{:?}", x),
            Value::Str(s) => write!(f, "'{}'", s),
            Value::Vector(v) => write!(f, "{}", v.repr()),
        }
    }
}

/// Arithmetic operand: either a whole vector or a single scalar.
///
/// ```
/// use aots_vector::{Operand, Value, Vector3};
///
/// let v = Vector3::new(1.0, 2.0, 3.0);
/// assert_eq!(Operand::try_from(&Value::from(v)), Ok(Operand::Vector(v)));
/// assert_eq!(Operand::try_from(&Value::from("4")), Ok(Operand::Scalar(4.0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand {
    /// A vector operand.
    Vector(Vector3),
    /// A scalar operand.
    Scalar(f64),
}

impl Operand {
    /// Returns the scalar, if this operand is one.
    pub fn scalar(self) -> Option<f64> {
        match self {
            Operand::Scalar(x) => Some(x),
            Operand::Vector(_) => None,
        }
    }

    /// Returns the vector, if this operand is one.
    pub fn vector(self) -> Option<Vector3> {
        match self {
            Operand::Vector(v) => Some(v),
            Operand::Scalar(_) => None,
        }
    }
}

impl TryFrom<&Value> for Operand {
    type Error = VectorError;

    fn try_from(value: &Value) -> VectorResult<Self> {
        match value {
            Value::Vector(v) => Ok(Operand::Vector(*v)),
            other => other.to_f64().map(Operand::Scalar),
        }
    }
}

impl From<Vector3> for Operand {
    fn from(v: Vector3) -> Self {
        Operand::Vector(v)
    }
}

impl From<f64> for Operand {
    fn from(x: f64) -> Self {
        Operand::Scalar(x)
    }
}

// =============================================================================
// TESTS
// =============================================================================
