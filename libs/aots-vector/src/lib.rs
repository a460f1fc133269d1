//! # AOTS Vector
//!
//! A three-component vector with a complete, explicit operator contract.
//!
//! ## Architecture
//!
//! ```text
//! Typed API   : Vector3 + std::ops (+, -, * dot/scale, /, unary -, +=, -=)
//! Dynamic API : Value ──> Vector3::{binary, reflected, in_place, unary}
//!                              │
//!                              └──> Ok(Value) | Err(VectorError)
//! ```
//!
//! Operators that have no meaning for a three-component vector (modulo,
//! power, shifts, bitwise, rounding, integer conversion…) are absent from the
//! typed API and return [`VectorError::Unsupported`] from the dynamic one.
//!
//! ## Example
//!
//! ```rust
//! use aots_vector::{BinaryOp, Value, Vector3};
//!
//! let a = Vector3::new(1.0, 2.0, 3.0);
//! let b = Vector3::new(4.0, 5.0, 6.0);
//!
//! assert_eq!(a + b, Vector3::new(5.0, 7.0, 9.0));
//! assert_eq!(a * b, 32.0);
//! assert_eq!(a.repr(), "vector(1.0, 2.0, 3.0)");
//!
//! let err = a.binary(BinaryOp::Mod, &Value::from(2)).unwrap_err();
//! assert!(err.is_unsupported());
//! ```

pub mod error;
pub mod operator;
pub mod value;
pub mod vector;

// Re-export public API
pub use error::{VectorError, VectorResult};
pub use operator::{BinaryOp, Operator, OperatorForm, UnaryOp};
pub use value::{Operand, Value};
pub use vector::Vector3;
