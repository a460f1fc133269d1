//! # Vector Errors
//!
//! Error types for vector construction, indexing and operator dispatch.
//!
//! ## Error Policy
//!
//! - NO fallback values when an operation is not meaningful for vectors
//! - All failures return explicit errors to the immediate caller
//! - A failed operation leaves the receiver unchanged

use crate::operator::{Operator, OperatorForm};
use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while building or operating on vectors.
///
/// ## Example
///
/// ```rust
/// use aots_vector::{Vector3, VectorError};
///
/// let v = Vector3::new(1.0, 2.0, 3.0);
/// match v.get(3) {
///     Err(VectorError::IndexOutOfRange { index, .. }) => assert_eq!(index, 3),
///     other => panic!("unexpected: {other:?}"),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum VectorError {
    /// Operand or index of the wrong kind.
    #[error("Type error: {0}")]
    TypeMismatch(String),

    /// Integer index outside `0..DIMENSION`.
    #[error("Index error: index {index} out of range (a vector can be indexed with 0 to {last})")]
    IndexOutOfRange {
        /// Index supplied by the caller
        index: i64,
        /// Largest valid index
        last: usize,
    },

    /// Argument could not be converted to a float.
    #[error("Value error: could not convert {0} to float")]
    ValueConversion(String),

    /// Operator exists but has no meaning for a three-component vector.
    #[error("Unsupported operation: {form} '{operator}' is not defined for vectors")]
    Unsupported {
        /// Operator that was requested
        operator: Operator,
        /// Position the vector occupied in the expression
        form: OperatorForm,
    },

    /// Scalar division by zero.
    #[error("Division by zero")]
    DivisionByZero,
}

impl VectorError {
    /// Builds a [`VectorError::TypeMismatch`] from any message.
    pub fn type_mismatch(message: impl Into<String>) -> Self {
        Self::TypeMismatch(message.into())
    }

    /// Builds a [`VectorError::Unsupported`] for `operator` used in `form`.
    pub fn unsupported(operator: impl Into<Operator>, form: OperatorForm) -> Self {
        Self::Unsupported {
            operator: operator.into(),
            form,
        }
    }

    /// Returns true for the "operator not supported" signal.
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::Unsupported { .. })
    }
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for vector operations.
pub type VectorResult<T> = Result<T, VectorError>;

// =============================================================================
// TESTS
// =============================================================================
