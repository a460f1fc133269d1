//! # Operators
//!
//! The complete operator vocabulary a vector can be asked to take part in,
//! including the operators that are deliberately not defined for vectors.
//!
//! Every binary operator can appear in three forms:
//!
//! ```text
//! Forward   : v ∘ x      (vector on the left)
//! Reflected : x ∘ v      (vector on the right)
//! InPlace   : v ∘= x     (vector is the assignment target)
//! ```

use std::fmt;

/// Position of the vector within an operator expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorForm {
    /// The vector is the left operand.
    Forward,
    /// The vector is the right operand.
    Reflected,
    /// The vector is the target of an augmented assignment.
    InPlace,
}

impl OperatorForm {
    /// All forms, in declaration order.
    pub const ALL: [OperatorForm; 3] = [Self::Forward, Self::Reflected, Self::InPlace];
}

impl fmt::Display for OperatorForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Forward => "forward",
            Self::Reflected => "reflected",
            Self::InPlace => "in-place",
        };
        f.write_str(name)
    }
}

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*` (dot product or scaling)
    Mul,
    /// `@` (cross product)
    MatMul,
    /// `/`
    TrueDiv,
    /// `//`
    FloorDiv,
    /// `%`
    Mod,
    /// `divmod`
    DivMod,
    /// `**`
    Pow,
    /// `<<`
    LShift,
    /// `>>`
    RShift,
    /// `&`
    And,
    /// `^`
    Xor,
    /// `|`
    Or,
}

impl BinaryOp {
    /// All binary operators, in declaration order.
    pub const ALL: [BinaryOp; 14] = [
        Self::Add,
        Self::Sub,
        Self::Mul,
        Self::MatMul,
        Self::TrueDiv,
        Self::FloorDiv,
        Self::Mod,
        Self::DivMod,
        Self::Pow,
        Self::LShift,
        Self::RShift,
        Self::And,
        Self::Xor,
        Self::Or,
    ];

    /// Source-level symbol of the operator.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::MatMul => "@",
            Self::TrueDiv => "/",
            Self::FloorDiv => "//",
            Self::Mod => "%",
            Self::DivMod => "divmod",
            Self::Pow => "**",
            Self::LShift => "<<",
            Self::RShift => ">>",
            Self::And => "&",
            Self::Xor => "^",
            Self::Or => "|",
        }
    }

    /// Returns true if a vector defines this operator in `form`.
    ///
    /// ```
    /// use aots_vector::{BinaryOp, OperatorForm};
    ///
    /// assert!(BinaryOp::Add.supports(OperatorForm::InPlace));
    /// assert!(!BinaryOp::Mul.supports(OperatorForm::InPlace));
    /// assert!(!BinaryOp::TrueDiv.supports(OperatorForm::Reflected));
    /// assert!(!BinaryOp::Pow.supports(OperatorForm::Forward));
    /// ```
    pub fn supports(self, form: OperatorForm) -> bool {
        match form {
            OperatorForm::Forward => matches!(
                self,
                Self::Add | Self::Sub | Self::Mul | Self::MatMul | Self::TrueDiv
            ),
            OperatorForm::Reflected => {
                matches!(self, Self::Add | Self::Sub | Self::Mul | Self::MatMul)
            }
            OperatorForm::InPlace => matches!(self, Self::Add | Self::Sub),
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Unary operators and conversions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    /// `-v`
    Neg,
    /// `+v`
    Pos,
    /// `abs(v)`
    Abs,
    /// `~v`
    Invert,
    /// Conversion to a complex number.
    Complex,
    /// Conversion to an integer.
    Int,
    /// Conversion to a float.
    Float,
    /// Use as a sequence index.
    Index,
    /// `round(v)`
    Round,
    /// `trunc(v)`
    Trunc,
    /// `floor(v)`
    Floor,
    /// `ceil(v)`
    Ceil,
}

impl UnaryOp {
    /// All unary operators, in declaration order.
    pub const ALL: [UnaryOp; 12] = [
        Self::Neg,
        Self::Pos,
        Self::Abs,
        Self::Invert,
        Self::Complex,
        Self::Int,
        Self::Float,
        Self::Index,
        Self::Round,
        Self::Trunc,
        Self::Floor,
        Self::Ceil,
    ];

    /// Source-level spelling of the operator.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Neg => "-",
            Self::Pos => "+",
            Self::Abs => "abs",
            Self::Invert => "~",
            Self::Complex => "complex",
            Self::Int => "int",
            Self::Float => "float",
            Self::Index => "index",
            Self::Round => "round",
            Self::Trunc => "trunc",
            Self::Floor => "floor",
            Self::Ceil => "ceil",
        }
    }

    /// Returns true if a vector defines this operator.
    pub fn is_supported(self) -> bool {
        matches!(self, Self::Neg | Self::Pos | Self::Abs | Self::Float)
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Either kind of operator, as carried by [`VectorError::Unsupported`](crate::VectorError::Unsupported).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// A binary operator.
    Binary(BinaryOp),
    /// A unary operator or conversion.
    Unary(UnaryOp),
}

impl From<BinaryOp> for Operator {
    fn from(op: BinaryOp) -> Self {
        Operator::Binary(op)
    }
}

impl From<UnaryOp> for Operator {
    fn from(op: UnaryOp) -> Self {
        Operator::Unary(op)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operator::Binary(op) => write!(f, "{op}"),
            Operator::Unary(op) => write!(f, "{op}"),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
