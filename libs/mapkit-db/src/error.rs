//! Compilation errors.

use mapkit_criteria::ComparisonOp;
use thiserror::Error;

use crate::field::FieldKind;

/// Errors raised while compiling a criteria tree into a condition.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CompileError {
    #[error("unknown field: {0}")]
    UnknownField(String),

    #[error("type mismatch: expected {expected}, got {got}")]
    TypeMismatch {
        expected: FieldKind,
        got: &'static str,
    },

    #[error("unsupported operator: {0}")]
    UnsupportedOperator(ComparisonOp),

    #[error("{op} comparison requires a non-null value")]
    NullComparison { op: ComparisonOp },

    #[error("{op} requires a membership list")]
    ListRequired { op: ComparisonOp },

    #[error("{op} requires a string-kind field: {field}")]
    PatternRequiresString { op: ComparisonOp, field: String },

    #[error("number does not fit the declared field kind")]
    InvalidNumber,
}

pub type CompileResult<T> = Result<T, CompileError>;
