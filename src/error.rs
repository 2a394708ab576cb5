//! Error types for building and evaluating trees.

use thiserror::Error;

use crate::expr::{BinaryOp, ExprKind};

/// Rejected node reconstruction.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BuildError {
    /// Leaves carry a value or an index, not subtrees.
    #[error("`{0}` nodes cannot be built from child subtrees")]
    LeafKind(ExprKind),

    #[error("`{kind}` nodes take {expected} children, found {found}")]
    Arity { kind: ExprKind, expected: usize, found: usize },
}

/// Errors that can occur while evaluating a tree.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EvalError {
    /// A placeholder index points past the end of the environment.
    #[error("placeholder {index} is out of range for an environment of {len} values")]
    MissingArgument { index: usize, len: usize },

    /// The operand type has neither an override nor a native operator.
    #[error("no `{op}` operation for operands of type `{operand}`")]
    Unsupported { op: BinaryOp, operand: &'static str },

    /// The storage behind a mutably captured terminal is borrowed for writing.
    #[error("storage of a mutably captured `{operand}` terminal is already borrowed")]
    SourceBorrowed { operand: &'static str },
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn error_display_messages() {
        let err = EvalError::MissingArgument { index: 3, len: 2 };
        assert_eq!(err.to_string(), "placeholder 3 is out of range for an environment of 2 values");

        let err = EvalError::Unsupported { op: BinaryOp::Minus, operand: "alloc::string::String" };
        assert_eq!(err.to_string(), "no `-` operation for operands of type `alloc::string::String`");

        let err = BuildError::Arity { kind: ExprKind::Divides, expected: 2, found: 3 };
        assert_eq!(err.to_string(), "`divides` nodes take 2 children, found 3");
    }
}
