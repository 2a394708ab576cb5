//! Node kinds and their fixed arities.

use core::fmt;

/// Tag of an expression node.
///
/// The kind alone fixes how many slots a node has: leaves carry a single
/// value or index, binary kinds carry two subtrees.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ExprKind {
    Terminal,
    Placeholder,
    Plus,
    Minus,
    Multiplies,
    Divides,
}

impl ExprKind {
    /// Number of slots a node of this kind owns.
    pub const fn arity(self) -> usize {
        match self {
            ExprKind::Terminal | ExprKind::Placeholder => 1,
            ExprKind::Plus | ExprKind::Minus | ExprKind::Multiplies | ExprKind::Divides => 2,
        }
    }

    /// The binary operator behind this kind, if any.
    pub const fn as_binary(self) -> Option<BinaryOp> {
        match self {
            ExprKind::Plus => Some(BinaryOp::Plus),
            ExprKind::Minus => Some(BinaryOp::Minus),
            ExprKind::Multiplies => Some(BinaryOp::Multiplies),
            ExprKind::Divides => Some(BinaryOp::Divides),
            ExprKind::Terminal | ExprKind::Placeholder => None,
        }
    }

    pub const fn is_leaf(self) -> bool {
        self.as_binary().is_none()
    }
}

impl fmt::Display for ExprKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExprKind::Terminal => f.write_str("term"),
            ExprKind::Placeholder => f.write_str("placeholder"),
            ExprKind::Plus => f.write_str("plus"),
            ExprKind::Minus => f.write_str("minus"),
            ExprKind::Multiplies => f.write_str("multiplies"),
            ExprKind::Divides => f.write_str("divides"),
        }
    }
}

/// The binary subset of [`ExprKind`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Plus,
    Minus,
    Multiplies,
    Divides,
}

impl BinaryOp {
    pub const ALL: [BinaryOp; 4] =
        [BinaryOp::Plus, BinaryOp::Minus, BinaryOp::Multiplies, BinaryOp::Divides];

    pub const fn kind(self) -> ExprKind {
        match self {
            BinaryOp::Plus => ExprKind::Plus,
            BinaryOp::Minus => ExprKind::Minus,
            BinaryOp::Multiplies => ExprKind::Multiplies,
            BinaryOp::Divides => ExprKind::Divides,
        }
    }

    /// Symbol used by the printer.
    pub const fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Plus => "+",
            BinaryOp::Minus => "-",
            BinaryOp::Multiplies => "*",
            BinaryOp::Divides => "/",
        }
    }
}

impl From<BinaryOp> for ExprKind {
    fn from(op: BinaryOp) -> Self {
        op.kind()
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
