//! The homogeneous expression tree.

use alloc::boxed::Box;
use alloc::vec::Vec;

use super::{BinaryOp, ExprKind, Terminal};
use crate::error::BuildError;

/// An unevaluated expression over values of type `T`.
///
/// `'a` bounds every borrow-mode terminal in the tree. Once built, a tree is
/// never reshaped; rewriting produces a new tree.
///
/// Every leaf holds a `T`, so a single tree cannot mix value types.
/// Traversals (evaluation, printing, rewriting and drop) recurse once per
/// level, so very deep trees, such as chains of hundreds of thousands of
/// operators, can exhaust the stack.
#[derive(Clone, Debug)]
pub enum Expr<'a, T> {
    Terminal(Terminal<'a, T>),
    Placeholder(usize),
    Binary(BinaryOp, Box<[Expr<'a, T>; 2]>),
}

impl<'a, T> Expr<'a, T> {
    pub fn binary(op: BinaryOp, lhs: Expr<'a, T>, rhs: Expr<'a, T>) -> Self {
        Expr::Binary(op, Box::new([lhs, rhs]))
    }

    /// Rebuilds a binary node from its kind and child subtrees.
    pub fn from_parts(kind: ExprKind, children: Vec<Expr<'a, T>>) -> Result<Self, BuildError> {
        let op = kind.as_binary().ok_or(BuildError::LeafKind(kind))?;
        let found = children.len();
        let children = <[Expr<'a, T>; 2]>::try_from(children).map_err(|_| BuildError::Arity {
            kind,
            expected: kind.arity(),
            found,
        })?;
        Ok(Expr::Binary(op, Box::new(children)))
    }

    pub fn kind(&self) -> ExprKind {
        match self {
            Expr::Terminal(_) => ExprKind::Terminal,
            Expr::Placeholder(_) => ExprKind::Placeholder,
            Expr::Binary(op, _) => op.kind(),
        }
    }

    pub fn arity(&self) -> usize {
        self.kind().arity()
    }

    /// Child subtrees; empty for leaves.
    pub fn children(&self) -> &[Expr<'a, T>] {
        match self {
            Expr::Binary(_, children) => &children[..],
            Expr::Terminal(_) | Expr::Placeholder(_) => &[],
        }
    }

    pub fn as_terminal(&self) -> Option<&Terminal<'a, T>> {
        match self {
            Expr::Terminal(term) => Some(term),
            _ => None,
        }
    }

    /// One past the largest placeholder index, i.e. the shortest environment
    /// that resolves every placeholder. Saturates at `usize::MAX`.
    pub fn placeholder_count(&self) -> usize {
        match self {
            Expr::Terminal(_) => 0,
            Expr::Placeholder(index) => index.saturating_add(1),
            Expr::Binary(_, children) => {
                children.iter().map(Expr::placeholder_count).max().unwrap_or(0)
            }
        }
    }

    pub fn has_placeholders(&self) -> bool {
        match self {
            Expr::Terminal(_) => false,
            Expr::Placeholder(_) => true,
            Expr::Binary(_, children) => children.iter().any(Expr::has_placeholders),
        }
    }
}
