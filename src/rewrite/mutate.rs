//! Bottom-up structural rewriting.

use tracing::debug;

use super::Pattern;
use crate::expr::Expr;

/// Rewrites every subtree of `expr` that matches `pattern`.
///
/// Children are rewritten first; the rebuilt node is then tested against
/// `pattern` and replaced by `rewrite(node)` if it matches. Leaves that do
/// not match are returned unchanged.
pub fn mutate<'a, T, F>(pattern: &Pattern<T>, expr: Expr<'a, T>, mut rewrite: F) -> Expr<'a, T>
where
    F: FnMut(Expr<'a, T>) -> Expr<'a, T>,
{
    mutate_impl(pattern, expr, &mut rewrite)
}

fn mutate_impl<'a, T, F>(pattern: &Pattern<T>, expr: Expr<'a, T>, rewrite: &mut F) -> Expr<'a, T>
where
    F: FnMut(Expr<'a, T>) -> Expr<'a, T>,
{
    let rebuilt = match expr {
        Expr::Binary(op, children) => {
            let [lhs, rhs] = *children;
            let lhs = mutate_impl(pattern, lhs, rewrite);
            let rhs = mutate_impl(pattern, rhs, rewrite);
            Expr::binary(op, lhs, rhs)
        }
        leaf => leaf,
    };

    if pattern.matches(&rebuilt) {
        debug!(kind = %rebuilt.kind(), "rewriting matched subtree");
        rewrite(rebuilt)
    } else {
        rebuilt
    }
}

impl<'a, T> Expr<'a, T> {
    /// See [`mutate`].
    pub fn mutate<F>(self, pattern: &Pattern<T>, rewrite: F) -> Self
    where
        F: FnMut(Self) -> Self,
    {
        mutate(pattern, self, rewrite)
    }
}
