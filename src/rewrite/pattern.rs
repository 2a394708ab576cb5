//! Pattern trees and structural matching.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::expr::{BinaryOp, Expr, ExprKind};

/// Test applied to a node before its slots are compared.
pub enum KindTest<T> {
    Exact(ExprKind),
    /// Sees the whole node, so it can inspect terminal values as well as the
    /// kind.
    Predicate(fn(&Expr<'_, T>) -> bool),
}

impl<T> KindTest<T> {
    pub fn accepts(&self, expr: &Expr<'_, T>) -> bool {
        match self {
            KindTest::Exact(expected) => *expected == expr.kind(),
            KindTest::Predicate(predicate) => predicate(expr),
        }
    }
}

impl<T> Clone for KindTest<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for KindTest<T> {}

impl<T> fmt::Debug for KindTest<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KindTest::Exact(kind) => f.debug_tuple("Exact").field(kind).finish(),
            KindTest::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

/// One slot of a [`Pattern`].
pub enum PatternSlot<T> {
    /// Matches anything in the slot. The optional tag names the wildcard so
    /// later patterns can require two slots to hold the same subtree; tags
    /// are not constrained yet.
    Wildcard(Option<usize>),
    Subtree(Pattern<T>),
}

impl<T> PatternSlot<T> {
    pub const ANY: PatternSlot<T> = PatternSlot::Wildcard(None);

    pub const fn tagged(tag: usize) -> Self {
        PatternSlot::Wildcard(Some(tag))
    }

    pub const fn is_wildcard(&self) -> bool {
        matches!(self, PatternSlot::Wildcard(_))
    }

    fn matches(&self, child: &Expr<'_, T>) -> bool {
        match self {
            PatternSlot::Wildcard(_) => true,
            PatternSlot::Subtree(pattern) => pattern.matches(child),
        }
    }
}

impl<T> Clone for PatternSlot<T> {
    fn clone(&self) -> Self {
        match self {
            PatternSlot::Wildcard(tag) => PatternSlot::Wildcard(*tag),
            PatternSlot::Subtree(pattern) => PatternSlot::Subtree(pattern.clone()),
        }
    }
}

impl<T> fmt::Debug for PatternSlot<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternSlot::Wildcard(tag) => f.debug_tuple("Wildcard").field(tag).finish(),
            PatternSlot::Subtree(pattern) => f.debug_tuple("Subtree").field(pattern).finish(),
        }
    }
}

impl<T> From<Pattern<T>> for PatternSlot<T> {
    fn from(pattern: Pattern<T>) -> Self {
        PatternSlot::Subtree(pattern)
    }
}

/// A node test plus one slot per child position, over trees of `T`.
pub struct Pattern<T> {
    pub test: KindTest<T>,
    pub slots: Vec<PatternSlot<T>>,
}

impl<T> Pattern<T> {
    pub fn new(test: KindTest<T>, slots: Vec<PatternSlot<T>>) -> Self {
        Pattern { test, slots }
    }

    /// `kind` with wildcards in every slot.
    pub fn any_of(kind: ExprKind) -> Self {
        Pattern::new(KindTest::Exact(kind), vec![PatternSlot::ANY; kind.arity()])
    }

    /// Nodes accepted by `predicate`, with wildcards in `arity` slots.
    pub fn satisfying(predicate: fn(&Expr<'_, T>) -> bool, arity: usize) -> Self {
        Pattern::new(KindTest::Predicate(predicate), vec![PatternSlot::ANY; arity])
    }

    pub fn binary(op: BinaryOp, lhs: impl Into<PatternSlot<T>>, rhs: impl Into<PatternSlot<T>>) -> Self {
        Pattern::new(KindTest::Exact(op.kind()), vec![lhs.into(), rhs.into()])
    }

    /// True if the test accepts `expr`, the slot count equals its arity and
    /// every slot matches the corresponding child. Leaf slots hold a value or
    /// an index, so only wildcards match them.
    pub fn matches(&self, expr: &Expr<'_, T>) -> bool {
        if self.slots.len() != expr.arity() || !self.test.accepts(expr) {
            return false;
        }

        match expr {
            Expr::Binary(_, children) => {
                self.slots.iter().zip(children.iter()).all(|(slot, child)| slot.matches(child))
            }
            Expr::Terminal(_) | Expr::Placeholder(_) => self.slots.iter().all(PatternSlot::is_wildcard),
        }
    }
}

impl<T> Clone for Pattern<T> {
    fn clone(&self) -> Self {
        Pattern { test: self.test, slots: self.slots.clone() }
    }
}

impl<T> fmt::Debug for Pattern<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pattern").field("test", &self.test).field("slots", &self.slots).finish()
    }
}

/// See [`Pattern::matches`].
pub fn matches<T>(pattern: &Pattern<T>, expr: &Expr<'_, T>) -> bool {
    pattern.matches(expr)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::{placeholder, term};

    fn is_two(node: &Expr<'_, f64>) -> bool {
        node.as_terminal()
            .and_then(|leaf| leaf.get().ok().map(|value| *value == 2.0))
            .unwrap_or(false)
    }

    #[test]
    fn wildcard_binary_pattern_checks_kind_only() {
        let pattern = Pattern::binary(BinaryOp::Plus, PatternSlot::ANY, PatternSlot::tagged(0));
        assert!(pattern.matches(&(term(1_i32) + 2)));
        assert!(pattern.matches(&(term(1_i32) + (term(2) - 3))));
        assert!(!pattern.matches(&(term(1_i32) - 2)));
        assert!(!pattern.matches(&term(1_i32)));
    }

    #[test]
    fn nested_patterns_recurse() {
        let pattern = Pattern::binary(
            BinaryOp::Plus,
            PatternSlot::ANY,
            Pattern::binary(BinaryOp::Minus, PatternSlot::ANY, Pattern::any_of(ExprKind::Placeholder)),
        );
        assert!(pattern.matches(&(term(1_i32) + (term(2) - placeholder(0)))));
        assert!(!pattern.matches(&(term(1_i32) + (term(2) - 3))));
    }

    #[test]
    fn arity_mismatch_never_matches() {
        let pattern = Pattern::<i32>::new(KindTest::Exact(ExprKind::Plus), vec![PatternSlot::ANY]);
        assert!(!pattern.matches(&(term(1_i32) + 2)));

        let pattern = Pattern::<i32>::new(
            KindTest::Exact(ExprKind::Terminal),
            vec![PatternSlot::Subtree(Pattern::any_of(ExprKind::Terminal))],
        );
        assert!(!pattern.matches(&term(1_i32)));
    }

    #[test]
    fn predicate_sees_kind() {
        let additive = Pattern::<i32>::new(
            KindTest::Predicate(|node| matches!(node.kind(), ExprKind::Plus | ExprKind::Minus)),
            vec![PatternSlot::ANY, PatternSlot::ANY],
        );
        assert!(additive.matches(&(term(1_i32) - 2)));
        assert!(!additive.matches(&(term(1_i32) * 2)));
    }

    #[test]
    fn predicate_sees_terminal_values() {
        let twos = Pattern::satisfying(is_two, 1);
        assert!(twos.matches(&term(2.0_f64)));
        assert!(!twos.matches(&term(3.0_f64)));
        assert!(!twos.matches(&placeholder::<f64>(2)));
        assert!(!twos.matches(&(term(2.0_f64) + 2.0)));
    }
}
