//! Capture modes and the resolver that turns operands into leaves.
//!
//! How an operand enters a tree is decided by the form the caller hands it
//! over in:
//!
//! | Argument            | Result                               |
//! |---------------------|--------------------------------------|
//! | `T`                 | `Terminal`, [`CaptureMode::OwnedValue`] (moved in) |
//! | `Copied(&T)`        | `Terminal`, [`CaptureMode::OwnedValue`] (cloned)   |
//! | `&'a T`             | `Terminal`, [`CaptureMode::BorrowTemporary`]       |
//! | `&'a RefCell<T>`    | `Terminal`, [`CaptureMode::BorrowMutable`]         |
//! | `Expr<'a, T>`       | embedded subtree (moved)             |
//! | `&Expr<'a, T>`      | embedded subtree (duplicated)        |
//!
//! Borrow-mode leaves never own their storage; the borrow checker ties the
//! tree's lifetime to the source.

use core::cell::{BorrowError, Ref, RefCell};
use core::fmt;
use core::ops::Deref;

use super::Expr;

/// Ownership discipline of a captured terminal value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CaptureMode {
    OwnedValue,
    BorrowMutable,
    BorrowTemporary,
}

/// A captured leaf value.
pub enum Terminal<'a, T> {
    /// The tree owns the value and drops it with the tree.
    Owned(T),
    /// Shared storage the caller may keep mutating while the tree lives.
    Mutable(&'a RefCell<T>),
    /// Read-only borrow of a value owned elsewhere.
    Temporary(&'a T),
}

impl<'a, T> Terminal<'a, T> {
    pub const fn mode(&self) -> CaptureMode {
        match self {
            Terminal::Owned(_) => CaptureMode::OwnedValue,
            Terminal::Mutable(_) => CaptureMode::BorrowMutable,
            Terminal::Temporary(_) => CaptureMode::BorrowTemporary,
        }
    }

    /// Reads the current value.
    ///
    /// Fails only for a [`CaptureMode::BorrowMutable`] leaf whose source is
    /// mutably borrowed at the moment of the read.
    pub fn get(&self) -> Result<ValueRef<'_, T>, BorrowError> {
        match self {
            Terminal::Owned(value) => Ok(ValueRef::Plain(value)),
            Terminal::Mutable(cell) => cell.try_borrow().map(ValueRef::Cell),
            Terminal::Temporary(value) => Ok(ValueRef::Plain(value)),
        }
    }

    /// Writes through a [`CaptureMode::BorrowMutable`] leaf, returning the
    /// previous value.
    ///
    /// Returns `None` without writing for the other modes, or when the source
    /// is already borrowed.
    pub fn replace(&self, value: T) -> Option<T> {
        match self {
            Terminal::Mutable(cell) => {
                let mut slot = cell.try_borrow_mut().ok()?;
                Some(core::mem::replace(&mut *slot, value))
            }
            Terminal::Owned(_) | Terminal::Temporary(_) => None,
        }
    }
}

impl<T: Clone> Clone for Terminal<'_, T> {
    fn clone(&self) -> Self {
        match self {
            Terminal::Owned(value) => Terminal::Owned(value.clone()),
            Terminal::Mutable(cell) => Terminal::Mutable(cell),
            Terminal::Temporary(value) => Terminal::Temporary(value),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Terminal<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Terminal::Owned(value) => f.debug_tuple("Owned").field(value).finish(),
            Terminal::Mutable(cell) => f.debug_tuple("Mutable").field(cell).finish(),
            Terminal::Temporary(value) => f.debug_tuple("Temporary").field(value).finish(),
        }
    }
}

/// Read guard returned by [`Terminal::get`].
pub enum ValueRef<'t, T> {
    Plain(&'t T),
    Cell(Ref<'t, T>),
}

impl<T> Deref for ValueRef<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        match self {
            ValueRef::Plain(value) => value,
            ValueRef::Cell(guard) => guard,
        }
    }
}

/// Stores an owned clone of a value the caller only lends.
#[derive(Clone, Copy, Debug)]
pub struct Copied<'c, T>(pub &'c T);

/// Conversion of a right-hand operand into a tree.
pub trait IntoExpr<'a, T> {
    fn into_expr(self) -> Expr<'a, T>;
}

impl<'a, T: 'a> IntoExpr<'a, T> for T {
    fn into_expr(self) -> Expr<'a, T> {
        Expr::Terminal(Terminal::Owned(self))
    }
}

impl<'a, T> IntoExpr<'a, T> for &'a T {
    fn into_expr(self) -> Expr<'a, T> {
        Expr::Terminal(Terminal::Temporary(self))
    }
}

impl<'a, T> IntoExpr<'a, T> for &'a RefCell<T> {
    fn into_expr(self) -> Expr<'a, T> {
        Expr::Terminal(Terminal::Mutable(self))
    }
}

impl<'a, T: Clone + 'a> IntoExpr<'a, T> for Copied<'_, T> {
    fn into_expr(self) -> Expr<'a, T> {
        Expr::Terminal(Terminal::Owned(self.0.clone()))
    }
}

impl<'a, T> IntoExpr<'a, T> for Expr<'a, T> {
    fn into_expr(self) -> Expr<'a, T> {
        self
    }
}

impl<'a, T: Clone> IntoExpr<'a, T> for &Expr<'a, T> {
    fn into_expr(self) -> Expr<'a, T> {
        self.clone()
    }
}

/// Terminal owning `value`.
pub fn term<'a, T: 'a>(value: T) -> Expr<'a, T> {
    value.into_expr()
}

/// Terminal borrowing `value` read-only.
pub fn term_ref<T>(value: &T) -> Expr<'_, T> {
    value.into_expr()
}

/// Terminal sharing the storage behind `cell`.
pub fn term_mut<T>(cell: &RefCell<T>) -> Expr<'_, T> {
    cell.into_expr()
}

/// Leaf resolved positionally against the evaluation environment.
pub fn placeholder<'a, T>(index: usize) -> Expr<'a, T> {
    Expr::Placeholder(index)
}
