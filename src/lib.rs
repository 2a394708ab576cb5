#![cfg_attr(not(feature = "std"), no_std)]

// Feature flags handled:
// - std: default, enables std support in tracing and thiserror
// - primitives: Operand impls for numbers and String

//! # proto-expr
//!
//! Lazy expression trees built with operator syntax.
//!
//! Building a tree never evaluates it. Each captured operand keeps the
//! ownership discipline the caller handed it over with, and the tree is
//! evaluated later against an environment of placeholder values.
//!
//! A tree is homogeneous: every terminal and every environment entry of an
//! `Expr<'a, T>` is a `T`. Mixing value types (say a string placeholder next
//! to an integer terminal) needs a user enum as `T`.
//!
//! ## Architecture
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 1: Expression Trees                                        |
//! |  - ExprKind, Terminal (capture modes), Expr, core::ops builders   |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: Evaluation                                              |
//! |  - Operand, override-then-native dispatch, evaluate_with          |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 3: Printing / Matching / Rewriting                         |
//! |  - print, Pattern, matches, mutate                                |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ### Capture modes
//!
//! | Right operand      | Leaf                      |
//! |--------------------|---------------------------|
//! | `value`            | owned                     |
//! | `&value`           | read-only borrow          |
//! | `&RefCell<value>`  | shared mutable storage    |
//! | `Copied(&value)`   | owned clone               |
//! | `expr` / `&expr`   | embedded subtree          |
//!
//! ### Dispatch
//!
//! A value type can replace the meaning of any operator by implementing
//! `EvalPlus`, `EvalMinus`, `EvalMultiplies` or `EvalDivides`. Without an
//! override the native `core::ops` operator is used.
//!
//! ## Quick Start
//!
//! ```ignore
//! use proto_expr::prelude::*;
//!
//! #[derive(Clone, Debug, PartialEq, Operand)]
//! struct Backwards(f64);
//!
//! impl EvalPlus for Backwards {
//!     fn eval_plus(self, rhs: Self) -> Self { Backwards(self.0 - rhs.0) }
//! }
//!
//! let expr = term(Backwards(1.0)) + Backwards(42.0);
//! assert_eq!(expr.evaluate(), Ok(Backwards(-41.0)));
//!
//! let env = [5, 6, 7];
//! let twice = placeholder::<i32>(2) + placeholder(2);
//! assert_eq!(twice.evaluate_with(&env), Ok(14));
//! ```

// Allow `::proto_expr` to work inside the crate itself
extern crate self as proto_expr;

extern crate alloc;

// =============================================================================
// Layer 1: Expression Trees
// =============================================================================
pub mod expr;

// =============================================================================
// Layer 2: Evaluation
// =============================================================================
pub mod eval;

// =============================================================================
// Layer 3: Printing, Matching and Rewriting
// =============================================================================
pub mod print;
pub mod rewrite;

pub mod error;

// operand! and the __impl_operand! bridge
pub mod syntax_macros;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use error::{BuildError, EvalError};
pub use eval::{
    EvalDivides, EvalMinus, EvalMultiplies, EvalPlus, Operand, evaluate, evaluate_as, evaluate_with,
};
pub use expr::{
    BinaryOp, CaptureMode, Copied, Expr, ExprKind, IntoExpr, Terminal, placeholder, term, term_mut,
    term_ref,
};
pub use print::{PrintOptions, print, print_with};
pub use rewrite::{KindTest, Pattern, PatternSlot, matches, mutate};

// Re-export proc-macros
pub use macros::Operand;

#[doc(hidden)]
pub mod __private {
    pub use alloc::string::String;
}

/// Common items for building and evaluating trees.
pub mod prelude {
    pub use crate::eval::{EvalDivides, EvalMinus, EvalMultiplies, EvalPlus, Operand};
    pub use crate::expr::{Copied, Expr, placeholder, term, term_mut, term_ref};
    pub use crate::rewrite::{Pattern, PatternSlot};
    pub use macros::Operand;
}
