//! # Layer 1: Expression Trees
//!
//! ```text
//! expr/
//! ├── kind.rs    - ExprKind / BinaryOp, fixed arities
//! ├── capture.rs - Capture modes, Terminal, IntoExpr resolver
//! ├── node.rs    - Expr, the homogeneous tree
//! └── build.rs   - core::ops combinators
//! ```

pub mod build;
pub mod capture;
pub mod kind;
pub mod node;

pub use capture::{
    CaptureMode, Copied, IntoExpr, Terminal, ValueRef, placeholder, term, term_mut, term_ref,
};
pub use kind::{BinaryOp, ExprKind};
pub use node::Expr;
