//! # Layer 2: Evaluation
//!
//! ```text
//! eval/
//! ├── dispatch.rs   - Operand, override traits, native fallback selection
//! ├── evaluate.rs   - evaluate / evaluate_with / evaluate_as
//! └── primitives.rs - Operand for numbers and String (feature "primitives")
//! ```

pub mod dispatch;
pub mod evaluate;
#[cfg(feature = "primitives")]
mod primitives;

pub use dispatch::{EvalDivides, EvalMinus, EvalMultiplies, EvalPlus, Operand};
pub use evaluate::{evaluate, evaluate_as, evaluate_with};
