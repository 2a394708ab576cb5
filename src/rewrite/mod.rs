//! # Layer 3: Matching and Rewriting
//!
//! Literal structural patterns over expression trees. There is no rule
//! engine; [`mutate`] replaces whatever matches with whatever the callback
//! returns.

pub mod mutate;
pub mod pattern;

pub use mutate::mutate;
pub use pattern::{KindTest, Pattern, PatternSlot, matches};
