//! Procedural macros for proto-expr
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `#[derive(Operand)]` | struct/enum | Evaluate and print trees over the type |
//!
//! ## Example
//!
//! ```ignore
//! #[derive(Clone, Operand)]
//! struct Meters(f64);
//!
//! // Optional: replace what `+` means for Meters inside trees.
//! impl proto_expr::EvalPlus for Meters {
//!     fn eval_plus(self, rhs: Self) -> Self { Meters(self.0 + rhs.0) }
//! }
//! ```

use proc_macro::TokenStream;
use syn::parse_macro_input;

mod operand;

/// Derive macro to implement the `Operand` trait.
///
/// Expands to `proto_expr::__impl_operand!(Type)`, which resolves each
/// operator to the type's override, else its native operator, at the
/// concrete type.
#[proc_macro_derive(Operand)]
pub fn derive_operand(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    operand::expand_derive_operand(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
