//! Operand registration macros.

// =============================================================================
// operand! - Implement Operand for concrete types
// =============================================================================

/// Implement [`Operand`](crate::Operand) for one or more concrete types.
///
/// Each operator resolves to the type's override (`EvalPlus`, ...) when it
/// has one, else to the native `core::ops` operator, else it is reported as
/// unsupported at evaluation time. Rendering uses `Display` when available.
///
/// # Example
///
/// ```ignore
/// #[derive(Clone)]
/// struct Meters(f64);
///
/// impl proto_expr::EvalPlus for Meters {
///     fn eval_plus(self, rhs: Self) -> Self { Meters(self.0 + rhs.0) }
/// }
///
/// proto_expr::operand!(Meters);
/// ```
#[macro_export]
macro_rules! operand {
    ($($ty:ty),+ $(,)?) => {
        $( $crate::__impl_operand!($ty); )+
    };
}

/// Internal macro bridge - DO NOT USE DIRECTLY.
/// Use `operand!` or `#[derive(Operand)]` instead.
#[macro_export]
#[doc(hidden)]
macro_rules! __impl_operand {
    ($ty:ty) => {
        impl $crate::Operand for $ty {
            #[allow(unused_imports)]
            fn apply(
                op: $crate::BinaryOp,
                lhs: Self,
                rhs: Self,
            ) -> ::core::option::Option<Self> {
                use $crate::eval::dispatch::{
                    MissingDivides as _, MissingMinus as _, MissingMultiplies as _,
                    MissingPlus as _, NativeDivides as _, NativeMinus as _,
                    NativeMultiplies as _, NativePlus as _,
                };

                let probe = &$crate::eval::dispatch::Probe::<$ty>::new();
                match op {
                    $crate::BinaryOp::Plus => probe.plus(lhs, rhs),
                    $crate::BinaryOp::Minus => probe.minus(lhs, rhs),
                    $crate::BinaryOp::Multiplies => probe.multiplies(lhs, rhs),
                    $crate::BinaryOp::Divides => probe.divides(lhs, rhs),
                }
            }

            #[allow(unused_imports)]
            fn render(&self) -> ::core::option::Option<$crate::__private::String> {
                use $crate::eval::dispatch::RenderFallback as _;

                $crate::eval::dispatch::Probe::<$ty>::new().render(self)
            }
        }
    };
}
