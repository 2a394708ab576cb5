//! Per-operator dispatch with a native fallback.
//!
//! Evaluating a binary node asks the operand type for the operation in this
//! order:
//!
//! 1. the user override (`EvalPlus`, `EvalMinus`, ...), if the type has one;
//! 2. the native `core::ops` operator (`Add<Output = T>`, ...);
//! 3. otherwise the operation is reported as unsupported.
//!
//! The choice is made with the inherent-method-over-trait-method priority of
//! method resolution on a [`Probe`], so it only works where the operand type
//! is concrete. [`operand!`](crate::operand) and `#[derive(Operand)]` expand
//! the selection at the concrete type and bake it into an [`Operand`] impl,
//! which the generic evaluator then calls.
//!
//! ```text
//! Probe<T>::plus(&self)          inherent, where T: EvalPlus   (override)
//! NativePlus for Probe<T>        trait,    where T: Add        (native)
//! MissingPlus for &Probe<T>      trait,    always            (unsupported)
//! ```

use alloc::string::{String, ToString};
use core::fmt::Display;
use core::marker::PhantomData;

use crate::expr::BinaryOp;

/// Value types a tree can be evaluated and printed over.
///
/// Implement it with [`operand!`](crate::operand) or `#[derive(Operand)]`
/// rather than by hand.
pub trait Operand: Sized {
    /// Applies `op`, or returns `None` if the type has no such operation.
    fn apply(op: BinaryOp, lhs: Self, rhs: Self) -> Option<Self>;

    /// Textual rendering, if the type supports one.
    fn render(&self) -> Option<String>;
}

/// Selection wrapper; see the module docs.
#[doc(hidden)]
pub struct Probe<T>(PhantomData<fn() -> T>);

impl<T> Probe<T> {
    pub const fn new() -> Self {
        Probe(PhantomData)
    }
}

impl<T> Default for Probe<T> {
    fn default() -> Self {
        Self::new()
    }
}

macro_rules! define_operator {
    ($($Op:ident => $method:ident, $Native:ident :: $native:ident);* $(;)?) => {
        paste::paste! {
            $(
                #[doc = concat!(
                    "Override of the `", stringify!($Op), "` evaluation for a value type.\n\n",
                    "Takes priority over the native `core::ops::", stringify!($Native),
                    "` operator when both exist."
                )]
                pub trait [<Eval $Op>]: Sized {
                    fn [<eval_ $method>](self, rhs: Self) -> Self;
                }

                impl<T: [<Eval $Op>]> Probe<T> {
                    #[inline(always)]
                    pub fn $method(&self, lhs: T, rhs: T) -> Option<T> {
                        Some(lhs.[<eval_ $method>](rhs))
                    }
                }

                #[doc(hidden)]
                pub trait [<Native $Op>]<T> {
                    fn $method(&self, lhs: T, rhs: T) -> Option<T>;
                }

                impl<T: core::ops::$Native<Output = T>> [<Native $Op>]<T> for Probe<T> {
                    #[inline(always)]
                    fn $method(&self, lhs: T, rhs: T) -> Option<T> {
                        Some(core::ops::$Native::$native(lhs, rhs))
                    }
                }

                #[doc(hidden)]
                pub trait [<Missing $Op>]<T> {
                    fn $method(&self, lhs: T, rhs: T) -> Option<T>;
                }

                impl<T> [<Missing $Op>]<T> for &Probe<T> {
                    #[inline(always)]
                    fn $method(&self, _lhs: T, _rhs: T) -> Option<T> {
                        None
                    }
                }
            )*
        }
    };
}

define_operator! {
    Plus => plus, Add::add;
    Minus => minus, Sub::sub;
    Multiplies => multiplies, Mul::mul;
    Divides => divides, Div::div;
}

impl<T: Display> Probe<T> {
    #[inline(always)]
    pub fn render(&self, value: &T) -> Option<String> {
        Some(value.to_string())
    }
}

#[doc(hidden)]
pub trait RenderFallback<T> {
    fn render(&self, value: &T) -> Option<String>;
}

impl<T> RenderFallback<T> for Probe<T> {
    #[inline(always)]
    fn render(&self, _value: &T) -> Option<String> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Reversed(i32);

    impl EvalMinus for Reversed {
        fn eval_minus(self, rhs: Self) -> Self {
            Reversed(rhs.0 - self.0)
        }
    }

    impl core::ops::Sub for Reversed {
        type Output = Reversed;

        fn sub(self, rhs: Self) -> Self {
            Reversed(self.0 - rhs.0)
        }
    }

    struct Opaque;

    #[test]
    #[allow(unused_imports)]
    fn override_beats_native_beats_missing() {
        use super::{MissingMinus as _, MissingPlus as _, NativeMinus as _, NativePlus as _};

        let probe = &Probe::<Reversed>::new();
        assert_eq!(probe.minus(Reversed(1), Reversed(10)), Some(Reversed(9)));
        assert_eq!(probe.plus(Reversed(1), Reversed(10)), None);

        let probe = &Probe::<i32>::new();
        assert_eq!(probe.minus(1, 10), Some(-9));
    }

    #[test]
    #[allow(unused_imports)]
    fn render_needs_display() {
        use super::RenderFallback as _;

        assert_eq!(Probe::<i32>::new().render(&5).as_deref(), Some("5"));
        assert_eq!(Probe::<Opaque>::new().render(&Opaque), None);
    }
}
