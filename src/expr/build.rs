//! Operator combinators.
//!
//! Each binary kind is reachable through its `core::ops` operator in two
//! forms: `expr + rhs` consumes the left tree, `&expr + rhs` duplicates it
//! and leaves the original usable. The right operand always goes through
//! [`IntoExpr`].

use super::{BinaryOp, Expr, IntoExpr};

macro_rules! impl_binary_operator {
    ($($Trait:ident :: $method:ident => $op:ident),* $(,)?) => {
        $(
            impl<'a, T: 'a, R> core::ops::$Trait<R> for Expr<'a, T>
            where
                R: IntoExpr<'a, T>,
            {
                type Output = Expr<'a, T>;

                fn $method(self, rhs: R) -> Expr<'a, T> {
                    Expr::binary(BinaryOp::$op, self, rhs.into_expr())
                }
            }

            impl<'a, T: Clone + 'a, R> core::ops::$Trait<R> for &Expr<'a, T>
            where
                R: IntoExpr<'a, T>,
            {
                type Output = Expr<'a, T>;

                fn $method(self, rhs: R) -> Expr<'a, T> {
                    Expr::binary(BinaryOp::$op, self.clone(), rhs.into_expr())
                }
            }
        )*
    };
}

impl_binary_operator! {
    Add::add => Plus,
    Sub::sub => Minus,
    Mul::mul => Multiplies,
    Div::div => Divides,
}
