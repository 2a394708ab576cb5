//! Environment-driven evaluation.

use core::any::type_name;

use tracing::trace;

use super::Operand;
use crate::error::EvalError;
use crate::expr::Expr;

/// Evaluates a tree that has no placeholders.
///
/// A placeholder reached here yields [`EvalError::MissingArgument`].
pub fn evaluate<T>(expr: &Expr<'_, T>) -> Result<T, EvalError>
where
    T: Operand + Clone,
{
    evaluate_with(expr, &[])
}

/// Evaluates a tree, resolving `Placeholder(i)` to `env[i]`.
pub fn evaluate_with<T>(expr: &Expr<'_, T>, env: &[T]) -> Result<T, EvalError>
where
    T: Operand + Clone,
{
    match expr {
        Expr::Terminal(term) => {
            let value = term
                .get()
                .map_err(|_| EvalError::SourceBorrowed { operand: type_name::<T>() })?;
            Ok(T::clone(&value))
        }
        Expr::Placeholder(index) => {
            trace!(index, len = env.len(), "resolving placeholder");
            env.get(*index)
                .cloned()
                .ok_or(EvalError::MissingArgument { index: *index, len: env.len() })
        }
        Expr::Binary(op, children) => {
            let [lhs, rhs] = &**children;
            let lhs = evaluate_with(lhs, env)?;
            let rhs = evaluate_with(rhs, env)?;
            let result = T::apply(*op, lhs, rhs);
            trace!(op = %op, operand = type_name::<T>(), supported = result.is_some(), "applied operator");
            result.ok_or(EvalError::Unsupported { op: *op, operand: type_name::<T>() })
        }
    }
}

/// Evaluates a tree without placeholders and converts the result.
pub fn evaluate_as<R, T>(expr: &Expr<'_, T>) -> Result<R, EvalError>
where
    T: Operand + Clone,
    R: From<T>,
{
    evaluate(expr).map(R::from)
}

impl<T: Operand + Clone> Expr<'_, T> {
    /// See [`evaluate`].
    pub fn evaluate(&self) -> Result<T, EvalError> {
        evaluate(self)
    }

    /// See [`evaluate_with`].
    pub fn evaluate_with(&self, env: &[T]) -> Result<T, EvalError> {
        evaluate_with(self, env)
    }

    /// See [`evaluate_as`].
    pub fn evaluate_as<R: From<T>>(&self) -> Result<R, EvalError> {
        evaluate_as(self)
    }
}

#[cfg(test)]
mod tests {
    use core::cell::RefCell;

    use super::*;
    use crate::expr::{placeholder, term, term_mut};

    #[test]
    fn folds_post_order() {
        let expr = term(10_i32) - (term(4_i32) * 2) / 4;
        assert_eq!(evaluate(&expr), Ok(8));
    }

    #[test]
    fn placeholders_resolve_positionally() {
        let expr = placeholder::<i32>(0) - placeholder(1);
        assert_eq!(expr.evaluate_with(&[10, 3]), Ok(7));
        assert_eq!(
            expr.evaluate_with(&[10]),
            Err(EvalError::MissingArgument { index: 1, len: 1 })
        );
    }

    #[test]
    fn borrowed_storage_is_reported() {
        let cell = RefCell::new(1_i32);
        let expr = term_mut(&cell) + 1;
        let _writer = cell.borrow_mut();
        assert_eq!(
            evaluate(&expr),
            Err(EvalError::SourceBorrowed { operand: "i32" })
        );
    }
}
