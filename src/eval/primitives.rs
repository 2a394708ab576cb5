//! `Operand` impls for the numeric primitives and `String`.

use alloc::string::String;

use super::dispatch::EvalPlus;

crate::operand!(i8, i16, i32, i64, i128, isize);
crate::operand!(u8, u16, u32, u64, u128, usize);
crate::operand!(f32, f64);

/// `String` has no `Add<String>`; `Plus` concatenates.
impl EvalPlus for String {
    fn eval_plus(mut self, rhs: Self) -> Self {
        self.push_str(&rhs);
        self
    }
}

crate::operand!(String);

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;
    use crate::{BinaryOp, Operand};

    #[test]
    fn numbers_use_native_operators() {
        assert_eq!(i32::apply(BinaryOp::Minus, 1, 42), Some(-41));
        assert_eq!(u8::apply(BinaryOp::Divides, 9, 3), Some(3));
        assert_eq!(f64::apply(BinaryOp::Multiplies, 1.5, 2.0), Some(3.0));
    }

    #[test]
    fn strings_concatenate_and_nothing_else() {
        let joined = String::apply(BinaryOp::Plus, "ab".to_string(), "cd".to_string());
        assert_eq!(joined.as_deref(), Some("abcd"));
        assert_eq!(String::apply(BinaryOp::Minus, "ab".to_string(), "cd".to_string()), None);
    }

    #[test]
    fn primitives_render_with_display() {
        assert_eq!(1.0_f64.render().as_deref(), Some("1"));
        assert_eq!("x".to_string().render().as_deref(), Some("x"));
    }
}
