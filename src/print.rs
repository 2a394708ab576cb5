//! Indented diagnostic dump of a tree.
//!
//! ```text
//! expr<+>
//!     term<f64>[=1]
//!     expr<->
//!         term<&f64>[=42]
//!         placeholder<0>
//! ```
//!
//! The format is meant for tests and debugging, not as a stable wire format.

use core::any::type_name;
use core::fmt;

use crate::eval::Operand;
use crate::expr::{CaptureMode, Expr, Terminal};

/// Rendered in place of values whose type has no `Display`.
pub const UNPRINTABLE: &str = "<<unprintable-value>>";

/// Rendered in place of a mutably captured value that is borrowed for writing.
pub const BORROWED: &str = "<<borrowed-value>>";

pub const DEFAULT_INDENT: &str = "    ";

#[derive(Clone, Copy, Debug)]
pub struct PrintOptions<'s> {
    /// Written once per nesting level.
    pub indent: &'s str,
}

impl Default for PrintOptions<'_> {
    fn default() -> Self {
        PrintOptions { indent: DEFAULT_INDENT }
    }
}

/// Writes the dump of `expr` into `sink` and hands the sink back.
pub fn print<W, T>(sink: W, expr: &Expr<'_, T>) -> Result<W, fmt::Error>
where
    W: fmt::Write,
    T: Operand,
{
    print_with(sink, expr, PrintOptions::default())
}

pub fn print_with<W, T>(mut sink: W, expr: &Expr<'_, T>, options: PrintOptions<'_>) -> Result<W, fmt::Error>
where
    W: fmt::Write,
    T: Operand,
{
    print_impl(&mut sink, expr, 0, options.indent)?;
    Ok(sink)
}

fn print_impl<W, T>(os: &mut W, expr: &Expr<'_, T>, indent: usize, indent_str: &str) -> fmt::Result
where
    W: fmt::Write + ?Sized,
    T: Operand,
{
    for _ in 0..indent {
        os.write_str(indent_str)?;
    }

    match expr {
        Expr::Terminal(term) => {
            os.write_str("term<")?;
            print_type::<W, T>(os, term.mode())?;
            os.write_str(">[=")?;
            print_value(os, term)?;
            os.write_str("]\n")
        }
        Expr::Placeholder(index) => writeln!(os, "placeholder<{index}>"),
        Expr::Binary(op, children) => {
            writeln!(os, "expr<{}>", op.symbol())?;
            for child in children.iter() {
                print_impl(os, child, indent + 1, indent_str)?;
            }
            Ok(())
        }
    }
}

fn print_type<W: fmt::Write + ?Sized, T>(os: &mut W, mode: CaptureMode) -> fmt::Result {
    match mode {
        CaptureMode::OwnedValue => {}
        CaptureMode::BorrowTemporary => os.write_str("&")?,
        CaptureMode::BorrowMutable => os.write_str("&mut ")?,
    }
    os.write_str(type_name::<T>())
}

fn print_value<W: fmt::Write + ?Sized, T: Operand>(os: &mut W, term: &Terminal<'_, T>) -> fmt::Result {
    match term.get() {
        Ok(value) => match value.render() {
            Some(text) => os.write_str(&text),
            None => os.write_str(UNPRINTABLE),
        },
        Err(_) => os.write_str(BORROWED),
    }
}

impl<T: Operand> fmt::Display for Expr<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        print_impl(f, self, 0, DEFAULT_INDENT)
    }
}
