
//! Conversion of infix arithmetic expressions into postfix (Reverse
//! Polish) notation, using the shunting yard algorithm.
//!
//! Operands are single letters or digits, operators are `+ - * / ^`,
//! and `(`/`)` group subexpressions.

pub mod error;
pub mod mode;
pub mod parsing;

pub use error::Error;
pub use mode::{ConversionMode, ParseModeError};
pub use parsing::operator::precedence;
pub use parsing::shunting_yard::{
  convert, infix_to_postfix, ConversionError, Converter, Postfix, INVALID_EXPRESSION,
};
