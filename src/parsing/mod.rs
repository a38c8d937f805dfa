
//! Tokenizing and shunting-yard conversion of infix expressions.

pub mod operator;
pub mod operator_stack;
pub mod shunting_yard;
pub mod source;
pub mod token;
