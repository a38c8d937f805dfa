
//! Conversion of infix expressions to postfix notation, by the
//! shunting yard algorithm.

use super::operator::{Operator, OperatorTable};
use super::operator_stack::OperatorStack;
use super::source::Span;
use super::token::{tokenize, Token, TokenKind};
use crate::mode::ConversionMode;

use log::{debug, trace};
use once_cell::sync::Lazy;
use thiserror::Error;

use std::fmt::{self, Display, Formatter};

/// The text produced by [`infix_to_postfix`] when the conversion
/// fails.
pub const INVALID_EXPRESSION: &str = "Invalid Expression";

// Holds only the standard table and the empty mode; every conversion
// gets its own stack and output.
static DEFAULT_CONVERTER: Lazy<Converter> = Lazy::new(Converter::new);

/// Converts infix expressions into postfix. A `Converter` keeps no
/// state between calls; the operator stack and output buffer live
/// only as long as one call to [`Converter::convert`].
#[derive(Debug, Clone)]
pub struct Converter {
  table: OperatorTable,
  mode: ConversionMode,
}

/// A successfully converted expression, in postfix order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Postfix {
  tokens: Vec<Token>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConversionError {
  #[error("Invalid Expression: unmatched '(' at position {}", .span.start)]
  UnmatchedLeftParen { span: Span },
  #[error("Invalid Expression: unmatched ')' at position {}", .span.start)]
  UnmatchedRightParen { span: Span },
  #[error("Invalid Expression: unrecognized character {ch:?} at position {}", .span.start)]
  UnrecognizedCharacter { ch: char, span: Span },
}

impl Converter {
  pub fn new() -> Self {
    Self::with_mode(ConversionMode::default())
  }

  pub fn with_mode(mode: ConversionMode) -> Self {
    let table = if mode.has_right_assoc_power() {
      OperatorTable::standard_with_right_assoc_power()
    } else {
      OperatorTable::standard()
    };
    Self { table, mode }
  }

  /// Uses a custom operator table. The table decides precedence and
  /// associativity outright, so the `RIGHT_ASSOC_POWER` flag of
  /// `mode` is not consulted.
  pub fn with_table(table: OperatorTable, mode: ConversionMode) -> Self {
    Self { table, mode }
  }

  pub fn table(&self) -> &OperatorTable {
    &self.table
  }

  pub fn mode(&self) -> ConversionMode {
    self.mode
  }

  pub fn convert(&self, expression: &str) -> Result<Postfix, ConversionError> {
    debug!("Converting {:?} with {:?}", expression, self.mode);
    let mut operator_stack = OperatorStack::new();
    let mut output: Vec<Token> = Vec::with_capacity(expression.len());

    for token in tokenize(expression, &self.table) {
      if self.mode.has_skip_whitespace() && token.is_whitespace() {
        continue;
      }
      trace!("Token {:?} at {}", token.ch(), token.span());
      match token.kind() {
        TokenKind::Operand(_) => {
          output.push(token);
        }
        TokenKind::LeftParen => {
          operator_stack.push(token);
        }
        TokenKind::RightParen => {
          self.close_group(token, &mut operator_stack, &mut output)?;
        }
        TokenKind::Unrecognized(ch) if self.mode.has_reject_unrecognized() => {
          return Err(ConversionError::UnrecognizedCharacter { ch: *ch, span: token.span() });
        }
        TokenKind::Operator(op) => {
          push_operator(token, *op, &mut operator_stack, &mut output);
        }
        TokenKind::Unrecognized(ch) => {
          push_operator(token, Operator::lowest(*ch), &mut operator_stack, &mut output);
        }
      }
    }

    // Pop and emit remaining operators. An open paren surfacing here
    // was never closed.
    while let Some(top) = operator_stack.pop() {
      if top.is_left_paren() {
        debug!("Unmatched '(' at {}", top.span());
        return Err(ConversionError::UnmatchedLeftParen { span: top.span() });
      }
      output.push(top);
    }

    let postfix = Postfix { tokens: output };
    debug!("Converted {:?} to {:?}", expression, postfix.to_string());
    Ok(postfix)
  }

  /// Emits everything above the nearest `(` and discards the `(`.
  fn close_group(
    &self,
    right_paren: Token,
    operator_stack: &mut OperatorStack,
    output: &mut Vec<Token>,
  ) -> Result<(), ConversionError> {
    while let Some(top) = operator_stack.pop() {
      if top.is_left_paren() {
        return Ok(());
      }
      output.push(top);
    }
    if self.mode.has_strict_parens() {
      Err(ConversionError::UnmatchedRightParen { span: right_paren.span() })
    } else {
      trace!("Ignoring unmatched ')' at {}", right_paren.span());
      Ok(())
    }
  }
}

/// Pops every operator which binds at least as tightly as `incoming`
/// (stopping at a `(`), then pushes `token`, which carries `incoming`.
fn push_operator(
  token: Token,
  incoming: Operator,
  operator_stack: &mut OperatorStack,
  output: &mut Vec<Token>,
) {
  while let Some(top) = operator_stack.pop_if(|top| {
    top.binding().is_some_and(|op| op.yields_to(incoming.precedence(), incoming.associativity()))
  }) {
    output.push(top);
  }
  operator_stack.push(token);
}

impl Default for Converter {
  fn default() -> Self {
    Self::new()
  }
}

impl Postfix {
  pub fn tokens(&self) -> &[Token] {
    &self.tokens
  }

  pub fn into_tokens(self) -> Vec<Token> {
    self.tokens
  }

  pub fn len(&self) -> usize {
    self.tokens.len()
  }

  pub fn is_empty(&self) -> bool {
    self.tokens.is_empty()
  }

  pub fn iter(&self) -> impl Iterator<Item = &Token> {
    self.tokens.iter()
  }
}

impl Display for Postfix {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    for token in &self.tokens {
      write!(f, "{}", token)?;
    }
    Ok(())
  }
}

impl IntoIterator for Postfix {
  type Item = Token;
  type IntoIter = ::std::vec::IntoIter<Token>;

  fn into_iter(self) -> Self::IntoIter {
    self.tokens.into_iter()
  }
}

impl ConversionError {
  /// Position of the offending character.
  pub fn span(&self) -> Span {
    match self {
      ConversionError::UnmatchedLeftParen { span } => *span,
      ConversionError::UnmatchedRightParen { span } => *span,
      ConversionError::UnrecognizedCharacter { span, .. } => *span,
    }
  }
}

/// Converts `expression` with the default converter.
pub fn convert(expression: &str) -> Result<Postfix, ConversionError> {
  DEFAULT_CONVERTER.convert(expression)
}

/// Converts `expression` with the default converter, producing the
/// postfix text, or [`INVALID_EXPRESSION`] if the expression has an
/// unclosed `(`.
pub fn infix_to_postfix(expression: &str) -> String {
  match convert(expression) {
    Ok(postfix) => postfix.to_string(),
    Err(_) => INVALID_EXPRESSION.to_owned(),
  }
}
