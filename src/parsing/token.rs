
//! Single-character tokens of an infix expression.

use super::operator::{Operator, OperatorTable};
use super::source::Span;

use std::fmt::{self, Display, Formatter};

/// One character of the input, classified, together with its
/// position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
  kind: TokenKind,
  span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
  /// A letter or digit.
  Operand(char),
  /// One of the binary operators in the active [`OperatorTable`].
  Operator(Operator),
  LeftParen,
  RightParen,
  /// Anything else. These are dispatched like an operator of the
  /// lowest precedence.
  Unrecognized(char),
}

impl Token {
  pub fn new(kind: TokenKind, span: Span) -> Self {
    Self { kind, span }
  }

  /// Classifies the character `ch`, found at byte offset `offset`.
  /// Operand classification is by [`char::is_alphanumeric`] alone.
  pub fn classify(ch: char, offset: usize, table: &OperatorTable) -> Self {
    let kind = if ch.is_alphanumeric() {
      TokenKind::Operand(ch)
    } else if ch == '(' {
      TokenKind::LeftParen
    } else if ch == ')' {
      TokenKind::RightParen
    } else if let Some(op) = table.get(ch) {
      TokenKind::Operator(*op)
    } else {
      TokenKind::Unrecognized(ch)
    };
    Self::new(kind, Span::of_char(offset, ch))
  }

  pub fn kind(&self) -> &TokenKind {
    &self.kind
  }

  pub fn span(&self) -> Span {
    self.span
  }

  /// The source character this token was read from.
  pub fn ch(&self) -> char {
    match self.kind {
      TokenKind::Operand(c) | TokenKind::Unrecognized(c) => c,
      TokenKind::Operator(op) => op.symbol(),
      TokenKind::LeftParen => '(',
      TokenKind::RightParen => ')',
    }
  }

  pub fn is_operand(&self) -> bool {
    matches!(self.kind, TokenKind::Operand(_))
  }

  pub fn is_left_paren(&self) -> bool {
    matches!(self.kind, TokenKind::LeftParen)
  }

  pub fn is_right_paren(&self) -> bool {
    matches!(self.kind, TokenKind::RightParen)
  }

  pub fn is_whitespace(&self) -> bool {
    self.ch().is_whitespace()
  }

  /// The operator properties this token carries on the operator
  /// stack. Unrecognized characters bind as a left-associative
  /// operator of precedence
  /// [`Precedence::NONE`](super::operator::Precedence::NONE). Operands and
  /// parentheses have no binding; in particular a `(` on the stack is
  /// never popped by a precedence comparison.
  pub fn binding(&self) -> Option<Operator> {
    match self.kind {
      TokenKind::Operator(op) => Some(op),
      TokenKind::Unrecognized(c) => Some(Operator::lowest(c)),
      TokenKind::Operand(_) | TokenKind::LeftParen | TokenKind::RightParen => None,
    }
  }
}

impl Display for Token {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.ch())
  }
}

/// Splits `input` into one token per character, left to right.
pub fn tokenize<'a>(input: &'a str, table: &'a OperatorTable) -> impl Iterator<Item = Token> + 'a {
  input.char_indices().map(move |(offset, ch)| Token::classify(ch, offset, table))
}
