
use super::token::Token;

/// The auxiliary stack of the shunting yard algorithm. Holds
/// operators (and unrecognized characters, which behave as
/// operators) awaiting emission, along with open parentheses acting
/// as markers. Operands and closing parentheses are never pushed.
#[derive(Debug, Clone, Default)]
pub struct OperatorStack {
  elements: Vec<Token>,
}

impl OperatorStack {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_capacity(capacity: usize) -> Self {
    Self { elements: Vec::with_capacity(capacity) }
  }

  pub fn len(&self) -> usize {
    self.elements.len()
  }

  pub fn is_empty(&self) -> bool {
    self.elements.is_empty()
  }

  pub fn push(&mut self, token: Token) {
    debug_assert!(
      !token.is_operand() && !token.is_right_paren(),
      "operands and ')' do not belong on the operator stack, got {:?}",
      token,
    );
    self.elements.push(token);
  }

  pub fn pop(&mut self) -> Option<Token> {
    self.elements.pop()
  }

  pub fn peek(&self) -> Option<&Token> {
    self.elements.last()
  }

  /// Pops the top of the stack if it satisfies `predicate`.
  pub fn pop_if<F>(&mut self, predicate: F) -> Option<Token>
  where F: FnOnce(&Token) -> bool {
    if predicate(self.peek()?) {
      self.pop()
    } else {
      None
    }
  }
}
