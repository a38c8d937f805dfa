
mod precedence;
mod associativity;
mod table;

pub use precedence::Precedence;
pub use associativity::Associativity;
pub use table::OperatorTable;

use std::fmt::{self, Display, Formatter};

/// A binary infix operator: a single-character symbol together with
/// its precedence and associativity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Operator {
  symbol: char,
  assoc: Associativity,
  prec: Precedence,
}

/// Precedence level of the given character, higher meaning tighter
/// binding. Returns -1 for anything that is not one of the five
/// arithmetic operators, including `(`.
pub fn precedence(c: char) -> i32 {
  match c {
    '^' => 3,
    '*' | '/' => 2,
    '+' | '-' => 1,
    _ => Precedence::NONE.value(),
  }
}

impl Operator {
  pub const fn new(symbol: char, assoc: Associativity, prec: Precedence) -> Self {
    Operator { symbol, assoc, prec }
  }

  /// A left-associative operator of precedence [`Precedence::NONE`],
  /// looser than every operator in a table. Characters which are not
  /// otherwise recognized bind this way.
  pub const fn lowest(symbol: char) -> Self {
    Operator::new(symbol, Associativity::LEFT, Precedence::NONE)
  }

  pub fn symbol(&self) -> char {
    self.symbol
  }

  pub fn associativity(&self) -> Associativity {
    self.assoc
  }

  pub fn precedence(&self) -> Precedence {
    self.prec
  }

  pub fn with_associativity(self, assoc: Associativity) -> Self {
    Operator { assoc, ..self }
  }

  /// Whether this operator, sitting on top of the operator stack,
  /// must be emitted before `incoming` is pushed. Ties at equal
  /// precedence pop only when `incoming` is left-associative.
  pub fn yields_to(&self, incoming_prec: Precedence, incoming_assoc: Associativity) -> bool {
    incoming_prec < self.prec ||
      (incoming_prec == self.prec && incoming_assoc.is_left_assoc())
  }
}

impl Display for Operator {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.symbol)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_precedence_levels() {
    assert_eq!(precedence('^'), 3);
    assert_eq!(precedence('*'), 2);
    assert_eq!(precedence('/'), 2);
    assert_eq!(precedence('+'), 1);
    assert_eq!(precedence('-'), 1);
  }

  #[test]
  fn test_precedence_of_non_operators() {
    assert_eq!(precedence('('), -1);
    assert_eq!(precedence(')'), -1);
    assert_eq!(precedence('a'), -1);
    assert_eq!(precedence('7'), -1);
    assert_eq!(precedence(' '), -1);
  }

  #[test]
  fn test_precedence_agrees_with_standard_table() {
    let table = OperatorTable::standard();
    for op in table.iter() {
      assert_eq!(precedence(op.symbol()), op.precedence().value());
    }
  }

  #[test]
  fn test_left_assoc_yields_at_equal_precedence() {
    let plus = Operator::new('+', Associativity::LEFT, Precedence::new(1));
    assert!(plus.yields_to(Precedence::new(1), Associativity::LEFT));
    assert!(plus.yields_to(Precedence::NONE, Associativity::LEFT));
    assert!(!plus.yields_to(Precedence::new(2), Associativity::LEFT));
  }

  #[test]
  fn test_right_assoc_does_not_yield_at_equal_precedence() {
    let pow = Operator::new('^', Associativity::RIGHT, Precedence::new(3));
    assert!(!pow.yields_to(Precedence::new(3), Associativity::RIGHT));
    assert!(pow.yields_to(Precedence::new(2), Associativity::LEFT));
  }

  #[test]
  fn test_lowest_yields_to_nothing_looser() {
    let lowest = Operator::lowest('%');
    assert_eq!(lowest.precedence(), Precedence::NONE);
    assert!(lowest.yields_to(Precedence::NONE, Associativity::LEFT));
    assert!(!lowest.yields_to(Precedence::new(1), Associativity::LEFT));
  }

  #[test]
  fn test_display() {
    let op = Operator::new('*', Associativity::LEFT, Precedence::new(2));
    assert_eq!(op.to_string(), "*");
  }
}
