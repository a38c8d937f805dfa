
use super::Operator;
use super::precedence::Precedence;
use super::associativity::Associativity;

use std::collections::{hash_map, HashMap};

/// A table of binary operators, indexed by their symbol.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OperatorTable {
  by_symbol: HashMap<char, Operator>,
}

impl OperatorTable {
  pub fn new() -> OperatorTable {
    OperatorTable::default()
  }

  pub fn with_capacity(capacity: usize) -> OperatorTable {
    OperatorTable {
      by_symbol: HashMap::with_capacity(capacity),
    }
  }

  pub fn get(&self, symbol: char) -> Option<&Operator> {
    self.by_symbol.get(&symbol)
  }

  pub fn contains(&self, symbol: char) -> bool {
    self.by_symbol.contains_key(&symbol)
  }

  /// Inserts an operator, replacing (and returning) any operator
  /// previously registered under the same symbol.
  pub fn insert(&mut self, op: Operator) -> Option<Operator> {
    self.by_symbol.insert(op.symbol(), op)
  }

  /// Changes the associativity of the operator with the given symbol.
  /// Returns false, leaving the table unchanged, if no such operator
  /// exists.
  pub fn set_associativity(&mut self, symbol: char, assoc: Associativity) -> bool {
    match self.by_symbol.get_mut(&symbol) {
      Some(op) => {
        *op = op.with_associativity(assoc);
        true
      }
      None => false,
    }
  }

  /// The five arithmetic operators. Every operator is
  /// left-associative, including `^`, so that a run of operators at
  /// equal precedence is always emitted left to right.
  pub fn standard() -> OperatorTable {
    vec![
      Operator::new('^', Associativity::LEFT, Precedence::new(3)),
      Operator::new('*', Associativity::LEFT, Precedence::new(2)),
      Operator::new('/', Associativity::LEFT, Precedence::new(2)),
      Operator::new('+', Associativity::LEFT, Precedence::new(1)),
      Operator::new('-', Associativity::LEFT, Precedence::new(1)),
    ].into_iter().collect()
  }

  /// As [`OperatorTable::standard`], but with `^` right-associative.
  pub fn standard_with_right_assoc_power() -> OperatorTable {
    let mut table = OperatorTable::standard();
    table.set_associativity('^', Associativity::RIGHT);
    table
  }

  pub fn len(&self) -> usize {
    self.by_symbol.len()
  }

  pub fn is_empty(&self) -> bool {
    self.by_symbol.is_empty()
  }

  pub fn iter(&self) -> impl Iterator<Item = &Operator> {
    self.by_symbol.values()
  }
}

impl IntoIterator for OperatorTable {
  type Item = Operator;
  type IntoIter = hash_map::IntoValues<char, Operator>;

  fn into_iter(self) -> Self::IntoIter {
    self.by_symbol.into_values()
  }
}

impl FromIterator<Operator> for OperatorTable {
  fn from_iter<I>(iter: I) -> Self
  where I : IntoIterator<Item = Operator> {
    let iter = iter.into_iter();
    let (len_bound, _) = iter.size_hint();
    let mut table = OperatorTable::with_capacity(len_bound);
    for op in iter {
      table.insert(op);
    }
    table
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_standard_table_contents() {
    let table = OperatorTable::standard();
    assert_eq!(table.len(), 5);
    for symbol in ['+', '-', '*', '/', '^'] {
      assert!(table.contains(symbol), "missing operator {}", symbol);
    }
    assert!(!table.contains('('));
    assert!(!table.contains('%'));
  }

  #[test]
  fn test_standard_table_is_left_assoc() {
    let table = OperatorTable::standard();
    assert!(table.iter().all(|op| op.associativity().is_left_assoc()));
  }

  #[test]
  fn test_right_assoc_power_table() {
    let table = OperatorTable::standard_with_right_assoc_power();
    assert_eq!(table.get('^').unwrap().associativity(), Associativity::RIGHT);
    assert_eq!(table.get('^').unwrap().precedence(), Precedence::new(3));
    assert_eq!(table.get('*').unwrap().associativity(), Associativity::LEFT);
  }

  #[test]
  fn test_set_associativity_on_missing_operator() {
    let mut table = OperatorTable::standard();
    assert!(!table.set_associativity('%', Associativity::RIGHT));
    assert_eq!(table, OperatorTable::standard());
  }

  #[test]
  fn test_insert_replaces() {
    let mut table = OperatorTable::new();
    assert!(table.is_empty());
    assert_eq!(table.insert(Operator::new('#', Associativity::LEFT, Precedence::new(1))), None);
    let old = table.insert(Operator::new('#', Associativity::RIGHT, Precedence::new(4)));
    assert_eq!(old, Some(Operator::new('#', Associativity::LEFT, Precedence::new(1))));
    assert_eq!(table.get('#').unwrap().precedence(), Precedence::new(4));
  }
}
