
/// The associativity of an infix operator, which decides how a chain
/// of operators at equal precedence is grouped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Associativity {
  left_assoc: bool,
}

impl Associativity {
  /// `a # b # c` groups as `(a # b) # c`.
  pub const LEFT: Associativity = Associativity { left_assoc: true };
  /// `a # b # c` groups as `a # (b # c)`.
  pub const RIGHT: Associativity = Associativity { left_assoc: false };

  pub const fn is_left_assoc(self) -> bool {
    self.left_assoc
  }
}
