
/// The precedence of an operator. Higher values bind more tightly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Precedence(i32);

impl Precedence {
  /// Precedence of anything which is not a known operator, including
  /// the left parenthesis. Lower than every real operator.
  pub const NONE: Precedence = Precedence(-1);

  pub const fn new(n: i32) -> Precedence {
    Precedence(n)
  }

  pub const fn value(self) -> i32 {
    self.0
  }
}
