
use std::fmt::{self, Display, Formatter};

/// Byte position of a character in the expression being converted.
/// Used for error reporting.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SourceOffset(pub usize);

/// A half-open span of source offsets, with `start` included and
/// `end` excluded.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
  pub start: SourceOffset,
  pub end: SourceOffset,
}

impl Span {
  pub fn new(start: SourceOffset, end: SourceOffset) -> Self {
    Self { start, end }
  }

  /// The span covering exactly the character `ch`, which begins at
  /// byte offset `start`.
  pub fn of_char(start: usize, ch: char) -> Self {
    Self::new(SourceOffset(start), SourceOffset(start + ch.len_utf8()))
  }
}

impl Display for SourceOffset {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

impl Display for Span {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}-{}", self.start, self.end)
  }
}
