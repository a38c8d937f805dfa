
use thiserror::Error;
use bitflags::bitflags;

use std::str::FromStr;

/// Flags controlling how an expression is converted. The default
/// (empty) mode reproduces the plain algorithm exactly; every flag is
/// an opt-in deviation from it.
///
/// This structure is cheap to clone, but its exact implementation is
/// private.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConversionMode {
  inner: ConversionModeBits,
}

bitflags! {
  #[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
  struct ConversionModeBits: u8 {
    const RIGHT_ASSOC_POWER   = 0b0001;
    const STRICT_PARENS       = 0b0010;
    const SKIP_WHITESPACE     = 0b0100;
    const REJECT_UNRECOGNIZED = 0b1000;
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown conversion mode flag '{flag}'")]
pub struct ParseModeError {
  flag: String,
}

impl ConversionMode {
  pub fn new() -> Self {
    Self::default()
  }

  /// Off by default, in which case `^` pops an `^` already on the
  /// stack like every other operator, so `a^b^c` converts to `ab^c^`.
  /// When on, `^` is right-associative and `a^b^c` converts to
  /// `abc^^`.
  pub fn has_right_assoc_power(&self) -> bool {
    self.inner.contains(ConversionModeBits::RIGHT_ASSOC_POWER)
  }

  pub fn set_right_assoc_power(&mut self, mode: bool) {
    self.inner.set(ConversionModeBits::RIGHT_ASSOC_POWER, mode);
  }

  /// Off by default, in which case a `)` with no matching `(` simply
  /// drains the operator stack. When on, it is reported as an error.
  pub fn has_strict_parens(&self) -> bool {
    self.inner.contains(ConversionModeBits::STRICT_PARENS)
  }

  pub fn set_strict_parens(&mut self, mode: bool) {
    self.inner.set(ConversionModeBits::STRICT_PARENS, mode);
  }

  /// Whitespace is ignored entirely when this flag is on. Otherwise
  /// it is an unrecognized character like any other.
  pub fn has_skip_whitespace(&self) -> bool {
    self.inner.contains(ConversionModeBits::SKIP_WHITESPACE)
  }

  pub fn set_skip_whitespace(&mut self, mode: bool) {
    self.inner.set(ConversionModeBits::SKIP_WHITESPACE, mode);
  }

  /// When on, characters which are neither operands, operators, nor
  /// parentheses are reported as errors.
  pub fn has_reject_unrecognized(&self) -> bool {
    self.inner.contains(ConversionModeBits::REJECT_UNRECOGNIZED)
  }

  pub fn set_reject_unrecognized(&mut self, mode: bool) {
    self.inner.set(ConversionModeBits::REJECT_UNRECOGNIZED, mode);
  }

  /// Sets every flag which is set in `other`.
  pub fn merge(&mut self, other: ConversionMode) {
    self.inner |= other.inner;
  }
}

/// Parses a comma-separated list of flag names, such as
/// `right-assoc-power,strict-parens`. Empty entries are ignored.
impl FromStr for ConversionMode {
  type Err = ParseModeError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let mut mode = ConversionMode::new();
    for flag in s.split(',').map(str::trim).filter(|flag| !flag.is_empty()) {
      match flag {
        "right-assoc-power" => mode.set_right_assoc_power(true),
        "strict-parens" => mode.set_strict_parens(true),
        "skip-whitespace" => mode.set_skip_whitespace(true),
        "reject-unrecognized" => mode.set_reject_unrecognized(true),
        _ => return Err(ParseModeError { flag: flag.to_owned() }),
      }
    }
    Ok(mode)
  }
}
