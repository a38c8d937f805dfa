
use crate::mode::ParseModeError;
use crate::parsing::shunting_yard::ConversionError;

use thiserror::Error;

use std::error::{Error as StdError};

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
  #[error("{0}")]
  CustomError(Box<dyn StdError + Send + Sync + 'static>),
  #[error("{0}")]
  ConversionError(#[from] ConversionError),
  #[error("{0}")]
  ModeError(#[from] ParseModeError),
}

impl Error {
  pub fn custom_error(err: impl StdError + Send + Sync + 'static) -> Self {
    Self::CustomError(Box::new(err))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::mode::ConversionMode;
  use crate::parsing::shunting_yard::convert;

  fn convert_with_mode(mode: &str, expression: &str) -> Result<String, Error> {
    let mode: ConversionMode = mode.parse()?;
    let postfix = crate::Converter::with_mode(mode).convert(expression)?;
    Ok(postfix.to_string())
  }

  #[test]
  fn test_from_conversion_error() {
    let err = Error::from(convert("(a").unwrap_err());
    assert!(matches!(err, Error::ConversionError(ConversionError::UnmatchedLeftParen { .. })));
    assert_eq!(err.to_string(), "Invalid Expression: unmatched '(' at position 0");
  }

  #[test]
  fn test_custom_error() {
    let io_err = std::io::Error::new(std::io::ErrorKind::Other, "stdin closed");
    let err = Error::custom_error(io_err);
    assert!(matches!(err, Error::CustomError(_)));
    assert_eq!(err.to_string(), "stdin closed");
  }

  #[test]
  fn test_question_mark_conversions() {
    assert_eq!(convert_with_mode("strict-parens", "a*b").unwrap(), "ab*");
    assert!(matches!(convert_with_mode("bogus", "a*b"), Err(Error::ModeError(_))));
    assert!(matches!(convert_with_mode("strict-parens", "a)"), Err(Error::ConversionError(_))));
  }
}
