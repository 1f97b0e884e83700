//! Errors raised by operators themselves.
//!
//! Upstream errors travel through every operator untouched in the stream's own
//! `Err` type. The conditions below are the only ones an operator originates;
//! operators that can raise them require `Err: From<SequenceError>`.

use std::convert::Infallible;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SequenceError {
  /// An unseeded fold (`reduce`, `sum`, `min`, `max`, `average`, `min_by`,
  /// ...) saw its source complete without a single value.
  #[error("sequence contains no elements")]
  Empty,
  /// `element_at` saw its source complete before reaching `index`.
  #[error("index {index} is out of range: the sequence completed before reaching it")]
  OutOfRange { index: usize },
}

/// Lets infallible sources be widened with `err_into::<SequenceError>()`.
impl From<Infallible> for SequenceError {
  fn from(never: Infallible) -> Self { match never {} }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[rxext_macro::test]
  fn messages() {
    assert_eq!(SequenceError::Empty.to_string(), "sequence contains no elements");
    assert_eq!(
      SequenceError::OutOfRange { index: 4 }.to_string(),
      "index 4 is out of range: the sequence completed before reaching it"
    );
  }
}
