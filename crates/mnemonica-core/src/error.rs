//! Error types for `mnemonica-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// The field name is not one of the recognised fact fields.
  #[error("field {0:?} is not a valid field name")]
  InvalidField(String),

  /// A `largest_cities:<n>` rank that is not a number in `1..=5`.
  #[error("largest city rank {0:?} is not in 1..=5")]
  RankOutOfRange(String),

  #[error("value {value:?} for field {field} is not an integer")]
  InvalidNumber { field: String, value: String },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
