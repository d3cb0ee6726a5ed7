//! Error type for `mnemonica-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("{0}")]
  Core(#[from] mnemonica_core::Error),

  /// The database file could not be opened, read or written.
  #[error("database error: {0}")]
  Database(#[from] rusqlite::Error),

  #[error("table `data` already exists")]
  SchemaAlreadyExists,

  #[error("country name must not be empty")]
  EmptyName,

  /// A value would be split apart on read because it contains the list
  /// delimiter.
  #[error("{field} value {value:?} contains a tab character")]
  DelimiterInValue { field: &'static str, value: String },

  /// An empty neighbor would vanish on read, since empty entries are
  /// dropped when the column is split.
  #[error("{field} value must not be empty")]
  EmptyValue { field: &'static str },

  #[error("stored row for {country:?} is malformed: {reason}")]
  MalformedRow { country: String, reason: String },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
