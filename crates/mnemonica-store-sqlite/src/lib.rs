//! SQLite backend for the Mnemonica country fact store.
//!
//! [`SqliteStore`] opens the database file per operation and commits before
//! returning. [`Session`] runs the same operations against a connection or
//! transaction the caller already holds, so several of them can share one
//! transaction.

mod encode;
mod schema;
mod store;

pub mod error;

pub use encode::DELIMITER;
pub use error::{Error, Result};
pub use store::{DEFAULT_DB_PATH, Session, SqliteStore};
