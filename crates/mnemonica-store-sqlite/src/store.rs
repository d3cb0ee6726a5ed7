//! [`SqliteStore`] and [`Session`], the SQLite implementations of
//! [`CountryStore`].

use std::path::{Path, PathBuf};

use mnemonica_core::{Country, CountryFact, store::CountryStore};
use rusqlite::{Connection, OpenFlags, OptionalExtension as _};

use crate::{
  encode::RawCountry,
  schema::{SCHEMA, TABLE},
  Error, Result,
};

/// Database location used when nothing else is configured.
pub const DEFAULT_DB_PATH: &str = "data/mnemonica.db";

// ─── Session ─────────────────────────────────────────────────────────────────

/// Store operations over a connection owned by the caller.
///
/// Nothing is committed here. Wrap a [`rusqlite::Transaction`] (it derefs to
/// a [`Connection`]) to group several operations and commit them together.
pub struct Session<'c> {
  conn: &'c Connection,
}

impl<'c> Session<'c> {
  pub fn new(conn: &'c Connection) -> Self { Self { conn } }

  fn table_exists(&self) -> Result<bool> {
    Ok(
      self
        .conn
        .query_row(
          "SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1",
          rusqlite::params![TABLE],
          |_| Ok(true),
        )
        .optional()?
        .unwrap_or(false),
    )
  }
}

impl CountryStore for Session<'_> {
  type Error = Error;

  fn create_schema(&self) -> Result<()> {
    if self.table_exists()? {
      return Err(Error::SchemaAlreadyExists);
    }
    self.conn.execute_batch(SCHEMA)?;
    tracing::info!(table = TABLE, "created schema");
    Ok(())
  }

  fn get_country(&self, name: &str) -> Result<Country> {
    let raw: Option<RawCountry> = self
      .conn
      .query_row(
        "SELECT country, capital, largest_cities, population, area,
                highest_point, neighbors
         FROM data WHERE country = ?1",
        rusqlite::params![name],
        RawCountry::from_row,
      )
      .optional()?;

    tracing::debug!(country = name, found = raw.is_some(), "looked up country");

    match raw {
      Some(raw) => raw.into_country(),
      None => Ok(Country::new(name)),
    }
  }

  fn add_country(&self, country: &Country) -> Result<()> {
    let raw = RawCountry::from_country(country)?;

    let deleted = self.conn.execute(
      "DELETE FROM data WHERE country = ?1",
      rusqlite::params![raw.country],
    )?;
    self.conn.execute(
      "INSERT INTO data (
         country, capital, largest_cities, population, area,
         highest_point, neighbors
       ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
      rusqlite::params![
        raw.country,
        raw.capital,
        raw.largest_cities,
        raw.population,
        raw.area,
        raw.highest_point,
        raw.neighbors,
      ],
    )?;

    tracing::debug!(country = %raw.country, replaced = deleted > 0, "stored country");
    Ok(())
  }

  fn list_countries(&self) -> Result<Vec<String>> {
    let mut stmt = self.conn.prepare("SELECT country FROM data ORDER BY country")?;
    let names = stmt
      .query_map([], |row| row.get::<_, String>(0))?
      .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(names)
  }
}

// ─── Store ───────────────────────────────────────────────────────────────────

/// A country store backed by a single SQLite file.
///
/// Holds only the path. Every operation opens its own connection, runs inside
/// one transaction, commits, and closes the connection before returning. On
/// error the transaction is rolled back when it is dropped.
#[derive(Debug, Clone)]
pub struct SqliteStore {
  path: PathBuf,
}

impl SqliteStore {
  /// A store for the database file at `path`. Nothing is opened yet.
  pub fn new(path: impl Into<PathBuf>) -> Self { Self { path: path.into() } }

  pub fn path(&self) -> &Path { &self.path }

  /// Run `f` against a [`Session`] inside one transaction.
  ///
  /// Commits when `f` returns `Ok`; otherwise nothing it wrote is kept. The
  /// database file must already exist.
  pub fn transaction<T, F>(&self, f: F) -> Result<T>
  where
    F: FnOnce(&Session<'_>) -> Result<T>,
  {
    self.transaction_with(OpenFlags::empty(), f)
  }

  fn transaction_with<T, F>(&self, extra: OpenFlags, f: F) -> Result<T>
  where
    F: FnOnce(&Session<'_>) -> Result<T>,
  {
    let flags = OpenFlags::SQLITE_OPEN_READ_WRITE
      | OpenFlags::SQLITE_OPEN_URI
      | OpenFlags::SQLITE_OPEN_NO_MUTEX
      | extra;
    let mut conn = Connection::open_with_flags(&self.path, flags)?;
    let tx = conn.transaction()?;
    let out = f(&Session::new(&tx))?;
    tx.commit()?;
    Ok(out)
  }
}

impl CountryStore for SqliteStore {
  type Error = Error;

  /// The only operation allowed to create the database file.
  fn create_schema(&self) -> Result<()> {
    self.transaction_with(OpenFlags::SQLITE_OPEN_CREATE, |s| s.create_schema())
  }

  fn get_country(&self, name: &str) -> Result<Country> {
    self.transaction(|s| s.get_country(name))
  }

  fn add_country(&self, country: &Country) -> Result<()> {
    self.transaction(|s| s.add_country(country))
  }

  fn list_countries(&self) -> Result<Vec<String>> {
    self.transaction(|s| s.list_countries())
  }

  /// Read, mutate and write back in a single transaction.
  fn apply_fact(&self, name: &str, fact: CountryFact) -> Result<Country> {
    let field = fact.field();
    let country = self.transaction(|s| s.apply_fact(name, fact))?;
    tracing::info!(country = name, %field, "added fact");
    Ok(country)
  }
}
