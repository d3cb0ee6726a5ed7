//! The `CountryStore` trait.
//!
//! Implemented by storage backends (e.g. `mnemonica-store-sqlite`). The CLI
//! drives a store only through this abstraction.

use crate::{country::Country, fact::CountryFact};

/// Abstraction over a country record store.
///
/// Every write replaces the whole record; there are no partial row updates.
pub trait CountryStore {
  type Error: std::error::Error + From<crate::Error> + Send + Sync + 'static;

  /// Create the backing table. Fails if it already exists.
  fn create_schema(&self) -> Result<(), Self::Error>;

  /// Look up a country by exact name.
  ///
  /// A missing country is not an error: the default record for `name` is
  /// returned instead, and nothing is written.
  fn get_country(&self, name: &str) -> Result<Country, Self::Error>;

  /// Insert `country`, replacing any existing record with the same name.
  fn add_country(&self, country: &Country) -> Result<(), Self::Error>;

  /// Names of every stored country, sorted.
  fn list_countries(&self) -> Result<Vec<String>, Self::Error>;

  /// Load `name` (or its default), apply `fact`, and store the result.
  ///
  /// Returns the record as written.
  fn apply_fact(&self, name: &str, fact: CountryFact) -> Result<Country, Self::Error> {
    let mut country = self.get_country(name)?;
    country.apply(fact);
    self.add_country(&country)?;
    Ok(country)
  }

  /// String-keyed form of [`apply_fact`](Self::apply_fact).
  ///
  /// `field` is one of `capital`, `population`, `area`, `highest_point`,
  /// `largest_cities:<rank>` or `neighbor`. Parsing happens before the store
  /// is touched, so a bad field never reaches storage.
  fn add_fact(&self, name: &str, field: &str, value: &str) -> Result<Country, Self::Error> {
    let fact = CountryFact::parse(field, value)?;
    self.apply_fact(name, fact)
  }
}
