//! Encoding and decoding between [`Country`] and the plain columns of the
//! `data` table.
//!
//! `largest_cities` and `neighbors` are stored as a single TEXT column each,
//! joined by [`DELIMITER`]. No stored city or neighbor may contain the
//! delimiter; encoding rejects such values instead of writing a row that
//! would decode differently.

use std::collections::BTreeSet;

use mnemonica_core::{CITY_RANKS, Country};

use crate::{Error, Result};

/// Separator used for list and set columns.
pub const DELIMITER: char = '\t';

const DELIMITER_STR: &str = "\t";

// ─── Delimiter check ─────────────────────────────────────────────────────────

fn check_delimiter(field: &'static str, value: &str) -> Result<()> {
  if value.contains(DELIMITER) {
    return Err(Error::DelimiterInValue { field, value: value.to_owned() });
  }
  Ok(())
}

// ─── largest_cities ──────────────────────────────────────────────────────────

pub fn encode_cities(cities: &[String; CITY_RANKS]) -> Result<String> {
  for city in cities {
    check_delimiter("largest_cities", city)?;
  }
  Ok(cities.join(DELIMITER_STR))
}

pub fn decode_cities(country: &str, s: &str) -> Result<[String; CITY_RANKS]> {
  let cities: Vec<String> = s.split(DELIMITER).map(str::to_owned).collect();
  let found = cities.len();
  cities.try_into().map_err(|_| Error::MalformedRow {
    country: country.to_owned(),
    reason:  format!("expected {CITY_RANKS} largest cities, found {found}"),
  })
}

// ─── neighbors ───────────────────────────────────────────────────────────────

pub fn encode_neighbors(neighbors: &BTreeSet<String>) -> Result<String> {
  for neighbor in neighbors {
    if neighbor.is_empty() {
      return Err(Error::EmptyValue { field: "neighbor" });
    }
    check_delimiter("neighbor", neighbor)?;
  }
  Ok(
    neighbors
      .iter()
      .map(String::as_str)
      .collect::<Vec<_>>()
      .join(DELIMITER_STR),
  )
}

/// Joining an empty set yields `""`, which must come back as an empty set.
pub fn decode_neighbors(s: &str) -> BTreeSet<String> {
  s.split(DELIMITER)
    .filter(|n| !n.is_empty())
    .map(str::to_owned)
    .collect()
}

// ─── Row type ────────────────────────────────────────────────────────────────

/// Column values of one `data` row, in table order.
#[derive(Debug)]
pub struct RawCountry {
  pub country:        String,
  pub capital:        String,
  pub largest_cities: String,
  pub population:     i64,
  pub area:           i64,
  pub highest_point:  i64,
  pub neighbors:      String,
}

impl RawCountry {
  pub fn from_country(country: &Country) -> Result<Self> {
    if country.name.is_empty() {
      return Err(Error::EmptyName);
    }

    Ok(Self {
      country:        country.name.clone(),
      capital:        country.capital.clone(),
      largest_cities: encode_cities(&country.largest_cities)?,
      population:     country.population,
      area:           country.area,
      highest_point:  country.highest_point,
      neighbors:      encode_neighbors(&country.neighbors)?,
    })
  }

  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      country:        row.get(0)?,
      capital:        row.get(1)?,
      largest_cities: row.get(2)?,
      population:     row.get(3)?,
      area:           row.get(4)?,
      highest_point:  row.get(5)?,
      neighbors:      row.get(6)?,
    })
  }

  pub fn into_country(self) -> Result<Country> {
    let largest_cities = decode_cities(&self.country, &self.largest_cities)?;
    Ok(Country {
      largest_cities,
      neighbors: decode_neighbors(&self.neighbors),
      name: self.country,
      capital: self.capital,
      population: self.population,
      area: self.area,
      highest_point: self.highest_point,
    })
  }
}
