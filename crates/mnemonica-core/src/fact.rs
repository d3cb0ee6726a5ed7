//! Facts: single-field updates applied to a [`Country`](crate::Country).
//!
//! Callers outside the crate speak in `(field, value)` string pairs such as
//! `("largest_cities:3", "Lyon")`. Those pairs are parsed once, at the
//! boundary, into a [`CountryFact`]; everything past that point matches on the
//! enum.

use std::{fmt, str::FromStr};

use crate::{Error, Result, country::Rank};

const LARGEST_CITIES: &str = "largest_cities";

// ─── FactField ───────────────────────────────────────────────────────────────

/// The recognised field names, without a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FactField {
  Capital,
  Population,
  Area,
  HighestPoint,
  /// `largest_cities:<n>`
  LargestCity(Rank),
  Neighbor,
}

impl FactField {
  /// Attach a raw string value, parsing integers for the numeric fields.
  pub fn with_value(self, value: &str) -> Result<CountryFact> {
    let number = || {
      value.trim().parse::<i64>().map_err(|_| Error::InvalidNumber {
        field: self.to_string(),
        value: value.to_owned(),
      })
    };

    Ok(match self {
      Self::Capital => CountryFact::SetCapital(value.to_owned()),
      Self::Population => CountryFact::SetPopulation(number()?),
      Self::Area => CountryFact::SetArea(number()?),
      Self::HighestPoint => CountryFact::SetHighestPoint(number()?),
      Self::LargestCity(rank) => CountryFact::SetLargestCity(rank, value.to_owned()),
      Self::Neighbor => CountryFact::AddNeighbor(value.to_owned()),
    })
  }
}

impl FromStr for FactField {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    match s {
      "capital" => Ok(Self::Capital),
      "population" => Ok(Self::Population),
      "area" => Ok(Self::Area),
      "highest_point" => Ok(Self::HighestPoint),
      "neighbor" => Ok(Self::Neighbor),
      other => {
        let suffix = other
          .strip_prefix(LARGEST_CITIES)
          .and_then(|rest| rest.strip_prefix(':'))
          .ok_or_else(|| Error::InvalidField(other.to_owned()))?;
        let out_of_range = || Error::RankOutOfRange(suffix.to_owned());
        if suffix.is_empty() || !suffix.bytes().all(|b| b.is_ascii_digit()) {
          return Err(out_of_range());
        }
        let position: usize = suffix.parse().map_err(|_| out_of_range())?;
        Ok(Self::LargestCity(Rank::new(position)?))
      }
    }
  }
}

impl fmt::Display for FactField {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Capital => f.write_str("capital"),
      Self::Population => f.write_str("population"),
      Self::Area => f.write_str("area"),
      Self::HighestPoint => f.write_str("highest_point"),
      Self::LargestCity(rank) => write!(f, "{LARGEST_CITIES}:{rank}"),
      Self::Neighbor => f.write_str("neighbor"),
    }
  }
}

// ─── CountryFact ─────────────────────────────────────────────────────────────

/// One update to a country record, with its payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CountryFact {
  SetCapital(String),
  SetPopulation(i64),
  SetArea(i64),
  SetHighestPoint(i64),
  SetLargestCity(Rank, String),
  /// Set insert; adding an existing neighbor changes nothing.
  AddNeighbor(String),
}

impl CountryFact {
  /// Parse a `(field, value)` pair as given on the command line.
  pub fn parse(field: &str, value: &str) -> Result<Self> {
    field.parse::<FactField>()?.with_value(value)
  }

  /// The field this fact targets.
  pub fn field(&self) -> FactField {
    match self {
      Self::SetCapital(_) => FactField::Capital,
      Self::SetPopulation(_) => FactField::Population,
      Self::SetArea(_) => FactField::Area,
      Self::SetHighestPoint(_) => FactField::HighestPoint,
      Self::SetLargestCity(rank, _) => FactField::LargestCity(*rank),
      Self::AddNeighbor(_) => FactField::Neighbor,
    }
  }
}
