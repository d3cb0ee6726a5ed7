//! Country, the single record type held by the store.
//!
//! A record is always built fresh: [`Country::new`] and [`Default`] produce a
//! new set of empty containers on every call, so no two records ever share
//! their city list or neighbor set.

use std::{collections::BTreeSet, fmt};

use serde::{Deserialize, Serialize};

use crate::{Error, Result, fact::CountryFact};

/// Number of "largest city" slots carried by every record.
pub const CITY_RANKS: usize = 5;

// ─── Rank ────────────────────────────────────────────────────────────────────

/// A 1-based position in [`Country::largest_cities`], always in `1..=5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rank(u8);

impl Rank {
  /// Build a rank from its 1-based position.
  pub fn new(position: usize) -> Result<Self> {
    if (1..=CITY_RANKS).contains(&position) {
      Ok(Self(position as u8))
    } else {
      Err(Error::RankOutOfRange(position.to_string()))
    }
  }

  /// The 1-based position, as written in `largest_cities:<n>`.
  pub fn position(self) -> usize { self.0 as usize }

  /// The 0-based index into [`Country::largest_cities`].
  pub fn index(self) -> usize { self.position() - 1 }
}

impl fmt::Display for Rank {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

// ─── Country ─────────────────────────────────────────────────────────────────

/// Everything known about one country.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
  /// Primary key; never empty once stored.
  pub name:           String,
  pub capital:        String,
  /// Rank 1 lives at index 0.
  pub largest_cities: [String; CITY_RANKS],
  pub population:     i64,
  pub area:           i64,
  pub highest_point:  i64,
  pub neighbors:      BTreeSet<String>,
}

impl Country {
  /// A default-valued record carrying only `name`.
  pub fn new(name: impl Into<String>) -> Self {
    Self { name: name.into(), ..Self::default() }
  }

  /// The city at `rank`.
  pub fn city(&self, rank: Rank) -> &str { &self.largest_cities[rank.index()] }

  /// Apply a single fact to this record in memory.
  pub fn apply(&mut self, fact: CountryFact) {
    match fact {
      CountryFact::SetCapital(capital) => self.capital = capital,
      CountryFact::SetPopulation(population) => self.population = population,
      CountryFact::SetArea(area) => self.area = area,
      CountryFact::SetHighestPoint(height) => self.highest_point = height,
      CountryFact::SetLargestCity(rank, city) => {
        self.largest_cities[rank.index()] = city;
      }
      CountryFact::AddNeighbor(neighbor) => {
        self.neighbors.insert(neighbor);
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn new_country_has_defaults() {
    let c = Country::new("Nowhereland");
    assert_eq!(c.name, "Nowhereland");
    assert_eq!(c.capital, "");
    assert_eq!(c.largest_cities, ["", "", "", "", ""]);
    assert_eq!(c.population, 0);
    assert_eq!(c.area, 0);
    assert_eq!(c.highest_point, 0);
    assert!(c.neighbors.is_empty());
  }

  #[test]
  fn defaults_are_not_shared_between_records() {
    let mut a = Country::new("A");
    let b = Country::new("B");

    a.apply(CountryFact::AddNeighbor("C".into()));
    a.apply(CountryFact::SetLargestCity(Rank::new(1).unwrap(), "X".into()));

    assert!(b.neighbors.is_empty());
    assert_eq!(b.largest_cities[0], "");
  }

  #[test]
  fn rank_bounds() {
    assert!(Rank::new(0).is_err());
    assert_eq!(Rank::new(1).unwrap().index(), 0);
    assert_eq!(Rank::new(5).unwrap().index(), 4);
    assert!(matches!(Rank::new(6), Err(Error::RankOutOfRange(ref n)) if n == "6"));
  }

  #[test]
  fn apply_sets_city_at_rank_only() {
    let mut c = Country::new("France");
    c.largest_cities[1] = "Marseille".into();

    c.apply(CountryFact::SetLargestCity(Rank::new(1).unwrap(), "Paris".into()));

    assert_eq!(c.largest_cities, ["Paris", "Marseille", "", "", ""]);
    assert_eq!(c.city(Rank::new(1).unwrap()), "Paris");
  }

  #[test]
  fn apply_neighbor_is_idempotent() {
    let mut c = Country::new("Germany");
    c.apply(CountryFact::AddNeighbor("France".into()));
    c.apply(CountryFact::AddNeighbor("France".into()));
    assert_eq!(c.neighbors.len(), 1);
  }

  #[test]
  fn apply_scalar_fields() {
    let mut c = Country::new("Nepal");
    c.apply(CountryFact::SetCapital("Kathmandu".into()));
    c.apply(CountryFact::SetPopulation(30_000_000));
    c.apply(CountryFact::SetArea(147_516));
    c.apply(CountryFact::SetHighestPoint(8_849));

    assert_eq!(c.capital, "Kathmandu");
    assert_eq!(c.population, 30_000_000);
    assert_eq!(c.area, 147_516);
    assert_eq!(c.highest_point, 8_849);
  }

  #[test]
  fn serializes_to_json() {
    let mut c = Country::new("Chile");
    c.neighbors.insert("Peru".into());
    let json = serde_json::to_value(&c).unwrap();
    assert_eq!(json["name"], "Chile");
    assert_eq!(json["largest_cities"].as_array().unwrap().len(), CITY_RANKS);
    assert_eq!(json["neighbors"][0], "Peru");
  }
}
