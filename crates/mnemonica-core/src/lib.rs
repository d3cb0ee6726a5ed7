//! Core types and trait definitions for the Mnemonica country fact store.
//!
//! This crate is deliberately free of database dependencies. Storage
//! backends implement [`store::CountryStore`]; the CLI depends only on that
//! abstraction plus whichever backend it opens.

pub mod country;
pub mod error;
pub mod fact;
pub mod store;

pub use country::{CITY_RANKS, Country, Rank};
pub use error::{Error, Result};
pub use fact::{CountryFact, FactField};
pub use store::CountryStore;
