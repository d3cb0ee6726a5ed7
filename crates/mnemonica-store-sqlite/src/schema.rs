//! SQL schema for the Mnemonica SQLite store.
//!
//! Run once, explicitly, through `create_schema`. There is no
//! `IF NOT EXISTS`: creating the table twice is an error.

/// Name of the single table holding country rows.
pub const TABLE: &str = "data";

/// Full schema DDL.
pub const SCHEMA: &str = "
CREATE TABLE data (
    country         TEXT    NOT NULL PRIMARY KEY,
    capital         TEXT    NOT NULL,
    largest_cities  TEXT    NOT NULL,   -- five names joined by TAB, rank order
    population      INTEGER NOT NULL,
    area            INTEGER NOT NULL,
    highest_point   INTEGER NOT NULL,
    neighbors       TEXT    NOT NULL    -- names joined by TAB, any order
);
";
