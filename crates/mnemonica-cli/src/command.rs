//! Command words understood by the `mnemonica` binary.
//!
//! Matching is case-insensitive. Unrecognised words are not an error; they
//! map to [`Command::Ignored`] and the binary exits normally.

use std::io::Write;

use anyhow::{Context as _, Result, bail};
use mnemonica_core::store::CountryStore;

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
  /// `create`
  Create,
  /// `add-fact <country> <field> <value>`
  AddFact { country: String, field: String, value: String },
  /// `show [country]`
  Show { country: Option<String> },
  Ignored,
}

impl Command {
  pub fn parse(word: Option<&str>, args: &[String]) -> Result<Self> {
    let Some(word) = word else {
      return Ok(Self::Ignored);
    };

    if word.eq_ignore_ascii_case("create") {
      Ok(Self::Create)
    } else if word.eq_ignore_ascii_case("add-fact") {
      let [country, field, value] = args else {
        bail!("usage: add-fact <country> <field> <value>");
      };
      Ok(Self::AddFact {
        country: country.clone(),
        field:   field.clone(),
        value:   value.clone(),
      })
    } else if word.eq_ignore_ascii_case("show") {
      Ok(Self::Show { country: args.first().cloned() })
    } else {
      Ok(Self::Ignored)
    }
  }

  /// Execute against `store`, writing any output to `out`.
  pub fn run<S: CountryStore>(self, store: &S, out: &mut impl Write) -> Result<()> {
    match self {
      Self::Create => {
        store.create_schema().context("failed to create schema")?;
      }
      Self::AddFact { country, field, value } => {
        store
          .add_fact(&country, &field, &value)
          .with_context(|| format!("failed to add {field} for {country:?}"))?;
      }
      Self::Show { country: Some(name) } => {
        let country = store
          .get_country(&name)
          .with_context(|| format!("failed to read {name:?}"))?;
        serde_json::to_writer_pretty(&mut *out, &country)?;
        writeln!(out)?;
      }
      Self::Show { country: None } => {
        for name in store.list_countries().context("failed to list countries")? {
          writeln!(out, "{name}")?;
        }
      }
      Self::Ignored => {}
    }
    Ok(())
  }
}
