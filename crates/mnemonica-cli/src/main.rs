//! `mnemonica`: command-line access to the country fact store.
//!
//! # Usage
//!
//! ```
//! mnemonica create
//! mnemonica add-fact Germany capital Berlin
//! mnemonica add-fact Germany largest_cities:1 Berlin
//! mnemonica show Germany
//! ```
//!
//! The database path comes from `mnemonica.toml` (`db_path = "..."`), the
//! `MNEMONICA_DB_PATH` environment variable, or `--db`, in increasing order
//! of precedence.

mod command;

use std::{
  io::Write,
  path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::Parser;
use command::Command;
use mnemonica_store_sqlite::{DEFAULT_DB_PATH, SqliteStore};
use serde::Deserialize;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Country fact store")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "mnemonica.toml")]
  config: PathBuf,

  /// Database file; overrides the configured `db_path`.
  #[arg(long)]
  db: Option<PathBuf>,

  /// `create`, `add-fact` or `show`. Anything else is ignored.
  #[arg(allow_hyphen_values = true)]
  command: Option<String>,

  #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
  args: Vec<String>,
}

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime settings, deserialised from the config file and environment.
#[derive(Deserialize, Debug)]
struct Settings {
  db_path: PathBuf,
}

fn load_settings(cli: &Cli) -> anyhow::Result<Settings> {
  let settings = config::Config::builder()
    .set_default("db_path", DEFAULT_DB_PATH)?
    .add_source(config::File::from(cli.config.clone()).required(false))
    .add_source(config::Environment::with_prefix("MNEMONICA"))
    .build()
    .context("failed to read config file")?;

  let mut settings: Settings = settings
    .try_deserialize()
    .context("failed to deserialise Settings")?;

  if let Some(db) = &cli.db {
    settings.db_path = db.clone();
  }
  settings.db_path = expand_tilde(&settings.db_path);
  Ok(settings)
}

// ─── Entry point ──────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
  // Logs go to stderr; stdout carries command output.
  tracing_subscriber::fmt()
    .with_writer(std::io::stderr)
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();
  run(&cli, &mut std::io::stdout().lock())
}

/// Dispatch the parsed command line. Ignored words return before any
/// configuration is read.
fn run(cli: &Cli, out: &mut impl Write) -> anyhow::Result<()> {
  let command = Command::parse(cli.command.as_deref(), &cli.args)?;
  if command == Command::Ignored {
    tracing::debug!(command = ?cli.command, "nothing to do");
    return Ok(());
  }

  let settings = load_settings(cli)?;

  if command == Command::Create
    && let Some(parent) = settings.db_path.parent()
    && !parent.as_os_str().is_empty()
  {
    std::fs::create_dir_all(parent)
      .with_context(|| format!("failed to create {}", parent.display()))?;
  }

  let store = SqliteStore::new(&settings.db_path);
  command
    .run(&store, out)
    .with_context(|| format!("store at {}", settings.db_path.display()))?;

  Ok(())
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn unknown_words_parse_without_error() {
    let cli = Cli::try_parse_from(["mnemonica", "whatever", "else", "-x"]).unwrap();
    assert_eq!(cli.command.as_deref(), Some("whatever"));
    assert_eq!(cli.args, ["else", "-x"]);
  }

  #[test]
  fn unknown_flags_are_ignored_words() {
    for flag in ["--frobnicate", "-x"] {
      let cli = Cli::try_parse_from(["mnemonica", flag]).unwrap();
      assert_eq!(cli.command.as_deref(), Some(flag));
      assert_eq!(Command::parse(cli.command.as_deref(), &cli.args).unwrap(), Command::Ignored);
    }
  }

  #[test]
  fn known_flags_still_parse_before_command() {
    let cli = Cli::try_parse_from(["mnemonica", "--db", "/tmp/x.db", "create"]).unwrap();
    assert_eq!(cli.db, Some(PathBuf::from("/tmp/x.db")));
    assert_eq!(cli.command.as_deref(), Some("create"));
  }

  #[test]
  fn ignored_word_skips_broken_config() {
    let dir = tempfile::TempDir::new().unwrap();
    let config = dir.path().join("mnemonica.toml");
    std::fs::write(&config, "db_path = [unterminated\n").unwrap();

    let cli = Cli::try_parse_from([
      "mnemonica",
      "--config",
      config.to_str().unwrap(),
      "frobnicate",
    ])
    .unwrap();
    let mut out: Vec<u8> = Vec::new();
    run(&cli, &mut out).unwrap();
    assert!(out.is_empty());

    let create = Cli::try_parse_from(["mnemonica", "--config", config.to_str().unwrap(), "create"])
      .unwrap();
    assert!(run(&create, &mut Vec::<u8>::new()).is_err());
  }

  #[test]
  fn default_db_path_applies_without_config() {
    let cli = Cli::try_parse_from(["mnemonica", "--config", "/nonexistent/mnemonica.toml"]).unwrap();
    if std::env::var_os("MNEMONICA_DB_PATH").is_none() {
      assert_eq!(load_settings(&cli).unwrap().db_path, PathBuf::from(DEFAULT_DB_PATH));
    }
  }

  #[test]
  fn db_flag_overrides_default() {
    let cli = Cli::try_parse_from([
      "mnemonica",
      "--config",
      "/nonexistent/mnemonica.toml",
      "--db",
      "/tmp/countries.db",
      "create",
    ])
    .unwrap();
    let settings = load_settings(&cli).unwrap();
    assert_eq!(settings.db_path, PathBuf::from("/tmp/countries.db"));
  }

  #[test]
  fn config_file_sets_db_path() {
    let dir = tempfile::TempDir::new().unwrap();
    let config = dir.path().join("mnemonica.toml");
    std::fs::write(&config, "db_path = \"/srv/facts.db\"\n").unwrap();

    let cli = Cli::try_parse_from(["mnemonica", "--config", config.to_str().unwrap()]).unwrap();
    assert_eq!(load_settings(&cli).unwrap().db_path, PathBuf::from("/srv/facts.db"));
  }

  #[test]
  fn tilde_expands_to_home() {
    if let Ok(home) = std::env::var("HOME") {
      assert_eq!(
        expand_tilde(Path::new("~/facts.db")),
        PathBuf::from(home).join("facts.db")
      );
    }
    assert_eq!(expand_tilde(Path::new("data/x.db")), PathBuf::from("data/x.db"));
  }
}
