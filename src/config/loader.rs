// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::Result;

/// Load a configuration file from a given path and return the raw `RawConfigFile`.
///
/// This only performs TOML deserialization; it does **not** perform semantic
/// validation (paths, canvas size, etc.). Use [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawConfigFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let config: RawConfigFile = toml::from_str(&contents)?;

    Ok(config)
}

/// Load a configuration file from path and run basic validation.
///
/// This is the recommended entry point for the rest of the application:
///
/// - Reads TOML.
/// - Applies defaults (handled by `serde` + `Default` impls).
/// - Checks for empty paths, an empty sprint prefix and a degenerate canvas.
///
/// Higher-level modules then apply CLI overrides on top of the validated
/// `ConfigFile` before running the pipeline.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let raw_config = load_from_path(&path)?;
    let config = ConfigFile::try_from(raw_config)?;
    Ok(config)
}

/// Helper to resolve a default config path.
///
/// Currently this just returns `Sprintgraph.toml` in the current working
/// directory, but this function exists so you can later:
///
/// - Respect an env var (e.g. `SPRINTGRAPH_CONFIG`).
/// - Look for multiple default locations.
/// - Support project-local config discovery.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("Sprintgraph.toml")
}
