//! Configuration file discovery, loading, and environment overrides.
//!
//! Configuration files are YAML. When no explicit path is given, the
//! loader layers the user config under a project-local `perch.yaml`;
//! `PERCH_*` environment variables are applied on top by the builder.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// File name of the project-local configuration.
pub const PROJECT_CONFIG_FILE: &str = "perch.yaml";

/// Loads configuration files with proper precedence.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads configuration from an explicit path or the default
    /// locations.
    ///
    /// With an explicit path the file must exist and parse. Otherwise
    /// the loader merges, lowest precedence first:
    ///
    /// 1. User config at `~/.config/perch/config.yaml`
    /// 2. Project config at `./perch.yaml`
    ///
    /// Missing default-location files are simply skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file exists but cannot be
    /// read or parsed, or if the explicit path does not exist.
    pub fn load(explicit: Option<&Path>) -> Result<Config> {
        if let Some(path) = explicit {
            return Self::load_file(path);
        }

        let mut config = Config::default();

        if let Some(user_path) = Self::user_config_path() {
            if user_path.exists() {
                config.merge_from(&Self::load_file(&user_path)?);
            }
        }

        let project_path = PathBuf::from(PROJECT_CONFIG_FILE);
        if project_path.exists() {
            config.merge_from(&Self::load_file(&project_path)?);
        }

        Ok(config)
    }

    /// Returns the user configuration path, if a home directory can be
    /// resolved.
    #[must_use]
    pub fn user_config_path() -> Option<PathBuf> {
        home::home_dir().map(|dir| dir.join(".config").join("perch").join("config.yaml"))
    }

    /// Loads and parses a single configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path)?;
        serde_yaml::from_str(&contents).map_err(Error::from)
    }
}

/// Applies `PERCH_*` environment variable overrides to a configuration.
///
/// Recognized variables:
///
/// - `PERCH_SEATS`: seat count (positive integer)
/// - `PERCH_OUTPUT_FORMAT`: one of `table`, `json`, `csv`, `tsv`
///
/// # Errors
///
/// Returns a validation error if a variable is set but its value cannot
/// be parsed.
pub fn apply_env_overrides(config: &mut Config) -> Result<()> {
    if let Ok(value) = env::var("PERCH_SEATS") {
        let seats = value.parse().map_err(|_| Error::Validation {
            field: "PERCH_SEATS".into(),
            message: format!("must be a positive integer, got '{value}'"),
        })?;
        config.seats = Some(seats);
    }

    if let Ok(value) = env::var("PERCH_OUTPUT_FORMAT") {
        let format = value.parse().map_err(|_| Error::Validation {
            field: "PERCH_OUTPUT_FORMAT".into(),
            message: format!("must be one of table, json, csv, tsv, got '{value}'"),
        })?;
        config.output_format = Some(format);
    }

    Ok(())
}
