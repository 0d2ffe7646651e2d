//! Configuration system for perch.
//!
//! Configuration is merged from multiple sources with the following
//! precedence (highest to lowest):
//!
//! 1. Programmatic overrides (via [`ConfigBuilder::with_overrides`])
//! 2. Environment variables (`PERCH_*`)
//! 3. Project config (`./perch.yaml`)
//! 4. User config (`~/.config/perch/config.yaml`)
//! 5. Built-in defaults
//!
//! # Examples
//!
//! Basic usage with defaults:
//!
//! ```no_run
//! use perch::config::ConfigBuilder;
//!
//! let config = ConfigBuilder::new().build().unwrap();
//! println!("Seats: {}", config.effective_seats());
//! ```
//!
//! Programmatic configuration, ignoring files and the environment:
//!
//! ```
//! use perch::config::{Config, ConfigBuilder};
//!
//! let overrides = Config {
//!     seats: Some(40),
//!     ..Default::default()
//! };
//!
//! let config = ConfigBuilder::new()
//!     .skip_files()
//!     .skip_env()
//!     .with_overrides(overrides)
//!     .build()
//!     .unwrap();
//! assert_eq!(config.effective_seats(), 40);
//! ```

mod loader;
mod schema;

use std::path::PathBuf;

use crate::error::{Error, Result};

pub use loader::{apply_env_overrides, ConfigLoader, PROJECT_CONFIG_FILE};
pub use schema::{Config, OutputFormat};

/// Builds a merged, validated configuration.
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config_path: Option<PathBuf>,
    skip_files: bool,
    skip_env: bool,
    overrides: Option<Config>,
}

impl ConfigBuilder {
    /// Creates a builder with default behavior: load files from the
    /// default locations and apply environment overrides.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from an explicit file instead of the default
    /// locations. The file must exist.
    #[must_use]
    pub fn with_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = Some(path.into());
        self
    }

    /// Skips configuration files entirely.
    #[must_use]
    pub const fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Skips `PERCH_*` environment variable overrides.
    #[must_use]
    pub const fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Applies programmatic overrides with the highest precedence.
    #[must_use]
    pub fn with_overrides(mut self, overrides: Config) -> Self {
        self.overrides = Some(overrides);
        self
    }

    /// Loads, merges, and validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file cannot be read or
    /// parsed, an environment variable has an unparseable value, or the
    /// merged configuration fails validation (for example `seats: 0`).
    pub fn build(self) -> Result<Config> {
        let mut config = if self.skip_files {
            Config::default()
        } else {
            ConfigLoader::load(self.config_path.as_deref())?
        };

        if !self.skip_env {
            apply_env_overrides(&mut config)?;
        }

        if let Some(overrides) = self.overrides {
            config.merge_from(&overrides);
        }

        Self::validate(&config)?;
        Ok(config)
    }

    fn validate(config: &Config) -> Result<()> {
        if let Some(0) = config.seats {
            return Err(Error::InvalidCapacity {
                value: 0,
                reason: "a seat chart needs at least one seat".into(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let config = ConfigBuilder::new()
            .skip_files()
            .skip_env()
            .build()
            .unwrap();

        assert_eq!(config.effective_seats(), 25);
        assert_eq!(config.effective_output_format(), OutputFormat::Table);
    }

    #[test]
    fn test_builder_overrides_win() {
        let overrides = Config {
            seats: Some(3),
            output_format: Some(OutputFormat::Json),
        };

        let config = ConfigBuilder::new()
            .skip_files()
            .skip_env()
            .with_overrides(overrides)
            .build()
            .unwrap();

        assert_eq!(config.seats, Some(3));
        assert_eq!(config.output_format, Some(OutputFormat::Json));
    }

    #[test]
    fn test_builder_rejects_zero_seats() {
        let overrides = Config {
            seats: Some(0),
            ..Default::default()
        };

        let err = ConfigBuilder::new()
            .skip_files()
            .skip_env()
            .with_overrides(overrides)
            .build()
            .unwrap_err();

        assert!(matches!(err, Error::InvalidCapacity { value: 0, .. }));
    }
}
