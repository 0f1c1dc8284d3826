//! Optional TOML configuration for the exercise runner.

use crate::console::DEFAULT_CELL_WIDTH;
use crate::i18n::Language;
use derive_getters::Getters;
use derive_more::{Display, Error};
use rand::SeedableRng;
use rand_pcg::Pcg64;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// File looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "matrix_exercises.toml";

/// Runner settings.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct AppConfig {
    /// Language of prompts and output.
    #[serde(default)]
    language: Language,

    /// Right-alignment width of matrix cells.
    #[serde(default = "default_cell_width")]
    cell_width: usize,

    /// Seed for reproducible random fills. Unseeded runs use OS entropy.
    #[serde(default)]
    seed: Option<u64>,
}

#[instrument]
fn default_cell_width() -> usize {
    DEFAULT_CELL_WIDTH
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            language: Language::default(),
            cell_width: default_cell_width(),
            seed: None,
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(language = ?config.language, cell_width = config.cell_width, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if given, else [`DEFAULT_CONFIG_FILE`] when present, else defaults.
    ///
    /// An explicit path that cannot be read is an error; a missing default file is not.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.exists() {
                    Self::from_file(default)
                } else {
                    debug!("No config file, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    /// Replaces settings with any values given on the command line.
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        language: Option<Language>,
        cell_width: Option<usize>,
        seed: Option<u64>,
    ) -> Self {
        if let Some(language) = language {
            self.language = language;
        }
        if let Some(cell_width) = cell_width {
            self.cell_width = cell_width;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }

    /// Random generator seeded from `seed`, or from OS entropy when unset.
    #[instrument(skip(self))]
    pub fn rng(&self) -> Pcg64 {
        match self.seed {
            Some(seed) => {
                info!(seed, "Using seeded generator");
                Pcg64::seed_from_u64(seed)
            }
            None => Pcg64::from_entropy(),
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
