#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::domain::rules::ValidationRules;
use crate::utils::error::Result;
use crate::utils::logger::LogFormat;
use crate::utils::validation::{self, Validate};
use std::path::PathBuf;
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

pub const DEFAULT_CATALOGUE_FILE: &str = "articles.json";

/// Fully resolved configuration handed to the command dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub catalogue_file: PathBuf,
    pub atomic_writes: bool,
    pub rules: ValidationRules,
    pub log_level: Option<String>,
    pub log_format: LogFormat,
    pub verbose: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            catalogue_file: PathBuf::from(DEFAULT_CATALOGUE_FILE),
            atomic_writes: true,
            rules: ValidationRules::default(),
            log_level: None,
            log_format: LogFormat::Text,
            verbose: false,
        }
    }
}

/// Command line values that take precedence over the TOML file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub catalogue_file: Option<PathBuf>,
    pub min_release_year: Option<i32>,
    pub verbose: bool,
}

impl Settings {
    pub fn resolve(overrides: Overrides, file_config: &TomlConfig) -> Result<Self> {
        let defaults = Settings::default();

        let catalogue_file = overrides
            .catalogue_file
            .or_else(|| file_config.storage.path.as_ref().map(PathBuf::from))
            .unwrap_or(defaults.catalogue_file);

        let min_release_year = overrides
            .min_release_year
            .or(file_config.validation.min_release_year);

        let settings = Settings {
            catalogue_file,
            atomic_writes: file_config
                .storage
                .atomic_writes
                .unwrap_or(defaults.atomic_writes),
            rules: ValidationRules::new().with_min_release_year(min_release_year),
            log_level: file_config.logging.level.clone(),
            log_format: file_config.log_format(),
            verbose: overrides.verbose,
        };

        settings.validate()?;
        Ok(settings)
    }
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Loads the TOML file named by `--config`, if any, and merges it with the flags.
    pub fn settings(&self) -> Result<Settings> {
        let file_config = match &self.config {
            Some(path) => {
                let config = TomlConfig::from_file(path)?;
                config.validate()?;
                config
            }
            None => TomlConfig::default(),
        };

        Settings::resolve(
            Overrides {
                catalogue_file: self.file.clone(),
                min_release_year: self.min_release_year,
                verbose: self.verbose,
            },
            &file_config,
        )
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        let path = self.catalogue_file.to_string_lossy();
        validation::validate_path("catalogue_file", &path)?;
        if let Some(year) = self.rules.min_release_year() {
            validation::validate_range(
                "min_release_year",
                year,
                1,
                crate::domain::rules::current_year(),
            )?;
        }
        Ok(())
    }
}
