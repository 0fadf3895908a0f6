//! Runtime configuration for `sacco_portal`.
//!
//! [`Config`] holds the table options after all sources are merged. Values
//! come from defaults, then an optional JSON file, then command-line flags,
//! each overriding the last.
//!
//! # Examples
//!
//! ```json
//! {
//!     "page_size": 25,
//!     "page_size_options": [10, 25, 50],
//!     "empty_message": "Nothing to show"
//! }
//! ```

use std::fs;
use std::path::Path;

use datatable::paginator::{DEFAULT_PAGE_SIZE, DEFAULT_PAGE_SIZE_OPTIONS};
use serde::{Deserialize, Serialize};

use crate::cli::Cli;
use crate::error::ConfigError;

/// Runtime configuration for the portal tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Initial rows per page.
    pub page_size: usize,

    /// Page sizes a user may pick from.
    pub page_size_options: Vec<usize>,

    /// Overrides each listing's empty-state message.
    pub empty_message: Option<String>,

    /// Whether the search line is shown.
    pub searchable: bool,

    /// Whether records are split into pages.
    pub pagination: bool,

    /// Log verbosity level (0=warn, 1=info, 2=debug, 3+=trace).
    pub verbosity: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            page_size_options: DEFAULT_PAGE_SIZE_OPTIONS.to_vec(),
            empty_message: None,
            searchable: true,
            pagination: true,
            verbosity: 0,
        }
    }
}

impl Config {
    /// Load a config file. Missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid JSON.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Invalid {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Resolve the config for a command line: the `--config` file if any,
    /// with flags layered on top.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be loaded or the merged
    /// result fails [`validate`](Self::validate).
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let base = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        let config = base.with_cli(cli);
        config.validate()?;
        Ok(config)
    }

    /// Apply command-line overrides.
    #[must_use]
    pub fn with_cli(mut self, cli: &Cli) -> Self {
        if let Some(size) = cli.page_size {
            self.page_size = size;
        }
        if cli.no_pagination {
            self.pagination = false;
        }
        if cli.no_search {
            self.searchable = false;
        }
        self.verbosity = self.verbosity.max(cli.verbose);
        self
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the page size is zero, no options are given, or
    /// the page size is not among the options.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::ZeroPageSize);
        }
        if self.page_size_options.iter().all(|&n| n == 0) {
            return Err(ConfigError::NoPageSizeOptions);
        }
        if !self.page_size_options.contains(&self.page_size) {
            return Err(ConfigError::PageSizeNotOffered {
                size: self.page_size,
                options: self.page_size_options.clone(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["sacco_portal", "members", "--data", "m.json"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn config_default() {
        let config = Config::default();
        assert_eq!(config.page_size, 10);
        assert_eq!(config.page_size_options, vec![5, 10, 25, 50, 100]);
        assert!(config.searchable);
        assert!(config.pagination);
        assert!(config.empty_message.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn config_cli_overrides() {
        let config = Config::default().with_cli(&cli(&[
            "--page-size",
            "25",
            "--no-pagination",
            "--no-search",
            "-vvv",
        ]));
        assert_eq!(config.page_size, 25);
        assert!(!config.pagination);
        assert!(!config.searchable);
        assert_eq!(config.verbosity, 3);
    }

    #[test]
    fn config_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"page_size": 5, "empty_message": "Nothing here"}}"#).unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.page_size, 5);
        assert_eq!(config.page_size_options, vec![5, 10, 25, 50, 100]);
        assert_eq!(config.empty_message.as_deref(), Some("Nothing here"));
    }

    #[test]
    fn config_flag_beats_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"page_size": 5}}"#).unwrap();
        let path = file.path().to_string_lossy().into_owned();

        let config = Config::from_cli(&cli(&["--config", &path, "--page-size", "50"])).unwrap();
        assert_eq!(config.page_size, 50);
    }

    #[test]
    fn config_invalid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "page_size = 5").unwrap();
        assert!(matches!(
            Config::from_file(file.path()),
            Err(ConfigError::Invalid { .. })
        ));
    }

    #[test]
    fn config_missing_file() {
        assert!(matches!(
            Config::from_file(Path::new("/definitely/not/here.json")),
            Err(ConfigError::Read { .. })
        ));
    }

    #[test]
    fn config_validate() {
        let config = Config {
            page_size: 0,
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::ZeroPageSize)));

        let config = Config {
            page_size_options: Vec::new(),
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NoPageSizeOptions)
        ));

        let config = Config {
            page_size: 7,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::PageSizeNotOffered { size: 7, .. })
        ));
    }
}
