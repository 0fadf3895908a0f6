//! Error types for the portal.

use std::path::PathBuf;

use thiserror::Error;

/// Configuration error.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("failed to read config file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid JSON for [`Config`](crate::config::Config).
    #[error("invalid config file {path}")]
    Invalid {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Page size of zero.
    #[error("page size must be at least 1")]
    ZeroPageSize,

    /// Empty page size option list.
    #[error("at least one page size option is required")]
    NoPageSizeOptions,

    /// Page size outside the offered options.
    #[error("page size {size} is not one of the options {options:?}")]
    PageSizeNotOffered { size: usize, options: Vec<usize> },
}

/// Errors raised while showing a listing.
#[derive(Debug, Error)]
pub enum PortalError {
    /// Data file could not be read.
    #[error("failed to read data file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Data file is not a JSON array of the expected records.
    #[error("failed to parse {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// `--sort` named a column the listing does not have.
    #[error("unknown column '{name}' (available: {})", .available.join(", "))]
    UnknownColumn { name: String, available: Vec<String> },

    /// `--select` pointed past the visible rows.
    #[error("no row {row} on this page ({visible} visible)")]
    NoSuchRow { row: usize, visible: usize },

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Selected record could not be encoded.
    #[error("failed to encode selected record")]
    Encode(#[from] serde_json::Error),
}
