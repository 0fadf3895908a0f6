//! Command-line interface for `sacco_portal`.
//!
//! # Examples
//!
//! ```bash
//! # Second page of members, largest shareholders first
//! sacco_portal members --data members.json --sort shares --sort shares --page 2
//!
//! # Search payments and show the first match in full
//! sacco_portal payments --data payments.json --search mpesa --select 1
//! ```

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// SACCO back office listings.
///
/// Renders a searchable, sortable, paginated table of one entity from a
/// JSON export.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "sacco_portal",
    author,
    version,
    about = "Searchable, sortable, paginated SACCO listings"
)]
pub struct Cli {
    /// Entity the data file holds
    #[arg(value_enum)]
    pub entity: Entity,

    /// JSON array export of the entity
    #[arg(long, short = 'd')]
    pub data: PathBuf,

    /// Free-text search across all columns
    #[arg(long, short = 's')]
    pub search: Option<String>,

    /// Activate a column header (field name or header text)
    ///
    /// Repeat to cycle the direction: once ascending, twice descending,
    /// three times back to the original order
    #[arg(long = "sort", value_name = "COLUMN")]
    pub sort: Vec<String>,

    /// Page to show, clamped to the available pages
    #[arg(long, short = 'p')]
    pub page: Option<usize>,

    /// Rows per page; must be one of the configured options
    #[arg(long)]
    pub page_size: Option<usize>,

    /// Show every matching record on one page
    #[arg(long)]
    pub no_pagination: bool,

    /// Hide the search line
    #[arg(long)]
    pub no_search: bool,

    /// Click the given row (1-based) on the shown page and print its record
    #[arg(long, value_name = "ROW")]
    pub select: Option<usize>,

    /// Path to a JSON config file
    #[arg(long, env = "PORTAL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Entities the portal can list.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    /// Member register
    Members,
    /// Loan products on offer
    LoanProducts,
    /// Loan accounts
    Loans,
    /// Payments received
    Payments,
    /// Expense categories
    ExpenseCategories,
}

impl Cli {
    /// Parse command line arguments.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Create CLI from iterator (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if argument parsing fails.
    pub fn try_parse_from<I, T>(iter: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(iter)
    }
}
