#![forbid(unsafe_code)]

//! # SACCO Portal
//!
//! Prints a searchable, sortable, paginated listing from a JSON export.
//!
//! ## Usage
//!
//! ```bash
//! cargo run -p sacco_portal -- members --data members.json --sort shares
//! ```

use anyhow::Context;
use sacco_portal::{Cli, Config, app, logging};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_args();
    let config = Config::from_cli(&cli).context("invalid configuration")?;
    logging::init(config.verbosity);

    let out = app::run(&cli, &config)
        .with_context(|| format!("failed to list {}", cli.data.display()))?;
    println!("{out}");

    Ok(())
}
