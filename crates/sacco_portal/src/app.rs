//! Loads a data export, drives a table through the requested controls and
//! renders the result.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use datatable::prelude::*;
use parking_lot::Mutex;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use crate::cli::{Cli, Entity};
use crate::config::Config;
use crate::error::PortalError;
use crate::pages::{self, Page};

/// Runs one command line and returns what goes to stdout.
///
/// # Errors
///
/// Returns an error if the data file cannot be loaded, a `--sort` column
/// does not exist, or `--select` points past the shown rows.
pub fn run(cli: &Cli, config: &Config) -> Result<String, PortalError> {
    debug!(?config, entity = ?cli.entity, "showing listing");

    match cli.entity {
        Entity::Members => show(cli, config, pages::members()),
        Entity::LoanProducts => show(cli, config, pages::loan_products()),
        Entity::Loans => show(cli, config, pages::loans()),
        Entity::Payments => show(cli, config, pages::payments()),
        Entity::ExpenseCategories => show(cli, config, pages::expense_categories()),
    }
}

/// Reads a JSON array of records.
///
/// # Errors
///
/// Returns an error if the file cannot be read or decoded.
pub fn load<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, PortalError> {
    let text = fs::read_to_string(path).map_err(|source| PortalError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| PortalError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Builds the table for a listing from the resolved config.
pub fn build_table<T>(config: &Config, page: Page<T>, records: Vec<T>) -> DataTable<T>
where
    T: Record,
{
    let empty_message = config
        .empty_message
        .clone()
        .unwrap_or_else(|| page.empty_message.to_string());

    DataTable::new()
        .columns(page.columns)
        .key_field(page.key_field)
        .caption(page.caption)
        .empty_message(empty_message)
        .searchable(config.searchable)
        .pagination(config.pagination)
        .page_size_options(config.page_size_options.clone())
        .page_size(config.page_size)
        .data(records)
}

fn show<T>(cli: &Cli, config: &Config, page: Page<T>) -> Result<String, PortalError>
where
    T: Record + DeserializeOwned + Serialize + Clone + Send + Sync + 'static,
{
    let records: Vec<T> = load(&cli.data)?;
    info!(path = %cli.data.display(), records = records.len(), "loaded data");

    let selected: Arc<Mutex<Option<T>>> = Arc::new(Mutex::new(None));
    let sink = Arc::clone(&selected);
    let mut table = build_table(config, page, records).on_row_click(move |record: &T| {
        *sink.lock() = Some(record.clone());
    });

    if let Some(term) = &cli.search {
        if table.is_searchable() {
            table.update(Msg::Search(term.clone()));
        } else {
            warn!(%term, "search is disabled, ignoring --search");
        }
    }

    for name in &cli.sort {
        let Some(index) = table.column_index(name) else {
            return Err(PortalError::UnknownColumn {
                name: name.clone(),
                available: table.get_columns().iter().map(|c| c.id().to_string()).collect(),
            });
        };
        if !table.get_columns()[index].sortable {
            warn!(column = %name, "column is not sortable");
        }
        table.update(Msg::HeaderClick(index));
    }

    if let Some(n) = cli.page {
        table.update(Msg::GoToPage(n));
    }

    let mut out = table.view();

    if let Some(row) = cli.select {
        let visible = table.visible_records().len();
        if row == 0 || !table.click_row(row - 1) {
            return Err(PortalError::NoSuchRow { row, visible });
        }
        if let Some(record) = selected.lock().take() {
            out.push_str("\n\nSelected record:\n");
            out.push_str(&serde_json::to_string_pretty(&record)?);
        }
    }

    Ok(out)
}
