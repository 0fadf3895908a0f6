#![forbid(unsafe_code)]
// Allow pedantic lints for early-stage API ergonomics.
#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_fields_in_debug)]
#![allow(clippy::nursery)]
#![allow(clippy::pedantic)]

//! # Datatable
//!
//! A searchable, sortable, paginated table over an in-memory collection of
//! records.
//!
//! The table runs a fixed pipeline on every change: **filter** (free-text
//! search across all columns) → **sort** (one column, cycling
//! none/ascending/descending on header clicks) → **paginate** (1-based pages
//! of a selectable size). The source collection is never modified.
//!
//! Modules, leaves first:
//! - **value** - Cell values with a total natural ordering
//! - **record** - The record trait tables read from
//! - **accessor** - Field-name or derived-function value resolution
//! - **column** - Column definitions and custom cell renderers
//! - **filter** - Case-insensitive substring search
//! - **sort** - Sort direction cycle and ordering
//! - **paginator** - Page math and page slicing
//! - **state** - View state and its pure transition function
//! - **pipeline** - The filter → sort → paginate composition
//! - **render** - Row rendering and text layout
//! - **keymap** - Keyboard bindings for page navigation
//! - **table** - The table component
//!
//! ## Example
//!
//! ```rust
//! use datatable::prelude::*;
//! use serde_json::json;
//!
//! let mut table = DataTable::new()
//!     .columns(vec![
//!         Column::field("Name", "name").sortable(),
//!         Column::field("Age", "age").sortable(),
//!     ])
//!     .page_size(2)
//!     .data(vec![
//!         json!({"id": 1, "name": "Alice", "age": 30}),
//!         json!({"id": 2, "name": "Bob", "age": 25}),
//!         json!({"id": 3, "name": "Carol", "age": 40}),
//!     ]);
//!
//! table.set_search_term("bo");
//! assert_eq!(table.page_info().total_pages, 1);
//! assert_eq!(table.rendered_rows()[0].cells[0], "Bob");
//! ```

pub mod accessor;
pub mod column;
pub mod filter;
pub mod keymap;
pub mod paginator;
pub mod pipeline;
pub mod record;
pub mod render;
pub mod sort;
pub mod state;
pub mod table;
pub mod value;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::accessor::Accessor;
    pub use crate::column::{Align, Column};
    pub use crate::keymap::{Binding, KeyMap, PageAction};
    pub use crate::paginator::{PageInfo, Paginator};
    pub use crate::record::Record;
    pub use crate::render::RenderedRow;
    pub use crate::sort::{SortDirection, SortState};
    pub use crate::state::{Event, Limits, ViewState, reduce};
    pub use crate::table::{DataTable, Msg};
    pub use crate::value::CellValue;
}
