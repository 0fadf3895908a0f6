//! Column definitions.
//!
//! # Example
//!
//! ```rust
//! use datatable::column::Column;
//! use datatable::record::Record;
//! use serde_json::{Value, json};
//!
//! let columns: Vec<Column<Value>> = vec![
//!     Column::field("Name", "name").sortable(),
//!     Column::field("Age", "age").sortable().align_right(),
//!     Column::derived("Initial", |r: &Value| {
//!         r.field("name").to_string().chars().take(1).collect::<String>().into()
//!     }),
//! ];
//!
//! let alice = json!({"name": "Alice", "age": 30});
//! assert_eq!(columns[2].render(&alice), "A");
//! ```

use std::fmt;
use std::sync::Arc;

use crate::accessor::Accessor;
use crate::record::Record;
use crate::value::CellValue;

/// Function type for custom cell renderers.
pub type CellFn<T> = Arc<dyn Fn(&T) -> String + Send + Sync>;

/// Horizontal alignment of a column in the text view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    /// Pad on the right.
    #[default]
    Left,
    /// Pad on the left.
    Right,
}

/// Describes how one column derives and renders its cell.
pub struct Column<T> {
    /// Header label.
    pub header: String,
    /// Raw value rule.
    pub accessor: Accessor<T>,
    /// Optional presentation override.
    pub cell: Option<CellFn<T>>,
    /// Whether clicking the header sorts by this column.
    pub sortable: bool,
    /// Fixed display width; auto-sized when `None`.
    pub width: Option<usize>,
    /// Alignment in the text view.
    pub align: Align,
}

impl<T> Column<T> {
    /// Creates a column reading the named field.
    pub fn field(header: impl Into<String>, name: impl Into<String>) -> Self {
        Self::with_accessor(header, Accessor::field(name))
    }

    /// Creates a column with a derived accessor.
    pub fn derived<F>(header: impl Into<String>, f: F) -> Self
    where
        F: Fn(&T) -> CellValue + Send + Sync + 'static,
    {
        Self::with_accessor(header, Accessor::derived(f))
    }

    /// Creates a column from an existing accessor.
    pub fn with_accessor(header: impl Into<String>, accessor: Accessor<T>) -> Self {
        Self {
            header: header.into(),
            accessor,
            cell: None,
            sortable: false,
            width: None,
            align: Align::Left,
        }
    }

    /// Marks the column as sortable.
    #[must_use]
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Sets a custom cell renderer.
    #[must_use]
    pub fn cell<F>(mut self, f: F) -> Self
    where
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        self.cell = Some(Arc::new(f));
        self
    }

    /// Fixes the display width.
    #[must_use]
    pub fn width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    /// Right-aligns the column.
    #[must_use]
    pub fn align_right(mut self) -> Self {
        self.align = Align::Right;
        self
    }

    /// Returns the name used to address this column from outside.
    ///
    /// Field columns answer to their field name, derived columns to their
    /// header.
    #[must_use]
    pub fn id(&self) -> &str {
        self.accessor.field_name().unwrap_or(&self.header)
    }

    /// Returns true if `name` addresses this column (case-insensitive, by id
    /// or header).
    #[must_use]
    pub fn answers_to(&self, name: &str) -> bool {
        self.id().eq_ignore_ascii_case(name) || self.header.eq_ignore_ascii_case(name)
    }
}

impl<T: Record> Column<T> {
    /// Resolves the raw value for `record`.
    pub fn resolve(&self, record: &T) -> CellValue {
        self.accessor.resolve(record)
    }

    /// Produces the display text for `record`.
    ///
    /// Uses the custom renderer when one is set, otherwise the raw value.
    pub fn render(&self, record: &T) -> String {
        match &self.cell {
            Some(f) => f(record),
            None => self.resolve(record).to_string(),
        }
    }
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            header: self.header.clone(),
            accessor: self.accessor.clone(),
            cell: self.cell.clone(),
            sortable: self.sortable,
            width: self.width,
            align: self.align,
        }
    }
}

impl<T> fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("header", &self.header)
            .field("accessor", &self.accessor)
            .field("cell", &self.cell.as_ref().map(|_| "<fn>"))
            .field("sortable", &self.sortable)
            .field("width", &self.width)
            .field("align", &self.align)
            .finish()
    }
}

/// Finds the index of the column addressed by `name`.
pub fn position_of<T>(columns: &[Column<T>], name: &str) -> Option<usize> {
    columns.iter().position(|c| c.answers_to(name))
}
