//! Data table component: search, sort and pagination over in-memory records.
//!
//! The table owns its view state and the caller's collection. Every control
//! goes through the [`reduce`](crate::state::reduce) transition and then
//! re-runs the filter → sort → paginate pipeline to refresh the page
//! bounds. Visible rows are read back through the same pipeline.
//!
//! # Example
//!
//! ```rust
//! use datatable::column::Column;
//! use datatable::table::DataTable;
//! use serde_json::json;
//!
//! let data = vec![
//!     json!({"id": 1, "name": "Alice", "age": 30}),
//!     json!({"id": 2, "name": "Bob", "age": 25}),
//!     json!({"id": 3, "name": "Carol", "age": 40}),
//! ];
//!
//! let mut table = DataTable::new()
//!     .columns(vec![
//!         Column::field("Name", "name").sortable(),
//!         Column::field("Age", "age").sortable(),
//!     ])
//!     .key_field("id")
//!     .page_size(2)
//!     .data(data);
//!
//! table.click_header(1);
//! let names: Vec<String> = table
//!     .rendered_rows()
//!     .into_iter()
//!     .map(|r| r.cells[0].clone())
//!     .collect();
//! assert_eq!(names, vec!["Bob", "Alice"]);
//! ```

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::column::{Column, position_of};
use crate::keymap::{KeyMap, PageAction};
use crate::paginator::{DEFAULT_PAGE_SIZE, DEFAULT_PAGE_SIZE_OPTIONS, PageInfo, total_pages};
use crate::pipeline;
use crate::record::Record;
use crate::render::{self, RenderedRow};
use crate::sort::SortDirection;
use crate::state::{Event, Limits, ViewState, reduce};

/// Default text shown when nothing matches.
pub const DEFAULT_EMPTY_MESSAGE: &str = "No data available";

/// Text of the loading placeholder row.
pub const LOADING_MESSAGE: &str = "Loading…";

/// Callback invoked with the clicked record.
pub type RowClickFn<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// Messages understood by [`DataTable::update`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Search input changed.
    Search(String),
    /// Header of the given column was clicked.
    HeaderClick(usize),
    /// Page size was picked.
    PageSize(usize),
    /// First-page button.
    FirstPage,
    /// Previous-page button.
    PrevPage,
    /// Next-page button.
    NextPage,
    /// Last-page button.
    LastPage,
    /// Jump to a page.
    GoToPage(usize),
    /// Row at the given index on the visible page was clicked.
    RowClick(usize),
    /// A key was pressed.
    Key(String),
}

/// Data table model.
pub struct DataTable<T> {
    /// Key bindings for page navigation.
    pub key_map: KeyMap,
    data: Vec<T>,
    columns: Vec<Column<T>>,
    key_field: String,
    caption: Option<String>,
    searchable: bool,
    pagination: bool,
    page_size_options: Vec<usize>,
    loading: bool,
    empty_message: String,
    on_row_click: Option<RowClickFn<T>>,
    state: ViewState,
    filtered_len: usize,
    page: PageInfo,
}

impl<T: Record> Default for DataTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> DataTable<T> {
    /// Creates an empty table with default options.
    #[must_use]
    pub fn new() -> Self {
        let state = ViewState::new(DEFAULT_PAGE_SIZE);
        let mut table = Self {
            key_map: KeyMap::default(),
            data: Vec::new(),
            columns: Vec::new(),
            key_field: "id".to_string(),
            caption: None,
            searchable: true,
            pagination: true,
            page_size_options: DEFAULT_PAGE_SIZE_OPTIONS.to_vec(),
            loading: false,
            empty_message: DEFAULT_EMPTY_MESSAGE.to_string(),
            on_row_click: None,
            state,
            filtered_len: 0,
            page: PageInfo {
                page: 1,
                page_size: DEFAULT_PAGE_SIZE,
                total_pages: 1,
                total_records: 0,
                first: 0,
                last: 0,
            },
        };
        table.refresh();
        table
    }

    /// Sets the records (builder pattern).
    #[must_use]
    pub fn data(mut self, data: Vec<T>) -> Self {
        self.set_data(data);
        self
    }

    /// Sets the columns (builder pattern).
    #[must_use]
    pub fn columns(mut self, columns: Vec<Column<T>>) -> Self {
        self.set_columns(columns);
        self
    }

    /// Sets the field that identifies a record (builder pattern).
    #[must_use]
    pub fn key_field(mut self, field: impl Into<String>) -> Self {
        self.key_field = field.into();
        self
    }

    /// Sets the caption (builder pattern).
    #[must_use]
    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    /// Shows or hides the search input (builder pattern).
    #[must_use]
    pub fn searchable(mut self, searchable: bool) -> Self {
        self.searchable = searchable;
        self
    }

    /// Enables or disables pagination (builder pattern).
    #[must_use]
    pub fn pagination(mut self, pagination: bool) -> Self {
        self.pagination = pagination;
        self.refresh();
        self
    }

    /// Sets the initial rows per page (builder pattern).
    ///
    /// A size missing from the options is added to them.
    #[must_use]
    pub fn page_size(mut self, size: usize) -> Self {
        let size = size.max(1);
        self.state.page_size = size;
        self.state.current_page = 1;
        self.normalize_options();
        self.refresh();
        self
    }

    /// Sets the selectable page sizes (builder pattern).
    ///
    /// Zeros are dropped, the rest sorted and de-duplicated, and the current
    /// page size is kept selectable.
    #[must_use]
    pub fn page_size_options(mut self, options: Vec<usize>) -> Self {
        self.page_size_options = options;
        self.normalize_options();
        self
    }

    /// Sets the loading flag (builder pattern).
    #[must_use]
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Sets the message shown when nothing matches (builder pattern).
    #[must_use]
    pub fn empty_message(mut self, message: impl Into<String>) -> Self {
        self.empty_message = message.into();
        self
    }

    /// Sets the row click callback (builder pattern).
    #[must_use]
    pub fn on_row_click<F>(mut self, f: F) -> Self
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        self.on_row_click = Some(Arc::new(f));
        self
    }

    /// Sets the key map (builder pattern).
    #[must_use]
    pub fn with_key_map(mut self, key_map: KeyMap) -> Self {
        self.key_map = key_map;
        self
    }

    fn normalize_options(&mut self) {
        self.page_size_options.retain(|&n| n > 0);
        if !self.page_size_options.contains(&self.state.page_size) {
            self.page_size_options.push(self.state.page_size);
        }
        self.page_size_options.sort_unstable();
        self.page_size_options.dedup();
    }

    /// Replaces the records and returns to page 1.
    pub fn set_data(&mut self, data: Vec<T>) {
        self.data = data;
        self.apply(Event::DataChanged);
    }

    /// Replaces the columns and returns to page 1, clearing a sort that no
    /// longer applies.
    pub fn set_columns(&mut self, columns: Vec<Column<T>>) {
        self.columns = columns;
        self.state.current_page = 1;
        if let Some(i) = self.state.sort.column
            && !self.columns.get(i).is_some_and(|c| c.sortable)
        {
            self.state.sort = Default::default();
        }
        self.refresh();
    }

    /// Sets the loading flag.
    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Returns the records.
    #[must_use]
    pub fn get_data(&self) -> &[T] {
        &self.data
    }

    /// Returns the columns.
    #[must_use]
    pub fn get_columns(&self) -> &[Column<T>] {
        &self.columns
    }

    /// Returns the key field.
    #[must_use]
    pub fn get_key_field(&self) -> &str {
        &self.key_field
    }

    /// Returns the caption.
    #[must_use]
    pub fn get_caption(&self) -> Option<&str> {
        self.caption.as_deref()
    }

    /// Returns whether the search input is shown.
    #[must_use]
    pub fn is_searchable(&self) -> bool {
        self.searchable
    }

    /// Returns whether pagination is enabled.
    #[must_use]
    pub fn has_pagination(&self) -> bool {
        self.pagination
    }

    /// Returns the selectable page sizes.
    #[must_use]
    pub fn get_page_size_options(&self) -> &[usize] {
        &self.page_size_options
    }

    /// Returns whether the loading placeholder is shown.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Returns the empty-state message.
    #[must_use]
    pub fn get_empty_message(&self) -> &str {
        &self.empty_message
    }

    /// Returns the current view state.
    #[must_use]
    pub fn view_state(&self) -> &ViewState {
        &self.state
    }

    /// Returns the current page information.
    #[must_use]
    pub fn page_info(&self) -> PageInfo {
        self.page
    }

    /// Returns the number of records that pass the search.
    #[must_use]
    pub fn filtered_len(&self) -> usize {
        self.filtered_len
    }

    /// Returns the index of the column addressed by `name`.
    #[must_use]
    pub fn column_index(&self, name: &str) -> Option<usize> {
        position_of(&self.columns, name)
    }

    fn limits(&self) -> (usize, Vec<bool>) {
        let pages = if self.pagination {
            total_pages(self.filtered_len, self.state.page_size)
        } else {
            1
        };
        (pages, self.columns.iter().map(|c| c.sortable).collect())
    }

    fn apply(&mut self, event: Event) {
        // Bounds are taken from the state before the event; search changes
        // always land on page 1 so they never need the new bounds.
        let (total_pages, sortable) = self.limits();
        let limits = Limits {
            total_pages,
            sortable: &sortable,
            page_size_options: &self.page_size_options,
        };
        let state = std::mem::take(&mut self.state);
        self.state = reduce(state, &event, &limits);
        self.refresh();
    }

    /// Re-runs the pipeline and records the page bounds.
    fn refresh(&mut self) {
        let out = pipeline::run(&self.data, &self.columns, &self.state, self.pagination);
        self.filtered_len = out.filtered_len();
        self.page = out.page;
    }

    /// Updates the search term and returns to page 1.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.apply(Event::Search(term.into()));
    }

    /// Activates a column header. Non-sortable columns ignore the click.
    pub fn click_header(&mut self, column: usize) {
        self.apply(Event::ToggleSort(column));
    }

    /// Picks a page size from the options and returns to page 1.
    pub fn set_page_size(&mut self, size: usize) {
        self.apply(Event::SetPageSize(size));
    }

    /// Goes to page 1.
    pub fn first_page(&mut self) {
        self.apply(Event::FirstPage);
    }

    /// Goes back one page.
    pub fn prev_page(&mut self) {
        self.apply(Event::PrevPage);
    }

    /// Goes forward one page.
    pub fn next_page(&mut self) {
        self.apply(Event::NextPage);
    }

    /// Goes to the last page.
    pub fn last_page(&mut self) {
        self.apply(Event::LastPage);
    }

    /// Goes to `page`, clamped to the available pages.
    pub fn go_to_page(&mut self, page: usize) {
        self.apply(Event::GoToPage(page));
    }

    /// Returns whether the previous/first buttons are actionable.
    #[must_use]
    pub fn can_prev(&self) -> bool {
        self.page.page > 1
    }

    /// Returns whether the next/last buttons are actionable.
    #[must_use]
    pub fn can_next(&self) -> bool {
        self.page.page < self.page.total_pages
    }

    /// Forwards the record at `index` on the visible page to the row click
    /// callback.
    ///
    /// Returns true if a record was forwarded.
    pub fn click_row(&self, index: usize) -> bool {
        let Some(callback) = &self.on_row_click else {
            return false;
        };
        if self.loading {
            return false;
        }
        let rows = self.visible_records();
        let Some(&record) = rows.get(index) else {
            return false;
        };
        debug!(key = %record.key(&self.key_field), index, "row clicked");
        callback(record);
        true
    }

    /// Returns the records on the visible page, in display order.
    #[must_use]
    pub fn visible_records(&self) -> Vec<&T> {
        pipeline::run(&self.data, &self.columns, &self.state, self.pagination)
            .rows()
            .to_vec()
    }

    /// Renders the visible records.
    #[must_use]
    pub fn rendered_rows(&self) -> Vec<RenderedRow> {
        self.visible_records()
            .into_iter()
            .map(|r| render::render_row(r, &self.columns, &self.key_field))
            .collect()
    }

    /// Updates the table based on messages.
    pub fn update(&mut self, msg: Msg) {
        match msg {
            Msg::Search(term) => self.set_search_term(term),
            Msg::HeaderClick(column) => self.click_header(column),
            Msg::PageSize(size) => self.set_page_size(size),
            Msg::FirstPage => self.first_page(),
            Msg::PrevPage => self.prev_page(),
            Msg::NextPage => self.next_page(),
            Msg::LastPage => self.last_page(),
            Msg::GoToPage(page) => self.go_to_page(page),
            Msg::RowClick(index) => {
                self.click_row(index);
            }
            Msg::Key(key) => match self.key_map.action(&key) {
                Some(PageAction::First) => self.first_page(),
                Some(PageAction::Prev) => self.prev_page(),
                Some(PageAction::Next) => self.next_page(),
                Some(PageAction::Last) => self.last_page(),
                None => {}
            },
        }
    }

    fn header_labels(&self) -> Vec<String> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, col)| match self.state.sort.direction_of(i) {
                SortDirection::None => col.header.clone(),
                d => format!("{} {}", col.header, d.indicator()),
            })
            .collect()
    }

    fn footer_view(&self) -> String {
        let sizes: Vec<String> = self
            .page_size_options
            .iter()
            .map(|&n| {
                if n == self.state.page_size {
                    format!("[{n}]")
                } else {
                    n.to_string()
                }
            })
            .collect();
        format!(
            "{}  {}  Rows per page: {}",
            self.page.summary(),
            self.page.view(),
            sizes.join(" ")
        )
    }

    /// Renders the table.
    #[must_use]
    pub fn view(&self) -> String {
        let mut lines = Vec::new();

        if let Some(caption) = &self.caption {
            lines.push(caption.clone());
        }
        if self.searchable {
            lines.push(format!("Search: {}", self.state.search_term));
        }

        let headers = self.header_labels();
        let rows = if self.loading {
            Vec::new()
        } else {
            self.rendered_rows()
        };
        let widths = render::column_widths(&self.columns, &headers, &rows);
        lines.push(render::line(&headers, &self.columns, &widths));
        lines.push(render::rule(&widths));

        if self.loading {
            lines.push(format!(" {LOADING_MESSAGE}"));
        } else if self.filtered_len == 0 {
            lines.push(format!(" {}", self.empty_message));
        } else {
            for row in &rows {
                lines.push(render::line(&row.cells, &self.columns, &widths));
            }
        }

        if self.pagination {
            lines.push(String::new());
            lines.push(self.footer_view());
        }

        lines.join("\n")
    }
}

impl<T> Clone for DataTable<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        Self {
            key_map: self.key_map.clone(),
            data: self.data.clone(),
            columns: self.columns.clone(),
            key_field: self.key_field.clone(),
            caption: self.caption.clone(),
            searchable: self.searchable,
            pagination: self.pagination,
            page_size_options: self.page_size_options.clone(),
            loading: self.loading,
            empty_message: self.empty_message.clone(),
            on_row_click: self.on_row_click.clone(),
            state: self.state.clone(),
            filtered_len: self.filtered_len,
            page: self.page,
        }
    }
}

impl<T> fmt::Debug for DataTable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataTable")
            .field("records", &self.data.len())
            .field("columns", &self.columns)
            .field("key_field", &self.key_field)
            .field("caption", &self.caption)
            .field("searchable", &self.searchable)
            .field("pagination", &self.pagination)
            .field("page_size_options", &self.page_size_options)
            .field("loading", &self.loading)
            .field("state", &self.state)
            .field("page", &self.page)
            .finish()
    }
}
