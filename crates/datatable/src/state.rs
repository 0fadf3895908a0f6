//! Table view state and its transition function.
//!
//! The view state is private to one table instance. Every control maps to
//! an [`Event`], and [`reduce`] computes the next state from the current
//! one. The reducer only needs a few derived bounds ([`Limits`]) to clamp
//! page moves and reject inert clicks, so the whole filter → sort →
//! paginate pipeline stays a pure function of data, columns and state.

use serde::Serialize;
use tracing::debug;

use crate::paginator::DEFAULT_PAGE_SIZE;
use crate::sort::SortState;

/// The table's private, non-persisted state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewState {
    /// Free-text search term.
    pub search_term: String,
    /// Active sort.
    pub sort: SortState,
    /// Current page (1-based).
    pub current_page: usize,
    /// Rows per page.
    pub page_size: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl ViewState {
    /// Creates a fresh state with the given page size.
    #[must_use]
    pub fn new(page_size: usize) -> Self {
        Self {
            search_term: String::new(),
            sort: SortState::default(),
            current_page: 1,
            page_size: page_size.max(1),
        }
    }
}

/// A user or caller action on the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The search input changed.
    Search(String),
    /// A column header was activated.
    ToggleSort(usize),
    /// A page size was picked.
    SetPageSize(usize),
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
    /// The caller supplied a new collection.
    DataChanged,
}

/// Bounds derived from the data and the column set.
#[derive(Debug, Clone, Copy)]
pub struct Limits<'a> {
    /// Pages available for the current filtered collection.
    pub total_pages: usize,
    /// Sortable flag per column index.
    pub sortable: &'a [bool],
    /// Selectable page sizes.
    pub page_size_options: &'a [usize],
}

/// Computes the state after `event`.
///
/// Header clicks on non-sortable (or unknown) columns and page sizes that
/// are not among the options leave the state unchanged. Page moves clamp
/// to `[1, total_pages]`.
#[must_use]
pub fn reduce(state: ViewState, event: &Event, limits: &Limits<'_>) -> ViewState {
    let last = limits.total_pages.max(1);
    let next = match event {
        Event::Search(term) => ViewState {
            search_term: term.clone(),
            current_page: 1,
            ..state
        },
        Event::ToggleSort(column) => {
            if limits.sortable.get(*column).copied().unwrap_or(false) {
                ViewState {
                    sort: state.sort.toggle(*column),
                    ..state
                }
            } else {
                debug!(column, "ignoring click on non-sortable header");
                state
            }
        }
        Event::SetPageSize(size) => {
            if limits.page_size_options.contains(size) {
                ViewState {
                    page_size: *size,
                    current_page: 1,
                    ..state
                }
            } else {
                debug!(size, "ignoring page size outside the options");
                state
            }
        }
        Event::FirstPage => ViewState {
            current_page: 1,
            ..state
        },
        Event::PrevPage => ViewState {
            current_page: state.current_page.saturating_sub(1).clamp(1, last),
            ..state
        },
        Event::NextPage => ViewState {
            current_page: state.current_page.saturating_add(1).clamp(1, last),
            ..state
        },
        Event::LastPage => ViewState {
            current_page: last,
            ..state
        },
        Event::GoToPage(page) => ViewState {
            current_page: (*page).clamp(1, last),
            ..state
        },
        Event::DataChanged => ViewState {
            current_page: 1,
            ..state
        },
    };
    debug!(
        ?event,
        page = next.current_page,
        page_size = next.page_size,
        sort_column = ?next.sort.column,
        sort_direction = %next.sort.direction,
        "view state updated"
    );
    next
}
