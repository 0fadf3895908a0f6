//! The fixed filter → sort → paginate pipeline.

use tracing::trace;

use crate::column::Column;
use crate::filter::filter;
use crate::paginator::{PageInfo, Paginator};
use crate::record::Record;
use crate::sort::sort;
use crate::state::ViewState;

/// Result of running the pipeline once.
#[derive(Debug)]
pub struct PipelineOutput<'a, T> {
    /// Filtered and sorted records, in display order, across all pages.
    pub ordered: Vec<&'a T>,
    /// Slice bounds of the current page within `ordered`.
    pub bounds: (usize, usize),
    /// Page side information.
    pub page: PageInfo,
}

impl<'a, T> PipelineOutput<'a, T> {
    /// Returns the records on the current page.
    #[must_use]
    pub fn rows(&self) -> &[&'a T] {
        &self.ordered[self.bounds.0..self.bounds.1]
    }

    /// Returns the number of records left after filtering.
    #[must_use]
    pub fn filtered_len(&self) -> usize {
        self.ordered.len()
    }
}

/// Runs filter, then sort, then paginate over `data`.
///
/// With `paginate` off every filtered record lands on a single page.
pub fn run<'a, T: Record>(
    data: &'a [T],
    columns: &[Column<T>],
    state: &ViewState,
    paginate: bool,
) -> PipelineOutput<'a, T> {
    let all: Vec<&T> = data.iter().collect();
    let filtered = filter(&all, columns, &state.search_term);

    let ordered = match state.sort.column.and_then(|i| columns.get(i)) {
        Some(column) if state.sort.is_active() => sort(&filtered, column, state.sort.direction),
        _ => filtered,
    };

    let len = ordered.len();
    let paginator = if paginate {
        Paginator::new()
            .per_page(state.page_size)
            .at_page(state.current_page)
    } else {
        Paginator::new().per_page(len.max(1))
    };
    let bounds = paginator.slice_bounds(len);
    let page = paginator.info(len);

    trace!(
        total = data.len(),
        filtered = len,
        page = page.page,
        shown = bounds.1 - bounds.0,
        "pipeline evaluated"
    );

    PipelineOutput {
        ordered,
        bounds,
        page,
    }
}
