//! Pagination state and page slicing.
//!
//! Pages are 1-based. A collection always has at least one page, so an
//! empty collection is "page 1 of 1" with nothing on it and page math never
//! divides by zero.
//!
//! # Example
//!
//! ```rust
//! use datatable::paginator::Paginator;
//!
//! let items = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
//! let mut paginator = Paginator::new().per_page(3);
//!
//! paginator.next_page(items.len());
//! assert_eq!(paginator.page(), 2);
//!
//! let (start, end) = paginator.slice_bounds(items.len());
//! assert_eq!(&items[start..end], &[4, 5, 6]);
//! ```

use serde::Serialize;

/// Default rows per page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Default selectable page sizes.
pub const DEFAULT_PAGE_SIZE_OPTIONS: [usize; 5] = [5, 10, 25, 50, 100];

/// Returns the number of pages needed for `len` items.
#[must_use]
pub fn total_pages(len: usize, per_page: usize) -> usize {
    len.div_ceil(per_page.max(1)).max(1)
}

/// Returns the `page` slice of `records`.
///
/// Out-of-range pages yield an empty slice.
#[must_use]
pub fn paginate<T>(records: &[T], page: usize, page_size: usize) -> &[T] {
    let (start, end) = bounds(records.len(), page, page_size);
    &records[start..end]
}

fn bounds(len: usize, page: usize, per_page: usize) -> (usize, usize) {
    let per_page = per_page.max(1);
    let start = page
        .saturating_sub(1)
        .saturating_mul(per_page)
        .min(len);
    let end = start.saturating_add(per_page).min(len);
    if page == 0 { (0, 0) } else { (start, end) }
}

/// Pagination model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    /// Current page (1-based).
    page: usize,
    /// Items per page.
    per_page: usize,
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new()
    }
}

impl Paginator {
    /// Creates a paginator on page 1 with the default page size.
    #[must_use]
    pub fn new() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PAGE_SIZE,
        }
    }

    /// Sets the number of items per page.
    #[must_use]
    pub fn per_page(mut self, n: usize) -> Self {
        self.per_page = n.max(1);
        self
    }

    /// Starts on the given page (not clamped until navigation).
    #[must_use]
    pub fn at_page(mut self, page: usize) -> Self {
        self.page = page.max(1);
        self
    }

    /// Returns the current page (1-based).
    #[must_use]
    pub fn page(&self) -> usize {
        self.page
    }

    /// Returns the items per page.
    #[must_use]
    pub fn get_per_page(&self) -> usize {
        self.per_page
    }

    /// Returns the number of pages for `len` items.
    #[must_use]
    pub fn total_pages(&self, len: usize) -> usize {
        total_pages(len, self.per_page)
    }

    /// Moves to `page`, clamped to `[1, total_pages]`.
    pub fn set_page(&mut self, page: usize, len: usize) {
        self.page = page.clamp(1, self.total_pages(len));
    }

    /// Returns slice bounds of the current page for `len` items.
    #[must_use]
    pub fn slice_bounds(&self, len: usize) -> (usize, usize) {
        bounds(len, self.page, self.per_page)
    }

    /// Returns the number of items on the current page.
    #[must_use]
    pub fn items_on_page(&self, len: usize) -> usize {
        let (start, end) = self.slice_bounds(len);
        end - start
    }

    /// Navigates to the first page.
    pub fn first_page(&mut self) {
        self.page = 1;
    }

    /// Navigates to the previous page.
    pub fn prev_page(&mut self) {
        if self.page > 1 {
            self.page -= 1;
        }
    }

    /// Navigates to the next page.
    pub fn next_page(&mut self, len: usize) {
        if !self.on_last_page(len) {
            self.page += 1;
        }
    }

    /// Navigates to the last page.
    pub fn last_page(&mut self, len: usize) {
        self.page = self.total_pages(len);
    }

    /// Returns whether we're on the first page.
    #[must_use]
    pub fn on_first_page(&self) -> bool {
        self.page <= 1
    }

    /// Returns whether we're on (or past) the last page.
    #[must_use]
    pub fn on_last_page(&self, len: usize) -> bool {
        self.page >= self.total_pages(len)
    }

    /// Describes the current page for `len` items.
    #[must_use]
    pub fn info(&self, len: usize) -> PageInfo {
        let (start, end) = self.slice_bounds(len);
        PageInfo {
            page: self.page,
            page_size: self.per_page,
            total_pages: self.total_pages(len),
            total_records: len,
            first: if end > start { start + 1 } else { 0 },
            last: end,
        }
    }
}

/// Side information about a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageInfo {
    /// Current page (1-based).
    pub page: usize,
    /// Rows per page.
    pub page_size: usize,
    /// Number of pages.
    pub total_pages: usize,
    /// Number of records across all pages.
    pub total_records: usize,
    /// 1-based index of the first row shown, 0 when nothing is shown.
    pub first: usize,
    /// 1-based index of the last row shown, 0 when nothing is shown.
    pub last: usize,
}

impl PageInfo {
    /// Returns "Showing X to Y of Z entries".
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Showing {} to {} of {} entries",
            self.first, self.last, self.total_records
        )
    }

    /// Returns "Page X of N".
    #[must_use]
    pub fn view(&self) -> String {
        format!("Page {} of {}", self.page, self.total_pages)
    }
}
