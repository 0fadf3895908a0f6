//! Cell rendering and plain-text table layout.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::column::{Align, Column};
use crate::record::Record;

/// Widest a column grows when it is auto-sized.
pub const MAX_AUTO_WIDTH: usize = 40;

/// One visible row, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedRow {
    /// Identity of the record (value of the key field).
    pub key: String,
    /// Display text per column.
    pub cells: Vec<String>,
}

/// Renders every column of `record`.
pub fn render_row<T: Record>(record: &T, columns: &[Column<T>], key_field: &str) -> RenderedRow {
    RenderedRow {
        key: record.key(key_field),
        cells: columns.iter().map(|c| c.render(record)).collect(),
    }
}

/// Truncates a string to the given display width, adding an ellipsis if
/// needed.
#[must_use]
pub fn truncate(s: &str, width: usize) -> String {
    if s.width() <= width {
        return s.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Truncates then pads `s` to exactly `width` display columns.
#[must_use]
pub fn fit(s: &str, width: usize, align: Align) -> String {
    // Control characters would break the row layout.
    let clean: String = s.chars().map(|c| if c.is_control() { ' ' } else { c }).collect();
    let t = truncate(&clean, width);
    let fill = " ".repeat(width.saturating_sub(t.width()));
    match align {
        Align::Left => format!("{t}{fill}"),
        Align::Right => format!("{fill}{t}"),
    }
}

/// Computes a display width per column.
///
/// Fixed widths win; otherwise the widest of the header and the given
/// cells, capped at [`MAX_AUTO_WIDTH`].
#[must_use]
pub fn column_widths<T>(columns: &[Column<T>], headers: &[String], rows: &[RenderedRow]) -> Vec<usize> {
    columns
        .iter()
        .enumerate()
        .map(|(i, col)| {
            col.width.unwrap_or_else(|| {
                let header = headers.get(i).map_or(0, |h| h.width());
                let widest = rows
                    .iter()
                    .filter_map(|r| r.cells.get(i))
                    .map(|c| c.width())
                    .max()
                    .unwrap_or(0);
                header.max(widest).min(MAX_AUTO_WIDTH)
            })
        })
        .collect()
}

/// Lays out one line of cells with one space of padding on each side.
#[must_use]
pub fn line<T>(cells: &[String], columns: &[Column<T>], widths: &[usize]) -> String {
    let out: String = columns
        .iter()
        .zip(widths)
        .enumerate()
        .filter(|(_, (_, w))| **w > 0)
        .map(|(i, (col, w))| {
            let value = cells.get(i).map_or("", String::as_str);
            format!(" {} ", fit(value, *w, col.align))
        })
        .collect();
    out.trim_end().to_string()
}

/// Draws the rule under the header.
#[must_use]
pub fn rule(widths: &[usize]) -> String {
    let out: String = widths
        .iter()
        .filter(|w| **w > 0)
        .map(|w| format!(" {} ", "─".repeat(*w)))
        .collect();
    out.trim_end().to_string()
}
