//! Free-text search over records.
//!
//! A record matches when any column's raw value, as lower-cased text,
//! contains the lower-cased search term. This is plain substring matching;
//! there is no tokenizing, fuzzy matching or ranking.

use crate::column::Column;
use crate::record::Record;

/// Returns true if the term is blank and therefore filters nothing.
#[must_use]
pub fn is_blank(term: &str) -> bool {
    term.trim().is_empty()
}

/// Returns true if any column of `record` contains `term`.
///
/// Blank terms match every record.
pub fn matches<T: Record>(record: &T, columns: &[Column<T>], term: &str) -> bool {
    if is_blank(term) {
        return true;
    }
    let needle = term.to_lowercase();
    matches_folded(record, columns, &needle)
}

fn matches_folded<T: Record>(record: &T, columns: &[Column<T>], needle: &str) -> bool {
    columns.iter().any(|col| {
        col.resolve(record)
            .to_string()
            .to_lowercase()
            .contains(needle)
    })
}

/// Keeps the records matching `term`, preserving order.
///
/// A blank term returns the input as is.
pub fn filter<'a, T: Record>(records: &[&'a T], columns: &[Column<T>], term: &str) -> Vec<&'a T> {
    if is_blank(term) {
        return records.to_vec();
    }
    let needle = term.to_lowercase();
    records
        .iter()
        .copied()
        .filter(|r| matches_folded(*r, columns, &needle))
        .collect()
}
