//! Column sorting and the header-click direction cycle.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::column::Column;
use crate::record::Record;

/// Sort direction of the active column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Source order.
    #[default]
    None,
    /// Smallest first.
    Ascending,
    /// Largest first.
    Descending,
}

impl SortDirection {
    /// Returns the direction after one more activation of the same header.
    ///
    /// None → Ascending → Descending → None.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::None => Self::Ascending,
            Self::Ascending => Self::Descending,
            Self::Descending => Self::None,
        }
    }

    /// Returns the header indicator for this direction.
    #[must_use]
    pub const fn indicator(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Ascending => "▲",
            Self::Descending => "▼",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Ascending => write!(f, "ascending"),
            Self::Descending => write!(f, "descending"),
        }
    }
}

/// Active sort column and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortState {
    /// Index of the sorted column, if any.
    pub column: Option<usize>,
    /// Direction applied to that column.
    pub direction: SortDirection,
}

impl SortState {
    /// Returns true if a sort is in effect.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.column.is_some() && self.direction != SortDirection::None
    }

    /// Returns the direction shown for `column`.
    #[must_use]
    pub fn direction_of(&self, column: usize) -> SortDirection {
        if self.column == Some(column) {
            self.direction
        } else {
            SortDirection::None
        }
    }

    /// Applies one header activation on `column`.
    ///
    /// The same column advances its direction and clears itself once the
    /// cycle returns to none. A different column starts ascending.
    #[must_use]
    pub fn toggle(self, column: usize) -> Self {
        if self.column == Some(column) {
            let direction = self.direction.next();
            Self {
                column: (direction != SortDirection::None).then_some(column),
                direction,
            }
        } else {
            Self {
                column: Some(column),
                direction: SortDirection::Ascending,
            }
        }
    }
}

/// Orders `records` by the raw value of `column`.
///
/// Returns a new vector; the input is never reordered. Direction none
/// returns the records in their given order.
pub fn sort<'a, T: Record>(
    records: &[&'a T],
    column: &Column<T>,
    direction: SortDirection,
) -> Vec<&'a T> {
    let mut sorted = records.to_vec();
    match direction {
        SortDirection::None => {}
        SortDirection::Ascending => {
            sorted.sort_by(|a, b| column.resolve(a).compare(&column.resolve(b)));
        }
        SortDirection::Descending => {
            sorted.sort_by(|a, b| column.resolve(b).compare(&column.resolve(a)));
        }
    }
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn people() -> Vec<Value> {
        vec![
            json!({"name": "Alice", "age": 30}),
            json!({"name": "Bob", "age": 25}),
            json!({"name": "Carol", "age": 40}),
        ]
    }

    fn names(rows: &[&Value]) -> Vec<String> {
        rows.iter().map(|r| r.field("name").to_string()).collect()
    }

    #[test]
    fn test_direction_cycle() {
        let d = SortDirection::None;
        assert_eq!(d.next(), SortDirection::Ascending);
        assert_eq!(d.next().next(), SortDirection::Descending);
        assert_eq!(d.next().next().next(), SortDirection::None);
    }

    #[test]
    fn test_toggle_same_column_cycles_and_clears() {
        let s = SortState::default().toggle(1);
        assert_eq!(s.column, Some(1));
        assert_eq!(s.direction, SortDirection::Ascending);

        let s = s.toggle(1);
        assert_eq!(s.direction, SortDirection::Descending);

        let s = s.toggle(1);
        assert_eq!(s, SortState::default());
        assert!(!s.is_active());
    }

    #[test]
    fn test_toggle_other_column_starts_ascending() {
        let s = SortState::default().toggle(0).toggle(0);
        assert_eq!(s.direction, SortDirection::Descending);

        let s = s.toggle(1);
        assert_eq!(s.column, Some(1));
        assert_eq!(s.direction, SortDirection::Ascending);
        assert_eq!(s.direction_of(0), SortDirection::None);
        assert_eq!(s.direction_of(1), SortDirection::Ascending);
    }

    #[test]
    fn test_sort_numeric() {
        let data = people();
        let refs: Vec<&Value> = data.iter().collect();
        let age: Column<Value> = Column::field("Age", "age");

        assert_eq!(
            names(&sort(&refs, &age, SortDirection::Ascending)),
            vec!["Bob", "Alice", "Carol"]
        );
        assert_eq!(
            names(&sort(&refs, &age, SortDirection::Descending)),
            vec!["Carol", "Alice", "Bob"]
        );
        assert_eq!(
            names(&sort(&refs, &age, SortDirection::None)),
            vec!["Alice", "Bob", "Carol"]
        );
        // Input order is untouched.
        assert_eq!(names(&refs), vec!["Alice", "Bob", "Carol"]);
    }

    #[test]
    fn test_sort_numbers_not_as_text() {
        let data = vec![json!({"n": 100}), json!({"n": 9}), json!({"n": 25})];
        let refs: Vec<&Value> = data.iter().collect();
        let col: Column<Value> = Column::field("N", "n");
        let sorted: Vec<String> = sort(&refs, &col, SortDirection::Ascending)
            .iter()
            .map(|r| r.field("n").to_string())
            .collect();
        assert_eq!(sorted, vec!["9", "25", "100"]);
    }

    #[test]
    fn test_sort_with_missing_values() {
        let data = vec![json!({"n": 2}), json!({}), json!({"n": 1})];
        let refs: Vec<&Value> = data.iter().collect();
        let col: Column<Value> = Column::field("N", "n");
        let sorted: Vec<String> = sort(&refs, &col, SortDirection::Ascending)
            .iter()
            .map(|r| r.field("n").to_string())
            .collect();
        assert_eq!(sorted, vec!["", "1", "2"]);
    }

    #[test]
    fn test_direction_display() {
        assert_eq!(SortDirection::None.to_string(), "none");
        assert_eq!(SortDirection::Ascending.to_string(), "ascending");
        assert_eq!(SortDirection::Descending.to_string(), "descending");
        assert_eq!(SortDirection::Ascending.indicator(), "▲");
    }
}
