//! Cell values produced by column accessors.
//!
//! Every accessor resolves to a [`CellValue`]. The enum is closed so that
//! searching and sorting always have a textual form and a total ordering to
//! work with, whatever mix of kinds a column produces.
//!
//! # Example
//!
//! ```rust
//! use datatable::value::CellValue;
//! use std::cmp::Ordering;
//!
//! assert_eq!(CellValue::from(25).compare(&CellValue::from(30.5)), Ordering::Less);
//! assert_eq!(CellValue::from("Bob").to_string(), "Bob");
//! assert_eq!(CellValue::from(None::<i64>).to_string(), "");
//! ```

use std::cmp::Ordering;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A resolved cell value.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// Missing or null value.
    #[default]
    Empty,
    /// Boolean flag.
    Bool(bool),
    /// Whole number.
    Int(i64),
    /// Floating point number.
    Float(f64),
    /// Calendar date.
    Date(NaiveDate),
    /// Free text.
    Text(String),
}

impl CellValue {
    /// Returns true for [`CellValue::Empty`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns the value as a number, if it is numeric.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(n) => Some(*n as f64),
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    // Ordering between kinds when values of different kinds meet.
    fn kind_rank(&self) -> u8 {
        match self {
            Self::Empty => 0,
            Self::Bool(_) => 1,
            Self::Int(_) | Self::Float(_) => 2,
            Self::Date(_) => 3,
            Self::Text(_) => 4,
        }
    }

    /// Compares two values by their natural ordering.
    ///
    /// Numbers compare numerically (integers and floats together), text
    /// lexicographically and dates chronologically. `Empty` sorts before
    /// everything else; other mixed kinds fall back to a fixed kind order,
    /// so the comparison is total.
    #[must_use]
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Empty, Self::Empty) => Ordering::Equal,
            (Self::Bool(a), Self::Bool(b)) => a.cmp(b),
            (Self::Int(a), Self::Int(b)) => a.cmp(b),
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            (Self::Date(a), Self::Date(b)) => a.cmp(b),
            (a, b) => match (a.as_f64(), b.as_f64()) {
                (Some(x), Some(y)) => x.total_cmp(&y),
                _ => a.kind_rank().cmp(&b.kind_rank()),
            },
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&String> for CellValue {
    fn from(s: &String) -> Self {
        Self::Text(s.clone())
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<i32> for CellValue {
    fn from(n: i32) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<u32> for CellValue {
    fn from(n: u32) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<u64> for CellValue {
    fn from(n: u64) -> Self {
        i64::try_from(n).map_or(Self::Float(n as f64), Self::Int)
    }
}

impl From<usize> for CellValue {
    fn from(n: usize) -> Self {
        i64::try_from(n).map_or(Self::Float(n as f64), Self::Int)
    }
}

impl From<f64> for CellValue {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

impl From<NaiveDate> for CellValue {
    fn from(d: NaiveDate) -> Self {
        Self::Date(d)
    }
}

impl<V: Into<CellValue>> From<Option<V>> for CellValue {
    fn from(v: Option<V>) -> Self {
        v.map_or(Self::Empty, Into::into)
    }
}

impl From<&serde_json::Value> for CellValue {
    fn from(v: &serde_json::Value) -> Self {
        use serde_json::Value;
        match v {
            Value::Null => Self::Empty,
            Value::Bool(b) => Self::Bool(*b),
            Value::Number(n) => n
                .as_i64()
                .map(Self::Int)
                .or_else(|| n.as_f64().map(Self::Float))
                .unwrap_or(Self::Empty),
            Value::String(s) => Self::Text(s.clone()),
            // Nested structures are shown in their JSON form.
            other => Self::Text(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(CellValue::Empty.to_string(), "");
        assert_eq!(CellValue::from(true).to_string(), "true");
        assert_eq!(CellValue::from(42).to_string(), "42");
        assert_eq!(CellValue::from(2.5).to_string(), "2.5");
        assert_eq!(CellValue::from("Alice").to_string(), "Alice");
        let d = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(CellValue::from(d).to_string(), "2024-03-09");
    }

    #[test]
    fn test_numeric_ordering_is_not_lexicographic() {
        assert_eq!(
            CellValue::from(9).compare(&CellValue::from(10)),
            Ordering::Less
        );
        assert_eq!(
            CellValue::from(10).compare(&CellValue::from(9.5)),
            Ordering::Greater
        );
        assert_eq!(
            CellValue::from(2.0).compare(&CellValue::from(2)),
            Ordering::Equal
        );
    }

    #[test]
    fn test_text_and_date_ordering() {
        assert_eq!(
            CellValue::from("Alice").compare(&CellValue::from("Bob")),
            Ordering::Less
        );
        let a = NaiveDate::from_ymd_opt(2023, 12, 31).unwrap();
        let b = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(CellValue::from(a).compare(&CellValue::from(b)), Ordering::Less);
    }

    #[test]
    fn test_empty_sorts_first() {
        assert_eq!(
            CellValue::Empty.compare(&CellValue::from(-100)),
            Ordering::Less
        );
        assert_eq!(
            CellValue::from("").compare(&CellValue::Empty),
            Ordering::Greater
        );
    }

    #[test]
    fn test_mixed_kinds_are_total() {
        let values = [
            CellValue::from("x"),
            CellValue::from(1),
            CellValue::Empty,
            CellValue::from(false),
        ];
        for a in &values {
            for b in &values {
                assert_eq!(a.compare(b), b.compare(a).reverse());
            }
        }
    }

    #[test]
    fn test_from_option() {
        assert!(CellValue::from(None::<String>).is_empty());
        assert_eq!(CellValue::from(Some(3)), CellValue::Int(3));
    }

    #[test]
    fn test_from_json() {
        let v = serde_json::json!({"a": 1, "b": 1.5, "c": null, "d": "x", "e": [1]});
        assert_eq!(CellValue::from(&v["a"]), CellValue::Int(1));
        assert_eq!(CellValue::from(&v["b"]), CellValue::Float(1.5));
        assert_eq!(CellValue::from(&v["c"]), CellValue::Empty);
        assert_eq!(CellValue::from(&v["d"]), CellValue::from("x"));
        assert_eq!(CellValue::from(&v["e"]).to_string(), "[1]");
    }
}
