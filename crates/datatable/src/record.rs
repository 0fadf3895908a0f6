//! The record abstraction tables read from.

use std::collections::BTreeMap;

use crate::value::CellValue;

/// A row's underlying data.
///
/// Tables only ever read records. Field lookups are by name and never fail:
/// an unknown field resolves to [`CellValue::Empty`].
///
/// # Example
///
/// ```rust
/// use datatable::record::Record;
/// use datatable::value::CellValue;
///
/// struct Member {
///     id: u32,
///     name: String,
/// }
///
/// impl Record for Member {
///     fn field(&self, name: &str) -> CellValue {
///         match name {
///             "id" => self.id.into(),
///             "name" => self.name.as_str().into(),
///             _ => CellValue::Empty,
///         }
///     }
/// }
///
/// let m = Member { id: 7, name: "Wanjiku".into() };
/// assert_eq!(m.key("id"), "7");
/// assert!(m.field("phone").is_empty());
/// ```
pub trait Record {
    /// Returns the value of the named field.
    fn field(&self, name: &str) -> CellValue;

    /// Returns the identity of this record, read from `key_field`.
    fn key(&self, key_field: &str) -> String {
        self.field(key_field).to_string()
    }
}

impl Record for serde_json::Value {
    fn field(&self, name: &str) -> CellValue {
        self.get(name).map_or(CellValue::Empty, CellValue::from)
    }
}

impl Record for BTreeMap<String, CellValue> {
    fn field(&self, name: &str) -> CellValue {
        self.get(name).cloned().unwrap_or_default()
    }
}

impl<R: Record + ?Sized> Record for &R {
    fn field(&self, name: &str) -> CellValue {
        (**self).field(name)
    }

    fn key(&self, key_field: &str) -> String {
        (**self).key(key_field)
    }
}
