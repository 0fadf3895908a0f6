//! Accessor resolution: how a column reads its raw value from a record.

use std::fmt;
use std::sync::Arc;

use crate::record::Record;
use crate::value::CellValue;

/// Function type for derived accessors.
pub type DeriveFn<T> = Arc<dyn Fn(&T) -> CellValue + Send + Sync>;

/// Rule for extracting a column's raw value from a record.
pub enum Accessor<T> {
    /// Look up a named field through [`Record::field`].
    Field(String),
    /// Compute the value from the whole record.
    ///
    /// The function must be deterministic and must not mutate the record.
    Derived(DeriveFn<T>),
}

impl<T: Record> Accessor<T> {
    /// Resolves the raw value for `record`.
    ///
    /// Absent fields come back as [`CellValue::Empty`]; there is no error
    /// case.
    pub fn resolve(&self, record: &T) -> CellValue {
        match self {
            Self::Field(name) => record.field(name),
            Self::Derived(f) => f(record),
        }
    }
}

impl<T> Accessor<T> {
    /// Creates a field accessor.
    pub fn field(name: impl Into<String>) -> Self {
        Self::Field(name.into())
    }

    /// Creates a derived accessor.
    pub fn derived<F>(f: F) -> Self
    where
        F: Fn(&T) -> CellValue + Send + Sync + 'static,
    {
        Self::Derived(Arc::new(f))
    }

    /// Returns the field name for field accessors.
    #[must_use]
    pub fn field_name(&self) -> Option<&str> {
        match self {
            Self::Field(name) => Some(name),
            Self::Derived(_) => None,
        }
    }
}

impl<T> Clone for Accessor<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Field(name) => Self::Field(name.clone()),
            Self::Derived(f) => Self::Derived(Arc::clone(f)),
        }
    }
}

impl<T> fmt::Debug for Accessor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(name) => f.debug_tuple("Field").field(name).finish(),
            Self::Derived(_) => f.write_str("Derived(<fn>)"),
        }
    }
}
