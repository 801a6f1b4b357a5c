//! Export of keyed entries to a foreign flat structure.
//!
//! A flat target (a plain ordered array in the host language) can only key
//! by integers and strings. The façade rejects everything else explicitly;
//! the core never re-indexes on the caller's behalf.

use std::fmt;
use std::sync::Arc;

use thiserror::Error;

use coll_value::Value;

/// A key surviving unchanged into a flat structure.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FlatKey {
    /// Integer key.
    Int(i64),
    /// String key.
    Str(Arc<str>),
}

/// A key that cannot be represented in the flat target's key domain.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportError {
    /// Only integer and string keys survive a flat export.
    #[error("key {key} cannot be represented in a flat structure")]
    UnexportableKey {
        /// Rendering of the rejected key.
        key: String,
    },
}

impl TryFrom<&Value> for FlatKey {
    type Error = ExportError;

    fn try_from(key: &Value) -> std::result::Result<Self, ExportError> {
        match key {
            Value::Int(i) => Ok(FlatKey::Int(*i)),
            Value::Str(s) => Ok(FlatKey::Str(Arc::clone(s))),
            other => Err(ExportError::UnexportableKey {
                key: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for FlatKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlatKey::Int(i) => write!(f, "{i}"),
            FlatKey::Str(s) => write!(f, "{s}"),
        }
    }
}
