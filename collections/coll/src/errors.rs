//! Façade-level errors and the unified error enum.

use thiserror::Error;

use crate::export::ExportError;

/// Positional access failure on an ordered collection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IndexError {
    /// Read past the end of the collection.
    #[error("index {index} out of range for length {len}")]
    OutOfRange {
        /// Requested position.
        index: usize,
        /// Current length.
        len: usize,
    },
    /// Positional access on an empty collection.
    #[error("collection is empty")]
    Underflow,
}

/// A variadic entry point was invoked with a parameter shape the engine
/// cannot interpret.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("expected a key and a value, or a single two-element entry, got {got} argument(s)")]
pub struct ArityError {
    /// Number of arguments actually supplied.
    pub got: usize,
}

/// Unified error for callers that want a single type.
///
/// Every variant wraps one member of the engine taxonomy unchanged; the
/// core never catches or suppresses its own errors, so whatever a façade
/// operation hit is exactly what surfaces here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Malformed constraint expression.
    #[error(transparent)]
    Constraint(#[from] coll_spec::ConstraintError),
    /// A value failed constraint validation.
    #[error(transparent)]
    Type(#[from] coll_spec::TypeMismatch),
    /// No default value derivable and none supplied.
    #[error(transparent)]
    Default(#[from] coll_spec::Unrepresentable),
    /// Lookup or removal by an absent key.
    #[error(transparent)]
    Key(#[from] coll_store::KeyNotFound),
    /// Positional access failure.
    #[error(transparent)]
    Index(#[from] IndexError),
    /// Variadic argument shape mismatch.
    #[error(transparent)]
    Arity(#[from] ArityError),
    /// A key not representable in a flat export target.
    #[error(transparent)]
    Export(#[from] ExportError),
}

/// Result alias for façade operations.
pub type Result<T> = std::result::Result<T, Error>;
