//! Error taxonomy for the constraint engine.
//!
//! All three types are surfaced to the immediate caller and never caught
//! internally. `ConstraintError` and `Unrepresentable` are fatal to
//! collection construction; `TypeMismatch` aborts only the write that
//! triggered it.

use thiserror::Error;

/// Malformed constraint expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstraintError {
    /// The expression, or one `|`-separated segment of it, is empty.
    #[error("empty type token in constraint expression")]
    EmptyToken,
    /// The same token appears twice.
    #[error("duplicate type token `{token}` in constraint expression")]
    DuplicateToken {
        /// The offending token text.
        token: String,
    },
    /// A name that is neither a recognized keyword nor a registered
    /// nominal type.
    #[error("unknown type `{name}` in constraint expression")]
    UnknownType {
        /// The unresolvable name.
        name: String,
    },
}

/// A value failed validation against a `TypeSet`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("type mismatch: expected `{expected}`, got `{got}`")]
pub struct TypeMismatch {
    /// Rendered constraint the value was checked against.
    pub expected: String,
    /// Runtime type name of the rejected value.
    pub got: String,
}

/// No default value can be derived for a constraint and none was supplied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no default value can be derived for constraint `{constraint}`")]
pub struct Unrepresentable {
    /// Rendered constraint.
    pub constraint: String,
}
