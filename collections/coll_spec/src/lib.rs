//! Type-constraint engine for the coll collections.
//!
//! This crate provides:
//! - Constraint expression parsing (`parse`, `TypeToken`)
//! - The resolved, queryable constraint (`TypeSet`): validation, inference,
//!   containment queries, default-value derivation
//! - The constraint error taxonomy (`ConstraintError`, `TypeMismatch`,
//!   `Unrepresentable`)
//!
//! # Constraint expressions
//!
//! A constraint is a `|`-separated union of type tokens with an optional
//! leading `?` meaning "union with null":
//!
//! ```text
//! "int"              exactly 64-bit integers
//! "int|string|null"  integers, strings, or null
//! "?Money"           Money (or any subtype) or null
//! "uint"             non-negative integers
//! ```
//!
//! Passing no expression at all is the "impose no constraint" sentinel:
//! the resulting `TypeSet` imposes no restriction. This is distinct from
//! the literal expression `"null"`, which admits only the null value.
//!
//! A `TypeSet` is created once per collection and is immutable thereafter;
//! validation is deterministic and side-effect-free.

mod errors;
mod parse;
mod set;
mod token;

pub use errors::{ConstraintError, TypeMismatch, Unrepresentable};
pub use parse::parse;
pub use set::TypeSet;
pub use token::TypeToken;
