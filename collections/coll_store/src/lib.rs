//! Arbitrary-key associative store.
//!
//! This crate provides:
//! - Key canonicalization (`canonicalize`, `CanonKey`, `ExactKey`): mapping
//!   any runtime value to a comparison-ready surrogate
//! - The insertion-ordered map built on it (`AssocStore`, `StoredEntry`)
//! - The lookup error (`KeyNotFound`)
//!
//! # Two-level key comparison
//!
//! A canonical key carries a cheap `bucket` hash for map placement and an
//! `exact` token that re-applies the engine's strict equality rule in full.
//! Equality between canonical keys always goes through the exact token, so
//! bucket collisions can never produce a false lookup hit, and values of
//! different runtime types (`1`, `"1"`, `1.0`, `true`) can never collide
//! even where their payload encodings coincide.

mod canon;
mod store;

pub use canon::{canonicalize, CanonKey, ExactKey};
pub use store::{AssocStore, KeyNotFound, StoredEntry};
