//! Typed collections over the coll engines.
//!
//! Three collection kinds, all governed by a runtime type constraint that
//! is fixed at construction and validated on every write:
//!
//! - [`Sequence`] — ordered, dense, positional; carries a default value
//!   used to gap-fill when writing past the end
//! - [`Dict`] — keyed by *any* runtime value under strict equality,
//!   insertion-ordered
//! - [`UniqueSet`] — duplicate-free, first-seen order
//!
//! The heavy lifting lives in the engine crates: `coll_spec` (constraint
//! parsing, validation, inference, defaults) and `coll_store` (key
//! canonicalization, insertion-ordered storage). This crate is the thin
//! façade layer plus the shared [`Collection`] contract.
//!
//! # Iteration contract
//!
//! Every `iter()` call starts a fresh, finite iteration in the
//! collection's defined order. Mutating a collection while iterating is
//! ruled out by the borrow checker; positional stability across separate
//! iterations is only guaranteed between mutations.
//!
//! # Example
//!
//! ```
//! use coll::{Collection, Sequence};
//! use coll_value::{SharedRegistry, Value};
//!
//! let registry = SharedRegistry::default();
//! let mut seq = Sequence::new(Some("?int"), registry)?;
//! seq.push(Value::Int(5))?;
//! seq.set(3, Value::Int(9))?;   // gap-fills positions 1 and 2 with null
//! assert_eq!(seq.len(), 4);
//! # Ok::<(), coll::Error>(())
//! ```

mod base;
mod dict;
mod errors;
mod export;
mod sequence;
mod unique;

pub use base::Collection;
pub use dict::Dict;
pub use errors::{ArityError, Error, IndexError, Result};
pub use export::{ExportError, FlatKey};
pub use sequence::Sequence;
pub use unique::UniqueSet;

// Re-export the engine surface the façades are built from.
pub use coll_spec::{ConstraintError, TypeMismatch, TypeSet, TypeToken, Unrepresentable};
pub use coll_store::KeyNotFound;
pub use coll_value::{ObjectValue, SharedRegistry, TypeRegistry, Value};
