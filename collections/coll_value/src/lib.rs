//! Runtime value model for the coll typed-collection engine.
//!
//! This crate provides:
//! - The closed runtime value enumeration (`Value`, `TypeTag`)
//! - Reference values with instance identity (`ObjectValue`, `InstanceId`)
//! - The nominal-type table with cached ancestor closures (`TypeRegistry`)
//! - The shared registry handle held by collections (`SharedRegistry`)
//!
//! # Architecture
//!
//! Every admissible host value is one variant of `Value`. All dispatch in the
//! engine — constraint validation, key canonicalization, strict equality —
//! switches on `Value::tag()`, never on ad hoc type probing. Nominal
//! ("class matches subclasses") checks go through `TypeRegistry::satisfies`,
//! which is a set lookup against a closure computed once at registration.
//!
//! # Strict Equality
//!
//! `Value::strict_eq` implements the engine-wide equality rule: identical
//! type tag plus identical payload. Cross-type comparisons (`1` vs `"1"` vs
//! `true`) are always false. Floats compare by bit pattern so that any value
//! used as a store key can always be found again. Objects compare by
//! instance identity, never by field contents.

mod object;
mod registry;
mod shared;
mod value;

pub use object::{InstanceId, ObjectValue};
pub use registry::{ClassId, RegistryError, TypeRegistry};
pub use shared::SharedRegistry;
pub use value::{TypeTag, Value};
