//! Key canonicalization.

use std::hash::{Hash, Hasher};
use std::sync::Arc;

use rustc_hash::FxHasher;

use coll_value::{InstanceId, Value};

/// Exact comparison token: enough information to re-apply strict equality.
///
/// The variant is the runtime type tag, so two tokens of different runtime
/// types are unequal regardless of payload. Composite values are captured
/// as a deep structural snapshot; objects contribute only their instance
/// identity.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ExactKey {
    /// The null key.
    Null,
    /// Boolean key.
    Bool(bool),
    /// Integer key.
    Int(i64),
    /// Float key, by bit pattern (total: NaN keys re-look-up as hits).
    Float(u64),
    /// String key.
    Str(Arc<str>),
    /// Structural snapshot of an array key.
    Array(Box<[ExactKey]>),
    /// Identity token of an object key.
    Instance(InstanceId),
}

/// A comparison-ready key: cheap bucket hash plus exact token.
///
/// Hashes by `bucket` and compares by `exact`, so a hash-map keyed on
/// `CanonKey` gets fast placement with exact collision resolution.
#[derive(Clone, Debug)]
pub struct CanonKey {
    bucket: u64,
    exact: ExactKey,
}

impl CanonKey {
    /// The bucket-placement hash.
    pub fn bucket(&self) -> u64 {
        self.bucket
    }

    /// The exact comparison token.
    pub fn exact(&self) -> &ExactKey {
        &self.exact
    }
}

impl PartialEq for CanonKey {
    fn eq(&self, other: &Self) -> bool {
        // Final equality is always the exact token, never the bucket.
        self.exact == other.exact
    }
}

impl Eq for CanonKey {}

impl Hash for CanonKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.bucket);
    }
}

/// Map an arbitrary runtime value to its comparison-ready representation.
pub fn canonicalize(value: &Value) -> CanonKey {
    let exact = snapshot(value);
    let mut hasher = FxHasher::default();
    exact.hash(&mut hasher);
    CanonKey {
        bucket: hasher.finish(),
        exact,
    }
}

fn snapshot(value: &Value) -> ExactKey {
    match value {
        Value::Null => ExactKey::Null,
        Value::Bool(b) => ExactKey::Bool(*b),
        Value::Int(i) => ExactKey::Int(*i),
        Value::Float(x) => ExactKey::Float(x.to_bits()),
        Value::Str(s) => ExactKey::Str(Arc::clone(s)),
        Value::Array(items) => ExactKey::Array(items.iter().map(snapshot).collect()),
        Value::Object(o) => ExactKey::Instance(o.instance()),
    }
}
