//! Reference values with instance identity.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::registry::ClassId;
use crate::value::Value;

static NEXT_INSTANCE: AtomicU64 = AtomicU64::new(1);

/// Identity token for one object instance.
///
/// Allocated from a process-wide counter at construction. Two objects are
/// the same value iff their `InstanceId`s are equal; field contents never
/// participate in equality or key comparison.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct InstanceId(u64);

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An object value: exact class, instance identity, named fields.
#[derive(Clone, Debug)]
pub struct ObjectValue {
    class: ClassId,
    instance: InstanceId,
    fields: Vec<(Arc<str>, Value)>,
}

impl ObjectValue {
    /// Create an object of the given class with a fresh instance identity.
    pub fn new(class: ClassId, fields: Vec<(Arc<str>, Value)>) -> Self {
        ObjectValue {
            class,
            instance: InstanceId(NEXT_INSTANCE.fetch_add(1, Ordering::Relaxed)),
            fields,
        }
    }

    /// The exact class of this object.
    pub fn class(&self) -> ClassId {
        self.class
    }

    /// The identity token of this instance.
    pub fn instance(&self) -> InstanceId {
        self.instance
    }

    /// All fields in declaration order.
    pub fn fields(&self) -> &[(Arc<str>, Value)] {
        &self.fields
    }

    /// Look up a field by name.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(field, _)| &**field == name)
            .map(|(_, value)| value)
    }

    /// Clone with a fresh instance identity and deep-cloned fields.
    ///
    /// This is the clone-on-materialize primitive: each call produces an
    /// instance that shares no identity with the source or with any prior
    /// clone.
    pub fn deep_clone(&self) -> Self {
        ObjectValue::new(
            self.class,
            self.fields
                .iter()
                .map(|(name, value)| (Arc::clone(name), value.deep_materialize()))
                .collect(),
        )
    }
}
