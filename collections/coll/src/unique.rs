//! The unique-value collection.

use coll_spec::{parse, TypeSet};
use coll_store::AssocStore;
use coll_value::{SharedRegistry, TypeRegistry, Value};

use crate::base::Collection;
use crate::errors::Result;

/// Duplicate-free collection in first-seen order.
///
/// Built directly on the associative store: each element is stored under
/// itself as key, so membership is the store's strict-equality lookup and
/// duplicates are dropped at insertion.
#[derive(Clone, Debug)]
pub struct UniqueSet {
    types: TypeSet,
    store: AssocStore,
    registry: SharedRegistry<TypeRegistry>,
}

impl UniqueSet {
    /// Create an empty set. `constraint` of `None` imposes no
    /// restriction.
    pub fn new(constraint: Option<&str>, registry: SharedRegistry<TypeRegistry>) -> Result<Self> {
        let types = parse(constraint, &registry)?;
        Ok(UniqueSet {
            types,
            store: AssocStore::new(),
            registry,
        })
    }

    /// Create a set from initial elements, dropping duplicates in
    /// first-seen order.
    ///
    /// With no explicit constraint, one is inferred from the elements.
    pub fn from_values<I>(
        constraint: Option<&str>,
        values: I,
        registry: SharedRegistry<TypeRegistry>,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = Value>,
    {
        let values: Vec<Value> = values.into_iter().collect();
        let types = match constraint {
            Some(expr) => parse(Some(expr), &registry)?,
            None => TypeSet::infer(values.iter()),
        };
        let mut set = UniqueSet {
            types,
            store: AssocStore::new(),
            registry,
        };
        for value in values {
            set.add(value)?;
        }
        Ok(set)
    }

    /// Insert an element. Returns whether it was newly added (false means
    /// an equal element was already present; the set is unchanged).
    pub fn add(&mut self, value: Value) -> Result<bool> {
        self.types.validate(&value, &self.registry)?;
        if self.store.exists(&value) {
            return Ok(false);
        }
        self.store.set(value.clone(), value);
        Ok(true)
    }

    /// Insert a batch of elements, validating each in turn.
    ///
    /// Stops at the first invalid element; everything validated before it
    /// stays committed.
    pub fn add_all<I>(&mut self, values: I) -> Result<()>
    where
        I: IntoIterator<Item = Value>,
    {
        for value in values {
            self.add(value)?;
        }
        Ok(())
    }

    /// Is an element equal to `value` present?
    pub fn contains(&self, value: &Value) -> bool {
        self.store.exists(value)
    }

    /// Remove the element equal to `value`, returning it.
    pub fn remove(&mut self, value: &Value) -> Result<Value> {
        Ok(self.store.remove(value)?)
    }

    /// Iterate elements in first-seen order. Restartable.
    pub fn iter(&self) -> impl Iterator<Item = &Value> {
        self.store.keys()
    }

    /// Structural equality: same elements, order-insensitive. Both sides
    /// are duplicate-free, so equal length plus one-way membership
    /// suffices. Constraints are ignored.
    pub fn equals(&self, other: &UniqueSet) -> bool {
        self.len() == other.len() && self.iter().all(|v| other.contains(v))
    }

    /// Elements present in either set, in first-seen order across
    /// `self` then `other`. Non-mutating; the result keeps the
    /// receiver's constraint, so elements of `other` are re-validated.
    pub fn union(&self, other: &UniqueSet) -> Result<UniqueSet> {
        let mut result = self.clone();
        for value in other.iter() {
            result.add(value.clone())?;
        }
        Ok(result)
    }

    /// Elements present in both sets, in the receiver's order.
    /// Non-mutating.
    pub fn intersect(&self, other: &UniqueSet) -> UniqueSet {
        let mut store = AssocStore::new();
        for value in self.iter() {
            if other.contains(value) {
                store.set(value.clone(), value.clone());
            }
        }
        UniqueSet {
            types: self.types.clone(),
            store,
            registry: self.registry.clone(),
        }
    }

    /// Elements of the receiver absent from `other`, in the receiver's
    /// order. Non-mutating.
    pub fn difference(&self, other: &UniqueSet) -> UniqueSet {
        let mut store = AssocStore::new();
        for value in self.iter() {
            if !other.contains(value) {
                store.set(value.clone(), value.clone());
            }
        }
        UniqueSet {
            types: self.types.clone(),
            store,
            registry: self.registry.clone(),
        }
    }
}

impl Collection for UniqueSet {
    fn len(&self) -> usize {
        self.store.len()
    }

    fn clear(&mut self) {
        self.store.clear();
    }

    fn type_set(&self) -> &TypeSet {
        &self.types
    }
}
