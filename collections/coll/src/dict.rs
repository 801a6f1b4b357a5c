//! The keyed collection.

use coll_spec::{parse, TypeSet};
use coll_store::AssocStore;
use coll_value::{SharedRegistry, TypeRegistry, Value};

use crate::base::Collection;
use crate::errors::{ArityError, Error, Result};
use crate::export::FlatKey;

/// Insertion-ordered collection keyed by arbitrary runtime values.
///
/// Keys are compared under strict equality: `1`, `"1"`, `1.0`, and `true`
/// are four different keys; structurally identical arrays are the same
/// key; two object instances are the same key only if they are the same
/// instance. The type constraint governs values — any value may be a key.
#[derive(Clone, Debug)]
pub struct Dict {
    types: TypeSet,
    store: AssocStore,
    registry: SharedRegistry<TypeRegistry>,
}

impl Dict {
    /// Create an empty dict. `constraint` of `None` imposes no
    /// restriction on values.
    pub fn new(constraint: Option<&str>, registry: SharedRegistry<TypeRegistry>) -> Result<Self> {
        let types = parse(constraint, &registry)?;
        Ok(Dict {
            types,
            store: AssocStore::new(),
            registry,
        })
    }

    /// Create a dict from initial `(key, value)` pairs.
    ///
    /// With no explicit constraint, one is inferred from the values (keys
    /// never participate in inference). Duplicate keys overwrite in
    /// place, exactly as repeated [`put`](Dict::put) calls would.
    pub fn from_pairs<I>(
        constraint: Option<&str>,
        pairs: I,
        registry: SharedRegistry<TypeRegistry>,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = (Value, Value)>,
    {
        let pairs: Vec<(Value, Value)> = pairs.into_iter().collect();
        let types = match constraint {
            Some(expr) => parse(Some(expr), &registry)?,
            None => TypeSet::infer(pairs.iter().map(|(_, v)| v)),
        };
        let mut dict = Dict {
            types,
            store: AssocStore::new(),
            registry,
        };
        for (key, value) in pairs {
            dict.put(key, value)?;
        }
        Ok(dict)
    }

    /// Insert or overwrite the entry for `key`, returning any previous
    /// value. Overwriting preserves the key's original insertion
    /// position.
    pub fn put(&mut self, key: Value, value: Value) -> Result<Option<Value>> {
        self.types.validate(&value, &self.registry)?;
        Ok(self.store.set(key, value))
    }

    /// Variadic insert: either a key and a value, or a single pre-built
    /// two-element entry. Any other shape is an [`ArityError`].
    pub fn add(&mut self, args: &[Value]) -> Result<Option<Value>> {
        match args {
            [key, value] => self.put(key.clone(), value.clone()),
            [Value::Array(pair)] if pair.len() == 2 => {
                self.put(pair[0].clone(), pair[1].clone())
            }
            _ => Err(Error::Arity(ArityError { got: args.len() })),
        }
    }

    /// Look up the value for `key`.
    pub fn get(&self, key: &Value) -> Result<&Value> {
        Ok(self.store.get(key)?)
    }

    /// Remove the entry for `key`, returning its value.
    pub fn remove(&mut self, key: &Value) -> Result<Value> {
        Ok(self.store.remove(key)?)
    }

    /// Does `key` have an entry?
    pub fn has(&self, key: &Value) -> bool {
        self.store.exists(key)
    }

    /// Iterate `(key, value)` pairs in insertion order. Restartable.
    pub fn iter(&self) -> impl Iterator<Item = (&Value, &Value)> {
        self.store.iter()
    }

    /// Iterate keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &Value> {
        self.store.keys()
    }

    /// Iterate values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.store.values()
    }

    /// Structural equality: same entries in the same insertion order,
    /// keys and values both under strict equality. Constraints are
    /// ignored.
    pub fn equals(&self, other: &Dict) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other.iter())
                .all(|((ka, va), (kb, vb))| ka.strict_eq(kb) && va.strict_eq(vb))
    }

    /// Map every value into a new dict, keys and order preserved.
    ///
    /// Non-mutating. The result's constraint is inferred from the mapped
    /// values.
    pub fn map_values<F>(&self, mut f: F) -> Dict
    where
        F: FnMut(&Value) -> Value,
    {
        let pairs: Vec<(Value, Value)> = self
            .iter()
            .map(|(k, v)| (k.clone(), f(v)))
            .collect();
        let types = TypeSet::infer(pairs.iter().map(|(_, v)| v));
        let mut store = AssocStore::new();
        for (key, value) in pairs {
            store.set(key, value);
        }
        Dict {
            types,
            store,
            registry: self.registry.clone(),
        }
    }

    /// Keep the entries satisfying `predicate`, in order, in a new dict
    /// with the same constraint. Non-mutating.
    pub fn filter<F>(&self, mut predicate: F) -> Dict
    where
        F: FnMut(&Value, &Value) -> bool,
    {
        let mut store = AssocStore::new();
        for (key, value) in self.iter() {
            if predicate(key, value) {
                store.set(key.clone(), value.clone());
            }
        }
        Dict {
            types: self.types.clone(),
            store,
            registry: self.registry.clone(),
        }
    }

    /// Export to a flat structure's native key domain.
    ///
    /// Only integer and string keys survive unchanged; the first key of
    /// any other type rejects the whole export.
    pub fn to_flat(&self) -> Result<Vec<(FlatKey, Value)>> {
        self.iter()
            .map(|(key, value)| Ok((FlatKey::try_from(key)?, value.clone())))
            .collect()
    }
}

impl Collection for Dict {
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
