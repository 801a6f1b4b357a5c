//! The ordered collection.

use std::num::NonZeroUsize;

use coll_spec::{parse, TypeSet};
use coll_value::{SharedRegistry, TypeRegistry, Value};

use crate::base::Collection;
use crate::errors::{Error, IndexError, Result};

/// Ordered, dense, positionally indexed collection.
///
/// Every element is validated against the constraint fixed at
/// construction. A `Sequence` always carries a default value, derived from
/// the constraint (or supplied explicitly); writing past the end gap-fills
/// the intervening positions with fresh copies of it. Indices stay dense:
/// removal compacts.
#[derive(Clone, Debug)]
pub struct Sequence {
    types: TypeSet,
    default: Value,
    items: Vec<Value>,
    registry: SharedRegistry<TypeRegistry>,
}

impl Sequence {
    /// Create an empty sequence with a derived default.
    ///
    /// `constraint` of `None` imposes no restriction. Fails with
    /// `ConstraintError` on a malformed expression or `Unrepresentable`
    /// when no default can be derived.
    pub fn new(constraint: Option<&str>, registry: SharedRegistry<TypeRegistry>) -> Result<Self> {
        let types = parse(constraint, &registry)?;
        let default = types.derive_default(&registry)?;
        Ok(Sequence {
            types,
            default,
            items: Vec::new(),
            registry,
        })
    }

    /// Create an empty sequence with an explicit default value.
    ///
    /// The default is validated against the constraint before anything
    /// else; a mismatch rejects the whole construction.
    pub fn with_default(
        constraint: Option<&str>,
        default: Value,
        registry: SharedRegistry<TypeRegistry>,
    ) -> Result<Self> {
        let types = parse(constraint, &registry)?;
        types.validate(&default, &registry)?;
        Ok(Sequence {
            types,
            default,
            items: Vec::new(),
            registry,
        })
    }

    /// Create a sequence from initial elements.
    ///
    /// With no explicit constraint, one is inferred from the elements
    /// themselves (an empty source infers "no restriction"). With an
    /// explicit constraint every element is validated; any mismatch
    /// rejects the whole construction.
    pub fn from_values<I>(
        constraint: Option<&str>,
        values: I,
        registry: SharedRegistry<TypeRegistry>,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = Value>,
    {
        let items: Vec<Value> = values.into_iter().collect();
        let types = match constraint {
            Some(expr) => parse(Some(expr), &registry)?,
            None => TypeSet::infer(items.iter()),
        };
        for item in &items {
            types.validate(item, &registry)?;
        }
        let default = types.derive_default(&registry)?;
        Ok(Sequence {
            types,
            default,
            items,
            registry,
        })
    }

    /// The default value used for gap-filling. Read-only after
    /// construction.
    pub fn default_value(&self) -> &Value {
        &self.default
    }

    /// Append one element.
    pub fn push(&mut self, value: Value) -> Result<()> {
        self.types.validate(&value, &self.registry)?;
        self.items.push(value);
        Ok(())
    }

    /// Append a batch of elements, validating each in turn.
    ///
    /// Stops at the first invalid element; everything validated before it
    /// stays committed. There is no rollback.
    pub fn push_all<I>(&mut self, values: I) -> Result<()>
    where
        I: IntoIterator<Item = Value>,
    {
        for value in values {
            self.push(value)?;
        }
        Ok(())
    }

    /// Read the element at `index`.
    pub fn get(&self, index: usize) -> Result<&Value> {
        self.items.get(index).ok_or_else(|| {
            Error::Index(IndexError::OutOfRange {
                index,
                len: self.items.len(),
            })
        })
    }

    /// Write the element at `index`, gap-filling if needed.
    ///
    /// Writing past the end extends the sequence: every intervening
    /// position receives a *fresh* materialization of the default value,
    /// so no two gap slots (and no gap slot and the stored default) alias
    /// the same instance.
    pub fn set(&mut self, index: usize, value: Value) -> Result<()> {
        self.types.validate(&value, &self.registry)?;
        if index < self.items.len() {
            self.items[index] = value;
        } else {
            while self.items.len() < index {
                self.items.push(self.default.deep_materialize());
            }
            self.items.push(value);
        }
        Ok(())
    }

    /// Remove and return the element at `index`, compacting the sequence.
    pub fn remove(&mut self, index: usize) -> Result<Value> {
        if index >= self.items.len() {
            return Err(Error::Index(IndexError::OutOfRange {
                index,
                len: self.items.len(),
            }));
        }
        Ok(self.items.remove(index))
    }

    /// The first element.
    pub fn first(&self) -> Result<&Value> {
        self.items
            .first()
            .ok_or(Error::Index(IndexError::Underflow))
    }

    /// The last element.
    pub fn last(&self) -> Result<&Value> {
        self.items.last().ok_or(Error::Index(IndexError::Underflow))
    }

    /// Remove and return the last element.
    pub fn pop(&mut self) -> Result<Value> {
        self.items.pop().ok_or(Error::Index(IndexError::Underflow))
    }

    /// Iterate elements in positional order. Restartable: each call
    /// begins a fresh iteration.
    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.items.iter()
    }

    /// The elements as a slice.
    pub fn as_slice(&self) -> &[Value] {
        &self.items
    }

    /// Structural equality: same elements in the same order under strict
    /// equality. The constraint and default value of both sides are
    /// ignored.
    pub fn equals(&self, other: &Sequence) -> bool {
        self.items.len() == other.items.len()
            && self
                .items
                .iter()
                .zip(other.items.iter())
                .all(|(a, b)| a.strict_eq(b))
    }

    /// Map every element into a new sequence.
    ///
    /// Non-mutating. The result's constraint is inferred from the mapped
    /// elements; construction fails if no default is derivable for it.
    pub fn map<F>(&self, mut f: F) -> Result<Sequence>
    where
        F: FnMut(&Value) -> Value,
    {
        let mapped: Vec<Value> = self.items.iter().map(&mut f).collect();
        let types = TypeSet::infer(mapped.iter());
        let default = types.derive_default(&self.registry)?;
        Ok(Sequence {
            types,
            default,
            items: mapped,
            registry: self.registry.clone(),
        })
    }

    /// Keep the elements satisfying `predicate`, in order, in a new
    /// sequence with the same constraint and default. Non-mutating.
    pub fn filter<F>(&self, mut predicate: F) -> Sequence
    where
        F: FnMut(&Value) -> bool,
    {
        Sequence {
            types: self.types.clone(),
            default: self.default.clone(),
            items: self
                .items
                .iter()
                .filter(|&v| predicate(v))
                .cloned()
                .collect(),
            registry: self.registry.clone(),
        }
    }

    /// Split into consecutive chunks of at most `size` elements, each a
    /// new sequence with the same constraint and default. Non-mutating.
    pub fn chunk(&self, size: NonZeroUsize) -> Vec<Sequence> {
        self.items
            .chunks(size.get())
            .map(|chunk| Sequence {
                types: self.types.clone(),
                default: self.default.clone(),
                items: chunk.to_vec(),
                registry: self.registry.clone(),
            })
            .collect()
    }

    /// Join scalar elements into a string.
    ///
    /// Strings render verbatim, numbers and booleans via their canonical
    /// text form. Any non-scalar element (null included) is a
    /// `TypeMismatch`.
    pub fn join(&self, separator: &str) -> Result<String> {
        let mut out = String::new();
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                out.push_str(separator);
            }
            match item {
                Value::Str(s) => out.push_str(s),
                Value::Int(_) | Value::Float(_) | Value::Bool(_) => {
                    out.push_str(&item.to_string());
                }
                other => {
                    return Err(Error::Type(coll_spec::TypeMismatch {
                        expected: "scalar".to_owned(),
                        got: other.type_name(&self.registry).into_owned(),
                    }));
                }
            }
        }
        Ok(out)
    }
}

impl Collection for Sequence {
    fn len(&self) -> usize {
        self.items.len()
    }

    fn clear(&mut self) {
        self.items.clear();
    }

    fn type_set(&self) -> &TypeSet {
        &self.types
    }
}
