//! Nominal-type table with cached ancestor closures.
//!
//! "Does runtime class X satisfy declared type Y" is answered by a set
//! lookup against a closure computed once when X is registered. There is no
//! reflective walk at check time. Classes and interfaces are not
//! distinguished here: both are registered names with zero or more parents.

use std::sync::Arc;

use rustc_hash::{FxHashMap, FxHashSet};
use thiserror::Error;

/// Identifier of a registered nominal type.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ClassId(u32);

impl ClassId {
    fn index(self) -> usize {
        self.0 as usize
    }
}

/// Registration failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The name is already bound to a different class.
    #[error("type `{0}` is already registered")]
    DuplicateName(String),
    /// A parent id does not belong to this registry.
    #[error("unknown parent class for `{0}`")]
    UnknownParent(String),
}

#[derive(Debug)]
struct ClassInfo {
    name: Arc<str>,
    /// Transitive parents and interfaces, including the class itself.
    ancestors: FxHashSet<ClassId>,
}

/// The nominal-type table.
///
/// Parents must be registered before children, so every registration can
/// union already-complete parent closures. The registry is append-only and
/// immutable once wrapped in a [`SharedRegistry`](crate::SharedRegistry).
#[derive(Debug, Default)]
pub struct TypeRegistry {
    names: FxHashMap<Arc<str>, ClassId>,
    classes: Vec<ClassInfo>,
}

impl TypeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        TypeRegistry::default()
    }

    /// Register a class or interface with its direct parents.
    ///
    /// The full ancestor closure is computed here, once, by unioning the
    /// parents' closures.
    pub fn register(&mut self, name: &str, parents: &[ClassId]) -> Result<ClassId, RegistryError> {
        if self.names.contains_key(name) {
            return Err(RegistryError::DuplicateName(name.to_owned()));
        }
        #[allow(clippy::cast_possible_truncation)]
        let id = ClassId(self.classes.len() as u32);

        let mut ancestors = FxHashSet::default();
        ancestors.insert(id);
        for parent in parents {
            let info = self
                .classes
                .get(parent.index())
                .ok_or_else(|| RegistryError::UnknownParent(name.to_owned()))?;
            ancestors.extend(info.ancestors.iter().copied());
        }

        let name: Arc<str> = name.into();
        self.names.insert(Arc::clone(&name), id);
        self.classes.push(ClassInfo { name, ancestors });
        Ok(id)
    }

    /// Resolve a nominal name.
    pub fn lookup(&self, name: &str) -> Option<ClassId> {
        self.names.get(name).copied()
    }

    /// The registered name of a class.
    pub fn name(&self, id: ClassId) -> &str {
        &self.classes[id.index()].name
    }

    /// Capability query: does `sub` satisfy declared type `ancestor`?
    ///
    /// True when `ancestor` appears in `sub`'s cached closure (a class
    /// satisfies itself).
    pub fn satisfies(&self, sub: ClassId, ancestor: ClassId) -> bool {
        self.classes
            .get(sub.index())
            .is_some_and(|info| info.ancestors.contains(&ancestor))
    }
}
