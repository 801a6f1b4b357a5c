//! Shared registry handle.

use std::fmt;
use std::sync::Arc;

/// Shared, immutable handle to a registry.
///
/// Collections hold one of these so that a single nominal-type table can
/// back any number of collections. The wrapped registry is immutable after
/// creation; build the registry first, then wrap it.
pub struct SharedRegistry<T>(Arc<T>);

impl<T> SharedRegistry<T> {
    /// Wrap an owned registry.
    pub fn new(registry: T) -> Self {
        SharedRegistry(Arc::new(registry))
    }
}

impl<T> Clone for SharedRegistry<T> {
    fn clone(&self) -> Self {
        SharedRegistry(Arc::clone(&self.0))
    }
}

impl<T> std::ops::Deref for SharedRegistry<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T: Default> Default for SharedRegistry<T> {
    fn default() -> Self {
        SharedRegistry::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for SharedRegistry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SharedRegistry({:?})", &*self.0)
    }
}
