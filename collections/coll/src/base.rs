//! Shared lifecycle contract for all collection kinds.

use coll_spec::TypeSet;

/// Invariants every collection kind shares.
///
/// Implementors additionally provide an `iter()` producing a restartable,
/// finite sequence in the collection's defined order, and an `equals`
/// comparison over entries and order only — the type constraint and any
/// default value are deliberately ignored by equality.
pub trait Collection {
    /// Number of elements or entries.
    fn len(&self) -> usize;

    /// Is the collection empty?
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove every element or entry. The type constraint is unaffected;
    /// a collection never rebinds its `TypeSet`.
    fn clear(&mut self);

    /// The constraint governing this collection's values.
    fn type_set(&self) -> &TypeSet;
}
