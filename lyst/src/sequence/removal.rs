// Removal marks positions with the tombstone and then filters tombstones
// out. Correct only while the tombstone does not otherwise occur in the
// sequence.
use lyst_kind::equals;

use crate::error::Result;
use crate::sentinel::{is_not_null, Tombstone};

use super::core::Lyst;

impl<K: Tombstone> Lyst<K> {
    /// A new sequence without the first occurrence of `element`.
    ///
    /// Fails with [`crate::Error::NotFound`] if `element` does not occur.
    pub fn remove_first(&self, element: &K) -> Result<Self> {
        let index = self.index_of(element)?;
        let marked = self.replace(index, K::null())?;
        tracing::trace!(index, "removing first occurrence");
        Ok(marked.filter(is_not_null))
    }

    /// A new sequence without any occurrence of `element`.
    pub fn remove_all(&self, element: &K) -> Self {
        let marked = self.transform(|candidate| {
            if equals(candidate, element) {
                K::null()
            } else {
                candidate.clone()
            }
        });
        let compacted = marked.filter(is_not_null);
        tracing::trace!(
            removed = self.len() - compacted.len(),
            "removing all occurrences"
        );
        compacted
    }

    /// The empty sequence, whatever this sequence holds.
    pub fn clear(&self) -> Self {
        Self::empty()
    }
}
