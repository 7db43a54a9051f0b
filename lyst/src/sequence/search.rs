use lyst_kind::{equals, Descriptor};

use crate::error::{Error, Result};

use super::core::Lyst;

impl<K: Descriptor> Lyst<K> {
    /// Check whether any position holds `element`.
    pub fn contains(&self, element: &K) -> bool {
        self.iter().any(|candidate| equals(candidate, element))
    }

    /// The number of positions holding `element`.
    pub fn count(&self, element: &K) -> usize {
        self.iter()
            .filter(|candidate| equals(*candidate, element))
            .count()
    }

    /// The position of the first occurrence of `element`, scanning from
    /// the front.
    ///
    /// Fails with [`Error::NotFound`] if `element` does not occur.
    pub fn index_of(&self, element: &K) -> Result<usize> {
        self.iter()
            .position(|candidate| equals(candidate, element))
            .ok_or_else(|| {
                tracing::trace!(?element, len = self.len(), "element not found");
                Error::NotFound(format!("{:?}", element))
            })
    }
}
