// Access at a position and at both ends, and insertion and removal at
// both ends.
use lyst_kind::Descriptor;

use crate::error::{Error, Result};

use super::core::Lyst;

impl<K: Descriptor> Lyst<K> {
    /// The element at `index`.
    ///
    /// Fails with [`Error::OutOfRange`] unless `index < len()`.
    pub fn at(&self, index: usize) -> Result<&K> {
        self.get(index).ok_or_else(|| {
            let len = self.len();
            tracing::trace!(index, len, "positional access out of range");
            Error::OutOfRange { index, len }
        })
    }

    /// The first element.
    ///
    /// Fails with [`Error::EmptySequence`] if there are no elements.
    pub fn front(&self) -> Result<&K> {
        if self.is_empty() {
            tracing::trace!("front of empty sequence");
            return Err(Error::EmptySequence);
        }
        self.at(0)
    }

    /// The last element.
    ///
    /// Fails with [`Error::EmptySequence`] if there are no elements.
    pub fn back(&self) -> Result<&K> {
        if self.is_empty() {
            tracing::trace!("back of empty sequence");
            return Err(Error::EmptySequence);
        }
        self.at(self.len() - 1)
    }

    /// Same as [`Lyst::front`].
    pub fn first(&self) -> Result<&K> {
        self.front()
    }

    /// Same as [`Lyst::back`].
    pub fn last(&self) -> Result<&K> {
        self.back()
    }

    /// A new sequence with `element` in front of all existing elements.
    pub fn push_front(&self, element: K) -> Self {
        let mut elements = Vec::with_capacity(self.len() + 1);
        elements.push(element);
        elements.extend(self.iter().cloned());
        elements.into()
    }

    /// A new sequence with `element` after all existing elements.
    pub fn push_back(&self, element: K) -> Self {
        let mut elements = Vec::with_capacity(self.len() + 1);
        elements.extend(self.iter().cloned());
        elements.push(element);
        elements.into()
    }

    /// Append `element` only if it satisfies `predicate`; otherwise the
    /// result equals this sequence.
    pub fn push_back_if(&self, predicate: impl FnOnce(&K) -> bool, element: K) -> Self {
        if predicate(&element) {
            self.push_back(element)
        } else {
            self.clone()
        }
    }

    /// A new sequence without the first element.
    ///
    /// Popping an empty sequence yields the empty sequence.
    pub fn pop_front(&self) -> Self {
        match self.as_slice() {
            [] | [_] => Self::empty(),
            [_, tail @ ..] => Self::from_slice(tail),
        }
    }

    /// A new sequence without the last element.
    ///
    /// Removes the front of the reversed sequence, then reverses back.
    /// Popping an empty sequence yields the empty sequence.
    pub fn pop_back(&self) -> Self {
        self.reverse().pop_front().reverse()
    }
}
