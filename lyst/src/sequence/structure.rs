// Structural transforms: each builds one new sequence from its sources.
use lyst_kind::{index_range, Descriptor};

use crate::error::{Error, Result};

use super::core::Lyst;

impl<K: Descriptor> Lyst<K> {
    /// A new sequence with the elements in the opposite order.
    pub fn reverse(&self) -> Self {
        let elements = self.as_slice();
        if elements.len() < 2 {
            return self.clone();
        }
        index_range(elements.len())
            .rev()
            .map(|index| elements[index].clone())
            .collect()
    }

    /// A new sequence with the elements of `self` followed by those of
    /// `other`.
    pub fn concat(&self, other: &Lyst<K>) -> Self {
        if other.is_empty() {
            return self.clone();
        }
        if self.is_empty() {
            return other.clone();
        }
        let mut elements = Vec::with_capacity(self.len() + other.len());
        elements.extend(self.iter().cloned());
        elements.extend(other.iter().cloned());
        elements.into()
    }

    /// A new sequence where position `index` holds `element`.
    ///
    /// Every position is rebuilt. Fails with [`Error::OutOfRange`] unless
    /// `index < len()`.
    pub fn replace(&self, index: usize, element: K) -> Result<Self> {
        let elements = self.as_slice();
        if index >= elements.len() {
            tracing::trace!(index, len = elements.len(), "replace out of range");
            return Err(Error::OutOfRange {
                index,
                len: elements.len(),
            });
        }
        Ok(index_range(elements.len())
            .map(|position| {
                if position == index {
                    element.clone()
                } else {
                    elements[position].clone()
                }
            })
            .collect())
    }

    /// A new sequence with only the elements satisfying `predicate`, in
    /// their original order.
    pub fn filter(&self, predicate: impl FnMut(&K) -> bool) -> Self {
        self.filter_into(predicate, Self::empty())
    }

    /// Append the elements satisfying `predicate` to `accumulator`, front
    /// to back, and return the result.
    pub fn filter_into(&self, mut predicate: impl FnMut(&K) -> bool, accumulator: Self) -> Self {
        let mut elements = Vec::with_capacity(accumulator.len() + self.len());
        elements.extend(accumulator.iter().cloned());
        elements.extend(self.iter().filter(|element| predicate(*element)).cloned());
        elements.into()
    }

    /// A new sequence holding `f` applied to every element.
    pub fn transform<T: Descriptor>(&self, f: impl FnMut(&K) -> T) -> Lyst<T> {
        self.iter().map(f).collect()
    }
}
