use std::sync::Arc;

use super::traits::LystCore;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Empty {}

impl<K> LystCore<K> for Empty {
    #[inline]
    fn as_slice(&self) -> &[K] {
        &[]
    }

    #[inline]
    fn is_empty(&self) -> bool {
        true
    }

    #[inline]
    fn len(&self) -> usize {
        0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct One<K> {
    element: K,
}

impl<K> From<K> for One<K> {
    fn from(element: K) -> Self {
        One { element }
    }
}

impl<K> LystCore<K> for One<K> {
    #[inline]
    fn as_slice(&self) -> &[K] {
        std::slice::from_ref(&self.element)
    }

    #[inline]
    fn is_empty(&self) -> bool {
        false
    }

    #[inline]
    fn len(&self) -> usize {
        1
    }
}

// Holds two or more elements; shorter sequences use the other variants.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Many<K> {
    elements: Arc<[K]>,
}

impl<K> Many<K> {
    pub(crate) fn new(elements: Vec<K>) -> Self {
        debug_assert!(elements.len() >= 2);
        Many {
            elements: elements.into(),
        }
    }
}

impl<K> LystCore<K> for Many<K> {
    #[inline]
    fn as_slice(&self) -> &[K] {
        &self.elements
    }
}
