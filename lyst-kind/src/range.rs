use std::iter::FusedIterator;
use std::ops::Range;

/// Generate the dense ascending positions `0..n`.
///
/// This drives positional reconstructions: a derived sequence is built by
/// visiting every index of its source in order.
#[inline]
pub fn index_range(n: usize) -> IndexRange {
    IndexRange { inner: 0..n }
}

/// An ascending enumeration of positions, as produced by [`index_range`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexRange {
    inner: Range<usize>,
}

impl IndexRange {
    /// The number of positions not yet produced.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl Iterator for IndexRange {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<usize> {
        self.inner.nth(n)
    }
}

impl DoubleEndedIterator for IndexRange {
    #[inline]
    fn next_back(&mut self) -> Option<usize> {
        self.inner.next_back()
    }
}

impl ExactSizeIterator for IndexRange {}

impl FusedIterator for IndexRange {}
