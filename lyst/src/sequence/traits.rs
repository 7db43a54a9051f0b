/// The core sequence interface each representation implements.
///
/// Everything else is built on the element slice.
pub trait LystCore<K> {
    /// The elements, front to back
    fn as_slice(&self) -> &[K];

    #[inline]
    fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    #[inline]
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// Get the element at the index, if it exists
    #[inline]
    fn get(&self, index: usize) -> Option<&K> {
        self.as_slice().get(index)
    }
}
