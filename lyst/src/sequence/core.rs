// The sequence is partitioned into special cases: no elements, a single
// element, and several elements sharing one immutable buffer. Every length
// has exactly one representation, so structural equality is positional
// equality.
use std::fmt;

use lyst_kind::{Descriptor, Kind, Length};

use super::traits::LystCore;
use super::variant::{Empty, Many, One};

/// An immutable, ordered sequence of element descriptors.
///
/// Every operation returns a new sequence; the receiver is never altered
/// and stays usable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Lyst<K = Kind> {
    Empty(Empty),
    One(One<K>),
    Many(Many<K>),
}

static_assertions::assert_impl_all!(Lyst<Kind>: Send, Sync, Clone);

impl<K> Default for Lyst<K> {
    fn default() -> Self {
        Self::Empty(Empty {})
    }
}

impl<K> LystCore<K> for Lyst<K> {
    #[inline]
    fn as_slice(&self) -> &[K] {
        match self {
            Lyst::Empty(inner) => LystCore::<K>::as_slice(inner),
            Lyst::One(inner) => inner.as_slice(),
            Lyst::Many(inner) => inner.as_slice(),
        }
    }

    #[inline]
    fn is_empty(&self) -> bool {
        match self {
            Lyst::Empty(inner) => LystCore::<K>::is_empty(inner),
            Lyst::One(inner) => inner.is_empty(),
            Lyst::Many(inner) => inner.is_empty(),
        }
    }

    #[inline]
    fn len(&self) -> usize {
        match self {
            Lyst::Empty(inner) => LystCore::<K>::len(inner),
            Lyst::One(inner) => inner.len(),
            Lyst::Many(inner) => inner.len(),
        }
    }
}

impl<K: Descriptor> Lyst<K> {
    /// Construct an empty sequence
    pub fn empty() -> Self {
        Self::default()
    }

    /// Check whether the sequence has no elements
    pub fn is_empty(&self) -> bool {
        LystCore::is_empty(self)
    }

    /// The number of elements in the sequence
    pub fn len(&self) -> usize {
        LystCore::len(self)
    }

    /// The elements, front to back
    pub fn as_slice(&self) -> &[K] {
        LystCore::as_slice(self)
    }

    /// Get the element at the index, if it exists
    pub fn get(&self, index: usize) -> Option<&K> {
        LystCore::get(self, index)
    }

    /// Iterate over the elements, front to back
    pub fn iter(&self) -> std::slice::Iter<'_, K> {
        self.as_slice().iter()
    }

    /// A new sequence holding a copy of the elements.
    pub(crate) fn from_slice(elements: &[K]) -> Self {
        match elements {
            [] => Self::default(),
            [element] => Self::One(element.clone().into()),
            _ => Self::Many(Many::new(elements.to_vec())),
        }
    }
}

impl<K> From<Vec<K>> for Lyst<K> {
    fn from(mut elements: Vec<K>) -> Self {
        match elements.len() {
            0 => Self::default(),
            1 => match elements.pop() {
                Some(element) => Self::One(element.into()),
                None => Self::default(),
            },
            _ => Self::Many(Many::new(elements)),
        }
    }
}

impl<K, const N: usize> From<[K; N]> for Lyst<K> {
    fn from(elements: [K; N]) -> Self {
        Vec::from(elements).into()
    }
}

impl<K> FromIterator<K> for Lyst<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        iter.into_iter().collect::<Vec<_>>().into()
    }
}

impl<'a, K> IntoIterator for &'a Lyst<K> {
    type Item = &'a K;
    type IntoIter = std::slice::Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        LystCore::as_slice(self).iter()
    }
}

impl<K> Length for Lyst<K> {
    #[inline]
    fn length(&self) -> usize {
        LystCore::len(self)
    }
}

impl<K: fmt::Display> fmt::Display for Lyst<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, element) in LystCore::as_slice(self).iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", element)?;
        }
        f.write_str("]")
    }
}

#[cfg(feature = "serde")]
impl<K: serde::Serialize> serde::Serialize for Lyst<K> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeSeq;

        let elements = LystCore::as_slice(self);
        let mut seq = serializer.serialize_seq(Some(elements.len()))?;
        for element in elements {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}
