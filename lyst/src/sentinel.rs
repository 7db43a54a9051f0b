// Removal marks positions with a reserved element and then compacts them
// away with a filter. The reserved element must not otherwise occur in a
// sequence being removed from.
use lyst_kind::{Descriptor, Kind};

/// The reserved marker type. `Kind::of::<Null>()` is the tombstone kind.
#[derive(Debug)]
pub struct Null;

/// A descriptor type with a reserved tombstone value.
pub trait Tombstone: Descriptor {
    /// The tombstone value.
    fn null() -> Self;

    fn is_null(&self) -> bool {
        *self == Self::null()
    }
}

impl Tombstone for Kind {
    fn null() -> Self {
        Kind::of::<Null>()
    }

    fn is_null(&self) -> bool {
        self.is::<Null>()
    }
}

/// Check whether an element is the tombstone.
pub fn is_null<K: Tombstone>(element: &K) -> bool {
    element.is_null()
}

/// Check whether an element is anything but the tombstone.
pub fn is_not_null<K: Tombstone>(element: &K) -> bool {
    !element.is_null()
}
