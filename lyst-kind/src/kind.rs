use std::any::TypeId;
use std::fmt;

/// Anything that can occupy a position in a sequence.
///
/// A descriptor is an opaque token compared by identity only. Every
/// `Clone + Eq + Debug` type qualifies.
pub trait Descriptor: Clone + Eq + fmt::Debug {}

impl<T> Descriptor for T where T: Clone + Eq + fmt::Debug {}

/// Check whether two descriptors denote the same kind.
#[inline]
pub fn equals<D: Descriptor>(a: &D, b: &D) -> bool {
    a == b
}

/// A descriptor denoting a Rust type.
///
/// Two kinds are equal exactly when they were made from the same type.
#[derive(Clone, Copy, Eq)]
pub struct Kind {
    id: TypeId,
    name: &'static str,
}

// the name is informational only; identity is the type id
impl PartialEq for Kind {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl std::hash::Hash for Kind {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(target_arch = "x86_64")]
static_assertions::assert_eq_size!(Kind, [u8; 32]);
static_assertions::assert_impl_all!(Kind: Copy, Send, Sync);

impl Kind {
    /// The kind of `T`.
    pub fn of<T: ?Sized + 'static>() -> Self {
        Kind {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// The type name this kind was made from.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Check whether this kind denotes `T`.
    pub fn is<T: ?Sized + 'static>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

impl fmt::Debug for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Kind({})", self.name)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Kind {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Marker;

    #[test]
    fn test_same_type_is_equal() {
        assert_eq!(Kind::of::<i32>(), Kind::of::<i32>());
        assert!(equals(&Kind::of::<bool>(), &Kind::of::<bool>()));
    }

    #[test]
    fn test_different_types_are_not_equal() {
        assert_ne!(Kind::of::<i32>(), Kind::of::<i64>());
        assert!(!equals(&Kind::of::<f32>(), &Kind::of::<f64>()));
    }

    #[test]
    fn test_equals_is_symmetric() {
        let a = Kind::of::<u8>();
        let b = Kind::of::<Marker>();
        assert_eq!(equals(&a, &b), equals(&b, &a));
    }

    #[test]
    fn test_no_structural_equivalence() {
        // aliases resolve to the same type, wrappers do not
        type Alias = i32;
        struct Wrapper(#[allow(dead_code)] i32);
        assert_eq!(Kind::of::<Alias>(), Kind::of::<i32>());
        assert_ne!(Kind::of::<Wrapper>(), Kind::of::<i32>());
    }

    #[test]
    fn test_is() {
        let kind = Kind::of::<str>();
        assert!(kind.is::<str>());
        assert!(!kind.is::<String>());
    }

    #[test]
    fn test_display_uses_type_name() {
        assert_eq!(Kind::of::<f64>().to_string(), "f64");
        assert_eq!(Kind::of::<bool>().name(), "bool");
    }

    #[test]
    fn test_debug_shows_name() {
        assert_eq!(format!("{:?}", Kind::of::<i64>()), "Kind(i64)");
    }

    #[test]
    fn test_hash_agrees_with_eq() {
        use std::collections::HashSet;

        let set: HashSet<Kind> = [Kind::of::<i32>(), Kind::of::<i32>(), Kind::of::<u32>()]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 2);
    }
}
