/// Something with a known number of positions.
pub trait Length {
    fn length(&self) -> usize;
}

impl<T> Length for [T] {
    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T, const N: usize> Length for [T; N] {
    #[inline]
    fn length(&self) -> usize {
        N
    }
}

impl<T> Length for Vec<T> {
    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

impl<L: Length + ?Sized> Length for &L {
    #[inline]
    fn length(&self) -> usize {
        (**self).length()
    }
}

/// The cardinality of a sequence.
#[inline]
pub fn length<L: Length + ?Sized>(sequence: &L) -> usize {
    sequence.length()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_of_empty() {
        let empty: [u8; 0] = [];
        assert_eq!(length(&empty), 0);
        assert_eq!(length(&Vec::<u8>::new()), 0);
    }

    #[test]
    fn test_length_of_slice() {
        let items = vec!['a', 'b', 'c'];
        assert_eq!(length(&items[..]), 3);
        assert_eq!(length(&items[1..]), 2);
    }
}
