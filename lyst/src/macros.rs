/// Build a [`Lyst`](crate::Lyst) of [`Kind`](crate::Kind)s from a list of
/// types.
///
/// ```
/// use lyst::{lyst, Kind};
///
/// let numbers = lyst![i32, f64];
/// assert_eq!(numbers.front(), Ok(&Kind::of::<i32>()));
/// assert!(lyst![].is_empty());
/// ```
#[macro_export]
macro_rules! lyst {
    () => {
        $crate::Lyst::<$crate::Kind>::empty()
    };
    ($($ty:ty),+ $(,)?) => {
        $crate::Lyst::<$crate::Kind>::from(::std::vec![$($crate::Kind::of::<$ty>()),+])
    };
}
