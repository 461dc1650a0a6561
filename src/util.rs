//! Small numeric helpers.

/// Largest of `first` and every value in `rest`.
pub fn max<T: Ord + Copy>(first: T, rest: &[T]) -> T {
    rest.iter().copied().fold(first, Ord::max)
}
