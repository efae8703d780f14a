//! Random cut-point helpers shared by crossover and mutation.

use rand::seq::index;
use rand::Rng;

/// Two distinct positions in `0..n`, ordered so that `first < second`.
///
/// # Panics
/// Panics if `n < 2`.
pub(crate) fn distinct_positions<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    let (a, b) = distinct_positions_unordered(n, rng);
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Two distinct positions in `0..n`, in the order they were drawn.
///
/// # Panics
/// Panics if `n < 2`.
pub(crate) fn distinct_positions_unordered<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    let picked = index::sample(rng, n, 2);
    (picked.index(0), picked.index(1))
}

/// Two independent positions in `0..n`, ordered so that `first <= second`.
pub(crate) fn ordered_positions<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    let a = rng.random_range(0..n);
    let b = rng.random_range(0..n);
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_distinct_positions_bounds() {
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..1000 {
            let (a, b) = distinct_positions(10, &mut rng);
            assert!(a < b);
            assert!(b < 10);
        }
    }

    #[test]
    fn test_distinct_positions_two_elements() {
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..20 {
            assert_eq!(distinct_positions(2, &mut rng), (0, 1));
        }
    }

    #[test]
    fn test_unordered_positions_differ() {
        let mut rng = SmallRng::seed_from_u64(7);
        let mut saw_descending = false;
        for _ in 0..200 {
            let (a, b) = distinct_positions_unordered(5, &mut rng);
            assert_ne!(a, b);
            saw_descending |= a > b;
        }
        assert!(saw_descending);
    }

    #[test]
    fn test_ordered_positions_bounds() {
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..1000 {
            let (a, b) = ordered_positions(10, &mut rng);
            assert!(a <= b);
            assert!(b < 10);
        }
    }
}
