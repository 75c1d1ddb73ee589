//! Fisher–Yates shuffling and random subsets.

use rand::Rng;

use crate::error::{TutorialError, TutorialResult};

/// Shuffle `items` in place into a uniformly random permutation.
///
/// Walks from the last index down to 1, swapping each position with a
/// uniformly chosen index in `0..=i`.
pub fn fisher_yates<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// Shuffle a copy of `pool` and keep the first `size` items.
pub fn shuffled_subset<T: Clone, R: Rng + ?Sized>(
    pool: &[T],
    size: usize,
    rng: &mut R,
) -> TutorialResult<Vec<T>> {
    if size > pool.len() {
        return Err(TutorialError::SubsetTooLarge {
            requested: size,
            available: pool.len(),
        });
    }
    let mut items = pool.to_vec();
    fisher_yates(&mut items, rng);
    items.truncate(size);
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn test_shuffle_is_permutation() {
        let mut rng = StdRng::seed_from_u64(7);
        for seed_round in 0..50 {
            let mut items: Vec<u32> = (0..10).collect();
            fisher_yates(&mut items, &mut rng);
            let mut sorted = items.clone();
            sorted.sort_unstable();
            assert_eq!(sorted, (0..10).collect::<Vec<_>>(), "round {seed_round}");
        }
    }

    #[test]
    fn test_shuffle_short_inputs() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut empty: Vec<u8> = Vec::new();
        fisher_yates(&mut empty, &mut rng);
        assert!(empty.is_empty());

        let mut one = vec![42];
        fisher_yates(&mut one, &mut rng);
        assert_eq!(one, vec![42]);
    }

    #[test]
    fn test_subset_has_distinct_items() {
        let pool: Vec<u32> = (0..10).collect();
        for seed in 0..100 {
            let mut rng = StdRng::seed_from_u64(seed);
            let subset = shuffled_subset(&pool, 6, &mut rng).unwrap();
            assert_eq!(subset.len(), 6);
            let distinct: HashSet<_> = subset.iter().collect();
            assert_eq!(distinct.len(), 6);
            assert!(subset.iter().all(|item| pool.contains(item)));
        }
    }

    #[test]
    fn test_subset_too_large() {
        let mut rng = StdRng::seed_from_u64(0);
        let err = shuffled_subset(&[1, 2, 3], 4, &mut rng).unwrap_err();
        assert_eq!(
            err,
            TutorialError::SubsetTooLarge {
                requested: 4,
                available: 3
            }
        );
    }

    #[test]
    fn test_every_position_reachable() {
        // Each element should land first at least once over many shuffles.
        let mut rng = StdRng::seed_from_u64(99);
        let mut seen_first = HashSet::new();
        for _ in 0..500 {
            let mut items = [0u8, 1, 2, 3];
            fisher_yates(&mut items, &mut rng);
            seen_first.insert(items[0]);
        }
        assert_eq!(seen_first.len(), 4);
    }
}
