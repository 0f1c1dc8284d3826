//! Selection sort, kept as a readable O(n²) teaching routine.

use tracing::instrument;

/// Sorts `items` ascending in place by repeated minimum selection.
///
/// For each position `i`, the smallest element of `items[i..]` is swapped
/// into `i`. Not stable.
#[instrument(skip(items), fields(len = items.len()))]
pub fn selection_sort<T: PartialOrd>(items: &mut [T]) {
    let n = items.len();
    for i in 0..n.saturating_sub(1) {
        let mut min_idx = i;
        for j in (i + 1)..n {
            if items[j] < items[min_idx] {
                min_idx = j;
            }
        }
        if min_idx != i {
            items.swap(i, min_idx);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64;

    fn is_sorted(items: &[i64]) -> bool {
        items.windows(2).all(|w| w[0] <= w[1])
    }

    #[test]
    fn test_empty_and_single() {
        let mut empty: Vec<i64> = Vec::new();
        selection_sort(&mut empty);
        assert!(empty.is_empty());

        let mut one = vec![42];
        selection_sort(&mut one);
        assert_eq!(one, vec![42]);
    }

    #[test]
    fn test_sorts_with_duplicates() {
        let mut items = vec![5, 3, 9, 3, 0, 5, 1];
        selection_sort(&mut items);
        assert_eq!(items, vec![0, 1, 3, 3, 5, 5, 9]);
    }

    #[test]
    fn test_matches_std_sort_and_is_idempotent() {
        let mut rng = Pcg64::seed_from_u64(99);
        for len in 0..40 {
            let original: Vec<i64> = (0..len).map(|_| rng.gen_range(-50..=50)).collect();
            let mut ours = original.clone();
            selection_sort(&mut ours);

            let mut expected = original.clone();
            expected.sort();
            assert_eq!(ours, expected);
            assert!(is_sorted(&ours));

            let once = ours.clone();
            selection_sort(&mut ours);
            assert_eq!(ours, once);
        }
    }
}
