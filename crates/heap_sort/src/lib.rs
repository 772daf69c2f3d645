//! In-place, unstable heap sort over slices of totally ordered values.
//!
//! Runs in `O(n log n)` comparisons and swaps with `O(1)` extra space. The
//! lower-level heap operations live in [`heap`] for callers that want to
//! check or maintain the max-heap invariant directly.

mod driver;
mod error;
pub mod heap;

use std::cmp::Ordering;

pub use error::HeapError;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct AlgorithmInfo {
    pub name: &'static str,
    /// Equal elements keep their relative order.
    pub stable: bool,
    pub in_place: bool,
}

/// Swapping the root into the tail can carry an element past others with an
/// equal key, so the sort is not stable.
pub const HEAP_SORT: AlgorithmInfo = AlgorithmInfo {
    name: "heap_sort",
    stable: false,
    in_place: true,
};

/// Sorts `data` in non-descending order.
pub fn sort<T: Ord>(data: &mut [T]) {
    driver::heap_sort(data, &mut T::lt);
}

/// Sorts `data` with a comparator that must describe a total order.
pub fn sort_by<T, F>(data: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    driver::heap_sort(data, &mut |a, b| compare(a, b) == Ordering::Less);
}

/// Sorts `data` by the key `f` extracts. The key is recomputed on every comparison.
pub fn sort_by_key<T, K, F>(data: &mut [T], mut f: F)
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    driver::heap_sort(data, &mut |a, b| f(a).lt(&f(b)));
}

pub fn is_sorted<T: Ord>(data: &[T]) -> bool {
    is_sorted_by(data, T::cmp)
}

pub fn is_sorted_by<T, F>(data: &[T], mut compare: F) -> bool
where
    F: FnMut(&T, &T) -> Ordering,
{
    data.windows(2)
        .all(|pair| compare(&pair[0], &pair[1]) != Ordering::Greater)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;

    fn assert_sorts_like_std(data: &[u64]) {
        let mut actual = data.to_vec();
        sort(&mut actual);

        let mut expected = data.to_vec();
        expected.sort_unstable();

        assert_eq!(actual, expected, "input_len={}", data.len());
    }

    fn sorted_copy<T: Ord + Clone>(data: &[T]) -> Vec<T> {
        let mut out = data.to_vec();
        sort(&mut out);
        out
    }

    #[test]
    fn known_scenarios() {
        assert_eq!(sorted_copy(&[4, 10, 3, 5, 1]), [1, 3, 4, 5, 10]);
        assert_eq!(sorted_copy(&[5, 5, 5, 5]), [5, 5, 5, 5]);
        assert_eq!(sorted_copy(&[1]), [1]);
        assert_eq!(sorted_copy::<i32>(&[]), Vec::<i32>::new());
    }

    #[test]
    fn edge_cases() {
        let cases = [
            vec![],
            vec![42],
            vec![1, 2, 3, 4, 5, 6],
            vec![6, 5, 4, 3, 2, 1],
            vec![7; 128],
            vec![u64::MIN, 1, u64::MAX, 0, u64::MAX - 1, 2],
            vec![5, 5, 3, 3, 1, 1, 4, 4, 2, 2, 0, 0],
        ];

        for case in &cases {
            assert_sorts_like_std(case);
        }
    }

    #[test]
    fn descending_input_is_reversed() {
        let mut data: Vec<i64> = (-50..50).rev().collect();
        let mut expected = data.clone();
        expected.reverse();
        sort(&mut data);
        assert_eq!(data, expected);
    }

    #[test]
    fn sorted_input_keeps_every_element_in_place() {
        let original: Vec<(u32, usize)> = (0..64).map(|i| (i * 3, i as usize)).collect();
        let mut data = original.clone();
        sort_by_key(&mut data, |&(key, _)| key);
        assert_eq!(data, original);
    }

    #[test]
    fn equal_keys_are_not_kept_in_input_order() {
        assert!(!HEAP_SORT.stable);

        let mut pair = [(1, 'a'), (1, 'b')];
        sort_by_key(&mut pair, |&(value, _)| value);
        assert_eq!(pair, [(1, 'b'), (1, 'a')]);

        let mut triple = [(5, 'a'), (3, 'x'), (5, 'b')];
        sort_by_key(&mut triple, |&(value, _)| value);
        assert_eq!(triple, [(3, 'x'), (5, 'b'), (5, 'a')]);
    }

    #[test]
    fn sort_by_reverse_and_partial_keys() {
        let mut data = [3, 1, 4, 1, 5, 9, 2, 6, 5, 3];
        sort_by(&mut data, |a, b| b.cmp(a));
        assert_eq!(data, [9, 6, 5, 5, 4, 3, 3, 2, 1, 1]);
        assert!(is_sorted_by(&data, |a, b| b.cmp(a)));
        assert!(!is_sorted(&data));

        let mut words = ["pear", "fig", "banana", "kiwi", "apple"];
        sort_by_key(&mut words, |w| w.len());
        assert!(is_sorted_by(&words, |a, b| a.len().cmp(&b.len())));
        assert_eq!(words[0], "fig");
        assert_eq!(words[4], "banana");
    }

    #[test]
    fn sorts_owned_non_copy_values() {
        let mut data: Vec<String> = ["delta", "alpha", "charlie", "bravo"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        sort(&mut data);
        assert_eq!(data, ["alpha", "bravo", "charlie", "delta"]);
    }

    #[test]
    fn is_sorted_contract() {
        assert!(is_sorted::<u8>(&[]));
        assert!(is_sorted(&[1]));
        assert!(is_sorted(&[1, 1, 2]));
        assert!(!is_sorted(&[2, 1]));
    }

    #[test]
    fn fixed_seed_random_cases() {
        let mut rng = StdRng::seed_from_u64(0x5EED_2026);
        for &size in &[2_usize, 3, 8, 31, 32, 63, 64, 127, 128, 511, 2048] {
            let mut data = Vec::with_capacity(size);
            for _ in 0..size {
                data.push(rng.random::<u64>());
            }
            assert_sorts_like_std(&data);
        }
    }

    #[test]
    fn fixed_seed_many_duplicates() {
        let mut rng = StdRng::seed_from_u64(0xD0D1_2026);
        for &size in &[64_usize, 1024, 4096] {
            let mut data = Vec::with_capacity(size);
            for _ in 0..size {
                data.push((rng.random::<u64>() % 16) * 17);
            }
            assert_sorts_like_std(&data);
        }
    }

    proptest! {
        #[test]
        fn sorts_any_input(mut data in proptest::collection::vec(any::<i32>(), 0..1000)) {
            sort(&mut data);
            prop_assert!(is_sorted(&data));
        }

        #[test]
        fn output_is_a_permutation(data in proptest::collection::vec(0..100_u16, 0..500)) {
            let mut actual = data.clone();
            sort(&mut actual);

            let mut counts = [0_usize; 100];
            for &x in &data {
                counts[x as usize] += 1;
            }
            for &x in &actual {
                counts[x as usize] -= 1;
            }
            prop_assert!(counts.iter().all(|&c| c == 0));
            prop_assert_eq!(actual.len(), data.len());
        }

        #[test]
        fn sorting_twice_changes_nothing(mut data in proptest::collection::vec(any::<i64>(), 0..500)) {
            sort(&mut data);
            let once = data.clone();
            sort(&mut data);
            prop_assert_eq!(data, once);
        }
    }
}
