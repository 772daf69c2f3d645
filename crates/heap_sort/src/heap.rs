//! Binary max-heap laid out over a prefix of a slice.
//!
//! Children of index `i` sit at `2i + 1` and `2i + 2`. Only the first
//! `heap_size` elements belong to the heap; everything past that boundary is
//! never read or written by these operations.

use std::cmp::Ordering;

use tracing::debug;

use crate::HeapError;

/// Restores the max-heap invariant for the subtree rooted at `root`, given
/// that both child subtrees already satisfy it.
///
/// # Errors
///
/// Fails without touching `data` when `heap_size > data.len()` or
/// `root >= heap_size`.
pub fn repair<T: Ord>(data: &mut [T], heap_size: usize, root: usize) -> Result<(), HeapError> {
    repair_by(data, heap_size, root, T::cmp)
}

/// [`repair`] with a caller-supplied total order.
pub fn repair_by<T, F>(
    data: &mut [T],
    heap_size: usize,
    root: usize,
    mut compare: F,
) -> Result<(), HeapError>
where
    F: FnMut(&T, &T) -> Ordering,
{
    check_heap_range(data.len(), heap_size, root)?;
    sift_down(data, root, heap_size, &mut |a, b| {
        compare(a, b) == Ordering::Less
    });
    Ok(())
}

/// Swaps two elements of `data`.
///
/// # Errors
///
/// Fails without touching `data` when either index is out of range.
pub fn exchange<T>(data: &mut [T], i: usize, j: usize) -> Result<(), HeapError> {
    let len = data.len();
    if let Some(index) = [i, j].into_iter().find(|&index| index >= len) {
        debug!(index, len, "exchange rejected");
        return Err(HeapError::IndexOutOfRange { index, len });
    }
    data.swap(i, j);
    Ok(())
}

/// Rearranges `data` into a max-heap over its full length.
pub fn build_heap<T: Ord>(data: &mut [T]) {
    build_heap_by(data, T::cmp);
}

pub fn build_heap_by<T, F>(data: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    heapify(data, &mut |a, b| compare(a, b) == Ordering::Less);
}

/// Returns `true` when the first `heap_size` elements form a max-heap.
///
/// A `heap_size` larger than the slice is never a valid heap.
pub fn is_max_heap<T: Ord>(data: &[T], heap_size: usize) -> bool {
    is_max_heap_by(data, heap_size, T::cmp)
}

pub fn is_max_heap_by<T, F>(data: &[T], heap_size: usize, mut compare: F) -> bool
where
    F: FnMut(&T, &T) -> Ordering,
{
    if heap_size > data.len() {
        return false;
    }
    (1..heap_size).all(|child| compare(&data[(child - 1) / 2], &data[child]) != Ordering::Less)
}

fn check_heap_range(len: usize, heap_size: usize, root: usize) -> Result<(), HeapError> {
    if heap_size > len {
        debug!(heap_size, len, "repair rejected");
        return Err(HeapError::HeapSizeOutOfRange { heap_size, len });
    }
    if root >= heap_size {
        debug!(root, heap_size, "repair rejected");
        return Err(HeapError::RootOutOfRange { root, heap_size });
    }
    Ok(())
}

/// Bottom-up build: leaves (`i >= len / 2`) are already one-element heaps,
/// so every call sees valid child subtrees.
pub(crate) fn heapify<T, F>(data: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = data.len();
    for root in (0..len / 2).rev() {
        sift_down(data, root, len, is_less);
    }
}

/// Iterative sift-down over `data[..end]`. A child only displaces the current
/// largest when strictly greater, so equal keys never trigger a swap.
#[inline]
pub(crate) fn sift_down<T, F>(data: &mut [T], mut root: usize, end: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    debug_assert!(end <= data.len());
    loop {
        let left = root * 2 + 1;
        if left >= end {
            break;
        }

        let mut largest = root;
        if is_less(&data[largest], &data[left]) {
            largest = left;
        }
        let right = left + 1;
        if right < end && is_less(&data[largest], &data[right]) {
            largest = right;
        }

        if largest == root {
            break;
        }

        data.swap(root, largest);
        root = largest;
    }
}
