use tracing::trace;

use crate::heap::{heapify, sift_down};

/// Build-heap followed by repeated extraction of the root into the shrinking tail.
pub(crate) fn heap_sort<T, F>(data: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = data.len();
    trace!(len, "heap sort");
    if len < 2 {
        return;
    }

    heapify(data, is_less);

    for end in (1..len).rev() {
        data.swap(0, end);
        sift_down(data, 0, end, is_less);
    }
}
