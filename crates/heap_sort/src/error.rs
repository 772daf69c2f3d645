use thiserror::Error;

/// Rejected arguments to one of the checked heap operations.
///
/// Returned before the slice is touched, so a failed call leaves it unmodified.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum HeapError {
    #[error("heap size {heap_size} exceeds slice length {len}")]
    HeapSizeOutOfRange { heap_size: usize, len: usize },
    #[error("root index {root} is outside the heap of size {heap_size}")]
    RootOutOfRange { root: usize, heap_size: usize },
    #[error("index {index} is out of range for slice of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}
