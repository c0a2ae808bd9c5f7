/// Errors that can occur when working with a [UnionFind](crate::UnionFind).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum UnionFindError {
    /// The index is not an element of the union-find universe.
    #[error("Index {index} is out of range for a union-find of size {len}")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// The number of elements in the union-find.
        len: usize,
    },
}
