/// Errors reported by carousel configuration and index arithmetic.
///
/// Only configuration calls surface these to the caller. Gesture and selection handling log
/// the failure and degrade to a no-op instead.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CarouselError {
    /// The same content object was registered at two different expanded indexes.
    #[error("content for expanded index {index} is already registered at expanded index {existing}")]
    DuplicateContent { index: usize, existing: usize },

    /// The duplication hook could not copy the item at a logical index.
    #[error("failed to copy content for logical index {index}")]
    CopyFailed { index: usize },

    /// Index arithmetic on an empty carousel, or an index outside the expanded range.
    #[error("index {index} is not valid for a carousel of {count} items")]
    InvalidState { index: usize, count: usize },
}
