use thiserror::Error;

/// Errors reported by [`CharBuf`](crate::CharBuf) operations.
///
/// All errors are reported synchronously, before any mutation is applied;
/// a failed call leaves the buffer unchanged.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Construction from an empty initial text.
    #[error("initial text must be non-empty")]
    EmptyInitial,

    /// A position, offset, or range bound outside the logical content.
    ///
    /// Bounds are checked against the current logical length, never against
    /// the physical capacity.
    #[error("index {index} out of range for length {length}")]
    OutOfRange {
        /// The offending index.
        index: usize,
        /// The logical length at the time of the call.
        length: usize,
    },
}
