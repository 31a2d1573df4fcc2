use thiserror::Error;

/// Error type for sequence-operation contract violations.
#[derive(Debug, Error)]
pub enum SequenceError {
    /// A requested range reaches outside the source sequence.
    #[error("range {start}..{end} is out of bounds for length {len}")]
    OutOfRange {
        /// First index of the requested range.
        start: usize,
        /// One past the last index of the requested range.
        end: usize,
        /// Length of the source sequence.
        len: usize,
    },
    /// An input value was absent where a value is required.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}
