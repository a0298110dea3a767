use thiserror::Error;

/// Error type shared by every fallible operation in the crate.
///
/// All of these are unrecoverable at the point of use: callers propagate them
/// with `?` and the binary reports the message and exits non-zero.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A glyph string (or rendered pattern) does not match the grid geometry.
    #[error("Invalid glyph size: expected {expected} cells, got {actual}")]
    InvalidGlyphSize {
        /// Cell count the grid requires (width x height)
        expected: usize,
        /// Cell count actually supplied
        actual: usize,
    },

    /// A vector's length does not match what the consumer expects
    /// (network input size, class count, ...).
    #[error("Dimension mismatch: expected {expected} values, got {actual}")]
    DimensionMismatch {
        /// Expected length
        expected: usize,
        /// Actual length received
        actual: usize,
    },

    /// The same class name was supplied twice when building an example set.
    #[error("Duplicate class name: {0}")]
    DuplicateClass(String),

    /// An example set was built from, or training was invoked on, no examples.
    #[error("Training set is empty")]
    EmptyTrainingSet,

    /// Training could not run or diverged (bad hyperparameters, non-finite cost).
    #[error("Training failed: {0}")]
    TrainingFailure(String),
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, Error>;
