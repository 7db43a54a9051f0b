/// Sequence algebra error.
///
/// Every fallible operation fails with exactly one of these; nothing is
/// clamped or defaulted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Error {
    /// Positional access or replacement outside `[0, len)`.
    #[error("index {index} is out of range for a sequence of length {len}")]
    OutOfRange { index: usize, len: usize },
    /// Front or back requested of a sequence without elements.
    #[error("sequence is empty")]
    EmptySequence,
    /// The element searched for does not occur in the sequence.
    ///
    /// Holds the debug rendering of the missing element.
    #[error("{0} does not occur in the sequence")]
    NotFound(String),
}

pub type Result<T> = std::result::Result<T, Error>;
