use thiserror::Error;

/// Errors raised by rope operations.
///
/// Every fallible operation is pure, so the rope it was called on is left
/// exactly as it was when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RopeError {
    /// A location, position or range bound outside the rope, or a range whose
    /// start comes after its end (reported on the start).
    #[error("index {index} is out of range for a rope of length {len}")]
    InvalidIndex { index: usize, len: usize },

    #[error("cannot concatenate an empty list of ropes")]
    EmptyConcatenationInput,
}

pub type RopeResult<T> = Result<T, RopeError>;
