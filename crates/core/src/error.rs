use thiserror::Error;

/// Errors that can occur when saving or restoring state.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("snapshot index {index} is out of range for history of length {len}")]
    OutOfRange { index: usize, len: usize },

    #[error("subject has no state to snapshot")]
    UnsetState,
}
