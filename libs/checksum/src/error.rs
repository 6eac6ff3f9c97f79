//! Error types for check symbol operations.

use thiserror::Error;

/// Errors returned by the buffer-writing helpers.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ChecksumError {
    /// The destination cannot hold the payload plus its check symbol.
    #[error("buffer too small: need {required} bytes, have {capacity}")]
    BufferTooSmall { required: usize, capacity: usize },
}
