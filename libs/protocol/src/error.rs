//! Error types for validation, generation, and configuration.

use thiserror::Error;

use crate::ErrorKind;

/// The stage at which an identifier was rejected.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationError {
    /// Normalization failed or the input contains characters no scheme accepts.
    #[error("invalid identifier format")]
    Format,

    /// The normalized identifier has the wrong length.
    #[error("invalid identifier length")]
    Length,

    /// A character is not allowed at its position.
    #[error("invalid character for position")]
    Charset,

    /// A fixed literal (country or issuer code) does not match.
    #[error("country rule not satisfied")]
    CountryRule,

    /// The check symbol does not match the payload.
    #[error("checksum mismatch")]
    Checksum,
}

impl ValidationError {
    /// The matching [`ErrorKind`].
    pub fn kind(&self) -> ErrorKind {
        match self {
            ValidationError::Format => ErrorKind::Format,
            ValidationError::Length => ErrorKind::Length,
            ValidationError::Charset => ErrorKind::Charset,
            ValidationError::CountryRule => ErrorKind::CountryRule,
            ValidationError::Checksum => ErrorKind::Checksum,
        }
    }
}

impl TryFrom<ErrorKind> for ValidationError {
    type Error = ErrorKind;

    fn try_from(kind: ErrorKind) -> Result<Self, Self::Error> {
        match kind {
            ErrorKind::None => Err(kind),
            ErrorKind::Format => Ok(ValidationError::Format),
            ErrorKind::Length => Ok(ValidationError::Length),
            ErrorKind::Charset => Ok(ValidationError::Charset),
            ErrorKind::CountryRule => Ok(ValidationError::CountryRule),
            ErrorKind::Checksum => Ok(ValidationError::Checksum),
        }
    }
}

/// Errors that can occur when generating an identifier.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GenerateError {
    /// The destination is shorter than the scheme's required length.
    #[error("buffer too small: need {required} bytes, have {capacity}")]
    BufferTooSmall { required: usize, capacity: usize },
}

/// Errors reading generation settings from the environment.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The seed variable is set but is not an unsigned 64-bit integer.
    #[error("{var} must be an unsigned integer, got '{value}'")]
    InvalidSeed { var: &'static str, value: String },
}
