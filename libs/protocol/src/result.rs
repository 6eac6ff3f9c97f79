//! Validation outcome types.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// The first validation stage that failed, or `None` on success.
///
/// Variants are declared in stage order, so `Ord` follows precedence.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    #[default]
    None,
    Format,
    Length,
    Charset,
    CountryRule,
    Checksum,
}

impl ErrorKind {
    /// Stable lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::None => "none",
            ErrorKind::Format => "format",
            ErrorKind::Length => "length",
            ErrorKind::Charset => "charset",
            ErrorKind::CountryRule => "country_rule",
            ErrorKind::Checksum => "checksum",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of validating an identifier.
///
/// `value` is present if and only if the identifier is valid; otherwise
/// `error` names the first failing stage. The fields are private so the
/// invariant holds for every instance, including deserialized ones.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ValidationResult<T> {
    is_valid: bool,
    value: Option<T>,
    error: ErrorKind,
}

impl<T> ValidationResult<T> {
    /// A successful result carrying the normalized value.
    pub fn valid(value: T) -> Self {
        Self {
            is_valid: true,
            value: Some(value),
            error: ErrorKind::None,
        }
    }

    /// A failed result.
    pub fn invalid(error: ValidationError) -> Self {
        Self {
            is_valid: false,
            value: None,
            error: error.kind(),
        }
    }

    /// Returns true if every stage passed.
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// The first failing stage, or [`ErrorKind::None`].
    pub fn error(&self) -> ErrorKind {
        self.error
    }

    /// The validated value, if any.
    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Consumes the result, returning the validated value.
    pub fn into_value(self) -> Option<T> {
        self.value
    }

    /// Maps the validated value, keeping the error untouched.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> ValidationResult<U> {
        ValidationResult {
            is_valid: self.is_valid,
            value: self.value.map(f),
            error: self.error,
        }
    }

    /// Converts into a `Result`.
    pub fn into_result(self) -> Result<T, ValidationError> {
        match self.value {
            Some(value) => Ok(value),
            // `error` is never None when `value` is absent.
            None => {
                Err(ValidationError::try_from(self.error).unwrap_or(ValidationError::Format))
            }
        }
    }
}

impl<T> From<ValidationResult<T>> for Result<T, ValidationError> {
    fn from(result: ValidationResult<T>) -> Self {
        result.into_result()
    }
}

impl<T> From<Result<T, ValidationError>> for ValidationResult<T> {
    fn from(result: Result<T, ValidationError>) -> Self {
        match result {
            Ok(value) => Self::valid(value),
            Err(error) => Self::invalid(error),
        }
    }
}

/// Wire shape used to check the invariant on deserialization.
#[derive(Deserialize)]
struct RawValidationResult<T> {
    is_valid: bool,
    value: Option<T>,
    error: ErrorKind,
}

impl<'de, T> Deserialize<'de> for ValidationResult<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = RawValidationResult::<T>::deserialize(deserializer)?;
        match (raw.is_valid, raw.value, raw.error) {
            (true, Some(value), ErrorKind::None) => Ok(Self::valid(value)),
            (false, None, kind) => ValidationError::try_from(kind)
                .map(Self::invalid)
                .map_err(|_| serde::de::Error::custom("invalid result must name an error")),
            _ => Err(serde::de::Error::custom(
                "value must be present if and only if is_valid is true",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_valid_invariant() {
        let result = ValidationResult::valid("123".to_string());
        assert!(result.is_valid());
        assert_eq!(result.error(), ErrorKind::None);
        assert_eq!(result.value().map(String::as_str), Some("123"));
    }

    #[rstest]
    #[case(ValidationError::Format, ErrorKind::Format)]
    #[case(ValidationError::Length, ErrorKind::Length)]
    #[case(ValidationError::Charset, ErrorKind::Charset)]
    #[case(ValidationError::CountryRule, ErrorKind::CountryRule)]
    #[case(ValidationError::Checksum, ErrorKind::Checksum)]
    fn test_invalid_invariant(#[case] error: ValidationError, #[case] kind: ErrorKind) {
        let result = ValidationResult::<String>::invalid(error);
        assert!(!result.is_valid());
        assert!(result.value().is_none());
        assert_eq!(result.error(), kind);
        assert_eq!(result.into_result(), Err(error));
    }

    #[test]
    fn test_error_kind_order_is_precedence() {
        assert!(ErrorKind::None < ErrorKind::Format);
        assert!(ErrorKind::Format < ErrorKind::Length);
        assert!(ErrorKind::Length < ErrorKind::Charset);
        assert!(ErrorKind::Charset < ErrorKind::CountryRule);
        assert!(ErrorKind::CountryRule < ErrorKind::Checksum);
    }

    #[test]
    fn test_map_keeps_error() {
        let result = ValidationResult::<u32>::invalid(ValidationError::Checksum);
        let result = result.map(|v| v * 2);
        assert_eq!(result.error(), ErrorKind::Checksum);

        let result = ValidationResult::valid(21u32).map(|v| v * 2);
        assert_eq!(result.into_value(), Some(42));
    }

    #[test]
    fn test_json_roundtrip() {
        let result = ValidationResult::valid("ABC".to_string());
        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(json, r#"{"is_valid":true,"value":"ABC","error":"none"}"#);
        let parsed: ValidationResult<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, result);

        let result = ValidationResult::<String>::invalid(ValidationError::CountryRule);
        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(
            json,
            r#"{"is_valid":false,"value":null,"error":"country_rule"}"#
        );
        let parsed: ValidationResult<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, result);
    }

    #[rstest]
    #[case(r#"{"is_valid":true,"value":null,"error":"none"}"#)]
    #[case(r#"{"is_valid":false,"value":"X","error":"length"}"#)]
    #[case(r#"{"is_valid":false,"value":null,"error":"none"}"#)]
    #[case(r#"{"is_valid":true,"value":"X","error":"checksum"}"#)]
    fn test_json_rejects_broken_invariant(#[case] json: &str) {
        assert!(serde_json::from_str::<ValidationResult<String>>(json).is_err());
    }
}
