//! The per-identifier contract.

use crate::{GenerateError, GenerationOptions, SchemeRules, ValidationResult};

/// An identifier scheme: typed validation plus generation.
///
/// Implementors supply [`Scheme::RULES`] and a constructor for the typed
/// value; the provided methods run the staged validator and generator. The
/// round-trip law holds for every implementor: a generated value always
/// validates with [`crate::ErrorKind::None`].
pub trait Scheme {
    /// The validated, normalized identifier.
    type Value;

    /// Rules describing the scheme, finished with [`SchemeRules::checked`].
    const RULES: SchemeRules;

    /// Wraps a normalized identifier that passed every stage.
    fn from_normalized(normalized: String) -> Self::Value;

    /// Validates raw input.
    fn try_validate(raw: &str) -> ValidationResult<Self::Value> {
        Self::RULES.validate(raw).map(Self::from_normalized)
    }

    /// Writes a valid identifier into `dest`, returning the written length.
    fn try_generate(options: &GenerationOptions, dest: &mut [u8]) -> Result<usize, GenerateError> {
        Self::RULES.generate(options, dest)
    }

    /// Generates a valid identifier.
    fn generate(options: &GenerationOptions) -> Self::Value {
        Self::from_normalized(Self::RULES.generate_string(options))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Alphabet, Charset, ErrorKind, LengthRule};
    use idcheck_checksum::Algorithm;

    struct Badge;

    impl Scheme for Badge {
        type Value = String;

        const RULES: SchemeRules = SchemeRules::new(
            "badge",
            LengthRule::Exact(6),
            Charset::Uniform(Alphabet::DIGITS),
        )
        .with_checksum(Algorithm::Verhoeff)
        .checked();

        fn from_normalized(normalized: String) -> String {
            normalized
        }
    }

    #[test]
    fn test_provided_methods() {
        let value = Badge::generate(&GenerationOptions::seeded(2));
        let result = Badge::try_validate(&value);
        assert_eq!(result.error(), ErrorKind::None);
        assert_eq!(result.into_value().as_ref(), Some(&value));

        let mut buf = [0u8; 6];
        assert_eq!(
            Badge::try_generate(&GenerationOptions::seeded(2), &mut buf),
            Ok(6)
        );
        assert_eq!(&buf, value.as_bytes());
    }
}
