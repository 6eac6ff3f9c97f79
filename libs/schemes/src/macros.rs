//! Macros for defining typed identifier schemes.

/// Macro to define a typed identifier backed by a [`crate::SchemeRules`].
///
/// This generates a newtype wrapper around the normalized string with:
/// - a [`crate::Scheme`] implementation (`try_validate`, `try_generate`, `generate`)
///   whose rules pass [`crate::SchemeRules::checked`] at compile time
/// - `parse()` returning `Result<Self, ValidationError>`
/// - `Display` and `FromStr` implementations
/// - `Serialize` and `Deserialize` implementations (deserialization validates)
/// - `Ord`, `Hash`, and other standard traits
///
/// The invoking crate must depend on `serde`.
///
/// # Example
///
/// ```ignore
/// define_scheme!(
///     /// International Mobile Equipment Identity.
///     Imei,
///     SchemeRules::new("imei", LengthRule::Exact(15), Charset::Uniform(Alphabet::DIGITS))
///         .with_checksum(Algorithm::Luhn)
/// );
///
/// let imei: Imei = "49-015420-323751-8".parse()?;
/// ```
#[macro_export]
macro_rules! define_scheme {
    ($(#[$meta:meta])* $name:ident, $rules:expr $(,)?) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(String);

        impl $name {
            /// Parses and validates raw input.
            pub fn parse(s: &str) -> Result<Self, $crate::ValidationError> {
                <Self as $crate::Scheme>::try_validate(s).into_result()
            }

            /// Returns the normalized identifier.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consumes the identifier, returning the normalized string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl $crate::Scheme for $name {
            type Value = Self;

            const RULES: $crate::SchemeRules = $crate::SchemeRules::checked($rules);

            fn from_normalized(normalized: String) -> Self {
                Self(normalized)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(&self.0)
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                Self::parse(&s).map_err(serde::de::Error::custom)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}
