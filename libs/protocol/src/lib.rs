//! # idcheck-protocol
//!
//! The validation/generation contract every identifier scheme honors.
//!
//! ## Validation
//!
//! Validation runs in fixed stages and stops at the first failure:
//!
//! 1. **Format**: normalization (whitespace, separators, case) and a coarse
//!    charset check
//! 2. **Length**: fixed length or range
//! 3. **Charset**: per-position alphabets
//! 4. **CountryRule**: a fixed literal at a fixed offset
//! 5. **Checksum**: exactly one check symbol algorithm
//!
//! The outcome is a [`ValidationResult`], whose [`ErrorKind`] names the first
//! failing stage.
//!
//! ## Generation
//!
//! Generators write into a caller-supplied buffer and return the written
//! length. A seeded [`GenerationOptions`] gives byte-identical output across
//! runs; without a seed a thread-local RNG is used. Generated values always
//! pass validation.

mod error;
mod options;
mod result;
mod rules;
mod scheme;

pub mod normalize;

pub use error::{ConfigError, GenerateError, ValidationError};
pub use options::{GenerationOptions, GenerationRng};
pub use result::{ErrorKind, ValidationResult};
pub use rules::{Alphabet, Charset, CountryRule, LengthRule, Normalizer, SchemeRules};
pub use scheme::Scheme;

/// Re-export the checksum toolkit for scheme definitions.
pub use idcheck_checksum::Algorithm;
