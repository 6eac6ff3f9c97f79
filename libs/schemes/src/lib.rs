//! # idcheck-schemes
//!
//! Typed identifier schemes built on the idcheck validation contract.
//!
//! ## Design Principles
//!
//! - A scheme is plain data ([`SchemeRules`]) plus a typed wrapper
//! - Validation and generation obey the same rules, so generated values
//!   always validate
//! - Values only exist in normalized form; parsing is the only way in
//!
//! ## Defining a scheme
//!
//! ```
//! use idcheck_schemes::{define_scheme, Algorithm, Alphabet, Charset, LengthRule, SchemeRules};
//!
//! define_scheme!(
//!     /// Eight digits with a Damm check digit.
//!     TicketNumber,
//!     SchemeRules::new("ticket", LengthRule::Exact(8), Charset::Uniform(Alphabet::DIGITS))
//!         .with_checksum(Algorithm::Damm)
//! );
//!
//! let ticket: TicketNumber = "1234-5671".parse().unwrap();
//! assert_eq!(ticket.as_str(), "12345671");
//! ```

mod macros;
mod types;

pub use types::*;

pub use idcheck_protocol::{
    normalize, Algorithm, Alphabet, Charset, CountryRule, ErrorKind, GenerateError,
    GenerationOptions, LengthRule, Scheme, SchemeRules, ValidationError, ValidationResult,
};
