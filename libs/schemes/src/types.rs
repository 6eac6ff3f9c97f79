//! Reference identifier schemes.
//!
//! One scheme per checksum family the catalog relies on; each is a real,
//! publicly specified identifier.

use crate::define_scheme;
use crate::{normalize, Algorithm, Alphabet, Charset, CountryRule, LengthRule, SchemeRules};

// =============================================================================
// Telecom
// =============================================================================

define_scheme!(
    /// International Mobile Equipment Identity: 14 digits plus a Luhn check digit.
    Imei,
    SchemeRules::new("imei", LengthRule::Exact(15), Charset::Uniform(Alphabet::DIGITS))
        .with_normalizer(normalize::numeric)
        .with_checksum(Algorithm::Luhn)
);

// =============================================================================
// National IDs
// =============================================================================

/// Aadhaar numbers never start with 0 or 1.
const AADHAAR_LEADING: Alphabet = Alphabet::new(b"23456789");

define_scheme!(
    /// Indian Aadhaar number: 11 digits plus a Verhoeff check digit.
    Aadhaar,
    SchemeRules::new(
        "aadhaar",
        LengthRule::Exact(12),
        Charset::Leading(&[AADHAAR_LEADING, Alphabet::DIGITS]),
    )
    .with_normalizer(normalize::numeric)
    .with_checksum(Algorithm::Verhoeff)
);

// =============================================================================
// GS1 keys
// =============================================================================

define_scheme!(
    /// GTIN-13 (EAN-13) trade item number.
    Gtin13,
    SchemeRules::new("gtin13", LengthRule::Exact(13), Charset::Uniform(Alphabet::DIGITS))
        .with_normalizer(normalize::numeric)
        .with_checksum(Algorithm::Gs1)
);

define_scheme!(
    /// Serial Shipping Container Code: 17 digits plus a GS1 check digit.
    Sscc,
    SchemeRules::new("sscc", LengthRule::Exact(18), Charset::Uniform(Alphabet::DIGITS))
        .with_normalizer(normalize::numeric)
        .with_checksum(Algorithm::Gs1)
);

define_scheme!(
    /// ISMN-13 printed music number, always under the `979-0` GS1 prefix.
    Ismn,
    SchemeRules::new("ismn", LengthRule::Exact(13), Charset::Uniform(Alphabet::DIGITS))
        .with_normalizer(normalize::numeric)
        .with_country(CountryRule::prefix("9790"))
        .with_checksum(Algorithm::Gs1)
);

// =============================================================================
// Tests
// =============================================================================
