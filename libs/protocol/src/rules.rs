//! Declarative scheme rules and the staged validator/generator built on them.

use idcheck_checksum::Algorithm;
use rand::Rng;

use crate::normalize;
use crate::{GenerateError, GenerationOptions, ValidationError, ValidationResult};

/// Turns raw input into canonical form, or `None` on a Format failure.
pub type Normalizer = fn(&str) -> Option<String>;

/// A non-empty set of ASCII symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Alphabet(&'static [u8]);

impl Alphabet {
    pub const DIGITS: Alphabet = Alphabet::new(b"0123456789");
    pub const NON_ZERO_DIGITS: Alphabet = Alphabet::new(b"123456789");
    pub const UPPERCASE: Alphabet = Alphabet::new(b"ABCDEFGHIJKLMNOPQRSTUVWXYZ");
    pub const ALPHANUMERIC: Alphabet = Alphabet::new(b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ");

    /// Creates an alphabet. Panics (at compile time for constants) if empty.
    pub const fn new(symbols: &'static [u8]) -> Self {
        assert!(!symbols.is_empty(), "alphabet must not be empty");
        Self(symbols)
    }

    pub const fn contains(&self, symbol: u8) -> bool {
        contains_byte(self.0, symbol)
    }

    /// True if every symbol is also in `set`.
    const fn is_subset_of(&self, set: &[u8]) -> bool {
        let mut i = 0;
        while i < self.0.len() {
            if !contains_byte(set, self.0[i]) {
                return false;
            }
            i += 1;
        }
        true
    }

    pub fn symbols(&self) -> &'static [u8] {
        self.0
    }

    /// Draws one symbol uniformly.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u8 {
        self.0[rng.random_range(0..self.0.len())]
    }
}

const fn contains_byte(set: &[u8], byte: u8) -> bool {
    let mut i = 0;
    while i < set.len() {
        if set[i] == byte {
            return true;
        }
        i += 1;
    }
    false
}

/// Allowed lengths of a normalized identifier, check symbol included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LengthRule {
    Exact(usize),
    Range { min: usize, max: usize },
}

impl LengthRule {
    pub const fn contains(&self, len: usize) -> bool {
        match *self {
            LengthRule::Exact(n) => len == n,
            LengthRule::Range { min, max } => min <= len && len <= max,
        }
    }

    /// Shortest allowed length.
    pub const fn min(&self) -> usize {
        match *self {
            LengthRule::Exact(n) => n,
            LengthRule::Range { min, .. } => min,
        }
    }

    /// Longest allowed length.
    pub const fn max(&self) -> usize {
        match *self {
            LengthRule::Exact(n) => n,
            LengthRule::Range { max, .. } => max,
        }
    }
}

/// Per-position alphabets for payload symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Charset {
    /// One alphabet for every payload position.
    Uniform(Alphabet),
    /// Entry `i` governs position `i`; the last entry covers the rest.
    Leading(&'static [Alphabet]),
}

impl Charset {
    /// Alphabet allowed at `position`.
    pub const fn at(&self, position: usize) -> Alphabet {
        match *self {
            Charset::Uniform(alphabet) => alphabet,
            Charset::Leading(alphabets) => {
                if position < alphabets.len() {
                    alphabets[position]
                } else if let [.., last] = alphabets {
                    *last
                } else {
                    Alphabet::ALPHANUMERIC
                }
            }
        }
    }

    /// True if every alphabet in the charset is a subset of `set`.
    const fn is_subset_of(&self, set: &[u8]) -> bool {
        match *self {
            Charset::Uniform(alphabet) => alphabet.is_subset_of(set),
            Charset::Leading(alphabets) => {
                let mut i = 0;
                while i < alphabets.len() {
                    if !alphabets[i].is_subset_of(set) {
                        return false;
                    }
                    i += 1;
                }
                true
            }
        }
    }
}

/// A fixed literal (country, issuer, or registry code) at a fixed offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CountryRule {
    pub offset: usize,
    pub literal: &'static str,
}

impl CountryRule {
    /// A literal prefix.
    pub const fn prefix(literal: &'static str) -> Self {
        Self { offset: 0, literal }
    }

    /// First position after the literal.
    pub const fn end(&self) -> usize {
        self.offset + self.literal.len()
    }

    fn matches(&self, bytes: &[u8]) -> bool {
        bytes.get(self.offset..self.end()) == Some(self.literal.as_bytes())
    }
}

/// Everything needed to validate and generate one identifier scheme.
///
/// When `checksum` is set, the last symbol is the check symbol: the charset
/// governs the positions before it, and the algorithm's check alphabet
/// governs the check position.
///
/// Rule sets are finished with [`SchemeRules::checked`], which rejects
/// combinations the generator cannot satisfy.
#[derive(Debug, Clone, Copy)]
pub struct SchemeRules {
    pub name: &'static str,
    pub normalizer: Normalizer,
    pub length: LengthRule,
    pub charset: Charset,
    pub country: Option<CountryRule>,
    pub checksum: Option<Algorithm>,
}

impl SchemeRules {
    /// Rules with the alphanumeric normalizer, no literal, and no checksum.
    pub const fn new(name: &'static str, length: LengthRule, charset: Charset) -> Self {
        Self {
            name,
            normalizer: normalize::alphanumeric,
            length,
            charset,
            country: None,
            checksum: None,
        }
    }

    pub const fn with_normalizer(mut self, normalizer: Normalizer) -> Self {
        self.normalizer = normalizer;
        self
    }

    pub const fn with_country(mut self, country: CountryRule) -> Self {
        self.country = Some(country);
        self
    }

    pub const fn with_checksum(mut self, algorithm: Algorithm) -> Self {
        self.checksum = Some(algorithm);
        self
    }

    /// Asserts that every generated value can pass validation.
    ///
    /// Panics (at compile time when used in a constant) if the length range
    /// is empty, the payload charset holds symbols the checksum cannot read,
    /// or the country literal does not fit the length or the charset.
    pub const fn checked(self) -> Self {
        assert!(
            self.length.min() <= self.length.max(),
            "length range is empty"
        );

        if let Some(algorithm) = self.checksum {
            assert!(self.length.min() >= 2, "checked schemes need a payload");
            assert!(
                self.charset.is_subset_of(algorithm.payload_alphabet()),
                "charset holds symbols the checksum cannot read"
            );
        }

        if let Some(country) = self.country {
            assert!(
                country.end() + self.check_len() <= self.length.max(),
                "country literal does not fit the scheme length"
            );

            let literal = country.literal.as_bytes();
            let mut i = 0;
            while i < literal.len() {
                assert!(
                    self.charset.at(country.offset + i).contains(literal[i]),
                    "country literal holds symbols outside the charset"
                );
                i += 1;
            }
        }

        self
    }

    const fn check_len(&self) -> usize {
        if self.checksum.is_some() {
            1
        } else {
            0
        }
    }

    fn payload_len(&self, len: usize) -> usize {
        len.saturating_sub(self.check_len())
    }

    /// Length of generated values: the shortest length that still holds the
    /// country literal ahead of the check symbol.
    pub fn generated_len(&self) -> usize {
        let literal_end = self.country.map_or(0, |country| country.end());
        self.length.min().max(literal_end + self.check_len())
    }

    /// Validates `raw`, returning the normalized identifier on success.
    pub fn validate(&self, raw: &str) -> ValidationResult<String> {
        let result = self.run_stages(raw);
        if let Err(error) = &result {
            tracing::debug!(scheme = self.name, stage = %error.kind(), "identifier rejected");
        }
        result.into()
    }

    fn run_stages(&self, raw: &str) -> Result<String, ValidationError> {
        let normalized = (self.normalizer)(raw).ok_or(ValidationError::Format)?;
        let bytes = normalized.as_bytes();

        if !self.length.contains(bytes.len()) {
            return Err(ValidationError::Length);
        }

        let payload_len = self.payload_len(bytes.len());
        let (payload, check) = bytes.split_at(payload_len);
        let payload_ok = payload
            .iter()
            .enumerate()
            .all(|(pos, &b)| self.charset.at(pos).contains(b));
        let check_ok = match (self.checksum, check.first()) {
            (Some(algorithm), Some(symbol)) => algorithm.check_alphabet().contains(symbol),
            _ => true,
        };
        if !payload_ok || !check_ok {
            return Err(ValidationError::Charset);
        }

        if let Some(country) = &self.country {
            if !country.matches(bytes) {
                return Err(ValidationError::CountryRule);
            }
        }

        if let Some(algorithm) = self.checksum {
            if !algorithm.validate(bytes) {
                return Err(ValidationError::Checksum);
            }
        }

        Ok(normalized)
    }

    /// Writes a valid identifier into `dest`, returning the written length.
    ///
    /// Fails only when `dest` is shorter than [`SchemeRules::generated_len`].
    pub fn generate(
        &self,
        options: &GenerationOptions,
        dest: &mut [u8],
    ) -> Result<usize, GenerateError> {
        let required = self.generated_len();
        if dest.len() < required {
            return Err(GenerateError::BufferTooSmall {
                required,
                capacity: dest.len(),
            });
        }

        self.fill(options, &mut dest[..required]);
        Ok(required)
    }

    /// Generates a valid identifier as a `String`.
    pub fn generate_string(&self, options: &GenerationOptions) -> String {
        let mut buf = vec![0u8; self.generated_len()];
        self.fill(options, &mut buf);
        buf.into_iter().map(char::from).collect()
    }

    fn fill(&self, options: &GenerationOptions, out: &mut [u8]) {
        let mut rng = options.rng();
        let payload_len = self.payload_len(out.len());

        for (pos, slot) in out[..payload_len].iter_mut().enumerate() {
            *slot = self.charset.at(pos).sample(&mut rng);
        }

        if let Some(country) = &self.country {
            if let Some(slot) = out[..payload_len].get_mut(country.offset..country.end()) {
                slot.copy_from_slice(country.literal.as_bytes());
            }
        }

        if let Some(algorithm) = self.checksum {
            let (payload, check) = out.split_at_mut(payload_len);
            if let Some(slot) = check.first_mut() {
                *slot = algorithm.compute_symbol(payload);
            }
        }

        tracing::trace!(
            scheme = self.name,
            seeded = options.is_seeded(),
            len = out.len(),
            "identifier generated"
        );
    }
}
