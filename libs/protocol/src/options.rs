//! Generation options and the randomness source they select.

use rand::rngs::{StdRng, ThreadRng};
use rand::{RngCore, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Options controlling identifier generation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GenerationOptions {
    /// Seed for reproducible output. `None` draws from a thread-local RNG.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl GenerationOptions {
    /// Environment variable read by [`GenerationOptions::from_env`].
    pub const SEED_ENV: &'static str = "IDCHECK_SEED";

    /// Options without a seed.
    #[must_use]
    pub const fn new() -> Self {
        Self { seed: None }
    }

    /// Options with a fixed seed.
    #[must_use]
    pub const fn seeded(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    /// Load options from the environment.
    ///
    /// `IDCHECK_SEED` pins the seed when set; an unset or empty variable
    /// means unseeded generation.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_seed_var(std::env::var(Self::SEED_ENV).ok().as_deref())
    }

    fn from_seed_var(value: Option<&str>) -> Result<Self, ConfigError> {
        let seed = value
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(|v| {
                v.parse::<u64>().map_err(|_| ConfigError::InvalidSeed {
                    var: Self::SEED_ENV,
                    value: v.to_string(),
                })
            })
            .transpose()?;

        Ok(Self { seed })
    }

    /// Returns true if output is reproducible.
    pub fn is_seeded(&self) -> bool {
        self.seed.is_some()
    }

    /// The randomness source for one generation call.
    pub fn rng(&self) -> GenerationRng {
        match self.seed {
            Some(seed) => GenerationRng::Seeded(StdRng::seed_from_u64(seed)),
            None => GenerationRng::Thread(rand::rng()),
        }
    }
}

/// Randomness source selected by [`GenerationOptions`].
///
/// The unseeded variant wraps the calling thread's RNG, so concurrent
/// generators never contend on shared state.
#[derive(Debug, Clone)]
pub enum GenerationRng {
    Seeded(StdRng),
    Thread(ThreadRng),
}

impl RngCore for GenerationRng {
    fn next_u32(&mut self) -> u32 {
        match self {
            GenerationRng::Seeded(rng) => rng.next_u32(),
            GenerationRng::Thread(rng) => rng.next_u32(),
        }
    }

    fn next_u64(&mut self) -> u64 {
        match self {
            GenerationRng::Seeded(rng) => rng.next_u64(),
            GenerationRng::Thread(rng) => rng.next_u64(),
        }
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        match self {
            GenerationRng::Seeded(rng) => rng.fill_bytes(dest),
            GenerationRng::Thread(rng) => rng.fill_bytes(dest),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let mut a = GenerationOptions::seeded(9).rng();
        let mut b = GenerationOptions::seeded(9).rng();
        for _ in 0..8 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn test_unseeded_rng() {
        let options = GenerationOptions::new();
        assert!(!options.is_seeded());
        assert!(matches!(options.rng(), GenerationRng::Thread(_)));
    }

    #[test]
    fn test_from_seed_var() {
        assert_eq!(
            GenerationOptions::from_seed_var(None),
            Ok(GenerationOptions::new())
        );
        assert_eq!(
            GenerationOptions::from_seed_var(Some("  ")),
            Ok(GenerationOptions::new())
        );
        assert_eq!(
            GenerationOptions::from_seed_var(Some("42")),
            Ok(GenerationOptions::seeded(42))
        );
        assert!(matches!(
            GenerationOptions::from_seed_var(Some("-1")),
            Err(ConfigError::InvalidSeed { .. })
        ));
    }

    #[test]
    fn test_from_env() {
        // The only test touching IDCHECK_SEED.
        std::env::set_var(GenerationOptions::SEED_ENV, "17");
        let seeded = GenerationOptions::from_env();
        std::env::set_var(GenerationOptions::SEED_ENV, "seventeen");
        let invalid = GenerationOptions::from_env();
        std::env::remove_var(GenerationOptions::SEED_ENV);
        let unset = GenerationOptions::from_env();

        assert_eq!(seeded, Ok(GenerationOptions::seeded(17)));
        assert_eq!(
            invalid,
            Err(ConfigError::InvalidSeed {
                var: GenerationOptions::SEED_ENV,
                value: "seventeen".to_string(),
            })
        );
        assert_eq!(unset, Ok(GenerationOptions::new()));
    }

    #[test]
    fn test_json_shape() {
        assert_eq!(
            serde_json::to_string(&GenerationOptions::new()).unwrap(),
            "{}"
        );
        assert_eq!(
            serde_json::to_string(&GenerationOptions::seeded(3)).unwrap(),
            r#"{"seed":3}"#
        );
        let parsed: GenerationOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, GenerationOptions::new());
    }
}
