//! Key generation parameters.

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::One;

use crate::errors::{Error, Result};
use crate::prime::DEFAULT_ROUNDS;

/// Conventional public exponent, F4 = 2^16 + 1.
pub const DEFAULT_PUBLIC_EXPONENT: u32 = 65537;

/// Modulus size produced by [`KeyGenParams::default`].
pub const DEFAULT_MODULUS_BITS: usize = 1024;

/// Number of times generation may start over before giving up.
pub const DEFAULT_MAX_ATTEMPTS: usize = 64;

/// Half-open interval `[low, high)` from which prime search seeds are drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedRange {
    low: BigUint,
    high: BigUint,
}

impl SeedRange {
    /// Creates the range `[low, high)`.
    ///
    /// Fails with [`Error::InvalidSeedRange`] if the range is empty or
    /// `low < 2`.
    pub fn new(low: BigUint, high: BigUint) -> Result<Self> {
        if low < BigUint::from(2u32) || high <= low {
            return Err(Error::InvalidSeedRange);
        }

        Ok(SeedRange { low, high })
    }

    /// All integers of exactly `bits` bits: `[2^(bits-1), 2^bits)`.
    pub fn with_bits(bits: usize) -> Result<Self> {
        if bits < 2 {
            return Err(Error::InvalidSeedRange);
        }

        let low = BigUint::one() << (bits - 1);
        let high = BigUint::one() << bits;
        SeedRange::new(low, high)
    }

    /// Inclusive lower bound.
    pub fn low(&self) -> &BigUint {
        &self.low
    }

    /// Exclusive upper bound.
    pub fn high(&self) -> &BigUint {
        &self.high
    }
}

/// How the public exponent `e` is chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublicExponent {
    /// Always use this exponent. Generation restarts until the totient is
    /// coprime to it.
    Fixed(BigUint),

    /// Draw a fresh prime from the seed range, coprime to the totient.
    RandomPrime,
}

impl Default for PublicExponent {
    fn default() -> Self {
        PublicExponent::Fixed(BigUint::from(DEFAULT_PUBLIC_EXPONENT))
    }
}

/// Parameters for [`generate_key_pair`](crate::generate_key_pair).
///
/// ```
/// use textbook_rsa::{BigUint, KeyGenParams};
///
/// // Toy-sized primes, only suitable for tests and demonstrations.
/// let params = KeyGenParams::default()
///     .with_seed_range(BigUint::from(2500u32), BigUint::from(12500u32))
///     .unwrap()
///     .with_rounds(10);
/// assert_eq!(params.rounds(), 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyGenParams {
    seed_range: SeedRange,
    public_exponent: PublicExponent,
    rounds: usize,
    max_attempts: usize,
    search_limit: Option<usize>,
}

impl KeyGenParams {
    /// Parameters for a modulus of about `bits` bits: each prime seed is
    /// drawn from `[2^(bits/2 - 1), 2^(bits/2))`.
    pub fn with_bits(bits: usize) -> Result<Self> {
        Ok(KeyGenParams {
            seed_range: SeedRange::with_bits(bits / 2)?,
            ..Default::default()
        })
    }

    /// Replaces the seed range with `[low, high)`.
    pub fn with_seed_range(self, low: BigUint, high: BigUint) -> Result<Self> {
        Ok(KeyGenParams {
            seed_range: SeedRange::new(low, high)?,
            ..self
        })
    }

    /// Replaces the public exponent choice.
    pub fn with_public_exponent(mut self, public_exponent: PublicExponent) -> Self {
        self.public_exponent = public_exponent;
        self
    }

    /// Sets the number of Miller-Rabin rounds per candidate.
    pub fn with_rounds(mut self, rounds: usize) -> Self {
        self.rounds = rounds;
        self
    }

    /// Sets how many times generation may start over.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Caps each prime search at `limit` odd candidates instead of the
    /// default derived from the seed size.
    pub fn with_search_limit(mut self, limit: usize) -> Self {
        self.search_limit = Some(limit);
        self
    }

    /// Range the prime search seeds are drawn from.
    pub fn seed_range(&self) -> &SeedRange {
        &self.seed_range
    }

    /// Public exponent choice.
    pub fn public_exponent(&self) -> &PublicExponent {
        &self.public_exponent
    }

    /// Miller-Rabin rounds per candidate.
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    /// Maximum number of generation attempts.
    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Explicit cap on odd candidates per prime search, if any.
    pub fn search_limit(&self) -> Option<usize> {
        self.search_limit
    }

    /// Checks the parameters before any randomness is spent.
    pub fn validate(&self) -> Result<()> {
        if self.rounds == 0 {
            return Err(Error::InvalidRounds);
        }

        if let PublicExponent::Fixed(e) = &self.public_exponent {
            if e < &BigUint::from(3u32) || e.is_even() {
                return Err(Error::InvalidExponent);
            }
        }

        if self.max_attempts == 0 {
            return Err(Error::KeyGenerationExhausted { attempts: 0 });
        }

        Ok(())
    }
}

impl Default for KeyGenParams {
    fn default() -> Self {
        KeyGenParams {
            seed_range: SeedRange {
                low: BigUint::one() << (DEFAULT_MODULUS_BITS / 2 - 1),
                high: BigUint::one() << (DEFAULT_MODULUS_BITS / 2),
            },
            public_exponent: PublicExponent::default(),
            rounds: DEFAULT_ROUNDS,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            search_limit: None,
        }
    }
}
