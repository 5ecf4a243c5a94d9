//! Generation of random primes.
//!
//! *Warning*: the quality of the produced primes depends entirely on the
//! provided random number generator.

use num_bigint::{BigUint, RandBigInt};
use num_integer::Integer;
use num_traits::One;
use rand_core::CryptoRngCore;

use crate::errors::{Error, Result};
use crate::params::SeedRange;
use crate::prime::is_probable_prime;

/// Smallest number of odd candidates any search is allowed to try.
pub const MIN_SEARCH_LIMIT: usize = 64;

/// Default cap on the number of odd candidates examined when searching
/// upward from `seed`: `max(64, bits(seed)²)`.
///
/// Since `bits(seed)² ≈ 2·ln(seed)²`, this is far beyond any known prime gap
/// at the given size.
pub fn search_limit(seed: &BigUint) -> usize {
    let bits = seed.bits();
    bits.saturating_mul(bits).max(MIN_SEARCH_LIMIT)
}

/// Draws a seed uniformly from `range`.
pub fn random_seed<R: CryptoRngCore + ?Sized>(rng: &mut R, range: &SeedRange) -> BigUint {
    rng.gen_biguint_range(range.low(), range.high())
}

/// Returns the first probable prime in `seed, seed + 2, seed + 4, …`, with
/// `seed` first rounded up to an odd number.
///
/// Fails with [`Error::PrimeSearchExhausted`] after [`search_limit`]
/// candidates.
///
/// ```
/// use textbook_rsa::{prime_rand::next_prime_from, BigUint};
///
/// let mut rng = rand::thread_rng(); // rand@0.8
/// let p = next_prime_from(&mut rng, &BigUint::from(2500u32), 5).unwrap();
/// assert_eq!(p, BigUint::from(2503u32));
/// ```
pub fn next_prime_from<R: CryptoRngCore + ?Sized>(
    rng: &mut R,
    seed: &BigUint,
    rounds: usize,
) -> Result<BigUint> {
    next_prime_from_with_limit(rng, seed, rounds, search_limit(seed))
}

/// Like [`next_prime_from`], but examines at most `limit` odd candidates.
pub fn next_prime_from_with_limit<R: CryptoRngCore + ?Sized>(
    rng: &mut R,
    seed: &BigUint,
    rounds: usize,
    limit: usize,
) -> Result<BigUint> {
    let mut candidate = seed.clone();
    if candidate.is_even() {
        candidate += BigUint::one();
    }

    let step = BigUint::from(2u32);
    for _ in 0..limit {
        if is_probable_prime(rng, &candidate, rounds) {
            return Ok(candidate);
        }
        candidate += &step;
    }

    log::debug!(
        "no prime within {} odd candidates above a {}-bit seed",
        limit,
        seed.bits()
    );
    Err(Error::PrimeSearchExhausted)
}

/// Draws a seed from `range` and searches upward from it for a prime.
///
/// The result is at least `range.low()` but may exceed `range.high()` when
/// the seed lands just below the upper bound.
pub fn random_prime<R: CryptoRngCore + ?Sized>(
    rng: &mut R,
    range: &SeedRange,
    rounds: usize,
    limit: Option<usize>,
) -> Result<BigUint> {
    let seed = random_seed(rng, range);
    let limit = limit.unwrap_or_else(|| search_limit(&seed));
    next_prime_from_with_limit(rng, &seed, rounds, limit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prime::DEFAULT_ROUNDS;
    use num_traits::FromPrimitive;
    use rand_chacha::{rand_core::SeedableRng, ChaCha8Rng};

    // Start of a maximal prime gap of length 1476.
    const GAP_START: u64 = 1_425_172_824_437_699_411;
    const GAP_END: u64 = 1_425_172_824_437_700_887;

    #[test]
    fn test_next_prime_small() {
        let mut rng = ChaCha8Rng::from_seed([42; 32]);
        let cases: [[u64; 2]; 8] = [
            [0, 3],
            [1, 3],
            [2, 3],
            [3, 3],
            [4, 5],
            [24, 29],
            [2500, 2503],
            [7908, 7919],
        ];

        for case in cases.iter() {
            let seed = BigUint::from_u64(case[0]).unwrap();
            assert_eq!(
                next_prime_from(&mut rng, &seed, DEFAULT_ROUNDS).unwrap(),
                BigUint::from_u64(case[1]).unwrap(),
                "next_prime_from({})",
                case[0]
            );
        }
    }

    #[test]
    fn test_next_prime_large() {
        let mut rng = ChaCha8Rng::from_seed([42; 32]);
        let seed = BigUint::parse_bytes(b"100000000000000000000", 10).unwrap();
        let p = next_prime_from(&mut rng, &seed, DEFAULT_ROUNDS).unwrap();
        assert_eq!(
            p,
            BigUint::parse_bytes(b"100000000000000000039", 10).unwrap()
        );
    }

    #[test]
    fn test_search_limit() {
        let mut rng = ChaCha8Rng::from_seed([42; 32]);
        let seed = BigUint::from_u64(GAP_START + 1).unwrap();

        // GAP_START + 2 through GAP_END is 738 odd candidates.
        assert_eq!(
            next_prime_from_with_limit(&mut rng, &seed, DEFAULT_ROUNDS, 737),
            Err(Error::PrimeSearchExhausted)
        );
        assert_eq!(
            next_prime_from_with_limit(&mut rng, &seed, DEFAULT_ROUNDS, 738).unwrap(),
            BigUint::from_u64(GAP_END).unwrap()
        );
        assert_eq!(
            next_prime_from(&mut rng, &seed, DEFAULT_ROUNDS).unwrap(),
            BigUint::from_u64(GAP_END).unwrap()
        );
    }

    #[test]
    fn test_zero_limit() {
        let mut rng = ChaCha8Rng::from_seed([42; 32]);
        let seed = BigUint::from_u64(7919).unwrap();
        assert_eq!(
            next_prime_from_with_limit(&mut rng, &seed, DEFAULT_ROUNDS, 0),
            Err(Error::PrimeSearchExhausted)
        );
    }

    #[test]
    fn test_default_limit() {
        assert_eq!(search_limit(&BigUint::from_u64(3).unwrap()), MIN_SEARCH_LIMIT);
        assert_eq!(search_limit(&(BigUint::one() << 511)), 512 * 512);
    }

    #[test]
    fn test_random_prime_in_range() {
        let mut rng = ChaCha8Rng::from_seed([0; 32]);
        let range = SeedRange::with_bits(256).unwrap();
        for _ in 0..4 {
            let p = random_prime(&mut rng, &range, 20, None).unwrap();
            assert!(&p >= range.low());
            assert_eq!(p.bits(), 256);
            assert!(num_bigint::prime::probably_prime(&p, 20));
        }
    }

    #[test]
    fn test_random_seed_in_range() {
        let mut rng = ChaCha8Rng::from_seed([5; 32]);
        let range = SeedRange::new(
            BigUint::from_u64(2500).unwrap(),
            BigUint::from_u64(2510).unwrap(),
        )
        .unwrap();
        for _ in 0..100 {
            let seed = random_seed(&mut rng, &range);
            assert!(&seed >= range.low() && &seed < range.high());
        }
    }
}
