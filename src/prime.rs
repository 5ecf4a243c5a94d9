//! Probabilistic primality testing.

use num_bigint::{BigUint, RandBigInt};
use num_traits::{One, ToPrimitive, Zero};
use rand_core::CryptoRngCore;

/// Default number of Miller-Rabin rounds.
pub const DEFAULT_ROUNDS: usize = 5;

/// The primes below 256. Inputs in this table are accepted without running
/// Miller-Rabin; larger inputs divisible by any of them are rejected.
const SMALL_PRIMES: [u8; 54] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89,
    97, 101, 103, 107, 109, 113, 127, 131, 137, 139, 149, 151, 157, 163, 167, 173, 179, 181, 191,
    193, 197, 199, 211, 223, 227, 229, 233, 239, 241, 251,
];

/// Reports whether `n` is probably prime, applying the Miller-Rabin test with
/// `rounds` witnesses drawn from `rng`.
///
/// If `n` is prime, this always returns true. If `n` is composite, the
/// probability of returning true is at most ¼ʳᵒᵘⁿᵈˢ. Inputs below 256 and
/// inputs with a factor below 256 are decided exactly.
///
/// A `rounds` of zero is treated as one: at least one round is always run.
/// See Handbook of Applied Cryptography, p. 139, Algorithm 4.24.
pub fn is_probable_prime<R: CryptoRngCore + ?Sized>(
    rng: &mut R,
    n: &BigUint,
    rounds: usize,
) -> bool {
    if n <= &BigUint::one() {
        return false;
    }

    if let Some(small) = n.to_u64() {
        if small < 256 {
            return SMALL_PRIMES.contains(&(small as u8));
        }
    }

    if has_small_factor(n) {
        return false;
    }

    let (d, r) = decompose(&(n - BigUint::one()));

    (0..rounds.max(1)).all(|_| miller_round(rng, n, &d, r))
}

/// Splits `n_minus_1` into `(d, r)` with `n_minus_1 = d · 2ʳ` and `d` odd.
///
/// `n_minus_1` must be non-zero.
pub fn decompose(n_minus_1: &BigUint) -> (BigUint, usize) {
    let r = n_minus_1.trailing_zeros().unwrap_or(0);
    (n_minus_1 >> r, r)
}

/// One Miller-Rabin round: picks a random witness in `[2, n - 2]` and checks
/// whether `n` is a strong probable prime to that base.
///
/// `n` must be odd and at least 5, with `n - 1 = d · 2ʳ` as returned by
/// [`decompose`]. A `false` result proves `n` composite.
pub fn miller_round<R: CryptoRngCore + ?Sized>(
    rng: &mut R,
    n: &BigUint,
    d: &BigUint,
    r: usize,
) -> bool {
    debug_assert!(n >= &BigUint::from(5u32));

    let witness = rng.gen_biguint_range(&BigUint::from(2u32), &(n - BigUint::one()));
    strong_probable_prime(n, d, r, &witness)
}

/// Reports whether `n` is a strong probable prime to base `witness`, given
/// `n - 1 = d · 2ʳ`.
pub fn strong_probable_prime(n: &BigUint, d: &BigUint, r: usize, witness: &BigUint) -> bool {
    let n_minus_1 = n - BigUint::one();

    let mut x = witness.modpow(d, n);
    if x.is_one() || x == n_minus_1 {
        return true;
    }

    // Square up to the exponent n - 1, i.e. r - 1 more times.
    for _ in 1..r {
        x = (&x * &x) % n;

        if x == n_minus_1 {
            return true;
        }

        // Nontrivial square root of one.
        if x.is_one() {
            return false;
        }
    }

    false
}

/// Reports whether `n` has a factor in [`SMALL_PRIMES`]. `n` itself being a
/// small prime counts as having one.
fn has_small_factor(n: &BigUint) -> bool {
    SMALL_PRIMES.iter().any(|p| (n % u32::from(*p)).is_zero())
}
