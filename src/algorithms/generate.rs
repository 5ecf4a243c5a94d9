//! Generate the components of an RSA key pair

use num_bigint::{BigUint, RandBigInt};
use num_traits::One;
use rand_core::CryptoRngCore;
use zeroize::Zeroizing;

use crate::{
    errors::{Error, Result},
    math::{gcd, mod_inverse, mod_pow},
    params::{KeyGenParams, PublicExponent},
    prime_rand::random_prime,
};

pub(crate) struct KeyComponents {
    pub n: BigUint,
    pub e: BigUint,
    pub d: BigUint,
}

/// Generates a two-prime RSA key pair with the given parameters and random
/// source.
///
/// Every failed attempt (equal primes, an exponent sharing a factor with the
/// totient, an exhausted prime search, a failed self-check) starts over with
/// fresh seeds, up to `params.max_attempts()` times. The primes and totient
/// are wiped before returning.
pub(crate) fn generate_key_components<R: CryptoRngCore + ?Sized>(
    rng: &mut R,
    params: &KeyGenParams,
) -> Result<KeyComponents> {
    params.validate()?;

    for attempt in 1..=params.max_attempts() {
        let result = generate_prime_pair(rng, params)
            .and_then(|(p, q)| components_from_primes(rng, params, &p, &q));

        match result {
            Ok(components) => {
                log::debug!(
                    "generated {}-bit modulus after {} attempt(s)",
                    components.n.bits(),
                    attempt
                );
                return Ok(components);
            }
            Err(err) => log::debug!("key generation attempt {} failed: {}", attempt, err),
        }
    }

    log::warn!(
        "key generation gave up after {} attempts",
        params.max_attempts()
    );
    Err(Error::KeyGenerationExhausted {
        attempts: params.max_attempts(),
    })
}

/// Searches for two primes from independent seeds. Fails with
/// [`Error::DegeneratePrimes`] if both searches end on the same prime.
fn generate_prime_pair<R: CryptoRngCore + ?Sized>(
    rng: &mut R,
    params: &KeyGenParams,
) -> Result<(Zeroizing<BigUint>, Zeroizing<BigUint>)> {
    let range = params.seed_range();
    let p = Zeroizing::new(random_prime(rng, range, params.rounds(), params.search_limit())?);
    let q = Zeroizing::new(random_prime(rng, range, params.rounds(), params.search_limit())?);

    if *p == *q {
        return Err(Error::DegeneratePrimes);
    }

    Ok((p, q))
}

/// Derives `n`, `e` and `d` from the distinct primes `p` and `q`.
fn components_from_primes<R: CryptoRngCore + ?Sized>(
    rng: &mut R,
    params: &KeyGenParams,
    p: &BigUint,
    q: &BigUint,
) -> Result<KeyComponents> {
    let one = BigUint::one();
    let n = p * q;
    let totient = Zeroizing::new((p - &one) * (q - &one));

    let e = match params.public_exponent() {
        PublicExponent::Fixed(e) => e.clone(),
        PublicExponent::RandomPrime => {
            random_prime(rng, params.seed_range(), params.rounds(), params.search_limit())?
        }
    };

    if !gcd(&e, &totient).is_one() {
        return Err(Error::InvalidInverse);
    }

    let d = mod_inverse(&e, &totient)?;
    check_key_pair(rng, &n, &e, &d, &totient)?;

    Ok(KeyComponents { n, e, d })
}

/// Makes sure `e·d ≡ 1 (mod m)` and that a random message survives a round
/// trip through both exponents.
fn check_key_pair<R: CryptoRngCore + ?Sized>(
    rng: &mut R,
    n: &BigUint,
    e: &BigUint,
    d: &BigUint,
    totient: &BigUint,
) -> Result<()> {
    let de = Zeroizing::new(e * d);
    if !(&*de % totient).is_one() {
        return Err(Error::Internal);
    }

    let message = Zeroizing::new(rng.gen_biguint_range(&BigUint::from(2u32), n));
    let ciphertext = Zeroizing::new(mod_pow(&message, e, n)?);
    if mod_pow(&ciphertext, d, n)? != *message {
        return Err(Error::Internal);
    }

    Ok(())
}
