//! Raw RSA exponentiation

use num_bigint::BigUint;

use crate::errors::{Error, Result};
use crate::math::mod_pow;
use crate::traits::KeyParts;

/// ⚠️ Raw RSA encryption of `message` under `key`: `message^exponent mod n`.
/// No padding is performed.
///
/// Fails with [`Error::RangeViolation`] unless `0 <= message < n`.
#[inline]
pub fn encrypt<K: KeyParts + ?Sized>(message: &BigUint, key: &K) -> Result<BigUint> {
    apply(key, message)
}

/// ⚠️ Raw RSA decryption of `ciphertext` under `key`: `ciphertext^exponent mod n`.
///
/// Fails with [`Error::RangeViolation`] unless `0 <= ciphertext < n`.
#[inline]
pub fn decrypt<K: KeyParts + ?Sized>(ciphertext: &BigUint, key: &K) -> Result<BigUint> {
    apply(key, ciphertext)
}

fn apply<K: KeyParts + ?Sized>(key: &K, x: &BigUint) -> Result<BigUint> {
    if x >= key.n() {
        return Err(Error::RangeViolation);
    }

    mod_pow(x, key.exponent(), key.n())
}
