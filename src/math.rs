//! Modular arithmetic over arbitrary precision integers.

use num_bigint::Sign::Plus;
use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Zero};

use crate::errors::{Error, Result};

/// Computes `base^exponent mod modulus` by repeated squaring.
///
/// Fails with [`Error::InvalidModulus`] if `modulus` is zero.
pub fn mod_pow(base: &BigUint, exponent: &BigUint, modulus: &BigUint) -> Result<BigUint> {
    if modulus.is_zero() {
        return Err(Error::InvalidModulus);
    }

    // Every residue mod 1 is zero.
    if modulus.is_one() {
        return Ok(BigUint::zero());
    }

    Ok(base.modpow(exponent, modulus))
}

/// Greatest common divisor of `a` and `b`.
#[inline]
pub fn gcd(a: &BigUint, b: &BigUint) -> BigUint {
    a.gcd(b)
}

/// Computes the unique `d` in `[0, m)` with `a·d ≡ 1 (mod m)`, using the
/// iterative extended Euclidean algorithm.
///
/// Returns [`Error::InvalidInverse`] if `gcd(a, m) != 1` and
/// [`Error::InvalidModulus`] if `m < 2`.
pub fn mod_inverse(a: &BigUint, m: &BigUint) -> Result<BigUint> {
    if m <= &BigUint::one() {
        return Err(Error::InvalidModulus);
    }

    let modulus = BigInt::from_biguint(Plus, m.clone());

    // Bézout coefficients of `a` for the remainder pair (r0, r1).
    let mut r0 = BigInt::from_biguint(Plus, a % m);
    let mut r1 = modulus.clone();
    let mut x0 = BigInt::one();
    let mut x1 = BigInt::zero();

    while !r1.is_zero() {
        let (q, r) = r0.div_rem(&r1);
        r0 = core::mem::replace(&mut r1, r);

        let x = &x0 - &q * &x1;
        x0 = core::mem::replace(&mut x1, x);
    }

    // r0 now holds gcd(a, m).
    if !r0.is_one() {
        return Err(Error::InvalidInverse);
    }

    x0.mod_floor(&modulus)
        .to_biguint()
        .ok_or(Error::InvalidInverse)
}
