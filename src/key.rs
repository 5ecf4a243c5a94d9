use core::fmt;
use num_bigint::BigUint;
use num_traits::Zero;
use rand_core::CryptoRngCore;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use zeroize::Zeroize;

use crate::algorithms::generate::generate_key_components;
use crate::algorithms::rsa::{decrypt, encrypt};
use crate::errors::{Error, Result};
use crate::params::KeyGenParams;
use crate::traits::KeyParts;

/// Represents the public part of an RSA key: the encryption exponent `e`
/// and the modulus `n`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PublicKey {
    e: BigUint,
    n: BigUint,
}

/// Represents the private part of an RSA key: the decryption exponent `d`
/// and the modulus `n`.
///
/// The prime factors of `n` are never kept. The exponent is wiped on drop.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PrivateKey {
    d: BigUint,
    n: BigUint,
}

/// A matching [`PublicKey`] and [`PrivateKey`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPair {
    public_key: PublicKey,
    private_key: PrivateKey,
}

/// Generates a fresh key pair.
///
/// Primes `p` and `q` are searched for upward from seeds drawn out of
/// `params.seed_range()`. The public key carries `e`, the private key
/// carries `d = e⁻¹ mod (p-1)(q-1)`.
///
/// ```
/// use textbook_rsa::{decrypt, encrypt, generate_key_pair, BigUint, KeyGenParams};
///
/// let mut rng = rand::thread_rng(); // rand@0.8
/// let params = KeyGenParams::with_bits(512).expect("valid parameters");
/// let (public_key, private_key) =
///     generate_key_pair(&mut rng, &params).expect("failed to generate a key");
///
/// let message = BigUint::from(563u32);
/// let ciphertext = encrypt(&message, &public_key).expect("failed to encrypt");
/// assert_eq!(decrypt(&ciphertext, &private_key).expect("failed to decrypt"), message);
/// ```
pub fn generate_key_pair<R: CryptoRngCore + ?Sized>(
    rng: &mut R,
    params: &KeyGenParams,
) -> Result<(PublicKey, PrivateKey)> {
    KeyPair::generate(rng, params).map(KeyPair::into_parts)
}

fn check_components(exponent: &BigUint, n: &BigUint) -> Result<()> {
    if n < &BigUint::from(3u32) {
        return Err(Error::InvalidModulus);
    }

    if exponent.is_zero() {
        return Err(Error::InvalidExponent);
    }

    Ok(())
}

impl PublicKey {
    /// Builds a public key from its exponent and modulus.
    pub fn new(e: BigUint, n: BigUint) -> Result<Self> {
        check_components(&e, &n)?;
        Ok(PublicKey { e, n })
    }

    /// Returns the public exponent.
    pub fn e(&self) -> &BigUint {
        &self.e
    }

    /// Encrypts `message`, which must be smaller than the modulus.
    pub fn encrypt(&self, message: &BigUint) -> Result<BigUint> {
        encrypt(message, self)
    }
}

impl PrivateKey {
    /// Builds a private key from its exponent and modulus.
    pub fn new(d: BigUint, n: BigUint) -> Result<Self> {
        check_components(&d, &n)?;
        Ok(PrivateKey { d, n })
    }

    /// Returns the private exponent.
    pub fn d(&self) -> &BigUint {
        &self.d
    }

    /// Decrypts `ciphertext`, which must be smaller than the modulus.
    pub fn decrypt(&self, ciphertext: &BigUint) -> Result<BigUint> {
        decrypt(ciphertext, self)
    }
}

impl KeyPair {
    /// Generates a fresh key pair, see [`generate_key_pair`].
    pub fn generate<R: CryptoRngCore + ?Sized>(
        rng: &mut R,
        params: &KeyGenParams,
    ) -> Result<Self> {
        let components = generate_key_components(rng, params)?;

        Ok(KeyPair {
            public_key: PublicKey {
                e: components.e,
                n: components.n.clone(),
            },
            private_key: PrivateKey {
                d: components.d,
                n: components.n,
            },
        })
    }

    /// Returns the public half.
    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    /// Returns the private half.
    pub fn private_key(&self) -> &PrivateKey {
        &self.private_key
    }

    /// Splits the pair into its two keys.
    pub fn into_parts(self) -> (PublicKey, PrivateKey) {
        (self.public_key, self.private_key)
    }
}

impl KeyParts for PublicKey {
    fn n(&self) -> &BigUint {
        &self.n
    }

    fn exponent(&self) -> &BigUint {
        &self.e
    }
}

impl KeyParts for PrivateKey {
    fn n(&self) -> &BigUint {
        &self.n
    }

    fn exponent(&self) -> &BigUint {
        &self.d
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field("d", &"...")
            .field("n", &self.n)
            .finish()
    }
}

impl Zeroize for PrivateKey {
    fn zeroize(&mut self) {
        self.d.zeroize();
        // The wiped digit buffer is not a valid zero.
        self.d = BigUint::zero();
    }
}

impl Drop for PrivateKey {
    fn drop(&mut self) {
        self.zeroize();
    }
}
