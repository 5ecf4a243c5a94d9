//! Traits related to the key components

use num_bigint::BigUint;

/// Components shared by both halves of an RSA key pair: an exponent and the
/// modulus it works under.
pub trait KeyParts {
    /// Returns the modulus of the key.
    fn n(&self) -> &BigUint;

    /// Returns the exponent of the key.
    fn exponent(&self) -> &BigUint;

    /// Returns the modulus size in bytes. Ciphertexts produced with this key
    /// fit in this many bytes.
    fn size(&self) -> usize {
        (self.n().bits() + 7) / 8
    }
}
