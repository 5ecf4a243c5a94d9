#![cfg_attr(not(test), no_std)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

//! # Usage
//!
//! ```
//! use textbook_rsa::{BigUint, KeyGenParams, KeyPair};
//!
//! let mut rng = rand::thread_rng(); // rand@0.8
//!
//! let params = KeyGenParams::with_bits(1024).expect("valid parameters");
//! let pair = KeyPair::generate(&mut rng, &params).expect("failed to generate a key");
//!
//! // Encrypt
//! let message = BigUint::from(563u32);
//! let ciphertext = pair.public_key().encrypt(&message).expect("failed to encrypt");
//! assert_ne!(message, ciphertext);
//!
//! // Decrypt
//! let plaintext = pair.private_key().decrypt(&ciphertext).expect("failed to decrypt");
//! assert_eq!(message, plaintext);
//! ```
//!
//! # Key convention
//!
//! [`PublicKey`] always holds the encryption exponent `e` and [`PrivateKey`]
//! the decryption exponent `d`. Because `e·d ≡ 1 (mod (p-1)(q-1))`, the roles
//! can be swapped: [`encrypt`] and [`decrypt`] accept any [`KeyParts`], so a
//! value exponentiated with the private key is recovered with the public one.
//!
//! # Testing with small primes
//!
//! [`KeyGenParams::with_seed_range`] accepts arbitrarily small bounds, which
//! keeps tests fast. [`sieve::primes_in_range`] lists every prime in a small
//! range exactly and can be used to cross-check [`is_probable_prime`].
//!
//! ```
//! use textbook_rsa::{decrypt, encrypt, generate_key_pair, BigUint, KeyGenParams};
//! use rand_chacha::{rand_core::SeedableRng, ChaCha8Rng};
//!
//! let mut rng = ChaCha8Rng::from_seed([42; 32]);
//! let params = KeyGenParams::default()
//!     .with_seed_range(BigUint::from(2500u32), BigUint::from(12500u32))
//!     .expect("valid range");
//! let (public_key, private_key) = generate_key_pair(&mut rng, &params).expect("key pair");
//!
//! let message = BigUint::from(563u32);
//! let ciphertext = encrypt(&message, &private_key).expect("in range");
//! assert_eq!(decrypt(&ciphertext, &public_key).expect("in range"), message);
//! ```

#[macro_use]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub use num_bigint::BigUint;
pub use rand_core;

mod algorithms;
pub mod errors;
pub mod math;
pub mod params;
pub mod prime;
pub mod prime_rand;
pub mod sieve;
pub mod traits;

mod key;

pub use crate::{
    algorithms::rsa::{decrypt, encrypt},
    errors::{Error, Result},
    key::{generate_key_pair, KeyPair, PrivateKey, PublicKey},
    math::{mod_inverse, mod_pow},
    params::{KeyGenParams, PublicExponent, SeedRange},
    prime::is_probable_prime,
    prime_rand::next_prime_from,
    traits::KeyParts,
};
