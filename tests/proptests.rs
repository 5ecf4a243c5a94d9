//! Property-based tests.

use num_integer::Integer;
use num_traits::One;
use proptest::prelude::*;
use rand_chacha::ChaCha8Rng;
use rand_core::SeedableRng;
use textbook_rsa::{
    decrypt, encrypt, generate_key_pair, is_probable_prime, math::gcd, mod_inverse, BigUint,
    KeyGenParams, KeyParts, PrivateKey, PublicKey,
};

prop_compose! {
    // WARNING: do *NOT* copy and paste this code. It's insecure and optimized for test speed.
    fn key_pair()(seed in any::<[u8; 32]>()) -> (PublicKey, PrivateKey) {
        let mut rng = ChaCha8Rng::from_seed(seed);
        let params = KeyGenParams::with_bits(128).unwrap();
        generate_key_pair(&mut rng, &params).unwrap()
    }
}

proptest! {
    #[test]
    fn encrypt_decrypt_roundtrip((public, private) in key_pair(), msg in any::<u128>()) {
        let m = BigUint::from(msg) % public.n();
        let c = encrypt(&m, &public).unwrap();
        prop_assert_eq!(decrypt(&c, &private).unwrap(), m);
    }

    #[test]
    fn private_first_roundtrip((public, private) in key_pair(), msg in any::<u128>()) {
        let m = BigUint::from(msg) % private.n();
        let c = encrypt(&m, &private).unwrap();
        prop_assert_eq!(decrypt(&c, &public).unwrap(), m);
    }

    #[test]
    fn out_of_range_rejected((public, _private) in key_pair(), extra in any::<u64>()) {
        let m = public.n() + BigUint::from(extra);
        prop_assert!(encrypt(&m, &public).is_err());
    }

    #[test]
    fn inverse_correctness(a in 1u64.., m in 2u64..) {
        let a = BigUint::from(a % m);
        let m = BigUint::from(m);
        match mod_inverse(&a, &m) {
            Ok(d) => {
                prop_assert!(d < m);
                prop_assert!(((&a * &d) % &m).is_one());
            }
            Err(_) => prop_assert!(!gcd(&a, &m).is_one()),
        }
    }

    #[test]
    fn products_are_composite(seed in any::<[u8; 32]>(), a in 2u64..1 << 32, b in 2u64..1 << 32) {
        let mut rng = ChaCha8Rng::from_seed(seed);
        let n = BigUint::from(a) * BigUint::from(b);
        prop_assert!(!is_probable_prime(&mut rng, &n, 20));
    }

    #[test]
    fn even_numbers_are_composite(seed in any::<[u8; 32]>(), a in 2u64..) {
        let mut rng = ChaCha8Rng::from_seed(seed);
        let n = BigUint::from(a) * BigUint::from(2u32);
        prop_assert!(n.is_even());
        prop_assert!(!is_probable_prime(&mut rng, &n, 5));
    }
}
