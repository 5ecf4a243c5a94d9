#![feature(test)]

extern crate test;

use rand_chacha::{rand_core::SeedableRng, ChaCha8Rng};
use test::Bencher;
use textbook_rsa::{decrypt, encrypt, BigUint, KeyGenParams, KeyPair};

fn get_key() -> KeyPair {
    let mut rng = ChaCha8Rng::from_seed([42; 32]);
    KeyPair::generate(&mut rng, &KeyGenParams::with_bits(2048).unwrap()).unwrap()
}

#[bench]
fn bench_rsa_1024_gen_key(b: &mut Bencher) {
    let mut rng = ChaCha8Rng::from_seed([42; 32]);
    let params = KeyGenParams::with_bits(1024).unwrap();

    b.iter(|| {
        let key = KeyPair::generate(&mut rng, &params).unwrap();
        test::black_box(key);
    });
}

#[bench]
fn bench_rsa_2048_gen_key(b: &mut Bencher) {
    let mut rng = ChaCha8Rng::from_seed([42; 32]);
    let params = KeyGenParams::with_bits(2048).unwrap();

    b.iter(|| {
        let key = KeyPair::generate(&mut rng, &params).unwrap();
        test::black_box(key);
    });
}

#[bench]
fn bench_rsa_2048_encrypt(b: &mut Bencher) {
    let key = get_key();
    let m = BigUint::parse_bytes(b"123456789012345678901234567890", 10).unwrap();

    b.iter(|| {
        let res = encrypt(&m, key.public_key()).unwrap();
        test::black_box(res);
    });
}

#[bench]
fn bench_rsa_2048_decrypt(b: &mut Bencher) {
    let key = get_key();
    let m = BigUint::parse_bytes(b"123456789012345678901234567890", 10).unwrap();
    let c = encrypt(&m, key.public_key()).unwrap();

    b.iter(|| {
        let res = decrypt(&c, key.private_key()).unwrap();
        test::black_box(res);
    });
}
