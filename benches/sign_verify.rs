//! Sign and verify benchmarks for every built-in signer
//!
//! Compares the cost of the three families and of the digest size within
//! each family. Verification runs the full pipeline: parse, algorithm
//! binding, signature and claims.

use criterion::{Criterion, criterion_group, criterion_main};
use jwtseal::*;
use std::hint::black_box;

const SECRET: &[u8] = b"benchmark-secret-key-with-enough-entropy";
const RSA_PRIVATE: &[u8] = include_bytes!("../tests/fixtures/rsa2048_private.pem");
const RSA_PUBLIC: &[u8] = include_bytes!("../tests/fixtures/rsa2048_public.pem");
const EC_P256_PRIVATE: &[u8] = include_bytes!("../tests/fixtures/ec_p256_private.pem");
const EC_P256_PUBLIC: &[u8] = include_bytes!("../tests/fixtures/ec_p256_public.pem");
const EC_P384_PRIVATE: &[u8] = include_bytes!("../tests/fixtures/ec_p384_private.pem");
const EC_P384_PUBLIC: &[u8] = include_bytes!("../tests/fixtures/ec_p384_public.pem");
const EC_P521_PRIVATE: &[u8] = include_bytes!("../tests/fixtures/ec_p521_private.pem");
const EC_P521_PUBLIC: &[u8] = include_bytes!("../tests/fixtures/ec_p521_public.pem");

fn key_pairs() -> [(Signer, &'static [u8], &'static [u8]); 9] {
    [
        (HS256, SECRET, SECRET),
        (HS384, SECRET, SECRET),
        (HS512, SECRET, SECRET),
        (RS256, RSA_PRIVATE, RSA_PUBLIC),
        (RS384, RSA_PRIVATE, RSA_PUBLIC),
        (RS512, RSA_PRIVATE, RSA_PUBLIC),
        (ES256, EC_P256_PRIVATE, EC_P256_PUBLIC),
        (ES384, EC_P384_PRIVATE, EC_P384_PUBLIC),
        (ES512, EC_P521_PRIVATE, EC_P521_PUBLIC),
    ]
}

fn sample_token() -> Token {
    let now = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_secs() as i64;

    let mut token = Token::new();
    token.insert_claim("iss", "https://example.com").unwrap();
    token.insert_claim("sub", "user123").unwrap();
    token.insert_claim("iat", now).unwrap();
    token.insert_claim("exp", now + 3600).unwrap();
    token
}

fn bench_sign(c: &mut Criterion) {
    let mut group = c.benchmark_group("sign");

    for (signer, signing_key, _) in key_pairs() {
        let token = sample_token();
        group.bench_function(signer.name(), |b| {
            b.iter(|| {
                let mut token = token.clone();
                black_box(token.sign(&signer, signing_key).unwrap())
            });
        });
    }

    group.finish();
}

fn bench_verify(c: &mut Criterion) {
    let mut group = c.benchmark_group("verify");

    for (signer, signing_key, verification_key) in key_pairs() {
        let compact = sample_token().sign(&signer, signing_key).unwrap();
        group.bench_function(signer.name(), |b| {
            b.iter(|| black_box(parse(&signer, black_box(&compact), verification_key).unwrap()));
        });
    }

    group.finish();
}

fn bench_reject(c: &mut Criterion) {
    let mut group = c.benchmark_group("reject");

    // Header mismatch must fail before any cryptography
    let compact = sample_token().sign(&RS256, RSA_PRIVATE).unwrap();
    group.bench_function("alg_mismatch", |b| {
        b.iter(|| black_box(parse(&ES256, black_box(&compact), EC_P256_PUBLIC).is_err()));
    });

    let validator = TokenValidator::new()
        .signer(RS256)
        .key(RSA_PUBLIC)
        .build();
    let (input, _) = compact.rsplit_once('.').unwrap();
    let tampered = format!("{input}.{}", utils::base64url::encode([0u8; 256]));
    group.bench_function("bad_signature", |b| {
        b.iter(|| black_box(validator.verify(black_box(&tampered)).is_err()));
    });

    group.finish();
}

criterion_group!(benches, bench_sign, bench_verify, bench_reject);
criterion_main!(benches);
