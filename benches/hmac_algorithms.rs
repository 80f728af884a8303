//! HMAC algorithm benchmarks (HS256, HS384, HS512)
//!
//! Compares the hash functions and measures what the keyed hasher pool saves
//! over building a fresh MAC per call.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use hmac::{Hmac, Mac};
use jwtkit::algorithm::hmac::HmacSha;
use jwtkit::*;
use sha2::Sha256;

const SECRET: &[u8] = b"test-secret-key-with-some-length";
const SIGNING_INPUT: &[u8] = b"eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.eyJzdWIiOiJ1c2VyMTIzIiwiaXNzIjoiaHR0cHM6Ly9leGFtcGxlLmNvbSJ9";

const ALGORITHMS: [Algorithm; 3] = [Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];

fn bench_hmac_signing(c: &mut Criterion) {
    let mut group = c.benchmark_group("hmac_signing");

    for alg in ALGORITHMS {
        let hmac = HmacSha::new(alg, SECRET).unwrap();
        group.bench_function(alg.as_str(), |b| {
            b.iter(|| hmac.sign(black_box(SIGNING_INPUT)).unwrap());
        });
    }

    group.finish();
}

fn bench_hmac_verification(c: &mut Criterion) {
    let mut group = c.benchmark_group("hmac_verification");

    for alg in ALGORITHMS {
        let hmac = HmacSha::new(alg, SECRET).unwrap();
        let signature = hmac.sign(SIGNING_INPUT).unwrap();

        group.bench_function(alg.as_str(), |b| {
            b.iter(|| {
                let valid = hmac
                    .verify(black_box(SIGNING_INPUT), black_box(&signature))
                    .unwrap();
                assert!(valid);
            });
        });
    }

    group.finish();
}

fn bench_pool_versus_fresh_mac(c: &mut Criterion) {
    let mut group = c.benchmark_group("hmac_pool");
    let hmac = HmacSha::new(Algorithm::HS256, SECRET).unwrap();

    group.bench_function("pooled", |b| {
        b.iter(|| hmac.sign(black_box(SIGNING_INPUT)).unwrap());
    });

    group.bench_function("fresh", |b| {
        b.iter(|| {
            let mut mac = Hmac::<Sha256>::new_from_slice(black_box(SECRET)).unwrap();
            mac.update(black_box(SIGNING_INPUT));
            mac.finalize().into_bytes()
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_hmac_signing,
    bench_hmac_verification,
    bench_pool_versus_fresh_mac
);
criterion_main!(benches);
