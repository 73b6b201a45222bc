use criterion::{criterion_group, criterion_main, Criterion};
use num_bigint::BigUint;
use zkproof_core::arith::{mod_inverse, mod_pow};
use zkproof_core::ProofEngine;

fn bench_proofs(c: &mut Criterion) {
    let engine = ProofEngine::standard();
    let params = engine.params();
    let exponent = params.group_order() - 12345u32;

    c.bench_function("mod_pow_256bit", |b| {
        b.iter(|| mod_pow(params.generator(), &exponent, params.modulus()))
    });

    let element = mod_pow(params.generator(), &exponent, params.modulus());
    c.bench_function("mod_inverse_256bit", |b| {
        b.iter(|| mod_inverse(&element, params.modulus()))
    });

    let (value, lower, upper) = (
        BigUint::from(75_000u32),
        BigUint::from(50_000u32),
        BigUint::from(100_000u32),
    );
    c.bench_function("create_range_proof", |b| {
        b.iter(|| engine.create_range_proof(&value, &lower, &upper))
    });

    let proof = engine
        .create_range_proof(&value, &lower, &upper)
        .expect("75000 is in range");
    c.bench_function("verify_range_proof", |b| {
        b.iter(|| engine.verify_range_proof(&proof, &lower, &upper))
    });
}

criterion_group!(benches, bench_proofs);
criterion_main!(benches);
