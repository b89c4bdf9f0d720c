// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
//! Benchmark: vector normalization and 3×3 inversion.
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lockstep_geom::{Mat33, Vec2, Vec3};

fn bench_vectors(c: &mut Criterion) {
    let v2 = Vec2::new(3, 4);
    let v3 = Vec3::new(2, 3, 6);
    c.bench_function("vec2_normalize", |b| b.iter(|| black_box(&v2).normalize()));
    c.bench_function("vec3_normalize", |b| b.iter(|| black_box(&v3).normalize()));
    c.bench_function("vec2_angle_to", |b| {
        b.iter(|| black_box(&v2).angle_to(&Vec2::unit_y()));
    });
}

fn bench_matrices(c: &mut Criterion) {
    let m = Mat33::from_int_rows([[1, 2, 3], [0, 1, 4], [5, 6, 0]]);
    c.bench_function("mat33_mul", |b| b.iter(|| black_box(&m) * black_box(&m)));
    c.bench_function("mat33_inverse", |b| b.iter(|| black_box(&m).inverse()));
}

criterion_group!(benches, bench_vectors, bench_matrices);
criterion_main!(benches);
