// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Benchmarks for the safety check and request evaluation.

use allocation_state::AllocationState;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Builds a safe state where consumers can only finish in reverse index
/// order, so every pass scans past all unfinished consumers.
///
/// Consumer `i` holds one unit of each kind and needs `n - i` more; the pool
/// starts with one free unit, so only the last consumer can go first.
fn reverse_chain(n: usize, r: usize) -> AllocationState {
    let total = vec![1; r];
    let max_demand = (0..n).map(|i| vec![(n - i) as u32 + 1; r]).collect();
    let allocated = (0..n).map(|_| vec![1; r]).collect();
    AllocationState::new(total, max_demand, allocated)
        .unwrap_or_else(|e| panic!("benchmark state is well-formed: {e}"))
}

fn bench_safety_check(c: &mut Criterion) {
    let mut group = c.benchmark_group("safety_check");
    for n in [8, 64, 256] {
        let state = reverse_chain(n, 4);
        group.bench_with_input(BenchmarkId::from_parameter(n), &state, |b, state| {
            b.iter(|| bankers::safety_check(black_box(state)))
        });
    }
    group.finish();
}

fn bench_request(c: &mut Criterion) {
    let state = reverse_chain(64, 4);
    c.bench_function("request_resources/64", |b| {
        b.iter_batched(
            || state.clone(),
            |mut s| bankers::request_resources(&mut s, 0, black_box(&[1u32, 1, 1, 1][..])),
            criterion::BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_safety_check, bench_request);
criterion_main!(benches);
