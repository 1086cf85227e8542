//! Benchmark: same-list and cross-list moves on boards of increasing size.
//!
//! Run with: `cargo bench -p sortboard-engine --bench reorder_bench`

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use sortboard_core::DropSide;
use sortboard_engine::{MoveRequest, apply_move, reorder};

fn board(lists: usize, len: usize) -> Vec<Vec<u64>> {
    (0..lists)
        .map(|l| (0..len as u64).map(|i| (l as u64) << 32 | i).collect())
        .collect()
}

fn bench_same_list(c: &mut Criterion) {
    let mut group = c.benchmark_group("same_list_move");
    for len in [8usize, 64, 512] {
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, &len| {
            let mut lists = board(1, len);
            let forward = MoveRequest::within(0, 0, len - 1, DropSide::After);
            let backward = MoveRequest::within(0, len - 1, 0, DropSide::Before);
            b.iter(|| {
                apply_move(black_box(&mut lists), black_box(&forward)).ok();
                apply_move(black_box(&mut lists), black_box(&backward)).ok();
            });
        });
    }
    group.finish();
}

fn bench_cross_list_pure(c: &mut Criterion) {
    let mut group = c.benchmark_group("cross_list_reorder_pure");
    for len in [8usize, 64, 512] {
        let lists = board(3, len);
        let req = MoveRequest {
            source_list: 0,
            source_index: len / 2,
            target_list: 2,
            target_index: len / 3,
            side: DropSide::After,
        };
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, _| {
            b.iter(|| reorder(black_box(&lists), black_box(&req)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_same_list, bench_cross_list_pure);
criterion_main!(benches);
