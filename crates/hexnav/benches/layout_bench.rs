//! Criterion benchmarks for the menu geometry.
//! Results land under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use hexnav::clip::{shape_path, ClipPathCache, STYLE_COUNT};
use hexnav::grid::{layout, GridCfg, HexCell, TileSpec};
use hexnav::path::hex_path;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_tiles(n: usize, seed: u64) -> Vec<TileSpec> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            let cell = HexCell::new(rng.gen_range(0..32), rng.gen_range(0..32));
            if rng.gen_bool(0.2) {
                TileSpec::half(cell.column, cell.row, 180.0)
            } else {
                TileSpec::full(cell.column, cell.row, "")
            }
        })
        .collect()
}

fn bench_paths(c: &mut Criterion) {
    let mut group = c.benchmark_group("paths");
    for half in [false, true] {
        group.bench_with_input(BenchmarkId::new("hex_path", half), &half, |b, &half| {
            b.iter(|| hex_path(50.0, 6.0, half))
        });
    }
    group.bench_function("shape_path_all_styles", |b| {
        b.iter(|| {
            for style in 0..STYLE_COUNT {
                let _ = shape_path(style, 1.6);
            }
        })
    });
    group.bench_function("clip_cache_hits", |b| {
        let mut cache = ClipPathCache::new();
        b.iter(|| {
            for style in 0..STYLE_COUNT {
                let _ = cache.get(style, 320.0, 200.0);
            }
        })
    });
    group.finish();
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout");
    let cfg = GridCfg::new(7, 80.0).unwrap();
    for &n in &[12usize, 100, 1000] {
        group.bench_with_input(BenchmarkId::new("layout", n), &n, |b, &n| {
            b.iter_batched(
                || random_tiles(n, 43),
                |tiles| {
                    let _placed = layout(&tiles, &cfg);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_paths, bench_layout);
criterion_main!(benches);
