//! Criterion benchmarks for the instrumented sorting catalog.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::Rng;
use sortty::dataset::{paint, Bar, Preset};
use sortty::instrument::{Probe, StepCounter};
use sortty::sorting::Algorithm;

/// Generate random bars of given size
fn generate_random_data(size: usize) -> Vec<Bar> {
    let mut rng = rand::thread_rng();
    let values: Vec<u32> = (0..size).map(|_| rng.gen_range(0..10_000)).collect();
    paint(&values)
}

/// Every algorithm on the ten-bar presets the UI uses
fn bench_presets(c: &mut Criterion) {
    let mut group = c.benchmark_group("Preset");

    for preset in Preset::ALL {
        let data = preset.generate(&mut rand::thread_rng());
        for algorithm in Algorithm::ALL {
            group.bench_with_input(
                BenchmarkId::new(algorithm.name(), preset.name()),
                &data,
                |b, data| {
                    b.iter_batched(
                        || data.clone(),
                        |mut data| {
                            let mut probe = Probe::new(StepCounter::new());
                            algorithm.sort(black_box(&mut data), 0, 9, &mut probe);
                            data
                        },
                        criterion::BatchSize::SmallInput,
                    )
                },
            );
        }
    }

    group.finish();
}

/// Scaling on larger random inputs
fn bench_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("Random");

    for size in [64usize, 256, 1024] {
        group.throughput(Throughput::Elements(size as u64));
        for algorithm in Algorithm::ALL {
            group.bench_with_input(BenchmarkId::new(algorithm.name(), size), &size, |b, &size| {
                b.iter_batched(
                    || generate_random_data(size),
                    |mut data| {
                        let mut probe = Probe::new(StepCounter::new());
                        algorithm.sort(black_box(&mut data), 0, size - 1, &mut probe);
                        data
                    },
                    criterion::BatchSize::LargeInput,
                )
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_presets, bench_scaling);
criterion_main!(benches);
