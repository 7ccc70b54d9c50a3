// In arrayprep/benches/sort_bench.rs

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use arrayprep::generator::generate_values;
use arrayprep::sorting::{self, SortMethod};

// --- Benchmark Suite ---

const BENCH_DATA_SIZE: usize = 2_000;
const BENCH_MAX_VALUE: u32 = 10_000;

fn bench_sorts(c: &mut Criterion) {
    // --- Setup Data ---
    let mut rng = StdRng::seed_from_u64(0xA11CE);
    let data = generate_values(BENCH_DATA_SIZE, BENCH_MAX_VALUE, &mut rng);

    // --- Create a Benchmark Group ---
    let mut group = c.benchmark_group("Sorting Engine Comparison");
    group.throughput(criterion::Throughput::Elements(BENCH_DATA_SIZE as u64));

    for (label, method) in [
        ("Selection", SortMethod::Selection),
        ("Insertion", SortMethod::Insertion),
        ("Heap", SortMethod::Heap),
        ("Counting", SortMethod::Counting),
        ("Radix", SortMethod::Radix),
    ] {
        group.bench_function(label, |b| {
            b.iter_batched(
                || data.clone(),
                |mut values| {
                    sorting::sort(method, &mut values).unwrap();
                    black_box(values)
                },
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

// These two lines generate the main function and register the benchmark group.
criterion_group!(benches, bench_sorts);
criterion_main!(benches);
