use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use parmatmul::{Matrix, Multiplier, RowParallel, Sequential};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn bench_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("multiply");
    let mut rng = StdRng::seed_from_u64(7);

    for size in [64usize, 128, 256] {
        let a = Matrix::random_with_rng(size, size, &mut rng).unwrap();
        let b = Matrix::random_with_rng(size, size, &mut rng).unwrap();

        group.bench_with_input(BenchmarkId::new("sequential", size), &size, |bench, _| {
            bench.iter(|| Sequential.multiply(black_box(&a), black_box(&b)).unwrap())
        });

        for workers in [2usize, 4, 8] {
            let parallel = RowParallel::with_workers(workers).unwrap();
            group.bench_with_input(
                BenchmarkId::new(format!("parallel_{}w", workers), size),
                &size,
                |bench, _| bench.iter(|| parallel.multiply(black_box(&a), black_box(&b)).unwrap()),
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_strategies);
criterion_main!(benches);
