use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use lazyseq::{combinations, group_by, pack, permutations, product, tee, to_vec};

fn bench_permutations(c: &mut Criterion) {
    let sizes = [6, 8, 10];
    let mut group = c.benchmark_group("permutations");

    for n in sizes.iter() {
        let pool: Vec<u32> = (0..*n).collect();

        group.bench_with_input(BenchmarkId::new("r=3", n), &pool, |b, pool| {
            b.iter(|| {
                let count = permutations(black_box(pool.clone()), 3).count();
                black_box(count)
            });
        });

        group.bench_with_input(BenchmarkId::new("full", n), &pool, |b, pool| {
            b.iter(|| {
                let count = permutations(black_box(pool.clone()), pool.len()).count();
                black_box(count)
            });
        });
    }

    group.finish();
}

fn bench_combinations(c: &mut Criterion) {
    let sizes = [10, 15, 20];
    let mut group = c.benchmark_group("combinations");

    for n in sizes.iter() {
        let pool: Vec<u32> = (0..*n).collect();

        group.bench_with_input(BenchmarkId::new("half", n), &pool, |b, pool| {
            b.iter(|| {
                let count = combinations(black_box(pool.clone()), pool.len() / 2).count();
                black_box(count)
            });
        });
    }

    group.finish();
}

fn bench_product(c: &mut Criterion) {
    let arities = [2, 3, 4];
    let mut group = c.benchmark_group("product");

    for arity in arities.iter() {
        let pools: Vec<Vec<u32>> = (0..*arity).map(|_| (0..12).collect()).collect();

        group.bench_with_input(BenchmarkId::new("pools_of_12", arity), &pools, |b, pools| {
            b.iter(|| {
                let count = product(black_box(pools.clone())).count();
                black_box(count)
            });
        });
    }

    group.finish();
}

fn bench_grouping(c: &mut Criterion) {
    let sizes = [1_000, 10_000, 100_000];
    let mut group = c.benchmark_group("grouping");

    for size in sizes.iter() {
        // Runs of growing length: 1, 2, 3, ... over a small alphabet.
        let mut data = Vec::with_capacity(*size);
        let mut run = 1usize;
        while data.len() < *size {
            let symbol = (run % 26) as u8 + b'a';
            data.extend(std::iter::repeat(symbol).take(run));
            run += 1;
        }
        data.truncate(*size);

        group.bench_with_input(BenchmarkId::new("pack", size), &data, |b, data| {
            b.iter(|| {
                let runs = to_vec(pack(black_box(data.clone())));
                black_box(runs)
            });
        });

        group.bench_with_input(BenchmarkId::new("group_by_count", size), &data, |b, data| {
            b.iter(|| {
                let count = group_by(black_box(data.clone()), |x| *x)
                    .map(|(_, run)| run.count())
                    .sum::<usize>();
                black_box(count)
            });
        });
    }

    group.finish();
}

fn bench_tee(c: &mut Criterion) {
    let sizes = [1_000, 10_000, 100_000];
    let mut group = c.benchmark_group("tee");

    for size in sizes.iter() {
        let data: Vec<u32> = (0..*size as u32).collect();

        group.bench_with_input(BenchmarkId::new("two_branches", size), &data, |b, data| {
            b.iter(|| {
                let mut branches = tee(black_box(data.clone()), 2);
                let b1 = branches.pop().expect("two branches");
                let b0 = branches.pop().expect("two branches");
                black_box((b0.count(), b1.count()))
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_permutations,
    bench_combinations,
    bench_product,
    bench_grouping,
    bench_tee
);
criterion_main!(benches);
