use criterion::{black_box, BenchmarkId, Criterion, criterion_group, criterion_main, Throughput};

use common::Element;

mod common;

/// indirect sum like the benchmark binary - values[indices[i]]
fn indirect_sum(values: &[Element], indices: &[Element]) -> u64 {
    indices
        .iter()
        .map(|&index| u64::from(values[index as usize]))
        .sum()
}

/// plain walk without the index buffer - shows the cost of the indirection itself
fn direct_sum(values: &[Element]) -> u64 {
    values.iter().map(|&value| u64::from(value)).sum()
}

fn access_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Access");

    for &size in &common::SIZE_ARRAY {
        // generated outside of the measured closures
        let values = common::create_identity(size);
        let sequential = common::create_identity(size);
        let random = common::create_random_indices(size);

        group.throughput(Throughput::Elements(size as u64));

        /// Generates benchmark test units for an index buffer
        ///
        /// # Examples
        ///
        /// ```
        /// gen_bench!("Test-Method", indices);
        /// ```
        macro_rules! gen_bench {
            ($name:literal, $indices:ident) => {
                let id = BenchmarkId::new($name, size);
                group.bench_with_input(id, &(&values, &$indices), |b, (values, indices)| {
                    b.iter(|| indirect_sum(black_box(values), black_box(indices)));
                });
            };
        }

        gen_bench!("Sequential", sequential);
        gen_bench!("Random", random);

        let id = BenchmarkId::new("Direct", size);
        group.bench_with_input(id, &values, |b, values| {
            b.iter(|| direct_sum(black_box(values)));
        });
    }

    // recommended but not necessary
    group.finish()
}

// generate main method
criterion_group!(benches, access_benchmark);
criterion_main!(benches);
