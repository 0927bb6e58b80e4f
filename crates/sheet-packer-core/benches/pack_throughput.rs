use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use sheet_packer_core::prelude::*;

fn generate_specs(count: usize, min_size: f64, max_size: f64) -> Vec<DesignSpec> {
    use rand::Rng;
    let mut rng = rand::thread_rng();
    (0..count)
        .map(|i| {
            let w = rng.gen_range(min_size..=max_size);
            let h = rng.gen_range(min_size..=max_size);
            DesignSpec::new(format!("d{}", i), format!("design {}", i), w, h, 1)
        })
        .collect()
}

fn bench_pack(c: &mut Criterion) {
    let mut group = c.benchmark_group("pack");

    for count in [50, 100, 200, 400] {
        let specs = generate_specs(count, 16.0, 64.0);

        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("skyline", count), &specs, |b, specs| {
            b.iter(|| {
                let cfg = SheetConfig::builder(512.0).spacing(1.0).build();
                black_box(pack(specs, &cfg))
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_pack);
criterion_main!(benches);
