use criterion::{criterion_group, criterion_main, Criterion, BatchSize, black_box};

use glam::Vec2;

use swathe::grass::{GrassField, GrassFieldConfig};
use swathe::terrain::detail::DetailSnapshot;
use swathe::terrain::generator::{DetailFieldGenerator, DetailFieldParams};

fn test_snapshot(size: u32) -> DetailSnapshot {
    let generator = DetailFieldGenerator::new(DetailFieldParams::default());
    generator
        .generate_snapshot(size * 4, size * 4, 2, size, size)
        .expect("snapshot")
}

fn test_field(size: u32) -> GrassField {
    GrassField::from_details(&test_snapshot(size), GrassFieldConfig::default()).expect("field")
}

fn bench_field_build_128(c: &mut Criterion) {
    let snapshot = test_snapshot(128);

    c.bench_function("field_build_128", |b| {
        b.iter(|| {
            GrassField::from_details(black_box(&snapshot), GrassFieldConfig::default())
        });
    });
}

fn bench_field_build_512(c: &mut Criterion) {
    let snapshot = test_snapshot(512);

    c.bench_function("field_build_512", |b| {
        b.iter(|| {
            GrassField::from_details(black_box(&snapshot), GrassFieldConfig::default())
        });
    });
}

fn bench_cut_sweep(c: &mut Criterion) {
    // Moving center: most calls hit a mix of fresh and already-cut cells,
    // measuring the bounding-box scan rather than the commit.
    let mut field = test_field(256);

    c.bench_function("cut_sweep_256", |b| {
        let mut frame = 0u32;
        b.iter(|| {
            frame += 1;
            let center = Vec2::new(
                128.0 + (frame as f32 * 0.21).sin() * 100.0,
                128.0 + (frame as f32 * 0.17).cos() * 100.0,
            );
            black_box(field.cut(black_box(center), black_box(2.0)));
        });
    });
}

fn bench_cut_fresh(c: &mut Criterion) {
    // Every iteration cuts untouched grass, including the threshold commit.
    let field = test_field(256);

    c.bench_function("cut_fresh_256", |b| {
        b.iter_batched(
            || field.clone(),
            |mut field| {
                black_box(field.cut(Vec2::new(128.0, 128.0), 4.0));
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_commit_512(c: &mut Criterion) {
    let mut field = test_field(512);
    field.cut(Vec2::new(256.0, 256.0), 8.0);

    c.bench_function("commit_512", |b| {
        b.iter(|| {
            field.commit();
        });
    });
}

criterion_group!(
    benches,
    bench_field_build_128,
    bench_field_build_512,
    bench_cut_sweep,
    bench_cut_fresh,
    bench_commit_512,
);
criterion_main!(benches);
