use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use distance_transform::{DistanceKind, DistanceTransform, Raster};

/// Sparse background grid with a few blobs, `rows x cols`.
fn synthetic(rows: usize, cols: usize) -> Raster<u8> {
    Raster::from_fn(rows, cols, |r, c| {
        let grid = r % 97 == 13 && c % 89 == 7;
        let blob = (r as i64 - rows as i64 / 3).pow(2) + (c as i64 - cols as i64 / 2).pow(2) < 400;
        if grid || blob {
            0
        } else {
            255
        }
    })
}

fn bench_kinds(c: &mut Criterion) {
    let src = synthetic(512, 640);
    let view = src.view();

    let mut group = c.benchmark_group("distance_transform_512x640");
    for kind in DistanceKind::ALL {
        let dt = DistanceTransform::with_kind(kind);
        group.bench_with_input(BenchmarkId::from_parameter(kind), &dt, |b, dt| {
            b.iter(|| {
                let out = dt.apply(black_box(&view)).expect("distance transform");
                black_box(out);
            });
        });
    }
    group.finish();
}

fn bench_in_place_u8(c: &mut Criterion) {
    let src = synthetic(1024, 1280);
    let dt = DistanceTransform::with_kind(DistanceKind::Euclidean);

    c.bench_function("euclidean_in_place_u8_1024x1280", |b| {
        b.iter_batched(
            || src.clone(),
            |mut raster| {
                dt.apply_in_place(&mut raster).expect("distance transform");
                black_box(raster);
            },
            criterion::BatchSize::LargeInput,
        );
    });
}

criterion_group!(benches, bench_kinds, bench_in_place_u8);
criterion_main!(benches);
