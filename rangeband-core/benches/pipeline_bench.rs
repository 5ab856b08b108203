//! Criterion benchmarks for the slider hot paths.
//!
//! Benchmarks:
//! 1. Scale mapping (value↔percent round trip on both scales)
//! 2. Marker snapping across marker-list sizes
//! 3. The full drag pipeline (percent → value → snap → gate)
//! 4. Compact currency formatting

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rangeband_core::{compact_currency, Bounds, Markers, Scale, Selection, SliderConfig, SliderState};

// ── Helpers ──────────────────────────────────────────────────────────

/// `count` geometrically spaced values from `lo` to `hi`.
fn geometric_markers(lo: f64, hi: f64, count: usize) -> Vec<f64> {
    let step = (hi / lo).powf(1.0 / (count as f64 - 1.0));
    (0..count).map(|i| lo * step.powi(i as i32)).collect()
}

// ── 1. Scale Mapping ─────────────────────────────────────────────────

fn bench_scale_mapping(c: &mut Criterion) {
    let mut group = c.benchmark_group("scale_mapping");
    let bounds = Bounds::new(50_000.0, 50_000_000.0);

    for (name, scale) in [("linear", Scale::Linear), ("log", Scale::Log)] {
        group.bench_with_input(
            BenchmarkId::new("roundtrip_1000", name),
            &scale,
            |b, scale| {
                b.iter(|| {
                    for i in 0..1000 {
                        let v = 50_000.0 + f64::from(i) * 49_950.0;
                        let p = scale.percent_of(black_box(bounds), black_box(v));
                        black_box(scale.value_at(bounds, p));
                    }
                });
            },
        );
    }
    group.finish();
}

// ── 2. Marker Snapping ───────────────────────────────────────────────

fn bench_snap(c: &mut Criterion) {
    let mut group = c.benchmark_group("marker_snap");

    for &count in &[5usize, 10, 50, 200] {
        let markers = Markers::new(geometric_markers(10_000.0, 100_000_000.0, count)).unwrap();
        group.bench_with_input(BenchmarkId::new("snap_1000", count), &count, |b, _| {
            b.iter(|| {
                for i in 0..1000 {
                    let raw = 10_000.0 + f64::from(i) * 99_990.0;
                    black_box(markers.snap(black_box(raw)));
                }
            });
        });
    }
    group.finish();
}

// ── 3. Drag Pipeline ─────────────────────────────────────────────────

fn bench_drag_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("drag_pipeline");

    let config = SliderConfig::new(
        "Annual revenue",
        Bounds::new(50_000.0, 50_000_000.0),
        Scale::Log,
        Some(geometric_markers(50_000.0, 50_000_000.0, 10)),
        Selection::new(100_000.0, 10_000_000.0),
    )
    .expect("bench config is valid");

    // A pointer sweep across the whole track: accepts while below the high
    // thumb, rejections once the candidates try to cross it.
    group.bench_function("sweep_500_positions", |b| {
        b.iter(|| {
            let mut state = SliderState::new(config.clone());
            state.grab(0.0);
            for i in 0..500 {
                let percent = f64::from(i) * 0.2;
                black_box(state.drag_to(black_box(percent)));
            }
            state.release();
            black_box(&state);
        });
    });
    group.finish();
}

// ── 4. Formatting ────────────────────────────────────────────────────

fn bench_format(c: &mut Criterion) {
    let mut group = c.benchmark_group("format");

    let values = [
        0.0,
        500.0,
        12_345.0,
        50_000.0,
        250_000.0,
        999_999.0,
        1_000_000.0,
        2_500_000.0,
        50_000_000.0,
    ];
    group.bench_function("compact_currency_mixed", |b| {
        b.iter(|| {
            for &v in &values {
                black_box(compact_currency(black_box("€"), v));
            }
        });
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_scale_mapping,
    bench_snap,
    bench_drag_pipeline,
    bench_format,
);
criterion_main!(benches);
