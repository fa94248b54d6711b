//! Criterion benchmarks for the orientation sweep and the click/render loop.
//! Focus sizes: n in {1_000, 10_000, 100_000} points.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use planelab::browser::ClickEvent;
use planelab::lab::{sample_points, LabCfg, SampleKind, SampleParams, Sweep};
use planelab::prelude::*;

fn bench_sweep(c: &mut Criterion) {
    let cfg = LabCfg::default();
    let mut group = c.benchmark_group("sweep");
    for &n in &[1_000usize, 10_000, 100_000] {
        let params = SampleParams {
            count: n,
            extent: 1000.0,
        };
        group.bench_with_input(BenchmarkId::new("square", n), &n, |b, _| {
            b.iter_batched(
                || sample_points(SampleKind::Square, params, 43).unwrap(),
                |pts| {
                    let _s = Sweep::run(pts, &cfg);
                },
                BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

fn bench_click_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("browser");
    for &n in &[1_000usize, 10_000] {
        let params = SampleParams {
            count: n,
            extent: 1.0,
        };
        group.bench_with_input(BenchmarkId::new("point_click", n), &n, |b, _| {
            b.iter_batched(
                || {
                    let pts = sample_points(SampleKind::Square, params, 44).unwrap();
                    let mut browser = SceneBrowser::single(
                        vec![PointSet::new(pts)],
                        vec![],
                        Canvas::default(),
                        PlotCfg::default(),
                    )
                    .unwrap();
                    browser.trigger(Control::AddPoint).unwrap();
                    browser
                },
                |mut browser| {
                    browser.on_click(ClickEvent::inside(0.1, 0.2)).unwrap();
                },
                BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_sweep, bench_click_render);
criterion_main!(benches);
