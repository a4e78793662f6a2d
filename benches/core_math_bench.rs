use column_chart::api::{ChartEngine, ChartEngineConfig, ChartInput};
use column_chart::core::{LinearScale, Series, SeriesLengthPolicy, transform_series};
use column_chart::render::RecordingScene;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn sample_series(series_count: usize, points: usize) -> Vec<Series> {
    (0..series_count)
        .map(|s| {
            let data = (0..points)
                .map(|i| ((i * 7 + s * 13) % 97) as f64 + 0.5)
                .collect();
            Series::new(format!("series-{s}"), data)
        })
        .collect()
}

fn bench_linear_scale_round_trip(c: &mut Criterion) {
    let scale = LinearScale::new((0.0, 10_000.0), (1_080.0, 0.0)).expect("valid scale");

    c.bench_function("linear_scale_round_trip", |b| {
        b.iter(|| {
            let px = scale.map(black_box(4_321.123));
            let _ = scale.invert(px);
        })
    });
}

fn bench_value_ticks(c: &mut Criterion) {
    let scale = LinearScale::new((0.0, 5.25), (430.0, 20.0)).expect("valid scale");

    c.bench_function("value_ticks_10", |b| {
        b.iter(|| {
            let _ = scale.ticks(black_box(10));
        })
    });
}

fn bench_transform_5x1k(c: &mut Criterion) {
    let series = sample_series(5, 1_000);
    let categories: Vec<String> = (0..1_000).map(|i| format!("c{i}")).collect();

    c.bench_function("transform_series_5x1k", |b| {
        b.iter(|| {
            let _ = transform_series(
                black_box(&series),
                black_box(&categories),
                SeriesLengthPolicy::ZeroFill,
            )
            .expect("transform");
        })
    });
}

fn bench_toggle_series_5x100(c: &mut Criterion) {
    let mut engine = ChartEngine::new(
        RecordingScene::new(),
        ChartInput::new(sample_series(5, 100)),
        ChartEngineConfig::default(),
    )
    .expect("engine init");

    c.bench_function("toggle_series_5x100", |b| {
        b.iter(|| {
            engine.toggle_series(black_box(2)).expect("toggle");
            engine.scene_mut().clear_operations();
        })
    });
}

criterion_group!(
    benches,
    bench_linear_scale_round_trip,
    bench_value_ticks,
    bench_transform_5x1k,
    bench_toggle_series_5x100
);
criterion_main!(benches);
