use std::sync::Arc;

use chrono::{Duration, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use plot_sync::{classify, AlignedData, PlotConfig, PlotInputs, ScaleSpec, SeriesSpec, TimeRange};

fn dataset(n: usize) -> Arc<AlignedData> {
    let x: Vec<f64> = (0..n).map(|i| i as f64).collect();
    let y: Vec<f64> = (0..n).map(|i| (i as f64 * 0.01).sin() * 10.0).collect();
    Arc::new(AlignedData::try_new(x, vec![y]).expect("aligned columns"))
}

// Change detection must stay O(1) in dataset size: only revisions and window
// bounds are compared, never column contents.
fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");
    for &n in &[1_000usize, 1_000_000usize] {
        let data = dataset(n);
        let config = Arc::new(
            PlotConfig::builder()
                .scale(ScaleSpec::time_x())
                .series(SeriesSpec::line("signal"))
                .build(),
        );
        let t0 = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
        let prev = PlotInputs::new(
            800,
            400,
            Arc::clone(&data),
            Arc::clone(&config),
            TimeRange::new(t0, t0 + Duration::seconds(60)),
        );

        let rebuilt_window = PlotInputs {
            time_range: TimeRange::new(t0, t0 + Duration::seconds(60)),
            ..prev.clone()
        };
        group.bench_function(format!("noop_n{n}"), |b| {
            b.iter(|| black_box(classify(&prev, &rebuilt_window)));
        });

        let moved_window = PlotInputs {
            time_range: TimeRange::new(t0 + Duration::seconds(60), t0 + Duration::seconds(120)),
            ..prev.clone()
        };
        group.bench_function(format!("rescale_n{n}"), |b| {
            b.iter(|| black_box(classify(&prev, &moved_window)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_classify);
criterion_main!(benches);
