use std::path::PathBuf;
use ttev_analysis::*;
use ttev_labels::Action;
use ttev_labels::Spin;
use ttev_scenario::Scenario;
use ttev_tables::Strategy;

criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        rendering_cached_serve_report,
        rendering_cached_spin_report,
        filtering_synthetic_table,
}

fn fixtures() -> API {
    API::from_dir(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../fixtures"))
}

fn rendering_cached_serve_report(c: &mut criterion::Criterion) {
    let api = fixtures();
    let selection = Selection::new(Scenario::S4, Action::Traditional)
        .with_follow(Some(Follow { action: Action::Rub, spin: None }));
    c.bench_function("render a cached serve Report with players", |b| {
        b.iter(|| api.render(&selection))
    });
}

fn rendering_cached_spin_report(c: &mut criterion::Criterion) {
    let api = fixtures();
    let selection = Selection::new(Scenario::S1, Action::Drive).with_spin(Some(Spin::Top));
    c.bench_function("render a cached spin-tracked Report", |b| {
        b.iter(|| api.render(&selection))
    });
}

fn filtering_synthetic_table(c: &mut criterion::Criterion) {
    let rows = (0..10_000)
        .map(|i| Strategy {
            first: Action::strokes()[i % 15],
            first_spin: Spin::try_from((i % 6) as u8).ok(),
            reply: Action::strokes()[(i / 15) % 15],
            reply_spin: Spin::try_from(((i / 90) % 6) as u8).ok(),
            ev: (i % 1000) as f64 / 1000.0,
            usage: 0.01,
            count: 1,
        })
        .collect::<Vec<Strategy>>();
    let config = Scenario::S1.config();
    c.bench_function("filter and sort 10k Strategy rows", |b| {
        b.iter(|| filter(&rows, config, Action::Drive, Some(Spin::Top)))
    });
}
