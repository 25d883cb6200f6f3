use chart_sketch::core::{LinearScale, Point, sample_ellipse};
use chart_sketch::data::{Record, WideTable};
use chart_sketch::render::NullRenderer;
use chart_sketch::turtle::render_kenyan_flag;
use chart_sketch::FlagConfig;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_linear_scale_round_trip(c: &mut Criterion) {
    let span = (80.0, 1_040.0);
    let scale = LinearScale::new(0.0, 10_000.0).expect("valid scale");

    c.bench_function("linear_scale_round_trip", |b| {
        b.iter(|| {
            let px = scale
                .domain_to_pixel(black_box(4_321.123), span)
                .expect("to pixel");
            let _ = scale.pixel_to_domain(px, span).expect("from pixel");
        })
    });
}

fn bench_ellipse_sampling_120(c: &mut Criterion) {
    c.bench_function("ellipse_sampling_120", |b| {
        b.iter(|| {
            let _ = sample_ellipse(
                black_box(Point::new(0.0, 0.0)),
                black_box(78.0),
                black_box(128.0),
                120,
            );
        })
    });
}

fn bench_pivot_10k(c: &mut Criterion) {
    let elements = ["Area harvested", "Yield", "Production"];
    let areas = ["Ghana", "Côte d'Ivoire", "Nigeria", "Cameroon"];
    let records: Vec<Record> = (0..10_000)
        .map(|i| {
            let year = 1961 + (i / 12) as i32;
            let area = areas[(i / 3) % areas.len()];
            let element = elements[i % elements.len()];
            Record::new(year, area, "Cocoa, beans", element, Some(i as f64 * 1.5))
        })
        .collect();

    c.bench_function("pivot_10k", |b| {
        b.iter(|| {
            let _ = WideTable::pivot(black_box(&records));
        })
    });
}

fn bench_kenyan_flag_layout(c: &mut Criterion) {
    let config = FlagConfig::default();

    c.bench_function("kenyan_flag_layout", |b| {
        b.iter(|| {
            let (screen, pen) =
                render_kenyan_flag(NullRenderer::default(), black_box(&config)).expect("flag");
            let _ = screen.frame(&pen);
        })
    });
}

criterion_group!(
    benches,
    bench_linear_scale_round_trip,
    bench_ellipse_sampling_120,
    bench_pivot_10k,
    bench_kenyan_flag_layout
);
criterion_main!(benches);
