use chrono::NaiveDate;
use criterion::{Criterion, criterion_group, criterion_main};
use line_chart_rs::core::{
    DataPoint, Interpolation, LinearScale, Margins, PathPoint, Viewport, add_days, line_path,
};
use line_chart_rs::render::{ChartLayout, LineChartFrame, LineStyle, SvgContainer};
use line_chart_rs::{ChartOptions, ChartRenderer};
use std::hint::black_box;

fn zigzag_vertices(count: usize) -> Vec<PathPoint> {
    (0..count)
        .map(|i| {
            let x = i as f64 * 0.5;
            let y = if i % 2 == 0 { 10.0 } else { 40.0 } + (i % 7) as f64;
            (x, y)
        })
        .collect()
}

fn daily_points(count: usize) -> Vec<DataPoint> {
    let start = NaiveDate::from_ymd_opt(2000, 1, 1).expect("valid date");
    (0..count)
        .map(|i| {
            let day = add_days(start, i as i64).expect("date in range");
            DataPoint::new(day, 1.0 + (i * 37 % 100) as f64)
        })
        .collect()
}

fn bench_linear_ticks(c: &mut Criterion) {
    let scale = LinearScale::new((0.0, 9_731.0), (490.0, 0.0)).expect("valid scale");

    c.bench_function("linear_ticks_10", |b| {
        b.iter(|| {
            let _ = black_box(scale).ticks(black_box(10));
        })
    });
}

fn bench_spline_paths_10k(c: &mut Criterion) {
    let vertices = zigzag_vertices(10_000);

    for mode in [
        Interpolation::Linear,
        Interpolation::Basis,
        Interpolation::Cardinal,
        Interpolation::Monotone,
    ] {
        c.bench_function(&format!("line_path_{mode}_10k"), |b| {
            b.iter(|| {
                let _ = line_path(black_box(&vertices), black_box(mode));
            })
        });
    }
}

fn bench_frame_build_5k(c: &mut Criterion) {
    let points = daily_points(5_000);
    let layout = ChartLayout::new(Viewport::new(1920, 1080), Margins::default()).expect("layout");
    let style = LineStyle {
        x_tick_count: 10,
        y_tick_count: 10,
        interpolation: Interpolation::Monotone,
    };

    c.bench_function("line_chart_frame_build_5k", |b| {
        b.iter(|| {
            let frame = LineChartFrame::build(black_box(&points), layout, style)
                .expect("frame should build");
            let _ = frame.to_element().to_markup();
        })
    });
}

fn bench_renderer_update_cycle(c: &mut Criterion) {
    let mut renderer =
        ChartRenderer::new(SvgContainer::new("bench"), ChartOptions::default()).with_seed(42);
    renderer.draw_line().expect("initial draw");

    c.bench_function("renderer_update_cycle", |b| {
        b.iter(|| {
            renderer.update().expect("update should succeed");
        })
    });
}

criterion_group!(
    benches,
    bench_linear_ticks,
    bench_spline_paths_10k,
    bench_frame_build_5k,
    bench_renderer_update_cycle
);
criterion_main!(benches);
