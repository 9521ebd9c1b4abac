use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, black_box};
use nova_core::{lttb, BasicPlot, ExportOptions, Layout, LineOptions, Result};

fn gen_xy(n: usize) -> (Vec<f64>, Vec<f64>) {
    let x: Vec<f64> = (0..n).map(|i| i as f64).collect();
    // simple waveform with drift
    let y = x.iter().map(|v| (v * 0.01).sin() * 10.0 + v * 0.0001).collect();
    (x, y)
}

fn build_plot(n: usize, max_points: Option<usize>) -> BasicPlot {
    let mut plot = BasicPlot::default();
    let (x, y) = gen_xy(n);
    let mut opts = LineOptions::default();
    opts.max_points = max_points;
    plot.add_data(x, y, Some("signal"), "line", opts).expect("bench data");
    plot
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    let opts = ExportOptions { dpi: Some(100.0), layout: Layout::Standard, draw_text: false, ..ExportOptions::default() };
    for &n in &[10_000usize, 50_000usize] {
        group.bench_function(format!("xy_{n}"), |b| {
            let plot = build_plot(n, None);
            b.iter(|| -> Result<()> {
                let bytes = plot.render_png(&opts)?;
                black_box(bytes);
                Ok(())
            });
        });
        group.bench_function(format!("xy_{n}_lttb2000"), |b| {
            let plot = build_plot(n, Some(2_000));
            b.iter(|| -> Result<()> {
                black_box(plot.render_png(&opts)?);
                Ok(())
            });
        });
    }
    group.finish();
}

fn bench_tight_layout(c: &mut Criterion) {
    let plot = build_plot(5_000, None);
    let tight = ExportOptions { dpi: Some(100.0), ..ExportOptions::default() };
    c.bench_function("render_png_tight_5000", |b| {
        b.iter(|| black_box(plot.render_png(&tight).expect("render")));
    });
}

fn bench_lttb(c: &mut Criterion) {
    let mut group = c.benchmark_group("lttb");
    let (x, y) = gen_xy(100_000);
    let data: Vec<(f64, f64)> = x.into_iter().zip(y).collect();
    for &target in &[1_000usize, 5_000usize] {
        group.bench_with_input(BenchmarkId::from_parameter(format!("n100000_t{target}")), &target, |b, &t| {
            b.iter_batched(|| data.clone(), |d| { let _ = black_box(lttb(&d, t)); }, BatchSize::SmallInput);
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render, bench_tight_layout, bench_lttb);
criterion_main!(benches);
