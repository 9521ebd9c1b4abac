use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, black_box};
use nova_core::{Bins, ExportOptions, HistErrors, HistOptions, HistPlot, HistPlotOptions, Hist, Layout};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Exp, Normal};

fn normal_samples(n: usize, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let dist = Normal::new(1.5, 0.75).expect("valid normal");
    (0..n).map(|_| dist.sample(&mut rng)).collect()
}

fn bench_binning(c: &mut Criterion) {
    let mut group = c.benchmark_group("hist_compute");
    for &n in &[10_000usize, 100_000usize] {
        let data = normal_samples(n, 7);
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let weights: Vec<f64> = (0..n).map(|_| rng.random_range(0.5..1.5)).collect();
        for &bins in &[50usize, 500usize] {
            group.bench_with_input(BenchmarkId::from_parameter(format!("n{n}_b{bins}")), &bins, |b, &bins| {
                let hist = Hist::new(data.clone(), Bins::Count(bins), None)
                    .weights(weights.clone())
                    .errors(HistErrors::SumW2);
                b.iter(|| black_box(hist.compute().expect("binning")));
            });
        }
    }
    group.finish();
}

fn bench_ratio_plot(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let expo = Exp::new(1.0).expect("valid rate");
    let background: Vec<f64> = (0..20_000).map(|_| expo.sample(&mut rng)).collect();
    let signal = normal_samples(20_000, 5);
    let edges: Vec<f64> = (0..=60).map(|i| i as f64 * 0.1).collect();

    let mut plot = HistPlot::new(HistPlotOptions { ratio: true, stack: false, ..HistPlotOptions::default() });
    plot.add_hist(background, edges.clone(), Some("background"), HistOptions::default()).expect("background");
    plot.add_hist(signal, edges, Some("signal"), HistOptions { err: HistErrors::Poisson, ..HistOptions::default() })
        .expect("signal");
    let opts = ExportOptions { dpi: Some(100.0), layout: Layout::Standard, draw_text: false, ..ExportOptions::default() };

    c.bench_function("hist_ratio_render_png", |b| {
        b.iter(|| black_box(plot.render_png(&opts).expect("render")));
    });
}

criterion_group!(benches, bench_binning, bench_ratio_plot);
criterion_main!(benches);
