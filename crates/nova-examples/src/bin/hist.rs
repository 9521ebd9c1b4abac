// File: crates/nova-examples/src/bin/hist.rs
// Summary: Histogram example: normal and exponential samples with errors, ratio panel and stats lines.

use anyhow::{Context, Result};
use nova_core::{ErrType, HistErrors, HistOptions, HistPlot, HistPlotOptions, HistType, NovaConfig};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Exp, Normal};

const SAMPLES: usize = 5000;
const BINS: usize = 40;

fn main() -> Result<()> {
    env_logger::init();
    let config = NovaConfig::from_env().context("loading config")?;

    let mut rng = ChaCha8Rng::seed_from_u64(586350478348);
    let normal = Normal::new(1.5, 0.75)?;
    let expo = Exp::new(1.0)?;
    let normal_data: Vec<f64> = (0..SAMPLES).map(|_| normal.sample(&mut rng)).collect();
    let expo_data: Vec<f64> = (0..SAMPLES).map(|_| expo.sample(&mut rng)).collect();

    // shared binning keeps the ratio panel meaningful
    let hi = normal_data.iter().chain(&expo_data).copied().fold(f64::NEG_INFINITY, f64::max);
    let lo = normal_data.iter().copied().fold(0.0, f64::min);
    let edges: Vec<f64> = (0..=BINS).map(|i| lo + (hi - lo) * i as f64 / BINS as f64).collect();

    let mut options = HistPlotOptions {
        figure: config.figure_options()?,
        ratio: true,
        show_stats: Some(1.0),
        ..HistPlotOptions::default()
    };
    options.axes = options.axes.labels("x", "Entries");

    let mut plot = HistPlot::new(options);
    plot.add_hist(
        expo_data,
        edges.clone(),
        Some("Exponential"),
        HistOptions { hist_type: Some(HistType::StepFilled), alpha: Some(0.6), ..HistOptions::default() },
    )?;
    plot.add_hist(
        normal_data,
        edges,
        Some("Normal"),
        HistOptions {
            hist_type: Some(HistType::Step),
            err: HistErrors::Poisson,
            err_type: ErrType::Atlas,
            ..HistOptions::default()
        },
    )?;

    let out = std::path::PathBuf::from("target/out/test_hist.png");
    plot.export(&out, &config.export_options()?).with_context(|| format!("exporting {}", out.display()))?;
    println!("Wrote {}", out.display());
    Ok(())
}
