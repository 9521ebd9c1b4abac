// File: crates/nova-examples/src/bin/basic.rs
// Summary: Quick-plot example: a noisy damped sine and a linear ramp on a log y axis.

use anyhow::{Context, Result};
use nova_core::{AxesOptions, BasicOptions, BasicPlot, FigureOptions, LineOptions, LineStyle, NovaConfig, TextAnnotation};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};

const N: usize = 200;
const AMPLITUDE: f64 = 5.0;
const DAMPING: f64 = 0.3;
const OFFSET: f64 = 20.0;
const NOISE: f64 = 0.5;

fn main() -> Result<()> {
    env_logger::init();
    let config = NovaConfig::from_env().context("loading config")?;

    let omega = 2.0 * std::f64::consts::PI * 0.8;
    let t: Vec<f64> = (0..N).map(|i| 10.0 * i as f64 / (N - 1) as f64).collect();
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let noise = Normal::new(0.0, NOISE)?;
    let noisy: Vec<f64> = t
        .iter()
        .map(|&t| AMPLITUDE * (-DAMPING * t).exp() * (omega * t).sin() + OFFSET + noise.sample(&mut rng))
        .collect();
    let linear: Vec<f64> = t.iter().map(|t| 11.0 * t).collect();

    let axes = AxesOptions::default()
        .labels("time [s]", "Voltage [V]")
        .log(false, true)
        .legend("default outside")
        .grid(LineStyle::DashDot)
        .text(TextAnnotation::axes("$\\mathrm{V}(t)=11t$", 0.8, 0.74).color("blue")?)
        .text(TextAnnotation::data("$y=Ae^{-\\gamma t} \\mathrm{sin}(\\omega t) + C$", 6.75, 27.0).color("red")?);
    let figure = FigureOptions { style: "publication".into(), ..config.figure_options()? };

    let mut plot = BasicPlot::new(BasicOptions::new(figure, axes));
    plot.add_data(t.clone(), noisy, Some("Noisy data"), "line", LineOptions::new().c("red")?.ls("-")?.lw(1.0))?;
    plot.add_data(t, linear, Some("Linear"), "line", LineOptions::new().c("blue")?.ls("--")?.lw(1.0))?;

    let out = std::path::PathBuf::from("target/out/test_basic.png");
    plot.export(&out, &config.export_options()?).with_context(|| format!("exporting {}", out.display()))?;
    println!("Wrote {}", out.display());
    Ok(())
}
