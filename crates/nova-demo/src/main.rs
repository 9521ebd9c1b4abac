// File: crates/nova-demo/src/main.rs
// Summary: Demo loads numeric CSV columns and renders them with BasicPlot or HistPlot to PNG and SVG.
//
// Usage:
//   nova-demo <file.csv> [x_column] [y_column ...]      line plot of y columns against x
//   nova-demo <file.csv> --hist <column> [column ...]   histograms with a ratio panel

use anyhow::{Context, Result};
use nova_core::{
    AxesOptions, BasicOptions, BasicPlot, ExportOptions, HistErrors, HistOptions, HistPlot, HistPlotOptions,
    LineOptions, NovaConfig,
};
use std::path::{Path, PathBuf};

/// Columns longer than this are downsampled before drawing.
const MAX_POINTS: usize = 2000;
const HIST_BINS: usize = 30;

struct Table {
    headers: Vec<String>,
    columns: Vec<Vec<f64>>,
}

impl Table {
    fn column(&self, name: &str) -> Result<&[f64]> {
        let i = self
            .headers
            .iter()
            .position(|h| h.eq_ignore_ascii_case(name))
            .with_context(|| format!("no column '{name}' (have {:?})", self.headers))?;
        Ok(&self.columns[i])
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(raw) = args.first() else {
        anyhow::bail!("usage: nova-demo <file.csv> [x_column] [y_column ...] | <file.csv> --hist <column> ...");
    };
    let path = Path::new(raw);
    let config = NovaConfig::from_env().context("loading config from NOVA_CONFIG")?;
    let export = config.export_options()?;

    let table = load_csv(path).with_context(|| format!("failed to load CSV '{}'", path.display()))?;
    println!("Loaded {} columns: {:?}", table.headers.len(), table.headers);

    let rest = &args[1..];
    if rest.first().map(String::as_str) == Some("--hist") {
        render_hists(&table, &rest[1..], path, &config, &export)
    } else {
        render_lines(&table, rest, path, &config, &export)
    }
}

fn render_lines(table: &Table, names: &[String], input: &Path, config: &NovaConfig, export: &ExportOptions) -> Result<()> {
    let (x_name, y_names): (String, Vec<String>) = match names.split_first() {
        Some((x, ys)) if !ys.is_empty() => (x.clone(), ys.to_vec()),
        Some((x, _)) => (x.clone(), table.headers.iter().filter(|h| *h != x).cloned().collect()),
        None => match table.headers.split_first() {
            Some((x, ys)) => (x.clone(), ys.to_vec()),
            None => anyhow::bail!("CSV has no columns"),
        },
    };
    let x = table.column(&x_name)?.to_vec();
    let axes = AxesOptions::default().labels(x_name.clone(), y_names.join(", ")).legend("default outside");
    let mut plot = BasicPlot::new(BasicOptions::new(config.figure_options()?, axes));
    for name in &y_names {
        let y = table.column(name)?.to_vec();
        let mut opts = LineOptions::default();
        if y.len() > MAX_POINTS {
            opts = opts.max_points(MAX_POINTS);
        }
        plot.add_data(x.clone(), y, Some(name), "line", opts).with_context(|| format!("adding column '{name}'"))?;
    }
    write_outputs(input, "lines", export, |p, e| Ok(plot.export(p, e)?))
}

fn render_hists(table: &Table, names: &[String], input: &Path, config: &NovaConfig, export: &ExportOptions) -> Result<()> {
    if names.is_empty() {
        anyhow::bail!("--hist needs at least one column name");
    }
    let columns = names.iter().map(|n| table.column(n)).collect::<Result<Vec<_>>>()?;
    // one set of edges over every column so the ratio panel lines up
    let (lo, hi) = columns
        .iter()
        .flat_map(|c| c.iter().copied())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));
    if !(lo.is_finite() && hi.is_finite()) {
        anyhow::bail!("histogram columns hold no numeric values");
    }
    let hi = if hi > lo { hi } else { lo + 1.0 };
    let edges: Vec<f64> = (0..=HIST_BINS).map(|i| lo + (hi - lo) * i as f64 / HIST_BINS as f64).collect();

    let mut options = HistPlotOptions { figure: config.figure_options()?, ratio: names.len() > 1, ..HistPlotOptions::default() };
    options.axes = options.axes.labels(names.join(", "), "Entries");
    let mut plot = HistPlot::new(options);
    for (name, data) in names.iter().zip(columns) {
        let opts = HistOptions { err: HistErrors::Poisson, ..HistOptions::default() };
        plot.add_hist(data.to_vec(), edges.clone(), Some(name), opts).with_context(|| format!("binning column '{name}'"))?;
    }
    write_outputs(input, "hist", export, |p, e| Ok(plot.export(p, e)?))
}

fn write_outputs(
    input: &Path,
    suffix: &str,
    export: &ExportOptions,
    write: impl Fn(&Path, &ExportOptions) -> Result<()>,
) -> Result<()> {
    let png = out_name_with(input, suffix);
    write(&png, export).with_context(|| format!("writing {}", png.display()))?;
    println!("Wrote {}", png.display());
    let svg = png.with_extension("svg");
    write(&svg, export).with_context(|| format!("writing {}", svg.display()))?;
    println!("Wrote {}", svg.display());
    Ok(())
}

/// Produce output file name like target/out/nova_<stem>_<suffix>.png
fn out_name_with(input: &Path, suffix: &str) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("plot");
    PathBuf::from("target/out").join(format!("nova_{stem}_{suffix}.png"))
}

/// Read every column of a headed CSV; cells that do not parse become NaN.
fn load_csv(path: &Path) -> Result<Table> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;
    let headers: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();
    let mut columns = vec![Vec::new(); headers.len()];
    let mut skipped = 0usize;
    for rec in rdr.records() {
        let rec = rec?;
        for (i, col) in columns.iter_mut().enumerate() {
            let v = rec.get(i).and_then(|s| s.parse::<f64>().ok());
            if v.is_none() {
                skipped += 1;
            }
            col.push(v.unwrap_or(f64::NAN));
        }
    }
    if skipped > 0 {
        log::warn!("{skipped} cells were not numeric and read as NaN");
    }
    Ok(Table { headers, columns })
}
