// File: crates/nova-core/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Renders deterministic small figures to PNG bytes with text switched off.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if the snapshot exists, compares decoded pixels for an exact match.
// - Else, logs a note and returns (skips) without failing to ease first run.

use nova_core::{
    AxesOptions, BasicOptions, BasicPlot, ErrType, ExportOptions, FigureOptions, HistErrors, HistOptions, HistPlot,
    HistPlotOptions, Layout, LineOptions,
};

fn export_options() -> ExportOptions {
    // avoid text nondeterminism across platforms
    ExportOptions { dpi: Some(72.0), layout: Layout::Standard, facecolor: None, draw_text: false }
}

fn basic_bytes() -> Vec<u8> {
    let mut plot = BasicPlot::new(BasicOptions::new(FigureOptions::default().style("publication"), AxesOptions::default().no_legend()));
    plot.add_data(vec![0.0, 1.0, 2.0, 3.0, 4.0], vec![0.0, 1.0, 0.0, 1.5, 1.0], None, "pointslines", LineOptions::default())
        .expect("add line");
    plot.add_fill_between(vec![0.0, 2.0, 4.0], vec![0.2, 0.4, 0.6], vec![0.4, 0.6, 0.8], vec![0.6, 0.8, 1.0], None)
        .expect("add band");
    plot.render_png(&export_options()).expect("render basic")
}

fn hist_bytes() -> Vec<u8> {
    let mut plot = HistPlot::new(HistPlotOptions { ratio: true, ..HistPlotOptions::default() });
    let edges = vec![0.0, 1.0, 2.0, 3.0, 4.0];
    plot.add_hist(vec![0.5, 1.5, 1.5, 2.5, 2.5, 2.5, 3.5], edges.clone(), None, HistOptions::default())
        .expect("add mc");
    plot.add_hist(
        vec![0.5, 0.5, 1.5, 2.5, 2.5, 3.5, 3.5],
        edges,
        None,
        HistOptions { err: HistErrors::Poisson, err_type: ErrType::ErrorBar, ..HistOptions::default() },
    )
    .expect("add data");
    plot.render_png(&export_options()).expect("render hist")
}

fn check_snapshot(name: &str, bytes: &[u8]) {
    let snap_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__");
    let snap_path = snap_dir.join(name);

    let update = std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    if update {
        std::fs::create_dir_all(&snap_dir).expect("create snapshots dir");
        std::fs::write(&snap_path, bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", snap_path.display(), bytes.len());
        return;
    }

    if snap_path.exists() {
        let want = std::fs::read(&snap_path).expect("read snapshot");
        // Compare decoded pixel buffers to avoid PNG encoder variance
        let got_img = image::load_from_memory(bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.dimensions(), want_img.dimensions(), "snapshot size changed: {}", snap_path.display());
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "rendered pixels differ from golden snapshot: {}", snap_path.display());
    } else {
        eprintln!("[snapshot] Missing snapshot {}; set UPDATE_SNAPSHOTS=1 to bless.", snap_path.display());
    }
}

#[test]
fn golden_basic_plot() {
    check_snapshot("basic_plot.png", &basic_bytes());
}

#[test]
fn golden_hist_ratio_plot() {
    check_snapshot("hist_ratio_plot.png", &hist_bytes());
}

#[test]
fn rendering_is_deterministic() {
    assert_eq!(basic_bytes(), basic_bytes());
}
