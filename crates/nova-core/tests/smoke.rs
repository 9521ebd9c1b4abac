// File: crates/nova-core/tests/smoke.rs
// Purpose: End-to-end export smoke tests for every output format.

use nova_core::{BasicPlot, ExportOptions, FigureOptions, BasicOptions, LineOptions, PlotError};

fn sample_plot() -> BasicPlot {
    let mut plot = BasicPlot::new(BasicOptions {
        figure: FigureOptions::default().dpi(72.0),
        ..BasicOptions::default()
    });
    let x: Vec<f64> = (0..50).map(|i| i as f64 * 0.1).collect();
    let y: Vec<f64> = x.iter().map(|v| v.sin()).collect();
    plot.add_data(x, y, Some("sine"), "pointslines", LineOptions::default()).expect("add data");
    plot
}

fn out_path(name: &str) -> std::path::PathBuf {
    std::path::PathBuf::from("target/test_out").join(name)
}

#[test]
fn export_png_writes_file() {
    let plot = sample_plot();
    let out = out_path("smoke.png");
    plot.export(&out, &ExportOptions::default()).expect("export png");
    let bytes = std::fs::read(&out).expect("output exists");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn render_png_bytes_in_memory() {
    let plot = sample_plot();
    let bytes = plot.render_png(&ExportOptions::default()).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]));
    let img = image::load_from_memory(&bytes).expect("decodes").to_rgba8();
    assert!(img.width() > 100 && img.height() > 100);
}

#[test]
fn export_vector_formats() {
    let plot = sample_plot();
    let svg = out_path("smoke.svg");
    plot.export(&svg, &ExportOptions::default()).expect("export svg");
    let text = std::fs::read_to_string(&svg).expect("svg readable");
    assert!(text.contains("<svg"));

    let pdf = out_path("smoke.pdf");
    plot.export(&pdf, &ExportOptions::default()).expect("export pdf");
    let bytes = std::fs::read(&pdf).expect("pdf readable");
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn export_jpeg_creates_parent_dirs() {
    let plot = sample_plot();
    let out = out_path("nested/dir/smoke.jpg");
    let _ = std::fs::remove_dir_all(out_path("nested"));
    plot.export(&out, &ExportOptions::default()).expect("export jpeg");
    assert!(std::fs::metadata(&out).expect("exists").len() > 0);
}

#[test]
fn unknown_extension_is_rejected() {
    let plot = sample_plot();
    let err = plot.export(out_path("smoke.bmp"), &ExportOptions::default()).unwrap_err();
    assert!(matches!(err, PlotError::UnsupportedFormat(_)));
}
