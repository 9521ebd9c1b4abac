// File: crates/nova-core/tests/hist_plot.rs
// Purpose: HistPlot stacking, limits, ratio panel and mean/sigma markers.

use nova_core::render::Orientation;
use nova_core::{
    AxesOptions, Bins, ExportOptions, FigureOptions, HistErrors, HistOptions, HistPlot, HistPlotOptions, HistType, Layout,
    LineOptions, LineStyle, PlotError,
};

fn edges() -> Vec<f64> { vec![0.0, 1.0, 2.0, 3.0] }

fn options() -> HistPlotOptions {
    HistPlotOptions { figure: FigureOptions::default().dpi(72.0), ..HistPlotOptions::default() }
}

fn two_hists(opts: HistPlotOptions) -> HistPlot {
    let mut plot = HistPlot::new(opts);
    plot.add_hist(vec![0.5, 0.5, 1.5, 2.5], edges(), Some("mc"), HistOptions::default()).unwrap();
    plot.add_hist(
        vec![0.5, 1.5, 1.5, 2.5, 2.5, 2.5],
        edges(),
        Some("data"),
        HistOptions { err: HistErrors::Poisson, hist_type: Some(HistType::Step), ..HistOptions::default() },
    )
    .unwrap();
    plot
}

#[test]
fn plot_defaults_fill_unset_histogram_options() {
    let plot = two_hists(HistPlotOptions { hist_type: HistType::Bar, alpha: 0.5, ..options() });
    let hists = plot.hists();
    assert_eq!(hists[0].hist_type, HistType::Bar);
    assert_eq!(hists[0].alpha, 0.5);
    assert_eq!(hists[1].hist_type, HistType::Step);
}

#[test]
fn stacking_accumulates_bottoms() {
    let plot = two_hists(HistPlotOptions { stack: true, ..options() });
    let binned = plot.binned().unwrap();
    assert_eq!(binned[0].bottoms, vec![0.0, 0.0, 0.0]);
    assert_eq!(binned[1].bottoms, vec![2.0, 1.0, 1.0]);
    assert_eq!(binned[1].tops(), vec![3.0, 3.0, 4.0]);

    let scene = plot.plot().unwrap();
    // y from zero to the stacked maximum (with its Poisson error) plus the margin
    assert_eq!(scene.panels[0].y.min, 0.0);
    let top = 4.0 + 3f64.sqrt();
    assert!((scene.panels[0].y.max - top * 1.04).abs() < 1e-9);
    assert_eq!((scene.panels[0].x.min, scene.panels[0].x.max), (0.0, 3.0));
}

#[test]
fn log_y_limits_skip_zero_bottoms() {
    let axes = AxesOptions::default().log(false, true);
    let plot = two_hists(HistPlotOptions { axes, ..options() });
    let scene = plot.plot().unwrap();
    // smallest positive bar top is 1, tallest is 3 + sqrt(3)
    assert_eq!((scene.panels[0].y.min, scene.panels[0].y.max), (1.0, 10.0));

    let mut empty = HistPlot::new(HistPlotOptions { axes: AxesOptions::default().log(false, true), ..options() });
    empty.add_hist(vec![5.0], edges(), Some("outside"), HistOptions::default()).unwrap();
    let scene = empty.plot().unwrap();
    assert_eq!((scene.panels[0].y.min, scene.panels[0].y.max), (1.0, 10.0));
}

#[test]
fn stacking_needs_shared_bins() {
    let mut plot = HistPlot::new(HistPlotOptions { stack: true, ..options() });
    plot.add_hist(vec![0.5], edges(), Some("a"), HistOptions::default()).unwrap();
    plot.add_hist(vec![0.5], vec![0.0, 5.0], Some("b"), HistOptions::default()).unwrap();
    assert!(matches!(plot.plot(), Err(PlotError::BinMismatch)));
}

#[test]
fn bad_bins_fail_when_added() {
    let mut plot = HistPlot::new(options());
    let err = plot.add_hist(vec![1.0], vec![1.0, 0.0], None, HistOptions::default()).unwrap_err();
    assert!(matches!(err, PlotError::InvalidBins(_)));
    let err = plot
        .add_hist(vec![1.0, 2.0], Bins::Count(2), None, HistOptions { weights: Some(vec![1.0]), ..HistOptions::default() })
        .unwrap_err();
    assert!(matches!(err, PlotError::LengthMismatch { .. }));
    assert!(plot.hists().is_empty());
}

#[test]
fn ratio_adds_a_lower_panel() {
    let plot = two_hists(HistPlotOptions { ratio: true, ..options() });
    let scene = plot.plot().unwrap();
    assert_eq!(scene.panels.len(), 2);

    let (main, ratio) = (&scene.panels[0], &scene.panels[1]);
    assert!(!main.x.show_labels);
    assert!(ratio.x.show_labels);
    assert!(ratio.rect.top > main.rect.bottom);
    assert!(main.rect.height() > 2.0 * ratio.rect.height());
    assert_eq!(ratio.y.label, "Ratio");
    assert_eq!((ratio.x.min, ratio.x.max), (main.x.min, main.x.max));

    let reference = &ratio.ref_lines[0];
    assert_eq!(reference.orientation, Orientation::Horizontal);
    assert_eq!(reference.value, 1.0);
    assert_eq!(reference.line_style, LineStyle::Dashed);
    assert_eq!(ratio.objects.len(), 1);
}

#[test]
fn ratio_with_a_single_histogram_is_empty() {
    let mut plot = HistPlot::new(HistPlotOptions { ratio: true, ..options() });
    plot.add_hist(vec![0.5, 1.5], edges(), None, HistOptions::default()).unwrap();
    let scene = plot.plot().unwrap();
    assert!(scene.panels[1].objects.is_empty());
    assert_eq!((scene.panels[1].y.min, scene.panels[1].y.max), (0.0, 2.0));
}

#[test]
fn stats_lines_mark_mean_and_sigma() {
    let plot = two_hists(HistPlotOptions { show_stats: Some(2.0), ..options() });
    let scene = plot.plot().unwrap();
    let lines = &scene.panels[0].ref_lines;
    assert_eq!(lines.len(), 6);
    assert!(lines.iter().all(|l| l.orientation == Orientation::Vertical));
    // first histogram: mean 1.25, std sqrt(0.6875)
    let std = 0.6875f64.sqrt();
    assert!((lines[0].value - 1.25).abs() < 1e-12);
    assert!((lines[1].value - (1.25 - 2.0 * std)).abs() < 1e-12);
    assert!((lines[2].value - (1.25 + 2.0 * std)).abs() < 1e-12);
    assert_eq!(lines[1].line_style, LineStyle::Dashed);
}

#[test]
fn add_data_routes_hist_and_overlays() {
    let mut plot = HistPlot::new(options());
    plot.add_data(vec![0.1, 0.2, 0.9], vec![], Some("h"), "hist", LineOptions::default()).unwrap();
    plot.add_data(vec![0.0, 1.0], vec![1.0, 2.0], Some("fit"), "line", LineOptions::default()).unwrap();
    assert_eq!(plot.hists().len(), 1);
    assert_eq!(plot.plot().unwrap().panels[0].objects.len(), 2);
    assert_eq!(plot.remove_data("fit"), 1);
    assert_eq!(plot.remove_data("h"), 1);
    assert!(plot.hists().is_empty());
}

#[test]
fn renders_with_ratio_panel() {
    let plot = two_hists(HistPlotOptions { ratio: true, normalize: true, ..options() });
    let opts = ExportOptions { layout: Layout::Standard, draw_text: false, ..ExportOptions::default() };
    let img = plot.render_rgba8(&opts).unwrap();
    assert_eq!((img.width, img.height), (432, 288));
    let png = plot.render_png(&opts).unwrap();
    assert!(png.starts_with(&[137, 80, 78, 71]));
}
