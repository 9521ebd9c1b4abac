// File: crates/nova-core/tests/basic_plot.rs
// Purpose: BasicPlot data kinds, limits, panels, removal and raster output.

use nova_core::{
    AxesOptions, BasicOptions, BasicPlot, ExportOptions, FigureOptions, Hist, Layout, LineOptions, PlotError,
    PlotObject, PointsLines, StepWhere, TextAnnotation,
};

fn ramp() -> (Vec<f64>, Vec<f64>) {
    let x: Vec<f64> = (0..=10).map(f64::from).collect();
    (x.clone(), x)
}

fn plot_with(axes: AxesOptions) -> BasicPlot {
    BasicPlot::new(BasicOptions::new(FigureOptions::default().dpi(72.0), axes))
}

fn text_free() -> ExportOptions {
    ExportOptions { layout: Layout::Standard, draw_text: false, ..ExportOptions::default() }
}

#[test]
fn every_data_kind_is_accepted() {
    let mut plot = BasicPlot::default();
    let (x, y) = ramp();
    for kind in ["points", "line", "PointsLines"] {
        plot.add_data(x.clone(), y.clone(), Some(kind), kind, LineOptions::default()).unwrap();
    }
    plot.add_data(x.clone(), vec![], Some("hist"), "hist", LineOptions::default()).unwrap();
    let bands: Vec<f64> = [y.clone(), y.clone(), y.clone()].concat();
    plot.add_data(x.clone(), bands, Some("band"), "fillbetween", LineOptions::default()).unwrap();
    assert_eq!(plot.dataset_count(0), 5);
}

#[test]
fn unknown_kind_and_bad_lengths_are_errors() {
    let mut plot = BasicPlot::default();
    let err = plot.add_data(vec![1.0], vec![1.0], None, "violin", LineOptions::default()).unwrap_err();
    assert!(matches!(err, PlotError::UnknownObjectType(ref k) if k == "violin"));

    let err = plot.add_data(vec![1.0, 2.0], vec![1.0], None, "line", LineOptions::default()).unwrap_err();
    assert!(matches!(err, PlotError::LengthMismatch { x: 2, y: 1 }));

    let err = plot.add_data(vec![1.0, 2.0], vec![1.0, 2.0], None, "fillbetween", LineOptions::default()).unwrap_err();
    assert!(matches!(err, PlotError::LengthMismatch { x: 6, y: 2 }));

    let err = plot.add_errorbar(vec![1.0, 2.0], vec![1.0, 2.0], vec![0.1], None).unwrap_err();
    assert!(matches!(err, PlotError::LengthMismatch { .. }));
    assert_eq!(plot.dataset_count(0), 0);
}

#[test]
fn kind_defaults_choose_lines_and_markers() {
    let p = PointsLines::new(vec![0.0], vec![0.0], None, LineOptions::points()).unwrap();
    assert!(!p.options.line_style.is_visible());
    let p = PointsLines::new(vec![0.0], vec![0.0], None, LineOptions::points_lines()).unwrap();
    assert!(p.options.line_style.is_visible());
}

#[test]
fn remove_data_by_label() {
    let mut plot = plot_with(AxesOptions::default());
    let (x, y) = ramp();
    plot.add_data(x.clone(), y.clone(), Some("a"), "line", LineOptions::default()).unwrap();
    plot.add_data(x.clone(), y.clone(), Some("b"), "line", LineOptions::default()).unwrap();
    plot.add_data(x, y, Some("a"), "points", LineOptions::default()).unwrap();
    assert_eq!(plot.remove_data("a"), 2);
    assert_eq!(plot.remove_data("missing"), 0);
    assert_eq!(plot.dataset_count(0), 1);
}

#[test]
fn automatic_and_user_limits() {
    let mut plot = plot_with(AxesOptions::default());
    let (x, y) = ramp();
    plot.add_data(x, y, None, "line", LineOptions::default()).unwrap();
    plot.add_errorbar(vec![5.0], vec![5.0], vec![7.0], None).unwrap();
    let scene = plot.plot().unwrap();
    let panel = &scene.panels[0];
    assert!((panel.x.min + 0.4).abs() < 1e-9 && (panel.x.max - 10.4).abs() < 1e-9);
    // error bars reach from -2 to 12
    assert!((panel.y.min + 2.56).abs() < 1e-9 && (panel.y.max - 12.56).abs() < 1e-9);

    let mut fixed = plot_with(AxesOptions::default().xlim(-1.0, 1.0).ylim(0.0, 5.0));
    fixed.add_data(vec![100.0], vec![100.0], None, "points", LineOptions::default()).unwrap();
    let scene = fixed.plot().unwrap();
    assert_eq!((scene.panels[0].x.min, scene.panels[0].x.max), (-1.0, 1.0));
    assert_eq!((scene.panels[0].y.min, scene.panels[0].y.max), (0.0, 5.0));
}

#[test]
fn log_axes_round_to_decades() {
    let mut plot = plot_with(AxesOptions::default().log(false, true));
    plot.add_data(vec![0.0, 1.0, 2.0], vec![0.5, 30.0, 700.0], None, "line", LineOptions::default()).unwrap();
    let scene = plot.plot().unwrap();
    let y = &scene.panels[0].y;
    assert!(y.is_log());
    assert!((y.min - 0.1).abs() < 1e-12 && (y.max - 1000.0).abs() < 1e-9);
}

#[test]
fn empty_panels_still_plot() {
    let plot = plot_with(AxesOptions::default().log(true, false));
    let scene = plot.plot().unwrap();
    assert_eq!((scene.panels[0].x.min, scene.panels[0].x.max), (1.0, 10.0));
    assert_eq!((scene.panels[0].y.min, scene.panels[0].y.max), (0.0, 1.0));
}

#[test]
fn multi_panel_figures() {
    let mut plot = BasicPlot::new(BasicOptions::new(FigureOptions::default().grid(1, 2), AxesOptions::default()));
    let (x, y) = ramp();
    plot.add_data_at(1, x.clone(), y.clone(), Some("right"), "line", LineOptions::default()).unwrap();
    plot.add_step_at(0, x.clone(), y.clone(), Some("left"), StepWhere::Mid, LineOptions::default()).unwrap();
    let err = plot.add_data_at(2, x, y, None, "line", LineOptions::default()).unwrap_err();
    assert!(matches!(err, PlotError::PanelOutOfRange { index: 2, count: 2 }));

    let scene = plot.plot().unwrap();
    assert_eq!(scene.panels.len(), 2);
    assert_eq!(scene.panels[0].objects.len(), 1);
    assert_eq!(scene.panels[1].objects[0].label(), Some("right"));
}

#[test]
fn text_annotations_land_on_the_first_panel() {
    let note = TextAnnotation::data("peak", 5.0, 5.0);
    let mut plot = BasicPlot::new(BasicOptions::new(
        FigureOptions::default().grid(2, 1),
        AxesOptions::default().text(TextAnnotation::axes("Preliminary", 0.05, 0.9)).text(note),
    ));
    let h = Hist::new(vec![1.0, 2.0, 2.5], nova_core::Bins::Count(3), Some("h".into()));
    plot.add_hist_at(1, &h).unwrap();
    let scene = plot.plot().unwrap();
    assert_eq!(scene.panels[0].annotations.len(), 2);
    assert!(scene.panels[1].annotations.is_empty());
}

#[test]
fn raster_size_follows_dpi() {
    let mut plot = plot_with(AxesOptions::default());
    let (x, y) = ramp();
    plot.add_data(x, y, Some("ramp"), "pointslines", LineOptions::default()).unwrap();

    let img = plot.render_rgba8(&text_free()).unwrap();
    assert_eq!((img.width, img.height), (432, 288));
    assert_eq!(img.pixels.len(), img.stride() * img.height as usize);
    assert_eq!(img.pixel(0, 0), Some([255, 255, 255, 255]));

    let hi = plot.render_rgba8(&ExportOptions { dpi: Some(144.0), ..text_free() }).unwrap();
    assert_eq!((hi.width, hi.height), (864, 576));
}

#[test]
fn facecolor_follows_theme_unless_overridden() {
    let mut plot = BasicPlot::new(BasicOptions::new(FigureOptions::default().dpi(72.0).color_theme("dark"), AxesOptions::default()));
    let (x, y) = ramp();
    plot.add_data(x, y, None, "line", LineOptions::default()).unwrap();

    let img = plot.render_rgba8(&text_free()).unwrap();
    assert_eq!(img.pixel(0, 0), Some([0x22, 0x22, 0x22, 255]));

    let red = ExportOptions { facecolor: Some(skia_safe::Color::RED), ..text_free() };
    let img = plot.render_rgba8(&red).unwrap();
    assert_eq!(img.pixel(0, 0), Some([255, 0, 0, 255]));
}

#[test]
fn tight_layout_trims_the_margins() {
    let mut plot = plot_with(AxesOptions::default().no_legend());
    let (x, y) = ramp();
    plot.add_data(x, y, None, "line", LineOptions::default()).unwrap();
    let tight = plot.render_rgba8(&ExportOptions { draw_text: false, ..ExportOptions::default() }).unwrap();
    let full = plot.render_rgba8(&text_free()).unwrap();
    assert!(tight.width < full.width);
    assert!(tight.height < full.height);
}
