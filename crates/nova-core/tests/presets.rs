// File: crates/nova-core/tests/presets.rs
// Purpose: Style and color theme presets, override merging and figure layout.

use nova_core::style::{LabelPlacement, TickDirection, PRESET_NAMES};
use nova_core::{
    ColorTheme, Figure, FigureOptions, PlotError, Style, StyleChoice, StyleOverrides, ThemeChoice, ThemeOverrides,
};
use skia_safe::Color;

#[test]
fn every_named_preset_resolves() {
    for name in PRESET_NAMES {
        assert!(Style::preset(name).is_some(), "{name}");
    }
    assert!(Style::preset("atlas").is_none(), "style names are exact");
}

#[test]
fn preset_characteristics() {
    let d = Style::default_preset();
    assert_eq!(d.figure_size, (6.0, 4.0));
    assert_eq!(d.font_family, "serif");
    assert_eq!(d.ticks.direction, TickDirection::Out);
    assert!(!d.use_tex);

    let p = Style::publication();
    assert_eq!(p.ticks.direction, TickDirection::In);
    assert!(p.ticks.mirrored);
    assert_eq!(p.label_placement, LabelPlacement::Corner);

    let small = Style::publication_small();
    assert!(small.figure_size.0 < p.figure_size.0);
    assert!(small.use_tex);

    assert!(Style::presentation().line_width > d.line_width);
    assert_eq!(Style::atlas().label_placement, LabelPlacement::Corner);
}

#[test]
fn unknown_style_keeps_its_name_but_draws_the_default() {
    let (name, style) = StyleChoice::from("comic").resolve();
    assert_eq!(name, "comic");
    assert_eq!(style, Style::default_preset());

    let (name, _) = StyleChoice::Custom(Style::presentation()).resolve();
    assert_eq!(name, "custom");
}

#[test]
fn style_overrides_replace_only_set_fields() {
    let o = StyleOverrides { line_width: Some(4.0), tick_direction: Some(TickDirection::In), ..Default::default() };
    let merged = Style::default_preset().merged(&o);
    assert_eq!(merged.line_width, 4.0);
    assert_eq!(merged.ticks.direction, TickDirection::In);
    assert_eq!(merged.figure_size, Style::default_preset().figure_size);
    assert!(StyleOverrides::default().is_empty());
    assert!(!o.is_empty());
}

#[test]
fn themes_light_and_dark() {
    let light = ColorTheme::light();
    assert_eq!(light.figure_background, Color::WHITE);
    assert_eq!(light.text, Color::BLACK);

    let dark = ColorTheme::find("DARK");
    assert_eq!(dark.name, "dark");
    assert_eq!(dark.figure_background, Color::from_rgb(0x22, 0x22, 0x22));
    assert_eq!(dark.text, Color::WHITE);

    assert_eq!(ColorTheme::find("neon").name, "light");
    assert_eq!(ThemeChoice::Custom(ColorTheme::dark()).resolve().name, "custom");
}

#[test]
fn theme_overrides_parse_colors() {
    let o = ThemeOverrides {
        grid: Some("#00ff00".into()),
        palette: Some(vec!["r".into(), "k".into()]),
        ..Default::default()
    };
    let t = ColorTheme::light().merged(&o).unwrap();
    assert_eq!(t.grid, Color::from_rgb(0, 255, 0));
    assert_eq!(t.palette.len(), 2);
    assert_eq!(t.palette.get(2), Color::from_rgb(255, 0, 0));

    let bad = ThemeOverrides { text: Some("notacolor".into()), ..Default::default() };
    assert!(matches!(ColorTheme::light().merged(&bad), Err(PlotError::InvalidColor(_))));
}

#[test]
fn figure_resolves_options_once() {
    let fig = Figure::new(FigureOptions::default().style("publication").color_theme("dark").grid(0, 2).dpi(-1.0));
    assert_eq!(fig.style_name, "publication");
    assert_eq!(fig.theme.name, "dark");
    assert_eq!((fig.nrow, fig.ncol), (1, 2));
    assert_eq!(fig.dpi, 300.0);
    assert_eq!(fig.pixel_size(100.0), (600, 400));
}

#[test]
fn corner_placement_pads_labels() {
    let corner = Figure::new(FigureOptions::default().style("ATLAS"));
    assert_eq!(corner.axis_label("m [GeV]"), "m [GeV]   ");
    let centered = Figure::default();
    assert_eq!(centered.axis_label("m [GeV]"), "m [GeV]");
}

#[test]
fn panel_rects_follow_subplot_fractions() {
    let fig = Figure::default();
    let r = fig.panel_rect(0).unwrap();
    assert!((r.left - 54.0).abs() < 1e-3);
    assert!((r.right - 388.8).abs() < 1e-3);
    assert!((r.top - 34.56).abs() < 1e-3);
    assert!((r.bottom - 256.32).abs() < 1e-3);
    assert!(matches!(fig.panel_rect(1), Err(PlotError::PanelOutOfRange { index: 1, count: 1 })));

    let grid = Figure::new(FigureOptions::default().grid(2, 2));
    let rects = grid.panel_rects();
    assert_eq!(rects.len(), 4);
    // row-major: second rect is right of the first, third is below it
    assert!(rects[1].left > rects[0].right);
    assert!(rects[2].top > rects[0].bottom);
    assert!((rects[0].width() - rects[3].width()).abs() < 1e-3);
}

#[test]
fn vertical_split_keeps_ratios() {
    let rect = nova_core::geometry::RectF::from_ltwh(0.0, 0.0, 100.0, 104.0);
    let parts = nova_core::figure::split_vertical(rect, &[3.0, 1.0], 4.0);
    assert_eq!(parts.len(), 2);
    assert!((parts[0].height() - 75.0).abs() < 1e-4);
    assert!((parts[1].height() - 25.0).abs() < 1e-4);
    assert!((parts[1].top - 79.0).abs() < 1e-4);
}
