// File: crates/nova-core/tests/config.rs
// Purpose: TOML configuration parsing, preset overrides and save/load.

use nova_core::{Figure, Layout, NovaConfig, PlotError};
use skia_safe::Color;

const SAMPLE: &str = r##"
style = "publication"
color_theme = "dark"
dpi = 150.0
title = "Run 42"

[style_overrides]
line_width = 2.5

[export]
layout = "standard"
facecolor = "#ff0000"
"##;

#[test]
fn defaults_when_empty() {
    let cfg = NovaConfig::from_toml_str("").unwrap();
    assert_eq!(cfg, NovaConfig::default());
    assert_eq!(cfg.style, "default");
    assert_eq!(cfg.color_theme, "light");

    let export = cfg.export_options().unwrap();
    assert_eq!(export.layout, Layout::Tight);
    assert_eq!(export.facecolor, None);
}

#[test]
fn parses_presets_and_overrides() {
    let cfg = NovaConfig::from_toml_str(SAMPLE).unwrap();
    let fig = Figure::new(cfg.figure_options().unwrap());
    assert_eq!(fig.style_name, "custom");
    assert_eq!(fig.style.line_width, 2.5);
    // publication ticks survive the override
    assert!(fig.style.ticks.mirrored);
    assert_eq!(fig.theme.name, "dark");
    assert_eq!(fig.dpi, 150.0);
    assert_eq!(fig.title.as_deref(), Some("Run 42"));

    let export = cfg.export_options().unwrap();
    assert_eq!(export.layout, Layout::Standard);
    assert_eq!(export.facecolor, Some(Color::from_rgb(255, 0, 0)));
}

#[test]
fn no_overrides_keep_the_preset_name() {
    let cfg = NovaConfig::from_toml_str("style = \"presentation\"").unwrap();
    let fig = Figure::new(cfg.figure_options().unwrap());
    assert_eq!(fig.style_name, "presentation");
}

#[test]
fn rejects_unknown_override_keys_and_bad_colors() {
    let err = NovaConfig::from_toml_str("[style_overrides]\nline_wdith = 1.0").unwrap_err();
    assert!(matches!(err, PlotError::Config(_)));

    let cfg = NovaConfig::from_toml_str("[theme_overrides]\ntext = \"#zzz\"").unwrap();
    assert!(matches!(cfg.figure_options(), Err(PlotError::InvalidColor(_))));
}

#[test]
fn rejects_misspelled_top_level_and_export_keys() {
    let err = NovaConfig::from_toml_str("colour_theme = \"dark\"").unwrap_err();
    assert!(matches!(err, PlotError::Config(_)));

    let err = NovaConfig::from_toml_str("[export]\ndip = 150.0").unwrap_err();
    assert!(matches!(err, PlotError::Config(_)));
}

#[test]
fn save_then_load() {
    let dir = std::path::Path::new("target/test_out");
    std::fs::create_dir_all(dir).unwrap();
    let path = dir.join("nova_config.toml");

    let cfg = NovaConfig::from_toml_str(SAMPLE).unwrap();
    cfg.save_to_file(&path).unwrap();
    let loaded = NovaConfig::from_file(&path).unwrap();
    assert_eq!(loaded, cfg);
}

#[test]
fn missing_file_is_an_io_error() {
    let err = NovaConfig::from_file("target/test_out/does_not_exist.toml").unwrap_err();
    assert!(matches!(err, PlotError::Io(_)));
}
