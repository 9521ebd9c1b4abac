// File: crates/nova-core/tests/text.rs
// Purpose: Math text conversion, color strings and line option parsing.

use nova_core::color::{parse_color, with_alpha, TAB10};
use nova_core::mathtext::{superscript, to_plain};
use nova_core::{LineOptions, LineStyle, Marker, PlotError};
use skia_safe::Color;

#[test]
fn math_segments_become_unicode() {
    assert_eq!(to_plain("$10^{-3}$"), "10⁻³");
    assert_eq!(to_plain("$\\alpha$ decay"), "α decay");
    assert_eq!(to_plain("E = $mc^2$"), "E = mc²");
    assert_eq!(to_plain("$x_1$ and $x_2$"), "x₁ and x₂");
    assert_eq!(to_plain("$\\frac{a}{b}$"), "a/b");
    assert_eq!(to_plain("$\\mathrm{GeV}$"), "GeV");
}

#[test]
fn text_without_math_is_untouched() {
    assert_eq!(to_plain("plain label"), "plain label");
    assert_eq!(to_plain("costs $5"), "costs $5");
}

#[test]
fn scripts_without_glyphs_keep_a_marker() {
    assert_eq!(to_plain("$x^{abc}$"), "x^(abc)");
    assert_eq!(superscript("12"), "¹²");
}

#[test]
fn color_strings() {
    assert_eq!(parse_color("#ff0000").unwrap(), Color::from_rgb(255, 0, 0));
    assert_eq!(parse_color("#0f0").unwrap(), Color::from_rgb(0, 255, 0));
    assert_eq!(parse_color("#00000080").unwrap().a(), 0x80);
    assert_eq!(parse_color("r").unwrap(), Color::from_rgb(255, 0, 0));
    assert_eq!(parse_color(" Black ").unwrap(), Color::BLACK);
    assert_eq!(parse_color("tab:blue").unwrap(), TAB10[0]);
    assert!(matches!(parse_color("#12"), Err(PlotError::InvalidColor(_))));
    assert!(matches!(parse_color("tab:teal"), Err(PlotError::InvalidColor(_))));
}

#[test]
fn alpha_is_clamped() {
    assert_eq!(with_alpha(Color::BLACK, 0.5).a(), 128);
    assert_eq!(with_alpha(Color::BLACK, 3.0).a(), 255);
}

#[test]
fn alpha_scales_existing_transparency() {
    let half = Color::from_argb(128, 10, 20, 30);
    assert_eq!(with_alpha(half, 0.5).a(), 64);
    assert_eq!(with_alpha(half, 1.0).a(), 128);
    assert_eq!(with_alpha(half, 0.5).r(), 10);
}

#[test]
fn line_options_from_format_shorthands() {
    let o = LineOptions::new().c("k").unwrap().ls("--").unwrap().marker("o").unwrap().lw(2.0).ms(-1.0);
    assert_eq!(o.color, Some(Color::BLACK));
    assert_eq!(o.line_style, LineStyle::Dashed);
    assert_eq!(o.marker, Marker::Circle);
    assert_eq!(o.width, Some(2.0));
    assert_eq!(o.marker_size, Some(0.0));

    assert!(matches!(LineOptions::new().ls("~~"), Err(PlotError::InvalidLineStyle(_))));
    assert!(matches!(LineOptions::new().marker("?"), Err(PlotError::InvalidMarker(_))));
}
