// File: crates/nova-core/src/legend.rs
// Summary: Legend presets, placement (including "best") and drawing of entries with handles.

use std::str::FromStr;

use skia_safe as skia;

use crate::color::with_alpha;
use crate::geometry::RectF;
use crate::objects::{LineStyle, Marker};
use crate::render::paint;
use crate::style::Style;
use crate::text::{HAlign, TextShaper, VAlign};
use crate::theme::ColorTheme;

/// How a legend entry's sample is drawn.
#[derive(Clone, Debug, PartialEq)]
pub enum LegendHandle {
    Line { color: skia::Color, width: f32, line_style: LineStyle, marker: Marker, marker_size: f32 },
    Patch { fill: Option<skia::Color>, edge: Option<skia::Color>, width: f32 },
    Band { fill: skia::Color, line: Option<(skia::Color, f32)> },
    ErrorBar { color: skia::Color, width: f32, marker: Marker, marker_size: f32 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub handle: LegendHandle,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LegendLoc {
    Best,
    UpperRight,
    UpperLeft,
    LowerLeft,
    LowerRight,
    Right,
    CenterLeft,
    CenterRight,
    LowerCenter,
    UpperCenter,
    Center,
}

/// Candidate order tried by [`LegendLoc::Best`].
pub const BEST_CANDIDATES: [LegendLoc; 10] = [
    LegendLoc::UpperRight,
    LegendLoc::UpperLeft,
    LegendLoc::LowerLeft,
    LegendLoc::LowerRight,
    LegendLoc::Right,
    LegendLoc::CenterLeft,
    LegendLoc::CenterRight,
    LegendLoc::LowerCenter,
    LegendLoc::UpperCenter,
    LegendLoc::Center,
];

impl LegendLoc {
    /// Horizontal/vertical fraction of the legend box that sits on the anchor (0 = left/top).
    fn fractions(self) -> (f32, f32) {
        match self {
            LegendLoc::Best | LegendLoc::UpperRight => (1.0, 0.0),
            LegendLoc::UpperLeft => (0.0, 0.0),
            LegendLoc::LowerLeft => (0.0, 1.0),
            LegendLoc::LowerRight => (1.0, 1.0),
            LegendLoc::Right | LegendLoc::CenterRight => (1.0, 0.5),
            LegendLoc::CenterLeft => (0.0, 0.5),
            LegendLoc::LowerCenter => (0.5, 1.0),
            LegendLoc::UpperCenter => (0.5, 0.0),
            LegendLoc::Center => (0.5, 0.5),
        }
    }
}

impl FromStr for LegendLoc {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, ()> {
        Ok(match s.trim().to_ascii_lowercase().replace('_', " ").as_str() {
            "best" | "0" => LegendLoc::Best,
            "upper right" | "1" => LegendLoc::UpperRight,
            "upper left" | "2" => LegendLoc::UpperLeft,
            "lower left" | "3" => LegendLoc::LowerLeft,
            "lower right" | "4" => LegendLoc::LowerRight,
            "right" | "5" => LegendLoc::Right,
            "center left" | "6" => LegendLoc::CenterLeft,
            "center right" | "7" => LegendLoc::CenterRight,
            "lower center" | "8" => LegendLoc::LowerCenter,
            "upper center" | "9" => LegendLoc::UpperCenter,
            "center" | "10" => LegendLoc::Center,
            _ => return Err(()),
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LegendOptions {
    pub loc: LegendLoc,
    /// Anchor point in axes fractions (x right, y up); `None` anchors inside the axes.
    pub anchor: Option<(f32, f32)>,
    pub frame: bool,
    /// Rounded, shadowed frame.
    pub fancy: bool,
    /// Font size in points; `None` uses the style's legend size.
    pub fontsize: Option<f32>,
    pub ncol: usize,
}

impl Default for LegendOptions {
    fn default() -> Self {
        Self { loc: LegendLoc::Best, anchor: None, frame: true, fancy: false, fontsize: None, ncol: 1 }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LegendPreset {
    DefaultInside,
    DefaultOutside,
    FancyInside,
    FancyOutside,
}

impl FromStr for LegendPreset {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, ()> {
        match s.trim().to_ascii_lowercase().replace('_', " ").as_str() {
            "default inside" => Ok(LegendPreset::DefaultInside),
            "default outside" => Ok(LegendPreset::DefaultOutside),
            "fancy inside" => Ok(LegendPreset::FancyInside),
            "fancy outside" => Ok(LegendPreset::FancyOutside),
            _ => Err(()),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum LegendSettings {
    Preset(LegendPreset),
    Custom(LegendOptions),
}

impl Default for LegendSettings {
    fn default() -> Self { LegendSettings::Preset(LegendPreset::DefaultInside) }
}

impl LegendSettings {
    /// Parse a preset name; unknown names warn and yield no legend.
    pub fn parse(name: &str) -> Option<Self> {
        match name.parse::<LegendPreset>() {
            Ok(p) => Some(LegendSettings::Preset(p)),
            Err(()) => {
                log::warn!("'{name}' is not a legend preset (default inside/outside, fancy inside/outside); legend disabled");
                None
            }
        }
    }

    /// Expand presets into concrete options.
    pub fn options(&self) -> LegendOptions {
        match self {
            LegendSettings::Preset(LegendPreset::DefaultInside) => LegendOptions { frame: false, ..LegendOptions::default() },
            LegendSettings::Preset(LegendPreset::DefaultOutside) => LegendOptions {
                loc: LegendLoc::UpperLeft,
                anchor: Some((1.0, 1.0)),
                frame: false,
                ..LegendOptions::default()
            },
            LegendSettings::Preset(LegendPreset::FancyInside) => LegendOptions { fancy: true, ..LegendOptions::default() },
            LegendSettings::Preset(LegendPreset::FancyOutside) => LegendOptions {
                loc: LegendLoc::UpperLeft,
                anchor: Some((1.0, 1.0)),
                fancy: true,
                ..LegendOptions::default()
            },
            LegendSettings::Custom(o) => o.clone(),
        }
    }
}

struct Metrics {
    fs: f32,
    handle_len: f32,
    handle_h: f32,
    text_pad: f32,
    row_gap: f32,
    border_pad: f32,
    axes_pad: f32,
    col_gap: f32,
}

impl Metrics {
    fn new(fs: f32) -> Self {
        Self {
            fs,
            handle_len: 2.0 * fs,
            handle_h: 0.7 * fs,
            text_pad: 0.8 * fs,
            row_gap: 0.5 * fs,
            border_pad: 0.4 * fs,
            axes_pad: 0.5 * fs,
            col_gap: 2.0 * fs,
        }
    }
}

/// Size of the legend box plus per-column widths and the row height.
fn measure(entries: &[LegendEntry], opts: &LegendOptions, m: &Metrics, shaper: &TextShaper) -> (f32, f32, Vec<f32>, f32) {
    let ncol = opts.ncol.max(1).min(entries.len().max(1));
    let nrow = entries.len().div_ceil(ncol);
    let sizes: Vec<(f32, f32)> = entries.iter().map(|e| shaper.measure(&e.label, m.fs)).collect();
    let row_h = sizes.iter().map(|s| s.1).fold(m.handle_h, f32::max);
    let mut col_w = vec![0.0f32; ncol];
    for (i, s) in sizes.iter().enumerate() {
        let c = i / nrow;
        col_w[c] = col_w[c].max(m.handle_len + m.text_pad + s.0);
    }
    let w = 2.0 * m.border_pad + col_w.iter().sum::<f32>() + m.col_gap * (ncol as f32 - 1.0);
    let h = 2.0 * m.border_pad + nrow as f32 * row_h + m.row_gap * (nrow as f32 - 1.0).max(0.0);
    (w, h, col_w, row_h)
}

fn place(loc: LegendLoc, anchor: Option<(f32, f32)>, w: f32, h: f32, plot: &RectF, pad: f32) -> RectF {
    let (fx, fy) = loc.fractions();
    let (ax, ay) = match anchor {
        Some((ux, uy)) => {
            let px = plot.left + ux * plot.width();
            let py = plot.bottom - uy * plot.height();
            // push away from the anchor on the side the box extends to
            let away = |f: f32| if f == 0.0 { pad } else if f == 1.0 { -pad } else { 0.0 };
            (px + away(fx), py + away(fy))
        }
        None => {
            let inner = RectF::from_ltrb(plot.left + pad, plot.top + pad, plot.right - pad, plot.bottom - pad);
            (inner.left + fx * inner.width(), inner.top + fy * inner.height())
        }
    };
    RectF::from_ltwh(ax - fx * w, ay - fy * h, w, h)
}

/// Pick the candidate location covering the fewest data points (earlier candidates win ties).
pub fn best_location(w: f32, h: f32, plot: &RectF, pad: f32, points: &[(f32, f32)]) -> LegendLoc {
    let mut best = (LegendLoc::UpperRight, usize::MAX);
    for loc in BEST_CANDIDATES {
        let r = place(loc, None, w, h, plot, pad);
        let hits = points.iter().filter(|(x, y)| r.contains(*x, *y)).count();
        if hits < best.1 {
            best = (loc, hits);
        }
    }
    best.0
}

fn draw_handle(canvas: &skia::Canvas, handle: &LegendHandle, x: f32, cy: f32, m: &Metrics) {
    let x1 = x + m.handle_len;
    let top = cy - m.handle_h * 0.5;
    let rect = skia::Rect::from_ltrb(x, top, x1, top + m.handle_h);
    match handle {
        LegendHandle::Line { color, width, line_style, marker, marker_size } => {
            if line_style.is_visible() {
                canvas.draw_line((x, cy), (x1, cy), &paint::stroke(*color, *width, *line_style));
            }
            paint::marker(canvas, *marker, (x + x1) * 0.5, cy, *marker_size, *color);
        }
        LegendHandle::Patch { fill, edge, width } => {
            if let Some(f) = fill {
                canvas.draw_rect(rect, &paint::fill(*f));
            }
            if let Some(e) = edge {
                canvas.draw_rect(rect, &paint::stroke(*e, *width, LineStyle::Solid));
            }
        }
        LegendHandle::Band { fill, line } => {
            canvas.draw_rect(rect, &paint::fill(*fill));
            if let Some((c, w)) = line {
                canvas.draw_line((x, cy), (x1, cy), &paint::stroke(*c, *w, LineStyle::Solid));
            }
        }
        LegendHandle::ErrorBar { color, width, marker, marker_size } => {
            let mx = (x + x1) * 0.5;
            canvas.draw_line((mx, top), (mx, top + m.handle_h), &paint::stroke(*color, *width, LineStyle::Solid));
            paint::marker(canvas, *marker, mx, cy, *marker_size, *color);
        }
    }
}

/// Draw the legend for `entries` and return its box (empty entries draw nothing).
#[allow(clippy::too_many_arguments)]
pub fn draw_legend(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    entries: &[LegendEntry],
    opts: &LegendOptions,
    plot: &RectF,
    points: &[(f32, f32)],
    style: &Style,
    theme: &ColorTheme,
) -> Option<RectF> {
    if entries.is_empty() {
        return None;
    }
    let m = Metrics::new(opts.fontsize.unwrap_or(style.legend_size));
    let (w, h, col_w, row_h) = measure(entries, opts, &m, shaper);
    let loc = match (opts.loc, opts.anchor) {
        (LegendLoc::Best, None) => best_location(w, h, plot, m.axes_pad, points),
        (loc, _) => loc,
    };
    let rect = place(loc, opts.anchor, w, h, plot, m.axes_pad);

    if opts.frame || opts.fancy {
        let r = rect.to_skia();
        let radius = if opts.fancy { 0.2 * m.fs } else { 0.0 };
        if opts.fancy {
            let shadow = r.with_offset((2.0, 2.0));
            canvas.draw_round_rect(shadow, radius, radius, &paint::fill(skia::Color::from_argb(77, 0, 0, 0)));
        }
        canvas.draw_round_rect(r, radius, radius, &paint::fill(with_alpha(theme.axes_background, 0.8)));
        let edge = skia::Color::from_argb(255, 204, 204, 204);
        canvas.draw_round_rect(r, radius, radius, &paint::stroke(edge, 0.8, LineStyle::Solid));
    }

    let ncol = col_w.len();
    let nrow = entries.len().div_ceil(ncol);
    for (i, entry) in entries.iter().enumerate() {
        let col = i / nrow;
        let row = i % nrow;
        let x = rect.left + m.border_pad + col_w[..col].iter().sum::<f32>() + m.col_gap * col as f32;
        let cy = rect.top + m.border_pad + row as f32 * (row_h + m.row_gap) + row_h * 0.5;
        draw_handle(canvas, &entry.handle, x, cy, &m);
        shaper.draw(canvas, &entry.label, x + m.handle_len + m.text_pad, cy, m.fs, theme.text, HAlign::Left, VAlign::Center, 0.0);
    }
    Some(rect)
}
