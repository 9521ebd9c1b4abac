// File: crates/nova-core/src/style.rs
// Summary: Style presets (figure size, fonts, ticks, line defaults) and override merging.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TickDirection {
    In,
    Out,
}

/// Where axis labels sit along their axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelPlacement {
    /// Centered under/beside the axis.
    Centered,
    /// x label flush right, y label flush top.
    Corner,
}

/// Tick geometry for one axis family (both x and y use the same values).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickStyle {
    pub direction: TickDirection,
    /// Draw ticks on the top and right spines too.
    pub mirrored: bool,
    pub major_size: f32,
    pub minor_size: f32,
    pub major_width: f32,
    pub minor_width: f32,
}

/// A resolved style: every size is in points, the figure size in inches.
#[derive(Clone, Debug, PartialEq)]
pub struct Style {
    pub figure_size: (f32, f32),
    pub font_family: String,
    pub title_size: f32,
    pub label_size: f32,
    pub tick_label_size: f32,
    pub legend_size: f32,
    pub ticks: TickStyle,
    pub line_width: f32,
    pub marker_size: f32,
    pub axes_line_width: f32,
    /// Request TeX-style math rendering; math segments are converted to plain Unicode text.
    pub use_tex: bool,
    pub label_placement: LabelPlacement,
}

/// Preset names, in lookup order.
pub const PRESET_NAMES: [&str; 5] = ["default", "publication small", "publication", "presentation", "ATLAS"];

impl Style {
    /// Library base every preset starts from.
    pub fn base() -> Self {
        Self {
            figure_size: (6.4, 4.8),
            font_family: "sans-serif".into(),
            title_size: 12.0,
            label_size: 10.0,
            tick_label_size: 10.0,
            legend_size: 10.0,
            ticks: TickStyle {
                direction: TickDirection::Out,
                mirrored: false,
                major_size: 3.5,
                minor_size: 2.0,
                major_width: 0.8,
                minor_width: 0.6,
            },
            line_width: 1.5,
            marker_size: 6.0,
            axes_line_width: 0.8,
            use_tex: false,
            label_placement: LabelPlacement::Centered,
        }
    }

    /// Quick-plotting default; no TeX.
    pub fn default_preset() -> Self {
        Self {
            figure_size: (6.0, 4.0),
            font_family: "serif".into(),
            title_size: 14.0,
            label_size: 12.0,
            tick_label_size: 10.0,
            legend_size: 10.0,
            ticks: TickStyle {
                direction: TickDirection::Out,
                mirrored: false,
                major_size: 6.0,
                minor_size: 3.0,
                major_width: 1.1,
                minor_width: 0.75,
            },
            ..Self::base()
        }
    }

    pub fn publication_small() -> Self {
        Self {
            figure_size: (4.0, 3.0),
            font_family: "Times New Roman".into(),
            title_size: 12.0,
            label_size: 10.0,
            tick_label_size: 8.0,
            legend_size: 8.0,
            ticks: TickStyle {
                direction: TickDirection::In,
                mirrored: true,
                major_size: 5.0,
                minor_size: 3.0,
                major_width: 1.0,
                minor_width: 0.75,
            },
            use_tex: true,
            label_placement: LabelPlacement::Corner,
            ..Self::base()
        }
    }

    pub fn publication() -> Self {
        Self {
            figure_size: (6.0, 4.0),
            font_family: "Times New Roman".into(),
            title_size: 14.0,
            label_size: 12.0,
            tick_label_size: 10.0,
            legend_size: 10.0,
            ticks: TickStyle {
                direction: TickDirection::In,
                mirrored: true,
                major_size: 6.0,
                minor_size: 3.0,
                major_width: 1.25,
                minor_width: 0.8,
            },
            label_placement: LabelPlacement::Corner,
            ..Self::base()
        }
    }

    /// Larger figure and strokes for slides.
    pub fn presentation() -> Self {
        Self {
            figure_size: (10.0, 6.0),
            title_size: 18.0,
            label_size: 16.0,
            line_width: 3.0,
            marker_size: 8.0,
            ..Self::base()
        }
    }

    pub fn atlas() -> Self {
        Self { label_placement: LabelPlacement::Corner, ..Self::base() }
    }

    /// Exact preset lookup.
    pub fn preset(name: &str) -> Option<Self> {
        match name {
            "default" => Some(Self::default_preset()),
            "publication small" => Some(Self::publication_small()),
            "publication" => Some(Self::publication()),
            "presentation" => Some(Self::presentation()),
            "ATLAS" => Some(Self::atlas()),
            _ => None,
        }
    }

    /// Preset lookup falling back to `default`.
    pub fn find(name: &str) -> Self {
        Self::preset(name).unwrap_or_else(|| {
            log::warn!("unknown style preset '{name}', using 'default'");
            Self::default_preset()
        })
    }

    /// Font families to try, most specific first.
    pub fn font_families(&self) -> Vec<String> {
        let fallbacks: &[&str] = match self.font_family.to_ascii_lowercase().as_str() {
            "serif" => &["DejaVu Serif", "Times New Roman", "Liberation Serif", "serif"],
            "sans-serif" | "sans" => &["DejaVu Sans", "Segoe UI", "Arial", "Helvetica", "Liberation Sans", "sans-serif"],
            "monospace" => &["DejaVu Sans Mono", "Consolas", "Menlo", "monospace"],
            "times new roman" | "times" => &["Times New Roman", "Liberation Serif", "DejaVu Serif", "serif"],
            _ => &["DejaVu Sans", "sans-serif"],
        };
        let mut out = vec![self.font_family.clone()];
        out.extend(fallbacks.iter().map(|s| s.to_string()).filter(|s| *s != self.font_family));
        out
    }

    /// Copy with every field present in `o` replaced.
    pub fn merged(&self, o: &StyleOverrides) -> Self {
        let mut s = self.clone();
        if let Some(v) = o.figure_size { s.figure_size = v; }
        if let Some(v) = &o.font_family { s.font_family = v.clone(); }
        if let Some(v) = o.title_size { s.title_size = v; }
        if let Some(v) = o.label_size { s.label_size = v; }
        if let Some(v) = o.tick_label_size { s.tick_label_size = v; }
        if let Some(v) = o.legend_size { s.legend_size = v; }
        if let Some(v) = o.tick_direction { s.ticks.direction = v; }
        if let Some(v) = o.ticks_mirrored { s.ticks.mirrored = v; }
        if let Some(v) = o.major_tick_size { s.ticks.major_size = v; }
        if let Some(v) = o.minor_tick_size { s.ticks.minor_size = v; }
        if let Some(v) = o.major_tick_width { s.ticks.major_width = v; }
        if let Some(v) = o.minor_tick_width { s.ticks.minor_width = v; }
        if let Some(v) = o.line_width { s.line_width = v; }
        if let Some(v) = o.marker_size { s.marker_size = v; }
        if let Some(v) = o.axes_line_width { s.axes_line_width = v; }
        if let Some(v) = o.use_tex { s.use_tex = v; }
        if let Some(v) = o.label_placement { s.label_placement = v; }
        s
    }
}

impl Default for Style {
    fn default() -> Self { Self::default_preset() }
}

/// Partial style; unset fields keep the preset's value.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleOverrides {
    pub figure_size: Option<(f32, f32)>,
    pub font_family: Option<String>,
    pub title_size: Option<f32>,
    pub label_size: Option<f32>,
    pub tick_label_size: Option<f32>,
    pub legend_size: Option<f32>,
    pub tick_direction: Option<TickDirection>,
    pub ticks_mirrored: Option<bool>,
    pub major_tick_size: Option<f32>,
    pub minor_tick_size: Option<f32>,
    pub major_tick_width: Option<f32>,
    pub minor_tick_width: Option<f32>,
    pub line_width: Option<f32>,
    pub marker_size: Option<f32>,
    pub axes_line_width: Option<f32>,
    pub use_tex: Option<bool>,
    pub label_placement: Option<LabelPlacement>,
}

impl StyleOverrides {
    pub fn is_empty(&self) -> bool { *self == Self::default() }
}

/// Style selection for a figure: a preset name or a fully custom style.
#[derive(Clone, Debug, PartialEq)]
pub enum StyleChoice {
    Named(String),
    Custom(Style),
}

impl StyleChoice {
    /// Resolve to `(name, style)`. Unknown names keep the requested name but draw with the
    /// default preset; custom styles are named "custom".
    pub fn resolve(&self) -> (String, Style) {
        match self {
            StyleChoice::Named(name) => (name.clone(), Style::find(name)),
            StyleChoice::Custom(style) => ("custom".to_string(), style.clone()),
        }
    }
}

impl Default for StyleChoice {
    fn default() -> Self { StyleChoice::Named("default".into()) }
}

impl From<&str> for StyleChoice {
    fn from(name: &str) -> Self { StyleChoice::Named(name.to_string()) }
}

impl From<String> for StyleChoice {
    fn from(name: String) -> Self { StyleChoice::Named(name) }
}

impl From<Style> for StyleChoice {
    fn from(style: Style) -> Self { StyleChoice::Custom(style) }
}
