// File: crates/nova-core/src/objects/options.rs
// Summary: Line style, marker and per-series styling options shared by plot objects.

use std::str::FromStr;

use skia_safe as skia;

use crate::color::parse_color;
use crate::error::{PlotError, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LineStyle {
    #[default]
    Solid,
    Dashed,
    DashDot,
    Dotted,
    None,
}

impl LineStyle {
    /// Dash pattern in multiples of the line width; empty for solid lines.
    pub fn dash_pattern(&self) -> &'static [f32] {
        match self {
            LineStyle::Solid | LineStyle::None => &[],
            LineStyle::Dashed => &[3.7, 1.6],
            LineStyle::DashDot => &[6.4, 1.6, 1.0, 1.6],
            LineStyle::Dotted => &[1.0, 1.65],
        }
    }

    pub fn is_visible(&self) -> bool { *self != LineStyle::None }
}

impl FromStr for LineStyle {
    type Err = PlotError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "-" | "solid" => Ok(LineStyle::Solid),
            "--" | "dashed" => Ok(LineStyle::Dashed),
            "-." | "dashdot" | "dash-dot" | "dash_dot" => Ok(LineStyle::DashDot),
            ":" | "dotted" => Ok(LineStyle::Dotted),
            "" | "none" | " " => Ok(LineStyle::None),
            _ => Err(PlotError::InvalidLineStyle(s.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Marker {
    #[default]
    None,
    Point,
    Circle,
    Square,
    TriangleUp,
    TriangleDown,
    Diamond,
    Plus,
    Cross,
    Star,
}

impl FromStr for Marker {
    type Err = PlotError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "" | "none" | "None" => Ok(Marker::None),
            "." | "point" => Ok(Marker::Point),
            "o" | "circle" => Ok(Marker::Circle),
            "s" | "square" => Ok(Marker::Square),
            "^" | "triangle_up" => Ok(Marker::TriangleUp),
            "v" | "triangle_down" => Ok(Marker::TriangleDown),
            "D" | "d" | "diamond" => Ok(Marker::Diamond),
            "+" | "plus" => Ok(Marker::Plus),
            "x" | "cross" => Ok(Marker::Cross),
            "*" | "star" => Ok(Marker::Star),
            _ => Err(PlotError::InvalidMarker(s.to_string())),
        }
    }
}

/// Styling of a points/lines series. `None` fields take the figure style's defaults
/// (`line_width`, `marker_size`) or the next palette color.
#[derive(Clone, Debug, PartialEq)]
pub struct LineOptions {
    pub color: Option<skia::Color>,
    pub line_style: LineStyle,
    pub width: Option<f32>,
    pub marker: Marker,
    pub marker_size: Option<f32>,
    pub alpha: f32,
    /// Downsample to at most this many points before drawing.
    pub max_points: Option<usize>,
}

impl Default for LineOptions {
    fn default() -> Self {
        Self {
            color: None,
            line_style: LineStyle::Solid,
            width: None,
            marker: Marker::None,
            marker_size: None,
            alpha: 1.0,
            max_points: None,
        }
    }
}

impl LineOptions {
    pub fn new() -> Self { Self::default() }

    /// Markers only, no connecting line.
    pub fn points() -> Self {
        Self { line_style: LineStyle::None, marker: Marker::Circle, ..Self::default() }
    }

    /// Line and markers.
    pub fn points_lines() -> Self {
        Self { marker: Marker::Circle, ..Self::default() }
    }

    /// Matplotlib-style `c=`: a color string.
    pub fn c(mut self, color: &str) -> Result<Self> {
        self.color = Some(parse_color(color)?);
        Ok(self)
    }

    /// Matplotlib-style `ls=`: a line style string.
    pub fn ls(mut self, style: &str) -> Result<Self> {
        self.line_style = style.parse()?;
        Ok(self)
    }

    /// Matplotlib-style `lw=`.
    pub fn lw(mut self, width: f32) -> Self {
        self.width = Some(width.max(0.0));
        self
    }

    pub fn marker(mut self, marker: &str) -> Result<Self> {
        self.marker = marker.parse()?;
        Ok(self)
    }

    pub fn ms(mut self, size: f32) -> Self {
        self.marker_size = Some(size.max(0.0));
        self
    }

    pub fn color(mut self, color: skia::Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha.clamp(0.0, 1.0);
        self
    }

    pub fn max_points(mut self, n: usize) -> Self {
        self.max_points = Some(n);
        self
    }
}
