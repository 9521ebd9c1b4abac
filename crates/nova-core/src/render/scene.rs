// File: crates/nova-core/src/render/scene.rs
// Summary: Resolved figure description (panels, axes, objects, legend, annotations) ready to draw.

use skia_safe as skia;

use crate::annotation::TextAnnotation;
use crate::axis::Axis;
use crate::geometry::RectF;
use crate::legend::LegendOptions;
use crate::objects::{LineStyle, PlotObject};
use crate::style::Style;
use crate::theme::ColorTheme;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A line across the whole panel at a fixed data value (ratio reference, mean markers).
#[derive(Clone, Debug, PartialEq)]
pub struct RefLine {
    pub orientation: Orientation,
    pub value: f64,
    /// `None` uses the theme's text colour.
    pub color: Option<skia::Color>,
    pub line_style: LineStyle,
    pub width: Option<f32>,
}

impl RefLine {
    pub fn horizontal(value: f64) -> Self {
        Self { orientation: Orientation::Horizontal, value, color: None, line_style: LineStyle::Solid, width: None }
    }

    pub fn vertical(value: f64) -> Self {
        Self { orientation: Orientation::Vertical, ..Self::horizontal(value) }
    }

    pub fn styled(mut self, color: Option<skia::Color>, line_style: LineStyle) -> Self {
        self.color = color;
        self.line_style = line_style;
        self
    }
}

/// One axes: rectangle in figure points plus everything drawn in it.
pub struct Panel<'a> {
    pub rect: RectF,
    pub x: Axis,
    pub y: Axis,
    pub objects: Vec<Box<dyn PlotObject + 'a>>,
    pub ref_lines: Vec<RefLine>,
    /// `None` hides the legend.
    pub legend: Option<LegendOptions>,
    pub annotations: Vec<TextAnnotation>,
    /// Grid line style; `None` hides the grid.
    pub grid: Option<LineStyle>,
}

impl<'a> Panel<'a> {
    pub fn new(rect: RectF, x: Axis, y: Axis) -> Self {
        Self {
            rect,
            x,
            y,
            objects: Vec::new(),
            ref_lines: Vec::new(),
            legend: None,
            annotations: Vec::new(),
            grid: None,
        }
    }
}

/// Everything the renderer needs; sizes are in points (1/72 in).
pub struct Scene<'a> {
    pub size: (f32, f32),
    pub dpi: f32,
    pub title: Option<String>,
    pub style: Style,
    pub theme: ColorTheme,
    pub panels: Vec<Panel<'a>>,
}

impl Scene<'_> {
    /// Full figure rectangle in points.
    pub fn bounds(&self) -> RectF { RectF::from_ltwh(0.0, 0.0, self.size.0, self.size.1) }
}
