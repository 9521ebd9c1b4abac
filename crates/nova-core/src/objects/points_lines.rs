// File: crates/nova-core/src/objects/points_lines.rs
// Summary: Points and/or lines series (y vs x) with optional LTTB downsampling.

use crate::color::with_alpha;
use crate::downsample::lttb_indices;
use crate::error::Result;
use crate::legend::LegendHandle;
use crate::limits::{validate_xy, Bounds};
use crate::objects::{thin, LineOptions, PlotObject};
use crate::render::{paint, DrawContext};

/// Cap on the number of points reported for legend placement.
const SAMPLE_CAP: usize = 2_000;

#[derive(Clone, Debug)]
pub struct PointsLines {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub label: Option<String>,
    pub options: LineOptions,
}

impl PointsLines {
    pub fn new(x: Vec<f64>, y: Vec<f64>, label: Option<String>, options: LineOptions) -> Result<Self> {
        validate_xy(&x, &y)?;
        Ok(Self { x, y, label, options })
    }

    /// Points actually drawn, after optional downsampling.
    pub fn drawn_points(&self) -> Vec<(f64, f64)> {
        match self.options.max_points {
            Some(max) if self.x.len() > max => {
                let idx = lttb_indices(&self.x, &self.y, max);
                log::debug!("downsampled '{}' from {} to {} points", self.label.as_deref().unwrap_or(""), self.x.len(), idx.len());
                idx.into_iter().map(|i| (self.x[i], self.y[i])).collect()
            }
            _ => self.x.iter().copied().zip(self.y.iter().copied()).collect(),
        }
    }
}

impl PlotObject for PointsLines {
    fn label(&self) -> Option<&str> { self.label.as_deref() }

    fn bounds(&self) -> Bounds {
        let mut b = Bounds::default();
        for (&x, &y) in self.x.iter().zip(&self.y) {
            b.add_point(x, y);
        }
        b
    }

    fn sample_points(&self) -> Vec<(f64, f64)> { thin(self.drawn_points(), SAMPLE_CAP) }

    fn draw(&self, ctx: &mut DrawContext<'_>) -> LegendHandle {
        let o = &self.options;
        let color = with_alpha(ctx.color_or_next(o.color), o.alpha);
        let width = o.width.unwrap_or(ctx.style.line_width);
        let marker_size = o.marker_size.unwrap_or(ctx.style.marker_size);
        let pts: Vec<(f32, f32)> = self.drawn_points().into_iter().map(|(x, y)| ctx.map(x, y)).collect();

        if o.line_style.is_visible() && width > 0.0 {
            paint::polyline(ctx.canvas, &pts, &paint::stroke(color, width, o.line_style));
        }
        for &(px, py) in &pts {
            paint::marker(ctx.canvas, o.marker, px, py, marker_size, color);
        }
        LegendHandle::Line { color, width, line_style: o.line_style, marker: o.marker, marker_size }
    }
}
