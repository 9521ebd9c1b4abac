// File: crates/nova-core/src/objects/fill_between.rs
// Summary: Translucent band between a low and high curve with the central curve on top.

use skia_safe as skia;

use crate::color::with_alpha;
use crate::error::{PlotError, Result};
use crate::legend::LegendHandle;
use crate::limits::{validate_xy, Bounds};
use crate::objects::{thin, LineStyle, PlotObject};
use crate::render::{paint, DrawContext};

#[derive(Clone, Debug)]
pub struct FillBetween {
    pub x: Vec<f64>,
    pub low: Vec<f64>,
    pub mid: Vec<f64>,
    pub high: Vec<f64>,
    pub label: Option<String>,
    pub color: Option<skia::Color>,
    /// Band opacity; the mid line is drawn opaque.
    pub alpha: f32,
}

impl FillBetween {
    pub fn new(x: Vec<f64>, low: Vec<f64>, mid: Vec<f64>, high: Vec<f64>, label: Option<String>) -> Result<Self> {
        validate_xy(&x, &mid)?;
        for other in [&low, &high] {
            if other.len() != x.len() {
                return Err(PlotError::LengthMismatch { x: x.len(), y: other.len() });
            }
        }
        Ok(Self { x, low, mid, high, label, color: None, alpha: 0.3 })
    }

    pub fn with_color(mut self, color: skia::Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha.clamp(0.0, 1.0);
        self
    }
}

impl PlotObject for FillBetween {
    fn label(&self) -> Option<&str> { self.label.as_deref() }

    fn bounds(&self) -> Bounds {
        let mut b = Bounds::default();
        for i in 0..self.x.len() {
            b.add_point(self.x[i], self.low[i]);
            b.add_point(self.x[i], self.high[i]);
            b.add_point(self.x[i], self.mid[i]);
        }
        b
    }

    fn sample_points(&self) -> Vec<(f64, f64)> {
        let mut pts: Vec<(f64, f64)> = Vec::with_capacity(self.x.len() * 2);
        for i in 0..self.x.len() {
            pts.push((self.x[i], self.low[i]));
            pts.push((self.x[i], self.high[i]));
        }
        thin(pts, 2_000)
    }

    fn draw(&self, ctx: &mut DrawContext<'_>) -> LegendHandle {
        let color = ctx.color_or_next(self.color);
        let band = with_alpha(color, self.alpha);

        let mut outline: Vec<(f32, f32)> = self.x.iter().zip(&self.high).map(|(&x, &y)| ctx.map(x, y)).collect();
        outline.extend(self.x.iter().zip(&self.low).rev().map(|(&x, &y)| ctx.map(x, y)));
        paint::polygon(ctx.canvas, &outline, &paint::fill(band));

        let width = ctx.style.line_width;
        let mid: Vec<(f32, f32)> = self.x.iter().zip(&self.mid).map(|(&x, &y)| ctx.map(x, y)).collect();
        paint::polyline(ctx.canvas, &mid, &paint::stroke(color, width, LineStyle::Solid));
        LegendHandle::Band { fill: band, line: Some((color, width)) }
    }
}
