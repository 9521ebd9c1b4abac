// File: crates/nova-core/src/objects/error_bar.rs
// Summary: Data points with vertical (and optional horizontal) error bars and caps.

use crate::color::with_alpha;
use crate::error::{PlotError, Result};
use crate::legend::LegendHandle;
use crate::limits::{validate_xy, Bounds};
use crate::objects::{LineOptions, LineStyle, Marker, PlotObject};
use crate::render::{paint, DrawContext};

#[derive(Clone, Debug)]
pub struct ErrorBar {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub yerr: Vec<f64>,
    pub xerr: Option<Vec<f64>>,
    pub label: Option<String>,
    pub options: LineOptions,
    /// Cap length in points; 0 disables caps.
    pub capsize: f32,
}

impl ErrorBar {
    /// Error bars default to circle markers and no connecting line.
    pub fn new(x: Vec<f64>, y: Vec<f64>, yerr: Vec<f64>, xerr: Option<Vec<f64>>, label: Option<String>) -> Result<Self> {
        validate_xy(&x, &y)?;
        if yerr.len() != x.len() {
            return Err(PlotError::LengthMismatch { x: x.len(), y: yerr.len() });
        }
        if let Some(xe) = &xerr {
            if xe.len() != x.len() {
                return Err(PlotError::LengthMismatch { x: x.len(), y: xe.len() });
            }
        }
        let options = LineOptions { line_style: LineStyle::None, marker: Marker::Circle, ..LineOptions::default() };
        Ok(Self { x, y, yerr, xerr, label, options, capsize: 3.0 })
    }

    pub fn with_options(mut self, options: LineOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_capsize(mut self, capsize: f32) -> Self {
        self.capsize = capsize.max(0.0);
        self
    }
}

impl PlotObject for ErrorBar {
    fn label(&self) -> Option<&str> { self.label.as_deref() }

    fn bounds(&self) -> Bounds {
        let mut b = Bounds::default();
        for i in 0..self.x.len() {
            let ye = self.yerr[i].abs();
            let xe = self.xerr.as_ref().map(|v| v[i].abs()).unwrap_or(0.0);
            b.add_point(self.x[i] - xe, self.y[i] - ye);
            b.add_point(self.x[i] + xe, self.y[i] + ye);
        }
        b
    }

    fn sample_points(&self) -> Vec<(f64, f64)> {
        self.x.iter().copied().zip(self.y.iter().copied()).collect()
    }

    fn draw(&self, ctx: &mut DrawContext<'_>) -> LegendHandle {
        let o = &self.options;
        let color = with_alpha(ctx.color_or_next(o.color), o.alpha);
        let width = o.width.unwrap_or(ctx.style.line_width);
        let marker_size = o.marker_size.unwrap_or(ctx.style.marker_size);
        let bar = paint::stroke(color, width, LineStyle::Solid);
        let half_cap = self.capsize * 0.5;

        let mut centers = Vec::with_capacity(self.x.len());
        for i in 0..self.x.len() {
            let (x, y) = (self.x[i], self.y[i]);
            let e = self.yerr[i].abs();
            let (px, py) = ctx.map(x, y);
            let (_, lo) = ctx.map(x, y - e);
            let (_, hi) = ctx.map(x, y + e);
            let lo = if lo.is_finite() { lo } else { ctx.y_floor(0.0) };
            if px.is_finite() && hi.is_finite() {
                ctx.canvas.draw_line((px, lo), (px, hi), &bar);
                if half_cap > 0.0 {
                    ctx.canvas.draw_line((px - half_cap, lo), (px + half_cap, lo), &bar);
                    ctx.canvas.draw_line((px - half_cap, hi), (px + half_cap, hi), &bar);
                }
            }
            if let Some(xerr) = &self.xerr {
                let e = xerr[i].abs();
                let (left, _) = ctx.map(x - e, y);
                let (right, _) = ctx.map(x + e, y);
                if py.is_finite() && left.is_finite() && right.is_finite() {
                    ctx.canvas.draw_line((left, py), (right, py), &bar);
                    if half_cap > 0.0 {
                        ctx.canvas.draw_line((left, py - half_cap), (left, py + half_cap), &bar);
                        ctx.canvas.draw_line((right, py - half_cap), (right, py + half_cap), &bar);
                    }
                }
            }
            centers.push((px, py));
        }
        if o.line_style.is_visible() {
            paint::polyline(ctx.canvas, &centers, &paint::stroke(color, width, o.line_style));
        }
        for &(px, py) in &centers {
            paint::marker(ctx.canvas, o.marker, px, py, marker_size, color);
        }
        LegendHandle::ErrorBar { color, width, marker: o.marker, marker_size }
    }
}
