// File: crates/nova-core/src/objects/step.rs
// Summary: Step (staircase) series.

use crate::color::with_alpha;
use crate::error::Result;
use crate::legend::LegendHandle;
use crate::limits::{validate_xy, Bounds};
use crate::objects::{LineOptions, PlotObject};
use crate::render::{paint, DrawContext};

/// Where the level change happens relative to each x.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum StepWhere {
    /// y[i] holds on (x[i-1], x[i]].
    #[default]
    Pre,
    /// y[i] holds on [x[i], x[i+1]).
    Post,
    /// Changes halfway between samples.
    Mid,
}

#[derive(Clone, Debug)]
pub struct Step {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub label: Option<String>,
    pub at: StepWhere,
    pub options: LineOptions,
}

impl Step {
    pub fn new(x: Vec<f64>, y: Vec<f64>, label: Option<String>, at: StepWhere, options: LineOptions) -> Result<Self> {
        validate_xy(&x, &y)?;
        Ok(Self { x, y, label, at, options })
    }

    /// Corner points of the staircase in data coordinates.
    pub fn vertices(&self) -> Vec<(f64, f64)> {
        let n = self.x.len();
        let mut out = Vec::with_capacity(2 * n);
        if n == 0 {
            return out;
        }
        out.push((self.x[0], self.y[0]));
        for i in 1..n {
            match self.at {
                StepWhere::Pre => {
                    out.push((self.x[i - 1], self.y[i]));
                }
                StepWhere::Post => {
                    out.push((self.x[i], self.y[i - 1]));
                }
                StepWhere::Mid => {
                    let xm = 0.5 * (self.x[i - 1] + self.x[i]);
                    out.push((xm, self.y[i - 1]));
                    out.push((xm, self.y[i]));
                }
            }
            out.push((self.x[i], self.y[i]));
        }
        out
    }
}

impl PlotObject for Step {
    fn label(&self) -> Option<&str> { self.label.as_deref() }

    fn bounds(&self) -> Bounds {
        let mut b = Bounds::default();
        for (&x, &y) in self.x.iter().zip(&self.y) {
            b.add_point(x, y);
        }
        b
    }

    fn sample_points(&self) -> Vec<(f64, f64)> { self.vertices() }

    fn draw(&self, ctx: &mut DrawContext<'_>) -> LegendHandle {
        let o = &self.options;
        let color = with_alpha(ctx.color_or_next(o.color), o.alpha);
        let width = o.width.unwrap_or(ctx.style.line_width);
        let marker_size = o.marker_size.unwrap_or(ctx.style.marker_size);
        let pts: Vec<(f32, f32)> = self.vertices().into_iter().map(|(x, y)| ctx.map(x, y)).collect();
        if o.line_style.is_visible() {
            paint::polyline(ctx.canvas, &pts, &paint::stroke(color, width, o.line_style));
        }
        for (&x, &y) in self.x.iter().zip(&self.y) {
            let (px, py) = ctx.map(x, y);
            paint::marker(ctx.canvas, o.marker, px, py, marker_size, color);
        }
        LegendHandle::Line { color, width, line_style: o.line_style, marker: o.marker, marker_size }
    }
}
