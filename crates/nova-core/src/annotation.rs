// File: crates/nova-core/src/annotation.rs
// Summary: Free text placed on a panel in axes fractions or data coordinates.

use skia_safe as skia;

use crate::error::Result;
use crate::geometry::RectF;
use crate::render::DrawContext;
use crate::text::{HAlign, VAlign};

/// Coordinate system of an annotation's anchor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CoordSystem {
    /// (0, 0) is the lower-left corner of the axes, (1, 1) the upper-right.
    #[default]
    Axes,
    Data,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextAnnotation {
    pub text: String,
    pub coords: (f64, f64),
    pub system: CoordSystem,
    /// `None` uses the theme's text colour.
    pub color: Option<skia::Color>,
    /// `None` uses the style's legend size.
    pub size: Option<f32>,
    pub ha: HAlign,
    pub va: VAlign,
}

impl TextAnnotation {
    /// Text anchored by its lower-left corner at axes fractions `(x, y)`.
    pub fn axes(text: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            text: text.into(),
            coords: (x, y),
            system: CoordSystem::Axes,
            color: None,
            size: None,
            ha: HAlign::Left,
            va: VAlign::Baseline,
        }
    }

    /// Text anchored at a data point.
    pub fn data(text: impl Into<String>, x: f64, y: f64) -> Self {
        Self { system: CoordSystem::Data, ..Self::axes(text, x, y) }
    }

    pub fn color(mut self, color: &str) -> Result<Self> {
        self.color = Some(crate::color::parse_color(color)?);
        Ok(self)
    }

    pub fn size(mut self, size: f32) -> Self {
        self.size = Some(size);
        self
    }

    pub fn align(mut self, ha: HAlign, va: VAlign) -> Self {
        self.ha = ha;
        self.va = va;
        self
    }

    /// Anchor in points on the panel described by `ctx`.
    pub fn anchor(&self, ctx: &DrawContext<'_>) -> (f32, f32) {
        let (x, y) = self.coords;
        match self.system {
            CoordSystem::Axes => {
                let p = &ctx.plot;
                (p.left + x as f32 * p.width(), p.bottom - y as f32 * p.height())
            }
            CoordSystem::Data => ctx.map(x, y),
        }
    }

    /// Draw and return the covered box; anchors off a log axis draw nothing.
    pub fn draw(&self, ctx: &DrawContext<'_>) -> Option<RectF> {
        let (x, y) = self.anchor(ctx);
        if !(x.is_finite() && y.is_finite()) {
            log::warn!("annotation '{}' has no position on this axes", self.text);
            return None;
        }
        let size = self.size.unwrap_or(ctx.style.legend_size);
        let color = self.color.unwrap_or(ctx.theme.text);
        Some(ctx.shaper.draw(ctx.canvas, &self.text, x, y, size, color, self.ha, self.va, 0.0))
    }
}
