// File: crates/nova-core/src/render/context.rs
// Summary: Per-panel drawing context handed to plot objects (canvas, scales, style, palette cursor).

use skia_safe as skia;

use crate::geometry::RectF;
use crate::scale::ValueScale;
use crate::style::Style;
use crate::text::TextShaper;
use crate::theme::ColorTheme;

pub struct DrawContext<'a> {
    pub canvas: &'a skia::Canvas,
    /// Axes rectangle in points.
    pub plot: RectF,
    pub x: ValueScale,
    pub y: ValueScale,
    pub style: &'a Style,
    pub theme: &'a ColorTheme,
    pub shaper: &'a TextShaper,
    color_index: usize,
}

impl<'a> DrawContext<'a> {
    pub fn new(
        canvas: &'a skia::Canvas,
        plot: RectF,
        x: ValueScale,
        y: ValueScale,
        style: &'a Style,
        theme: &'a ColorTheme,
        shaper: &'a TextShaper,
    ) -> Self {
        Self { canvas, plot, x, y, style, theme, shaper, color_index: 0 }
    }

    /// Data → points.
    #[inline]
    pub fn map(&self, x: f64, y: f64) -> (f32, f32) {
        (self.x.to_px(x), self.y.to_px(y))
    }

    /// Next color of the theme's cycle.
    pub fn next_color(&mut self) -> skia::Color {
        let c = self.theme.palette.get(self.color_index);
        self.color_index += 1;
        c
    }

    /// The explicit color if given, otherwise the next cycle color.
    pub fn color_or_next(&mut self, color: Option<skia::Color>) -> skia::Color {
        match color {
            Some(c) => c,
            None => self.next_color(),
        }
    }

    /// Pixel position of the y baseline for bars: 0 on linear axes, the lower limit on log axes.
    pub fn y_floor(&self, value: f64) -> f32 {
        if self.y.kind == crate::axis::ScaleKind::Log10 && value <= 0.0 {
            self.y.to_px(self.y.min.min(self.y.max))
        } else {
            self.y.to_px(value)
        }
    }
}
