// File: crates/nova-core/src/text.rs
// Summary: Text shaper/renderer using Skia textlayout in the figure style's font families.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

use crate::geometry::RectF;
use crate::mathtext;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HAlign {
    Left,
    Center,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VAlign {
    Top,
    Center,
    Baseline,
    Bottom,
}

pub struct TextShaper {
    fonts: FontCollection,
    families: Vec<String>,
}

impl TextShaper {
    pub fn new(families: Vec<String>) -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc, families }
    }

    fn make_style(&self, size: f32, color: skia::Color) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        ts.set_font_families(&self.families);
        ts
    }

    /// Lay out `text` (math segments converted to plain text) on a single line.
    pub fn layout(&self, text: &str, size: f32, color: skia::Color) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&self.make_style(size, color));
        builder.add_text(mathtext::to_plain(text));
        let mut paragraph = builder.build();
        paragraph.layout(100_000.0);
        paragraph
    }

    /// Width and height of `text` in points.
    pub fn measure(&self, text: &str, size: f32) -> (f32, f32) {
        if text.is_empty() {
            return (0.0, 0.0);
        }
        let p = self.layout(text, size, skia::Color::from_argb(0, 0, 0, 0));
        (p.max_intrinsic_width(), p.height())
    }

    /// Draw `text` anchored at `(x, y)`; `rotation` is in degrees counter-clockwise and only
    /// 0 and 90 are used. Returns the covered rectangle.
    #[allow(clippy::too_many_arguments)]
    pub fn draw(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        x: f32,
        y: f32,
        size: f32,
        color: skia::Color,
        h: HAlign,
        v: VAlign,
        rotation: f32,
    ) -> RectF {
        if text.is_empty() {
            return RectF::from_ltrb(x, y, x, y);
        }
        let p = self.layout(text, size, color);
        let w = p.max_intrinsic_width();
        let ht = p.height();
        let dx = match h {
            HAlign::Left => 0.0,
            HAlign::Center => -w * 0.5,
            HAlign::Right => -w,
        };
        let dy = match v {
            VAlign::Top => 0.0,
            VAlign::Center => -ht * 0.5,
            VAlign::Baseline => -p.alphabetic_baseline(),
            VAlign::Bottom => -ht,
        };
        if rotation.abs() < f32::EPSILON {
            p.paint(canvas, (x + dx, y + dy));
            return RectF::from_ltwh(x + dx, y + dy, w, ht);
        }
        canvas.save();
        canvas.translate((x, y));
        canvas.rotate(-rotation, None);
        p.paint(canvas, (dx, dy));
        canvas.restore();
        // bounding box of the rotated (quarter turn) text box
        RectF::from_ltrb(x + dy, y - (dx + w), x + dy + ht, y - dx)
    }
}
