// File: crates/nova-core/src/geometry.rs
// Summary: Lightweight geometry helpers for layout math in points.

use skia_safe as skia;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectF {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl RectF {
    pub const fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }
    pub const fn from_ltwh(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self { left, top, right: left + width, bottom: top + height }
    }
    pub fn width(&self) -> f32 { self.right - self.left }
    pub fn height(&self) -> f32 { self.bottom - self.top }
    pub fn center_x(&self) -> f32 { (self.left + self.right) * 0.5 }
    pub fn center_y(&self) -> f32 { (self.top + self.bottom) * 0.5 }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.left && x <= self.right && y >= self.top && y <= self.bottom
    }

    /// Smallest rectangle covering both.
    pub fn union(&self, other: &RectF) -> RectF {
        RectF {
            left: self.left.min(other.left),
            top: self.top.min(other.top),
            right: self.right.max(other.right),
            bottom: self.bottom.max(other.bottom),
        }
    }

    pub fn inflate(&self, pad: f32) -> RectF {
        RectF::from_ltrb(self.left - pad, self.top - pad, self.right + pad, self.bottom + pad)
    }

    pub fn to_skia(self) -> skia::Rect {
        skia::Rect::from_ltrb(self.left, self.top, self.right, self.bottom)
    }
}

/// Running union of drawn element extents.
#[derive(Clone, Copy, Debug, Default)]
pub struct Extent {
    rect: Option<RectF>,
}

impl Extent {
    pub fn add(&mut self, r: RectF) {
        if !(r.left.is_finite() && r.top.is_finite() && r.right.is_finite() && r.bottom.is_finite()) {
            return;
        }
        self.rect = Some(match self.rect {
            Some(cur) => cur.union(&r),
            None => r,
        });
    }

    pub fn rect(&self) -> Option<RectF> { self.rect }
}
