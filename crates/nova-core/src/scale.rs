// File: crates/nova-core/src/scale.rs
// Summary: Linear/log value scales mapping data coordinates onto a panel in points.

use crate::axis::{Axis, ScaleKind};

/// Maps a data interval onto a pixel interval. `start_px` may exceed `end_px`
/// (the y axis grows upwards on screen).
#[derive(Clone, Copy, Debug)]
pub struct ValueScale {
    pub min: f64,
    pub max: f64,
    pub kind: ScaleKind,
    pub start_px: f32,
    pub end_px: f32,
}

impl ValueScale {
    pub fn new(min: f64, max: f64, kind: ScaleKind, start_px: f32, end_px: f32) -> Self {
        Self { min, max, kind, start_px, end_px }
    }

    pub fn for_axis(axis: &Axis, start_px: f32, end_px: f32) -> Self {
        Self::new(axis.min, axis.max, axis.kind, start_px, end_px)
    }

    #[inline]
    fn transform(&self, v: f64) -> f64 {
        match self.kind {
            ScaleKind::Linear => v,
            ScaleKind::Log10 => {
                if v > 0.0 { v.log10() } else { f64::NAN }
            }
        }
    }

    /// Map a data value to points; NaN when the value has no position on a log scale.
    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        let lo = self.transform(self.min);
        let hi = self.transform(self.max);
        let span = hi - lo;
        let span = if span.abs() < 1e-12 { 1e-12 } else { span };
        let t = (self.transform(v) - lo) / span;
        self.start_px + (t as f32) * (self.end_px - self.start_px)
    }

    /// Inverse of [`to_px`](Self::to_px).
    pub fn from_px(&self, px: f32) -> f64 {
        let lo = self.transform(self.min);
        let hi = self.transform(self.max);
        let len = (self.end_px - self.start_px) as f64;
        let t = if len.abs() < 1e-12 { 0.0 } else { (px - self.start_px) as f64 / len };
        let v = lo + t * (hi - lo);
        match self.kind {
            ScaleKind::Linear => v,
            ScaleKind::Log10 => 10f64.powf(v),
        }
    }

    /// Whether `v` lies within the limits (inclusive).
    pub fn contains(&self, v: f64) -> bool {
        let (lo, hi) = if self.min <= self.max { (self.min, self.max) } else { (self.max, self.min) };
        let eps = (hi - lo).abs() * 1e-9;
        v >= lo - eps && v <= hi + eps
    }
}
