// File: crates/nova-core/src/limits.rs
// Summary: Data extents, automatic axis limits and input validation.

use crate::error::{PlotError, Result};

/// Fraction of the data range added on each side of a linear axis.
pub const LINEAR_MARGIN: f64 = 0.04;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rounding {
    Ceil,
    Floor,
}

/// Round `x` to a power of ten: `10^ceil(log10 x)` or `10^floor(log10 x)`.
pub fn magnitude_round(x: f64, rounding: Rounding) -> f64 {
    let e = x.log10();
    let e = match rounding {
        Rounding::Ceil => e.ceil(),
        Rounding::Floor => e.floor(),
    };
    10f64.powf(e)
}

/// Running min/max of one coordinate; also tracks the smallest positive value for log axes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Span {
    pub min: f64,
    pub max: f64,
    pub min_positive: f64,
}

impl Default for Span {
    fn default() -> Self {
        Self { min: f64::INFINITY, max: f64::NEG_INFINITY, min_positive: f64::INFINITY }
    }
}

impl Span {
    pub fn add(&mut self, v: f64) {
        if !v.is_finite() {
            return;
        }
        self.min = self.min.min(v);
        self.max = self.max.max(v);
        if v > 0.0 {
            self.min_positive = self.min_positive.min(v);
        }
    }

    pub fn merge(&mut self, other: &Span) {
        self.min = self.min.min(other.min);
        self.max = self.max.max(other.max);
        self.min_positive = self.min_positive.min(other.min_positive);
    }

    pub fn is_empty(&self) -> bool { !(self.min.is_finite() && self.max.is_finite()) }

    /// The part of the span above zero; empty when nothing positive was seen.
    pub fn positive(&self) -> Span {
        if self.max > 0.0 {
            Span { min: self.min_positive, ..*self }
        } else {
            Span::default()
        }
    }

    pub fn from_values<I: IntoIterator<Item = f64>>(values: I) -> Self {
        let mut s = Self::default();
        for v in values {
            s.add(v);
        }
        s
    }
}

/// Data extent of a plot object in both coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
    pub x: Span,
    pub y: Span,
}

impl Bounds {
    pub fn add_point(&mut self, x: f64, y: f64) {
        self.x.add(x);
        self.y.add(y);
    }

    pub fn merge(&mut self, other: &Bounds) {
        self.x.merge(&other.x);
        self.y.merge(&other.y);
    }
}

/// Axis limits from a data span.
///
/// Linear axes pad [`LINEAR_MARGIN`] of the range on each side (a zero range pads 0.5).
/// Log axes round outwards to whole decades and only consider positive samples.
pub fn auto_limits(span: &Span, log: bool) -> Result<(f64, f64)> {
    if span.is_empty() {
        return Err(PlotError::EmptyData("no finite values to derive axis limits"));
    }
    if log {
        if !span.min_positive.is_finite() {
            return Err(PlotError::NonPositiveLogData);
        }
        if span.min <= 0.0 {
            log::warn!("non-positive values ignored on log axis (min {})", span.min);
        }
        let lo = magnitude_round(span.min_positive, Rounding::Floor);
        let mut hi = magnitude_round(span.max, Rounding::Ceil);
        if hi <= lo {
            hi = lo * 10.0;
        }
        return Ok((lo, hi));
    }
    let range = span.max - span.min;
    if range.abs() < f64::EPSILON {
        return Ok((span.min - 0.5, span.max + 0.5));
    }
    Ok((span.min - LINEAR_MARGIN * range, span.max + LINEAR_MARGIN * range))
}

/// Check that paired coordinate slices are non-empty and of equal length.
pub fn validate_xy(x: &[f64], y: &[f64]) -> Result<()> {
    if x.len() != y.len() {
        return Err(PlotError::LengthMismatch { x: x.len(), y: y.len() });
    }
    if x.is_empty() {
        return Err(PlotError::EmptyData("x/y series is empty"));
    }
    Ok(())
}
