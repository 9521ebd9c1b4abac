// File: crates/nova-core/src/histogram.rs
// Summary: Histogram binning, density normalisation, ratios and summary statistics,
//          plus `BinnedHist`, the drawable form of a computed histogram.

use skia_safe as skia;

use crate::color::with_alpha;
use crate::error::{PlotError, Result};
use crate::legend::LegendHandle;
use crate::limits::{Bounds, Span};
use crate::objects::{ErrType, HistType, LineStyle, PlotObject};
use crate::render::{paint, DrawContext};
use crate::ticks::linspace;

/// Hatch spacing and stroke width of the ATLAS-style error band, in points.
const HATCH_SPACING: f32 = 2.5;
const HATCH_WIDTH: f32 = 0.5;

/// `n + 1` equally spaced edges spanning the finite values of `data`.
///
/// Constant data gets a unit-wide range centred on the value.
pub fn edges_from_count(data: &[f64], n: usize) -> Result<Vec<f64>> {
    if n == 0 {
        return Err(PlotError::InvalidBins("bin count must be at least 1".into()));
    }
    let span = Span::from_values(data.iter().copied());
    if span.is_empty() {
        return Err(PlotError::EmptyData("histogram data has no finite values"));
    }
    let (lo, hi) = if span.max > span.min { (span.min, span.max) } else { (span.min - 0.5, span.max + 0.5) };
    Ok(linspace(lo, hi, n + 1))
}

/// Edges must be finite, strictly increasing and describe at least one bin.
pub fn validate_edges(edges: &[f64]) -> Result<()> {
    if edges.len() < 2 {
        return Err(PlotError::InvalidBins(format!("need at least 2 edges, got {}", edges.len())));
    }
    if edges.iter().any(|e| !e.is_finite()) {
        return Err(PlotError::InvalidBins("edges must be finite".into()));
    }
    if edges.windows(2).any(|w| w[1] <= w[0]) {
        return Err(PlotError::InvalidBins("edges must be strictly increasing".into()));
    }
    Ok(())
}

/// Bin of `v`: bins are half-open `[e_i, e_{i+1})` except the last, which is closed.
pub fn bin_index(edges: &[f64], v: f64) -> Option<usize> {
    let n = edges.len().checked_sub(1)?;
    if n == 0 || !v.is_finite() || v < edges[0] || v > edges[n] {
        return None;
    }
    if v == edges[n] {
        return Some(n - 1);
    }
    // First edge strictly greater than v, minus one.
    let i = edges.partition_point(|&e| e <= v);
    Some(i - 1)
}

/// Per-bin sum of weights and sum of squared weights.
pub fn fill(data: &[f64], weights: Option<&[f64]>, edges: &[f64]) -> Result<(Vec<f64>, Vec<f64>)> {
    validate_edges(edges)?;
    if let Some(w) = weights {
        if w.len() != data.len() {
            return Err(PlotError::LengthMismatch { x: data.len(), y: w.len() });
        }
    }
    let n = edges.len() - 1;
    let mut sumw = vec![0.0; n];
    let mut sumw2 = vec![0.0; n];
    let mut dropped = 0usize;
    for (i, &v) in data.iter().enumerate() {
        let w = weights.map_or(1.0, |w| w[i]);
        match bin_index(edges, v) {
            Some(b) if w.is_finite() => {
                sumw[b] += w;
                sumw2[b] += w * w;
            }
            _ => dropped += 1,
        }
    }
    if dropped > 0 {
        log::debug!("histogram ignored {dropped} of {} entries outside the bins", data.len());
    }
    Ok((sumw, sumw2))
}

/// Scale factors turning bin contents into a density that integrates to one.
///
/// Returns `None` when the histogram is empty.
pub fn density_factors(values: &[f64], edges: &[f64]) -> Option<Vec<f64>> {
    let total: f64 = values.iter().sum();
    if total == 0.0 || !total.is_finite() {
        return None;
    }
    Some(edges.windows(2).map(|w| 1.0 / (total * (w[1] - w[0]))).collect())
}

/// Weighted mean and standard deviation of the finite entries.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HistStats {
    pub mean: f64,
    pub std_dev: f64,
}

pub fn weighted_stats(data: &[f64], weights: Option<&[f64]>) -> Option<HistStats> {
    let mut sw = 0.0;
    let mut swx = 0.0;
    for (i, &x) in data.iter().enumerate() {
        let w = weights.map_or(1.0, |w| w.get(i).copied().unwrap_or(0.0));
        if x.is_finite() && w.is_finite() {
            sw += w;
            swx += w * x;
        }
    }
    if sw <= 0.0 {
        return None;
    }
    let mean = swx / sw;
    let mut var = 0.0;
    for (i, &x) in data.iter().enumerate() {
        let w = weights.map_or(1.0, |w| w.get(i).copied().unwrap_or(0.0));
        if x.is_finite() && w.is_finite() {
            var += w * (x - mean) * (x - mean);
        }
    }
    Some(HistStats { mean, std_dev: (var / sw).sqrt() })
}

/// A histogram reduced to its bins, ready to draw.
#[derive(Clone, Debug)]
pub struct BinnedHist {
    pub edges: Vec<f64>,
    pub values: Vec<f64>,
    pub errors: Option<Vec<f64>>,
    /// Per-bin baseline; non-zero when stacked on other histograms.
    pub bottoms: Vec<f64>,
    pub label: Option<String>,
    pub color: Option<skia::Color>,
    pub hist_type: HistType,
    pub err_type: ErrType,
    pub alpha: f32,
}

impl BinnedHist {
    pub fn new(edges: Vec<f64>, values: Vec<f64>) -> Result<Self> {
        validate_edges(&edges)?;
        if values.len() + 1 != edges.len() {
            return Err(PlotError::InvalidBins(format!("{} values for {} bins", values.len(), edges.len() - 1)));
        }
        let bottoms = vec![0.0; values.len()];
        Ok(Self {
            edges,
            values,
            errors: None,
            bottoms,
            label: None,
            color: None,
            hist_type: HistType::default(),
            err_type: ErrType::default(),
            alpha: 1.0,
        })
    }

    pub fn n_bins(&self) -> usize { self.values.len() }

    pub fn centers(&self) -> Vec<f64> { self.edges.windows(2).map(|w| 0.5 * (w[0] + w[1])).collect() }

    /// Bin tops: bottoms plus values.
    pub fn tops(&self) -> Vec<f64> { self.bottoms.iter().zip(&self.values).map(|(b, v)| b + v).collect() }

    pub fn same_binning(&self, other: &BinnedHist) -> bool {
        self.edges.len() == other.edges.len()
            && self.edges.iter().zip(&other.edges).all(|(a, b)| (a - b).abs() <= 1e-12 * a.abs().max(b.abs()).max(1.0))
    }

    /// Place this histogram on top of `below`; both must share their binning.
    pub fn stack_on(&mut self, below: &BinnedHist) -> Result<()> {
        if !self.same_binning(below) {
            return Err(PlotError::BinMismatch);
        }
        self.bottoms = below.tops();
        Ok(())
    }

    /// Bin-by-bin ratio `self / den` with relative errors added in quadrature.
    ///
    /// Bins with an empty denominator hold NaN.
    pub fn divide(&self, den: &BinnedHist) -> Result<BinnedHist> {
        divide_hists(self, den)
    }

    fn step_outline(&self, tops: &[f64], ctx: &DrawContext<'_>) -> Vec<(f32, f32)> {
        let n = self.n_bins();
        let mut pts = Vec::with_capacity(2 * n + 2);
        // Empty bins (NaN or off a log axis) break the outline.
        pts.push((ctx.x.to_px(self.edges[0]), ctx.y_floor(self.bottoms[0])));
        for i in 0..n {
            pts.push(ctx.map(self.edges[i], tops[i]));
            pts.push(ctx.map(self.edges[i + 1], tops[i]));
        }
        pts.push((ctx.x.to_px(self.edges[n]), ctx.y_floor(self.bottoms[n - 1])));
        pts
    }

    fn filled_outline(&self, tops: &[f64], ctx: &DrawContext<'_>) -> Vec<(f32, f32)> {
        let n = self.n_bins();
        let mut pts = Vec::with_capacity(4 * n);
        for i in 0..n {
            pts.push(ctx.map(self.edges[i], tops[i]));
            pts.push(ctx.map(self.edges[i + 1], tops[i]));
        }
        for i in (0..n).rev() {
            pts.push((ctx.x.to_px(self.edges[i + 1]), ctx.y_floor(self.bottoms[i])));
            pts.push((ctx.x.to_px(self.edges[i]), ctx.y_floor(self.bottoms[i])));
        }
        pts.into_iter().map(|(x, y)| (x, if y.is_finite() { y } else { ctx.y_floor(0.0) })).collect()
    }

    fn draw_errors(&self, ctx: &mut DrawContext<'_>, errors: &[f64], color: skia::Color) {
        let tops = self.tops();
        let n = self.n_bins();
        match self.err_type {
            ErrType::Atlas => {
                let mut verts = Vec::with_capacity(4 * n);
                for i in 0..n {
                    let e = errors[i].abs();
                    verts.push(ctx.map(self.edges[i], tops[i] + e));
                    verts.push(ctx.map(self.edges[i + 1], tops[i] + e));
                }
                for i in (0..n).rev() {
                    let e = errors[i].abs();
                    verts.push(ctx.map(self.edges[i + 1], tops[i] - e));
                    verts.push(ctx.map(self.edges[i], tops[i] - e));
                }
                let verts: Vec<(f32, f32)> =
                    verts.into_iter().map(|(x, y)| (x, if y.is_finite() { y } else { ctx.y_floor(0.0) })).collect();
                if let Some(path) = paint::polygon_path(&verts) {
                    paint::hatch(ctx.canvas, &path, ctx.theme.text, HATCH_SPACING, HATCH_WIDTH);
                }
            }
            ErrType::FillBetween => {
                let band = paint::fill(with_alpha(color, 0.3));
                for i in 0..n {
                    let e = errors[i].abs();
                    let (l, hi) = ctx.map(self.edges[i], tops[i] + e);
                    let (r, lo) = ctx.map(self.edges[i + 1], tops[i] - e);
                    let lo = if lo.is_finite() { lo } else { ctx.y_floor(0.0) };
                    if hi.is_finite() {
                        ctx.canvas.draw_rect(skia::Rect::from_ltrb(l, hi.min(lo), r, hi.max(lo)), &band);
                    }
                }
            }
            ErrType::ErrorBar => {
                let bar = paint::stroke(color, ctx.style.line_width * 0.75, LineStyle::Solid);
                for (i, c) in self.centers().into_iter().enumerate() {
                    let e = errors[i].abs();
                    let (px, hi) = ctx.map(c, tops[i] + e);
                    let (_, lo) = ctx.map(c, tops[i] - e);
                    let lo = if lo.is_finite() { lo } else { ctx.y_floor(0.0) };
                    if px.is_finite() && hi.is_finite() {
                        ctx.canvas.draw_line((px, lo), (px, hi), &bar);
                    }
                }
            }
        }
    }
}

/// Ratio of two histograms with identical binning.
pub fn divide_hists(num: &BinnedHist, den: &BinnedHist) -> Result<BinnedHist> {
    if !num.same_binning(den) {
        return Err(PlotError::BinMismatch);
    }
    let mut values = Vec::with_capacity(num.n_bins());
    let mut errors = Vec::with_capacity(num.n_bins());
    for i in 0..num.n_bins() {
        let (a, b) = (num.values[i], den.values[i]);
        if b == 0.0 {
            values.push(f64::NAN);
            errors.push(f64::NAN);
            continue;
        }
        let r = a / b;
        let ea = num.errors.as_ref().map_or(0.0, |e| e[i]);
        let eb = den.errors.as_ref().map_or(0.0, |e| e[i]);
        let rel_a = if a != 0.0 { ea / a } else { 0.0 };
        let rel_b = eb / b;
        values.push(r);
        errors.push(r.abs() * (rel_a * rel_a + rel_b * rel_b).sqrt());
    }
    let has_errors = num.errors.is_some() || den.errors.is_some();
    let mut out = BinnedHist::new(num.edges.clone(), values)?;
    out.errors = has_errors.then_some(errors);
    out.label = num.label.clone();
    out.color = num.color;
    out.hist_type = HistType::Step;
    out.err_type = num.err_type;
    Ok(out)
}

impl PlotObject for BinnedHist {
    fn label(&self) -> Option<&str> { self.label.as_deref() }

    fn bounds(&self) -> Bounds {
        let mut b = Bounds::default();
        let errs = self.errors.as_deref();
        b.x.add(self.edges[0]);
        b.x.add(self.edges[self.edges.len() - 1]);
        for (i, top) in self.tops().into_iter().enumerate() {
            let e = errs.map_or(0.0, |e| e[i].abs());
            b.y.add(self.bottoms[i]);
            b.y.add(top + if e.is_finite() { e } else { 0.0 });
        }
        b
    }

    fn sample_points(&self) -> Vec<(f64, f64)> {
        let tops = self.tops();
        let mut pts = Vec::with_capacity(self.n_bins() * 3);
        for i in 0..self.n_bins() {
            let (l, r) = (self.edges[i], self.edges[i + 1]);
            // Everything under the bin top counts as covered.
            for f in [0.25, 0.5, 0.75] {
                let x = l + (r - l) * f;
                pts.push((x, tops[i]));
                pts.push((x, self.bottoms[i] + 0.5 * self.values[i]));
            }
        }
        pts
    }

    fn draw(&self, ctx: &mut DrawContext<'_>) -> LegendHandle {
        let color = ctx.color_or_next(self.color);
        let fill_color = with_alpha(color, self.alpha);
        let width = ctx.style.line_width;
        let tops = self.tops();

        let handle = match self.hist_type {
            HistType::Bar => {
                let fill = paint::fill(fill_color);
                for i in 0..self.n_bins() {
                    let (l, top) = ctx.map(self.edges[i], tops[i]);
                    let r = ctx.x.to_px(self.edges[i + 1]);
                    let bottom = ctx.y_floor(self.bottoms[i]);
                    if top.is_finite() && l.is_finite() && r.is_finite() {
                        // Narrow gap keeps neighbouring bars distinguishable.
                        let inset = ((r - l) * 0.05).min(1.0);
                        ctx.canvas.draw_rect(skia::Rect::from_ltrb(l + inset, top.min(bottom), r - inset, top.max(bottom)), &fill);
                    }
                }
                LegendHandle::Patch { fill: Some(fill_color), edge: None, width: 0.0 }
            }
            HistType::Step => {
                let outline = self.step_outline(&tops, ctx);
                paint::polyline(ctx.canvas, &outline, &paint::stroke(fill_color, width, LineStyle::Solid));
                LegendHandle::Patch { fill: None, edge: Some(fill_color), width }
            }
            HistType::StepFilled => {
                let outline = self.filled_outline(&tops, ctx);
                paint::polygon(ctx.canvas, &outline, &paint::fill(fill_color));
                LegendHandle::Patch { fill: Some(fill_color), edge: None, width: 0.0 }
            }
        };

        if let Some(errors) = &self.errors {
            self.draw_errors(ctx, errors, color);
        }
        handle
    }
}
