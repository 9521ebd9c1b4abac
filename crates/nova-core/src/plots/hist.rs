// File: crates/nova-core/src/plots/hist.rs
// Summary: HistPlot: histogram comparison plots with stacking, ratio panel and mean/sigma markers.

use std::path::Path;

use skia_safe as skia;

use crate::error::Result;
use crate::figure::{split_vertical, Figure, FigureOptions};
use crate::geometry::RectF;
use crate::histogram::BinnedHist;
use crate::limits::{auto_limits, Bounds, Span, LINEAR_MARGIN};
use crate::objects::{Bins, ErrType, Hist, HistErrors, HistType, LineOptions, LineStyle, PlotObject};
use crate::plots::{build_object, resolve_limits, AxesOptions};
use crate::render::{ExportOptions, Panel, RasterImage, RefLine, Scene};

/// Height ratio of the main panel to the ratio panel.
const RATIO_HEIGHTS: [f32; 2] = [3.0, 1.0];
/// Gap between the main and ratio panels, in points.
const RATIO_GAP: f32 = 4.0;

/// Plot-level histogram defaults and behaviour.
#[derive(Clone, Debug, PartialEq)]
pub struct HistPlotOptions {
    pub figure: FigureOptions,
    pub axes: AxesOptions,
    pub hist_type: HistType,
    pub normalize: bool,
    pub stack: bool,
    pub alpha: f32,
    pub ratio: bool,
    /// Draw mean and mean ± sigma·std lines for every histogram.
    pub show_stats: Option<f64>,
}

impl Default for HistPlotOptions {
    fn default() -> Self {
        Self {
            figure: FigureOptions::default(),
            axes: AxesOptions::default(),
            hist_type: HistType::StepFilled,
            normalize: false,
            stack: false,
            alpha: 1.0,
            ratio: false,
            show_stats: None,
        }
    }
}

/// Per-histogram settings; unset fields take the plot-level defaults.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HistOptions {
    pub hist_type: Option<HistType>,
    pub normalize: Option<bool>,
    pub alpha: Option<f32>,
    pub weights: Option<Vec<f64>>,
    pub err: HistErrors,
    pub err_type: ErrType,
    pub color: Option<skia::Color>,
}

pub struct HistPlot {
    figure: Figure,
    options: HistPlotOptions,
    hists: Vec<Hist>,
    overlays: Vec<Box<dyn PlotObject>>,
}

impl HistPlot {
    pub fn new(options: HistPlotOptions) -> Self {
        let figure = Figure::new(options.figure.clone());
        if figure.panel_count() > 1 {
            log::warn!("HistPlot draws on the first panel only; {} panels requested", figure.panel_count());
        }
        Self { figure, options, hists: Vec::new(), overlays: Vec::new() }
    }

    pub fn figure(&self) -> &Figure { &self.figure }

    pub fn options(&self) -> &HistPlotOptions { &self.options }

    pub fn hists(&self) -> &[Hist] { &self.hists }

    /// Add a histogram of `data`, filling unset options from the plot defaults.
    pub fn add_hist(&mut self, data: Vec<f64>, bins: impl Into<Bins>, label: Option<&str>, options: HistOptions) -> Result<()> {
        let mut hist = Hist::new(data, bins, label.map(str::to_string))
            .hist_type(options.hist_type.unwrap_or(self.options.hist_type))
            .normalize(options.normalize.unwrap_or(self.options.normalize))
            .alpha(options.alpha.unwrap_or(self.options.alpha))
            .errors(options.err)
            .err_type(options.err_type);
        if let Some(w) = options.weights {
            hist = hist.weights(w);
        }
        if let Some(c) = options.color {
            hist = hist.color(c);
        }
        // Fail early on bad bins or weights.
        hist.compute()?;
        self.hists.push(hist);
        Ok(())
    }

    /// Add a fully configured histogram as is.
    pub fn add_hist_object(&mut self, hist: Hist) -> Result<()> {
        hist.compute()?;
        self.hists.push(hist);
        Ok(())
    }

    /// Overlay a series; `hist` routes to [`add_hist`](Self::add_hist) with default bins.
    pub fn add_data(&mut self, x: Vec<f64>, y: Vec<f64>, label: Option<&str>, kind: &str, options: LineOptions) -> Result<()> {
        if kind.trim().eq_ignore_ascii_case("hist") {
            let weights = (!y.is_empty()).then_some(y);
            let hopts = HistOptions { weights, color: options.color, ..HistOptions::default() };
            return self.add_hist(x, super::DEFAULT_BINS, label, hopts);
        }
        self.overlays.push(build_object(x, y, label, kind, options)?);
        Ok(())
    }

    pub fn add_object(&mut self, object: impl PlotObject + 'static) {
        self.overlays.push(Box::new(object));
    }

    /// Remove histograms and overlays labelled `label`; returns how many went.
    pub fn remove_data(&mut self, label: &str) -> usize {
        let before = self.hists.len() + self.overlays.len();
        self.hists.retain(|h| h.label.as_deref() != Some(label));
        self.overlays.retain(|o| o.label() != Some(label));
        let removed = before - self.hists.len() - self.overlays.len();
        if removed == 0 {
            log::warn!("no dataset labelled '{label}' to remove");
        }
        removed
    }

    /// Binned histograms, stacked when requested.
    pub fn binned(&self) -> Result<Vec<BinnedHist>> {
        let mut out: Vec<BinnedHist> = Vec::with_capacity(self.hists.len());
        for h in &self.hists {
            let mut b = h.compute()?;
            if self.options.stack {
                if let Some(below) = out.last() {
                    b.stack_on(below)?;
                }
            }
            out.push(b);
        }
        Ok(out)
    }

    /// Colour each histogram ends up with: its own, else the next palette colour.
    fn hist_colors(&self) -> Vec<skia::Color> {
        let palette = &self.figure.theme.palette;
        let mut next = 0;
        self.hists
            .iter()
            .map(|h| {
                h.color.unwrap_or_else(|| {
                    let c = palette.get(next);
                    next += 1;
                    c
                })
            })
            .collect()
    }

    fn y_limits(&self, span: &Span) -> Result<(f64, f64)> {
        if let Some(lim) = self.options.axes.ylim {
            return Ok(lim);
        }
        if self.options.axes.ylog_on {
            // bar bottoms sit at zero
            return resolve_limits(None, &span.positive(), true);
        }
        let top = if span.is_empty() { 0.0 } else { span.max };
        if top <= 0.0 {
            return Ok((0.0, 1.0));
        }
        Ok((0.0, top * (1.0 + LINEAR_MARGIN)))
    }

    fn x_limits(&self, span: &Span) -> Result<(f64, f64)> {
        match self.options.axes.xlim {
            Some(lim) => Ok(lim),
            None if span.is_empty() => resolve_limits(None, span, self.options.axes.xlog_on),
            None if self.options.axes.xlog_on && span.min <= 0.0 => auto_limits(span, true),
            None if span.max <= span.min => auto_limits(span, self.options.axes.xlog_on),
            None => Ok((span.min, span.max)),
        }
    }

    pub fn plot(&self) -> Result<Scene<'_>> {
        let axes = &self.options.axes;
        let binned = self.binned()?;
        let colors = self.hist_colors();

        let mut bounds = Bounds::default();
        for b in &binned {
            bounds.merge(&b.bounds());
        }
        for o in &self.overlays {
            bounds.merge(&o.bounds());
        }
        let xlim = self.x_limits(&bounds.x)?;
        let ylim = self.y_limits(&bounds.y)?;

        let rect = self.figure.panel_rect(0)?;
        let rects = if self.options.ratio { split_vertical(rect, &RATIO_HEIGHTS, RATIO_GAP) } else { vec![rect] };

        let (mut x, y) = self.figure.apply_axes_settings(&axes.xlabel, &axes.ylabel, xlim, ylim, axes.xlog_on, axes.ylog_on);
        x = x.with_ticks(axes.xticks.clone());
        if self.options.ratio {
            x.show_labels = false;
        }
        let mut main = Panel::new(rects[0], x, y.with_ticks(axes.yticks.clone()));
        let mut objects: Vec<Box<dyn PlotObject + '_>> =
            binned.into_iter().map(|b| Box::new(b) as Box<dyn PlotObject + '_>).collect();
        objects.extend(self.overlays.iter().map(|o| Box::new(o.as_ref()) as Box<dyn PlotObject + '_>));
        main.objects = objects;
        main.legend = axes.legend_settings.as_ref().map(|s| s.options());
        main.grid = axes.grid_line();
        main.annotations = axes.text_info.clone();

        if let Some(sigma) = self.options.show_stats {
            for (h, color) in self.hists.iter().zip(&colors) {
                match h.stats() {
                    Some(s) => {
                        main.ref_lines.push(RefLine::vertical(s.mean).styled(Some(*color), LineStyle::Solid));
                        for v in [s.mean - sigma * s.std_dev, s.mean + sigma * s.std_dev] {
                            main.ref_lines.push(RefLine::vertical(v).styled(Some(*color), LineStyle::Dashed));
                        }
                    }
                    None => log::warn!("no statistics for empty histogram '{}'", h.label.as_deref().unwrap_or("")),
                }
            }
        }

        let mut panels = vec![main];
        if self.options.ratio {
            panels.push(self.ratio_panel(rects[1], &colors, xlim)?);
        }
        Ok(self.figure.scene(panels))
    }

    /// Every histogram after the first divided by the first, unstacked.
    fn ratio_panel(&self, rect: RectF, colors: &[skia::Color], xlim: (f64, f64)) -> Result<Panel<'static>> {
        let axes = &self.options.axes;
        let raw: Vec<BinnedHist> = self.hists.iter().map(Hist::compute).collect::<Result<_>>()?;
        let mut ratios = Vec::new();
        if let Some((den, rest)) = raw.split_first() {
            for (num, color) in rest.iter().zip(colors.iter().skip(1)) {
                let mut r = num.divide(den)?;
                r.color = Some(*color);
                r.label = None;
                ratios.push(r);
            }
        }
        if ratios.is_empty() {
            log::warn!("ratio panel needs at least two histograms");
        }
        let mut span = Span::default();
        for r in &ratios {
            span.merge(&r.bounds().y);
        }
        let ylim = if span.is_empty() { (0.0, 2.0) } else { auto_limits(&span, false)? };
        let (x, y) = self.figure.apply_axes_settings(&axes.xlabel, "Ratio", xlim, ylim, axes.xlog_on, false);
        let mut panel = Panel::new(rect, x.with_ticks(axes.xticks.clone()), y);
        panel.objects = ratios.into_iter().map(|r| Box::new(r) as Box<dyn PlotObject>).collect();
        panel.ref_lines.push(RefLine::horizontal(1.0).styled(None, LineStyle::Dashed));
        panel.grid = axes.grid_line();
        Ok(panel)
    }

    pub fn export(&self, path: impl AsRef<Path>, options: &ExportOptions) -> Result<()> {
        self.plot()?.export(path, options)
    }

    pub fn render_png(&self, options: &ExportOptions) -> Result<Vec<u8>> {
        self.plot()?.render_png(options)
    }

    pub fn render_rgba8(&self, options: &ExportOptions) -> Result<RasterImage> {
        self.plot()?.render_rgba8(options)
    }
}

impl Default for HistPlot {
    fn default() -> Self { Self::new(HistPlotOptions::default()) }
}
