// File: crates/nova-core/src/plots/basic.rs
// Summary: BasicPlot, the quick y-vs-x plot class (points, lines, bands, error bars, histograms).

use std::path::Path;

use crate::error::{PlotError, Result};
use crate::figure::{Figure, FigureOptions};
use crate::limits::Bounds;
use crate::objects::{ErrorBar, FillBetween, Hist, LineOptions, PlotObject, Step, StepWhere};
use crate::plots::{build_object, resolve_limits, AxesOptions};
use crate::render::{ExportOptions, Panel, RasterImage, Scene};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct BasicOptions {
    pub figure: FigureOptions,
    pub axes: AxesOptions,
}

impl BasicOptions {
    pub fn new(figure: FigureOptions, axes: AxesOptions) -> Self { Self { figure, axes } }
}

pub struct BasicPlot {
    figure: Figure,
    axes: AxesOptions,
    /// Datasets per panel, row-major.
    datasets: Vec<Vec<Box<dyn PlotObject>>>,
}

impl BasicPlot {
    pub fn new(options: BasicOptions) -> Self {
        let figure = Figure::new(options.figure);
        let datasets = (0..figure.panel_count()).map(|_| Vec::new()).collect();
        Self { figure, axes: options.axes, datasets }
    }

    pub fn figure(&self) -> &Figure { &self.figure }

    pub fn axes_options(&self) -> &AxesOptions { &self.axes }

    pub fn axes_options_mut(&mut self) -> &mut AxesOptions { &mut self.axes }

    /// Number of datasets on `panel`.
    pub fn dataset_count(&self, panel: usize) -> usize { self.datasets.get(panel).map_or(0, Vec::len) }

    fn panel_mut(&mut self, panel: usize) -> Result<&mut Vec<Box<dyn PlotObject>>> {
        let count = self.datasets.len();
        self.datasets.get_mut(panel).ok_or(PlotError::PanelOutOfRange { index: panel, count })
    }

    /// Add a series to the first panel; `kind` is `points`, `line`, `pointslines`, `hist` or `fillbetween`.
    pub fn add_data(&mut self, x: Vec<f64>, y: Vec<f64>, label: Option<&str>, kind: &str, options: LineOptions) -> Result<()> {
        self.add_data_at(0, x, y, label, kind, options)
    }

    pub fn add_data_at(
        &mut self,
        panel: usize,
        x: Vec<f64>,
        y: Vec<f64>,
        label: Option<&str>,
        kind: &str,
        options: LineOptions,
    ) -> Result<()> {
        let object = build_object(x, y, label, kind, options)?;
        self.panel_mut(panel)?.push(object);
        Ok(())
    }

    /// Any plot object, on the first panel.
    pub fn add_object(&mut self, object: impl PlotObject + 'static) -> Result<()> {
        self.add_object_at(0, object)
    }

    pub fn add_object_at(&mut self, panel: usize, object: impl PlotObject + 'static) -> Result<()> {
        self.panel_mut(panel)?.push(Box::new(object));
        Ok(())
    }

    /// Bin `hist` now and add it to the first panel.
    pub fn add_hist(&mut self, hist: &Hist) -> Result<()> {
        self.add_hist_at(0, hist)
    }

    pub fn add_hist_at(&mut self, panel: usize, hist: &Hist) -> Result<()> {
        let binned = hist.compute()?;
        self.add_object_at(panel, binned)
    }

    pub fn add_fill_between(
        &mut self,
        x: Vec<f64>,
        low: Vec<f64>,
        mid: Vec<f64>,
        high: Vec<f64>,
        label: Option<&str>,
    ) -> Result<()> {
        self.add_fill_between_at(0, x, low, mid, high, label)
    }

    pub fn add_fill_between_at(
        &mut self,
        panel: usize,
        x: Vec<f64>,
        low: Vec<f64>,
        mid: Vec<f64>,
        high: Vec<f64>,
        label: Option<&str>,
    ) -> Result<()> {
        let band = FillBetween::new(x, low, mid, high, label.map(str::to_string))?;
        self.add_object_at(panel, band)
    }

    pub fn add_errorbar(&mut self, x: Vec<f64>, y: Vec<f64>, yerr: Vec<f64>, label: Option<&str>) -> Result<()> {
        self.add_errorbar_at(0, x, y, yerr, None, label)
    }

    pub fn add_errorbar_at(
        &mut self,
        panel: usize,
        x: Vec<f64>,
        y: Vec<f64>,
        yerr: Vec<f64>,
        xerr: Option<Vec<f64>>,
        label: Option<&str>,
    ) -> Result<()> {
        let bars = ErrorBar::new(x, y, yerr, xerr, label.map(str::to_string))?;
        self.add_object_at(panel, bars)
    }

    pub fn add_step(&mut self, x: Vec<f64>, y: Vec<f64>, label: Option<&str>, at: StepWhere, options: LineOptions) -> Result<()> {
        self.add_step_at(0, x, y, label, at, options)
    }

    pub fn add_step_at(
        &mut self,
        panel: usize,
        x: Vec<f64>,
        y: Vec<f64>,
        label: Option<&str>,
        at: StepWhere,
        options: LineOptions,
    ) -> Result<()> {
        let step = Step::new(x, y, label.map(str::to_string), at, options)?;
        self.add_object_at(panel, step)
    }

    /// Remove every dataset labelled `label` from all panels; returns how many went.
    pub fn remove_data(&mut self, label: &str) -> usize {
        let mut removed = 0;
        for panel in &mut self.datasets {
            let before = panel.len();
            panel.retain(|o| o.label() != Some(label));
            removed += before - panel.len();
        }
        if removed == 0 {
            log::warn!("no dataset labelled '{label}' to remove");
        }
        removed
    }

    /// Resolve limits, axes, legend and text into a drawable scene.
    pub fn plot(&self) -> Result<Scene<'_>> {
        let rects = self.figure.panel_rects();
        let mut panels = Vec::with_capacity(rects.len());
        for (index, (rect, objects)) in rects.into_iter().zip(&self.datasets).enumerate() {
            let mut bounds = Bounds::default();
            for o in objects {
                bounds.merge(&o.bounds());
            }
            let xlim = resolve_limits(self.axes.xlim, &bounds.x, self.axes.xlog_on)?;
            let ylim = resolve_limits(self.axes.ylim, &bounds.y, self.axes.ylog_on)?;
            let (x, y) = self.figure.apply_axes_settings(
                &self.axes.xlabel,
                &self.axes.ylabel,
                xlim,
                ylim,
                self.axes.xlog_on,
                self.axes.ylog_on,
            );
            let mut panel = Panel::new(rect, x.with_ticks(self.axes.xticks.clone()), y.with_ticks(self.axes.yticks.clone()));
            panel.objects = objects.iter().map(|o| Box::new(o.as_ref()) as Box<dyn PlotObject + '_>).collect();
            panel.legend = self.axes.legend_settings.as_ref().map(|s| s.options());
            panel.grid = self.axes.grid_line();
            if index == 0 {
                panel.annotations = self.axes.text_info.clone();
            }
            panels.push(panel);
        }
        Ok(self.figure.scene(panels))
    }

    /// Plot and write to `path` (format from the extension).
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

impl Default for BasicPlot {
    fn default() -> Self { Self::new(BasicOptions::default()) }
}
