// File: crates/nova-core/src/figure.rs
// Summary: Figure base shared by every plot class: resolved style/theme, panel grid and axes settings.

use crate::axis::{Axis, ScaleKind};
use crate::error::{PlotError, Result};
use crate::geometry::RectF;
use crate::render::{Panel, Scene};
use crate::style::{LabelPlacement, Style, StyleChoice};
use crate::theme::{ColorTheme, ThemeChoice};
use crate::types::{SubplotParams, DEFAULT_DPI, POINTS_PER_INCH};

/// Options common to every plot class.
#[derive(Clone, Debug, PartialEq)]
pub struct FigureOptions {
    pub nrow: usize,
    pub ncol: usize,
    pub title: Option<String>,
    pub dpi: f32,
    pub style: StyleChoice,
    pub color_theme: ThemeChoice,
    pub subplots: SubplotParams,
}

impl Default for FigureOptions {
    fn default() -> Self {
        Self {
            nrow: 1,
            ncol: 1,
            title: None,
            dpi: DEFAULT_DPI,
            style: StyleChoice::default(),
            color_theme: ThemeChoice::default(),
            subplots: SubplotParams::default(),
        }
    }
}

impl FigureOptions {
    pub fn style(mut self, style: impl Into<StyleChoice>) -> Self {
        self.style = style.into();
        self
    }

    pub fn color_theme(mut self, theme: impl Into<ThemeChoice>) -> Self {
        self.color_theme = theme.into();
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn dpi(mut self, dpi: f32) -> Self {
        self.dpi = dpi;
        self
    }

    pub fn grid(mut self, nrow: usize, ncol: usize) -> Self {
        self.nrow = nrow;
        self.ncol = ncol;
        self
    }
}

/// A figure with its style and theme resolved once at construction.
#[derive(Clone, Debug)]
pub struct Figure {
    pub nrow: usize,
    pub ncol: usize,
    pub title: Option<String>,
    pub dpi: f32,
    /// Preset name, or "custom" for user-supplied styles.
    pub style_name: String,
    pub style: Style,
    pub theme: ColorTheme,
    pub subplots: SubplotParams,
}

impl Figure {
    pub fn new(options: FigureOptions) -> Self {
        let (style_name, style) = options.style.resolve();
        let theme = options.color_theme.resolve();
        if options.nrow == 0 || options.ncol == 0 {
            log::warn!("figure grid {}x{} has no panels, using 1x1", options.nrow, options.ncol);
        }
        log::debug!("figure style '{style_name}', theme '{}'", theme.name);
        Self {
            nrow: options.nrow.max(1),
            ncol: options.ncol.max(1),
            title: options.title,
            dpi: if options.dpi > 0.0 { options.dpi } else { DEFAULT_DPI },
            style_name,
            style,
            theme,
            subplots: options.subplots,
        }
    }

    /// Figure size in points.
    pub fn size_points(&self) -> (f32, f32) {
        (self.style.figure_size.0 * POINTS_PER_INCH, self.style.figure_size.1 * POINTS_PER_INCH)
    }

    /// Raster size in pixels at `dpi` for the full (standard layout) figure.
    pub fn pixel_size(&self, dpi: f32) -> (u32, u32) {
        let (w, h) = self.style.figure_size;
        ((w * dpi).round() as u32, (h * dpi).round() as u32)
    }

    pub fn panel_count(&self) -> usize { self.nrow * self.ncol }

    /// Axes rectangles in points, row-major from the top-left panel.
    pub fn panel_rects(&self) -> Vec<RectF> {
        let (w, h) = self.size_points();
        let sp = &self.subplots;
        let left = sp.left * w;
        let right = sp.right * w;
        let top = (1.0 - sp.top) * h;
        let bottom = (1.0 - sp.bottom) * h;
        let (cols, rows) = (self.ncol as f32, self.nrow as f32);
        let cell_w = (right - left) / (cols + sp.wspace * (cols - 1.0));
        let cell_h = (bottom - top) / (rows + sp.hspace * (rows - 1.0));
        let mut out = Vec::with_capacity(self.panel_count());
        for r in 0..self.nrow {
            for c in 0..self.ncol {
                let x = left + c as f32 * cell_w * (1.0 + sp.wspace);
                let y = top + r as f32 * cell_h * (1.0 + sp.hspace);
                out.push(RectF::from_ltwh(x, y, cell_w, cell_h));
            }
        }
        out
    }

    pub fn panel_rect(&self, index: usize) -> Result<RectF> {
        self.panel_rects()
            .get(index)
            .copied()
            .ok_or(PlotError::PanelOutOfRange { index, count: self.panel_count() })
    }

    /// Axis label as placed by the style: corner placement pads the end with spaces.
    pub fn axis_label(&self, label: &str) -> String {
        match self.style.label_placement {
            LabelPlacement::Corner => format!("{label}   "),
            LabelPlacement::Centered => label.to_string(),
        }
    }

    /// Labels, scales and limits for one panel. Does not touch ticks.
    pub fn apply_axes_settings(
        &self,
        xlabel: &str,
        ylabel: &str,
        xlim: (f64, f64),
        ylim: (f64, f64),
        xlog: bool,
        ylog: bool,
    ) -> (Axis, Axis) {
        let x = Axis::new(self.axis_label(xlabel), xlim.0, xlim.1).with_kind(ScaleKind::from_log_flag(xlog));
        let y = Axis::new(self.axis_label(ylabel), ylim.0, ylim.1).with_kind(ScaleKind::from_log_flag(ylog));
        (x, y)
    }

    /// Scene of this figure holding `panels`.
    pub fn scene<'a>(&self, panels: Vec<Panel<'a>>) -> Scene<'a> {
        Scene {
            size: self.size_points(),
            dpi: self.dpi,
            title: self.title.clone(),
            style: self.style.clone(),
            theme: self.theme.clone(),
            panels,
        }
    }
}

impl Default for Figure {
    fn default() -> Self { Self::new(FigureOptions::default()) }
}

/// Split `rect` vertically into stacked panels with heights proportional to `ratios`,
/// separated by `gap` points.
pub fn split_vertical(rect: RectF, ratios: &[f32], gap: f32) -> Vec<RectF> {
    let total: f32 = ratios.iter().sum();
    if ratios.is_empty() || total <= 0.0 {
        return vec![rect];
    }
    let usable = (rect.height() - gap * (ratios.len() as f32 - 1.0)).max(0.0);
    let mut y = rect.top;
    ratios
        .iter()
        .map(|r| {
            let h = usable * r / total;
            let out = RectF::from_ltwh(rect.left, y, rect.width(), h);
            y += h + gap;
            out
        })
        .collect()
}
