// File: crates/nova-core/src/plots/mod.rs
// Summary: Plot classes (preset figure/axes templates) and the axes options they share.

use crate::annotation::TextAnnotation;
use crate::error::{PlotError, Result};
use crate::legend::LegendSettings;
use crate::limits::{auto_limits, Span};
use crate::objects::{
    FillBetween, Hist, LineOptions, LineStyle, Marker, ObjectKind, PlotObject, PointsLines,
};

pub mod basic;
pub mod hist;

pub use basic::{BasicOptions, BasicPlot};
pub use hist::{HistOptions, HistPlot, HistPlotOptions};

/// Bins used when a histogram is added through the generic `add_data`.
pub const DEFAULT_BINS: usize = 10;

/// Axes-level settings shared by the plot classes.
#[derive(Clone, Debug, PartialEq)]
pub struct AxesOptions {
    pub xlim: Option<(f64, f64)>,
    pub ylim: Option<(f64, f64)>,
    pub xticks: Option<Vec<f64>>,
    pub yticks: Option<Vec<f64>>,
    pub xlog_on: bool,
    pub ylog_on: bool,
    pub xlabel: String,
    pub ylabel: String,
    /// Extra text drawn on the first panel.
    pub text_info: Vec<TextAnnotation>,
    /// `None` disables the legend.
    pub legend_settings: Option<LegendSettings>,
    pub grid_on: bool,
    pub grid_style: LineStyle,
}

impl Default for AxesOptions {
    fn default() -> Self {
        Self {
            xlim: None,
            ylim: None,
            xticks: None,
            yticks: None,
            xlog_on: false,
            ylog_on: false,
            xlabel: "x".into(),
            ylabel: "y".into(),
            text_info: Vec::new(),
            legend_settings: Some(LegendSettings::default()),
            grid_on: false,
            grid_style: LineStyle::Solid,
        }
    }
}

impl AxesOptions {
    pub fn labels(mut self, xlabel: impl Into<String>, ylabel: impl Into<String>) -> Self {
        self.xlabel = xlabel.into();
        self.ylabel = ylabel.into();
        self
    }

    pub fn xlim(mut self, lo: f64, hi: f64) -> Self {
        self.xlim = Some((lo, hi));
        self
    }

    pub fn ylim(mut self, lo: f64, hi: f64) -> Self {
        self.ylim = Some((lo, hi));
        self
    }

    pub fn log(mut self, x: bool, y: bool) -> Self {
        self.xlog_on = x;
        self.ylog_on = y;
        self
    }

    /// Legend preset by name; unknown names disable the legend.
    pub fn legend(mut self, preset: &str) -> Self {
        self.legend_settings = LegendSettings::parse(preset);
        self
    }

    pub fn no_legend(mut self) -> Self {
        self.legend_settings = None;
        self
    }

    pub fn grid(mut self, style: LineStyle) -> Self {
        self.grid_on = true;
        self.grid_style = style;
        self
    }

    pub fn text(mut self, note: TextAnnotation) -> Self {
        self.text_info.push(note);
        self
    }

    pub(crate) fn grid_line(&self) -> Option<LineStyle> { self.grid_on.then_some(self.grid_style) }
}

/// User limits win; otherwise derive them from the data. Panels without data get
/// `(0, 1)` on linear axes and `(1, 10)` on log axes.
pub(crate) fn resolve_limits(user: Option<(f64, f64)>, span: &Span, log: bool) -> Result<(f64, f64)> {
    if let Some(lim) = user {
        return Ok(lim);
    }
    if span.is_empty() {
        return Ok(if log { (1.0, 10.0) } else { (0.0, 1.0) });
    }
    auto_limits(span, log)
}

/// Line options adjusted to what `kind` draws by default.
pub(crate) fn defaults_for(kind: ObjectKind, mut options: LineOptions) -> LineOptions {
    match kind {
        ObjectKind::Points => {
            options.line_style = LineStyle::None;
            if options.marker == Marker::None {
                options.marker = Marker::Circle;
            }
        }
        ObjectKind::Line => {
            options.marker = Marker::None;
            if options.line_style == LineStyle::None {
                options.line_style = LineStyle::Solid;
            }
        }
        ObjectKind::PointsLines => {
            if options.marker == Marker::None {
                options.marker = Marker::Circle;
            }
            if options.line_style == LineStyle::None {
                options.line_style = LineStyle::Solid;
            }
        }
        ObjectKind::Hist | ObjectKind::FillBetween => {}
    }
    options
}

/// Build the object `add_data` describes.
///
/// `hist` takes `x` as the samples and a non-empty `y` as their weights.
/// `fillbetween` takes `y` as the low, mid and high curves laid end to end (`3 * x.len()` values).
pub(crate) fn build_object(
    x: Vec<f64>,
    y: Vec<f64>,
    label: Option<&str>,
    kind: &str,
    options: LineOptions,
) -> Result<Box<dyn PlotObject>> {
    let kind: ObjectKind = kind.parse()?;
    let label = label.map(str::to_string);
    match kind {
        ObjectKind::Points | ObjectKind::Line | ObjectKind::PointsLines => {
            Ok(Box::new(PointsLines::new(x, y, label, defaults_for(kind, options))?))
        }
        ObjectKind::Hist => {
            let mut hist = Hist::new(x, DEFAULT_BINS, label).alpha(options.alpha);
            if !y.is_empty() {
                if y.len() != hist.data.len() {
                    return Err(PlotError::LengthMismatch { x: hist.data.len(), y: y.len() });
                }
                hist = hist.weights(y);
            }
            if let Some(c) = options.color {
                hist = hist.color(c);
            }
            Ok(Box::new(hist.compute()?))
        }
        ObjectKind::FillBetween => {
            let n = x.len();
            if y.len() != 3 * n {
                return Err(PlotError::LengthMismatch { x: 3 * n, y: y.len() });
            }
            let high = y[2 * n..].to_vec();
            let mid = y[n..2 * n].to_vec();
            let low = y[..n].to_vec();
            let mut band = FillBetween::new(x, low, mid, high, label)?.with_alpha(0.3);
            if let Some(c) = options.color {
                band = band.with_color(c);
            }
            Ok(Box::new(band))
        }
    }
}
