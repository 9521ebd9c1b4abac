// File: crates/nova-core/src/lib.rs
// Summary: Core library entry point; preset plot classes, plot objects and themes over Skia.

pub mod annotation;
pub mod axis;
pub mod color;
pub mod config;
pub mod downsample;
pub mod error;
pub mod figure;
pub mod geometry;
pub mod histogram;
pub mod legend;
pub mod limits;
pub mod mathtext;
pub mod objects;
pub mod plots;
pub mod render;
pub mod scale;
pub mod style;
pub mod text;
pub mod theme;
pub mod ticks;
pub mod types;

pub use annotation::{CoordSystem, TextAnnotation};
pub use axis::{Axis, ScaleKind};
pub use config::NovaConfig;
pub use downsample::lttb;
pub use error::{PlotError, Result};
pub use figure::{Figure, FigureOptions};
pub use histogram::{divide_hists, BinnedHist, HistStats};
pub use legend::{LegendLoc, LegendOptions, LegendPreset, LegendSettings};
pub use limits::{magnitude_round, Rounding};
pub use objects::{
    Bins, ErrType, ErrorBar, FillBetween, Hist, HistErrors, HistType, LineOptions, LineStyle, Marker, ObjectKind,
    PlotObject, PointsLines, Step, StepWhere,
};
pub use plots::{AxesOptions, BasicOptions, BasicPlot, HistOptions, HistPlot, HistPlotOptions};
pub use render::{ExportOptions, Layout, RasterImage, Scene};
pub use style::{Style, StyleChoice, StyleOverrides};
pub use text::{HAlign, TextShaper, VAlign};
pub use theme::{ColorTheme, ThemeChoice, ThemeOverrides};
