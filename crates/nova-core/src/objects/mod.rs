// File: crates/nova-core/src/objects/mod.rs
// Summary: Plot objects: preset wrappers around one data series that style and draw it.

use std::str::FromStr;

use crate::error::PlotError;
use crate::legend::LegendHandle;
use crate::limits::Bounds;
use crate::render::DrawContext;

mod error_bar;
mod fill_between;
mod hist;
mod options;
mod points_lines;
mod step;

pub use error_bar::ErrorBar;
pub use fill_between::FillBetween;
pub use hist::{Bins, ErrType, Hist, HistErrors, HistType};
pub use options::{LineOptions, LineStyle, Marker};
pub use points_lines::PointsLines;
pub use step::{Step, StepWhere};

/// Every plot object reports its extent and label and draws itself on a panel.
pub trait PlotObject {
    /// Legend label; unlabeled objects get no legend entry.
    fn label(&self) -> Option<&str>;

    /// Data extent used for automatic axis limits.
    fn bounds(&self) -> Bounds;

    /// Representative data points, used to keep the "best" legend clear of the data.
    fn sample_points(&self) -> Vec<(f64, f64)> { Vec::new() }

    /// Draw onto the panel and return the handle its legend entry shows.
    fn draw(&self, ctx: &mut DrawContext<'_>) -> LegendHandle;
}

impl<T: PlotObject + ?Sized> PlotObject for &T {
    fn label(&self) -> Option<&str> { (**self).label() }
    fn bounds(&self) -> Bounds { (**self).bounds() }
    fn sample_points(&self) -> Vec<(f64, f64)> { (**self).sample_points() }
    fn draw(&self, ctx: &mut DrawContext<'_>) -> LegendHandle { (**self).draw(ctx) }
}

impl<T: PlotObject + ?Sized> PlotObject for Box<T> {
    fn label(&self) -> Option<&str> { (**self).label() }
    fn bounds(&self) -> Bounds { (**self).bounds() }
    fn sample_points(&self) -> Vec<(f64, f64)> { (**self).sample_points() }
    fn draw(&self, ctx: &mut DrawContext<'_>) -> LegendHandle { (**self).draw(ctx) }
}

/// Object kinds accepted by `add_data`, parsed case-insensitively.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ObjectKind {
    Points,
    Line,
    PointsLines,
    Hist,
    FillBetween,
}

impl FromStr for ObjectKind {
    type Err = PlotError;

    fn from_str(s: &str) -> Result<Self, PlotError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "points" => Ok(ObjectKind::Points),
            "line" => Ok(ObjectKind::Line),
            "pointslines" => Ok(ObjectKind::PointsLines),
            "hist" => Ok(ObjectKind::Hist),
            "fillbetween" => Ok(ObjectKind::FillBetween),
            _ => Err(PlotError::UnknownObjectType(s.to_string())),
        }
    }
}

/// Evenly thinned copy of `points` with at most `max` entries.
pub(crate) fn thin(points: Vec<(f64, f64)>, max: usize) -> Vec<(f64, f64)> {
    if points.len() <= max || max == 0 {
        return points;
    }
    let stride = points.len().div_ceil(max);
    points.into_iter().step_by(stride).collect()
}
