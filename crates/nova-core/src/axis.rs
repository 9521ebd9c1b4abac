// File: crates/nova-core/src/axis.rs
// Summary: Axis model with labels, limits, scale kind and optional fixed ticks.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScaleKind {
    Linear,
    Log10,
}

impl ScaleKind {
    pub fn from_log_flag(log: bool) -> Self {
        if log { ScaleKind::Log10 } else { ScaleKind::Linear }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub kind: ScaleKind,
    /// Fixed major tick positions; `None` lets the locator choose.
    pub ticks: Option<Vec<f64>>,
    /// Draw tick labels and the axis label (shared axes hide them on inner panels).
    pub show_labels: bool,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max, kind: ScaleKind::Linear, ticks: None, show_labels: true }
    }

    pub fn with_kind(mut self, kind: ScaleKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_ticks(mut self, ticks: Option<Vec<f64>>) -> Self {
        self.ticks = ticks;
        self
    }

    pub fn is_log(&self) -> bool { self.kind == ScaleKind::Log10 }
}
