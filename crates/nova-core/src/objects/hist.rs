// File: crates/nova-core/src/objects/hist.rs
// Summary: Histogram plot object: raw data plus binning, error and appearance presets.

use std::str::FromStr;

use skia_safe as skia;

use crate::error::{PlotError, Result};
use crate::histogram::{self, BinnedHist, HistStats};

/// Number of equal-width bins, or explicit edges.
#[derive(Clone, Debug, PartialEq)]
pub enum Bins {
    Count(usize),
    Edges(Vec<f64>),
}

impl Bins {
    pub fn edges_for(&self, data: &[f64]) -> Result<Vec<f64>> {
        match self {
            Bins::Count(n) => histogram::edges_from_count(data, *n),
            Bins::Edges(e) => {
                histogram::validate_edges(e)?;
                Ok(e.clone())
            }
        }
    }
}

impl From<usize> for Bins {
    fn from(n: usize) -> Self { Bins::Count(n) }
}

impl From<Vec<f64>> for Bins {
    fn from(edges: Vec<f64>) -> Self { Bins::Edges(edges) }
}

/// Which per-bin uncertainty to attach.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum HistErrors {
    #[default]
    None,
    /// sqrt of the summed weights.
    Poisson,
    /// sqrt of the summed squared weights.
    SumW2,
    /// Explicit per-bin errors.
    Values(Vec<f64>),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HistType {
    Bar,
    Step,
    #[default]
    StepFilled,
}

impl FromStr for HistType {
    type Err = PlotError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bar" => Ok(HistType::Bar),
            "step" => Ok(HistType::Step),
            "stepfilled" => Ok(HistType::StepFilled),
            _ => Err(PlotError::UnknownPreset { kind: "hist type", name: s.to_string() }),
        }
    }
}

/// How errors are drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ErrType {
    /// Hatched band between value ± error.
    #[default]
    Atlas,
    FillBetween,
    ErrorBar,
}

impl FromStr for ErrType {
    type Err = PlotError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "atlas" => Ok(ErrType::Atlas),
            "fillbetween" => Ok(ErrType::FillBetween),
            "errorbar" => Ok(ErrType::ErrorBar),
            _ => Err(PlotError::UnknownPreset { kind: "error type", name: s.to_string() }),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Hist {
    pub data: Vec<f64>,
    pub bins: Bins,
    pub weights: Option<Vec<f64>>,
    pub err: HistErrors,
    pub normalize: bool,
    pub hist_type: HistType,
    pub err_type: ErrType,
    pub alpha: f32,
    pub label: Option<String>,
    pub color: Option<skia::Color>,
}

impl Hist {
    pub fn new(data: Vec<f64>, bins: impl Into<Bins>, label: Option<String>) -> Self {
        Self {
            data,
            bins: bins.into(),
            weights: None,
            err: HistErrors::None,
            normalize: false,
            hist_type: HistType::default(),
            err_type: ErrType::default(),
            alpha: 1.0,
            label,
            color: None,
        }
    }

    pub fn weights(mut self, weights: Vec<f64>) -> Self {
        self.weights = Some(weights);
        self
    }

    pub fn errors(mut self, err: HistErrors) -> Self {
        self.err = err;
        self
    }

    pub fn normalize(mut self, on: bool) -> Self {
        self.normalize = on;
        self
    }

    pub fn hist_type(mut self, t: HistType) -> Self {
        self.hist_type = t;
        self
    }

    pub fn err_type(mut self, t: ErrType) -> Self {
        self.err_type = t;
        self
    }

    pub fn alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha.clamp(0.0, 1.0);
        self
    }

    pub fn color(mut self, color: skia::Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Bin the data, attach errors and apply normalisation.
    pub fn compute(&self) -> Result<BinnedHist> {
        let edges = self.bins.edges_for(&self.data)?;
        let (sumw, sumw2) = histogram::fill(&self.data, self.weights.as_deref(), &edges)?;
        let n = sumw.len();
        let mut errors = match &self.err {
            HistErrors::None => None,
            HistErrors::Poisson => Some(sumw.iter().map(|w| w.abs().sqrt()).collect::<Vec<_>>()),
            HistErrors::SumW2 => Some(sumw2.iter().map(|w| w.sqrt()).collect()),
            HistErrors::Values(v) => {
                if v.len() != n {
                    return Err(PlotError::InvalidBins(format!("{} error values for {} bins", v.len(), n)));
                }
                Some(v.clone())
            }
        };
        let mut values = sumw;
        if self.normalize {
            match histogram::density_factors(&values, &edges) {
                Some(factors) => {
                    values.iter_mut().zip(&factors).for_each(|(v, f)| *v *= f);
                    if let Some(errs) = errors.as_mut() {
                        errs.iter_mut().zip(&factors).for_each(|(e, f)| *e *= f);
                    }
                }
                None => log::warn!("cannot normalise empty histogram '{}'", self.label.as_deref().unwrap_or("")),
            }
        }
        let mut out = BinnedHist::new(edges, values)?;
        out.errors = errors;
        out.label = self.label.clone();
        out.color = self.color;
        out.hist_type = self.hist_type;
        out.err_type = self.err_type;
        out.alpha = self.alpha;
        Ok(out)
    }

    /// Weighted mean and standard deviation of the raw data.
    pub fn stats(&self) -> Option<HistStats> {
        histogram::weighted_stats(&self.data, self.weights.as_deref())
    }
}
