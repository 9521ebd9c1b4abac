// File: crates/nova-core/src/error.rs
// Summary: Library error type and result alias.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("x and y must have the same length, got {x} and {y}")]
    LengthMismatch { x: usize, y: usize },

    #[error("no data: {0}")]
    EmptyData(&'static str),

    #[error("invalid bins: {0}")]
    InvalidBins(String),

    #[error("histograms must share identical bin edges")]
    BinMismatch,

    #[error("unknown data type '{0}' (expected points, line, pointslines, hist or fillbetween)")]
    UnknownObjectType(String),

    #[error("unknown {kind} preset '{name}'")]
    UnknownPreset { kind: &'static str, name: String },

    #[error("invalid color '{0}'")]
    InvalidColor(String),

    #[error("invalid line style '{0}'")]
    InvalidLineStyle(String),

    #[error("invalid marker '{0}'")]
    InvalidMarker(String),

    #[error("panel {index} out of range (figure has {count})")]
    PanelOutOfRange { index: usize, count: usize },

    #[error("log scale requires at least one positive value")]
    NonPositiveLogData,

    #[error("unsupported export format '{0}' (use png, jpg, webp, pdf or svg)")]
    UnsupportedFormat(String),

    #[error("failed to create drawing surface")]
    Surface,

    #[error("encode {0} failed")]
    Encode(&'static str),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("failed to write config: {0}")]
    ConfigWrite(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, PlotError>;
