// File: crates/nova-core/src/types.rs
// Summary: Shared layout constants (subplot fractions, default dpi, point conversions).

/// Default raster resolution.
pub const DEFAULT_DPI: f32 = 300.0;
/// Points per inch.
pub const POINTS_PER_INCH: f32 = 72.0;
/// Padding added around the content in tight layout, in inches.
pub const TIGHT_PAD_INCHES: f32 = 0.1;

/// Subplot grid placement as fractions of the figure.
/// Contract: left < right and bottom < top, all within [0, 1].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SubplotParams {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
    /// Horizontal gap between columns, as a fraction of the mean panel width.
    pub wspace: f32,
    /// Vertical gap between rows, as a fraction of the mean panel height.
    pub hspace: f32,
}

impl SubplotParams {
    pub const fn new(left: f32, right: f32, bottom: f32, top: f32, wspace: f32, hspace: f32) -> Self {
        Self { left, right, bottom, top, wspace, hspace }
    }
}

impl Default for SubplotParams {
    fn default() -> Self {
        Self::new(0.125, 0.9, 0.11, 0.88, 0.2, 0.2)
    }
}
