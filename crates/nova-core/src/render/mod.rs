// File: crates/nova-core/src/render/mod.rs
// Summary: Skia rendering: scene model, panel drawing, paint helpers and file export.

mod context;
mod draw;
mod export;
pub mod paint;
mod scene;

pub use context::DrawContext;
pub use draw::draw_scene;
pub use export::{ExportOptions, ImageFormat, Layout, RasterImage};
pub use scene::{Orientation, Panel, RefLine, Scene};
