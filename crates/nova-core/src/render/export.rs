// File: crates/nova-core/src/render/export.rs
// Summary: Scene export: tight/standard bounding box, raster encoders (PNG/JPEG/WEBP) and vector (PDF/SVG).

use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use skia_safe as skia;

use crate::error::{PlotError, Result};
use crate::geometry::RectF;
use crate::render::draw::draw_scene;
use crate::render::scene::Scene;
use crate::text::TextShaper;
use crate::types::{POINTS_PER_INCH, TIGHT_PAD_INCHES};

/// How much of the figure ends up in the output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// Crop or grow to everything drawn plus a small pad.
    #[default]
    Tight,
    /// Exactly the figure size.
    Standard,
}

impl FromStr for Layout {
    type Err = PlotError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tight" => Ok(Layout::Tight),
            "standard" | "none" => Ok(Layout::Standard),
            _ => Err(PlotError::UnknownPreset { kind: "layout", name: s.to_string() }),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ExportOptions {
    /// `None` uses the figure's dpi.
    pub dpi: Option<f32>,
    pub layout: Layout,
    /// `None` uses the theme's figure background.
    pub facecolor: Option<skia::Color>,
    /// Text can be switched off for pixel-stable output across platforms.
    pub draw_text: bool,
}

impl Default for ExportOptions {
    fn default() -> Self { Self { dpi: None, layout: Layout::Tight, facecolor: None, draw_text: true } }
}

/// Output file kinds, chosen by extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpeg,
    Webp,
    Pdf,
    Svg,
}

impl ImageFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path.extension().and_then(|e| e.to_str()).map(|e| e.to_ascii_lowercase()).unwrap_or_default();
        match ext.as_str() {
            "png" => Ok(ImageFormat::Png),
            "jpg" | "jpeg" => Ok(ImageFormat::Jpeg),
            "webp" => Ok(ImageFormat::Webp),
            "pdf" => Ok(ImageFormat::Pdf),
            "svg" => Ok(ImageFormat::Svg),
            _ => Err(PlotError::UnsupportedFormat(path.display().to_string())),
        }
    }

    fn encoded(self) -> Option<skia::EncodedImageFormat> {
        match self {
            ImageFormat::Png => Some(skia::EncodedImageFormat::PNG),
            ImageFormat::Jpeg => Some(skia::EncodedImageFormat::JPEG),
            ImageFormat::Webp => Some(skia::EncodedImageFormat::WEBP),
            ImageFormat::Pdf | ImageFormat::Svg => None,
        }
    }
}

/// RGBA8 pixels, unpremultiplied, rows packed (`stride == width * 4`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RasterImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl RasterImage {
    pub fn stride(&self) -> usize { self.width as usize * 4 }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = y as usize * self.stride() + x as usize * 4;
        Some([self.pixels[i], self.pixels[i + 1], self.pixels[i + 2], self.pixels[i + 3]])
    }
}

impl Scene<'_> {
    /// Region of the figure (in points) that the output covers.
    pub fn output_region(&self, opts: &ExportOptions) -> Result<RectF> {
        match opts.layout {
            Layout::Standard => Ok(self.bounds()),
            Layout::Tight => {
                // Measure on a throwaway surface; nothing drawn there is kept.
                let mut probe = skia::surfaces::raster_n32_premul((1, 1)).ok_or(PlotError::Surface)?;
                let shaper = TextShaper::new(self.style.font_families());
                let extent = draw_scene(probe.canvas(), self, &shaper, opts.draw_text);
                let content = extent.rect().unwrap_or_else(|| self.bounds());
                Ok(content.inflate(TIGHT_PAD_INCHES * POINTS_PER_INCH))
            }
        }
    }

    fn scale_for(&self, opts: &ExportOptions) -> f32 { opts.dpi.unwrap_or(self.dpi).max(1.0) / POINTS_PER_INCH }

    /// Raster surface with the scene drawn at the export resolution.
    fn rasterize(&self, opts: &ExportOptions) -> Result<skia::Surface> {
        let region = self.output_region(opts)?;
        let scale = self.scale_for(opts);
        let w = (region.width() * scale).ceil().max(1.0) as i32;
        let h = (region.height() * scale).ceil().max(1.0) as i32;
        let mut surface = skia::surfaces::raster_n32_premul((w, h)).ok_or(PlotError::Surface)?;
        let canvas = surface.canvas();
        canvas.clear(opts.facecolor.unwrap_or(self.theme.figure_background));
        canvas.scale((scale, scale));
        canvas.translate((-region.left, -region.top));
        let shaper = TextShaper::new(self.style.font_families());
        draw_scene(canvas, self, &shaper, opts.draw_text);
        log::debug!("rasterized figure at {w}x{h} px ({} dpi)", scale * POINTS_PER_INCH);
        Ok(surface)
    }

    /// Encoded PNG bytes.
    pub fn render_png(&self, opts: &ExportOptions) -> Result<Vec<u8>> {
        self.encode(opts, ImageFormat::Png)
    }

    /// Unpremultiplied RGBA8 pixels.
    pub fn render_rgba8(&self, opts: &ExportOptions) -> Result<RasterImage> {
        let mut surface = self.rasterize(opts)?;
        let (w, h) = (surface.width(), surface.height());
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(PlotError::Surface);
        }
        Ok(RasterImage { width: w as u32, height: h as u32, pixels })
    }

    fn encode(&self, opts: &ExportOptions, format: ImageFormat) -> Result<Vec<u8>> {
        match format.encoded() {
            Some(encoded) => {
                let mut surface = self.rasterize(opts)?;
                let image = surface.image_snapshot();
                #[allow(deprecated)]
                let data = image.encode_to_data(encoded).ok_or(PlotError::Encode("raster encoding failed"))?;
                Ok(data.as_bytes().to_vec())
            }
            None if format == ImageFormat::Pdf => self.render_pdf(opts),
            None => self.render_svg(opts),
        }
    }

    fn draw_vector(&self, canvas: &skia::Canvas, region: RectF, opts: &ExportOptions) {
        canvas.translate((-region.left, -region.top));
        let face = opts.facecolor.unwrap_or(self.theme.figure_background);
        canvas.draw_rect(region.to_skia(), &crate::render::paint::fill(face));
        let shaper = TextShaper::new(self.style.font_families());
        draw_scene(canvas, self, &shaper, opts.draw_text);
    }

    /// Single-page PDF in point units.
    pub fn render_pdf(&self, opts: &ExportOptions) -> Result<Vec<u8>> {
        let region = self.output_region(opts)?;
        let mut out: Vec<u8> = Vec::new();
        {
            let document = skia::pdf::new_document(&mut out, None);
            let mut page = document.begin_page((region.width(), region.height()), None);
            self.draw_vector(page.canvas(), region, opts);
            page.end_page().close();
        }
        if out.is_empty() {
            return Err(PlotError::Encode("pdf document is empty"));
        }
        Ok(out)
    }

    /// SVG document in point units.
    pub fn render_svg(&self, opts: &ExportOptions) -> Result<Vec<u8>> {
        let region = self.output_region(opts)?;
        let bounds = skia::Rect::from_wh(region.width(), region.height());
        let canvas = skia::svg::Canvas::new(bounds, None);
        self.draw_vector(&canvas, region, opts);
        Ok(canvas.end().as_bytes().to_vec())
    }

    /// Write the figure to `path`; the format follows the extension. Parent directories are created.
    pub fn export(&self, path: impl AsRef<Path>, opts: &ExportOptions) -> Result<()> {
        let path = path.as_ref();
        let format = ImageFormat::from_path(path)?;
        let bytes = self.encode(opts, format)?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, &bytes)?;
        log::debug!("exported {} ({:?}, {} bytes)", path.display(), format, bytes.len());
        Ok(())
    }
}
