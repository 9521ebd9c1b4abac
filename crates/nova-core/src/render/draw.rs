// File: crates/nova-core/src/render/draw.rs
// Summary: Draws a Scene onto any Skia canvas (raster, PDF page, SVG) and reports the covered extent.

use skia_safe as skia;

use crate::axis::Axis;
use crate::geometry::{Extent, RectF};
use crate::legend::{draw_legend, LegendEntry};
use crate::objects::LineStyle;
use crate::render::paint;
use crate::render::scene::{Orientation, Panel, Scene};
use crate::render::DrawContext;
use crate::scale::ValueScale;
use crate::style::{LabelPlacement, TickDirection};
use crate::text::{HAlign, TextShaper, VAlign};
use crate::ticks;

/// Gap between tick marks and tick labels, and between tick labels and axis labels (points).
const LABEL_PAD: f32 = 3.5;
const TITLE_PAD: f32 = 6.0;

/// Draw `scene` in figure points and return the union of everything drawn.
pub fn draw_scene(canvas: &skia::Canvas, scene: &Scene<'_>, shaper: &TextShaper, draw_text: bool) -> Extent {
    let mut extent = Extent::default();
    for panel in &scene.panels {
        draw_panel(canvas, scene, panel, shaper, draw_text, &mut extent);
    }
    if let (Some(title), true) = (&scene.title, draw_text) {
        let top = scene.panels.iter().map(|p| p.rect.top).fold(f32::INFINITY, f32::min);
        let top = if top.is_finite() { top } else { scene.size.1 * 0.12 };
        let (l, r) = scene
            .panels
            .iter()
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(l, r), p| (l.min(p.rect.left), r.max(p.rect.right)));
        let cx = if l.is_finite() { (l + r) * 0.5 } else { scene.size.0 * 0.5 };
        let rect = shaper.draw(
            canvas,
            title,
            cx,
            top - TITLE_PAD,
            scene.style.title_size,
            scene.theme.text,
            HAlign::Center,
            VAlign::Bottom,
            0.0,
        );
        extent.add(rect);
    }
    extent
}

fn draw_panel(
    canvas: &skia::Canvas,
    scene: &Scene<'_>,
    panel: &Panel<'_>,
    shaper: &TextShaper,
    draw_text: bool,
    extent: &mut Extent,
) {
    let style = &scene.style;
    let theme = &scene.theme;
    let plot = panel.rect;
    let xs = ValueScale::for_axis(&panel.x, plot.left, plot.right);
    let ys = ValueScale::for_axis(&panel.y, plot.bottom, plot.top);
    extent.add(plot);

    canvas.draw_rect(plot.to_skia(), &paint::fill(theme.axes_background));

    let x_major = ticks::major_ticks(&panel.x);
    let y_major = ticks::major_ticks(&panel.y);

    if let Some(grid_style) = panel.grid {
        let grid = paint::stroke(theme.grid, style.axes_line_width * 0.8, grid_style);
        for t in x_major.iter().filter(|t| xs.contains(t.value)) {
            let x = xs.to_px(t.value);
            canvas.draw_line((x, plot.top), (x, plot.bottom), &grid);
        }
        for t in y_major.iter().filter(|t| ys.contains(t.value)) {
            let y = ys.to_px(t.value);
            canvas.draw_line((plot.left, y), (plot.right, y), &grid);
        }
    }

    // Data, clipped to the axes.
    let mut entries = Vec::new();
    let mut samples: Vec<(f32, f32)> = Vec::new();
    canvas.save();
    canvas.clip_rect(plot.to_skia(), skia::ClipOp::Intersect, true);
    let mut ctx = DrawContext::new(canvas, plot, xs, ys, style, theme, shaper);
    for obj in &panel.objects {
        let handle = obj.draw(&mut ctx);
        if let Some(label) = obj.label() {
            entries.push(LegendEntry { label: label.to_string(), handle });
        }
        samples.extend(obj.sample_points().into_iter().map(|(x, y)| ctx.map(x, y)));
    }
    for line in &panel.ref_lines {
        let color = line.color.unwrap_or(theme.text);
        let p = paint::stroke(color, line.width.unwrap_or(style.axes_line_width), line.line_style);
        match line.orientation {
            Orientation::Horizontal => {
                let y = ys.to_px(line.value);
                if y.is_finite() {
                    canvas.draw_line((plot.left, y), (plot.right, y), &p);
                }
            }
            Orientation::Vertical => {
                let x = xs.to_px(line.value);
                if x.is_finite() {
                    canvas.draw_line((x, plot.top), (x, plot.bottom), &p);
                }
            }
        }
    }
    canvas.restore();

    // Frame.
    let frame = paint::stroke(theme.axes_edge, style.axes_line_width, LineStyle::Solid);
    canvas.draw_rect(plot.to_skia(), &frame);

    let out = draw_ticks(canvas, scene, &panel.x, &xs, &panel.y, &ys, &plot, extent);

    if draw_text {
        draw_axis_text(canvas, scene, panel, &x_major, &y_major, &xs, &ys, out, shaper, extent);
    }

    if let Some(opts) = &panel.legend {
        if draw_text {
            let rect = draw_legend(canvas, shaper, &entries, opts, &plot, &samples, style, theme);
            if let Some(r) = rect {
                extent.add(r);
            }
        }
    }

    if draw_text {
        let ctx = DrawContext::new(canvas, plot, xs, ys, style, theme, shaper);
        for note in &panel.annotations {
            if let Some(r) = note.draw(&ctx) {
                extent.add(r);
            }
        }
    }
}

/// Draw major and minor ticks; returns how far they stick out of the frame.
#[allow(clippy::too_many_arguments)]
fn draw_ticks(
    canvas: &skia::Canvas,
    scene: &Scene<'_>,
    x: &Axis,
    xs: &ValueScale,
    y: &Axis,
    ys: &ValueScale,
    plot: &RectF,
    extent: &mut Extent,
) -> f32 {
    let ts = &scene.style.ticks;
    let sign = match ts.direction {
        TickDirection::In => -1.0,
        TickDirection::Out => 1.0,
    };
    let color = scene.theme.tick;
    let x_major = ticks::major_values(x);
    let y_major = ticks::major_values(y);
    let x_minor = ticks::minor_values(x, &x_major);
    let y_minor = ticks::minor_values(y, &y_major);

    let sets = [
        (&x_major, &y_major, ts.major_size, ts.major_width),
        (&x_minor, &y_minor, ts.minor_size, ts.minor_width),
    ];
    for (xv, yv, len, width) in sets {
        let p = paint::stroke(color, width, LineStyle::Solid);
        let d = sign * len;
        for &v in xv.iter().filter(|v| xs.contains(**v)) {
            let px = xs.to_px(v);
            canvas.draw_line((px, plot.bottom), (px, plot.bottom + d), &p);
            if ts.mirrored {
                canvas.draw_line((px, plot.top), (px, plot.top - d), &p);
            }
        }
        for &v in yv.iter().filter(|v| ys.contains(**v)) {
            let py = ys.to_px(v);
            canvas.draw_line((plot.left, py), (plot.left - d, py), &p);
            if ts.mirrored {
                canvas.draw_line((plot.right, py), (plot.right + d, py), &p);
            }
        }
    }
    let out = if ts.direction == TickDirection::Out { ts.major_size.max(ts.minor_size) } else { 0.0 };
    extent.add(plot.inflate(out));
    out
}

#[allow(clippy::too_many_arguments)]
fn draw_axis_text(
    canvas: &skia::Canvas,
    scene: &Scene<'_>,
    panel: &Panel<'_>,
    x_major: &[ticks::Tick],
    y_major: &[ticks::Tick],
    xs: &ValueScale,
    ys: &ValueScale,
    tick_out: f32,
    shaper: &TextShaper,
    extent: &mut Extent,
) {
    let style = &scene.style;
    let color = scene.theme.text;
    let plot = panel.rect;
    let fs = style.tick_label_size;

    let mut below = plot.bottom + tick_out + LABEL_PAD;
    if panel.x.show_labels {
        let mut lowest = below;
        for t in x_major.iter().filter(|t| xs.contains(t.value)) {
            let r = shaper.draw(canvas, &t.label, xs.to_px(t.value), below, fs, color, HAlign::Center, VAlign::Top, 0.0);
            extent.add(r);
            lowest = lowest.max(r.bottom);
        }
        below = lowest + LABEL_PAD;
    }

    let mut left = plot.left - tick_out - LABEL_PAD;
    if panel.y.show_labels {
        let mut leftmost = left;
        for t in y_major.iter().filter(|t| ys.contains(t.value)) {
            let r = shaper.draw(canvas, &t.label, left, ys.to_px(t.value), fs, color, HAlign::Right, VAlign::Center, 0.0);
            extent.add(r);
            leftmost = leftmost.min(r.left);
        }
        left = leftmost - LABEL_PAD;
    }

    let ls = style.label_size;
    let (x_anchor, x_align, y_anchor, y_align) = match style.label_placement {
        LabelPlacement::Centered => (plot.center_x(), HAlign::Center, plot.center_y(), HAlign::Center),
        LabelPlacement::Corner => (plot.right, HAlign::Right, plot.top, HAlign::Right),
    };
    if panel.x.show_labels && !panel.x.label.is_empty() {
        extent.add(shaper.draw(canvas, &panel.x.label, x_anchor, below, ls, color, x_align, VAlign::Top, 0.0));
    }
    if panel.y.show_labels && !panel.y.label.is_empty() {
        extent.add(shaper.draw(canvas, &panel.y.label, left, y_anchor, ls, color, y_align, VAlign::Bottom, 90.0));
    }
}
