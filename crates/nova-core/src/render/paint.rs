// File: crates/nova-core/src/render/paint.rs
// Summary: Paint construction, polylines with gaps, markers and hatching on a Skia canvas.

use skia_safe as skia;

use crate::objects::{LineStyle, Marker};

pub fn stroke(color: skia::Color, width: f32, style: LineStyle) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(color);
    let pattern = style.dash_pattern();
    if !pattern.is_empty() {
        let w = width.max(0.5);
        let intervals: Vec<f32> = pattern.iter().map(|v| v * w).collect();
        paint.set_path_effect(skia::PathEffect::dash(&intervals, 0.0));
    }
    paint
}

pub fn fill(color: skia::Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(color);
    paint
}

/// Stroke a polyline; non-finite points split it into separate runs.
pub fn polyline(canvas: &skia::Canvas, points: &[(f32, f32)], paint: &skia::Paint) {
    let mut path = skia::PathBuilder::new();
    let mut pen_down = false;
    let mut any = false;
    for &(x, y) in points {
        if !(x.is_finite() && y.is_finite()) {
            pen_down = false;
            continue;
        }
        if pen_down {
            path.line_to((x, y));
        } else {
            path.move_to((x, y));
            pen_down = true;
        }
        any = true;
    }
    if any {
        canvas.draw_path(&path.detach(), paint);
    }
}

/// Closed filled polygon; skipped when any vertex is non-finite.
pub fn polygon(canvas: &skia::Canvas, points: &[(f32, f32)], paint: &skia::Paint) {
    if let Some(path) = polygon_path(points) {
        canvas.draw_path(&path, paint);
    }
}

pub fn polygon_path(points: &[(f32, f32)]) -> Option<skia::Path> {
    if points.len() < 3 || points.iter().any(|(x, y)| !(x.is_finite() && y.is_finite())) {
        return None;
    }
    let mut path = skia::PathBuilder::new();
    path.move_to(points[0]);
    for &p in &points[1..] {
        path.line_to(p);
    }
    path.close();
    Some(path.detach())
}

/// Fill `path` with diagonal hatch lines (`spacing` apart, `width` thick).
pub fn hatch(canvas: &skia::Canvas, path: &skia::Path, color: skia::Color, spacing: f32, width: f32) {
    let bounds = *path.bounds();
    if bounds.is_empty() || spacing <= 0.0 {
        return;
    }
    canvas.save();
    canvas.clip_path(path, skia::ClipOp::Intersect, true);
    let paint = stroke(color, width, LineStyle::Solid);
    let h = bounds.height();
    let mut x = bounds.left - h;
    while x <= bounds.right {
        canvas.draw_line((x, bounds.bottom), (x + h, bounds.top), &paint);
        x += spacing;
    }
    canvas.restore();
}

/// Draw one marker centred at `(cx, cy)`; `size` is the marker diameter in points.
pub fn marker(canvas: &skia::Canvas, kind: Marker, cx: f32, cy: f32, size: f32, color: skia::Color) {
    if !(cx.is_finite() && cy.is_finite()) {
        return;
    }
    let r = size * 0.5;
    let solid = fill(color);
    let line = stroke(color, (size * 0.15).max(0.5), LineStyle::Solid);
    match kind {
        Marker::None => {}
        Marker::Point => {
            canvas.draw_circle((cx, cy), r * 0.5, &solid);
        }
        Marker::Circle => {
            canvas.draw_circle((cx, cy), r, &solid);
        }
        Marker::Square => {
            canvas.draw_rect(skia::Rect::from_ltrb(cx - r * 0.85, cy - r * 0.85, cx + r * 0.85, cy + r * 0.85), &solid);
        }
        Marker::TriangleUp => polygon(canvas, &[(cx, cy - r), (cx + r, cy + r * 0.8), (cx - r, cy + r * 0.8)], &solid),
        Marker::TriangleDown => polygon(canvas, &[(cx, cy + r), (cx + r, cy - r * 0.8), (cx - r, cy - r * 0.8)], &solid),
        Marker::Diamond => polygon(canvas, &[(cx, cy - r), (cx + r * 0.7, cy), (cx, cy + r), (cx - r * 0.7, cy)], &solid),
        Marker::Plus => {
            canvas.draw_line((cx - r, cy), (cx + r, cy), &line);
            canvas.draw_line((cx, cy - r), (cx, cy + r), &line);
        }
        Marker::Cross => {
            canvas.draw_line((cx - r, cy - r), (cx + r, cy + r), &line);
            canvas.draw_line((cx - r, cy + r), (cx + r, cy - r), &line);
        }
        Marker::Star => {
            let pts: Vec<(f32, f32)> = (0..10)
                .map(|i| {
                    let ang = -std::f32::consts::FRAC_PI_2 + i as f32 * std::f32::consts::PI / 5.0;
                    let rad = if i % 2 == 0 { r } else { r * 0.45 };
                    (cx + rad * ang.cos(), cy + rad * ang.sin())
                })
                .collect();
            polygon(canvas, &pts, &solid);
        }
    }
}
