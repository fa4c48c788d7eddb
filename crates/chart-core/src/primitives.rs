// File: crates/chart-core/src/primitives.rs
// Summary: Stateless drawing primitives shared by every chart kind.
// Notes:
// - Each primitive takes the canvas plus explicit style values and builds its own Paint. Anything
//   that touches canvas state (transforms, clips) is wrapped in save/restore.

use skia_safe as skia;

use crate::geometry::PlotArea;
use crate::text::{Face, TextShaper};
use crate::theme::Theme;

/// Number of grid intervals along each axis.
pub const GRID_DIVISIONS: usize = 5;

pub const NO_VALID_DATA: &str = "No valid data found";
pub const PLACEHOLDER_TITLE: &str = "No data available";
pub const PLACEHOLDER_HINT: &str = "Select valid data to display the chart";

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

fn stroke_paint(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(color);
    paint
}

fn fill_paint(color: skia::Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(color);
    paint
}

/// Linear gradient between two points with explicit stop positions.
pub fn linear_gradient(
    from: (f32, f32),
    to: (f32, f32),
    colors: &[skia::Color],
    stops: &[f32],
) -> Option<skia::Shader> {
    skia::Shader::linear_gradient((to_point(from), to_point(to)), colors, stops, skia::TileMode::Clamp, None, None)
}

fn to_point(p: (f32, f32)) -> skia::Point { skia::Point::new(p.0, p.1) }

/// Radial gradient whose focus (`start`, radius 0) may sit off the circle's `center`.
pub fn focal_gradient(
    start: (f32, f32),
    center: (f32, f32),
    radius: f32,
    colors: &[skia::Color],
    stops: &[f32],
) -> Option<skia::Shader> {
    skia::Shader::two_point_conical_gradient(
        to_point(start),
        0.0,
        to_point(center),
        radius.max(0.0),
        colors,
        stops,
        skia::TileMode::Clamp,
        None,
        None,
    )
}

pub fn draw_grid(canvas: &skia::Canvas, plot: &PlotArea, color: skia::Color) {
    let paint = stroke_paint(color, 0.5);
    for y in linspace(plot.top as f64, plot.bottom as f64, GRID_DIVISIONS + 1) {
        canvas.draw_line((plot.left, y as f32), (plot.right, y as f32), &paint);
    }
    for x in linspace(plot.left as f64, plot.right as f64, GRID_DIVISIONS + 1) {
        canvas.draw_line((x as f32, plot.top), (x as f32, plot.bottom), &paint);
    }
}

pub fn draw_axes(canvas: &skia::Canvas, plot: &PlotArea, color: skia::Color) {
    let paint = stroke_paint(color, 2.0);
    canvas.draw_line((plot.left, plot.top), (plot.left, plot.bottom), &paint);
    canvas.draw_line((plot.left, plot.bottom), (plot.right, plot.bottom), &paint);
}

/// Bold title centered on `cx`, baseline at `baseline`.
pub fn draw_title(canvas: &skia::Canvas, text: &TextShaper, title: &str, cx: f32, baseline: f32, color: skia::Color) {
    text.draw_centered(canvas, title, cx, baseline, 16.0, color, Face::Bold);
}

/// Axis captions: x centered under the category labels, y rotated along the left edge.
pub fn draw_axis_captions(
    canvas: &skia::Canvas,
    text: &TextShaper,
    plot: &PlotArea,
    x_label: Option<&str>,
    y_label: Option<&str>,
    color: skia::Color,
) {
    if let Some(label) = x_label {
        text.draw_centered(canvas, label, (plot.left + plot.right) * 0.5, plot.bottom + 48.0, 12.0, color, Face::Regular);
    }
    if let Some(label) = y_label {
        let x = (plot.left - 44.0).max(10.0);
        text.draw_vertical(canvas, label, x, (plot.top + plot.bottom) * 0.5, 12.0, color, Face::Regular);
    }
}

/// Fill `rect` with a top-to-bottom gradient.
pub fn fill_rect_vertical_gradient(canvas: &skia::Canvas, rect: skia::Rect, colors: &[skia::Color], stops: &[f32]) {
    let mut paint = fill_paint(colors[0]);
    paint.set_shader(linear_gradient((rect.left, rect.top), (rect.left, rect.bottom), colors, stops));
    canvas.draw_rect(rect, &paint);
}

/// Stroke `rect` with a top-to-bottom gradient.
pub fn stroke_rect_vertical_gradient(canvas: &skia::Canvas, rect: skia::Rect, colors: &[skia::Color], width: f32) {
    let mut paint = stroke_paint(colors[0], width);
    let stops = [0.0, 1.0];
    paint.set_shader(linear_gradient((rect.left, rect.top), (rect.left, rect.bottom), colors, &stops));
    canvas.draw_rect(rect, &paint);
}

/// Soft shadow behind a rounded rectangle (`radius` 0 for a plain rect).
pub fn draw_shadow(canvas: &skia::Canvas, rect: skia::Rect, radius: f32, offset: (f32, f32), blur: f32, color: skia::Color) {
    let mut paint = fill_paint(color);
    paint.set_mask_filter(skia::MaskFilter::blur(skia::BlurStyle::Normal, (blur * 0.5).max(0.1), false));
    let shifted = rect.with_offset(offset);
    canvas.draw_round_rect(shifted, radius, radius, &paint);
}

pub fn fill_circle(canvas: &skia::Canvas, center: (f32, f32), radius: f32, color: skia::Color) {
    canvas.draw_circle(center, radius, &fill_paint(color));
}

pub fn fill_circle_shader(canvas: &skia::Canvas, center: (f32, f32), radius: f32, shader: Option<skia::Shader>, fallback: skia::Color) {
    let mut paint = fill_paint(fallback);
    paint.set_shader(shader);
    canvas.draw_circle(center, radius, &paint);
}

pub fn stroke_circle(canvas: &skia::Canvas, center: (f32, f32), radius: f32, color: skia::Color, width: f32) {
    canvas.draw_circle(center, radius, &stroke_paint(color, width));
}

pub fn fill_rect(canvas: &skia::Canvas, rect: skia::Rect, color: skia::Color) {
    canvas.draw_rect(rect, &fill_paint(color));
}

pub fn stroke_rect(canvas: &skia::Canvas, rect: skia::Rect, color: skia::Color, width: f32) {
    canvas.draw_rect(rect, &stroke_paint(color, width));
}

/// Polyline through `points` stroked with a gradient running from `from` to `to`.
pub fn stroke_polyline(
    canvas: &skia::Canvas,
    points: &[(f32, f32)],
    width: f32,
    colors: &[skia::Color],
    from: (f32, f32),
    to: (f32, f32),
) {
    if points.len() < 2 { return; }
    let mut path = skia::Path::new();
    path.move_to(points[0]);
    for &p in &points[1..] {
        path.line_to(p);
    }
    let mut paint = stroke_paint(colors[0], width);
    paint.set_stroke_cap(skia::paint::Cap::Round);
    paint.set_stroke_join(skia::paint::Join::Round);
    if colors.len() > 1 {
        let stops = [0.0, 1.0];
        paint.set_shader(linear_gradient(from, to, &colors[..2], &stops));
    }
    canvas.draw_path(&path, &paint);
}

/// Closed polygon from `points` down to `baseline`, filled with `shader`.
pub fn fill_under(canvas: &skia::Canvas, points: &[(f32, f32)], baseline: f32, shader: Option<skia::Shader>, fallback: skia::Color) {
    if points.is_empty() { return; }
    let mut path = skia::Path::new();
    path.move_to(points[0]);
    for &p in &points[1..] {
        path.line_to(p);
    }
    let (last_x, _) = points[points.len() - 1];
    path.line_to((last_x, baseline));
    path.line_to((points[0].0, baseline));
    path.close();
    let mut paint = fill_paint(fallback);
    paint.set_shader(shader);
    canvas.draw_path(&path, &paint);
}

/// Pie wedge from `start` sweeping `sweep` (radians, clockwise from 3 o'clock).
pub fn draw_wedge(
    canvas: &skia::Canvas,
    center: (f32, f32),
    radius: f32,
    start: f64,
    sweep: f64,
    fill: Option<skia::Shader>,
    fallback: skia::Color,
    border: Option<skia::Shader>,
) {
    let oval = skia::Rect::from_ltrb(center.0 - radius, center.1 - radius, center.0 + radius, center.1 + radius);
    let (start_deg, sweep_deg) = (start.to_degrees() as f32, sweep.to_degrees() as f32);
    let mut paint = fill_paint(fallback);
    paint.set_shader(fill);
    canvas.draw_arc(oval, start_deg, sweep_deg, true, &paint);
    let mut edge = stroke_paint(fallback, 3.0);
    edge.set_shader(border);
    canvas.draw_arc(oval, start_deg, sweep_deg, true, &edge);
}

/// Rounded, semi-opaque card with a shadow and a hairline border; used behind value labels.
pub fn draw_card(canvas: &skia::Canvas, rect: skia::Rect, radius: f32, theme: &Theme, shadow_offset: f32) {
    draw_shadow(canvas, rect, radius, (0.0, shadow_offset), 4.0 + shadow_offset, skia::Color::from_argb(26, 0, 0, 0));
    let mut fill = fill_paint(theme.card_top);
    let stops = [0.0, 1.0];
    fill.set_shader(linear_gradient((rect.left, rect.top), (rect.left, rect.bottom), &[theme.card_top, theme.card_bottom], &stops));
    canvas.draw_round_rect(rect, radius, radius, &fill);
    canvas.draw_round_rect(rect, radius, radius, &stroke_paint(theme.card_border, 1.0));
}

/// Centered one-line message, used when records exist but none are usable.
pub fn draw_centered_message(canvas: &skia::Canvas, text: &TextShaper, width: f32, height: f32, message: &str, color: skia::Color) {
    text.draw_centered(canvas, message, width * 0.5, height * 0.5, 16.0, color, Face::Regular);
}

/// Full-surface "no data" placeholder: gradient background, a small bar glyph and two lines of text.
pub fn draw_placeholder(canvas: &skia::Canvas, text: &TextShaper, width: f32, height: f32, theme: &Theme) {
    let full = skia::Rect::from_wh(width, height);
    let mut bg = fill_paint(theme.placeholder_top);
    let stops = [0.0, 1.0];
    bg.set_shader(linear_gradient((0.0, 0.0), (width, height), &[theme.placeholder_top, theme.placeholder_bottom], &stops));
    canvas.draw_rect(full, &bg);

    let (cx, cy) = (width * 0.5, height * 0.5);
    let glyph = skia::Color::from_rgb(0x94, 0xa3, 0xb8);
    for (i, h) in [14.0f32, 26.0, 20.0].iter().enumerate() {
        let x = cx - 17.0 + i as f32 * 12.0;
        canvas.draw_round_rect(skia::Rect::from_xywh(x, cy - 30.0 - h, 9.0, *h), 2.0, 2.0, &fill_paint(glyph));
    }

    text.draw_centered(canvas, PLACEHOLDER_TITLE, cx, cy + 10.0, 16.0, theme.text, Face::Regular);
    text.draw_centered(canvas, PLACEHOLDER_HINT, cx, cy + 30.0, 12.0, theme.muted_text, Face::Regular);
}

/// Vertical list of color swatches with labels, anchored at the top-right corner.
pub fn draw_swatch_legend(
    canvas: &skia::Canvas,
    text: &TextShaper,
    entries: &[(String, skia::Color)],
    right: f32,
    top: f32,
    theme: &Theme,
) {
    if entries.is_empty() { return; }
    let label_w = entries
        .iter()
        .map(|(l, _)| text.measure_width(l, 11.0, Face::Regular))
        .fold(0.0f32, f32::max);
    let row_h = 16.0;
    let box_w = label_w + 30.0;
    let box_rect = skia::Rect::from_xywh(right - box_w, top, box_w, entries.len() as f32 * row_h + 8.0);
    draw_card(canvas, box_rect, 6.0, theme, 1.0);
    for (i, (label, color)) in entries.iter().enumerate() {
        let y = top + 4.0 + i as f32 * row_h;
        canvas.draw_round_rect(skia::Rect::from_xywh(box_rect.left + 6.0, y + 3.0, 10.0, 10.0), 2.0, 2.0, &fill_paint(*color));
        text.draw_left(canvas, label, box_rect.left + 22.0, y + 12.0, 11.0, theme.text, Face::Regular);
    }
}

/// Horizontal gradient ramp from `low` to `high` with end values printed underneath.
pub fn draw_gradient_ramp(
    canvas: &skia::Canvas,
    text: &TextShaper,
    rect: skia::Rect,
    low: skia::Color,
    high: skia::Color,
    labels: (&str, &str),
    color: skia::Color,
) {
    let mut paint = fill_paint(low);
    let stops = [0.0, 1.0];
    paint.set_shader(linear_gradient((rect.left, rect.top), (rect.right, rect.top), &[low, high], &stops));
    canvas.draw_rect(rect, &paint);
    text.draw_left(canvas, labels.0, rect.left, rect.bottom + 12.0, 10.0, color, Face::Numeric);
    let w = text.measure_width(labels.1, 10.0, Face::Numeric);
    text.draw_left(canvas, labels.1, rect.right - w, rect.bottom + 12.0, 10.0, color, Face::Numeric);
}

/// Human formatting for value labels: grouped thousands, up to 3 fraction digits.
pub fn format_value(v: f64) -> String {
    if !v.is_finite() {
        return "0".to_string();
    }
    let fixed = format!("{:.3}", v.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac = frac_part.trim_end_matches('0');

    let digits = int_part.as_bytes();
    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, d) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*d as char);
    }

    let negative = v < 0.0 && (grouped != "0" || !frac.is_empty());
    let mut out = String::new();
    if negative { out.push('-'); }
    out.push_str(&grouped);
    if !frac.is_empty() {
        out.push('.');
        out.push_str(frac);
    }
    out
}
