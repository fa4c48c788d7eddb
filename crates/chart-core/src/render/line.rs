// File: crates/chart-core/src/render/line.rs
// Summary: Line and area charts; points are spaced evenly by index and scaled on the y domain.

use tracing::trace;

use crate::data::{DataBag, Point, ShapeKind};
use crate::geometry::PlotArea;
use crate::kind::ChartKind;
use crate::primitives;
use crate::scale::{Domain, IndexScale, LinearScale};
use crate::text::Face;
use crate::theme::with_alpha;

use super::{draw_frame, no_valid_data, RenderContext, RenderOutcome};

pub const MARKER_RADIUS: f32 = 6.0;

/// Points with a finite y, in input order. x is not used for placement.
pub fn valid_points(points: &[Point]) -> Vec<Point> {
    points.iter().copied().filter(|p| p.y.is_finite()).collect()
}

/// Pixel positions for already-filtered points: x by index, y over [min y, max y].
pub fn layout_line(points: &[Point], plot: &PlotArea) -> Vec<(f32, f32)> {
    let Some(domain) = Domain::of(points.iter().map(|p| p.y)) else {
        return Vec::new();
    };
    let xs = IndexScale::new(plot.left, plot.right, points.len());
    let ys = LinearScale::new(domain, plot.bottom, plot.top);
    points.iter().enumerate().map(|(i, p)| (xs.to_px(i), ys.to_px(p.y))).collect()
}

pub fn render_line(ctx: &RenderContext<'_>, bag: &DataBag) -> RenderOutcome {
    let plot = draw_frame(ctx, ChartKind::Line);
    let points = valid_points(bag.points.as_deref().unwrap_or_default());
    if points.is_empty() {
        return no_valid_data(ctx, ShapeKind::Points);
    }
    let pos = layout_line(&points, &plot);
    trace!(count = pos.len(), "line layout");

    let (c0, c1) = (ctx.config.color(0), ctx.config.accent());
    primitives::stroke_polyline(ctx.canvas, &pos, 4.0, &[c0, c1], (plot.left, plot.bottom), (plot.right, plot.top));

    let theme = &ctx.config.theme;
    let stops = [0.0, 1.0];
    for (p, &(x, y)) in points.iter().zip(&pos) {
        let shader = primitives::focal_gradient((x, y), (x, y), MARKER_RADIUS, &[c0, c1], &stops);
        primitives::fill_circle_shader(ctx.canvas, (x, y), MARKER_RADIUS, shader, c0);
        primitives::stroke_circle(ctx.canvas, (x, y), MARKER_RADIUS, theme.marker_border, 2.0);
        ctx.text.draw_centered(ctx.canvas, &p.y.to_string(), x, y - 10.0, 10.0, theme.text, Face::Numeric);
    }
    RenderOutcome::Drawn { records: points.len() }
}

pub fn render_area(ctx: &RenderContext<'_>, bag: &DataBag) -> RenderOutcome {
    let plot = draw_frame(ctx, ChartKind::Area);
    let points = valid_points(bag.points.as_deref().unwrap_or_default());
    if points.is_empty() {
        return no_valid_data(ctx, ShapeKind::Points);
    }
    let pos = layout_line(&points, &plot);
    trace!(count = pos.len(), "area layout");

    let c0 = ctx.config.color(0);
    let fill = primitives::linear_gradient(
        (plot.left, plot.top),
        (plot.left, plot.bottom),
        &[with_alpha(c0, 0x80), with_alpha(c0, 0x20)],
        &[0.0, 1.0],
    );
    primitives::fill_under(ctx.canvas, &pos, plot.bottom, fill, with_alpha(c0, 0x50));
    primitives::stroke_polyline(ctx.canvas, &pos, 2.0, &[c0], (plot.left, plot.bottom), (plot.right, plot.top));
    RenderOutcome::Drawn { records: points.len() }
}
