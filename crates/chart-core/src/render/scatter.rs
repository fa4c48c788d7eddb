// File: crates/chart-core/src/render/scatter.rs
// Summary: Scatter plot with independent x/y domains.

use tracing::trace;

use crate::data::{DataBag, Point, ShapeKind};
use crate::geometry::PlotArea;
use crate::kind::ChartKind;
use crate::primitives;
use crate::scale::{Domain, LinearScale};

use super::{draw_frame, no_valid_data, RenderContext, RenderOutcome};

pub const POINT_RADIUS: f32 = 5.0;

/// Points with both coordinates finite; one bad coordinate drops the whole point.
pub fn valid_scatter_points(points: &[Point]) -> Vec<Point> {
    points.iter().copied().filter(Point::is_finite).collect()
}

pub fn layout_scatter(points: &[Point], plot: &PlotArea) -> Vec<(f32, f32)> {
    let (Some(dx), Some(dy)) = (Domain::of(points.iter().map(|p| p.x)), Domain::of(points.iter().map(|p| p.y))) else {
        return Vec::new();
    };
    let xs = LinearScale::new(dx, plot.left, plot.right);
    let ys = LinearScale::new(dy, plot.bottom, plot.top);
    points.iter().map(|p| (xs.to_px(p.x), ys.to_px(p.y))).collect()
}

pub fn render_scatter(ctx: &RenderContext<'_>, bag: &DataBag) -> RenderOutcome {
    let plot = draw_frame(ctx, ChartKind::Scatter);
    let points = valid_scatter_points(bag.points.as_deref().unwrap_or_default());
    if points.is_empty() {
        return no_valid_data(ctx, ShapeKind::Points);
    }
    let pos = layout_scatter(&points, &plot);
    trace!(count = pos.len(), "scatter layout");

    for (i, &center) in pos.iter().enumerate() {
        primitives::fill_circle(ctx.canvas, center, POINT_RADIUS, ctx.config.color(i));
        primitives::stroke_circle(ctx.canvas, center, POINT_RADIUS, ctx.config.theme.marker_border, 1.0);
    }
    RenderOutcome::Drawn { records: points.len() }
}
