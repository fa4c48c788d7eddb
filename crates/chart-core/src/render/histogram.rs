// File: crates/chart-core/src/render/histogram.rs
// Summary: Histogram; adjacent flat-colored bins scaled by the largest frequency.

use skia_safe as skia;
use tracing::trace;

use crate::data::{Bin, DataBag, ShapeKind};
use crate::geometry::PlotArea;
use crate::kind::ChartKind;
use crate::primitives;
use crate::text::Face;

use super::{draw_frame, no_valid_data, RenderContext, RenderOutcome};

/// Visible share of each bin's slot.
pub const BIN_FILL: f32 = 0.9;

/// Bin rectangles for already-filtered bins.
pub fn layout_bins(bins: &[&Bin], plot: &PlotArea) -> Vec<skia::Rect> {
    let bin_w = plot.width() / bins.len().max(1) as f32;
    let max = bins.iter().map(|b| b.frequency).fold(f64::NEG_INFINITY, f64::max);
    let max = if max > 0.0 { max } else { 1.0 };
    bins.iter()
        .enumerate()
        .map(|(i, b)| {
            let h = ((b.frequency / max) as f32 * plot.height()).clamp(0.0, plot.height());
            skia::Rect::from_xywh(plot.left + i as f32 * bin_w, plot.bottom - h, bin_w * BIN_FILL, h)
        })
        .collect()
}

pub fn render_histogram(ctx: &RenderContext<'_>, bag: &DataBag) -> RenderOutcome {
    let plot = draw_frame(ctx, ChartKind::Histogram);
    let bins: Vec<&Bin> = bag
        .bins
        .as_deref()
        .unwrap_or_default()
        .iter()
        .filter(|b| b.frequency.is_finite())
        .collect();
    if bins.is_empty() {
        return no_valid_data(ctx, ShapeKind::Bins);
    }
    let rects = layout_bins(&bins, &plot);
    trace!(count = rects.len(), "histogram layout");

    let fill = ctx.config.color(0);
    let slot = plot.width() / bins.len() as f32;
    for (bin, rect) in bins.iter().zip(&rects) {
        primitives::fill_rect(ctx.canvas, *rect, fill);
        primitives::stroke_rect(ctx.canvas, *rect, skia::Color::WHITE, 1.0);
        if !bin.label.is_empty() {
            ctx.text.draw_centered(ctx.canvas, &bin.label, rect.left + slot * 0.5, plot.bottom + 15.0, 10.0, ctx.config.theme.text, Face::Regular);
        }
    }
    RenderOutcome::Drawn { records: bins.len() }
}
