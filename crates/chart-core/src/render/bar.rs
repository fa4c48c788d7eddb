// File: crates/chart-core/src/render/bar.rs
// Summary: Bar and column charts: gradient bars with shadows, value cards and category labels.

use skia_safe as skia;
use tracing::{trace, warn};

use crate::data::{BarDatum, DataBag, ShapeKind};
use crate::geometry::PlotArea;
use crate::kind::ChartKind;
use crate::primitives::{self, format_value};
use crate::text::Face;
use crate::theme::{parse_hex_color, shade};

use super::{draw_frame, no_valid_data, RenderContext, RenderOutcome};

/// Fraction of each category slot taken by the bar; the rest is split evenly either side.
pub const BAR_FILL: f32 = 0.8;

/// Pixel placement of one bar.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarGeom {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl BarGeom {
    pub fn center_x(&self) -> f32 { self.x + self.width * 0.5 }
    pub fn rect(&self) -> skia::Rect { skia::Rect::from_xywh(self.x, self.y, self.width, self.height) }
}

/// Bars whose value is finite, in input order.
pub fn valid_bars(bars: &[BarDatum]) -> Vec<&BarDatum> {
    bars.iter().filter(|b| b.value.is_finite()).collect()
}

/// Largest value, or 1 when nothing positive exists.
pub fn max_value(bars: &[&BarDatum]) -> f64 {
    let max = bars.iter().map(|b| b.value).fold(f64::NEG_INFINITY, f64::max);
    if max > 0.0 { max } else { 1.0 }
}

/// Slot layout for already-filtered bars: height = value / max * plot height, clamped to the plot.
pub fn layout_bars(bars: &[&BarDatum], plot: &PlotArea) -> Vec<BarGeom> {
    let n = bars.len().max(1) as f32;
    let slot = plot.width() / n;
    let max = max_value(bars);
    bars.iter()
        .enumerate()
        .map(|(i, bar)| {
            let height = ((bar.value / max) as f32 * plot.height()).clamp(0.0, plot.height());
            BarGeom {
                x: plot.left + i as f32 * slot + slot * (1.0 - BAR_FILL) * 0.5,
                y: plot.bottom - height,
                width: slot * BAR_FILL,
                height,
            }
        })
        .collect()
}

pub fn render_bar(ctx: &RenderContext<'_>, bag: &DataBag) -> RenderOutcome {
    render_bars(ctx, bag, ChartKind::Bar)
}

pub fn render_column(ctx: &RenderContext<'_>, bag: &DataBag) -> RenderOutcome {
    render_bars(ctx, bag, ChartKind::Column)
}

fn render_bars(ctx: &RenderContext<'_>, bag: &DataBag, kind: ChartKind) -> RenderOutcome {
    let plot = draw_frame(ctx, kind);
    let bars = valid_bars(bag.bars.as_deref().unwrap_or_default());
    if bars.is_empty() {
        return no_valid_data(ctx, ShapeKind::Bars);
    }
    let geoms = layout_bars(&bars, &plot);
    trace!(%kind, count = geoms.len(), "bar layout");

    let theme = &ctx.config.theme;
    for (i, (bar, g)) in bars.iter().zip(&geoms).enumerate() {
        let base = bar_color(ctx, bar, i);
        let rect = g.rect();

        if g.height > 0.0 {
            primitives::draw_shadow(ctx.canvas, rect, 0.0, (3.0, 4.0), 12.0, skia::Color::from_argb(38, 0, 0, 0));
            primitives::fill_rect_vertical_gradient(
                ctx.canvas,
                rect,
                &[shade(base, 20, 0.95), shade(base, -20, 0.7)],
                &[0.0, 1.0],
            );
            primitives::stroke_rect_vertical_gradient(ctx.canvas, rect, &[shade(base, 20, 0.8), shade(base, -20, 0.6)], 2.0);
        }

        let value_text = format_value(bar.value);
        let text_w = ctx.text.measure_width(&value_text, 12.0, Face::Bold);
        let card_w = text_w + 16.0;
        let card = skia::Rect::from_xywh(g.center_x() - card_w * 0.5, g.y - 30.0, card_w, 24.0);
        primitives::draw_card(ctx.canvas, card, 6.0, theme, 2.0);
        ctx.text.draw_centered(ctx.canvas, &value_text, g.center_x(), g.y - 13.0, 12.0, theme.card_text, Face::Bold);

        if !bar.label.is_empty() {
            ctx.text.draw_centered(ctx.canvas, &bar.label, g.center_x(), plot.bottom + 25.0, 13.0, theme.category_label, Face::Regular);
        }
    }
    RenderOutcome::Drawn { records: bars.len() }
}

fn bar_color(ctx: &RenderContext<'_>, bar: &BarDatum, index: usize) -> skia::Color {
    match bar.color.as_deref() {
        Some(raw) => parse_hex_color(raw).unwrap_or_else(|| {
            warn!(color = %raw, label = %bar.label, "ignoring unparsable bar color");
            ctx.config.color(index)
        }),
        None => ctx.config.color(index),
    }
}
