// File: crates/chart-core/src/render/pie.rs
// Summary: Pie chart; wedges proportional to positive finite values, with outside label cards.

use std::f64::consts::TAU;

use skia_safe as skia;
use tracing::trace;

use crate::data::{DataBag, ShapeKind, Slice};
use crate::kind::ChartKind;
use crate::primitives::{self, format_value};
use crate::text::Face;
use crate::theme::shade;

use super::{draw_title, no_valid_data, RenderContext, RenderOutcome};

/// Distance of label cards beyond the pie's edge.
pub const LABEL_OFFSET: f32 = 30.0;

/// Angular extent of one slice, in radians clockwise from 3 o'clock.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Wedge {
    pub start: f64,
    pub sweep: f64,
    /// Share of the total, 0..=1.
    pub fraction: f64,
}

impl Wedge {
    pub fn mid_angle(&self) -> f64 { self.start + self.sweep * 0.5 }
}

/// Slices with a finite, strictly positive value.
pub fn valid_slices(slices: &[Slice]) -> Vec<&Slice> {
    slices.iter().filter(|s| s.value.is_finite() && s.value > 0.0).collect()
}

/// Card and legend name: the label, or "Slice N" (1-based) when it is blank.
pub fn slice_name(slice: &Slice, index: usize) -> String {
    if slice.label.is_empty() { format!("Slice {}", index + 1) } else { slice.label.clone() }
}

/// Accumulated wedges for already-filtered slices; sweeps sum to a full turn.
pub fn pie_wedges(slices: &[&Slice]) -> Vec<Wedge> {
    let total: f64 = slices.iter().map(|s| s.value).sum();
    let total = if total > 0.0 { total } else { 1.0 };
    let mut start = 0.0;
    slices
        .iter()
        .map(|s| {
            let fraction = s.value / total;
            let w = Wedge { start, sweep: fraction * TAU, fraction };
            start += w.sweep;
            w
        })
        .collect()
}

pub fn render_pie(ctx: &RenderContext<'_>, bag: &DataBag) -> RenderOutcome {
    draw_title(ctx, ChartKind::Pie);
    let slices = valid_slices(bag.slices.as_deref().unwrap_or_default());
    if slices.is_empty() {
        return no_valid_data(ctx, ShapeKind::Slices);
    }
    let wedges = pie_wedges(&slices);
    trace!(count = wedges.len(), "pie layout");

    let center = (ctx.width * 0.5, ctx.height * 0.5);
    let radius = ctx.width.min(ctx.height) / 3.0;
    let theme = &ctx.config.theme;

    let disc = skia::Rect::from_xywh(center.0 - radius, center.1 - radius, radius * 2.0, radius * 2.0);
    primitives::draw_shadow(ctx.canvas, disc, radius, (2.0, 2.0), 10.0, skia::Color::from_argb(26, 0, 0, 0));

    for (i, w) in wedges.iter().enumerate() {
        let base = ctx.config.color(i);
        let mid = w.mid_angle();
        let focus = (
            center.0 + (mid.cos() as f32) * radius * 0.2,
            center.1 + (mid.sin() as f32) * radius * 0.2,
        );
        let fill = primitives::focal_gradient(
            focus,
            center,
            radius,
            &[shade(base, 40, 0.95), shade(base, 20, 0.9), shade(base, 0, 0.85), shade(base, -30, 0.7)],
            &[0.0, 0.4, 0.7, 1.0],
        );
        let edge_at = |a: f64| (center.0 + (a.cos() as f32) * radius, center.1 + (a.sin() as f32) * radius);
        let border = primitives::linear_gradient(
            edge_at(w.start),
            edge_at(w.start + w.sweep),
            &[shade(base, 40, 0.8), shade(base, -40, 0.6)],
            &[0.0, 1.0],
        );
        primitives::draw_wedge(ctx.canvas, center, radius, w.start, w.sweep, fill, base, border);
    }

    for (i, (slice, w)) in slices.iter().zip(&wedges).enumerate() {
        let mid = w.mid_angle();
        let label_r = radius + LABEL_OFFSET;
        let lx = center.0 + (mid.cos() as f32) * label_r;
        let ly = center.1 + (mid.sin() as f32) * label_r;

        let name = slice_name(slice, i);
        let value_text = format_value(slice.value);
        let pct_text = format!("{:.1}%", w.fraction * 100.0);
        let max_w = [
            ctx.text.measure_width(&name, 13.0, Face::Bold),
            ctx.text.measure_width(&value_text, 13.0, Face::Bold),
            ctx.text.measure_width(&pct_text, 13.0, Face::Bold),
        ]
        .into_iter()
        .fold(0.0f32, f32::max);

        let card_w = max_w + 20.0;
        let card = skia::Rect::from_xywh(lx - card_w * 0.5, ly - 30.0, card_w, 60.0);
        primitives::draw_card(ctx.canvas, card, 8.0, theme, 4.0);
        ctx.text.draw_centered(ctx.canvas, &name, lx, ly - 10.0, 13.0, theme.card_text, Face::Bold);
        ctx.text.draw_centered(ctx.canvas, &value_text, lx, ly + 8.0, 11.0, theme.muted_text, Face::Regular);
        ctx.text.draw_centered(ctx.canvas, &pct_text, lx, ly + 25.0, 12.0, ctx.config.color(i), Face::Bold);
    }

    if ctx.config.show_legend {
        let entries: Vec<(String, skia::Color)> = slices
            .iter()
            .enumerate()
            .map(|(i, s)| (slice_name(s, i), ctx.config.color(i)))
            .collect();
        primitives::draw_swatch_legend(ctx.canvas, ctx.text, &entries, ctx.width - 10.0, 40.0, theme);
    }
    RenderOutcome::Drawn { records: slices.len() }
}
