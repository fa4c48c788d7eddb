// File: crates/chart-core/src/render/mod.rs
// Summary: Per-kind chart renderers, the kind -> renderer table, and the frame shared by axis charts.

use skia_safe as skia;

use crate::data::{DataBag, ShapeKind};
use crate::geometry::PlotArea;
use crate::kind::ChartKind;
use crate::options::ChartConfig;
use crate::primitives;
use crate::text::TextShaper;
use crate::types::Insets;

pub mod bar;
pub mod heatmap;
pub mod histogram;
pub mod line;
pub mod pie;
pub mod scatter;

/// What a single repaint ended up showing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderOutcome {
    /// `records` usable records were painted.
    Drawn { records: usize },
    /// Records were supplied but none survived filtering.
    NoValidData,
    /// The required shape was empty; the placeholder was painted.
    Placeholder,
}

/// Everything a renderer may touch. Sizes are logical pixels; the canvas is already DPR-scaled.
pub struct RenderContext<'a> {
    pub canvas: &'a skia::Canvas,
    pub text: &'a TextShaper,
    pub config: &'a ChartConfig,
    pub width: f32,
    pub height: f32,
}

impl RenderContext<'_> {
    pub fn plot_area(&self, kind: ChartKind) -> PlotArea {
        PlotArea::inset(self.width, self.height, Insets::for_kind(kind))
    }
}

pub type RenderFn = fn(&RenderContext<'_>, &DataBag) -> RenderOutcome;

/// One renderer per kind, in [`ChartKind::ALL`] order.
pub static RENDERERS: [(ChartKind, RenderFn); 8] = [
    (ChartKind::Bar, bar::render_bar),
    (ChartKind::Line, line::render_line),
    (ChartKind::Pie, pie::render_pie),
    (ChartKind::Scatter, scatter::render_scatter),
    (ChartKind::Histogram, histogram::render_histogram),
    (ChartKind::Area, line::render_area),
    (ChartKind::Column, bar::render_column),
    (ChartKind::Heatmap, heatmap::render_heatmap),
];

pub fn renderer(kind: ChartKind) -> RenderFn {
    let (k, f) = RENDERERS[kind.index()];
    debug_assert_eq!(k, kind, "renderer table out of order");
    f
}

/// Paint `bag` as `kind`. `bag` is `source` after normalization and must hold the kind's
/// required shape.
///
/// An empty required shape paints the placeholder, unless it was derived from records that
/// were all filtered out during derivation (histogram binning skips non-finite values).
pub fn render_kind(ctx: &RenderContext<'_>, kind: ChartKind, source: &DataBag, bag: &DataBag) -> RenderOutcome {
    let shape = kind.required_shape();
    if bag.len_of(shape).unwrap_or(0) == 0 {
        if !source.has(shape) && source.record_count() > 0 {
            draw_title(ctx, kind);
            return no_valid_data(ctx, shape);
        }
        primitives::draw_placeholder(ctx.canvas, ctx.text, ctx.width, ctx.height, &ctx.config.theme);
        return RenderOutcome::Placeholder;
    }
    renderer(kind)(ctx, bag)
}

/// Grid (optional), axes, title and axis captions for the cartesian kinds.
pub(crate) fn draw_frame(ctx: &RenderContext<'_>, kind: ChartKind) -> PlotArea {
    let plot = ctx.plot_area(kind);
    let theme = &ctx.config.theme;
    if ctx.config.show_grid {
        primitives::draw_grid(ctx.canvas, &plot, theme.grid);
    }
    primitives::draw_axes(ctx.canvas, &plot, theme.axis_line);
    draw_title(ctx, kind);
    primitives::draw_axis_captions(
        ctx.canvas,
        ctx.text,
        &plot,
        ctx.config.x_axis_label.as_deref(),
        ctx.config.y_axis_label.as_deref(),
        theme.muted_text,
    );
    plot
}

pub(crate) fn draw_title(ctx: &RenderContext<'_>, kind: ChartKind) {
    if let Some(title) = &ctx.config.title {
        let baseline = Insets::for_kind(kind).top as f32 - 10.0;
        primitives::draw_title(ctx.canvas, ctx.text, title, ctx.width * 0.5, baseline, ctx.config.theme.text);
    }
}

pub(crate) fn no_valid_data(ctx: &RenderContext<'_>, shape: ShapeKind) -> RenderOutcome {
    tracing::debug!(%shape, "all records filtered out");
    primitives::draw_centered_message(ctx.canvas, ctx.text, ctx.width, ctx.height, primitives::NO_VALID_DATA, ctx.config.theme.text);
    RenderOutcome::NoValidData
}
