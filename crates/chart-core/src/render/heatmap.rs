// File: crates/chart-core/src/render/heatmap.rs
// Summary: Heatmap; one cell per matrix entry, colored by its position in the value domain.

use skia_safe as skia;
use tracing::trace;

use crate::data::{DataBag, Matrix, ShapeKind};
use crate::geometry::PlotArea;
use crate::kind::ChartKind;
use crate::primitives;
use crate::scale::Domain;
use crate::text::Face;
use crate::theme::lerp_color;

use super::{draw_title, no_valid_data, RenderContext, RenderOutcome};

/// Above this intensity cell text switches to white.
pub const TEXT_FLIP: f64 = 0.5;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeatCell {
    pub row: usize,
    pub col: usize,
    pub rect: skia::Rect,
    pub value: f64,
    /// (value - min) / (max - min), or 0 for a flat domain.
    pub intensity: f64,
}

/// Domain over the finite cells.
pub fn matrix_domain(matrix: &Matrix) -> Option<Domain> {
    Domain::of(matrix.iter().flatten().copied())
}

/// Normalized intensity of `value`; 0 when the domain is flat.
pub fn intensity(value: f64, domain: &Domain) -> f64 {
    let range = domain.max - domain.min;
    if range > 0.0 { ((value - domain.min) / range).clamp(0.0, 1.0) } else { 0.0 }
}

/// Cells for every finite entry. Columns follow the widest row.
pub fn layout_cells(matrix: &Matrix, plot: &PlotArea) -> Vec<HeatCell> {
    let Some(domain) = matrix_domain(matrix) else {
        return Vec::new();
    };
    let rows = matrix.len().max(1);
    let cols = matrix.iter().map(Vec::len).max().unwrap_or(0).max(1);
    let cell_w = plot.width() / cols as f32;
    let cell_h = plot.height() / rows as f32;

    let mut cells = Vec::new();
    for (r, row) in matrix.iter().enumerate() {
        for (c, &value) in row.iter().enumerate() {
            if !value.is_finite() { continue; }
            cells.push(HeatCell {
                row: r,
                col: c,
                rect: skia::Rect::from_xywh(plot.left + c as f32 * cell_w, plot.top + r as f32 * cell_h, cell_w, cell_h),
                value,
                intensity: intensity(value, &domain),
            });
        }
    }
    cells
}

pub fn render_heatmap(ctx: &RenderContext<'_>, bag: &DataBag) -> RenderOutcome {
    draw_title(ctx, ChartKind::Heatmap);
    let empty = Matrix::new();
    let matrix = bag.matrix.as_ref().unwrap_or(&empty);
    let plot = ctx.plot_area(ChartKind::Heatmap);
    let cells = layout_cells(matrix, &plot);
    if cells.is_empty() {
        return no_valid_data(ctx, ShapeKind::Matrix);
    }
    trace!(count = cells.len(), "heatmap layout");

    let theme = &ctx.config.theme;
    for cell in &cells {
        primitives::fill_rect(ctx.canvas, cell.rect, lerp_color(theme.heat_low, theme.heat_high, cell.intensity));
        primitives::stroke_rect(ctx.canvas, cell.rect, skia::Color::WHITE, 1.0);
        let ink = if cell.intensity > TEXT_FLIP { skia::Color::WHITE } else { skia::Color::BLACK };
        ctx.text.draw_centered(
            ctx.canvas,
            &format!("{:.2}", cell.value),
            cell.rect.center_x(),
            cell.rect.center_y() + 3.0,
            10.0,
            ink,
            Face::Numeric,
        );
    }

    if ctx.config.show_legend {
        if let Some(domain) = matrix_domain(matrix) {
            let ramp = skia::Rect::from_xywh(plot.right - 160.0, plot.bottom + 16.0, 160.0, 8.0);
            let (lo, hi) = (format!("{:.2}", domain.min), format!("{:.2}", domain.max));
            primitives::draw_gradient_ramp(ctx.canvas, ctx.text, ramp, theme.heat_low, theme.heat_high, (&lo, &hi), theme.text);
        }
    }
    RenderOutcome::Drawn { records: cells.len() }
}
