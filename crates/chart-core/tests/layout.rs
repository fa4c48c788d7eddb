// File: crates/chart-core/tests/layout.rs
// Purpose: Pure layout math of the renderers (no surface needed).

use std::f64::consts::TAU;

use chart_core::geometry::PlotArea;
use chart_core::render::bar::{layout_bars, max_value, valid_bars, BAR_FILL};
use chart_core::render::heatmap::{layout_cells, TEXT_FLIP};
use chart_core::render::histogram::layout_bins;
use chart_core::render::line::{layout_line, valid_points};
use chart_core::render::pie::{pie_wedges, slice_name, valid_slices};
use chart_core::render::scatter::{layout_scatter, valid_scatter_points};
use chart_core::types::{Insets, HEIGHT, WIDTH};
use chart_core::{normalize, BarDatum, Bin, ChartKind, DataBag, Point, Slice};

fn approx(a: f32, b: f32) -> bool { (a - b).abs() < 1e-3 }

fn plot() -> PlotArea { PlotArea::from_ltrb(0.0, 0.0, 300.0, 150.0) }

#[test]
fn bar_heights_are_proportional() {
    let bars = vec![BarDatum::new("a", 10.0), BarDatum::new("b", 20.0), BarDatum::new("c", 30.0)];
    let valid = valid_bars(&bars);
    assert_eq!(max_value(&valid), 30.0);
    let g = layout_bars(&valid, &plot());
    assert!(approx(g[0].height * 2.0, g[1].height));
    assert!(approx(g[0].height * 3.0, g[2].height));
    assert!(approx(g[2].height, 150.0));
    // 100px slots, 80px bars centred in them
    assert!(approx(g[0].width, 100.0 * BAR_FILL));
    assert!(approx(g[1].x, 110.0));
}

#[test]
fn bar_layout_filters_and_guards() {
    let bars = vec![BarDatum::new("nan", f64::NAN), BarDatum::new("neg", -5.0), BarDatum::new("zero", 0.0)];
    let valid = valid_bars(&bars);
    assert_eq!(valid.len(), 2);
    assert_eq!(max_value(&valid), 1.0);
    let g = layout_bars(&valid, &plot());
    assert!(g.iter().all(|b| b.height == 0.0 && b.y == 150.0));
}

#[test]
fn points_request_renders_second_bar_full_first_third() {
    let bag = DataBag::new().with_points(vec![Point::new(0.0, 5.0), Point::new(1.0, 15.0)]);
    let bag = normalize(&bag, ChartKind::Bar);
    let bars = bag.bars.as_deref().unwrap();
    assert_eq!(bars, &[BarDatum::new("Item 1", 5.0), BarDatum::new("Item 2", 15.0)]);

    let plot = PlotArea::inset(WIDTH, HEIGHT, Insets::for_kind(ChartKind::Bar));
    let g = layout_bars(&valid_bars(bars), &plot);
    assert!(approx(g[1].height, plot.height()));
    assert!(approx(g[0].height, plot.height() / 3.0));
}

#[test]
fn pie_angles_sum_to_full_turn() {
    let slices = vec![Slice::new("a", 10.0), Slice::new("b", 20.0), Slice::new("c", 30.0), Slice::new("d", 40.0)];
    let valid = valid_slices(&slices);
    let wedges = pie_wedges(&valid);
    let total: f64 = wedges.iter().map(|w| w.sweep).sum();
    assert!((total - TAU).abs() < 1e-9);
    for (w, s) in wedges.iter().zip(&slices) {
        assert!((w.sweep - s.value / 100.0 * TAU).abs() < 1e-9);
    }
    assert_eq!(wedges[0].start, 0.0);
    assert!((wedges[3].start - 0.6 * TAU).abs() < 1e-9);
}

#[test]
fn pie_skips_non_positive_and_non_finite() {
    let slices = vec![Slice::new("a", 0.0), Slice::new("b", -3.0), Slice::new("c", f64::INFINITY), Slice::new("d", 2.0)];
    let valid = valid_slices(&slices);
    assert_eq!(valid.len(), 1);
    let wedges = pie_wedges(&valid);
    assert!((wedges[0].sweep - TAU).abs() < 1e-9);
    assert_eq!(wedges[0].fraction, 1.0);
}

#[test]
fn heatmap_intensity_is_monotonic() {
    let cells = layout_cells(&vec![vec![0.0, 5.0, 10.0]], &plot());
    let got: Vec<f64> = cells.iter().map(|c| c.intensity).collect();
    assert_eq!(got, [0.0, 0.5, 1.0]);
    assert!(cells[2].intensity > TEXT_FLIP && cells[1].intensity <= TEXT_FLIP);
    assert!(approx(cells[1].rect.left, 100.0));
    assert!(approx(cells[1].rect.height(), 150.0));
}

#[test]
fn flat_heatmap_has_zero_intensity() {
    let cells = layout_cells(&vec![vec![4.0, 4.0], vec![4.0, f64::NAN]], &plot());
    assert_eq!(cells.len(), 3);
    assert!(cells.iter().all(|c| c.intensity == 0.0));
}

#[test]
fn histogram_bins_scale_to_largest_frequency() {
    let bins = [Bin::new("a", 2.0), Bin::new("b", 4.0), Bin::new("c", 1.0)];
    let refs: Vec<&Bin> = bins.iter().collect();
    let rects = layout_bins(&refs, &plot());
    assert!(approx(rects[1].height(), 150.0));
    assert!(approx(rects[0].height(), 75.0));
    assert!(approx(rects[2].left, 200.0));
}

#[test]
fn line_spreads_by_index_and_ignores_bad_y() {
    let pts = vec![Point::new(9.0, 0.0), Point::new(3.0, f64::NAN), Point::new(1.0, 10.0), Point::new(0.0, 5.0)];
    let valid = valid_points(&pts);
    assert_eq!(valid.len(), 3);
    let pos = layout_line(&valid, &plot());
    assert_eq!(pos, vec![(0.0, 150.0), (150.0, 0.0), (300.0, 75.0)]);
}

#[test]
fn flat_line_uses_unit_range() {
    let pos = layout_line(&[Point::new(0.0, 2.0)], &plot());
    assert_eq!(pos, vec![(0.0, 150.0)]);
}

#[test]
fn scatter_uses_independent_domains() {
    let pts = [Point::new(10.0, 0.0), Point::new(20.0, 100.0), Point::new(15.0, 50.0)];
    let pos = layout_scatter(&pts, &plot());
    assert_eq!(pos, vec![(0.0, 150.0), (300.0, 0.0), (150.0, 75.0)]);
}

#[test]
fn scatter_drops_points_with_a_bad_x() {
    let pts = [
        Point::new(10.0, 0.0),
        Point::new(f64::NAN, 1000.0),
        Point::new(f64::INFINITY, -50.0),
        Point::new(20.0, 100.0),
    ];
    let valid = valid_scatter_points(&pts);
    assert_eq!(valid, vec![Point::new(10.0, 0.0), Point::new(20.0, 100.0)]);
    // The dropped y values must not widen the y domain.
    let pos = layout_scatter(&valid, &plot());
    assert_eq!(pos, vec![(0.0, 150.0), (300.0, 0.0)]);
}

#[test]
fn blank_slice_labels_get_positional_names() {
    let slices = [Slice::new("", 1.0), Slice::new("Rent", 2.0), Slice::new("", 3.0)];
    let names: Vec<String> = slices.iter().enumerate().map(|(i, s)| slice_name(s, i)).collect();
    assert_eq!(names, ["Slice 1", "Rent", "Slice 3"]);
}

#[test]
fn paddings_follow_kind() {
    assert_eq!(Insets::for_kind(ChartKind::Column), Insets::uniform(80));
    assert_eq!(Insets::for_kind(ChartKind::Pie), Insets::uniform(30));
    assert_eq!(Insets::for_kind(ChartKind::Heatmap), Insets::uniform(60));
    let p = PlotArea::inset(100.0, 50.0, Insets::uniform(60));
    assert_eq!((p.width(), p.height()), (0.0, 0.0));
}
