// File: crates/chart-core/src/normalize.rs
// Summary: Shape normalizer; derives the canonical shape a chart kind needs from whatever the bag holds.
// Notes:
// - Shapes already present are never touched; a bag that already holds the required shape is
//   returned borrowed. Otherwise a new bag is returned with only the required shape filled in.
// - Derivations keep one record per source record (matrix rows, or cells for scatter), except the
//   histogram derivations, which bin or count values.

use std::borrow::Cow;
use std::collections::HashMap;

use tracing::debug;

use crate::data::{BarDatum, Bin, DataBag, Matrix, Point, ShapeKind, Slice};
use crate::kind::ChartKind;

/// Upper bound on bins produced when auto-binning point values.
pub const MAX_AUTO_BINS: usize = 10;

/// Return `bag` with the shape required by `kind` filled in.
///
/// When no source shape exists the required shape is set to an empty sequence, which renders as
/// the placeholder.
pub fn normalize(bag: &DataBag, kind: ChartKind) -> Cow<'_, DataBag> {
    let target = kind.required_shape();
    if bag.has(target) {
        return Cow::Borrowed(bag);
    }

    let mut out = bag.clone();
    let source = match kind {
        ChartKind::Bar | ChartKind::Column => {
            let (src, bars) = derive_bars(bag);
            out.bars = Some(bars);
            src
        }
        ChartKind::Line | ChartKind::Area => {
            let (src, points) = derive_points(bag, false);
            out.points = Some(points);
            src
        }
        ChartKind::Scatter => {
            let (src, points) = derive_points(bag, true);
            out.points = Some(points);
            src
        }
        ChartKind::Pie => {
            let (src, slices) = derive_slices(bag);
            out.slices = Some(slices);
            src
        }
        ChartKind::Histogram => {
            let (src, bins) = derive_bins(bag);
            out.bins = Some(bins);
            src
        }
        ChartKind::Heatmap => {
            let (src, matrix) = derive_matrix(bag);
            out.matrix = Some(matrix);
            src
        }
    };

    match source {
        Some(src) => debug!(
            %kind,
            from = %src,
            to = %target,
            count = out.len_of(target).unwrap_or(0),
            "derived shape"
        ),
        None => debug!(%kind, to = %target, "no source shape; using empty series"),
    }
    Cow::Owned(out)
}

fn or_default(label: &str, fallback: &str) -> String {
    if label.is_empty() { fallback.to_string() } else { label.to_string() }
}

/// Sum of the finite cells of a row.
pub fn row_sum(row: &[f64]) -> f64 {
    row.iter().copied().filter(|v| v.is_finite()).sum()
}

/// Mean of the finite cells of a row; 0 for a row with no finite cells.
pub fn row_mean(row: &[f64]) -> f64 {
    let count = row.iter().filter(|v| v.is_finite()).count().max(1);
    row_sum(row) / count as f64
}

fn derive_bars(bag: &DataBag) -> (Option<ShapeKind>, Vec<BarDatum>) {
    if let Some(points) = &bag.points {
        let bars = points
            .iter()
            .enumerate()
            .map(|(i, p)| BarDatum::new(format!("Item {}", i + 1), p.y))
            .collect();
        return (Some(ShapeKind::Points), bars);
    }
    if let Some(slices) = &bag.slices {
        let bars = slices.iter().map(|s| BarDatum::new(or_default(&s.label, "Slice"), s.value)).collect();
        return (Some(ShapeKind::Slices), bars);
    }
    if let Some(bins) = &bag.bins {
        let bars = bins.iter().map(|b| BarDatum::new(or_default(&b.label, "Bin"), b.frequency)).collect();
        return (Some(ShapeKind::Bins), bars);
    }
    if let Some(matrix) = &bag.matrix {
        let bars = matrix
            .iter()
            .enumerate()
            .map(|(i, row)| BarDatum::new(format!("Row {}", i + 1), row_sum(row)))
            .collect();
        return (Some(ShapeKind::Matrix), bars);
    }
    (None, Vec::new())
}

fn derive_points(bag: &DataBag, flatten_matrix: bool) -> (Option<ShapeKind>, Vec<Point>) {
    if let Some(bars) = &bag.bars {
        let pts = bars.iter().enumerate().map(|(i, b)| Point::new(i as f64, b.value)).collect();
        return (Some(ShapeKind::Bars), pts);
    }
    if let Some(slices) = &bag.slices {
        let pts = slices.iter().enumerate().map(|(i, s)| Point::new(i as f64, s.value)).collect();
        return (Some(ShapeKind::Slices), pts);
    }
    if let Some(bins) = &bag.bins {
        let pts = bins.iter().enumerate().map(|(i, b)| Point::new(i as f64, b.frequency)).collect();
        return (Some(ShapeKind::Bins), pts);
    }
    if let Some(matrix) = &bag.matrix {
        let pts = if flatten_matrix {
            matrix
                .iter()
                .flat_map(|row| row.iter().enumerate().map(|(col, &v)| Point::new(col as f64, v)))
                .collect()
        } else {
            matrix.iter().enumerate().map(|(i, row)| Point::new(i as f64, row_mean(row))).collect()
        };
        return (Some(ShapeKind::Matrix), pts);
    }
    (None, Vec::new())
}

fn derive_slices(bag: &DataBag) -> (Option<ShapeKind>, Vec<Slice>) {
    if let Some(bars) = &bag.bars {
        let slices = bars.iter().map(|b| Slice::new(or_default(&b.label, "Bar"), b.value)).collect();
        return (Some(ShapeKind::Bars), slices);
    }
    if let Some(points) = &bag.points {
        let slices = points
            .iter()
            .enumerate()
            .map(|(i, p)| Slice::new(format!("Point {}", i + 1), p.y))
            .collect();
        return (Some(ShapeKind::Points), slices);
    }
    if let Some(bins) = &bag.bins {
        let slices = bins.iter().map(|b| Slice::new(or_default(&b.label, "Bin"), b.frequency)).collect();
        return (Some(ShapeKind::Bins), slices);
    }
    if let Some(matrix) = &bag.matrix {
        let slices = matrix
            .iter()
            .enumerate()
            .map(|(i, row)| Slice::new(format!("Row {}", i + 1), row_sum(row)))
            .collect();
        return (Some(ShapeKind::Matrix), slices);
    }
    (None, Vec::new())
}

fn derive_bins(bag: &DataBag) -> (Option<ShapeKind>, Vec<Bin>) {
    if let Some(bars) = &bag.bars {
        let bins = bars.iter().map(|b| Bin::new(or_default(&b.label, "Bin"), b.value)).collect();
        return (Some(ShapeKind::Bars), bins);
    }
    if let Some(points) = &bag.points {
        let values: Vec<f64> = points.iter().map(|p| p.y).collect();
        return (Some(ShapeKind::Points), bin_values(&values, MAX_AUTO_BINS));
    }
    if let Some(slices) = &bag.slices {
        let bins = slices.iter().map(|s| Bin::new(or_default(&s.label, "Bin"), s.value)).collect();
        return (Some(ShapeKind::Slices), bins);
    }
    if let Some(matrix) = &bag.matrix {
        return (Some(ShapeKind::Matrix), count_distinct(matrix));
    }
    (None, Vec::new())
}

fn derive_matrix(bag: &DataBag) -> (Option<ShapeKind>, Matrix) {
    if let Some(bars) = &bag.bars {
        return (Some(ShapeKind::Bars), vec![bars.iter().map(|b| b.value).collect()]);
    }
    if let Some(points) = &bag.points {
        return (Some(ShapeKind::Points), vec![points.iter().map(|p| p.y).collect()]);
    }
    if let Some(slices) = &bag.slices {
        return (Some(ShapeKind::Slices), vec![slices.iter().map(|s| s.value).collect()]);
    }
    if let Some(bins) = &bag.bins {
        return (Some(ShapeKind::Bins), vec![bins.iter().map(|b| b.frequency).collect()]);
    }
    (None, Vec::new())
}

/// Equal-width binning of the finite `values` into `min(max_bins, count)` bins.
///
/// A zero range uses a bin width of 1 so every value lands in the first bin.
pub fn bin_values(values: &[f64], max_bins: usize) -> Vec<Bin> {
    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    let bin_count = max_bins.min(finite.len());
    if bin_count == 0 {
        return Vec::new();
    }
    let min = finite.iter().copied().fold(f64::INFINITY, f64::min);
    let max = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;
    let width = if range == 0.0 { 1.0 } else { range / bin_count as f64 };

    let mut bins: Vec<Bin> = (0..bin_count)
        .map(|i| {
            let lo = min + i as f64 * width;
            let hi = min + (i + 1) as f64 * width;
            Bin::new(format!("{lo:.0}-{hi:.0}"), 0.0)
        })
        .collect();
    for v in finite {
        let idx = (((v - min) / width).floor() as usize).min(bin_count - 1);
        bins[idx].frequency += 1.0;
    }
    bins
}

/// Frequency of each distinct finite cell value, in order of first appearance.
pub fn count_distinct(matrix: &Matrix) -> Vec<Bin> {
    let mut slot_of: HashMap<u64, usize> = HashMap::new();
    let mut seen: Vec<(f64, usize)> = Vec::new();
    for v in matrix.iter().flatten().copied().filter(|v| v.is_finite()) {
        // -0.0 and 0.0 are the same bucket
        let key = if v == 0.0 { 0.0 } else { v };
        let slot = *slot_of.entry(key.to_bits()).or_insert_with(|| {
            seen.push((key, 0));
            seen.len() - 1
        });
        seen[slot].1 += 1;
    }
    seen.into_iter().map(|(v, n)| Bin::new(v.to_string(), n as f64)).collect()
}
