// File: crates/chart-core/tests/kind.rs
// Purpose: Chart kind catalogue, parsing and the kind -> renderer table.

use chart_core::render::RENDERERS;
use chart_core::{ChartKind, ShapeKind, UnknownKind};

#[test]
fn renderer_table_follows_kind_order() {
    assert_eq!(RENDERERS.len(), ChartKind::ALL.len());
    for (i, kind) in ChartKind::ALL.into_iter().enumerate() {
        assert_eq!(kind.index(), i);
        assert_eq!(RENDERERS[i].0, kind);
    }
}

#[test]
fn kinds_parse_case_insensitively() {
    assert_eq!("Heatmap".parse::<ChartKind>(), Ok(ChartKind::Heatmap));
    assert_eq!(" area ".parse::<ChartKind>(), Ok(ChartKind::Area));
    assert_eq!("donut".parse::<ChartKind>(), Err(UnknownKind("donut".into())));
}

#[test]
fn kinds_use_lowercase_wire_names() {
    for kind in ChartKind::ALL {
        let json = serde_json::to_string(&kind).unwrap();
        assert_eq!(json, format!("\"{}\"", kind.name()));
        assert_eq!(serde_json::from_str::<ChartKind>(&json).unwrap(), kind);
    }
}

#[test]
fn required_shapes() {
    assert_eq!(ChartKind::Column.required_shape(), ShapeKind::Bars);
    assert_eq!(ChartKind::Scatter.required_shape(), ShapeKind::Points);
    assert_eq!(ChartKind::Histogram.required_shape(), ShapeKind::Bins);
    assert_eq!(ChartKind::Heatmap.description(), "Multiple correlations");
}
