// File: crates/chart-core/src/kind.rs
// Summary: Closed set of chart kinds with wire names, required shapes and picker metadata.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::data::ShapeKind;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Line,
    Pie,
    Scatter,
    Histogram,
    Area,
    Column,
    Heatmap,
}

impl ChartKind {
    /// All kinds, in render-table order.
    pub const ALL: [ChartKind; 8] = [
        ChartKind::Bar,
        ChartKind::Line,
        ChartKind::Pie,
        ChartKind::Scatter,
        ChartKind::Histogram,
        ChartKind::Area,
        ChartKind::Column,
        ChartKind::Heatmap,
    ];

    /// Position of this kind in [`ChartKind::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn name(self) -> &'static str {
        match self {
            ChartKind::Bar => "bar",
            ChartKind::Line => "line",
            ChartKind::Pie => "pie",
            ChartKind::Scatter => "scatter",
            ChartKind::Histogram => "histogram",
            ChartKind::Area => "area",
            ChartKind::Column => "column",
            ChartKind::Heatmap => "heatmap",
        }
    }

    /// The canonical shape this kind draws from.
    pub const fn required_shape(self) -> ShapeKind {
        match self {
            ChartKind::Bar | ChartKind::Column => ShapeKind::Bars,
            ChartKind::Line | ChartKind::Area | ChartKind::Scatter => ShapeKind::Points,
            ChartKind::Pie => ShapeKind::Slices,
            ChartKind::Histogram => ShapeKind::Bins,
            ChartKind::Heatmap => ShapeKind::Matrix,
        }
    }

    pub const fn display_name(self) -> &'static str {
        match self {
            ChartKind::Bar => "Bar",
            ChartKind::Line => "Line",
            ChartKind::Pie => "Pie",
            ChartKind::Scatter => "Scatter",
            ChartKind::Histogram => "Histogram",
            ChartKind::Area => "Area",
            ChartKind::Column => "Column",
            ChartKind::Heatmap => "Heatmap",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            ChartKind::Bar => "Comparison between categories",
            ChartKind::Line => "Trends over time",
            ChartKind::Pie => "Proportions and percentages",
            ChartKind::Scatter => "Correlation between variables",
            ChartKind::Histogram => "Distribution of data",
            ChartKind::Area => "Volume over time",
            ChartKind::Column => "Categorical data",
            ChartKind::Heatmap => "Multiple correlations",
        }
    }
}

impl std::fmt::Display for ChartKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown chart kind `{0}`")]
pub struct UnknownKind(pub String);

impl FromStr for ChartKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ChartKind::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownKind(wanted.to_string()))
    }
}
