// File: crates/chart-core/src/types.rs
// Summary: Shared types and constants (default sizes, per-kind paddings).

use crate::kind::ChartKind;

/// Default logical surface width in pixels (also the fallback for non-responsive percentage widths).
pub const WIDTH: f32 = 800.0;
/// Default logical surface height in pixels.
pub const HEIGHT: f32 = 400.0;

/// Screen margins reserved around the plot, in logical pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    pub const fn uniform(v: u32) -> Self { Self::new(v, v, v, v) }

    /// Padding each kind reserves for axes, labels and title.
    pub const fn for_kind(kind: ChartKind) -> Self {
        match kind {
            ChartKind::Bar | ChartKind::Column => Self::uniform(80),
            ChartKind::Pie => Self::uniform(30),
            _ => Self::uniform(60),
        }
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::uniform(60)
    }
}
