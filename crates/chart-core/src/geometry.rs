// File: crates/chart-core/src/geometry.rs
// Summary: Lightweight geometry helpers for the plot rectangle and pixel math.

use crate::types::Insets;

/// Plot rectangle in logical pixels (y grows downward).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotArea {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl PlotArea {
    pub const fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }

    /// Area left after reserving `insets` inside a `width` x `height` surface.
    /// Degenerate surfaces collapse to a zero-size area instead of inverting.
    pub fn inset(width: f32, height: f32, insets: Insets) -> Self {
        let left = insets.left as f32;
        let top = insets.top as f32;
        let right = (width - insets.right as f32).max(left);
        let bottom = (height - insets.bottom as f32).max(top);
        Self { left, top, right, bottom }
    }

    pub fn width(&self) -> f32 { self.right - self.left }
    pub fn height(&self) -> f32 { self.bottom - self.top }
}
