// File: crates/chart-core/src/options.rs
// Summary: Caller-facing rendering options and the immutable, resolved config handed to every draw call.

use serde::{Deserialize, Serialize};
use skia_safe as skia;
use tracing::warn;

use crate::theme::{parse_hex_color, Theme};

/// Rendering options as supplied with a request (camelCase on the wire).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChartOptions {
    pub title: Option<String>,
    pub x_axis_label: Option<String>,
    pub y_axis_label: Option<String>,
    pub colors: Option<Vec<String>>,
    pub show_legend: bool,
    pub show_grid: bool,
    pub responsive: bool,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            title: None,
            x_axis_label: None,
            y_axis_label: None,
            colors: None,
            show_legend: true,
            show_grid: true,
            responsive: true,
        }
    }
}

impl ChartOptions {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_axis_labels(mut self, x: impl Into<String>, y: impl Into<String>) -> Self {
        self.x_axis_label = Some(x.into());
        self.y_axis_label = Some(y.into());
        self
    }

    pub fn with_colors<I, S>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.colors = Some(colors.into_iter().map(Into::into).collect());
        self
    }
}

/// Fully resolved configuration for one render call.
/// Contract: `palette` is never empty.
#[derive(Clone, Debug)]
pub struct ChartConfig {
    pub theme: Theme,
    pub palette: Vec<skia::Color>,
    pub title: Option<String>,
    pub x_axis_label: Option<String>,
    pub y_axis_label: Option<String>,
    pub show_legend: bool,
    pub show_grid: bool,
}

impl ChartConfig {
    pub fn resolve(options: &ChartOptions, theme: &Theme) -> Self {
        let mut palette: Vec<skia::Color> = Vec::new();
        for raw in options.colors.iter().flatten() {
            match parse_hex_color(raw) {
                Some(c) => palette.push(c),
                None => warn!(color = %raw, "ignoring unparsable palette color"),
            }
        }
        if palette.is_empty() {
            palette = theme.palette.to_vec();
        }
        let non_empty = |s: &Option<String>| s.as_ref().filter(|t| !t.trim().is_empty()).cloned();
        Self {
            theme: *theme,
            palette,
            title: non_empty(&options.title),
            x_axis_label: non_empty(&options.x_axis_label),
            y_axis_label: non_empty(&options.y_axis_label),
            show_legend: options.show_legend,
            show_grid: options.show_grid,
        }
    }

    /// Palette color for record `index`, cycling.
    pub fn color(&self, index: usize) -> skia::Color {
        self.palette[index % self.palette.len()]
    }

    /// Second palette color, or the first when only one is configured.
    pub fn accent(&self) -> skia::Color {
        self.palette.get(1).copied().unwrap_or(self.palette[0])
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self::resolve(&ChartOptions::default(), &Theme::default())
    }
}
