// File: crates/chart-core/src/request.rs
// Summary: Per-render request (kind + data bag + options + size) and the viewport it is rendered into.

use serde::{Deserialize, Serialize};

use crate::data::DataBag;
use crate::error::{ChartError, Result};
use crate::kind::ChartKind;
use crate::options::ChartOptions;
use crate::types::{HEIGHT, WIDTH};

/// Declared width: a pixel count or a percentage of the container.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawWidth", into = "RawWidth")]
pub enum ChartWidth {
    Pixels(f32),
    Percent(f32),
}

impl Default for ChartWidth {
    fn default() -> Self { ChartWidth::Pixels(WIDTH) }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(untagged)]
enum RawWidth {
    Number(f32),
    Text(String),
}

impl TryFrom<RawWidth> for ChartWidth {
    type Error = ChartError;

    fn try_from(raw: RawWidth) -> Result<Self> {
        match raw {
            RawWidth::Number(px) => Ok(ChartWidth::Pixels(px)),
            RawWidth::Text(s) => s.parse(),
        }
    }
}

impl From<ChartWidth> for RawWidth {
    fn from(w: ChartWidth) -> Self {
        match w {
            ChartWidth::Pixels(px) => RawWidth::Number(px),
            ChartWidth::Percent(p) => RawWidth::Text(format!("{p}%")),
        }
    }
}

impl std::str::FromStr for ChartWidth {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self> {
        let t = s.trim();
        let bad = || ChartError::InvalidWidth(s.to_string());
        if let Some(pct) = t.strip_suffix('%') {
            let p: f32 = pct.trim().parse().map_err(|_| bad())?;
            if !p.is_finite() || p < 0.0 { return Err(bad()); }
            return Ok(ChartWidth::Percent(p));
        }
        let px: f32 = t.trim_end_matches("px").trim().parse().map_err(|_| bad())?;
        Ok(ChartWidth::Pixels(px))
    }
}

impl ChartWidth {
    /// Logical width in pixels. Percentages follow the container only when `responsive` is set.
    pub fn resolve(self, container_width: Option<f32>, responsive: bool) -> f32 {
        let w = match self {
            ChartWidth::Pixels(px) => px,
            ChartWidth::Percent(p) if responsive => container_width.unwrap_or(WIDTH) * p / 100.0,
            ChartWidth::Percent(_) => WIDTH,
        };
        sanitize_extent(w, WIDTH)
    }
}

fn sanitize_extent(v: f32, fallback: f32) -> f32 {
    if v.is_finite() { v.max(1.0) } else { fallback }
}

/// Environment of one render call: display density and the hosting container's width.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub device_pixel_ratio: f32,
    pub container_width: Option<f32>,
}

impl Default for Viewport {
    fn default() -> Self {
        Self { device_pixel_ratio: 1.0, container_width: None }
    }
}

impl Viewport {
    pub fn with_dpr(device_pixel_ratio: f32) -> Self {
        Self { device_pixel_ratio, ..Self::default() }
    }
}

/// Everything needed for one render. Replaced wholesale on every call, never patched.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChartRequest {
    #[serde(alias = "type")]
    pub kind: ChartKind,
    #[serde(default)]
    pub data: DataBag,
    #[serde(default)]
    pub options: ChartOptions,
    #[serde(default = "default_height")]
    pub height: f32,
    #[serde(default)]
    pub width: ChartWidth,
}

fn default_height() -> f32 { HEIGHT }

impl ChartRequest {
    pub fn new(kind: ChartKind, data: DataBag) -> Self {
        Self {
            kind,
            data,
            options: ChartOptions::default(),
            height: HEIGHT,
            width: ChartWidth::default(),
        }
    }

    pub fn with_options(mut self, options: ChartOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_size(mut self, width: ChartWidth, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Logical (CSS pixel) size this request paints at.
    pub fn logical_size(&self, viewport: &Viewport) -> (f32, f32) {
        let w = self.width.resolve(viewport.container_width, self.options.responsive);
        (w, sanitize_extent(self.height, HEIGHT))
    }
}
