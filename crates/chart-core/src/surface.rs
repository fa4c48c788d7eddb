// File: crates/chart-core/src/surface.rs
// Summary: Surface manager; owns the Skia CPU raster surface and maps logical size + DPR to physical pixels.
// Notes:
// - Every apply() resets the transform, rescales and clears. There is no diffing: callers repaint
//   the whole chart afterwards.

use skia_safe as skia;
use tracing::debug;

use crate::error::{ChartError, Result};

/// Logical (CSS pixel) box plus device pixel ratio.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceSize {
    pub logical_width: f32,
    pub logical_height: f32,
    pub device_pixel_ratio: f32,
}

impl SurfaceSize {
    /// Build a size; a non-finite or non-positive ratio falls back to 1.
    pub fn new(logical_width: f32, logical_height: f32, device_pixel_ratio: f32) -> Self {
        let dpr = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 { device_pixel_ratio } else { 1.0 };
        Self {
            logical_width: logical_width.max(1.0),
            logical_height: logical_height.max(1.0),
            device_pixel_ratio: dpr,
        }
    }

    pub fn physical_width(&self) -> i32 {
        ((self.logical_width * self.device_pixel_ratio).round() as i32).max(1)
    }

    pub fn physical_height(&self) -> i32 {
        ((self.logical_height * self.device_pixel_ratio).round() as i32).max(1)
    }

    pub fn physical(&self) -> (i32, i32) {
        (self.physical_width(), self.physical_height())
    }
}

pub struct ChartSurface {
    surface: skia::Surface,
    size: SurfaceSize,
}

impl ChartSurface {
    pub fn new(size: SurfaceSize) -> Result<Self> {
        let surface = create_raster(size)?;
        Ok(Self { surface, size })
    }

    pub fn size(&self) -> SurfaceSize { self.size }

    /// Resize the backing store if needed, reset to a 1 logical unit = DPR pixels transform and clear.
    pub fn apply(&mut self, size: SurfaceSize, background: skia::Color) -> Result<()> {
        if size.physical() != self.size.physical() {
            self.surface = create_raster(size)?;
        }
        self.size = size;
        let canvas = self.surface.canvas();
        canvas.restore_to_count(1);
        canvas.reset_matrix();
        canvas.clear(background);
        canvas.scale((size.device_pixel_ratio, size.device_pixel_ratio));
        debug!(
            logical_w = size.logical_width,
            logical_h = size.logical_height,
            dpr = size.device_pixel_ratio,
            physical_w = size.physical_width(),
            physical_h = size.physical_height(),
            "surface applied"
        );
        Ok(())
    }

    pub fn canvas(&mut self) -> &skia::Canvas {
        self.surface.canvas()
    }

    /// Encode the current pixels as PNG.
    pub fn png_bytes(&mut self) -> Result<Vec<u8>> {
        let image = self.surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(ChartError::Encode("PNG encoding failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Tightly packed, unpremultiplied RGBA8 pixels: (pixels, width, height, stride).
    pub fn rgba8(&mut self) -> Result<(Vec<u8>, u32, u32, usize)> {
        let (w, h) = self.size.physical();
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !self.surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(ChartError::Encode("reading RGBA pixels failed"));
        }
        Ok((pixels, w as u32, h as u32, stride))
    }
}

fn create_raster(size: SurfaceSize) -> Result<skia::Surface> {
    let (width, height) = size.physical();
    skia::surfaces::raster_n32_premul((width, height))
        .ok_or(ChartError::SurfaceUnavailable { width, height })
}
