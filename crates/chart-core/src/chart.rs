// File: crates/chart-core/src/chart.rs
// Summary: Chart orchestrator; owns the raster surface and repaints it from scratch for every request.

use std::path::Path;

use tracing::debug;

use crate::data::DataBag;
use crate::error::{ChartError, Result};
use crate::interaction::{ChartClick, HoverState, HoveredElement, Interaction, PointerEvent, SurfaceBounds};
use crate::kind::ChartKind;
use crate::normalize::normalize;
use crate::options::ChartConfig;
use crate::render::{render_kind, RenderContext, RenderOutcome};
use crate::request::{ChartRequest, Viewport};
use crate::surface::{ChartSurface, SurfaceSize};
use crate::text::TextShaper;
use crate::theme::Theme;

/// Single writer of the raster surface. Every `render` call is one full clear + redraw.
pub struct Chart {
    surface: Option<ChartSurface>,
    text: TextShaper,
    theme: Theme,
    interaction: Interaction,
    bounds: SurfaceBounds,
    // Kind and data as supplied with the last request, for click payloads.
    current: Option<(ChartKind, DataBag)>,
    last_outcome: Option<RenderOutcome>,
}

impl Default for Chart {
    fn default() -> Self { Self::new() }
}

impl Chart {
    pub fn new() -> Self {
        Self {
            surface: None,
            text: TextShaper::new(),
            theme: Theme::default(),
            interaction: Interaction::default(),
            bounds: SurfaceBounds::default(),
            current: None,
            last_outcome: None,
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn set_theme(&mut self, theme: Theme) { self.theme = theme; }
    pub fn theme(&self) -> &Theme { &self.theme }

    /// Size of the last repaint, if any.
    pub fn size(&self) -> Option<SurfaceSize> { self.surface.as_ref().map(ChartSurface::size) }
    pub fn last_outcome(&self) -> Option<RenderOutcome> { self.last_outcome }
    pub fn current_kind(&self) -> Option<ChartKind> { self.current.as_ref().map(|(k, _)| *k) }

    /// Rescale the surface, derive the shape `req.kind` needs and repaint everything.
    pub fn render(&mut self, req: &ChartRequest, viewport: &Viewport) -> Result<RenderOutcome> {
        let config = ChartConfig::resolve(&req.options, &self.theme);
        let (w, h) = req.logical_size(viewport);
        let size = SurfaceSize::new(w, h, viewport.device_pixel_ratio);

        let surface = match self.surface.take() {
            Some(s) => s,
            None => ChartSurface::new(size)?,
        };
        let surface = self.surface.insert(surface);
        surface.apply(size, config.theme.background)?;

        let bag = normalize(&req.data, req.kind);
        let ctx = RenderContext {
            canvas: surface.canvas(),
            text: &self.text,
            config: &config,
            width: size.logical_width,
            height: size.logical_height,
        };
        let outcome = render_kind(&ctx, req.kind, &req.data, &bag);
        debug!(kind = %req.kind, ?outcome, width = size.logical_width, height = size.logical_height, "chart repainted");

        self.current = Some((req.kind, req.data.clone()));
        self.last_outcome = Some(outcome);
        Ok(outcome)
    }

    /// PNG encoding of the last repaint.
    pub fn png_bytes(&mut self) -> Result<Vec<u8>> {
        self.surface.as_mut().ok_or(ChartError::NotRendered)?.png_bytes()
    }

    /// Write the last repaint to `path` as PNG.
    pub fn render_to_png(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.png_bytes()?;
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// Unpremultiplied RGBA8 pixels of the last repaint: (pixels, width, height, stride).
    pub fn rgba8(&mut self) -> Result<(Vec<u8>, u32, u32, usize)> {
        self.surface.as_mut().ok_or(ChartError::NotRendered)?.rgba8()
    }

    pub fn on_click(&mut self, handler: impl FnMut(&ChartClick) + 'static) {
        self.interaction.set_click_handler(handler);
    }

    pub fn clear_click_handler(&mut self) { self.interaction.clear_click_handler(); }

    /// Where the surface sits in the pointer's client coordinate space.
    pub fn set_surface_bounds(&mut self, bounds: SurfaceBounds) { self.bounds = bounds; }

    /// Feed a pointer event. Returns the click forwarded to the handler, if one was.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> Option<ChartClick> {
        let current = self.current.as_ref().map(|(kind, data)| (*kind, data));
        self.interaction.handle(event, self.bounds, current)
    }

    pub fn hover(&self) -> &HoverState { self.interaction.hover() }

    pub fn set_hovered_element(&mut self, element: Option<HoveredElement>) {
        self.interaction.hover_mut().set_element(element);
    }
}

/// Render `req` once and return the PNG, without keeping a [`Chart`] around.
pub fn render_to_png_bytes(req: &ChartRequest, viewport: &Viewport) -> Result<Vec<u8>> {
    let mut chart = Chart::new();
    chart.render(req, viewport)?;
    chart.png_bytes()
}
