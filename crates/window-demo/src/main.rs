// File: crates/window-demo/src/main.rs
// Summary: Windowed demo; repaints the chart into a winit window via RGBA blit (CPU) using softbuffer.
// Keys: Right/Space next kind, Left previous kind, T toggles light/dark. Clicks are logged.

use std::num::NonZeroU32;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chart_core::{
    BarDatum, Chart, ChartKind, ChartOptions, ChartRequest, ChartWidth, DataBag, HoveredElement, PointerEvent, Theme,
    Viewport,
};
use clap::Parser;
use tracing::{error, info};
use winit::event::{ElementState, Event, KeyboardInput, MouseButton, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

/// Interactive chart viewer
#[derive(Parser, Debug)]
#[command(name = "tabula-window-demo")]
struct Args {
    /// Chart request JSON file; a built-in sample is shown when omitted
    #[arg(long)]
    request: Option<PathBuf>,

    /// Start with the dark theme
    #[arg(long)]
    dark: bool,
}

struct Viewer {
    chart: Chart,
    base: ChartRequest,
    kind_idx: usize,
    dark: bool,
    cursor: Option<(f32, f32)>,
}

impl Viewer {
    fn kind(&self) -> ChartKind { ChartKind::ALL[self.kind_idx] }

    fn step(&mut self, forward: bool) {
        let n = ChartKind::ALL.len();
        self.kind_idx = if forward { (self.kind_idx + 1) % n } else { (self.kind_idx + n - 1) % n };
        info!(kind = %self.kind(), "switched chart kind");
    }

    fn toggle_theme(&mut self) {
        self.dark = !self.dark;
        self.chart.set_theme(if self.dark { Theme::dark() } else { Theme::light() });
    }

    /// Full repaint at the window's logical size, returned as 0RGB pixels.
    fn paint(&mut self, physical: (u32, u32), scale: f64) -> Result<Vec<u32>> {
        let logical_w = (physical.0 as f64 / scale) as f32;
        let logical_h = (physical.1 as f64 / scale) as f32;
        let req = ChartRequest {
            kind: self.kind(),
            ..self.base.clone()
        }
        .with_size(ChartWidth::Pixels(logical_w), logical_h);
        self.chart.render(&req, &Viewport::with_dpr(scale as f32))?;

        let (rgba, w, h, stride) = self.chart.rgba8()?;
        let (fw, fh) = (physical.0 as usize, physical.1 as usize);
        let mut frame = vec![0u32; fw * fh];
        for y in 0..fh.min(h as usize) {
            let row = &rgba[y * stride..y * stride + w as usize * 4];
            for (x, px) in row.chunks_exact(4).take(fw).enumerate() {
                frame[y * fw + x] = (px[0] as u32) << 16 | (px[1] as u32) << 8 | px[2] as u32;
            }
        }
        Ok(frame)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();
    let args = Args::parse();

    let base = match &args.request {
        Some(path) => {
            let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
            ChartRequest::from_json(&text).with_context(|| format!("parsing {}", path.display()))?
        }
        None => ChartRequest::new(ChartKind::Bar, sample_bag())
            .with_options(ChartOptions::default().with_title("Monthly signups").with_axis_labels("Month", "Users")),
    };

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Tabula - Window Demo")
        .with_inner_size(winit::dpi::LogicalSize::new(960.0, 560.0))
        .build(&event_loop)
        .context("building window")?;

    let context = unsafe { softbuffer::Context::new(&window) }.map_err(|e| anyhow::anyhow!("softbuffer context: {e}"))?;
    let mut surface =
        unsafe { softbuffer::Surface::new(&context, &window) }.map_err(|e| anyhow::anyhow!("softbuffer surface: {e}"))?;

    let mut chart = Chart::new();
    chart.on_click(|click| {
        info!(x = click.x, y = click.y, kind = %click.kind, shapes = ?click.data.present_shapes(), "chart clicked");
    });
    let mut viewer = Viewer {
        chart: chart.with_theme(if args.dark { Theme::dark() } else { Theme::light() }),
        kind_idx: ChartKind::ALL.iter().position(|k| *k == base.kind).unwrap_or(0),
        base,
        dark: args.dark,
        cursor: None,
    };

    event_loop.run(move |event, _, cf| {
        *cf = ControlFlow::Wait;
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => *cf = ControlFlow::Exit,
                WindowEvent::Resized(_) | WindowEvent::ScaleFactorChanged { .. } => window.request_redraw(),
                WindowEvent::CursorEntered { .. } => {
                    viewer.chart.handle_pointer(PointerEvent::Enter);
                }
                WindowEvent::CursorLeft { .. } => {
                    viewer.cursor = None;
                    viewer.chart.handle_pointer(PointerEvent::Leave);
                    window.set_title("Tabula - Window Demo");
                }
                WindowEvent::CursorMoved { position, .. } => {
                    let logical = position.to_logical::<f32>(window.scale_factor());
                    viewer.cursor = Some((logical.x, logical.y));
                    viewer.chart.handle_pointer(PointerEvent::Move { x: logical.x, y: logical.y });
                    viewer.chart.set_hovered_element(Some(HoveredElement {
                        x: logical.x,
                        y: logical.y,
                        label: format!("{} @ {:.0},{:.0}", viewer.kind(), logical.x, logical.y),
                    }));
                    if let Some(tip) = viewer.chart.hover().tooltip() {
                        window.set_title(&format!("Tabula - {} (tooltip at {:.0},{:.0})", tip.label, tip.left, tip.top));
                    }
                }
                WindowEvent::MouseInput { state: ElementState::Pressed, button: MouseButton::Left, .. } => {
                    if let Some((x, y)) = viewer.cursor {
                        viewer.chart.handle_pointer(PointerEvent::Down { x, y });
                    }
                }
                WindowEvent::KeyboardInput {
                    input: KeyboardInput { state: ElementState::Pressed, virtual_keycode: Some(key), .. },
                    ..
                } => {
                    match key {
                        VirtualKeyCode::Right | VirtualKeyCode::Space => viewer.step(true),
                        VirtualKeyCode::Left => viewer.step(false),
                        VirtualKeyCode::T => viewer.toggle_theme(),
                        _ => return,
                    }
                    window.request_redraw();
                }
                _ => {}
            },
            Event::RedrawRequested(_) => {
                let size = window.inner_size();
                let (Some(w), Some(h)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) else {
                    return;
                };
                if let Err(e) = surface.resize(w, h) {
                    error!("resize error: {e}");
                    return;
                }
                let pixels = match viewer.paint((size.width, size.height), window.scale_factor()) {
                    Ok(p) => p,
                    Err(e) => {
                        error!("render error: {e:#}");
                        return;
                    }
                };
                match surface.buffer_mut() {
                    Ok(mut frame) => {
                        let n = frame.len().min(pixels.len());
                        frame[..n].copy_from_slice(&pixels[..n]);
                        if let Err(e) = frame.present() {
                            error!("present error: {e}");
                        }
                    }
                    Err(e) => error!("frame error: {e}"),
                }
            }
            _ => {}
        }
    })
}

fn sample_bag() -> DataBag {
    DataBag::new().with_bars(vec![
        BarDatum::new("Jan", 420.0),
        BarDatum::new("Feb", 515.0),
        BarDatum::new("Mar", 388.0),
        BarDatum::new("Apr", 640.0),
        BarDatum::new("May", 702.0),
        BarDatum::new("Jun", 590.0),
        BarDatum::new("Jul", 811.0),
    ])
}
