// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports the data model, normalizer, renderers and chart orchestrator.

pub mod chart;
pub mod data;
pub mod error;
pub mod geometry;
pub mod interaction;
pub mod kind;
pub mod normalize;
pub mod options;
pub mod primitives;
pub mod render;
pub mod request;
pub mod scale;
pub mod surface;
pub mod text;
pub mod theme;
pub mod types;

pub use chart::{render_to_png_bytes, Chart};
pub use data::{BarDatum, Bin, DataBag, Matrix, Point, ShapeKind, Slice};
pub use error::{ChartError, Result};
pub use interaction::{ChartClick, HoverState, HoveredElement, PointerEvent, SurfaceBounds, Tooltip};
pub use kind::{ChartKind, UnknownKind};
pub use normalize::normalize;
pub use options::{ChartConfig, ChartOptions};
pub use render::RenderOutcome;
pub use request::{ChartRequest, ChartWidth, Viewport};
pub use surface::{ChartSurface, SurfaceSize};
pub use text::TextShaper;
pub use theme::Theme;
