// File: crates/chart-core/src/interaction.rs
// Summary: Pointer handling; click forwarding in logical coordinates and transient hover state.
// Notes:
// - Clicks report raw surface coordinates only. Which bar, slice or point lies under the pointer
//   is left to the handler.

use crate::data::DataBag;
use crate::kind::ChartKind;

/// Top-left corner of the surface in the same client coordinate space as pointer events.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SurfaceBounds {
    pub left: f32,
    pub top: f32,
}

impl SurfaceBounds {
    pub fn new(left: f32, top: f32) -> Self { Self { left, top } }

    /// Client position to logical surface position.
    pub fn to_logical(&self, client_x: f32, client_y: f32) -> (f32, f32) {
        (client_x - self.left, client_y - self.top)
    }
}

/// Pointer input in client coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    Down { x: f32, y: f32 },
    Move { x: f32, y: f32 },
    Enter,
    Leave,
}

/// Payload delivered to the click handler.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartClick {
    pub x: f32,
    pub y: f32,
    pub kind: ChartKind,
    /// The data bag exactly as supplied with the request.
    pub data: DataBag,
}

pub type ClickHandler = Box<dyn FnMut(&ChartClick)>;

/// Element the caller reports as being under the pointer, used for the tooltip.
#[derive(Clone, Debug, PartialEq)]
pub struct HoveredElement {
    pub x: f32,
    pub y: f32,
    pub label: String,
}

/// Tooltip placement, in logical pixels relative to the surface.
#[derive(Clone, Debug, PartialEq)]
pub struct Tooltip {
    pub left: f32,
    pub top: f32,
    pub label: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct HoverState {
    inside: bool,
    pointer: Option<(f32, f32)>,
    element: Option<HoveredElement>,
}

impl HoverState {
    pub fn is_hovered(&self) -> bool { self.inside }
    pub fn pointer(&self) -> Option<(f32, f32)> { self.pointer }
    pub fn element(&self) -> Option<&HoveredElement> { self.element.as_ref() }

    pub fn enter(&mut self) { self.inside = true; }

    pub fn leave(&mut self) {
        self.inside = false;
        self.pointer = None;
        self.element = None;
    }

    pub fn move_to(&mut self, x: f32, y: f32) {
        self.inside = true;
        self.pointer = Some((x, y));
    }

    pub fn set_element(&mut self, element: Option<HoveredElement>) { self.element = element; }

    /// Tooltip anchored 10px right of and 30px above the hovered element.
    pub fn tooltip(&self) -> Option<Tooltip> {
        if !self.inside { return None; }
        self.element.as_ref().map(|e| Tooltip { left: e.x + 10.0, top: e.y - 30.0, label: e.label.clone() })
    }
}

#[derive(Default)]
pub struct Interaction {
    on_click: Option<ClickHandler>,
    hover: HoverState,
}

impl Interaction {
    pub fn set_click_handler(&mut self, handler: impl FnMut(&ChartClick) + 'static) {
        self.on_click = Some(Box::new(handler));
    }

    pub fn clear_click_handler(&mut self) { self.on_click = None; }

    pub fn hover(&self) -> &HoverState { &self.hover }
    pub fn hover_mut(&mut self) -> &mut HoverState { &mut self.hover }

    /// Apply one pointer event. `current` is the last rendered kind and its original data.
    /// Returns the click that was forwarded, if any.
    pub fn handle(
        &mut self,
        event: PointerEvent,
        bounds: SurfaceBounds,
        current: Option<(ChartKind, &DataBag)>,
    ) -> Option<ChartClick> {
        match event {
            PointerEvent::Enter => { self.hover.enter(); None }
            PointerEvent::Leave => { self.hover.leave(); None }
            PointerEvent::Move { x, y } => {
                let (lx, ly) = bounds.to_logical(x, y);
                self.hover.move_to(lx, ly);
                None
            }
            PointerEvent::Down { x, y } => {
                let handler = self.on_click.as_mut()?;
                let (kind, data) = current?;
                let (lx, ly) = bounds.to_logical(x, y);
                let click = ChartClick { x: lx, y: ly, kind, data: data.clone() };
                tracing::debug!(x = lx, y = ly, %kind, "forwarding click");
                handler(&click);
                Some(click)
            }
        }
    }
}
