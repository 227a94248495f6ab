//! Capability interface shared by the per-pane visual elements.
//!
//! Titles and splitter handles are not toolkit widgets; they implement [`Element`]
//! so the toolbox can measure them, route input to them and hand them to a painter
//! without knowing their concrete type.

use foldbox_core::geometry::{Rect, Size};
use foldbox_core::math::IVec2;

use crate::event::InputEvent;
use crate::paint::ToolBoxPainter;
use crate::style::StyleMetrics;

/// Toolbox-wide values an element needs while handling input or painting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementContext {
    /// Index of the owning pane.
    pub index: usize,
    /// Width of the branch indicator area.
    pub indentation: i32,
    /// Manhattan distance before a press becomes a drag.
    pub drag_distance: i32,
    pub enabled: bool,
}

/// What an element wants the toolbox to do after an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementResponse {
    Ignored,
    Repaint,
    Clicked,
    ContextMenu(IVec2),
    /// A title drag began at the given press position.
    DragStarted(IVec2),
    /// A handle was pressed at the given position.
    ResizeStarted(IVec2),
}

pub trait Element {
    /// Preferred size of the element.
    fn measure(&mut self, style: &dyn StyleMetrics) -> Size<i32>;

    fn geometry(&self) -> Rect<i32>;

    fn set_geometry(&mut self, rect: Rect<i32>);

    fn is_visible(&self) -> bool;

    fn handle_input(&mut self, event: &InputEvent, ctx: &ElementContext) -> ElementResponse;

    fn render(&self, ctx: &ElementContext, painter: &mut dyn ToolBoxPainter);
}
