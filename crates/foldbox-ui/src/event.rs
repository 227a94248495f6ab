//! Input delivered by the host and notifications emitted by the toolbox.
//!
//! The host translates its toolkit's pointer events into [`InputEvent`]s (in toolbox
//! coordinates) and feeds them to [`ToolBox::input`](crate::ToolBox::input). The owner
//! registers closures with [`ToolBox::on_event`](crate::ToolBox::on_event) to hear about
//! clicks, menu requests, drags and size changes.

use foldbox_core::geometry::Size;
use foldbox_core::math::IVec2;

/// Pointer buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

/// Pointer input in toolbox coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    HoverEnter(IVec2),
    HoverMove(IVec2),
    HoverLeave,
    Press { pos: IVec2, button: PointerButton },
    Move(IVec2),
    Release { pos: IVec2, button: PointerButton },
}

impl InputEvent {
    pub fn position(&self) -> Option<IVec2> {
        match *self {
            InputEvent::HoverEnter(pos)
            | InputEvent::HoverMove(pos)
            | InputEvent::Move(pos)
            | InputEvent::Press { pos, .. }
            | InputEvent::Release { pos, .. } => Some(pos),
            InputEvent::HoverLeave => None,
        }
    }
}

/// Notifications for the toolbox owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolBoxEvent {
    /// A title was clicked; the pane's expanded state has already been toggled.
    TitleClicked { index: usize },
    /// The user asked for the pane context menu on a title.
    ContextMenuRequested { index: usize, position: IVec2 },
    /// A title was dragged past the drag distance.
    DragStarted { index: usize, origin: IVec2 },
    /// A pane moved from one position to another.
    Reordered { from: usize, to: usize },
    /// A pane was removed; its content was handed back or dropped.
    PaneRemoved { index: usize },
    /// Aggregate size hints advertised to the container changed.
    SizeHintChanged { preferred: Size<i32>, minimum: Size<i32> },
    /// Something visible changed without a geometry change.
    RepaintRequested,
}

/// Callback type for toolbox notifications.
pub type EventHandler = Box<dyn FnMut(&ToolBoxEvent)>;

/// Registered notification handlers.
#[derive(Default)]
pub struct EventHandlers {
    handlers: Vec<EventHandler>,
}

impl EventHandlers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, handler: EventHandler) {
        self.handlers.push(handler);
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    pub fn emit(&mut self, event: &ToolBoxEvent) {
        for handler in self.handlers.iter_mut() {
            handler(event);
        }
    }
}

impl std::fmt::Debug for EventHandlers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventHandlers")
            .field("len", &self.handlers.len())
            .finish()
    }
}
