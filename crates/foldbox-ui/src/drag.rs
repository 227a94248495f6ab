//! Drag gestures: divider resizes and pane reordering.
//!
//! [`DragManager`] holds at most one gesture. Drop targets are resolved from the
//! committed geometry of the panes, so they always match what the user sees.

use foldbox_core::geometry::Rect;
use foldbox_core::math::{IVec2, manhattan_length};

use crate::pane::Pane;

/// What is being dragged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragKind {
    /// The divider above the pane at `index`.
    HandleResize { index: usize },
    /// The pane at `index`, picked up by its title.
    PaneMove { index: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragState {
    pub kind: DragKind,
    pub start_pos: IVec2,
    pub current_pos: IVec2,
}

impl DragState {
    fn new(kind: DragKind, start_pos: IVec2) -> Self {
        Self {
            kind,
            start_pos,
            current_pos: start_pos,
        }
    }

    /// Offset of the pointer from the press position.
    pub fn delta(&self) -> IVec2 {
        self.current_pos - self.start_pos
    }

    pub fn index(&self) -> usize {
        match self.kind {
            DragKind::HandleResize { index } | DragKind::PaneMove { index } => index,
        }
    }

    fn set_index(&mut self, new_index: usize) {
        match &mut self.kind {
            DragKind::HandleResize { index } | DragKind::PaneMove { index } => *index = new_index,
        }
    }
}

/// Where a dragged pane would land and the rubber band to show for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropPreview {
    pub target: usize,
    pub rect: Rect<i32>,
}

#[derive(Debug, Default)]
pub struct DragManager {
    drag_state: Option<DragState>,
    preview: Option<DropPreview>,
}

impl DragManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_handle_drag(&mut self, index: usize, start_pos: IVec2) {
        self.preview = None;
        self.drag_state = Some(DragState::new(DragKind::HandleResize { index }, start_pos));
    }

    pub fn start_pane_drag(&mut self, index: usize, start_pos: IVec2) {
        self.preview = None;
        self.drag_state = Some(DragState::new(DragKind::PaneMove { index }, start_pos));
    }

    /// Update the pointer position. Returns true if a drag is active.
    pub fn update(&mut self, pos: IVec2) -> bool {
        if let Some(state) = self.drag_state.as_mut() {
            state.current_pos = pos;
            true
        } else {
            false
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_state.is_some()
    }

    pub fn drag_state(&self) -> Option<&DragState> {
        self.drag_state.as_ref()
    }

    /// Index of the divider being dragged, if any.
    pub fn dragged_handle(&self) -> Option<usize> {
        match self.drag_state?.kind {
            DragKind::HandleResize { index } => Some(index),
            DragKind::PaneMove { .. } => None,
        }
    }

    /// Index of the pane being moved, if any.
    pub fn dragged_pane(&self) -> Option<usize> {
        match self.drag_state?.kind {
            DragKind::PaneMove { index } => Some(index),
            DragKind::HandleResize { .. } => None,
        }
    }

    pub fn preview(&self) -> Option<&DropPreview> {
        self.preview.as_ref()
    }

    pub fn set_preview(&mut self, preview: Option<DropPreview>) {
        self.preview = preview;
    }

    pub fn cancel_drag(&mut self) {
        self.drag_state = None;
        self.preview = None;
    }

    /// End the current drag and return its final state.
    pub fn end_drag(&mut self) -> Option<DragState> {
        self.preview = None;
        self.drag_state.take()
    }

    /// Keep the gesture consistent with a pane that was just removed.
    ///
    /// A drag on the removed pane is cancelled; drags on later panes shift down.
    pub fn pane_removed(&mut self, removed: usize) {
        let Some(state) = self.drag_state.as_mut() else {
            return;
        };
        let index = state.index();
        if index == removed {
            tracing::debug!(index, "drag cancelled, its pane was removed");
            self.cancel_drag();
        } else if index > removed {
            state.set_index(index - 1);
            self.preview = None;
        }
    }

    /// Shift the gesture past a pane inserted at `inserted`.
    pub fn pane_inserted(&mut self, inserted: usize) {
        if let Some(state) = self.drag_state.as_mut() {
            let index = state.index();
            if index >= inserted {
                state.set_index(index + 1);
                self.preview = None;
            }
        }
    }

    /// Follow the dragged pane through a move of the pane at `from` to `to`.
    pub fn pane_moved(&mut self, from: usize, to: usize) {
        let Some(state) = self.drag_state.as_mut() else {
            return;
        };
        let index = state.index();
        let moved = if index == from {
            to
        } else if from < index && index <= to {
            index - 1
        } else if to <= index && index < from {
            index + 1
        } else {
            index
        };
        if moved != index {
            state.set_index(moved);
            self.preview = None;
        }
    }

    /// Whether `current` is far enough from `start` to count as a drag.
    pub fn exceeds_threshold(start: IVec2, current: IVec2, distance: i32) -> bool {
        manhattan_length(current - start) > distance
    }
}

/// Pane the pointer is over, and whether it is in the lower half of it.
fn hovered_pane(panes: &[Pane], y: i32) -> Option<(usize, bool)> {
    panes.iter().enumerate().filter(|(_, p)| p.visible).find_map(|(i, pane)| {
        let title = pane.title_rect();
        if pane.expanded {
            let container = pane.container;
            (container.bottom() >= y).then(|| {
                let mid = (title.top() + container.bottom() + 1) / 2;
                (i, mid < y)
            })
        } else {
            (title.bottom() >= y).then(|| (i, title.center_y() < y))
        }
    })
}

/// Map a pointer y-coordinate to the index `source` would occupy after the move.
///
/// Returns `None` when the pointer is below every pane or the move would be a no-op.
pub fn resolve_drop_target(panes: &[Pane], source: usize, y: i32) -> Option<usize> {
    if source >= panes.len() {
        return None;
    }
    let (hovered, after) = hovered_pane(panes, y)?;
    let mut target = hovered + usize::from(after);
    if target > source {
        target -= 1;
    }
    (target != source).then_some(target)
}

/// Drop target plus the rubber band rectangle to show while hovering at `y`.
///
/// Expanded panes highlight the half of title plus content the pointer is in.
/// Collapsed panes highlight a handle-thick strip above or below the title.
pub fn drop_preview(
    panes: &[Pane],
    source: usize,
    y: i32,
    handle_width: i32,
    grab_margin: i32,
) -> Option<DropPreview> {
    let target = resolve_drop_target(panes, source, y)?;
    let (hovered, after) = hovered_pane(panes, y)?;
    let pane = &panes[hovered];
    let title = pane.title_rect();

    let rect = if pane.expanded {
        let container = pane.container;
        let mid = (title.top() + container.bottom() + 1) / 2;
        let (top, bottom) = if after {
            (mid, container.bottom())
        } else {
            (title.top(), mid)
        };
        Rect::new(title.x, top, title.width, bottom - top + 1)
    } else {
        let top = if after {
            title.bottom() + 1
        } else {
            title.top() - handle_width
        };
        let strip = Rect::new(title.x, top, title.width, handle_width);
        if handle_width <= 1 {
            strip.adjusted(0, -grab_margin, 0, grab_margin)
        } else {
            strip
        }
    };

    Some(DropPreview { target, rect })
}
