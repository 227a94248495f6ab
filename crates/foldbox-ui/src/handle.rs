//! Splitter handle element: the draggable divider above a pane's title.
//!
//! The handle itself only hit-tests presses and tracks hover. Once pressed, the
//! toolbox's [`DragManager`](crate::drag::DragManager) owns the gesture and feeds the
//! pointer offset to the resize algorithm.

use foldbox_core::geometry::{Rect, Size};

use crate::element::{Element, ElementContext, ElementResponse};
use crate::event::{InputEvent, PointerButton};
use crate::paint::{HandleRenderState, ToolBoxPainter};
use crate::style::StyleMetrics;

#[derive(Debug, Clone, Default)]
pub struct SplitterHandle {
    visible: bool,
    geometry: Rect<i32>,
    hovered: bool,
    pressed: bool,
}

impl SplitterHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
        if !visible {
            self.hovered = false;
            self.pressed = false;
        }
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }
}

impl Element for SplitterHandle {
    fn measure(&mut self, style: &dyn StyleMetrics) -> Size<i32> {
        Size::new(0, style.handle_width())
    }

    fn geometry(&self) -> Rect<i32> {
        self.geometry
    }

    fn set_geometry(&mut self, rect: Rect<i32>) {
        self.geometry = rect;
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn handle_input(&mut self, event: &InputEvent, _ctx: &ElementContext) -> ElementResponse {
        if !self.visible {
            return ElementResponse::Ignored;
        }

        match *event {
            InputEvent::HoverEnter(pos) | InputEvent::HoverMove(pos) => {
                let hovered = self.geometry.contains(pos);
                if hovered != self.hovered {
                    self.hovered = hovered;
                    ElementResponse::Repaint
                } else {
                    ElementResponse::Ignored
                }
            }
            InputEvent::HoverLeave if self.hovered => {
                self.hovered = false;
                ElementResponse::Repaint
            }
            InputEvent::Press {
                pos,
                button: PointerButton::Primary,
            } if self.geometry.contains(pos) => {
                self.pressed = true;
                ElementResponse::ResizeStarted(pos)
            }
            _ => ElementResponse::Ignored,
        }
    }

    fn render(&self, ctx: &ElementContext, painter: &mut dyn ToolBoxPainter) {
        if self.visible {
            painter.draw_handle(&HandleRenderState {
                index: ctx.index,
                rect: self.geometry,
                hovered: self.hovered,
                pressed: self.pressed,
            });
        }
    }
}
