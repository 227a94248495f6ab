//! Title bar element: label, icon, branch indicator and expand/collapse click target.

use foldbox_core::geometry::{Rect, Size};
use foldbox_core::math::{IVec2, manhattan_length};

use crate::element::{Element, ElementContext, ElementResponse};
use crate::event::{InputEvent, PointerButton};
use crate::paint::{TitleRenderState, ToolBoxPainter};
use crate::style::{StyleMetrics, TitleState};

/// Gap between the icon and the label.
const ICON_SPACING: i32 = 4;

/// Opaque icon handle; the painter decides what the name refers to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Icon(String);

impl Icon {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone)]
pub struct TitleBar {
    label: String,
    icon: Option<Icon>,
    expanded: bool,
    visible: bool,
    geometry: Rect<i32>,
    hovered: bool,
    hover_branch: bool,
    pressed: bool,
    down: bool,
    press_pos: IVec2,
    icon_size: Size<i32>,
    /// Memoized size hint, cleared by [`TitleBar::invalidate`].
    size_hint: Option<Size<i32>>,
}

impl TitleBar {
    pub fn new(label: impl Into<String>, icon: Option<Icon>) -> Self {
        Self {
            label: label.into(),
            icon,
            expanded: true,
            visible: true,
            geometry: Rect::default(),
            hovered: false,
            hover_branch: false,
            pressed: false,
            down: false,
            press_pos: IVec2::ZERO,
            icon_size: Size::new(16, 16),
            size_hint: None,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
        self.invalidate();
    }

    pub fn icon(&self) -> Option<&Icon> {
        self.icon.as_ref()
    }

    pub fn set_icon(&mut self, icon: Option<Icon>) {
        self.icon = icon;
        self.invalidate();
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Returns true if the state changed.
    pub fn set_expanded(&mut self, expanded: bool) -> bool {
        let changed = self.expanded != expanded;
        self.expanded = expanded;
        changed
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
        if !visible {
            self.clear_pointer_state();
        }
    }

    /// Drop the cached size hint; the next [`Element::measure`] recomputes it.
    pub fn invalidate(&mut self) {
        self.size_hint = None;
    }

    /// Height from the last measurement, 0 if never measured.
    pub fn height(&self) -> i32 {
        self.size_hint.map_or(0, |s| s.height)
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn is_branch_hovered(&self) -> bool {
        self.hover_branch
    }

    pub fn is_down(&self) -> bool {
        self.down
    }

    pub fn clear_pointer_state(&mut self) {
        self.hovered = false;
        self.hover_branch = false;
        self.pressed = false;
        self.down = false;
    }

    pub fn state(&self, enabled: bool) -> TitleState {
        let mut state = TitleState::empty();
        state.set(TitleState::OPEN, self.expanded);
        state.set(TitleState::SUNKEN, self.down);
        state.set(TitleState::HOVER, self.hovered);
        state.set(TitleState::BRANCH_HOVER, self.hover_branch);
        state.set(TitleState::ENABLED, enabled);
        state.set(TitleState::HAS_ICON, self.icon.is_some());
        state
    }

    fn branch_rect(&self, indentation: i32) -> Rect<i32> {
        Rect::new(self.geometry.x, self.geometry.y, indentation, self.geometry.height)
    }

    fn update_hover(&mut self, pos: IVec2, indentation: i32) -> ElementResponse {
        let hovered = self.geometry.contains(pos);
        let branch = hovered && self.branch_rect(indentation).contains(pos);
        if hovered != self.hovered || branch != self.hover_branch {
            self.hovered = hovered;
            self.hover_branch = branch;
            ElementResponse::Repaint
        } else {
            ElementResponse::Ignored
        }
    }

    pub fn render_state(&self, ctx: &ElementContext) -> TitleRenderState<'_> {
        let rect = self.geometry;
        let indent = ctx.indentation;
        let branch_rect = (indent > 0).then(|| self.branch_rect(indent));

        let mut content = rect.adjusted(indent, 0, 0, 0);
        let icon_rect = self.icon.as_ref().map(|_| {
            let icon = Rect::new(content.x + 2, content.y, self.icon_size.width + 2, content.height);
            content = content.adjusted(self.icon_size.width + ICON_SPACING, 0, 0, 0);
            icon
        });

        TitleRenderState {
            index: ctx.index,
            rect,
            branch_rect,
            icon_rect,
            text_rect: content,
            label: &self.label,
            icon: self.icon.as_ref(),
            state: self.state(ctx.enabled),
        }
    }
}

impl Element for TitleBar {
    fn measure(&mut self, style: &dyn StyleMetrics) -> Size<i32> {
        if let Some(hint) = self.size_hint {
            return hint;
        }

        self.icon_size = style.icon_size();
        let padding = style.title_padding();
        let icon = if self.icon.is_some() {
            self.icon_size
        } else {
            Size::new(0, 0)
        };
        let text = style.text_size(&self.label);

        let mut width = padding.width + icon.width + text.width;
        if self.icon.is_some() {
            width += ICON_SPACING;
        }
        let height = padding.height + text.height.max(icon.height);

        let hint = Size::new(width, height);
        self.size_hint = Some(hint);
        hint
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

    fn handle_input(&mut self, event: &InputEvent, ctx: &ElementContext) -> ElementResponse {
        if !self.visible {
            return ElementResponse::Ignored;
        }

        match *event {
            InputEvent::HoverEnter(pos) | InputEvent::HoverMove(pos) => {
                self.update_hover(pos, ctx.indentation)
            }
            InputEvent::HoverLeave => {
                if self.hovered || self.hover_branch {
                    self.hovered = false;
                    self.hover_branch = false;
                    ElementResponse::Repaint
                } else {
                    ElementResponse::Ignored
                }
            }
            InputEvent::Press { pos, button } if self.geometry.contains(pos) => match button {
                PointerButton::Primary => {
                    self.pressed = true;
                    self.down = true;
                    self.press_pos = pos;
                    ElementResponse::Repaint
                }
                PointerButton::Secondary => ElementResponse::ContextMenu(pos),
                PointerButton::Middle => ElementResponse::Ignored,
            },
            InputEvent::Move(pos) if self.pressed => {
                if manhattan_length(pos - self.press_pos) > ctx.drag_distance {
                    self.pressed = false;
                    self.down = false;
                    ElementResponse::DragStarted(self.press_pos)
                } else {
                    self.down = self.geometry.contains(pos);
                    ElementResponse::Ignored
                }
            }
            InputEvent::Release {
                pos,
                button: PointerButton::Primary,
            } if self.pressed => {
                self.pressed = false;
                let was_down = self.down;
                self.down = false;
                if was_down && self.geometry.contains(pos) {
                    ElementResponse::Clicked
                } else {
                    ElementResponse::Repaint
                }
            }
            _ => ElementResponse::Ignored,
        }
    }

    fn render(&self, ctx: &ElementContext, painter: &mut dyn ToolBoxPainter) {
        if self.visible {
            painter.draw_title(&self.render_state(ctx));
        }
    }
}
