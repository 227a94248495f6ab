//! Painting collaborator interface.
//!
//! The toolbox computes where everything goes; the host draws it. [`ToolBox::paint`]
//! walks the visible panes top to bottom and calls the painter once per title and once
//! per visible handle.
//!
//! [`ToolBox::paint`]: crate::ToolBox::paint

use foldbox_core::geometry::Rect;

use crate::style::TitleState;
use crate::title::Icon;

/// Everything needed to draw one title bar.
#[derive(Debug, Clone, PartialEq)]
pub struct TitleRenderState<'a> {
    pub index: usize,
    /// Full title rectangle.
    pub rect: Rect<i32>,
    /// Branch indicator area, present when the indentation is positive.
    pub branch_rect: Option<Rect<i32>>,
    pub icon_rect: Option<Rect<i32>>,
    pub text_rect: Rect<i32>,
    pub label: &'a str,
    pub icon: Option<&'a Icon>,
    pub state: TitleState,
}

/// A divider between two visible panes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandleRenderState {
    /// Index of the pane below the handle.
    pub index: usize,
    pub rect: Rect<i32>,
    pub hovered: bool,
    pub pressed: bool,
}

pub trait ToolBoxPainter {
    fn draw_title(&mut self, state: &TitleRenderState<'_>);

    fn draw_handle(&mut self, state: &HandleRenderState);
}

/// A recorded paint call.
#[derive(Debug, Clone, PartialEq)]
pub enum PaintCommand {
    Title {
        index: usize,
        rect: Rect<i32>,
        branch_rect: Option<Rect<i32>>,
        label: String,
        state: TitleState,
    },
    Handle(HandleRenderState),
}

/// Painter that records commands instead of drawing, for headless hosts and tests.
#[derive(Debug, Default)]
pub struct PaintRecorder {
    pub commands: Vec<PaintCommand>,
}

impl PaintRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn titles(&self) -> impl Iterator<Item = &PaintCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, PaintCommand::Title { .. }))
    }

    pub fn handles(&self) -> impl Iterator<Item = &HandleRenderState> {
        self.commands.iter().filter_map(|c| match c {
            PaintCommand::Handle(state) => Some(state),
            _ => None,
        })
    }
}

impl ToolBoxPainter for PaintRecorder {
    fn draw_title(&mut self, state: &TitleRenderState<'_>) {
        self.commands.push(PaintCommand::Title {
            index: state.index,
            rect: state.rect,
            branch_rect: state.branch_rect,
            label: state.label.to_string(),
            state: state.state,
        });
    }

    fn draw_handle(&mut self, state: &HandleRenderState) {
        self.commands.push(PaintCommand::Handle(*state));
    }
}
