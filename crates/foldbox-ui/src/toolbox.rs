//! The toolbox itself: a vertical stack of collapsible, resizable panes.
//!
//! [`ToolBox`] owns the panes and routes every host notification (resize, style
//! change, pointer input, frame ticks) into the layout algorithms, then commits the
//! resulting geometry. Panes are addressed by index; invalid indices are ignored.

use foldbox_core::geometry::{Rect, Size};
use foldbox_core::math::IVec2;

use crate::commit::{CommitParams, GeometryCommitter, PaneGeometry, reset_pages};
use crate::config::ToolBoxConfig;
use crate::content::{ContentId, PaneContent};
use crate::drag::{self, DragManager, DropPreview};
use crate::element::{Element, ElementContext, ElementResponse};
use crate::error::{ToolBoxError, ToolBoxResult};
use crate::event::{EventHandler, EventHandlers, InputEvent, PointerButton, ToolBoxEvent};
use crate::handle::SplitterHandle;
use crate::layout;
use crate::menu::{MenuAction, PaneMenu};
use crate::paint::ToolBoxPainter;
use crate::pane::{Pane, PaneId, bank_manual_heights};
use crate::resize;
use crate::style::{DefaultStyle, Indentation, StyleMetrics};
use crate::title::{Icon, TitleBar};
use crate::transition;

/// Elements of a removed pane, kept until the host reaches a safe point.
#[derive(Debug)]
struct RetiredChrome {
    title: TitleBar,
    handle: SplitterHandle,
}

/// A vertical stack of collapsible, resizable, reorderable panes.
///
/// # Example
///
/// ```
/// use foldbox_ui::{FixedContent, SizeHints, ToolBox, ToolBoxConfig};
///
/// let mut toolbox = ToolBox::new(ToolBoxConfig::default());
/// toolbox.resize(200, 600);
/// toolbox.add_pane(FixedContent::new("layers", SizeHints::new(180, 50, 1000)), "Layers", None);
/// toolbox.add_pane(FixedContent::new("history", SizeHints::new(180, 50, 1000)), "History", None);
///
/// assert_eq!(toolbox.len(), 2);
/// assert!(toolbox.box_spacing() >= 0);
/// ```
pub struct ToolBox {
    config: ToolBoxConfig,
    style: Box<dyn StyleMetrics>,
    panes: Vec<Pane>,
    next_id: u64,

    size: Size<i32>,
    handle_width: i32,
    indentation: Indentation,
    resolved_indentation: i32,
    shown: bool,
    enabled: bool,

    committer: GeometryCommitter,
    drag: DragManager,
    handlers: EventHandlers,
    pending_disposal: Vec<RetiredChrome>,

    size_hint: Size<i32>,
    minimum_size_hint: Size<i32>,
}

impl ToolBox {
    /// Create an empty toolbox using [`DefaultStyle`] metrics.
    pub fn new(config: ToolBoxConfig) -> Self {
        Self::with_style(config, DefaultStyle::default())
    }

    /// Create an empty toolbox, rejecting an inconsistent configuration.
    pub fn try_new(config: ToolBoxConfig) -> ToolBoxResult<Self> {
        config.validate()?;
        Ok(Self::new(config))
    }

    pub fn with_style(config: ToolBoxConfig, style: impl StyleMetrics + 'static) -> Self {
        let style: Box<dyn StyleMetrics> = Box::new(style);
        let handle_width = resolve_handle_width(&config, style.as_ref());
        let indentation = Indentation::StyleDefault;
        let resolved_indentation = indentation.resolve(style.as_ref());
        Self {
            config,
            style,
            panes: Vec::new(),
            next_id: 0,
            size: Size::default(),
            handle_width,
            indentation,
            resolved_indentation,
            shown: true,
            enabled: true,
            committer: GeometryCommitter::new(),
            drag: DragManager::new(),
            handlers: EventHandlers::new(),
            pending_disposal: Vec::new(),
            size_hint: Size::default(),
            minimum_size_hint: Size::default(),
        }
    }

    pub fn config(&self) -> &ToolBoxConfig {
        &self.config
    }

    // ---- Pane management --------------------------------------------------------

    /// Append a pane. Returns its index.
    pub fn add_pane(
        &mut self,
        content: impl PaneContent + 'static,
        label: impl Into<String>,
        icon: Option<Icon>,
    ) -> usize {
        self.insert_pane(self.panes.len(), content, label, icon)
    }

    /// Insert a pane at `index`; an out-of-range index appends.
    ///
    /// Content that is already in the toolbox is moved to `index` instead and the
    /// duplicate passed in is dropped. Returns the pane's final index.
    pub fn insert_pane(
        &mut self,
        index: usize,
        content: impl PaneContent + 'static,
        label: impl Into<String>,
        icon: Option<Icon>,
    ) -> usize {
        let len = self.panes.len();
        let index = index.min(len);

        if let Some(existing) = self.index_of(content.id()) {
            let target = index.min(len - 1);
            if target != existing {
                tracing::debug!(from = existing, to = target, "content already present, moving pane");
                self.drag.cancel_drag();
                let pane = self.panes.remove(existing);
                self.panes.insert(target, pane);
                reset_pages(&mut self.panes);
                self.commit(false);
                self.emit(ToolBoxEvent::Reordered {
                    from: existing,
                    to: target,
                });
            }
            return target;
        }

        let id = PaneId(self.next_id);
        self.next_id += 1;

        let hidden = content.explicitly_hidden();
        let mut pane = Pane::new(id, Box::new(content), label, icon);
        pane.visible = !hidden;
        pane.refresh_size_hints(&self.config);
        pane.title.measure(self.style.as_ref());

        tracing::debug!(index, label = pane.label(), hidden, "inserting pane");
        self.panes.insert(index, pane);
        self.drag.pane_inserted(index);
        self.do_layout();
        index
    }

    /// Remove the pane at `index` and hand its content back.
    ///
    /// The pane's title and handle are queued for disposal until the next
    /// [`process_pending`](Self::process_pending) or [`tick`](Self::tick).
    pub fn remove_pane(&mut self, index: usize) -> Option<Box<dyn PaneContent>> {
        if index >= self.panes.len() {
            return None;
        }

        let pane = self.panes.remove(index);
        self.committer.forget(pane.id);
        self.drag.pane_removed(index);

        let Pane {
            mut content,
            title,
            handle,
            ..
        } = pane;
        content.set_visible(false);
        self.pending_disposal.push(RetiredChrome { title, handle });

        tracing::debug!(index, remaining = self.panes.len(), "pane removed");
        self.do_layout();
        self.emit(ToolBoxEvent::PaneRemoved { index });
        Some(content)
    }

    /// The content with `id` was destroyed by its owner; drop its pane.
    pub fn content_destroyed(&mut self, id: ContentId) -> bool {
        match self.index_of(id) {
            Some(index) => self.remove_pane(index).is_some(),
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.panes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panes.is_empty()
    }

    pub fn index_of(&self, id: ContentId) -> Option<usize> {
        self.panes.iter().position(|p| p.content_id() == id)
    }

    pub fn pane(&self, index: usize) -> Option<&Pane> {
        self.panes.get(index)
    }

    pub fn content(&self, index: usize) -> Option<&dyn PaneContent> {
        self.panes.get(index).map(|p| p.content.as_ref())
    }

    pub fn content_mut(&mut self, index: usize) -> Option<&mut (dyn PaneContent + 'static)> {
        self.panes.get_mut(index).map(|p| p.content.as_mut())
    }

    /// Downcast the content at `index` to its concrete type.
    pub fn content_as<T: 'static>(&self, index: usize) -> Option<&T> {
        self.content(index)?.as_any().downcast_ref::<T>()
    }

    // ---- Pane state -------------------------------------------------------------

    pub fn is_expanded(&self, index: usize) -> bool {
        self.panes.get(index).is_some_and(|p| p.expanded)
    }

    /// Expand or collapse a pane, animating the transition when enabled.
    pub fn set_expanded(&mut self, index: usize, expanded: bool) {
        let Some(pane) = self.panes.get_mut(index) else {
            return;
        };
        if pane.expanded == expanded {
            return;
        }
        pane.expanded = expanded;
        pane.title.set_expanded(expanded);

        if !pane.visible {
            tracing::debug!(index, expanded, "hidden pane changed expand state");
            self.emit(ToolBoxEvent::RepaintRequested);
            return;
        }

        transition::expand_state_changed(
            &mut self.panes,
            index,
            expanded,
            self.committer.box_spacing(),
        );
        self.panes[index].freeze_target = true;
        self.commit(self.config.animate_transitions);
        bank_manual_heights(&mut self.panes);
        self.update_size_hints();
    }

    pub fn is_visible(&self, index: usize) -> bool {
        self.panes.get(index).is_some_and(|p| p.visible)
    }

    /// Show or hide a pane and lay the stack out again.
    pub fn set_visible(&mut self, index: usize, visible: bool) {
        let Some(pane) = self.panes.get_mut(index) else {
            return;
        };
        if pane.visible == visible {
            return;
        }

        if visible {
            bank_manual_heights(&mut self.panes);
            self.panes[index].visible = true;
        } else {
            if pane.expanded {
                pane.manual_height = pane.layout_height;
            }
            pane.visible = false;
            if self.drag.drag_state().is_some_and(|s| s.index() == index) {
                self.drag.cancel_drag();
            }
        }

        tracing::debug!(index, visible, "pane visibility changed");
        self.do_layout();
    }

    pub fn label(&self, index: usize) -> Option<&str> {
        self.panes.get(index).map(|p| p.label())
    }

    pub fn set_label(&mut self, index: usize, label: impl Into<String>) {
        if let Some(pane) = self.panes.get_mut(index) {
            pane.title.set_label(label);
            self.title_changed(index);
        }
    }

    pub fn icon(&self, index: usize) -> Option<&Icon> {
        self.panes.get(index).and_then(|p| p.icon())
    }

    pub fn set_icon(&mut self, index: usize, icon: Option<Icon>) {
        if let Some(pane) = self.panes.get_mut(index) {
            pane.title.set_icon(icon);
            self.title_changed(index);
        }
    }

    fn title_changed(&mut self, index: usize) {
        let pane = &mut self.panes[index];
        let before = pane.title.geometry().height;
        let height = pane.title.measure(self.style.as_ref()).height;
        if pane.visible && height != before {
            self.do_layout();
        } else {
            self.update_size_hints();
        }
        self.emit(ToolBoxEvent::RepaintRequested);
    }

    pub fn text_indentation(&self) -> i32 {
        self.resolved_indentation
    }

    /// Set the branch indicator width. Negative values restore the style default.
    pub fn set_text_indentation(&mut self, indentation: impl Into<Indentation>) {
        self.indentation = indentation.into();
        let resolved = self.indentation.resolve(self.style.as_ref());
        if resolved != self.resolved_indentation {
            self.resolved_indentation = resolved;
            self.emit(ToolBoxEvent::RepaintRequested);
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// A disabled toolbox ignores pointer input; disabling drops any gesture in progress.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled == enabled {
            return;
        }
        self.enabled = enabled;
        if !enabled {
            if let Some(index) = self.drag.dragged_handle() {
                if let Some(pane) = self.panes.get_mut(index) {
                    pane.handle.set_pressed(false);
                }
                bank_manual_heights(&mut self.panes);
            }
            self.drag.cancel_drag();
            for pane in self.panes.iter_mut() {
                pane.title.clear_pointer_state();
            }
        }
        self.emit(ToolBoxEvent::RepaintRequested);
    }

    // ---- Host notifications -----------------------------------------------------

    /// The container was resized.
    pub fn resize(&mut self, width: i32, height: i32) {
        self.size = Size::new(width.max(0), height.max(0));
        self.do_layout();
    }

    pub fn size(&self) -> Size<i32> {
        self.size
    }

    /// The host style changed.
    pub fn style_changed(&mut self, style: impl StyleMetrics + 'static) {
        self.style = Box::new(style);
        let old_handle_width = self.handle_width;
        self.handle_width = resolve_handle_width(&self.config, self.style.as_ref());
        self.resolved_indentation = self.indentation.resolve(self.style.as_ref());

        let mut titles_changed = false;
        for pane in self.panes.iter_mut() {
            let before = pane.title.height();
            pane.title.invalidate();
            titles_changed |= pane.title.measure(self.style.as_ref()).height != before;
        }

        if old_handle_width != self.handle_width || titles_changed {
            tracing::debug!(
                old_handle_width,
                handle_width = self.handle_width,
                titles_changed,
                "style change requires relayout"
            );
            self.do_layout();
        }
        self.emit(ToolBoxEvent::RepaintRequested);
    }

    /// Contents changed their size hints.
    pub fn layout_request(&mut self) {
        for pane in self.panes.iter_mut() {
            pane.refresh_size_hints(&self.config);
        }
        self.do_layout();
    }

    /// Whether the toolbox itself is on screen. Transitions only animate while shown.
    pub fn set_shown(&mut self, shown: bool) {
        self.shown = shown;
    }

    pub fn is_shown(&self) -> bool {
        self.shown
    }

    // ---- Context menu -----------------------------------------------------------

    /// `(label, visible)` for every pane.
    pub fn list_panes(&self) -> Vec<(String, bool)> {
        self.panes
            .iter()
            .map(|p| (p.label().to_string(), p.visible))
            .collect()
    }

    /// Menu model for a context menu opened on `index` at `anchor`.
    pub fn pane_menu(&self, index: Option<usize>, anchor: IVec2) -> PaneMenu {
        PaneMenu::build(&self.panes, index, anchor)
    }

    /// Apply a menu choice. Returns false for disabled entries.
    pub fn apply_menu_action(&mut self, menu: &PaneMenu, action: MenuAction) -> bool {
        match menu.resolve(action) {
            Some((index, visible)) => {
                self.set_visible(index, visible);
                true
            }
            None => false,
        }
    }

    // ---- Reordering -------------------------------------------------------------

    /// Start moving the pane at `index`.
    pub fn begin_drag(&mut self, index: usize, origin: IVec2) -> bool {
        if !self.is_visible(index) {
            return false;
        }
        self.drag.start_pane_drag(index, origin);
        tracing::debug!(index, ?origin, "pane drag started");
        self.emit(ToolBoxEvent::DragStarted { index, origin });
        true
    }

    /// Pointer moved over the toolbox during a pane drag.
    pub fn drag_over(&mut self, pointer_y: i32) -> Option<DropPreview> {
        let source = self.drag.dragged_pane()?;
        let preview = drag::drop_preview(
            &self.panes,
            source,
            pointer_y,
            self.handle_width,
            self.config.hairline_grab_margin,
        );
        self.drag.set_preview(preview);
        preview
    }

    /// Pointer left the toolbox during a pane drag.
    pub fn drag_leave(&mut self) {
        self.drag.set_preview(None);
    }

    pub fn drop_preview(&self) -> Option<&DropPreview> {
        self.drag.preview()
    }

    /// Index the dragged pane would move to if dropped at `pointer_y`.
    pub fn resolve_drop_target(&self, pointer_y: i32) -> Option<usize> {
        let source = self.drag.dragged_pane()?;
        drag::resolve_drop_target(&self.panes, source, pointer_y)
    }

    /// Finish a pane drag at `pointer_y`. Returns the pane's new index.
    pub fn drop_at(&mut self, pointer_y: i32) -> Option<usize> {
        let target = self.resolve_drop_target(pointer_y);
        let state = self.drag.end_drag()?;
        let target = target?;
        self.commit_reorder(state.index(), target).ok()?;
        Some(target)
    }

    pub fn cancel_drag(&mut self) {
        self.drag.cancel_drag();
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Move the pane at `from` so that it ends up at index `to`.
    pub fn commit_reorder(&mut self, from: usize, to: usize) -> ToolBoxResult<()> {
        let len = self.panes.len();
        for index in [from, to] {
            if index >= len {
                return Err(ToolBoxError::IndexOutOfRange { index, len });
            }
        }
        if from == to {
            return Err(ToolBoxError::SameIndex(from));
        }

        if self.drag.dragged_handle().is_some() {
            self.drag.cancel_drag();
        }
        self.drag.pane_moved(from, to);
        let pane = self.panes.remove(from);
        self.panes.insert(to, pane);

        tracing::debug!(from, to, "panes reordered");
        self.do_layout();
        self.emit(ToolBoxEvent::Reordered { from, to });
        Ok(())
    }

    // ---- Divider drags ----------------------------------------------------------

    /// Press on the handle above the pane at `index`.
    pub fn handle_press(&mut self, index: usize, pos: IVec2) -> bool {
        let Some(pane) = self.panes.get_mut(index) else {
            return false;
        };
        if !pane.handle.is_visible() {
            return false;
        }
        pane.handle.set_pressed(true);
        bank_manual_heights(&mut self.panes);
        self.drag.start_handle_drag(index, pos);
        true
    }

    /// Pointer moved while a handle is pressed.
    ///
    /// Moving the pointer down grows the panes above the divider.
    pub fn handle_move(&mut self, pos: IVec2) -> bool {
        let Some(index) = self.drag.dragged_handle() else {
            return false;
        };
        self.drag.update(pos);
        let offset = self.drag.drag_state().map_or(0, |s| s.delta().y);
        resize::move_handle(&mut self.panes, index, -offset);
        self.commit(false);
        true
    }

    pub fn handle_release(&mut self, pos: IVec2) -> bool {
        if self.drag.dragged_handle().is_none() {
            return false;
        }
        self.handle_move(pos);
        if let Some(state) = self.drag.end_drag()
            && let Some(pane) = self.panes.get_mut(state.index())
        {
            pane.handle.set_pressed(false);
        }
        bank_manual_heights(&mut self.panes);
        self.update_size_hints();
        true
    }

    // ---- Input ------------------------------------------------------------------

    /// Feed a pointer event in toolbox coordinates. Ignored while disabled.
    pub fn input(&mut self, event: InputEvent) {
        if !self.enabled {
            return;
        }
        if self.drag.dragged_handle().is_some() {
            match event {
                InputEvent::Move(pos) => {
                    self.handle_move(pos);
                }
                InputEvent::Release {
                    pos,
                    button: PointerButton::Primary,
                } => {
                    self.handle_release(pos);
                }
                _ => {}
            }
            return;
        }

        if self.drag.dragged_pane().is_some() {
            match event {
                InputEvent::Move(pos) => {
                    self.drag.update(pos);
                    self.drag_over(pos.y);
                }
                InputEvent::Release {
                    pos,
                    button: PointerButton::Primary,
                } => {
                    self.drop_at(pos.y);
                }
                InputEvent::HoverLeave => self.drag_leave(),
                _ => {}
            }
            return;
        }

        let mut responses = Vec::new();
        let mut press_taken = false;
        for (index, pane) in self.panes.iter_mut().enumerate() {
            if !pane.visible {
                continue;
            }
            let ctx = ElementContext {
                index,
                indentation: self.resolved_indentation,
                drag_distance: self.config.drag_distance,
                enabled: self.enabled,
            };

            // A press lands on at most one element; handles win over titles.
            let is_press = matches!(event, InputEvent::Press { .. });
            if is_press && press_taken {
                continue;
            }
            let handle = pane.handle.handle_input(&event, &ctx);
            if is_press && handle != ElementResponse::Ignored {
                press_taken = true;
                responses.push((index, handle));
                continue;
            }
            let title = pane.title.handle_input(&event, &ctx);
            if is_press && title != ElementResponse::Ignored {
                press_taken = true;
            }
            responses.push((index, handle));
            responses.push((index, title));
        }

        let mut repaint = false;
        for (index, response) in responses {
            match response {
                ElementResponse::Ignored => {}
                ElementResponse::Repaint => repaint = true,
                ElementResponse::Clicked => {
                    let expanded = !self.is_expanded(index);
                    self.set_expanded(index, expanded);
                    self.emit(ToolBoxEvent::TitleClicked { index });
                    repaint = true;
                }
                ElementResponse::ContextMenu(position) => {
                    self.emit(ToolBoxEvent::ContextMenuRequested { index, position });
                }
                ElementResponse::DragStarted(origin) => {
                    self.begin_drag(index, origin);
                    repaint = true;
                }
                ElementResponse::ResizeStarted(pos) => {
                    self.handle_press(index, pos);
                }
            }
        }
        if repaint {
            self.emit(ToolBoxEvent::RepaintRequested);
        }
    }

    /// Register a notification handler.
    pub fn on_event(&mut self, handler: impl FnMut(&ToolBoxEvent) + 'static) {
        let handler: EventHandler = Box::new(handler);
        self.handlers.register(handler);
    }

    fn emit(&mut self, event: ToolBoxEvent) {
        tracing::trace!(?event, "toolbox event");
        self.handlers.emit(&event);
    }

    // ---- Frame loop -------------------------------------------------------------

    /// Advance animations by `delta_time` seconds and drain pending disposals.
    ///
    /// Returns true if any geometry changed.
    pub fn tick(&mut self, delta_time: f32) -> bool {
        self.process_pending();
        let params = self.commit_params();
        let moved = self.committer.advance(&mut self.panes, &params, delta_time);
        if moved && !self.committer.is_animating() {
            self.update_size_hints();
        }
        moved
    }

    /// Drop the title and handle elements of removed panes. Call this from a point
    /// where no element callback is on the stack; [`tick`](Self::tick) does.
    ///
    /// Returns how many panes' elements were dropped.
    pub fn process_pending(&mut self) -> usize {
        let count = self.pending_disposal.len();
        for chrome in self.pending_disposal.drain(..) {
            tracing::trace!(
                label = chrome.title.label(),
                handle_pressed = chrome.handle.is_pressed(),
                "dropping retired pane elements"
            );
        }
        count
    }

    pub fn pending_disposal_count(&self) -> usize {
        self.pending_disposal.len()
    }

    pub fn is_animating(&self) -> bool {
        self.committer.is_animating()
    }

    /// Draw every visible title and handle, top to bottom.
    pub fn paint(&self, painter: &mut dyn ToolBoxPainter) {
        for (index, pane) in self.panes.iter().enumerate().filter(|(_, p)| p.visible) {
            let ctx = ElementContext {
                index,
                indentation: self.resolved_indentation,
                drag_distance: self.config.drag_distance,
                enabled: self.enabled,
            };
            pane.handle.render(&ctx, painter);
            pane.title.render(&ctx, painter);
        }
    }

    // ---- Queries ----------------------------------------------------------------

    /// Unused height below the last pane. Negative when the stack overflows.
    pub fn box_spacing(&self) -> i32 {
        self.committer.box_spacing()
    }

    /// Height of the stacked titles, handles and containers.
    pub fn contents_height(&self) -> i32 {
        self.committer.contents_height()
    }

    pub fn handle_width(&self) -> i32 {
        self.handle_width
    }

    pub fn layout_height(&self, index: usize) -> Option<i32> {
        self.panes.get(index).map(|p| p.layout_height)
    }

    pub fn manual_height(&self, index: usize) -> Option<i32> {
        self.panes.get(index).map(|p| p.manual_height)
    }

    pub fn pane_geometry(&self, index: usize) -> Option<PaneGeometry> {
        self.panes.get(index).map(PaneGeometry::of)
    }

    /// Preferred size of the whole stack.
    pub fn size_hint(&self) -> Size<i32> {
        self.size_hint
    }

    /// Smallest size that fits every visible title and expanded pane minimum.
    pub fn minimum_size_hint(&self) -> Size<i32> {
        self.minimum_size_hint
    }

    // ---- Internals --------------------------------------------------------------

    fn commit_params(&self) -> CommitParams {
        CommitParams {
            area: Rect::new(0, 0, self.size.width, self.size.height),
            handle_width: self.handle_width,
            grab_margin: self.config.hairline_grab_margin,
            duration: self.config.animation_duration,
            easing: self.config.easing,
        }
    }

    fn do_layout(&mut self) {
        reset_pages(&mut self.panes);
        let outcome = layout::negotiate(&mut self.panes, self.size.height, self.handle_width);
        tracing::debug!(
            panes = self.panes.len(),
            visible = outcome.visible_count,
            space = outcome.space,
            unapplied = outcome.unapplied,
            "layout pass"
        );
        self.commit(false);
    }

    fn commit(&mut self, animate: bool) {
        let params = self.commit_params();
        let animate = animate && self.shown;
        self.committer.commit(&mut self.panes, &params, animate);
        self.update_size_hints();
    }

    fn update_size_hints(&mut self) {
        let mut width = 0;
        let mut preferred = 0;
        let mut minimum = 0;
        let mut visible = 0;
        for pane in self.panes.iter_mut().filter(|p| p.visible) {
            let title = pane.title.measure(self.style.as_ref());
            width = width.max(title.width);
            preferred += title.height;
            minimum += title.height;
            if pane.expanded {
                preferred += pane.prefer_height();
                minimum += pane.min_height.min(pane.max_height);
            }
            visible += 1;
        }
        if visible > 1 {
            let gaps = self.handle_width * (visible - 1);
            preferred += gaps;
            minimum += gaps;
        }

        let size_hint = Size::new(width, preferred);
        let minimum_size_hint = Size::new(width, minimum);
        if size_hint != self.size_hint || minimum_size_hint != self.minimum_size_hint {
            self.size_hint = size_hint;
            self.minimum_size_hint = minimum_size_hint;
            self.emit(ToolBoxEvent::SizeHintChanged {
                preferred: size_hint,
                minimum: minimum_size_hint,
            });
        }
    }
}

impl std::fmt::Debug for ToolBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolBox")
            .field("panes", &self.panes)
            .field("size", &self.size)
            .field("handle_width", &self.handle_width)
            .field("indentation", &self.resolved_indentation)
            .field("animating", &self.committer.is_animating())
            .field("handlers", &self.handlers)
            .finish()
    }
}

fn resolve_handle_width(config: &ToolBoxConfig, style: &dyn StyleMetrics) -> i32 {
    config.handle_width.unwrap_or_else(|| style.handle_width()).max(0)
}
