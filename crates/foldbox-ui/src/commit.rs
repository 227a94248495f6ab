//! Geometry commit: turn computed layout heights into rectangles.
//!
//! Visible panes are stacked top to bottom. Each pane's container sits directly
//! under its title, and the title directly under the pane's handle (every visible
//! pane but the first has one). A commit can either snap every rectangle into place
//! or animate the containers that moved. While an animation is running further
//! commits are deferred; the last requested one runs when the animation finishes.

use foldbox_core::alloc::HashMap;
use foldbox_core::geometry::Rect;

use crate::animation::{AnimationGroup, EasingFunction, RectAnimation};
use crate::element::Element;
use crate::pane::{Pane, PaneId};

/// Inputs that stay constant for one commit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CommitParams {
    /// Area the panes are laid out in.
    pub area: Rect<i32>,
    pub handle_width: i32,
    /// Added above and below handles one pixel or thinner.
    pub grab_margin: i32,
    pub duration: f32,
    pub easing: EasingFunction,
}

/// Committed rectangles of one pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaneGeometry {
    pub title: Rect<i32>,
    pub container: Rect<i32>,
    /// `None` for the first visible pane and for hidden panes.
    pub handle: Option<Rect<i32>>,
}

impl PaneGeometry {
    pub(crate) fn of(pane: &Pane) -> Self {
        Self {
            title: pane.title.geometry(),
            container: pane.container,
            handle: pane.handle.is_visible().then(|| pane.handle.geometry()),
        }
    }
}

#[derive(Debug, Default)]
pub struct GeometryCommitter {
    animating: bool,
    next_animated: bool,
    tracks: AnimationGroup<PaneId>,
    /// Freeze flag captured per track; the pane's own flag is consumed at commit time.
    frozen: HashMap<PaneId, bool>,
    box_spacing: i32,
    contents_height: i32,
}

impl GeometryCommitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    /// Unused height below the last pane after the last commit. Negative on overflow.
    pub fn box_spacing(&self) -> i32 {
        self.box_spacing
    }

    pub fn contents_height(&self) -> i32 {
        self.contents_height
    }

    /// Drop any running track for a pane that is going away.
    pub fn forget(&mut self, id: PaneId) {
        self.tracks.remove(&id);
        self.frozen.remove(&id);
    }

    /// Place every visible pane. Returns false if the commit was deferred.
    pub fn commit(&mut self, panes: &mut [Pane], params: &CommitParams, animate: bool) -> bool {
        if self.animating {
            self.next_animated = animate;
            tracing::trace!(animate, "commit deferred until animation ends");
            return false;
        }

        let area = params.area;
        let mut offset = area.y;
        let mut first = true;
        for pane in panes.iter_mut().filter(|p| p.visible) {
            let title_height = pane.title.height();
            if !first {
                offset += params.handle_width;
            }
            offset += title_height;

            let height = pane.layout_height;
            let start = pane.container;
            let end = Rect::new(area.x, offset, area.width, height);

            let freeze = pane.freeze_target;
            if freeze && pane.expanded {
                pane.content.set_size(end.size());
            }

            if animate && start != end {
                let animation = RectAnimation::new(start, end)
                    .duration(params.duration)
                    .easing(params.easing);
                self.tracks.add(pane.id, animation);
                self.frozen.insert(pane.id, freeze);
            } else {
                apply_frame(pane, end, freeze, params);
            }

            pane.freeze_target = false;
            offset += height;
            first = false;
        }

        self.contents_height = offset - area.y;
        self.box_spacing = area.height - self.contents_height;
        self.next_animated = false;
        self.animating = !self.tracks.is_empty();
        tracing::debug!(
            contents_height = self.contents_height,
            box_spacing = self.box_spacing,
            animating = self.animating,
            "geometry committed"
        );
        true
    }

    /// Advance a running animation by `delta_time` seconds.
    ///
    /// Returns true if any rectangle moved. When the last track finishes the
    /// deferred commit, if any, runs immediately.
    pub fn advance(&mut self, panes: &mut [Pane], params: &CommitParams, delta_time: f32) -> bool {
        if !self.animating {
            return false;
        }

        for (id, rect) in self.tracks.update(delta_time) {
            let freeze = self.frozen.get(&id).copied().unwrap_or(false);
            if let Some(pane) = panes.iter_mut().find(|p| p.id == id) {
                apply_frame(pane, rect, freeze, params);
            }
        }

        if self.tracks.is_finished() {
            self.animating = false;
            self.frozen.clear();
            let next = self.next_animated;
            self.commit(panes, params, next);
        }
        true
    }
}

fn apply_frame(pane: &mut Pane, rect: Rect<i32>, freeze: bool, params: &CommitParams) {
    pane.container = rect;
    if !freeze {
        pane.content.set_size(rect.size());
    }

    let title_height = pane.title.height();
    let title = Rect::new(rect.x, rect.y - title_height, rect.width, title_height);
    pane.title.set_geometry(title);

    if pane.handle.is_visible() {
        let hw = params.handle_width;
        let mut handle = Rect::new(title.x, title.y - hw, title.width, hw);
        if hw <= 1 {
            handle = handle.adjusted(0, -params.grab_margin, 0, params.grab_margin);
        }
        pane.handle.set_geometry(handle);
    }
}

/// Sync element visibility with pane visibility. Only visible panes after the first
/// visible one show a handle.
pub(crate) fn reset_pages(panes: &mut [Pane]) {
    let mut seen_visible = false;
    for pane in panes.iter_mut() {
        pane.title.set_visible(pane.visible);
        pane.content.set_visible(pane.visible);
        pane.handle.set_visible(pane.visible && seen_visible);
        seen_visible |= pane.visible;
    }
}
