//! Per-pane record: content, visual elements and sizing state.

use foldbox_core::geometry::Rect;

use crate::config::ToolBoxConfig;
use crate::content::{ContentId, MAX_HEIGHT, PaneContent};
use crate::element::Element;
use crate::handle::SplitterHandle;
use crate::title::{Icon, TitleBar};

/// Internal identity of a pane, stable across reorders.
///
/// Public APIs address panes by index; this id only keys animation tracks and
/// other bookkeeping that must survive index shifts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PaneId(pub(crate) u64);

pub struct Pane {
    pub(crate) id: PaneId,
    pub(crate) content: Box<dyn PaneContent>,
    pub(crate) title: TitleBar,
    pub(crate) handle: SplitterHandle,
    /// Geometry of the page container the content lives in.
    pub(crate) container: Rect<i32>,

    pub(crate) expanded: bool,
    pub(crate) visible: bool,

    pub(crate) preferred_height: i32,
    pub(crate) min_height: i32,
    pub(crate) max_height: i32,
    /// Height after the last explicit user action; 0 means unset.
    pub(crate) manual_height: i32,
    /// Result of the current layout pass; 0 when collapsed or hidden.
    pub(crate) layout_height: i32,

    /// One-shot: the next geometry commit must not resize the content.
    pub(crate) freeze_target: bool,
}

impl Pane {
    pub(crate) fn new(
        id: PaneId,
        content: Box<dyn PaneContent>,
        label: impl Into<String>,
        icon: Option<Icon>,
    ) -> Self {
        Self {
            id,
            content,
            title: TitleBar::new(label, icon),
            handle: SplitterHandle::new(),
            container: Rect::default(),
            expanded: true,
            visible: true,
            preferred_height: 0,
            min_height: 0,
            max_height: MAX_HEIGHT,
            manual_height: 0,
            layout_height: 0,
            freeze_target: false,
        }
    }

    /// Re-read the content's size hints, substituting defaults for missing values.
    pub(crate) fn refresh_size_hints(&mut self, config: &ToolBoxConfig) {
        let hints = self.content.size_hints();
        self.preferred_height = if hints.preferred <= 0 {
            config.default_preferred_height
        } else {
            hints.preferred
        };
        self.min_height = if hints.min <= 0 {
            config.min_height_floor
        } else {
            hints.min
        };
        self.max_height = hints.max;
    }

    /// Height this pane asks for: the manual height if set, else the preferred height,
    /// clamped into `[min, max]`. When `min > max` the maximum wins.
    pub fn prefer_height(&self) -> i32 {
        let prefer = if self.manual_height > 0 {
            self.manual_height
        } else if self.preferred_height > 0 {
            self.preferred_height
        } else {
            crate::config::DEFAULT_PREFERRED_HEIGHT
        };
        prefer.max(self.min_height).min(self.max_height)
    }

    /// Visible and expanded.
    pub fn can_resize(&self) -> bool {
        self.visible && self.expanded
    }

    pub fn id(&self) -> PaneId {
        self.id
    }

    pub fn content_id(&self) -> ContentId {
        self.content.id()
    }

    pub fn content(&self) -> &dyn PaneContent {
        self.content.as_ref()
    }

    pub fn label(&self) -> &str {
        self.title.label()
    }

    pub fn icon(&self) -> Option<&Icon> {
        self.title.icon()
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn title_height(&self) -> i32 {
        if self.visible { self.title.height() } else { 0 }
    }

    pub fn preferred_height(&self) -> i32 {
        self.preferred_height
    }

    pub fn min_height(&self) -> i32 {
        self.min_height
    }

    pub fn max_height(&self) -> i32 {
        self.max_height
    }

    pub fn manual_height(&self) -> i32 {
        self.manual_height
    }

    pub fn layout_height(&self) -> i32 {
        self.layout_height
    }

    pub fn container_rect(&self) -> Rect<i32> {
        self.container
    }

    pub fn title_rect(&self) -> Rect<i32> {
        self.title.geometry()
    }

    pub fn is_freeze_pending(&self) -> bool {
        self.freeze_target
    }
}

impl std::fmt::Debug for Pane {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pane")
            .field("id", &self.id)
            .field("label", &self.title.label())
            .field("expanded", &self.expanded)
            .field("visible", &self.visible)
            .field("preferred", &self.preferred_height)
            .field("min", &self.min_height)
            .field("max", &self.max_height)
            .field("manual", &self.manual_height)
            .field("layout", &self.layout_height)
            .finish()
    }
}

/// Bank every resizable pane's current height as its manual height.
pub(crate) fn bank_manual_heights(panes: &mut [Pane]) {
    for pane in panes.iter_mut().filter(|p| p.can_resize()) {
        pane.manual_height = pane.layout_height;
    }
}


#[cfg(test)]
mod tests {
    use super::testing::panes;
    use super::*;

    #[test]
    fn test_prefer_height_uses_preferred() {
        let p = panes(&[(180, 50, 1000)]);
        assert_eq!(p[0].prefer_height(), 180);
    }

    #[test]
    fn test_prefer_height_manual_wins() {
        let mut p = panes(&[(180, 50, 1000)]);
        p[0].manual_height = 240;
        assert_eq!(p[0].prefer_height(), 240);
    }

    #[test]
    fn test_prefer_height_clamps() {
        let mut p = panes(&[(30, 50, 1000), (900, 50, 400)]);
        assert_eq!(p[0].prefer_height(), 50);
        assert_eq!(p[1].prefer_height(), 400);

        // min > max: max wins rather than panicking
        p[0].min_height = 300;
        p[0].max_height = 200;
        assert_eq!(p[0].prefer_height(), 200);
    }

    #[test]
    fn test_missing_hints_get_defaults() {
        let p = panes(&[(0, 0, MAX_HEIGHT)]);
        assert_eq!(p[0].preferred_height(), 100);
        assert_eq!(p[0].min_height(), 50);
        assert_eq!(p[0].max_height(), MAX_HEIGHT);
    }

    #[test]
    fn test_can_resize() {
        let mut p = panes(&[(100, 50, 1000)]);
        assert!(p[0].can_resize());
        p[0].expanded = false;
        assert!(!p[0].can_resize());
        p[0].expanded = true;
        p[0].visible = false;
        assert!(!p[0].can_resize());
        assert_eq!(p[0].title_height(), 0);
    }

    #[test]
    fn test_bank_skips_collapsed() {
        let mut p = panes(&[(100, 50, 1000), (100, 50, 1000)]);
        p[0].layout_height = 120;
        p[1].layout_height = 0;
        p[1].expanded = false;
        p[1].manual_height = 90;
        bank_manual_heights(&mut p);
        assert_eq!(p[0].manual_height, 120);
        assert_eq!(p[1].manual_height, 90);
    }
}
