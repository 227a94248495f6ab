//! Pane visibility menu model.
//!
//! The host builds its own popup from a [`PaneMenu`]: a "hide" entry bound to the pane
//! the menu was opened on, then one checkable entry per pane. At least one pane must
//! stay visible, so the last visible pane can neither be hidden nor unchecked.

use foldbox_core::math::IVec2;

use crate::pane::Pane;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HideAction {
    /// Pane the menu was opened on.
    pub index: usize,
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    pub index: usize,
    pub label: String,
    /// Checked means visible.
    pub checked: bool,
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaneMenu {
    pub anchor: IVec2,
    /// Absent when the menu was not opened on a visible pane.
    pub hide: Option<HideAction>,
    pub entries: Vec<MenuEntry>,
}

impl PaneMenu {
    pub(crate) fn build(panes: &[Pane], opened_on: Option<usize>, anchor: IVec2) -> Self {
        let visible_count = panes.iter().filter(|p| p.visible).count();
        let lone_visible = visible_count == 1;

        let entries = panes
            .iter()
            .enumerate()
            .map(|(index, pane)| MenuEntry {
                index,
                label: pane.label().to_string(),
                checked: pane.visible,
                enabled: !(lone_visible && pane.visible),
            })
            .collect();

        let hide = opened_on
            .filter(|&i| panes.get(i).is_some_and(|p| p.visible))
            .map(|index| HideAction {
                index,
                enabled: visible_count > 1,
            });

        Self {
            anchor,
            hide,
            entries,
        }
    }

    pub fn visible_count(&self) -> usize {
        self.entries.iter().filter(|e| e.checked).count()
    }

    /// Turn a user choice into the visibility change it stands for.
    ///
    /// Returns `None` for disabled or unknown entries.
    pub fn resolve(&self, action: MenuAction) -> Option<(usize, bool)> {
        match action {
            MenuAction::Hide => self
                .hide
                .as_ref()
                .filter(|h| h.enabled)
                .map(|h| (h.index, false)),
            MenuAction::Toggle(index) => self
                .entries
                .get(index)
                .filter(|e| e.enabled)
                .map(|e| (e.index, !e.checked)),
        }
    }
}

/// A choice made in the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// The "hide" entry.
    Hide,
    /// The checkable entry of the pane at this index.
    Toggle(usize),
}
