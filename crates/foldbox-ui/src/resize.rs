//! Divider drags between adjacent panes.
//!
//! A drag is always measured from the press position: every call recomputes heights
//! from the manual heights banked when the handle was pressed, so the gesture never
//! accumulates rounding and reversing direction restores the press-time layout.

use crate::pane::Pane;

/// Move the divider above `panes[index]` by `distance` pixels.
///
/// A positive distance shrinks the resizable panes above the divider (nearest first)
/// and grows the ones below; a negative distance does the reverse. The applied
/// magnitude is capped by whichever side runs out of room first. Panes in either
/// partition that end up unchanged are reset to their banked height.
///
/// Returns the magnitude actually applied.
pub fn move_handle(panes: &mut [Pane], index: usize, distance: i32) -> i32 {
    let index = index.min(panes.len());
    let mut shrink_part: Vec<usize> = (0..index).rev().filter(|&i| panes[i].can_resize()).collect();
    let mut expand_part: Vec<usize> =
        (index..panes.len()).filter(|&i| panes[i].can_resize()).collect();
    if distance < 0 {
        std::mem::swap(&mut shrink_part, &mut expand_part);
    }

    let shrink_capacity: i32 = shrink_part
        .iter()
        .map(|&i| (panes[i].manual_height - panes[i].min_height).max(0))
        .sum();
    let expand_capacity: i32 = expand_part
        .iter()
        .map(|&i| (panes[i].max_height - panes[i].manual_height).max(0))
        .sum();
    let applied = shrink_capacity.min(expand_capacity).min(distance.saturating_abs());

    let mut space = applied;
    for &i in &shrink_part {
        let pane = &mut panes[i];
        let diff = (pane.manual_height - pane.min_height).max(0).min(space);
        pane.layout_height = pane.manual_height - diff;
        space -= diff;
    }

    let mut space = applied;
    for &i in &expand_part {
        let pane = &mut panes[i];
        let diff = (pane.max_height - pane.manual_height).max(0).min(space);
        pane.layout_height = pane.manual_height + diff;
        space -= diff;
    }

    tracing::trace!(
        index,
        distance,
        shrink_capacity,
        expand_capacity,
        applied,
        "handle moved"
    );
    applied
}
