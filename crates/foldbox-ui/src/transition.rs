//! Redistribution of space when a single pane expands or collapses.
//!
//! Expanding first soaks up any slack left below the stack; if there is not enough,
//! the other resizable panes give up height starting from the end of the list.
//! Collapsing hands the freed height (plus slack) back to the other panes, again
//! starting from the end, each up to its maximum.

use crate::pane::Pane;

/// Update layout heights after `panes[index]` changed to `expand`.
///
/// The caller has already flipped the pane's `expanded` flag. `box_spacing` is the
/// unused slack from the last geometry commit. Hidden panes only change state.
pub fn expand_state_changed(panes: &mut [Pane], index: usize, expand: bool, box_spacing: i32) {
    let Some(current) = panes.get(index) else {
        return;
    };
    if !current.visible {
        tracing::trace!(index, expand, "expand state changed on hidden pane");
        return;
    }

    if expand {
        expand_pane(panes, index, box_spacing);
    } else {
        collapse_pane(panes, index, box_spacing);
    }
}

fn expand_pane(panes: &mut [Pane], index: usize, box_spacing: i32) {
    let target = panes[index].prefer_height();
    let available = box_spacing - target;

    if available >= 0 {
        let current = &mut panes[index];
        current.layout_height = (target + available).min(current.max_height);
        tracing::debug!(index, height = current.layout_height, "expanded into slack");
        return;
    }

    let mut needed = -available;
    for i in (0..panes.len()).rev() {
        if needed <= 0 {
            break;
        }
        if i == index || !panes[i].can_resize() {
            continue;
        }
        let donor = &mut panes[i];
        let give = (donor.layout_height - donor.min_height).min(needed).max(0);
        donor.layout_height -= give;
        needed -= give;
        if give > 0 {
            tracing::trace!(donor = i, give, "donor shrinks for expansion");
        }
    }

    let current = &mut panes[index];
    current.layout_height = target;
    if needed > 0 {
        let diff = (current.layout_height - current.min_height).min(needed).max(0);
        current.layout_height -= diff;
    }
    tracing::debug!(index, height = current.layout_height, shortfall = needed, "expanded");
}

fn collapse_pane(panes: &mut [Pane], index: usize, box_spacing: i32) {
    let current = &mut panes[index];
    current.manual_height = current.layout_height;
    let mut space = current.layout_height + box_spacing;
    current.layout_height = 0;

    for i in (0..panes.len()).rev() {
        if space <= 0 {
            break;
        }
        let receiver = &mut panes[i];
        if !receiver.can_resize() {
            continue;
        }
        let take = (receiver.max_height - receiver.layout_height).min(space).max(0);
        receiver.layout_height += take;
        space -= take;
        if take > 0 {
            tracing::trace!(receiver = i, take, "receiver grows after collapse");
        }
    }
    tracing::debug!(index, leftover = space.max(0), "collapsed");
}
