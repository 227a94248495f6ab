//! Size negotiation: assign every visible pane a height that fills the container.
//!
//! Each expanded pane starts at its [`prefer_height`](Pane::prefer_height). Any surplus
//! or deficit against the container height is then spread over the panes in proportion
//! to their current heights, so ratios the user set by hand survive a container resize.
//! Panes that would cross their min/max bound are pinned at the bound and drop out of
//! the distribution; whatever they could not absorb is carried by the rest. When every
//! pane is pinned the remainder is left unapplied and the stack over- or underfills.

use crate::pane::Pane;

/// Summary of one negotiation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutOutcome {
    /// Titles + preferred heights + handle gaps before redistribution.
    pub total_size: i32,
    /// Container height minus `total_size`.
    pub space: i32,
    /// Part of `space` no pane could absorb.
    pub unapplied: i32,
    pub visible_count: usize,
}

/// Compute `layout_height` for every pane.
pub fn negotiate(panes: &mut [Pane], container_height: i32, handle_width: i32) -> LayoutOutcome {
    let mut visible_count = 0usize;
    let mut total_size = 0;
    let mut candidates: Vec<usize> = Vec::new();

    for (i, pane) in panes.iter_mut().enumerate() {
        if !pane.visible {
            pane.layout_height = 0;
            continue;
        }
        visible_count += 1;
        if pane.expanded {
            pane.layout_height = pane.prefer_height();
            candidates.push(i);
        } else {
            pane.layout_height = 0;
        }
        total_size += pane.title_height() + pane.layout_height;
    }
    if visible_count > 1 {
        total_size += handle_width * (visible_count as i32 - 1);
    }

    let space = container_height - total_size;
    let mut outcome = LayoutOutcome {
        total_size,
        space,
        unapplied: 0,
        visible_count,
    };
    if space == 0 {
        tracing::trace!(total_size, "layout already fits");
        return outcome;
    }

    let crosses = |pane: &Pane, height: i32| {
        (space > 0 && height > pane.max_height) || (space < 0 && height < pane.min_height)
    };

    // Panes already sitting on the bound in the direction of `space` cannot move.
    candidates.retain(|&i| {
        let pane = &panes[i];
        !((space > 0 && pane.layout_height >= pane.max_height)
            || (space < 0 && pane.layout_height <= pane.min_height))
    });

    let mut remaining = space as i64;
    let mut views_size: i64 = candidates.iter().map(|&i| panes[i].layout_height as i64).sum();

    // Pin panes one at a time until the proportional share fits everyone left.
    while !candidates.is_empty() && views_size > 0 {
        let pinned = candidates.iter().position(|&i| {
            let pane = &panes[i];
            let share = remaining as f64 * pane.layout_height as f64 / views_size as f64;
            let prefer = (pane.layout_height as f64 + share).ceil() as i32;
            crosses(pane, prefer)
        });
        let Some(pos) = pinned else { break };

        let i = candidates.remove(pos);
        let pane = &mut panes[i];
        let threshold = if space > 0 {
            pane.max_height
        } else {
            pane.min_height
        };
        tracing::trace!(index = i, from = pane.layout_height, to = threshold, "pinning pane at bound");
        views_size -= pane.layout_height as i64;
        remaining -= (threshold - pane.layout_height) as i64;
        pane.layout_height = threshold;
    }

    for &i in &candidates {
        if views_size <= 0 {
            break;
        }
        let pane = &mut panes[i];
        let add = (remaining as f64 * pane.layout_height as f64 / views_size as f64).ceil() as i64;
        views_size -= pane.layout_height as i64;
        remaining -= add;
        pane.layout_height += add as i32;
    }

    outcome.unapplied = remaining as i32;
    if outcome.unapplied != 0 {
        tracing::debug!(
            space,
            unapplied = outcome.unapplied,
            "panes pinned at bounds, container over- or underfilled"
        );
    }
    outcome
}

/// Sum of titles, layout heights and handle gaps over the visible panes.
pub fn stacked_height(panes: &[Pane], handle_width: i32) -> i32 {
    let visible = panes.iter().filter(|p| p.visible).count() as i32;
    let body: i32 = panes
        .iter()
        .filter(|p| p.visible)
        .map(|p| p.title_height() + p.layout_height)
        .sum();
    body + handle_width * (visible - 1).max(0)
}
