//! Rectangle tweening for animated geometry commits.
//!
//! The toolbox never sleeps or spawns timers. The host calls
//! [`ToolBox::tick`](crate::ToolBox::tick) from its frame loop; each tick advances every
//! track of the running [`AnimationGroup`] and hands back the interpolated rectangles.
//!
//! ```
//! use foldbox_core::geometry::Rect;
//! use foldbox_ui::animation::{AnimationGroup, RectAnimation};
//!
//! let mut group = AnimationGroup::new();
//! group.add(1u32, RectAnimation::new(Rect::new(0, 0, 100, 0), Rect::new(0, 0, 100, 80)).duration(0.1));
//!
//! let frames = group.update(0.05);
//! assert_eq!(frames.len(), 1);
//! assert!(!group.is_finished());
//!
//! group.update(0.06);
//! assert!(group.is_finished());
//! ```

use foldbox_core::alloc::HashMap;
use foldbox_core::geometry::Rect;
use std::hash::Hash;

/// Easing functions for animations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EasingFunction {
    /// Linear interpolation
    Linear,
    /// Ease in (slow start)
    EaseIn,
    /// Ease out (slow end)
    EaseOut,
    /// Ease in and out (slow start and end)
    EaseInOut,
    /// Cubic ease out
    CubicOut,
}

impl EasingFunction {
    /// Apply the easing function to a normalized time value (0.0 to 1.0).
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            EasingFunction::Linear => t,
            EasingFunction::EaseIn => t * t,
            EasingFunction::EaseOut => t * (2.0 - t),
            EasingFunction::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
            EasingFunction::CubicOut => {
                let t = t - 1.0;
                t * t * t + 1.0
            }
        }
    }
}

/// Animation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationState {
    Running,
    Completed,
}

/// Interpolates one rectangle toward another.
#[derive(Debug, Clone)]
pub struct RectAnimation {
    from: Rect<i32>,
    to: Rect<i32>,
    /// Duration in seconds
    duration: f32,
    elapsed: f32,
    easing: EasingFunction,
    state: AnimationState,
}

impl RectAnimation {
    pub fn new(from: Rect<i32>, to: Rect<i32>) -> Self {
        Self {
            from,
            to,
            duration: crate::config::DEFAULT_ANIMATION_DURATION,
            elapsed: 0.0,
            easing: EasingFunction::Linear,
            state: AnimationState::Running,
        }
    }

    /// Set the duration in seconds.
    pub fn duration(mut self, duration: f32) -> Self {
        self.duration = duration;
        self
    }

    pub fn easing(mut self, easing: EasingFunction) -> Self {
        self.easing = easing;
        self
    }

    pub fn target(&self) -> Rect<i32> {
        self.to
    }

    pub fn state(&self) -> AnimationState {
        self.state
    }

    /// Current interpolated rectangle.
    pub fn value(&self) -> Rect<i32> {
        if self.duration <= 0.0 || self.state == AnimationState::Completed {
            return self.to;
        }
        let t = (self.elapsed / self.duration).clamp(0.0, 1.0);
        self.from.lerp(&self.to, self.easing.apply(t))
    }

    /// Advance by `delta_time` seconds.
    ///
    /// Returns true if the animation is still running.
    pub fn update(&mut self, delta_time: f32) -> bool {
        if self.state == AnimationState::Completed {
            return false;
        }
        self.elapsed += delta_time.max(0.0);
        if self.elapsed >= self.duration {
            self.elapsed = self.duration;
            self.state = AnimationState::Completed;
            return false;
        }
        true
    }
}

/// A set of rectangle animations running in parallel, one per key.
///
/// The group is finished once every track has completed.
#[derive(Debug, Clone)]
pub struct AnimationGroup<K> {
    tracks: HashMap<K, RectAnimation>,
}

impl<K: Copy + Eq + Hash> AnimationGroup<K> {
    pub fn new() -> Self {
        Self {
            tracks: HashMap::default(),
        }
    }

    /// Add (or replace) the track for `key`.
    pub fn add(&mut self, key: K, animation: RectAnimation) {
        self.tracks.insert(key, animation);
    }

    /// Drop the track for `key`, e.g. because its pane went away.
    pub fn remove(&mut self, key: &K) -> Option<RectAnimation> {
        self.tracks.remove(key)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.tracks.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// True when no track is left running.
    pub fn is_finished(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Advance every track and return one frame per track.
    ///
    /// Completed tracks report their final rectangle once and are then removed.
    pub fn update(&mut self, delta_time: f32) -> Vec<(K, Rect<i32>)> {
        let mut frames = Vec::with_capacity(self.tracks.len());
        self.tracks.retain(|key, animation| {
            let running = animation.update(delta_time);
            frames.push((*key, animation.value()));
            running
        });
        frames
    }
}

impl<K: Copy + Eq + Hash> Default for AnimationGroup<K> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_easing() {
        let easing = EasingFunction::Linear;
        assert_eq!(easing.apply(0.0), 0.0);
        assert_eq!(easing.apply(0.5), 0.5);
        assert_eq!(easing.apply(1.0), 1.0);
    }

    #[test]
    fn test_easing_endpoints() {
        for easing in [
            EasingFunction::EaseIn,
            EasingFunction::EaseOut,
            EasingFunction::EaseInOut,
            EasingFunction::CubicOut,
        ] {
            assert!(easing.apply(0.0).abs() < 1e-6);
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_rect_animation_update() {
        let mut anim = RectAnimation::new(Rect::new(0, 0, 10, 0), Rect::new(0, 0, 10, 100))
            .duration(1.0);

        assert_eq!(anim.value().height, 0);

        assert!(anim.update(0.5));
        assert_eq!(anim.value().height, 50);

        assert!(!anim.update(0.5));
        assert_eq!(anim.value().height, 100);
        assert_eq!(anim.state(), AnimationState::Completed);
    }

    #[test]
    fn test_zero_duration_jumps_to_target() {
        let mut anim = RectAnimation::new(Rect::new(0, 0, 10, 0), Rect::new(0, 5, 10, 40))
            .duration(0.0);
        assert_eq!(anim.value(), Rect::new(0, 5, 10, 40));
        assert!(!anim.update(0.0));
    }

    #[test]
    fn test_group_reports_final_frame_then_drops_track() {
        let mut group = AnimationGroup::new();
        group.add(7u32, RectAnimation::new(Rect::new(0, 0, 1, 0), Rect::new(0, 0, 1, 10)).duration(0.1));
        group.add(8u32, RectAnimation::new(Rect::new(0, 0, 1, 10), Rect::new(0, 0, 1, 0)).duration(0.2));

        let frames = group.update(0.1);
        assert_eq!(frames.len(), 2);
        assert!(frames.contains(&(7, Rect::new(0, 0, 1, 10))));
        assert_eq!(group.len(), 1);

        let frames = group.update(0.1);
        assert_eq!(frames, vec![(8, Rect::new(0, 0, 1, 0))]);
        assert!(group.is_finished());
    }

    #[test]
    fn test_group_remove_track() {
        let mut group = AnimationGroup::new();
        group.add(1u32, RectAnimation::new(Rect::default(), Rect::new(0, 0, 1, 1)));
        assert!(group.remove(&1).is_some());
        assert!(group.is_finished());
    }
}
