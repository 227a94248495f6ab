//! Configuration for a [`ToolBox`](crate::ToolBox).

use crate::animation::EasingFunction;
use crate::error::{ToolBoxError, ToolBoxResult};

/// Default expand/collapse animation duration in seconds.
pub const DEFAULT_ANIMATION_DURATION: f32 = 0.1;

/// Minimum height used when content reports none.
pub const DEFAULT_MIN_HEIGHT_FLOOR: i32 = 50;

/// Preferred height used when content reports none.
pub const DEFAULT_PREFERRED_HEIGHT: i32 = 100;

/// Manhattan distance a pressed title must travel before it turns into a drag.
pub const DEFAULT_DRAG_DISTANCE: i32 = 10;

/// Extra pixels added above and below a handle that is one pixel or thinner.
pub const DEFAULT_HAIRLINE_GRAB_MARGIN: i32 = 2;

/// Toolbox behaviour knobs. Style-derived metrics live in [`StyleMetrics`](crate::StyleMetrics).
#[derive(Debug, Clone)]
pub struct ToolBoxConfig {
    /// Duration of expand/collapse animations in seconds.
    pub animation_duration: f32,
    /// Easing applied to geometry animations.
    pub easing: EasingFunction,
    /// Whether expand/collapse transitions animate at all.
    pub animate_transitions: bool,
    /// Minimum height given to content reporting a non-positive minimum.
    pub min_height_floor: i32,
    /// Preferred height given to content reporting a non-positive preference.
    pub default_preferred_height: i32,
    /// Manhattan distance before a title press starts a drag.
    pub drag_distance: i32,
    /// Grab margin for handles one pixel or thinner.
    pub hairline_grab_margin: i32,
    /// Overrides the style's handle width when set.
    pub handle_width: Option<i32>,
}

impl Default for ToolBoxConfig {
    fn default() -> Self {
        ToolBoxConfig {
            animation_duration: DEFAULT_ANIMATION_DURATION,
            easing: EasingFunction::EaseOut,
            animate_transitions: true,
            min_height_floor: DEFAULT_MIN_HEIGHT_FLOOR,
            default_preferred_height: DEFAULT_PREFERRED_HEIGHT,
            drag_distance: DEFAULT_DRAG_DISTANCE,
            hairline_grab_margin: DEFAULT_HAIRLINE_GRAB_MARGIN,
            handle_width: None,
        }
    }
}

impl ToolBoxConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the animation duration in seconds.
    pub fn animation_duration(mut self, secs: f32) -> Self {
        self.animation_duration = secs;
        self
    }

    /// Set the easing function.
    pub fn easing(mut self, easing: EasingFunction) -> Self {
        self.easing = easing;
        self
    }

    /// Enable or disable animated transitions.
    pub fn animate_transitions(mut self, animate: bool) -> Self {
        self.animate_transitions = animate;
        self
    }

    pub fn min_height_floor(mut self, floor: i32) -> Self {
        self.min_height_floor = floor;
        self
    }

    pub fn default_preferred_height(mut self, height: i32) -> Self {
        self.default_preferred_height = height;
        self
    }

    pub fn drag_distance(mut self, distance: i32) -> Self {
        self.drag_distance = distance;
        self
    }

    /// Force a handle width instead of the style's.
    pub fn handle_width(mut self, width: i32) -> Self {
        self.handle_width = Some(width);
        self
    }

    /// Check the values for consistency.
    pub fn validate(&self) -> ToolBoxResult<()> {
        if !self.animation_duration.is_finite() || self.animation_duration < 0.0 {
            return Err(ToolBoxError::InvalidAnimationDuration(self.animation_duration));
        }
        if self.min_height_floor <= 0 {
            return Err(ToolBoxError::InvalidHeightFloor(self.min_height_floor));
        }
        if let Some(width) = self.handle_width
            && width < 0
        {
            return Err(ToolBoxError::NegativeHandleWidth(width));
        }
        Ok(())
    }
}
