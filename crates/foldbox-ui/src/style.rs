//! Style-derived metrics and title render state.
//!
//! The host toolkit owns fonts and theming. The toolbox only asks it for a handful of
//! pixel metrics through [`StyleMetrics`]; [`DefaultStyle`] is a fixed-metric
//! implementation good enough for headless use and tests.

use bitflags::bitflags;
use foldbox_core::geometry::Size;

/// Pixel metrics the toolbox needs from the host style.
pub trait StyleMetrics {
    /// Thickness of the divider between two visible panes.
    fn handle_width(&self) -> i32;

    /// Default width of the branch indicator area at the left of each title.
    fn indentation(&self) -> i32;

    /// Horizontal and vertical padding around title contents.
    fn title_padding(&self) -> Size<i32>;

    /// Size of `text` rendered in the title font.
    fn text_size(&self, text: &str) -> Size<i32>;

    /// Size icons are drawn at.
    fn icon_size(&self) -> Size<i32> {
        Size::new(16, 16)
    }
}

/// Fixed metrics: monospace-ish text measurement and constant paddings.
#[derive(Debug, Clone, PartialEq)]
pub struct DefaultStyle {
    pub handle_width: i32,
    pub indentation: i32,
    pub padding: Size<i32>,
    pub char_width: i32,
    pub line_height: i32,
    pub icon_size: Size<i32>,
}

impl Default for DefaultStyle {
    fn default() -> Self {
        Self {
            handle_width: 5,
            indentation: 20,
            padding: Size::new(12, 4),
            char_width: 7,
            line_height: 16,
            icon_size: Size::new(16, 16),
        }
    }
}

impl DefaultStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_handle_width(mut self, width: i32) -> Self {
        self.handle_width = width;
        self
    }

    pub fn with_indentation(mut self, indentation: i32) -> Self {
        self.indentation = indentation;
        self
    }

    /// Pick paddings so that an icon-less title is exactly `height` pixels tall.
    pub fn with_title_height(mut self, height: i32) -> Self {
        self.padding.height = (height - self.line_height).max(0);
        self
    }
}

impl StyleMetrics for DefaultStyle {
    fn handle_width(&self) -> i32 {
        self.handle_width
    }

    fn indentation(&self) -> i32 {
        self.indentation
    }

    fn title_padding(&self) -> Size<i32> {
        self.padding
    }

    fn text_size(&self, text: &str) -> Size<i32> {
        let columns = text.chars().count() as i32;
        Size::new(columns * self.char_width, self.line_height)
    }

    fn icon_size(&self) -> Size<i32> {
        self.icon_size
    }
}

/// Title indentation: either an explicit width or whatever the style says.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Indentation {
    #[default]
    StyleDefault,
    Fixed(i32),
}

impl Indentation {
    /// Resolve against the style. Negative fixed values fall back to the style default.
    pub fn resolve(&self, style: &dyn StyleMetrics) -> i32 {
        match *self {
            Indentation::Fixed(px) if px >= 0 => px,
            _ => style.indentation(),
        }
    }
}

impl From<i32> for Indentation {
    fn from(px: i32) -> Self {
        if px < 0 {
            Indentation::StyleDefault
        } else {
            Indentation::Fixed(px)
        }
    }
}

bitflags! {
    /// Visual state handed to the title renderer.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct TitleState: u8 {
        /// Pane is expanded.
        const OPEN         = 1 << 0;
        /// Title is pressed.
        const SUNKEN       = 1 << 1;
        /// Pointer is over the title.
        const HOVER        = 1 << 2;
        /// Pointer is over the branch indicator area.
        const BRANCH_HOVER = 1 << 3;
        const ENABLED      = 1 << 4;
        const HAS_ICON     = 1 << 5;
    }
}
