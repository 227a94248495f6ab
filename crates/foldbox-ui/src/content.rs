//! Content capability: what the toolbox needs from the widget shown inside a pane.

use std::any::Any;
use std::fmt;

use foldbox_core::geometry::Size;

/// Largest height a content can ask for; the toolkit's "unbounded".
pub const MAX_HEIGHT: i32 = 16_777_215;

/// Stable identity of a content, used by [`ToolBox::index_of`](crate::ToolBox::index_of).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContentId(u64);

impl ContentId {
    /// Create an id from a string key (FNV-1a).
    pub fn new(key: &str) -> Self {
        const FNV_OFFSET_BASIS: u64 = 0xcbf29ce484222325;
        const FNV_PRIME: u64 = 0x100000001b3;

        let hash = key.bytes().fold(FNV_OFFSET_BASIS, |hash, byte| {
            (hash ^ byte as u64).wrapping_mul(FNV_PRIME)
        });
        Self(hash)
    }

    pub const fn from_raw(id: u64) -> Self {
        Self(id)
    }

    pub const fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ContentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ContentId({:#x})", self.0)
    }
}

/// Height hints reported by a content. Non-positive values mean "no opinion".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeHints {
    pub preferred: i32,
    pub min: i32,
    pub max: i32,
}

impl Default for SizeHints {
    fn default() -> Self {
        Self {
            preferred: 0,
            min: 0,
            max: MAX_HEIGHT,
        }
    }
}

impl SizeHints {
    pub fn new(preferred: i32, min: i32, max: i32) -> Self {
        Self { preferred, min, max }
    }

    /// Same preferred, min and max.
    pub fn fixed(height: i32) -> Self {
        Self::new(height, height, height)
    }
}

/// A displayable unit managed by the toolbox.
///
/// Implementors are opaque to the layout engine apart from their height hints. The
/// toolbox resizes them through [`set_size`](PaneContent::set_size) and toggles them
/// through [`set_visible`](PaneContent::set_visible).
pub trait PaneContent {
    fn id(&self) -> ContentId;

    /// Natural height hints; re-read on every layout request.
    fn size_hints(&self) -> SizeHints;

    fn set_size(&mut self, _size: Size<i32>) {}

    fn set_visible(&mut self, _visible: bool) {}

    /// Content that was explicitly hidden before insertion starts as a hidden pane.
    fn explicitly_hidden(&self) -> bool {
        false
    }

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Content with constant hints that records what the toolbox did to it.
#[derive(Debug, Clone)]
pub struct FixedContent {
    pub id: ContentId,
    pub hints: SizeHints,
    pub size: Size<i32>,
    pub visible: bool,
    pub hidden_on_insert: bool,
    pub resize_count: usize,
}

impl FixedContent {
    pub fn new(key: &str, hints: SizeHints) -> Self {
        Self {
            id: ContentId::new(key),
            hints,
            size: Size::default(),
            visible: true,
            hidden_on_insert: false,
            resize_count: 0,
        }
    }

    /// Content with the given preferred height and default bounds.
    pub fn with_preferred(key: &str, preferred: i32) -> Self {
        Self::new(key, SizeHints::new(preferred, 0, MAX_HEIGHT))
    }

    pub fn hidden(mut self) -> Self {
        self.hidden_on_insert = true;
        self.visible = false;
        self
    }
}

impl PaneContent for FixedContent {
    fn id(&self) -> ContentId {
        self.id
    }

    fn size_hints(&self) -> SizeHints {
        self.hints
    }

    fn set_size(&mut self, size: Size<i32>) {
        self.size = size;
        self.resize_count += 1;
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn explicitly_hidden(&self) -> bool {
        self.hidden_on_insert
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
