//! Foldbox UI - a vertical stack of collapsible, resizable panes
//!
//! This crate provides the layout engine behind a "tool box" control:
//! - Panes with a clickable title bar and a content area
//! - Expand/collapse with animated transitions
//! - Divider drags that resize adjacent panes
//! - Drag-and-drop reordering and a visibility menu model
//!
//! The crate does not draw anything or talk to a windowing system. The host feeds
//! it container sizes, style metrics and pointer input, and draws what
//! [`ToolBox::paint`] hands to its [`ToolBoxPainter`].
//!
//! ## Quick Start
//!
//! ```
//! use foldbox_ui::{FixedContent, PaintRecorder, SizeHints, ToolBox, ToolBoxConfig};
//!
//! let mut toolbox = ToolBox::new(ToolBoxConfig::default());
//! toolbox.resize(240, 480);
//! toolbox.add_pane(FixedContent::new("tools", SizeHints::new(150, 50, 1000)), "Tools", None);
//! toolbox.add_pane(FixedContent::new("layers", SizeHints::new(150, 50, 1000)), "Layers", None);
//!
//! toolbox.set_expanded(0, false);
//! while toolbox.tick(1.0 / 60.0) {}
//!
//! let mut recorder = PaintRecorder::new();
//! toolbox.paint(&mut recorder);
//! assert_eq!(recorder.titles().count(), 2);
//! ```

pub mod animation;
pub mod commit;
pub mod config;
pub mod content;
pub mod drag;
pub mod element;
pub mod error;
pub mod event;
pub mod handle;
pub mod layout;
pub mod menu;
pub mod paint;
pub mod pane;
pub mod resize;
pub mod style;
pub mod title;
pub mod toolbox;
pub mod transition;

pub use animation::{AnimationGroup, AnimationState, EasingFunction, RectAnimation};
pub use commit::PaneGeometry;
pub use config::ToolBoxConfig;
pub use content::{ContentId, FixedContent, MAX_HEIGHT, PaneContent, SizeHints};
pub use drag::{DragKind, DragState, DropPreview};
pub use error::{ToolBoxError, ToolBoxResult};
pub use event::{InputEvent, PointerButton, ToolBoxEvent};
pub use menu::{HideAction, MenuAction, MenuEntry, PaneMenu};
pub use paint::{HandleRenderState, PaintCommand, PaintRecorder, TitleRenderState, ToolBoxPainter};
pub use pane::{Pane, PaneId};
pub use style::{DefaultStyle, Indentation, StyleMetrics, TitleState};
pub use title::Icon;
pub use toolbox::ToolBox;

// Re-export common types from dependencies
pub use foldbox_core::geometry::{Rect, Size};
pub use foldbox_core::math::IVec2;
