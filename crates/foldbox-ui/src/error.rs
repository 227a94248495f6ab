//! Error types for the fallible parts of the toolbox API.
//!
//! The layout algorithms themselves never fail; invalid indices are ignored. Only
//! configuration validation and explicit reorder commits report why nothing happened.

/// Error types for toolbox operations.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolBoxError {
    /// Pane index past the end of the pane list.
    IndexOutOfRange { index: usize, len: usize },
    /// Reorder source and target are the same position.
    SameIndex(usize),
    /// Handle width must not be negative.
    NegativeHandleWidth(i32),
    /// Animation duration must be finite and not negative.
    InvalidAnimationDuration(f32),
    /// The minimum-height floor must be positive.
    InvalidHeightFloor(i32),
}

impl std::fmt::Display for ToolBoxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ToolBoxError::IndexOutOfRange { index, len } => {
                write!(f, "Pane index {} out of range (len {})", index, len)
            }
            ToolBoxError::SameIndex(index) => {
                write!(f, "Cannot reorder pane {} onto its own position", index)
            }
            ToolBoxError::NegativeHandleWidth(width) => {
                write!(f, "Handle width {} is negative", width)
            }
            ToolBoxError::InvalidAnimationDuration(secs) => {
                write!(f, "Animation duration {} is not a valid duration", secs)
            }
            ToolBoxError::InvalidHeightFloor(floor) => {
                write!(f, "Minimum height floor {} must be positive", floor)
            }
        }
    }
}

impl std::error::Error for ToolBoxError {}

/// Result type for toolbox operations.
pub type ToolBoxResult<T> = Result<T, ToolBoxError>;
