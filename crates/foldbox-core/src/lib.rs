//! Foldbox Core
//!
//! Shared geometry, math, collection and logging helpers used by the Foldbox toolbox.

pub mod alloc;
pub mod geometry;
pub mod logging;
pub mod math;
