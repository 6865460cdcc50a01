//! Rendering
//!
//! The drawing sink trait themes paint into, and a recording sink that
//! keeps the issued primitives as a display list.

pub mod display_list;
pub mod sink;

// Re-export commonly used items
pub use display_list::{DisplayList, DrawCommand};
pub use sink::{DrawingSink, FillRule};
