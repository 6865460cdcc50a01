//! Geometric helpers for widget parts

pub mod utilities;

// Re-export commonly used items
pub use utilities::{border_ring, has_paintable_area, parse_bounds};
