//! Theme system infrastructure
//!
//! This module contains the code that powers the widget themes: the part
//! descriptor handed to every draw call, the `WidgetTheme` trait with its
//! shared paint helpers, JSON palettes, and the registry that owns the themes.
//!
//! Actual theme implementations live in ../themes/

pub mod embedded_themes;
pub mod palette;
pub mod registry;
pub mod theme_part;
pub mod widget_theme;

// Re-export commonly used items
pub use palette::{PaletteColor, ThemePalette};
pub use registry::{get_theme_registry, ThemeRegistry, WidgetKind};
pub use theme_part::{Part, PartFlags, ThemePart, WidgetState};
pub use widget_theme::{draw_border, fill_background, WidgetTheme};
