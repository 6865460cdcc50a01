//! Widget theming for the forms layer

pub mod theme_system;
pub mod themes;

// Re-export commonly used items
pub use theme_system::{
    get_theme_registry, Part, PartFlags, ThemePalette, ThemePart, ThemeRegistry, WidgetKind,
    WidgetState, WidgetTheme,
};
pub use themes::PictureBoxTheme;
