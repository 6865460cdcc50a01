//! Concrete widget themes
//!
//! One type per widget kind. The theming infrastructure (trait, part
//! descriptor, palettes, registry) lives in `../theme_system/`.
//!
//! Palette files shipped with the crate: default.json, dark.json

pub mod picture_box;

pub use crate::ui::theme_system::{ThemeRegistry, WidgetKind, WidgetTheme};
pub use picture_box::{BackgroundTable, PictureBoxTheme};

/// Stand-in for widget kinds that have no theme of their own.
///
/// Every draw call is a no-op.
#[derive(Debug, Default)]
pub struct UnthemedWidget;

impl WidgetTheme for UnthemedWidget {
    fn name(&self) -> &'static str {
        "Unthemed"
    }
}
