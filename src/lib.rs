//! fwl-theme: themed widget renderers for a forms layer
//!
//! A theme turns a widget's state and bounds into drawing calls on a
//! borrowed [`rendering::DrawingSink`]. Themes are shared and read-only and
//! come from a [`ui::ThemeRegistry`]:
//!
//! ```
//! use fwl_theme::rendering::DisplayList;
//! use fwl_theme::ui::{get_theme_registry, ThemePart, WidgetKind, WidgetState};
//! use kurbo::Rect;
//!
//! let theme = get_theme_registry().resolve(WidgetKind::PictureBox);
//! let mut list = DisplayList::new();
//! theme.draw_background(
//!     ThemePart::new(&mut list, Rect::new(0.0, 0.0, 100.0, 40.0))
//!         .with_state(WidgetState::Disabled),
//! );
//! assert_eq!(list.len(), 1);
//! ```
pub mod core;
pub mod geometry;
pub mod logging;
pub mod rendering;
#[cfg(test)]
mod tests;
pub mod ui;
