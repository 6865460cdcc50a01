//! JSON color palettes
//!
//! A palette is the configuration table the themes read their colors from.
//! Colors are written as `[r, g, b]` or `[r, g, b, a]` floats in sRGB:
//!
//! ```json
//! {
//!   "name": "Default",
//!   "background": [0.92, 0.91, 0.85],
//!   "border": [0.0, 0.0, 0.0],
//!   "border_width": 1.0,
//!   "disabled_blend": [0.68, 0.66, 0.6],
//!   "disabled_blend_factor": 0.5
//! }
//! ```
//!
//! `disabled_background`, `read_only_background` and `focused_background`
//! are optional per-state overrides.

use super::theme_part::WidgetState;
use anyhow::{anyhow, Context, Result};
use bevy_color::{Color, Mix};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// sRGB color as stored in palette files
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f32>", into = "Vec<f32>")]
pub struct PaletteColor([f32; 4]);

impl PaletteColor {
    pub const fn rgb(red: f32, green: f32, blue: f32) -> Self {
        Self([red, green, blue, 1.0])
    }

    pub const fn rgba(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Self([red, green, blue, alpha])
    }

    pub fn to_color(self) -> Color {
        let [red, green, blue, alpha] = self.0;
        Color::srgba(red, green, blue, alpha)
    }
}

impl TryFrom<Vec<f32>> for PaletteColor {
    type Error = String;

    fn try_from(components: Vec<f32>) -> Result<Self, Self::Error> {
        match components[..] {
            [red, green, blue] => Ok(Self::rgb(red, green, blue)),
            [red, green, blue, alpha] => Ok(Self::rgba(red, green, blue, alpha)),
            _ => Err(format!(
                "color must have 3 or 4 components, got {}",
                components.len()
            )),
        }
    }
}

impl From<PaletteColor> for Vec<f32> {
    fn from(color: PaletteColor) -> Self {
        color.0.to_vec()
    }
}

/// Color table shared by the widget themes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemePalette {
    pub name: String,
    /// Base background fill
    pub background: PaletteColor,
    pub border: PaletteColor,
    pub border_width: f64,
    /// Color the base fill is mixed toward for disabled widgets
    pub disabled_blend: PaletteColor,
    /// 0.0 keeps the base fill, 1.0 replaces it with `disabled_blend`
    pub disabled_blend_factor: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled_background: Option<PaletteColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_only_background: Option<PaletteColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focused_background: Option<PaletteColor>,
}

impl ThemePalette {
    /// Parse and validate a palette from JSON text
    pub fn from_json_str(content: &str) -> Result<Self> {
        let palette: Self = serde_json::from_str(content).context("Malformed palette JSON")?;
        palette.validate()?;
        Ok(palette)
    }

    /// Load a palette file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read palette {}", path.display()))?;
        let palette = Self::from_json_str(&content)
            .with_context(|| format!("Invalid palette {}", path.display()))?;
        debug!("Loaded palette '{}' from {:?}", palette.name, path);
        Ok(palette)
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.disabled_blend_factor) {
            return Err(anyhow!(
                "disabled_blend_factor must be between 0 and 1, got {}",
                self.disabled_blend_factor
            ));
        }
        if self.border_width.is_nan() || self.border_width < 0.0 {
            return Err(anyhow!(
                "border_width must not be negative, got {}",
                self.border_width
            ));
        }
        Ok(())
    }

    /// Background fill for a widget in `state`.
    ///
    /// Normal, read-only and focused widgets share the base fill unless the
    /// palette overrides them. Disabled widgets get the base fill mixed
    /// toward `disabled_blend` unless `disabled_background` is set.
    pub fn background_for(&self, state: WidgetState) -> Color {
        let base = self.background.to_color();
        match state {
            WidgetState::Normal => base,
            WidgetState::ReadOnly => self.read_only_background.map_or(base, PaletteColor::to_color),
            WidgetState::Focused => self.focused_background.map_or(base, PaletteColor::to_color),
            WidgetState::Disabled => match self.disabled_background {
                Some(color) => color.to_color(),
                None => {
                    let blended = base.to_srgba().mix(
                        &self.disabled_blend.to_color().to_srgba(),
                        self.disabled_blend_factor,
                    );
                    Color::Srgba(blended)
                }
            },
        }
    }

    pub fn border_color(&self) -> Color {
        self.border.to_color()
    }
}

impl Default for ThemePalette {
    fn default() -> Self {
        Self {
            name: "Default".to_string(),
            background: PaletteColor::rgb(0.92, 0.91, 0.85),
            border: PaletteColor::rgb(0.0, 0.0, 0.0),
            border_width: 1.0,
            disabled_blend: PaletteColor::rgb(0.68, 0.66, 0.6),
            disabled_blend_factor: 0.5,
            disabled_background: None,
            read_only_background: None,
            focused_background: None,
        }
    }
}
