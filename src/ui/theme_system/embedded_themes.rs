use super::palette::ThemePalette;
use anyhow::{anyhow, Result};
use std::collections::HashMap;

pub const DEFAULT_PALETTE_NAME: &str = "default";

pub const DEFAULT_JSON: &str = include_str!("../themes/default.json");
pub const DARK_JSON: &str = include_str!("../themes/dark.json");

pub fn get_embedded_palettes() -> HashMap<String, &'static str> {
    let mut palettes = HashMap::new();
    palettes.insert(DEFAULT_PALETTE_NAME.to_string(), DEFAULT_JSON);
    palettes.insert("dark".to_string(), DARK_JSON);
    palettes
}

/// Look up and parse a palette shipped with the crate
pub fn load_embedded_palette(name: &str) -> Result<ThemePalette> {
    let palettes = get_embedded_palettes();
    let content = palettes.get(&name.to_ascii_lowercase()).ok_or_else(|| {
        let mut available: Vec<_> = palettes.keys().cloned().collect();
        available.sort();
        anyhow!(
            "Unknown palette: '{name}'\nAvailable palettes: {}",
            available.join(", ")
        )
    })?;
    ThemePalette::from_json_str(content)
}

pub fn default_palette() -> Result<ThemePalette> {
    load_embedded_palette(DEFAULT_PALETTE_NAME)
}
