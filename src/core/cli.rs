//! Command line interface for the fwl-theme inspector
//!
//! Handles parsing command line arguments and provides validation for user
//! inputs. The inspector paints one widget part into a display list and
//! prints the recorded primitives, which makes palette edits easy to check.

use crate::core::config::ConfigFile;
use crate::geometry::parse_bounds;
use crate::ui::theme_system::{
    embedded_themes, Part, ThemePalette, WidgetKind, WidgetState,
};
use anyhow::{anyhow, Result};
use clap::Parser;
use kurbo::Rect;
use std::path::Path;
use tracing::debug;

/// fwl-theme CLI arguments
///
/// Examples:
///   fwl-theme                                   # Normal picture box, 100x40
///   fwl-theme --state disabled                  # Disabled fill
///   fwl-theme --part border --bounds 0,0,64,64  # Border frame
///   fwl-theme --palette dark                    # Embedded dark palette
///   fwl-theme --palette ~/my-palette.json       # Palette file
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "fwl-theme",
    version,
    about = "Inspect the drawing calls issued by forms widget themes",
    long_about = "Resolves the theme for a widget kind, paints one part of it into a display list, and prints the recorded drawing commands as JSON."
)]
pub struct CliArgs {
    /// Widget kind to paint
    #[clap(
        long = "kind",
        short = 'k',
        default_value = "picture-box",
        help = "Widget kind to paint"
    )]
    pub kind: String,

    /// Visual state of the widget
    #[clap(
        long = "state",
        short = 's',
        default_value = "normal",
        help = "Widget state: normal, disabled, read-only, focused"
    )]
    pub state: String,

    /// Part of the widget to paint
    #[clap(
        long = "part",
        short = 'p',
        default_value = "background",
        help = "Part to paint: background, border"
    )]
    pub part: String,

    /// Widget bounds as x,y,width,height
    #[clap(
        long = "bounds",
        short = 'b',
        default_value = "0,0,100,40",
        help = "Bounds as x,y,width,height"
    )]
    pub bounds: String,

    /// Palette to paint with
    ///
    /// Either the name of an embedded palette (default, dark) or the path to
    /// a palette JSON file.
    #[clap(
        long = "palette",
        help = "Embedded palette name or palette JSON file",
        long_help = "Palette to paint with. Accepts the name of an embedded palette (default, dark) or a path to a palette JSON file. Falls back to the palette in settings.json, then to the embedded default."
    )]
    pub palette: Option<String>,

    /// Log filter, overridden by RUST_LOG
    #[clap(long = "log-level", help = "Log filter (e.g. debug, fwl_theme=trace)")]
    pub log_level: Option<String>,

    /// Also write logs to the config directory
    #[clap(long = "log-file", help = "Write logs to ~/.config/fwl-theme/logs/")]
    pub log_file: bool,

    /// Initialize user configuration directory with settings and palettes
    #[clap(
        long = "new-config",
        help = "Initialize user config directory with settings and palettes",
        long_help = "Initialize the ~/.config/fwl-theme directory with a settings.json file and copies of the embedded palettes."
    )]
    pub new_config: bool,
}

/// A fully parsed paint request
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaintRequest {
    pub kind: WidgetKind,
    pub state: WidgetState,
    pub part: Part,
    pub bounds: Rect,
}

impl CliArgs {
    /// Validate the CLI arguments after parsing
    pub fn validate(&self) -> Result<(), String> {
        if WidgetKind::parse(&self.kind).is_none() {
            let available = WidgetKind::all_names().join(", ");
            return Err(format!(
                "Unknown widget kind: '{}'\nAvailable kinds: {available}",
                self.kind
            ));
        }

        if WidgetState::parse(&self.state).is_none() {
            let available = WidgetState::all_names().join(", ");
            return Err(format!(
                "Unknown state: '{}'\nAvailable states: {available}",
                self.state
            ));
        }

        if Part::parse(&self.part).is_none() {
            return Err(format!(
                "Unknown part: '{}'\nAvailable parts: background, border",
                self.part
            ));
        }

        if let Err(e) = parse_bounds(&self.bounds) {
            return Err(format!("Invalid bounds '{}': {e}", self.bounds));
        }

        Ok(())
    }

    /// Turn the textual arguments into a paint request
    pub fn paint_request(&self) -> Result<PaintRequest> {
        let kind = WidgetKind::parse(&self.kind)
            .ok_or_else(|| anyhow!("Unknown widget kind: '{}'", self.kind))?;
        let state = WidgetState::parse(&self.state)
            .ok_or_else(|| anyhow!("Unknown state: '{}'", self.state))?;
        let part = Part::parse(&self.part)
            .ok_or_else(|| anyhow!("Unknown part: '{}'", self.part))?;
        let bounds = parse_bounds(&self.bounds)?;

        Ok(PaintRequest {
            kind,
            state,
            part,
            bounds,
        })
    }

    /// Get the palette from CLI args, config file, or default
    ///
    /// Priority order:
    /// 1. CLI argument (--palette)
    /// 2. Config file setting (~/.config/fwl-theme/settings.json)
    /// 3. The default palette (user copy first, then embedded)
    pub fn resolve_palette(&self, config: Option<&ConfigFile>) -> Result<ThemePalette> {
        if let Some(palette) = &self.palette {
            debug!("Using palette from CLI: {}", palette);
            return load_palette(palette);
        }

        if let Some(palette) = config.and_then(|config| config.palette.as_ref()) {
            debug!("Using palette from config file: {}", palette);
            return load_palette(palette);
        }

        debug!("Using default palette");
        load_palette(embedded_themes::DEFAULT_PALETTE_NAME)
    }
}

/// Load a palette by name or, when given a file path, from disk
pub fn load_palette(name_or_path: &str) -> Result<ThemePalette> {
    load_palette_with_user_dir(name_or_path, &ConfigFile::palettes_dir())
}

/// Resolve a palette name against `user_palettes_dir` before the embedded set.
///
/// Lookup order: explicit file path, `<user_palettes_dir>/<name>.json`, then
/// the palettes shipped with the crate.
pub fn load_palette_with_user_dir(
    name_or_path: &str,
    user_palettes_dir: &Path,
) -> Result<ThemePalette> {
    let path = Path::new(name_or_path);
    if path.extension().is_some_and(|ext| ext == "json") || path.exists() {
        return ThemePalette::load(path);
    }

    let file_name = format!("{}.json", name_or_path.to_ascii_lowercase());
    let user_palette = user_palettes_dir.join(file_name);
    if user_palette.is_file() {
        debug!("Using user palette {:?}", user_palette);
        return ThemePalette::load(&user_palette);
    }

    embedded_themes::load_embedded_palette(name_or_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn args(extra: &[&str]) -> CliArgs {
        let mut argv = vec!["fwl-theme"];
        argv.extend_from_slice(extra);
        CliArgs::parse_from(argv)
    }

    #[test]
    fn test_defaults() {
        let cli = args(&[]);
        assert!(cli.validate().is_ok());
        assert_eq!(
            cli.paint_request().unwrap(),
            PaintRequest {
                kind: WidgetKind::PictureBox,
                state: WidgetState::Normal,
                part: Part::Background,
                bounds: Rect::new(0.0, 0.0, 100.0, 40.0),
            }
        );
    }

    #[test]
    fn test_full_request() {
        let cli = args(&[
            "--kind", "edit", "--state", "read-only", "--part", "border", "--bounds", "5,5,10,20",
        ]);
        let request = cli.paint_request().unwrap();
        assert_eq!(request.kind, WidgetKind::Edit);
        assert_eq!(request.state, WidgetState::ReadOnly);
        assert_eq!(request.part, Part::Border);
        assert_eq!(request.bounds, Rect::new(5.0, 5.0, 15.0, 25.0));
    }

    #[test]
    fn test_validation_messages() {
        let error = args(&["--kind", "slider"]).validate().unwrap_err();
        assert!(error.contains("Available kinds"));

        let error = args(&["--state", "hovered"]).validate().unwrap_err();
        assert!(error.contains("Available states"));

        let error = args(&["--part", "caption"]).validate().unwrap_err();
        assert!(error.contains("background, border"));

        let error = args(&["--bounds", "1,2,3"]).validate().unwrap_err();
        assert!(error.contains("Invalid bounds"));
    }

    #[test]
    fn test_palette_priority() {
        let config = ConfigFile {
            palette: Some("dark".to_string()),
            ..ConfigFile::default()
        };

        let from_cli = args(&["--palette", "default"])
            .resolve_palette(Some(&config))
            .unwrap();
        assert_eq!(from_cli.name, "Default");

        let from_config = args(&[]).resolve_palette(Some(&config)).unwrap();
        assert_eq!(from_config.name, "Dark");

        let fallback = args(&[]).resolve_palette(None).unwrap();
        assert_eq!(fallback.name, "Default");
    }

    #[test]
    fn test_user_palette_overrides_embedded() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join(crate::core::config::APP_DIR_NAME);
        ConfigFile::initialize_in(&root).unwrap();
        let palettes_dir = root.join("palettes");

        // Untouched copy matches the embedded palette
        let copied = load_palette_with_user_dir("default", &palettes_dir).unwrap();
        assert_eq!(copied, ThemePalette::default());

        let edited = ThemePalette {
            background: crate::ui::theme_system::PaletteColor::rgb(1.0, 0.0, 0.0),
            ..ThemePalette::default()
        };
        fs::write(
            palettes_dir.join("default.json"),
            serde_json::to_string_pretty(&edited).unwrap(),
        )
        .unwrap();

        let loaded = load_palette_with_user_dir("default", &palettes_dir).unwrap();
        assert_eq!(loaded.background, edited.background);

        // Names without a user copy still come from the embedded set
        fs::remove_file(palettes_dir.join("dark.json")).unwrap();
        let dark = load_palette_with_user_dir("dark", &palettes_dir).unwrap();
        assert_eq!(dark.name, "Dark");

        // A broken user copy is an error, not a silent fallback
        fs::write(palettes_dir.join("default.json"), "{ broken").unwrap();
        assert!(load_palette_with_user_dir("default", &palettes_dir).is_err());
    }

    #[test]
    fn test_palette_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mine.json");
        let palette = ThemePalette {
            name: "Mine".to_string(),
            ..ThemePalette::default()
        };
        fs::write(&path, serde_json::to_string(&palette).unwrap()).unwrap();

        let loaded = load_palette(path.to_str().unwrap()).unwrap();
        assert_eq!(loaded.name, "Mine");

        assert!(load_palette("no-such-palette").is_err());
        assert!(load_palette("/no/such/palette.json").is_err());
    }
}
