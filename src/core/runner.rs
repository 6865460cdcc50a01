//! Application runner logic
//!
//! Wires configuration, logging and the theme registry together for the
//! inspector binary.

use crate::core::cli::{CliArgs, PaintRequest};
use crate::core::config::ConfigFile;
use crate::logging;
use crate::rendering::DisplayList;
use crate::ui::theme_system::{ThemePart, ThemeRegistry};
use anyhow::Result;
use tracing::{info, warn};

/// Run the inspector with the given CLI arguments.
pub fn run_app(cli_args: CliArgs) -> Result<()> {
    if cli_args.new_config {
        return ConfigFile::initialize_config_directory();
    }

    cli_args
        .validate()
        .map_err(|e| anyhow::anyhow!("CLI validation failed: {}", e))?;

    // Settings decide the log filter, so their errors are reported after init
    let settings = ConfigFile::read();
    let config = settings.as_ref().ok().cloned().flatten();
    let log_level = cli_args
        .log_level
        .as_deref()
        .or_else(|| config.as_ref().and_then(|c| c.log_level.as_deref()));
    let log_to_file =
        cli_args.log_file || config.as_ref().and_then(|c| c.log_to_file).unwrap_or(false);
    let _log_guard = logging::init(log_level, log_to_file)?;
    if let Err(e) = &settings {
        warn!("Ignoring user settings: {:#}", e);
    }

    let palette = cli_args.resolve_palette(config.as_ref())?;
    let registry = ThemeRegistry::new(&palette);
    let request = cli_args.paint_request()?;

    let list = paint(&registry, request);
    info!(
        "Painted {} {} of {} ({} command(s))",
        request.state,
        request.part.as_str(),
        request.kind,
        list.len()
    );
    println!("{}", list.to_json_pretty()?);
    Ok(())
}

/// Paint one widget part, background first then foreground, into a new
/// display list
pub fn paint(registry: &ThemeRegistry, request: PaintRequest) -> DisplayList {
    let theme = registry.resolve(request.kind);
    let mut list = DisplayList::new();

    theme.draw_background(
        ThemePart::new(&mut list, request.bounds)
            .with_state(request.state)
            .with_part(request.part),
    );
    theme.draw_foreground(
        ThemePart::new(&mut list, request.bounds)
            .with_state(request.state)
            .with_part(request.part),
    );

    list
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rendering::DrawCommand;
    use crate::ui::theme_system::{Part, ThemePalette, WidgetKind, WidgetState};
    use kurbo::Rect;

    fn request(kind: WidgetKind, part: Part) -> PaintRequest {
        PaintRequest {
            kind,
            state: WidgetState::Disabled,
            part,
            bounds: Rect::new(0.0, 0.0, 100.0, 40.0),
        }
    }

    #[test]
    fn test_paint_picture_box() {
        let palette = ThemePalette::default();
        let registry = ThemeRegistry::new(&palette);

        let list = paint(&registry, request(WidgetKind::PictureBox, Part::Background));
        assert_eq!(list.len(), 1);
        assert!(matches!(list.commands()[0], DrawCommand::FillRect { .. }));
        assert_eq!(
            list.commands()[0].color(),
            palette.background_for(WidgetState::Disabled)
        );

        let list = paint(&registry, request(WidgetKind::PictureBox, Part::Border));
        assert!(matches!(list.commands()[0], DrawCommand::FillPath { .. }));
    }

    #[test]
    fn test_paint_unthemed_kind() {
        let registry = ThemeRegistry::default();
        assert!(paint(&registry, request(WidgetKind::ScrollBar, Part::Background)).is_empty());
    }
}
