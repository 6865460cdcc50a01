use crate::ui::theme_system::{
    draw_border, fill_background, Part, ThemePalette, ThemePart, WidgetState, WidgetTheme,
};
use bevy_color::Color;

/// Background fills resolved from a palette, one per state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackgroundTable {
    pub normal: Color,
    pub disabled: Color,
    pub read_only: Color,
    pub focused: Color,
    pub border: Color,
    pub border_width: f64,
}

impl BackgroundTable {
    pub fn from_palette(palette: &ThemePalette) -> Self {
        Self {
            normal: palette.background_for(WidgetState::Normal),
            disabled: palette.background_for(WidgetState::Disabled),
            read_only: palette.background_for(WidgetState::ReadOnly),
            focused: palette.background_for(WidgetState::Focused),
            border: palette.border_color(),
            border_width: palette.border_width,
        }
    }

    pub fn fill_for(&self, state: WidgetState) -> Color {
        match state {
            WidgetState::Normal => self.normal,
            WidgetState::Disabled => self.disabled,
            WidgetState::ReadOnly => self.read_only,
            WidgetState::Focused => self.focused,
        }
    }
}

/// Theme for picture-box containers.
///
/// The background part is one solid fill over the bounds. Read-only and
/// focused picture boxes look like normal ones unless the palette gives
/// them their own fill; disabled ones use the blended fill. The border part
/// is a frame in the palette's border color whatever the state. Flags are
/// ignored.
///
/// Instances come from [`ThemeRegistry`](crate::ui::theme_system::ThemeRegistry).
#[derive(Debug)]
pub struct PictureBoxTheme {
    table: BackgroundTable,
}

impl PictureBoxTheme {
    pub(crate) fn new(palette: &ThemePalette) -> Self {
        Self {
            table: BackgroundTable::from_palette(palette),
        }
    }

    pub fn table(&self) -> &BackgroundTable {
        &self.table
    }
}

impl WidgetTheme for PictureBoxTheme {
    fn name(&self) -> &'static str {
        "PictureBox"
    }

    fn draw_background(&self, part: ThemePart<'_>) {
        let region = part.part;
        match region {
            Part::Background => {
                let color = self.table.fill_for(part.state);
                fill_background(part, color);
            }
            Part::Border => draw_border(part, self.table.border, self.table.border_width),
        }
    }
}
