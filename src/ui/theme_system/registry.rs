//! Theme registry
//!
//! Owns one shared theme per widget kind. Themes have no public constructor;
//! callers get them from here and hold `Arc`s for as long as they like.

use super::embedded_themes;
use super::palette::ThemePalette;
use super::widget_theme::WidgetTheme;
use crate::ui::themes::{PictureBoxTheme, UnthemedWidget};
use anyhow::{anyhow, Result};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, OnceLock};
use tracing::{debug, warn};

/// Kinds of widget found in the forms layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetKind {
    PushButton,
    CheckBox,
    ComboBox,
    DateTimePicker,
    Edit,
    ListBox,
    MonthCalendar,
    PictureBox,
    ScrollBar,
    Caret,
    Barcode,
}

impl WidgetKind {
    pub const ALL: [WidgetKind; 11] = [
        WidgetKind::PushButton,
        WidgetKind::CheckBox,
        WidgetKind::ComboBox,
        WidgetKind::DateTimePicker,
        WidgetKind::Edit,
        WidgetKind::ListBox,
        WidgetKind::MonthCalendar,
        WidgetKind::PictureBox,
        WidgetKind::ScrollBar,
        WidgetKind::Caret,
        WidgetKind::Barcode,
    ];

    /// Parse a kind from its kebab-case name
    pub fn parse(name: &str) -> Option<Self> {
        let name = name.to_ascii_lowercase().replace('_', "-");
        Self::ALL.into_iter().find(|kind| kind.as_str() == name)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            WidgetKind::PushButton => "push-button",
            WidgetKind::CheckBox => "check-box",
            WidgetKind::ComboBox => "combo-box",
            WidgetKind::DateTimePicker => "date-time-picker",
            WidgetKind::Edit => "edit",
            WidgetKind::ListBox => "list-box",
            WidgetKind::MonthCalendar => "month-calendar",
            WidgetKind::PictureBox => "picture-box",
            WidgetKind::ScrollBar => "scroll-bar",
            WidgetKind::Caret => "caret",
            WidgetKind::Barcode => "barcode",
        }
    }

    pub fn all_names() -> Vec<&'static str> {
        Self::ALL.iter().map(|kind| kind.as_str()).collect()
    }
}

impl fmt::Display for WidgetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps widget kinds to their shared theme
pub struct ThemeRegistry {
    palette_name: String,
    themes: HashMap<WidgetKind, Arc<dyn WidgetTheme>>,
    fallback: Arc<dyn WidgetTheme>,
}

impl ThemeRegistry {
    /// Build every theme the crate knows from one palette
    pub fn new(palette: &ThemePalette) -> Self {
        let mut themes: HashMap<WidgetKind, Arc<dyn WidgetTheme>> = HashMap::new();
        themes.insert(
            WidgetKind::PictureBox,
            Arc::new(PictureBoxTheme::new(palette)),
        );

        debug!(
            "Theme registry built from palette '{}' with {} theme(s)",
            palette.name,
            themes.len()
        );

        Self {
            palette_name: palette.name.clone(),
            themes,
            fallback: Arc::new(UnthemedWidget),
        }
    }

    pub fn palette_name(&self) -> &str {
        &self.palette_name
    }

    /// Theme registered for `kind`, if any
    pub fn get(&self, kind: WidgetKind) -> Option<Arc<dyn WidgetTheme>> {
        self.themes.get(&kind).cloned()
    }

    /// Theme for `kind`, falling back to a theme that paints nothing
    pub fn resolve(&self, kind: WidgetKind) -> Arc<dyn WidgetTheme> {
        match self.get(kind) {
            Some(theme) => theme,
            None => {
                debug!("No theme for widget kind '{}', using fallback", kind);
                Arc::clone(&self.fallback)
            }
        }
    }

    /// Theme for `kind`, or an error when none is registered
    pub fn require(&self, kind: WidgetKind) -> Result<Arc<dyn WidgetTheme>> {
        self.get(kind).ok_or_else(|| {
            let mut themed: Vec<_> = self.themed_kinds().map(WidgetKind::as_str).collect();
            themed.sort_unstable();
            anyhow!(
                "No theme registered for widget kind '{kind}'\nThemed kinds: {}",
                themed.join(", ")
            )
        })
    }

    pub fn themed_kinds(&self) -> impl Iterator<Item = WidgetKind> + '_ {
        self.themes.keys().copied()
    }
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::new(&ThemePalette::default())
    }
}

impl fmt::Debug for ThemeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut themed: Vec<_> = self.themed_kinds().collect();
        themed.sort_by_key(|kind| kind.as_str());
        f.debug_struct("ThemeRegistry")
            .field("palette_name", &self.palette_name)
            .field("themed_kinds", &themed)
            .finish()
    }
}

static GLOBAL_REGISTRY: OnceLock<ThemeRegistry> = OnceLock::new();

/// Process-wide registry built from the embedded default palette
pub fn get_theme_registry() -> &'static ThemeRegistry {
    GLOBAL_REGISTRY.get_or_init(|| {
        let palette = embedded_themes::default_palette().unwrap_or_else(|e| {
            warn!("Embedded default palette is invalid, using built-in colors: {e}");
            ThemePalette::default()
        });
        ThemeRegistry::new(&palette)
    })
}
