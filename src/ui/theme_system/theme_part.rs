//! Per-call paint descriptor
//!
//! A `ThemePart` is built by the caller right before a draw call and handed
//! to the theme by value. The surface it carries is a borrow that ends with
//! the call, so a theme has no way to hang on to it.

use crate::rendering::DrawingSink;
use bitflags::bitflags;
use kurbo::{Affine, Rect};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Visual state of the widget being painted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WidgetState {
    #[default]
    Normal,
    Disabled,
    ReadOnly,
    Focused,
}

impl WidgetState {
    pub const ALL: [WidgetState; 4] = [
        WidgetState::Normal,
        WidgetState::Disabled,
        WidgetState::ReadOnly,
        WidgetState::Focused,
    ];

    /// Parse a state name as written on the command line
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "normal" => Some(WidgetState::Normal),
            "disabled" => Some(WidgetState::Disabled),
            "read-only" | "readonly" | "read_only" => Some(WidgetState::ReadOnly),
            "focused" => Some(WidgetState::Focused),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            WidgetState::Normal => "normal",
            WidgetState::Disabled => "disabled",
            WidgetState::ReadOnly => "read-only",
            WidgetState::Focused => "focused",
        }
    }

    pub fn all_names() -> Vec<&'static str> {
        Self::ALL.iter().map(|state| state.as_str()).collect()
    }
}

impl fmt::Display for WidgetState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which region of the widget a call paints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Part {
    #[default]
    Background,
    Border,
}

impl Part {
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "background" => Some(Part::Background),
            "border" => Some(Part::Border),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Part::Background => "background",
            Part::Border => "border",
        }
    }
}

bitflags! {
    /// Decorative options a caller may attach to a part
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct PartFlags: u32 {
        const HOVERED = 1 << 0;
        const PRESSED = 1 << 1;
        const CHECKED = 1 << 2;
        /// Background does not follow scroll or transform animation
        const STATIC_BACKGROUND = 1 << 3;
    }
}

/// Everything a theme needs to paint one part of one widget
pub struct ThemePart<'a> {
    pub surface: &'a mut dyn DrawingSink,
    pub bounds: Rect,
    pub state: WidgetState,
    pub flags: PartFlags,
    pub part: Part,
    /// Widget-to-surface transform, forwarded untouched to the sink
    pub transform: Affine,
}

impl<'a> ThemePart<'a> {
    /// A background part in the normal state with no flags and no transform
    pub fn new(surface: &'a mut dyn DrawingSink, bounds: Rect) -> Self {
        Self {
            surface,
            bounds,
            state: WidgetState::Normal,
            flags: PartFlags::empty(),
            part: Part::Background,
            transform: Affine::IDENTITY,
        }
    }

    pub fn with_state(mut self, state: WidgetState) -> Self {
        self.state = state;
        self
    }

    pub fn with_flags(mut self, flags: PartFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn with_part(mut self, part: Part) -> Self {
        self.part = part;
        self
    }

    pub fn with_transform(mut self, transform: Affine) -> Self {
        self.transform = transform;
        self
    }
}

impl fmt::Debug for ThemePart<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemePart")
            .field("bounds", &self.bounds)
            .field("state", &self.state)
            .field("flags", &self.flags)
            .field("part", &self.part)
            .field("transform", &self.transform)
            .finish_non_exhaustive()
    }
}
