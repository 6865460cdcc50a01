//! Widget theme interface
//!
//! Every themed widget kind implements `WidgetTheme`. A theme maps the state
//! and geometry in a `ThemePart` to drawing calls on the part's surface and
//! nothing else: it keeps no per-call state, never fails, and never holds on
//! to the surface.

use super::theme_part::ThemePart;
use crate::geometry::{border_ring, has_paintable_area};
use crate::rendering::FillRule;
use bevy_color::Color;
use tracing::trace;

/// Renderer for the visual parts of one kind of widget
///
/// Implementations must be idempotent: painting the same part twice issues
/// the same primitives twice. Themes are shared across threads, so they
/// hold only data that is immutable after construction.
pub trait WidgetTheme: Send + Sync {
    /// Human readable name, used in logs
    fn name(&self) -> &'static str;

    /// Paint the part's background region. Paints nothing by default.
    fn draw_background(&self, part: ThemePart<'_>) {
        trace!(theme = self.name(), ?part, "no background for this theme");
    }

    /// Paint content drawn on top of the background. Paints nothing by default.
    fn draw_foreground(&self, part: ThemePart<'_>) {
        trace!(theme = self.name(), ?part, "no foreground for this theme");
    }
}

/// Fill the whole of the part's bounds with one color.
///
/// Issues a single `fill_rect`, or nothing when the bounds have no area.
pub fn fill_background(part: ThemePart<'_>, color: Color) {
    if !has_paintable_area(part.bounds) {
        trace!(bounds = ?part.bounds, "skipping fill of empty bounds");
        return;
    }
    part.surface.fill_rect(part.bounds, color, part.transform);
}

/// Frame the part's bounds with a border `width` units thick.
///
/// Issues a single even-odd `fill_path`, or nothing when the bounds have no
/// area or the width is not positive.
pub fn draw_border(part: ThemePart<'_>, color: Color, width: f64) {
    if !has_paintable_area(part.bounds) || width.is_nan() || width <= 0.0 {
        trace!(bounds = ?part.bounds, width, "skipping empty border");
        return;
    }
    let ring = border_ring(part.bounds, width);
    part.surface
        .fill_path(&ring, FillRule::EvenOdd, color, part.transform);
}
