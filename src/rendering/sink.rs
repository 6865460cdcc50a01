//! Drawing sink abstraction
//!
//! Themes never own a graphics surface. They borrow one of these for the
//! duration of a single paint call and push fill primitives into it. How the
//! primitives are rasterized (or whether they fail) is the sink's business.

use bevy_color::Color;
use kurbo::{Affine, BezPath, Rect};
use serde::{Deserialize, Serialize};

/// Winding rule used when filling a path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FillRule {
    #[default]
    NonZero,
    /// Alternate fill; nested subpaths punch holes (used for borders)
    EvenOdd,
}

/// Graphics surface that accepts paint primitives
///
/// Implementations are expected to be confined to the calling thread. The
/// primitive set is deliberately small: sibling themes that need strokes,
/// image blits or text add methods here, not in the themes.
pub trait DrawingSink {
    /// Fill an axis-aligned rectangle, in widget space, with a solid color
    fn fill_rect(&mut self, rect: Rect, color: Color, transform: Affine);

    /// Fill an arbitrary path with a solid color
    fn fill_path(&mut self, path: &BezPath, rule: FillRule, color: Color, transform: Affine);
}

impl<S: DrawingSink + ?Sized> DrawingSink for &mut S {
    fn fill_rect(&mut self, rect: Rect, color: Color, transform: Affine) {
        (**self).fill_rect(rect, color, transform);
    }

    fn fill_path(&mut self, path: &BezPath, rule: FillRule, color: Color, transform: Affine) {
        (**self).fill_path(path, rule, color, transform);
    }
}
