//! Geometry utility functions
//!
//! Shared rectangle helpers used by the themes and the CLI.

use anyhow::{anyhow, Context, Result};
use kurbo::{BezPath, Rect, Shape};

// Rectangles are exact; tolerance only matters for curves
const PATH_TOLERANCE: f64 = 0.1;

/// True when a rectangle covers some area.
///
/// Zero, negative and NaN extents all count as empty, so an empty part never
/// turns into a degenerate primitive.
pub fn has_paintable_area(rect: Rect) -> bool {
    rect.width() > 0.0 && rect.height() > 0.0
}

/// Build the ring between `bounds` and `bounds` shrunk by `width` on each side.
///
/// Meant to be filled with the even-odd rule. When the inner rectangle would
/// have no area the ring is the whole of `bounds`.
pub fn border_ring(bounds: Rect, width: f64) -> BezPath {
    let mut path = bounds.to_path(PATH_TOLERANCE);
    // kurbo insets grow the rect when positive, so a negative one shrinks it
    let inner = bounds.inset(-width);
    if has_paintable_area(inner) {
        path.extend(inner.to_path(PATH_TOLERANCE));
    }
    path
}

/// Parse `x,y,width,height` into a rectangle
pub fn parse_bounds(value: &str) -> Result<Rect> {
    let parts = value
        .split(',')
        .map(|part| {
            part.trim()
                .parse::<f64>()
                .with_context(|| format!("Invalid number '{}' in bounds", part.trim()))
        })
        .collect::<Result<Vec<_>>>()?;

    let [x, y, width, height] = parts[..] else {
        return Err(anyhow!(
            "Bounds must have four values (x,y,width,height), got {}",
            parts.len()
        ));
    };

    if width < 0.0 || height < 0.0 {
        return Err(anyhow!(
            "Bounds width and height must not be negative: {width}x{height}"
        ));
    }

    Ok(Rect::from_origin_size((x, y), (width, height)))
}
