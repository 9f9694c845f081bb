//! Drawing-surface abstraction consumed by scene elements.
//!
//! Elements never rasterize pixels themselves; they describe shapes through
//! the fixed primitive vocabulary of [`DrawSurface`]. The raster backend in
//! [`raster`] implements the vocabulary on top of an RGBA pixel buffer.
use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::geometry::Rect;

pub mod raster;

pub use raster::RasterCanvas;

/// Supported output image formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ImageFormat {
    Png,
    Jpeg,
    Bmp,
}

impl ImageFormat {
    /// File extension for this format, lower-case without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Jpeg => "jpeg",
            ImageFormat::Bmp => "bmp",
        }
    }

    /// Whether the format is lossless; quality settings are ignored for
    /// lossless formats.
    pub fn is_lossless(&self) -> bool {
        !matches!(self, ImageFormat::Jpeg)
    }
}

/// Fixed primitive vocabulary every drawing surface provides.
///
/// All coordinates are in pixels with the origin at the top-left corner.
/// Primitives taking a stroke width draw outlines; the `fill_*` primitives
/// fill their shape. Colors carry alpha and are blended over existing pixels.
pub trait DrawSurface {
    fn width(&self) -> u32;

    fn height(&self) -> u32;

    /// Draw a line segment from `from` to `to`.
    fn line(&mut self, from: Vec2, to: Vec2, color: Color, stroke_width: u32);

    /// Fill an axis-aligned ellipse centered at `center` with radii `rx`/`ry`.
    fn fill_ellipse(&mut self, center: Vec2, rx: f32, ry: f32, color: Color);

    /// Fill the polygon described by `points`. Fewer than three points is a
    /// no-op.
    fn fill_polygon(&mut self, points: &[Vec2], color: Color);

    /// Fill an axis-aligned rectangle.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Stroke an elliptical arc from `start_deg` to `end_deg` (degrees,
    /// clockwise, 0 at the positive x axis).
    #[allow(clippy::too_many_arguments)]
    fn arc(
        &mut self,
        center: Vec2,
        rx: f32,
        ry: f32,
        start_deg: f32,
        end_deg: f32,
        color: Color,
        stroke_width: u32,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extensions_are_lowercase() {
        assert_eq!(ImageFormat::Png.extension(), "png");
        assert_eq!(ImageFormat::Jpeg.extension(), "jpeg");
        assert_eq!(ImageFormat::Bmp.extension(), "bmp");
    }

    #[test]
    fn only_jpeg_is_lossy() {
        assert!(ImageFormat::Png.is_lossless());
        assert!(ImageFormat::Bmp.is_lossless());
        assert!(!ImageFormat::Jpeg.is_lossless());
    }

    #[test]
    fn serde_uses_uppercase_names() {
        let json = serde_json::to_string(&ImageFormat::Jpeg).unwrap();
        assert_eq!(json, "\"JPEG\"");
        let parsed: ImageFormat = serde_json::from_str("\"PNG\"").unwrap();
        assert_eq!(parsed, ImageFormat::Png);
    }
}
