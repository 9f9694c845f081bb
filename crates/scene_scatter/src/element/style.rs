//! Style values shared by all draws of a cached element instance.
use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Immutable style configuration passed into every draw call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElementStyle {
    /// Primary fill color.
    pub color: Color,
    /// Relative size multiplier, > 0.
    pub size: f32,
    /// Opacity in [0, 1].
    pub opacity: f32,
    /// Stroke width in pixels, >= 1.
    pub stroke_width: u32,
    /// Rotation in degrees. Reserved for elements that support it.
    pub rotation: f32,
}

impl ElementStyle {
    /// Create a style with the given color and the default scalar settings.
    pub fn new(color: Color) -> Self {
        Self {
            color,
            size: 1.0,
            opacity: 1.0,
            stroke_width: 1,
            rotation: 0.0,
        }
    }

    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    pub fn with_stroke_width(mut self, stroke_width: u32) -> Self {
        self.stroke_width = stroke_width.max(1);
        self
    }

    pub fn with_rotation(mut self, rotation: f32) -> Self {
        self.rotation = rotation;
        self
    }

    /// The style's color with its opacity applied to the alpha channel.
    pub fn fill(&self) -> Color {
        self.color.with_opacity(self.opacity)
    }

    /// A different color with this style's opacity applied, for elements that
    /// paint secondary parts (foliage, snow layers, spots).
    pub fn tint(&self, color: Color) -> Color {
        color.with_opacity(self.opacity)
    }
}

impl Default for ElementStyle {
    fn default() -> Self {
        Self::new(Color::BLACK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_clamps_out_of_range_values() {
        let style = ElementStyle::new(Color::WHITE)
            .with_opacity(3.0)
            .with_stroke_width(0);
        assert_eq!(style.opacity, 1.0);
        assert_eq!(style.stroke_width, 1);
    }

    #[test]
    fn fill_applies_opacity() {
        let style = ElementStyle::new(Color::rgb(1, 2, 3)).with_opacity(0.0);
        assert_eq!(style.fill().a, 0);
    }
}
