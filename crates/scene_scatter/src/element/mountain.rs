//! Mountain element: three layered ridge polygons.
use glam::Vec2;
use rand::RngCore;

use crate::canvas::DrawSurface;
use crate::color::Color;
use crate::element::style::ElementStyle;
use crate::element::SceneElement;
use crate::geometry::Rect;

const WIDTH: f32 = 400.0;
const HEIGHT: f32 = 200.0;

#[derive(Debug, Clone)]
pub struct Mountain {
    style: ElementStyle,
    secondary_color: Color,
    tertiary_color: Color,
}

impl Mountain {
    pub fn new(style: ElementStyle) -> Self {
        Self {
            style,
            secondary_color: Color::rgb(0x66, 0x99, 0xCC),
            tertiary_color: Color::rgb(0x33, 0x66, 0x99),
        }
    }

    pub fn default_color() -> Color {
        Color::rgb(0xA0, 0xC4, 0xFF)
    }
}

impl Default for Mountain {
    fn default() -> Self {
        Self::new(ElementStyle::new(Self::default_color()))
    }
}

impl SceneElement for Mountain {
    fn draw(&self, surface: &mut dyn DrawSurface, position: Vec2, _rng: &mut dyn RngCore) {
        let w = WIDTH * self.style.size;
        let h = HEIGHT * self.style.size;
        let (x, y) = (position.x, position.y);

        // Main ridge line with two peaks.
        surface.fill_polygon(
            &[
                Vec2::new(x, y),
                Vec2::new(x + w * 0.25, y - h * 0.5),
                Vec2::new(x + w * 0.5, y),
                Vec2::new(x + w * 0.75, y - h / 3.0),
                Vec2::new(x + w, y),
                Vec2::new(x + w, y + h),
                Vec2::new(x, y + h),
            ],
            self.style.fill(),
        );

        // Secondary ridge behind the foreground slope.
        surface.fill_polygon(
            &[
                Vec2::new(x, y - h * 0.25),
                Vec2::new(x + w / 3.0, y - h * 0.5),
                Vec2::new(x + 2.0 * w / 3.0, y - h * 0.25),
                Vec2::new(x + w, y - h / 3.0),
                Vec2::new(x + w, y),
                Vec2::new(x, y),
            ],
            self.style.tint(self.secondary_color),
        );

        // Foreground foothills.
        surface.fill_polygon(
            &[
                Vec2::new(x, y + h * 0.25),
                Vec2::new(x + w * 0.5, y),
                Vec2::new(x + w, y + h * 0.25),
                Vec2::new(x + w, y + h * 0.5),
                Vec2::new(x, y + h * 0.5),
            ],
            self.style.tint(self.tertiary_color),
        );
    }

    fn bounds(&self, position: Vec2) -> Rect {
        let w = WIDTH * self.style.size;
        let h = HEIGHT * self.style.size;
        Rect::new(
            position + Vec2::new(0.0, -h * 0.5),
            position + Vec2::new(w, h),
        )
    }

    fn style(&self) -> &ElementStyle {
        &self.style
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::test_support::exercise;

    #[test]
    fn bounds_span_peaks_and_base() {
        let mountain = Mountain::default();
        let bounds = mountain.bounds(Vec2::new(0.0, 300.0));
        assert_eq!(bounds.min, Vec2::new(0.0, 200.0));
        assert_eq!(bounds.max, Vec2::new(400.0, 500.0));
        exercise(&mountain, Vec2::new(0.0, 300.0));
    }
}
