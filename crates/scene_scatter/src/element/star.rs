//! Star element: a small filled dot.
use glam::Vec2;
use rand::RngCore;

use crate::canvas::DrawSurface;
use crate::color::Color;
use crate::element::style::ElementStyle;
use crate::element::SceneElement;
use crate::geometry::Rect;

const SIZE: f32 = 4.0;

#[derive(Debug, Clone)]
pub struct Star {
    style: ElementStyle,
}

impl Star {
    pub fn new(style: ElementStyle) -> Self {
        Self { style }
    }

    pub fn default_color() -> Color {
        Color::WHITE
    }
}

impl Default for Star {
    fn default() -> Self {
        Self::new(ElementStyle::new(Self::default_color()))
    }
}

impl SceneElement for Star {
    fn draw(&self, surface: &mut dyn DrawSurface, position: Vec2, _rng: &mut dyn RngCore) {
        let size = SIZE * self.style.size;
        surface.fill_ellipse(
            position + Vec2::splat(size * 0.5),
            size * 0.5,
            size * 0.5,
            self.style.fill(),
        );
    }

    fn bounds(&self, position: Vec2) -> Rect {
        let size = SIZE * self.style.size;
        Rect::new(position, position + Vec2::splat(size))
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
    fn small_but_not_degenerate() {
        let star = Star::default();
        let bounds = star.bounds(Vec2::new(10.0, 10.0));
        assert_eq!(bounds.width(), 4.0);
        assert!(!bounds.is_degenerate());
        exercise(&star, Vec2::new(10.0, 10.0));
    }
}
