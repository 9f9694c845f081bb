//! Bird element: body, head, beak, and two wing strokes.
use glam::Vec2;
use rand::RngCore;

use crate::canvas::DrawSurface;
use crate::color::Color;
use crate::element::style::ElementStyle;
use crate::element::SceneElement;
use crate::geometry::Rect;

const BODY_SIZE: f32 = 20.0;

#[derive(Debug, Clone)]
pub struct Bird {
    style: ElementStyle,
}

impl Bird {
    pub fn new(style: ElementStyle) -> Self {
        Self { style }
    }

    pub fn default_color() -> Color {
        Color::BLACK
    }
}

impl Default for Bird {
    fn default() -> Self {
        Self::new(ElementStyle::new(Self::default_color()))
    }
}

impl SceneElement for Bird {
    fn draw(&self, surface: &mut dyn DrawSurface, position: Vec2, _rng: &mut dyn RngCore) {
        let size = BODY_SIZE * self.style.size;
        let fill = self.style.fill();
        let (x, y) = (position.x, position.y);

        // Body
        surface.fill_ellipse(
            Vec2::new(x + size * 0.5, y + size * 0.25),
            size * 0.5,
            size * 0.25,
            fill,
        );

        // Head
        surface.fill_ellipse(Vec2::new(x + size, y), 5.0, 5.0, fill);

        // Beak
        surface.fill_polygon(
            &[
                Vec2::new(x + size / 3.0, y),
                Vec2::new(x + size * 0.5, y - 15.0),
                Vec2::new(x + size * 0.5, y),
            ],
            fill,
        );

        // Wings
        let shoulder = Vec2::new(x, y + size * 0.5);
        surface.line(shoulder, Vec2::new(x - 10.0, y + size), fill, 2);
        surface.line(shoulder, Vec2::new(x - 10.0, y + size * 0.5), fill, 2);
    }

    fn bounds(&self, position: Vec2) -> Rect {
        let size = BODY_SIZE * self.style.size;
        Rect::new(
            position + Vec2::new(-10.0, -5.0),
            position + Vec2::new(size + 5.0, size),
        )
    }

    fn style(&self) -> &ElementStyle {
        &self.style
    }
}
