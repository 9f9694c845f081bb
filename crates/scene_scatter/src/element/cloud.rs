//! Cloud element: a row of overlapping ellipses.
use glam::Vec2;
use rand::RngCore;

use crate::canvas::DrawSurface;
use crate::color::Color;
use crate::element::style::ElementStyle;
use crate::element::SceneElement;
use crate::geometry::Rect;

const SIZE: f32 = 100.0;
const PUFF_COUNT: u32 = 5;
const PUFF_OFFSET: f32 = 20.0;

#[derive(Debug, Clone)]
pub struct Cloud {
    style: ElementStyle,
}

impl Cloud {
    pub fn new(style: ElementStyle) -> Self {
        Self { style }
    }

    pub fn default_color() -> Color {
        Color::WHITE
    }
}

impl Default for Cloud {
    fn default() -> Self {
        Self::new(ElementStyle::new(Self::default_color()))
    }
}

impl SceneElement for Cloud {
    fn draw(&self, surface: &mut dyn DrawSurface, position: Vec2, _rng: &mut dyn RngCore) {
        let size = SIZE * self.style.size;
        let fill = self.style.fill();

        for i in 0..PUFF_COUNT {
            let offset = i as f32 * PUFF_OFFSET;
            let center = position + Vec2::new(offset + size * 0.25, size / 6.0);
            surface.fill_ellipse(center, size * 0.25, size / 6.0, fill);
        }
    }

    fn bounds(&self, position: Vec2) -> Rect {
        let size = SIZE * self.style.size;
        let trailing = (PUFF_COUNT - 1) as f32 * PUFF_OFFSET;
        Rect::new(position, position + Vec2::new(size + trailing, size / 3.0))
    }

    fn style(&self) -> &ElementStyle {
        &self.style
    }
}
