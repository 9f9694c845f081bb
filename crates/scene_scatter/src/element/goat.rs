//! Goat element: a smaller cousin of the cow, no spots.
use glam::Vec2;
use rand::RngCore;

use crate::canvas::DrawSurface;
use crate::color::Color;
use crate::element::style::ElementStyle;
use crate::element::SceneElement;
use crate::geometry::Rect;

const BODY_WIDTH: f32 = 40.0;
const BODY_HEIGHT: f32 = 20.0;
const LEG_HEIGHT: f32 = 15.0;

#[derive(Debug, Clone)]
pub struct Goat {
    style: ElementStyle,
}

impl Goat {
    pub fn new(style: ElementStyle) -> Self {
        Self { style }
    }

    pub fn default_color() -> Color {
        Color::BLACK
    }
}

impl Default for Goat {
    fn default() -> Self {
        Self::new(ElementStyle::new(Self::default_color()))
    }
}

impl SceneElement for Goat {
    fn draw(&self, surface: &mut dyn DrawSurface, position: Vec2, _rng: &mut dyn RngCore) {
        let bw = BODY_WIDTH * self.style.size;
        let bh = BODY_HEIGHT * self.style.size;
        let fill = self.style.fill();
        let (x, y) = (position.x, position.y);

        // Body
        surface.fill_rect(Rect::new(position, position + Vec2::new(bw, bh)), fill);

        // Legs
        for i in 0..4 {
            let leg_x = x + i as f32 * bw / 3.0;
            surface.fill_rect(
                Rect::new(
                    Vec2::new(leg_x, y + bh),
                    Vec2::new(leg_x + 4.0, y + bh + LEG_HEIGHT),
                ),
                fill,
            );
        }

        // Head
        surface.fill_rect(
            Rect::new(Vec2::new(x - 15.0, y), Vec2::new(x, y + 10.0)),
            fill,
        );

        // Horn
        surface.line(
            Vec2::new(x - 10.0, y + 10.0),
            Vec2::new(x - 10.0, y + 15.0),
            fill,
            2,
        );
    }

    fn bounds(&self, position: Vec2) -> Rect {
        let bw = BODY_WIDTH * self.style.size;
        let bh = BODY_HEIGHT * self.style.size;
        Rect::new(
            position + Vec2::new(-15.0, 0.0),
            position + Vec2::new(bw, bh + LEG_HEIGHT),
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
    fn bounds_include_head_overhang() {
        let goat = Goat::default();
        let bounds = goat.bounds(Vec2::new(100.0, 100.0));
        assert_eq!(bounds.min, Vec2::new(85.0, 100.0));
        assert_eq!(bounds.max, Vec2::new(140.0, 135.0));
        exercise(&goat, Vec2::new(100.0, 100.0));
    }
}
