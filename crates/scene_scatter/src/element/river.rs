//! River element: a broad polygon with randomized wave arcs.
use glam::Vec2;
use rand::RngCore;

use crate::canvas::DrawSurface;
use crate::color::Color;
use crate::element::style::ElementStyle;
use crate::element::SceneElement;
use crate::geometry::Rect;
use crate::plan::rand_range_i32;

const WIDTH: f32 = 800.0;
const HEIGHT: f32 = 200.0;
const WAVE_SPACING: f32 = 50.0;

#[derive(Debug, Clone)]
pub struct River {
    style: ElementStyle,
    wave_color: Color,
}

impl River {
    pub fn new(style: ElementStyle) -> Self {
        Self {
            style,
            wave_color: Color::rgb(173, 216, 230),
        }
    }

    pub fn default_color() -> Color {
        Color::rgb(0, 0, 255)
    }
}

impl Default for River {
    fn default() -> Self {
        Self::new(ElementStyle::new(Self::default_color()))
    }
}

impl SceneElement for River {
    fn draw(&self, surface: &mut dyn DrawSurface, position: Vec2, rng: &mut dyn RngCore) {
        let w = WIDTH * self.style.size;
        let h = HEIGHT * self.style.size;
        let (x, y) = (position.x, position.y);

        surface.fill_polygon(
            &[
                Vec2::new(x, y),
                Vec2::new(x + w, y + h * 0.5),
                Vec2::new(x + w, y + h),
                Vec2::new(x, y + h),
            ],
            self.style.fill(),
        );

        // Wave detail along the midline; heights are per-draw random.
        let mut offset = 0.0;
        while offset < w {
            let wave_height = rand_range_i32(rng, 5, 15) as f32;
            let center = Vec2::new(
                x + offset + WAVE_SPACING * 0.5,
                y + h * 0.5 + wave_height * 0.5,
            );
            surface.arc(
                center,
                WAVE_SPACING * 0.5,
                wave_height * 0.5,
                0.0,
                180.0,
                self.style.tint(self.wave_color),
                2,
            );
            offset += WAVE_SPACING;
        }
    }

    fn bounds(&self, position: Vec2) -> Rect {
        let w = WIDTH * self.style.size;
        let h = HEIGHT * self.style.size;
        Rect::new(position, position + Vec2::new(w, h))
    }

    fn style(&self) -> &ElementStyle {
        &self.style
    }
}
