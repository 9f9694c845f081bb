//! Sun element: filled disc with radial rays.
use glam::Vec2;
use rand::RngCore;

use crate::canvas::DrawSurface;
use crate::color::Color;
use crate::element::style::ElementStyle;
use crate::element::SceneElement;
use crate::geometry::Rect;

const BODY_RADIUS: f32 = 40.0;
const RAY_COUNT: u32 = 12;
const RAY_LENGTH: f32 = 20.0;

#[derive(Debug, Clone)]
pub struct Sun {
    style: ElementStyle,
}

impl Sun {
    pub fn new(style: ElementStyle) -> Self {
        Self { style }
    }

    pub fn default_color() -> Color {
        Color::rgb(255, 255, 0)
    }
}

impl Default for Sun {
    fn default() -> Self {
        Self::new(ElementStyle::new(Self::default_color()))
    }
}

impl SceneElement for Sun {
    fn draw(&self, surface: &mut dyn DrawSurface, position: Vec2, _rng: &mut dyn RngCore) {
        let radius = BODY_RADIUS * self.style.size;
        let ray_length = RAY_LENGTH * self.style.size;
        let fill = self.style.fill();

        surface.fill_ellipse(position, radius, radius, fill);

        for i in 0..RAY_COUNT {
            let angle = (i as f32 * (360.0 / RAY_COUNT as f32)).to_radians();
            let direction = Vec2::new(angle.cos(), angle.sin());
            let from = position + direction * radius;
            let to = position + direction * (radius + ray_length);
            surface.line(from, to, fill, self.style.stroke_width);
        }
    }

    fn bounds(&self, position: Vec2) -> Rect {
        // Rays extend the disc by the unscaled ray length.
        let half = BODY_RADIUS * self.style.size + RAY_LENGTH;
        Rect::from_center_size(position, Vec2::splat(half * 2.0))
    }

    fn style(&self) -> &ElementStyle {
        &self.style
    }
}
