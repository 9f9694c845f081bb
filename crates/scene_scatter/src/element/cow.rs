//! Cow element: boxy body with legs, horns, and random spots.
use glam::Vec2;
use rand::RngCore;

use crate::canvas::DrawSurface;
use crate::color::Color;
use crate::element::style::ElementStyle;
use crate::element::SceneElement;
use crate::geometry::Rect;
use crate::plan::rand_range_i32;

const BODY_WIDTH: f32 = 60.0;
const BODY_HEIGHT: f32 = 30.0;
const LEG_HEIGHT: f32 = 20.0;
const SPOT_COUNT: u32 = 5;

#[derive(Debug, Clone)]
pub struct Cow {
    style: ElementStyle,
    spot_color: Color,
}

impl Cow {
    pub fn new(style: ElementStyle) -> Self {
        Self {
            style,
            spot_color: Color::WHITE,
        }
    }

    pub fn default_color() -> Color {
        Color::BLACK
    }
}

impl Default for Cow {
    fn default() -> Self {
        Self::new(ElementStyle::new(Self::default_color()))
    }
}

impl SceneElement for Cow {
    fn draw(&self, surface: &mut dyn DrawSurface, position: Vec2, rng: &mut dyn RngCore) {
        let bw = BODY_WIDTH * self.style.size;
        let bh = BODY_HEIGHT * self.style.size;
        let fill = self.style.fill();
        let (x, y) = (position.x, position.y);

        // Body
        surface.fill_rect(
            Rect::new(position, position + Vec2::new(bw, bh)),
            fill,
        );

        // Legs
        for i in 0..4 {
            let leg_x = x + i as f32 * bw / 3.0;
            surface.fill_rect(
                Rect::new(
                    Vec2::new(leg_x, y + bh),
                    Vec2::new(leg_x + 5.0, y + bh + LEG_HEIGHT),
                ),
                fill,
            );
        }

        // Head
        surface.fill_rect(
            Rect::new(Vec2::new(x - 20.0, y + 5.0), Vec2::new(x, y + 20.0)),
            fill,
        );

        // Horns
        let brow = Vec2::new(x - 20.0, y + 5.0);
        surface.line(brow, Vec2::new(x - 25.0, y), fill, 2);
        surface.line(brow, Vec2::new(x - 15.0, y), fill, 2);

        // Spots, positions and sizes drawn fresh on every render.
        for _ in 0..SPOT_COUNT {
            let spot_x = x + rand_range_i32(rng, 0, (bw - 10.0).max(0.0) as i32) as f32;
            let spot_y = y + rand_range_i32(rng, 0, (bh - 10.0).max(0.0) as i32) as f32;
            let spot_size = rand_range_i32(rng, 5, 15) as f32;
            surface.fill_ellipse(
                Vec2::new(spot_x + spot_size * 0.5, spot_y + spot_size * 0.5),
                spot_size * 0.5,
                spot_size * 0.5,
                self.style.tint(self.spot_color),
            );
        }
    }

    fn bounds(&self, position: Vec2) -> Rect {
        let bw = BODY_WIDTH * self.style.size;
        let bh = BODY_HEIGHT * self.style.size;
        Rect::new(
            position + Vec2::new(-25.0, 0.0),
            position + Vec2::new(bw, bh + LEG_HEIGHT),
        )
    }

    fn style(&self) -> &ElementStyle {
        &self.style
    }
}
