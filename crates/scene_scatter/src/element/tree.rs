//! Tree element: rectangular trunk with three foliage blobs.
use glam::Vec2;
use rand::RngCore;

use crate::canvas::DrawSurface;
use crate::color::Color;
use crate::element::style::ElementStyle;
use crate::element::SceneElement;
use crate::geometry::Rect;

const TRUNK_WIDTH: f32 = 20.0;
const TRUNK_HEIGHT: f32 = 60.0;
const FOLIAGE_SIZE: f32 = 50.0;

/// Tree with a fixed trunk/foliage color pair; the style color is kept for
/// factory compatibility but the canopy palette wins.
#[derive(Debug, Clone)]
pub struct Tree {
    style: ElementStyle,
    trunk_color: Color,
    foliage_color: Color,
}

impl Tree {
    pub fn new(style: ElementStyle) -> Self {
        Self {
            style,
            trunk_color: Color::rgb(139, 69, 19),
            foliage_color: Self::default_color(),
        }
    }

    pub fn default_color() -> Color {
        Color::rgb(34, 139, 34)
    }
}

impl Default for Tree {
    fn default() -> Self {
        Self::new(ElementStyle::new(Self::default_color()))
    }
}

impl SceneElement for Tree {
    fn draw(&self, surface: &mut dyn DrawSurface, position: Vec2, _rng: &mut dyn RngCore) {
        let trunk_width = TRUNK_WIDTH * self.style.size;
        let trunk_height = TRUNK_HEIGHT * self.style.size;
        let foliage = FOLIAGE_SIZE * self.style.size;

        surface.fill_rect(
            Rect::new(
                position + Vec2::new(-trunk_width * 0.5, 0.0),
                position + Vec2::new(trunk_width * 0.5, trunk_height),
            ),
            self.style.tint(self.trunk_color),
        );

        let offsets = [
            Vec2::new(0.0, -foliage),
            Vec2::new(-foliage, 0.0),
            Vec2::new(foliage, 0.0),
        ];
        for offset in offsets {
            surface.fill_ellipse(
                position + offset,
                foliage * 0.5,
                foliage * 0.5,
                self.style.tint(self.foliage_color),
            );
        }
    }

    fn bounds(&self, position: Vec2) -> Rect {
        let trunk_height = TRUNK_HEIGHT * self.style.size;
        let foliage = FOLIAGE_SIZE * self.style.size;
        Rect::new(
            position - Vec2::splat(foliage),
            position + Vec2::new(foliage, trunk_height),
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
    fn bounds_cover_canopy_and_trunk() {
        let tree = Tree::default();
        let bounds = tree.bounds(Vec2::new(200.0, 200.0));
        assert_eq!(bounds.min, Vec2::new(150.0, 150.0));
        assert_eq!(bounds.max, Vec2::new(250.0, 260.0));
        exercise(&tree, Vec2::new(200.0, 200.0));
    }
}
