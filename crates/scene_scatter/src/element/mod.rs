//! Drawable scene elements and the runtime factory that creates them.
//!
//! Every element implements [`SceneElement`]: it can render itself onto a
//! [`DrawSurface`] at a position and report the axis-aligned bounding box it
//! would cover there. Elements are stateless aside from their style; canvas
//! and position are passed per call, so one cached instance serves every
//! placement of its type within a generation session.
use glam::Vec2;
use rand::RngCore;

use crate::canvas::DrawSurface;
use crate::geometry::Rect;

pub mod bird;
pub mod cloud;
pub mod cow;
pub mod factory;
pub mod goat;
pub mod mountain;
pub mod river;
pub mod star;
pub mod style;
pub mod sun;
pub mod tree;

pub use bird::Bird;
pub use cloud::Cloud;
pub use cow::Cow;
pub use goat::Goat;
pub use mountain::Mountain;
pub use river::River;
pub use star::Star;
pub use sun::Sun;
pub use tree::Tree;

use style::ElementStyle;

/// Capability set shared by all drawable scene elements.
///
/// `rng` feeds stochastic per-draw decoration (cow spots, river waves); an
/// element that draws deterministically simply ignores it. Implementations
/// must keep `bounds` consistent with the pixels `draw` touches, since the
/// placement planner relies on it for overlap avoidance.
pub trait SceneElement: Send + Sync {
    /// Render the element at `position` onto the surface.
    fn draw(&self, surface: &mut dyn DrawSurface, position: Vec2, rng: &mut dyn RngCore);

    /// Bounding box the element covers when drawn at `position`.
    fn bounds(&self, position: Vec2) -> Rect;

    fn style(&self) -> &ElementStyle;
}

#[cfg(test)]
pub(crate) mod test_support {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::canvas::raster::RasterCanvas;
    use crate::color::Color;

    /// Draw the element once on a scratch canvas and sanity-check its bounds.
    pub(crate) fn exercise(element: &dyn SceneElement, position: Vec2) {
        let bounds = element.bounds(position);
        assert!(
            !bounds.is_degenerate(),
            "element bounds must be a non-degenerate rectangle"
        );

        let mut canvas = RasterCanvas::new(1024, 1024, Color::WHITE);
        let mut rng = StdRng::seed_from_u64(7);
        element.draw(&mut canvas, position, &mut rng);
    }
}
