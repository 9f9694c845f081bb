//! Position planning via bounded rejection sampling.
//!
//! For each element type the planner draws uniform-random candidates inside a
//! type-specific vertical band, accepting a candidate when its bounding box
//! does not intersect any previously accepted candidate of the same batch.
//! Sampling stops after the requested count or after `10 x count` attempts,
//! whichever comes first; coming up short is backpressure against
//! unsatisfiable density, not an error. Cross-type overlap is deliberately
//! never checked.
use glam::Vec2;
use rand::RngCore;
use tracing::debug;

use crate::element::SceneElement;
use crate::geometry::Rect;

/// A concrete (type, position) pair chosen for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    /// Element type identifier for this placement.
    pub element_type: String,
    /// Canvas position of the placement, in pixels.
    pub position: Vec2,
}

impl Placement {
    pub fn new(element_type: impl Into<String>, position: Vec2) -> Self {
        Self {
            element_type: element_type.into(),
            position,
        }
    }
}

/// Vertical band (y range, inclusive) an element type may anchor in, clamped
/// to the canvas height. Sky dwellers sit near the top, ground dwellers near
/// the bottom; unknown types span the full height.
pub fn vertical_band(element_type: &str, canvas_height: f32) -> (f32, f32) {
    let (y_min, y_max): (f32, f32) = match element_type {
        "sun" => (50.0, 150.0),
        "bird" => (50.0, 300.0),
        "cloud" => (50.0, 200.0),
        "star" => (50.0, 300.0),
        "tree" => (350.0, 500.0),
        "mountain" => (300.0, 600.0),
        "river" => (400.0, 600.0),
        "cow" => (400.0, 500.0),
        "goat" => (450.0, 550.0),
        _ => (0.0, canvas_height),
    };
    let y_min = y_min.min(canvas_height);
    let y_max = y_max.min(canvas_height).max(y_min);
    (y_min, y_max)
}

/// Rejection-sampling position planner.
#[derive(Debug, Clone)]
pub struct PlacementPlanner {
    /// Horizontal margin kept free at both canvas edges, in pixels.
    pub edge_margin: f32,
    /// Attempt budget per requested position.
    pub attempts_per_position: usize,
}

impl PlacementPlanner {
    pub fn new() -> Self {
        Self {
            edge_margin: 50.0,
            attempts_per_position: 10,
        }
    }

    /// Plan up to `count` non-overlapping positions for `element` on a canvas
    /// of `extent` pixels. The returned sequence may legitimately be shorter
    /// than `count`.
    pub fn plan(
        &self,
        element: &dyn SceneElement,
        element_type: &str,
        count: usize,
        extent: Vec2,
        rng: &mut dyn RngCore,
    ) -> Vec<Vec2> {
        if count == 0 || extent.x <= 0.0 || extent.y <= 0.0 {
            return Vec::new();
        }

        let (y_min, y_max) = vertical_band(element_type, extent.y);
        let x_min = self.edge_margin.min(extent.x) as i32;
        let x_max = (extent.x - self.edge_margin).max(x_min as f32) as i32;

        let max_attempts = count.saturating_mul(self.attempts_per_position);
        let mut accepted: Vec<Vec2> = Vec::with_capacity(count);
        let mut accepted_bounds: Vec<Rect> = Vec::with_capacity(count);

        let mut attempts = 0;
        while accepted.len() < count && attempts < max_attempts {
            attempts += 1;

            let x = rand_range_i32(rng, x_min, x_max) as f32;
            let y = rand_range_i32(rng, y_min as i32, y_max as i32) as f32;
            let candidate = Vec2::new(x, y);

            let bounds = element.bounds(candidate);
            if accepted_bounds.iter().any(|b| b.intersects(&bounds)) {
                continue;
            }

            accepted.push(candidate);
            accepted_bounds.push(bounds);
        }

        if accepted.len() < count {
            debug!(
                element_type,
                requested = count,
                placed = accepted.len(),
                attempts,
                "placement budget exhausted"
            );
        }

        accepted
    }
}

impl Default for PlacementPlanner {
    fn default() -> Self {
        Self::new()
    }
}

/// Generate a random float in the range [0, 1].
#[inline]
pub(crate) fn rand01(rng: &mut dyn RngCore) -> f32 {
    (rng.next_u32() as f32) / ((u32::MAX as f32) + 1.0)
}

/// Uniform integer in `[lo, hi]` inclusive; a reversed range collapses to `lo`.
#[inline]
pub(crate) fn rand_range_i32(rng: &mut dyn RngCore, lo: i32, hi: i32) -> i32 {
    if hi <= lo {
        return lo;
    }
    let span = (hi - lo) as u64 + 1;
    lo + (rng.next_u64() % span) as i32
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::element::{Mountain, Star, Sun};

    const EXTENT: Vec2 = Vec2::new(800.0, 600.0);

    #[test]
    fn small_elements_reach_the_requested_count() {
        let planner = PlacementPlanner::new();
        let star = Star::default();
        let mut rng = StdRng::seed_from_u64(1);

        let positions = planner.plan(&star, "star", 10, EXTENT, &mut rng);
        assert_eq!(positions.len(), 10);

        for (i, a) in positions.iter().enumerate() {
            let ba = star.bounds(*a);
            assert!(a.x >= 50.0 && a.x <= 750.0);
            assert!(a.y >= 50.0 && a.y <= 300.0);
            for b in positions.iter().skip(i + 1) {
                assert!(!ba.intersects(&star.bounds(*b)), "{a:?} overlaps {b:?}");
            }
        }
    }

    #[test]
    fn unsatisfiable_density_terminates_with_fewer_positions() {
        let planner = PlacementPlanner::new();
        let mountain = Mountain::default();
        let mut rng = StdRng::seed_from_u64(2);

        // 1000 mountains of 400x300 cannot fit on 800x600.
        let positions = planner.plan(&mountain, "mountain", 1000, EXTENT, &mut rng);
        assert!(positions.len() < 1000);
        assert!(!positions.is_empty());
    }

    #[test]
    fn same_seed_gives_identical_plans() {
        let planner = PlacementPlanner::new();
        let sun = Sun::default();

        let mut rng_a = StdRng::seed_from_u64(42);
        let mut rng_b = StdRng::seed_from_u64(42);
        let a = planner.plan(&sun, "sun", 3, EXTENT, &mut rng_a);
        let b = planner.plan(&sun, "sun", 3, EXTENT, &mut rng_b);
        assert_eq!(a, b);

        let mut rng_c = StdRng::seed_from_u64(43);
        let c = planner.plan(&sun, "sun", 3, EXTENT, &mut rng_c);
        assert_ne!(a, c);
    }

    #[test]
    fn band_is_clamped_to_short_canvases() {
        let (y_min, y_max) = vertical_band("mountain", 200.0);
        assert_eq!((y_min, y_max), (200.0, 200.0));

        let (y_min, y_max) = vertical_band("sun", 100.0);
        assert_eq!((y_min, y_max), (50.0, 100.0));
    }

    #[test]
    fn unknown_types_use_the_full_height() {
        assert_eq!(vertical_band("castle", 600.0), (0.0, 600.0));
    }

    #[test]
    fn zero_count_returns_empty() {
        let planner = PlacementPlanner::new();
        let star = Star::default();
        let mut rng = StdRng::seed_from_u64(3);
        assert!(planner.plan(&star, "star", 0, EXTENT, &mut rng).is_empty());
    }

    #[test]
    fn rand_range_collapses_reversed_ranges() {
        let mut rng = StdRng::seed_from_u64(4);
        assert_eq!(rand_range_i32(&mut rng, 10, 5), 10);
        let v = rand_range_i32(&mut rng, 5, 15);
        assert!((5..=15).contains(&v));
    }

    #[test]
    fn rand01_values_in_range() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..100 {
            let v = rand01(&mut rng);
            assert!((0.0..1.0).contains(&v));
        }
    }
}
