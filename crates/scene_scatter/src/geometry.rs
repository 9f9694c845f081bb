//! Axis-aligned rectangle used for element bounds and overlap tests.
use glam::Vec2;

/// Axis-aligned rectangle with inclusive edges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    /// Create a rectangle from min/max corners.
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Create a rectangle centered on `center` with the given total size.
    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Axis-aligned overlap test with closed edges: rectangles that merely
    /// touch count as intersecting, matching the overlap-avoidance policy of
    /// the placement planner.
    pub fn intersects(&self, other: &Rect) -> bool {
        !(self.max.x < other.min.x
            || self.min.x > other.max.x
            || self.max.y < other.min.y
            || self.min.y > other.max.y)
    }

    pub fn translate(&self, offset: Vec2) -> Rect {
        Rect {
            min: self.min + offset,
            max: self.max + offset,
        }
    }

    /// True if the rectangle has non-positive area or non-finite corners.
    pub fn is_degenerate(&self) -> bool {
        !(self.min.x.is_finite()
            && self.min.y.is_finite()
            && self.max.x.is_finite()
            && self.max.y.is_finite())
            || self.max.x <= self.min.x
            || self.max.y <= self.min.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlapping_rects_intersect() {
        let a = Rect::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = Rect::new(Vec2::new(5.0, 5.0), Vec2::new(15.0, 15.0));
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn disjoint_rects_do_not_intersect() {
        let a = Rect::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = Rect::new(Vec2::new(20.0, 0.0), Vec2::new(30.0, 10.0));
        assert!(!a.intersects(&b));

        let c = Rect::new(Vec2::new(0.0, 20.0), Vec2::new(10.0, 30.0));
        assert!(!a.intersects(&c));
    }

    #[test]
    fn touching_edges_count_as_intersecting() {
        let a = Rect::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = Rect::new(Vec2::new(10.0, 0.0), Vec2::new(20.0, 10.0));
        assert!(a.intersects(&b));
    }

    #[test]
    fn from_center_size_is_symmetric() {
        let r = Rect::from_center_size(Vec2::new(5.0, 5.0), Vec2::new(4.0, 2.0));
        assert_eq!(r.min, Vec2::new(3.0, 4.0));
        assert_eq!(r.max, Vec2::new(7.0, 6.0));
        assert_eq!(r.width(), 4.0);
        assert_eq!(r.height(), 2.0);
    }

    #[test]
    fn degenerate_detection() {
        let zero = Rect::new(Vec2::new(1.0, 1.0), Vec2::new(1.0, 5.0));
        assert!(zero.is_degenerate());

        let inverted = Rect::new(Vec2::new(5.0, 5.0), Vec2::new(0.0, 0.0));
        assert!(inverted.is_degenerate());

        let nan = Rect::new(Vec2::new(f32::NAN, 0.0), Vec2::new(1.0, 1.0));
        assert!(nan.is_degenerate());

        let ok = Rect::new(Vec2::new(0.0, 0.0), Vec2::new(1.0, 1.0));
        assert!(!ok.is_degenerate());
    }
}
