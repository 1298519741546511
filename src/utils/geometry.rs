//! Axis-aligned rectangles and radius checks on the playfield.
//!
//! Everything here is a pure function of its arguments. Coordinates are
//! playfield units with the origin in the top-left corner and `y` growing
//! downwards.

use serde::Serialize;

/// A point on the playfield.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: Position) -> f64 {
        let dx = f64::from(self.x - other.x);
        let dy = f64::from(self.y - other.y);
        (dx * dx + dy * dy).sqrt()
    }
}

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Box of the given size with its top-left corner at `pos`.
    pub const fn at(pos: Position, width: i32, height: i32) -> Self {
        Self::new(pos.x, pos.y, width, height)
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn contains(&self, point: Position) -> bool {
        point.x >= self.x && point.x <= self.right() && point.y >= self.y && point.y <= self.bottom()
    }
}

/// Edge-inclusive overlap test: boxes that only touch along an edge overlap.
pub fn rects_overlap(a: &Rect, b: &Rect) -> bool {
    a.x <= b.right() && b.x <= a.right() && a.y <= b.bottom() && b.y <= a.bottom()
}

/// True when `point` lies within `radius` of `center` (boundary included).
pub fn within_radius(point: Position, center: Position, radius: f64) -> bool {
    point.distance_to(center) <= radius
}

/// Clamp `pos` so that a `width` x `height` box stays inside `bounds`.
pub fn clamp_to_bounds(pos: Position, width: i32, height: i32, bounds: &Rect) -> Position {
    let max_x = (bounds.right() - width).max(bounds.x);
    let max_y = (bounds.bottom() - height).max(bounds.y);
    Position {
        x: pos.x.clamp(bounds.x, max_x),
        y: pos.y.clamp(bounds.y, max_y),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlapping_boxes() {
        let a = Rect::new(0, 0, 64, 128);
        let b = Rect::new(30, 100, 64, 128);
        assert!(rects_overlap(&a, &b));
        assert!(rects_overlap(&b, &a));
    }

    #[test]
    fn test_disjoint_boxes() {
        let a = Rect::new(0, 0, 64, 128);
        let b = Rect::new(200, 0, 64, 128);
        assert!(!rects_overlap(&a, &b));
    }

    #[test]
    fn test_touching_edges_overlap() {
        let a = Rect::new(0, 0, 64, 128);
        let right = Rect::new(64, 0, 64, 128);
        let below = Rect::new(0, 128, 64, 128);
        assert!(rects_overlap(&a, &right));
        assert!(rects_overlap(&a, &below));

        let gap = Rect::new(65, 0, 64, 128);
        assert!(!rects_overlap(&a, &gap));
    }

    #[test]
    fn test_overlap_is_pure() {
        let a = Rect::new(10, 10, 20, 20);
        let b = Rect::new(25, 25, 20, 20);
        let first = rects_overlap(&a, &b);
        let second = rects_overlap(&a, &b);
        assert_eq!(first, second);
        assert_eq!(a, Rect::new(10, 10, 20, 20));
    }

    #[test]
    fn test_within_radius() {
        let center = Position::new(100, 100);
        assert!(within_radius(Position::new(100, 100), center, 0.0));
        assert!(within_radius(Position::new(130, 140), center, 50.0));
        assert!(!within_radius(Position::new(131, 141), center, 50.0));
    }

    #[test]
    fn test_within_radius_is_pure() {
        let p = Position::new(3, 4);
        let c = Position::new(0, 0);
        assert_eq!(within_radius(p, c, 5.0), within_radius(p, c, 5.0));
        assert!(within_radius(p, c, 5.0));
    }

    #[test]
    fn test_clamp_to_bounds() {
        let field = Rect::new(0, 0, 1200, 800);
        assert_eq!(
            clamp_to_bounds(Position::new(-5, -10), 64, 128, &field),
            Position::new(0, 0)
        );
        assert_eq!(
            clamp_to_bounds(Position::new(1190, 790), 64, 128, &field),
            Position::new(1136, 672)
        );
        assert_eq!(
            clamp_to_bounds(Position::new(500, 300), 64, 128, &field),
            Position::new(500, 300)
        );
    }

    #[test]
    fn test_rect_contains() {
        let r = Rect::new(10, 10, 100, 50);
        assert!(r.contains(Position::new(10, 10)));
        assert!(r.contains(Position::new(110, 60)));
        assert!(!r.contains(Position::new(111, 60)));
    }
}
