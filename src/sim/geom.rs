//! Axis-aligned box geometry shared by every entity
//!
//! Containment is half-open: a point on the right or bottom edge is outside.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box (top-left position + size)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Bounds {
    /// Negative extents are clamped to zero
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width.max(0.0), height.max(0.0)),
        }
    }

    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self::new(pos.x, pos.y, size.x, size.y)
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.y
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    /// Check if a point lies inside the box
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.pos.x
            && point.x < self.right()
            && point.y >= self.pos.y
            && point.y < self.bottom()
    }

    /// The two corners of one side, ordered left-to-right or top-to-bottom
    pub fn side(&self, side: Side) -> (Vec2, Vec2) {
        let (l, t, r, b) = (self.pos.x, self.pos.y, self.right(), self.bottom());
        match side {
            Side::Top => (Vec2::new(l, t), Vec2::new(r, t)),
            Side::Bottom => (Vec2::new(l, b), Vec2::new(r, b)),
            Side::Left => (Vec2::new(l, t), Vec2::new(l, b)),
            Side::Right => (Vec2::new(r, t), Vec2::new(r, b)),
        }
    }
}

/// One side of a box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Side::Top => Side::Bottom,
            Side::Bottom => Side::Top,
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// True for the sides that run horizontally
    pub fn is_horizontal(self) -> bool {
        matches!(self, Side::Top | Side::Bottom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_half_open() {
        let b = Bounds::new(0.0, 0.0, 50.0, 20.0);
        assert!(b.contains(Vec2::new(0.0, 0.0)));
        assert!(b.contains(Vec2::new(49.9, 19.9)));
        assert!(!b.contains(Vec2::new(50.0, 10.0)));
        assert!(!b.contains(Vec2::new(10.0, 20.0)));
        assert!(!b.contains(Vec2::new(-0.1, 10.0)));
    }

    #[test]
    fn test_negative_size_clamped() {
        let b = Bounds::new(10.0, 10.0, -5.0, -1.0);
        assert_eq!(b.width(), 0.0);
        assert_eq!(b.height(), 0.0);
        assert!(!b.contains(Vec2::new(10.0, 10.0)));
    }

    #[test]
    fn test_side_corners() {
        let b = Bounds::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(b.side(Side::Right), (Vec2::new(40.0, 20.0), Vec2::new(40.0, 60.0)));
        assert_eq!(b.side(Side::Bottom), (Vec2::new(10.0, 60.0), Vec2::new(40.0, 60.0)));
        assert_eq!(Side::Left.opposite(), Side::Right);
    }
}
