//! Planar positions

use crate::foundation::math::{Point2, Vec2};
use serde::{Deserialize, Serialize};

/// A point in 2D game space
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    /// Horizontal coordinate
    pub x: f32,

    /// Vertical coordinate
    pub y: f32,
}

impl Position {
    /// Create a new position
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Straight-line distance to `other`
    pub fn euclidean_distance_to(&self, other: &Self) -> f32 {
        nalgebra::distance(&self.to_point(), &other.to_point())
    }

    /// Vector pointing from this position to `other`
    pub fn delta_to(&self, other: &Self) -> Vec2 {
        other.to_point() - self.to_point()
    }

    /// Move by the given offsets
    pub fn offset(&mut self, dx: f32, dy: f32) {
        self.x += dx;
        self.y += dy;
    }

    /// Move by a displacement vector
    pub fn translate(&mut self, displacement: &Vec2) {
        self.offset(displacement.x, displacement.y);
    }

    /// Convert to an nalgebra point
    pub fn to_point(self) -> Point2 {
        Point2::new(self.x, self.y)
    }
}

impl From<Point2> for Position {
    fn from(point: Point2) -> Self {
        Self::new(point.x, point.y)
    }
}

impl From<Position> for Point2 {
    fn from(position: Position) -> Self {
        position.to_point()
    }
}

impl From<Vec2> for Position {
    fn from(v: Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<(f32, f32)> for Position {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}
