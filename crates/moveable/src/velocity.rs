//! Polar velocities
//!
//! A velocity is stored as a heading angle plus a speed coefficient rather than
//! as a component vector, which keeps steering updates to two scalar writes.

use crate::foundation::math::{utils, Vec2};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Heading and speed of a moveable object
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Velocity {
    /// Heading in radians, measured counter-clockwise from the +x axis
    pub angle: f32,

    /// Speed magnitude in units per second
    pub coefficient: f32,
}

impl Velocity {
    /// Create a new velocity
    pub const fn new(angle: f32, coefficient: f32) -> Self {
        Self { angle, coefficient }
    }

    /// Heading of the vector `(dx, dy)` in radians, in `(-PI, PI]`
    ///
    /// A zero vector yields an angle of `0.0`.
    pub fn calculate_angle(dx: f32, dy: f32) -> f32 {
        dy.atan2(dx)
    }

    /// Cartesian components of this velocity
    pub fn components(&self) -> Vec2 {
        Vec2::new(self.angle.cos(), self.angle.sin()) * self.coefficient
    }

    /// Heading in degrees
    pub fn angle_degrees(&self) -> f32 {
        utils::rad_to_deg(self.angle)
    }

    /// Whether the object is standing still
    pub fn is_stationary(&self) -> bool {
        self.coefficient == 0.0
    }
}

impl From<Vec2> for Velocity {
    fn from(v: Vec2) -> Self {
        Self::new(Self::calculate_angle(v.x, v.y), v.magnitude())
    }
}

impl fmt::Display for Velocity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Velocity(angle={:.4} rad, coefficient={:.4})",
            self.angle, self.coefficient
        )
    }
}
