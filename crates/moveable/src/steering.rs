//! Eased steering toward a target
//!
//! The speed coefficient follows a rational deceleration curve:
//!
//! ```text
//! m = max velocity, d = distance to target, e = easing
//! coefficient = m * e / -(d + e) + m
//! ```
//!
//! The coefficient is zero at the target and tends to `m` as the distance grows,
//! without ever being clamped to it.

use crate::error::MovementError;

/// Easing used when the caller doesn't pick one
pub const DEFAULT_EASING: f32 = 40.0;

/// Speed coefficient for an object `distance` away from its target
///
/// Fails with [`MovementError::DegenerateEasing`] when `distance + easing` is zero
/// or not finite.
pub fn eased_coefficient(
    max_velocity: f32,
    distance: f32,
    easing: f32,
) -> Result<f32, MovementError> {
    let denominator = distance + easing;
    if denominator == 0.0 || !denominator.is_finite() {
        return Err(MovementError::DegenerateEasing { distance, easing });
    }

    Ok(max_velocity * easing / -denominator + max_velocity)
}
