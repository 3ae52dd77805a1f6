//! Movement errors

use thiserror::Error;

/// Errors raised while moving or steering a moveable object
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MovementError {
    /// The movement kind never supplied a displacement step
    #[error("Movement kind {kind} doesn't implement displace()")]
    NotImplemented {
        /// Name of the offending movement kind
        kind: String,
    },

    /// The easing curve is undefined because `distance + easing` is zero or not finite
    #[error("Easing curve undefined: distance {distance} + easing {easing} is zero or not finite")]
    DegenerateEasing {
        /// Distance to the target
        distance: f32,
        /// Easing coefficient that cancelled it
        easing: f32,
    },
}
