//! # Moveable
//!
//! Moveable entities for 2D games.
//!
//! ## Features
//!
//! - **Pinned-aware commits**: [`Moveable::commit_movement`] skips pinned objects
//!   and otherwise hands the tick to the object's [`MovementKind`]
//! - **Eased steering**: [`Moveable::set_velocity_for_target`] aims the velocity at
//!   a target and slows down along a rational deceleration curve
//! - **Configuration**: TOML/RON loadable [`SteeringConfig`]
//!
//! ## Quick Start
//!
//! ```rust
//! use moveable::prelude::*;
//!
//! struct Drift;
//!
//! impl MovementKind for Drift {
//!     fn displace(&mut self, motion: Motion<'_>, fps: u32) -> Result<(), MovementError> {
//!         let step = motion.velocity.components() / fps as f32;
//!         motion.position.translate(&step);
//!         Ok(())
//!     }
//! }
//!
//! let mut ship = Moveable::new(Drift, Position::new(0.0, 0.0), 20.0);
//! ship.set_velocity_for_target(&Position::new(20.0, 30.0))?;
//! ship.commit_movement(60)?;
//! # Ok::<(), MovementError>(())
//! ```

pub mod config;
pub mod foundation;

mod error;
mod moveable;
mod position;
mod steering;
mod velocity;

#[cfg(test)]
mod tests;

pub use config::{Config, ConfigError, SteeringConfig};
pub use error::MovementError;
pub use moveable::{Motion, Moveable, MovementKind};
pub use position::Position;
pub use steering::{eased_coefficient, DEFAULT_EASING};
pub use velocity::Velocity;

/// Common imports for library users
pub mod prelude {
    pub use crate::{
        foundation::math::{Point2, Vec2},
        Motion, Moveable, MovementError, MovementKind, Position, SteeringConfig, Velocity,
        DEFAULT_EASING,
    };
}
