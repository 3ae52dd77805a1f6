//! Moveable objects and their movement kinds
//!
//! A [`Moveable`] owns the state every moving object shares: position, velocity,
//! a maximum speed and a pinned flag. How the object actually travels during a
//! tick is decided by its [`MovementKind`]. The pinned check lives in
//! [`Moveable::commit_movement`] and is not part of the trait, so kinds cannot
//! bypass it.

use crate::error::MovementError;
use crate::foundation::logging::{debug, trace, warn};
use crate::position::Position;
use crate::steering::{eased_coefficient, DEFAULT_EASING};
use crate::velocity::Velocity;

/// Mutable view of a moveable handed to its movement kind for one tick
#[derive(Debug)]
pub struct Motion<'a> {
    /// Position to update
    pub position: &'a mut Position,

    /// Velocity, which a kind may also adjust
    pub velocity: &'a mut Velocity,

    /// The moveable's maximum speed
    pub max_velocity: f32,
}

/// Per-kind displacement step
///
/// Implement this trait to describe how a kind of object travels during a
/// single simulation tick.
pub trait MovementKind {
    /// Name used in diagnostics
    fn kind_name(&self) -> &'static str {
        short_type_name(std::any::type_name::<Self>())
    }

    /// Move the object for one tick
    ///
    /// # Arguments
    /// * `motion` - Position and velocity of the object being moved
    /// * `fps` - Frame rate of the driving loop, forwarded unchanged
    ///
    /// Every kind is expected to override this. The provided body fails with
    /// [`MovementError::NotImplemented`] naming the kind.
    fn displace(&mut self, motion: Motion<'_>, fps: u32) -> Result<(), MovementError> {
        let _ = (motion, fps);
        Err(MovementError::NotImplemented {
            kind: self.kind_name().to_string(),
        })
    }
}

impl<K: MovementKind + ?Sized> MovementKind for Box<K> {
    fn kind_name(&self) -> &'static str {
        (**self).kind_name()
    }

    fn displace(&mut self, motion: Motion<'_>, fps: u32) -> Result<(), MovementError> {
        (**self).displace(motion, fps)
    }
}

/// Strip the module path from a type name, keeping generic arguments intact
fn short_type_name(full: &'static str) -> &'static str {
    let base_end = full.find('<').unwrap_or(full.len());
    let start = full[..base_end].rfind("::").map_or(0, |i| i + 2);
    &full[start..]
}

/// An object in the game that can move
#[derive(Debug, Clone)]
pub struct Moveable<K> {
    /// Current position
    pub position: Position,

    /// Current heading and speed
    pub velocity: Velocity,

    /// Highest speed the object steers toward; descriptive, never enforced
    pub max_velocity: f32,

    /// Whether movement is suppressed. Can be used for temporary stops.
    pub pinned: bool,

    kind: K,
}

impl<K: MovementKind> Moveable<K> {
    /// Create a new, unpinned moveable at rest
    pub fn new(kind: K, initial_position: Position, max_velocity: f32) -> Self {
        Self {
            position: initial_position,
            velocity: Velocity::default(),
            max_velocity,
            pinned: false,
            kind,
        }
    }

    /// Start with the given velocity instead of standing still
    #[must_use]
    pub fn with_velocity(mut self, initial_velocity: Velocity) -> Self {
        self.velocity = initial_velocity;
        self
    }

    /// Start pinned or unpinned
    #[must_use]
    pub fn with_pinned(mut self, pinned: bool) -> Self {
        self.pinned = pinned;
        self
    }

    /// Process the movement for one tick
    ///
    /// Pinned objects stay where they are. Otherwise the tick is delegated to the
    /// movement kind with the same `fps`.
    pub fn commit_movement(&mut self, fps: u32) -> Result<(), MovementError> {
        if self.pinned {
            trace!("{} is pinned, skipping movement", self.kind.kind_name());
            return Ok(());
        }

        let motion = Motion {
            position: &mut self.position,
            velocity: &mut self.velocity,
            max_velocity: self.max_velocity,
        };
        self.kind.displace(motion, fps).inspect_err(|e| {
            warn!("Movement commit failed: {}", e);
        })
    }

    /// Aim the velocity at `target` using [`DEFAULT_EASING`]
    pub fn set_velocity_for_target(&mut self, target: &Position) -> Result<(), MovementError> {
        self.set_velocity_for_target_eased(target, DEFAULT_EASING)
    }

    /// Aim the velocity at `target`, slowing down as the object gets closer
    ///
    /// The heading points from the current position to `target`; the speed
    /// follows [`eased_coefficient`]. Only the velocity changes, and it is left
    /// untouched when the easing curve is undefined.
    pub fn set_velocity_for_target_eased(
        &mut self,
        target: &Position,
        easing: f32,
    ) -> Result<(), MovementError> {
        let delta = self.position.delta_to(target);
        let angle = Velocity::calculate_angle(delta.x, delta.y);

        let distance = self.position.euclidean_distance_to(target);
        let coefficient = eased_coefficient(self.max_velocity, distance, easing)?;

        self.velocity.angle = angle;
        self.velocity.coefficient = coefficient;

        debug!(
            "Steering {} toward ({}, {}): distance {:.3}, {}",
            self.kind.kind_name(),
            target.x,
            target.y,
            distance,
            self.velocity
        );
        Ok(())
    }

    /// Suppress movement until [`unpin`](Self::unpin) is called
    pub fn pin(&mut self) {
        self.pinned = true;
    }

    /// Allow movement again
    pub fn unpin(&mut self) {
        self.pinned = false;
    }

    /// Whether movement is currently suppressed
    pub const fn is_pinned(&self) -> bool {
        self.pinned
    }

    /// The movement kind
    pub const fn kind(&self) -> &K {
        &self.kind
    }

    /// Mutable access to the movement kind
    pub fn kind_mut(&mut self) -> &mut K {
        &mut self.kind
    }

    /// Name of the movement kind
    pub fn kind_name(&self) -> &'static str {
        self.kind.kind_name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Vec2;
    use approx::assert_relative_eq;

    /// Records every fps value it is handed
    #[derive(Default)]
    struct Recorder {
        calls: Vec<u32>,
    }

    impl MovementKind for Recorder {
        fn displace(&mut self, motion: Motion<'_>, fps: u32) -> Result<(), MovementError> {
            self.calls.push(fps);
            motion.position.offset(1.0, 1.0);
            Ok(())
        }
    }

    /// Never overrides the displacement step
    struct Inert;

    impl MovementKind for Inert {}

    /// Integrates velocity over one frame
    struct Drift;

    impl MovementKind for Drift {
        fn displace(&mut self, motion: Motion<'_>, fps: u32) -> Result<(), MovementError> {
            let step = motion.velocity.components() / fps as f32;
            motion.position.translate(&step);
            Ok(())
        }
    }

    #[test]
    fn test_moveable_creation() {
        let moveable = Moveable::new(Inert, Position::new(1.0, 2.0), 20.0);

        assert_eq!(moveable.position, Position::new(1.0, 2.0));
        assert_eq!(moveable.velocity, Velocity::new(0.0, 0.0));
        assert_eq!(moveable.max_velocity, 20.0);
        assert!(!moveable.pinned);
    }

    #[test]
    fn test_optional_parameters() {
        let moveable = Moveable::new(Inert, Position::default(), -3.0)
            .with_velocity(Velocity::new(1.0, 5.0))
            .with_pinned(true);

        assert_eq!(moveable.velocity, Velocity::new(1.0, 5.0));
        assert_eq!(moveable.max_velocity, -3.0);
        assert!(moveable.is_pinned());
    }

    #[test]
    fn test_pinned_does_not_move() {
        let mut moveable = Moveable::new(Recorder::default(), Position::new(4.0, 4.0), 10.0)
            .with_velocity(Velocity::new(0.3, 10.0))
            .with_pinned(true);

        for fps in [0, 1, 30, 60, 144, u32::MAX] {
            moveable.commit_movement(fps).unwrap();
        }

        assert_eq!(moveable.position, Position::new(4.0, 4.0));
        assert!(moveable.kind().calls.is_empty());
    }

    #[test]
    fn test_commit_forwards_fps() {
        let mut moveable = Moveable::new(Recorder::default(), Position::default(), 10.0);

        moveable.commit_movement(60).unwrap();
        moveable.commit_movement(30).unwrap();

        assert_eq!(moveable.kind().calls, vec![60, 30]);
        assert_eq!(moveable.position, Position::new(2.0, 2.0));
    }

    #[test]
    fn test_pin_toggle() {
        let mut moveable = Moveable::new(Recorder::default(), Position::default(), 10.0);

        moveable.pin();
        moveable.commit_movement(60).unwrap();
        moveable.unpin();
        moveable.commit_movement(24).unwrap();

        assert_eq!(moveable.kind().calls, vec![24]);
    }

    #[test]
    fn test_missing_displacement_names_kind() {
        let mut moveable = Moveable::new(Inert, Position::new(1.0, 1.0), 10.0);

        let err = moveable.commit_movement(60).unwrap_err();

        assert_eq!(
            err,
            MovementError::NotImplemented {
                kind: "Inert".to_string()
            }
        );
        assert!(err.to_string().contains("Inert"));
        assert_eq!(moveable.position, Position::new(1.0, 1.0));
    }

    #[test]
    fn test_missing_displacement_skipped_when_pinned() {
        let mut moveable = Moveable::new(Inert, Position::default(), 10.0).with_pinned(true);
        assert!(moveable.commit_movement(60).is_ok());
    }

    #[test]
    fn test_boxed_kind_keeps_name() {
        let mut moveable: Moveable<Box<dyn MovementKind>> =
            Moveable::new(Box::new(Inert), Position::default(), 10.0);

        assert_eq!(moveable.kind_name(), "Inert");
        let err = moveable.commit_movement(60).unwrap_err();
        assert!(err.to_string().contains("Inert"));
    }

    #[test]
    fn test_short_type_name() {
        assert_eq!(short_type_name("moveable::moveable::tests::Drift"), "Drift");
        assert_eq!(
            short_type_name("alloc::vec::Vec<game::Ship>"),
            "Vec<game::Ship>"
        );
        assert_eq!(short_type_name("Plain"), "Plain");
    }

    #[test]
    fn test_set_velocity_for_target() {
        let mut moveable = Moveable::new(Inert, Position::new(0.0, 0.0), 20.0);

        moveable
            .set_velocity_for_target(&Position::new(20.0, 30.0))
            .unwrap();

        assert_relative_eq!(moveable.velocity.angle, 30.0_f32.atan2(20.0));
        assert_relative_eq!(moveable.velocity.angle, 0.982_793_7, epsilon = 1e-6);
        assert_relative_eq!(moveable.velocity.coefficient, 9.481_6, epsilon = 1e-3);
        assert_eq!(moveable.position, Position::new(0.0, 0.0));
    }

    #[test]
    fn test_target_at_position_stops() {
        let mut moveable = Moveable::new(Inert, Position::new(5.0, -5.0), 20.0)
            .with_velocity(Velocity::new(1.0, 12.0));

        moveable
            .set_velocity_for_target(&Position::new(5.0, -5.0))
            .unwrap();

        assert_eq!(moveable.velocity.coefficient, 0.0);
        assert_eq!(moveable.velocity.angle, 0.0);
    }

    #[test]
    fn test_degenerate_easing_leaves_velocity() {
        let initial = Velocity::new(0.25, 3.0);
        let mut moveable =
            Moveable::new(Inert, Position::new(0.0, 0.0), 20.0).with_velocity(initial);

        let result = moveable.set_velocity_for_target_eased(&Position::new(3.0, 4.0), -5.0);

        assert_eq!(
            result,
            Err(MovementError::DegenerateEasing {
                distance: 5.0,
                easing: -5.0,
            })
        );
        assert_eq!(moveable.velocity, initial);
        assert_eq!(moveable.position, Position::new(0.0, 0.0));
    }

    #[test]
    fn test_default_velocities_are_independent() {
        let mut first = Moveable::new(Inert, Position::default(), 20.0);
        let second = Moveable::new(Inert, Position::default(), 20.0);

        first.set_velocity_for_target(&Position::new(10.0, 0.0)).unwrap();
        first.velocity.angle = 1.5;

        assert_eq!(first.velocity.angle, 1.5);
        assert!(first.velocity.coefficient > 0.0);
        assert_eq!(second.velocity, Velocity::default());
    }

    #[test]
    fn test_kind_mut_reaches_kind_state() {
        let mut moveable = Moveable::new(Recorder::default(), Position::default(), 10.0);

        moveable.commit_movement(60).unwrap();
        moveable.kind_mut().calls.clear();
        moveable.commit_movement(30).unwrap();

        assert_eq!(moveable.kind().calls, vec![30]);
    }

    #[test]
    fn test_non_finite_easing_leaves_velocity() {
        let initial = Velocity::new(0.25, 3.0);
        let mut moveable =
            Moveable::new(Inert, Position::new(0.0, 0.0), 20.0).with_velocity(initial);

        let result = moveable.set_velocity_for_target_eased(&Position::new(1.0, 1.0), f32::NAN);

        assert!(matches!(result, Err(MovementError::DegenerateEasing { .. })));
        assert_eq!(moveable.velocity, initial);
    }

    #[test]
    fn test_drift_moves_along_velocity() {
        let mut moveable = Moveable::new(Drift, Position::default(), 20.0)
            .with_velocity(Velocity::from(Vec2::new(30.0, 60.0)));

        moveable.commit_movement(30).unwrap();

        assert_relative_eq!(moveable.position.x, 1.0, epsilon = 1e-4);
        assert_relative_eq!(moveable.position.y, 2.0, epsilon = 1e-4);
    }
}
