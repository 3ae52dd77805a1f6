//! Seeker demo: a single moveable chasing random waypoints
//!
//! Usage: `seeker_demo [config.toml|config.ron]`

use moveable::foundation::logging;
use moveable::prelude::*;
use moveable::Config;
use rand::Rng;

// Demo configuration
const WAYPOINT_COUNT: usize = 4;
const ARENA_HALF_EXTENT: f32 = 100.0;
const ARRIVAL_RADIUS: f32 = 0.5;
const MAX_TICKS_PER_WAYPOINT: u32 = 5_000;

/// Advances the position along the velocity for one frame
struct Drift;

impl MovementKind for Drift {
    fn displace(&mut self, motion: Motion<'_>, fps: u32) -> Result<(), MovementError> {
        #[allow(clippy::cast_precision_loss)]
        let step = motion.velocity.components() / fps as f32;
        motion.position.translate(&step);
        Ok(())
    }
}

fn load_config() -> Result<SteeringConfig, Box<dyn std::error::Error>> {
    let config = match std::env::args().nth(1) {
        Some(path) => {
            logging::info!("Loading steering config from {}", path);
            SteeringConfig::load_from_file(&path)?
        }
        None => SteeringConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

/// Steer toward `target` until the seeker arrives, returning the ticks taken
fn chase(
    seeker: &mut Moveable<Drift>,
    target: &Position,
    config: &SteeringConfig,
) -> Result<Option<u32>, MovementError> {
    seeker.unpin();
    for tick in 1..=MAX_TICKS_PER_WAYPOINT {
        seeker.set_velocity_for_target_eased(target, config.easing)?;
        seeker.commit_movement(config.fps)?;

        if seeker.position.euclidean_distance_to(target) <= ARRIVAL_RADIUS {
            seeker.pin();
            return Ok(Some(tick));
        }
    }
    Ok(None)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_with_filter("info");
    logging::info!("Starting seeker demo");

    let config = load_config()?;
    logging::info!(
        "max_velocity={}, easing={}, fps={}",
        config.max_velocity,
        config.easing,
        config.fps
    );

    let mut seeker = Moveable::new(Drift, Position::new(0.0, 0.0), config.max_velocity);
    seeker.set_velocity_for_target_eased(&Position::new(20.0, 30.0), config.easing)?;
    logging::info!("Initial steering toward (20, 30): {}", seeker.velocity);

    let mut rng = rand::thread_rng();
    for index in 0..WAYPOINT_COUNT {
        let target = Position::new(
            rng.gen_range(-ARENA_HALF_EXTENT..ARENA_HALF_EXTENT),
            rng.gen_range(-ARENA_HALF_EXTENT..ARENA_HALF_EXTENT),
        );

        match chase(&mut seeker, &target, &config)? {
            Some(ticks) => logging::info!(
                "Waypoint {} at ({:.2}, {:.2}) reached after {} ticks",
                index + 1,
                target.x,
                target.y,
                ticks
            ),
            None => logging::warn!(
                "Waypoint {} at ({:.2}, {:.2}) not reached, stopped at ({:.2}, {:.2})",
                index + 1,
                target.x,
                target.y,
                seeker.position.x,
                seeker.position.y
            ),
        }
    }

    logging::info!("Seeker demo finished");
    Ok(())
}
