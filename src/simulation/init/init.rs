use std::collections::HashMap;

use crate::collision::Xorshift32;
use crate::rigid_body::Vec2;

use super::config::WorldConfig;
use super::perf_stats::StepStats;
use super::WorldCore;

/// Build a world from an already validated config.
pub(super) fn create_world_core(config: &WorldConfig) -> WorldCore {
    WorldCore {
        bodies: Vec::new(),
        body_index: HashMap::new(),
        colliders: Vec::new(),
        next_body_id: 1,
        next_collider_id: 1,
        gravity: Vec2::new(config.gravity_x, config.gravity_y),
        world_bounds_restitution: config.world_bounds_restitution,
        bounds: config.bounds,
        rng: Box::new(Xorshift32::new(config.seed)),
        frame: 0,
        stats_enabled: config.step_stats,
        stats: StepStats::default(),
    }
}
