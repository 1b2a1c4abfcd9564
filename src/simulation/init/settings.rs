use crate::core::Result;
use crate::rigid_body::Vec2;

use super::config::Bounds;
use super::WorldCore;

pub(super) fn enable_step_stats(world: &mut WorldCore, enabled: bool) {
    world.stats_enabled = enabled;
    if !enabled {
        world.stats.reset();
    }
}

pub(super) fn set_gravity(world: &mut WorldCore, x: f32, y: f32) {
    world.gravity = Vec2::new(x, y);
}

pub(super) fn set_world_bounds_restitution(world: &mut WorldCore, restitution: f32) {
    world.world_bounds_restitution = restitution.clamp(0.0, 1.0);
}

pub(super) fn set_bounds(world: &mut WorldCore, x: f32, y: f32, width: f32, height: f32) -> Result<()> {
    let bounds = Bounds::new(x, y, width, height).map_err(|err| {
        log::warn!("set_bounds rejected: {}", err);
        err
    })?;
    world.bounds = Some(bounds);
    Ok(())
}
