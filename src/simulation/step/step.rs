use super::bounds::contain_bodies;
use super::integrate::integrate_bodies;
use super::resolve::resolve_colliders;
use super::{PhaseTimer, WorldCore};

/// Integrate -> reset flags -> resolve colliders in order -> world bounds.
pub(super) fn step(world: &mut WorldCore, delta_ms: f32) {
    let stats_on = world.stats_enabled;
    if stats_on {
        world.stats.reset();
        world.stats.bodies = world.bodies.len() as u32;
        world.stats.colliders = world.colliders.len() as u32;
    }
    let whole = PhaseTimer::start_if(stats_on);

    let dt = delta_ms / 1000.0;

    // === INTEGRATION (also resets blocked/touching) ===
    let phase = PhaseTimer::start_if(stats_on);
    integrate_bodies(&mut world.bodies, world.gravity, dt);
    if let Some(ms) = phase.lap() {
        world.stats.integrate_ms = ms;
    }

    // === COLLIDERS ===
    let phase = PhaseTimer::start_if(stats_on);
    let counts = resolve_colliders(world, dt);
    if let Some(ms) = phase.lap() {
        world.stats.collide_ms = ms;
        world.stats.pairs_overlapping = counts.overlapping;
        world.stats.pairs_separated = counts.separated;
        world.stats.callbacks_fired = counts.callbacks;
    }

    // === WORLD BOUNDS ===
    if let Some(bounds) = world.bounds {
        let phase = PhaseTimer::start_if(stats_on);
        let clamps = contain_bodies(&mut world.bodies, &bounds, world.world_bounds_restitution);
        if let Some(ms) = phase.lap() {
            world.stats.bounds_ms = ms;
            world.stats.bounds_clamps = clamps;
        }
    }

    world.frame += 1;

    if let Some(ms) = whole.lap() {
        world.stats.step_ms = ms;
    }
}
