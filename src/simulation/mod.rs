//! World - owns bodies and colliders and advances them one frame at a time
//!
//! The world only orchestrates:
//! - integration lives in step/integrate.rs
//! - collider testing and resolution in step/resolve.rs (algorithms in collision/)
//! - world-bounds containment in step/bounds.rs
//! - registry bookkeeping in registry/registry.rs

use std::collections::HashMap;

use crate::collision::{Collider, ColliderId, ContactCallback, PhysicsObject, RandomSource, Xorshift32};
use crate::core::Result;
use crate::rigid_body::{Body, BodyId, Vec2};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/config.rs"]
mod config;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "registry/registry.rs"]
mod registry;
#[path = "step/integrate.rs"]
mod integrate;
#[path = "step/resolve.rs"]
mod resolve;
#[path = "step/bounds.rs"]
mod bounds;
#[path = "step/step.rs"]
mod step;
#[path = "snapshot/snapshot.rs"]
mod snapshot;
mod facade;

pub use config::{Bounds, WorldConfig};
pub use facade::World;
pub use perf_stats::StepStats;

use perf_timer::PhaseTimer;

/// The physics world for one scene
pub struct WorldCore {
    bodies: Vec<Body>,
    /// BodyId -> position in `bodies`, rebuilt on removal
    body_index: HashMap<BodyId, usize>,
    colliders: Vec<Collider>,
    next_body_id: u32,
    next_collider_id: u32,

    // Settings
    gravity: Vec2,
    world_bounds_restitution: f32,
    bounds: Option<Bounds>,
    rng: Box<dyn RandomSource>,

    // State
    frame: u64,

    // Step stats
    stats_enabled: bool,
    stats: StepStats,
}

impl WorldCore {
    /// World with default settings: no gravity, no bounds, bounce-back restitution 1.
    pub fn new() -> Self {
        init::create_world_core(&WorldConfig::default())
    }

    pub fn with_config(config: &WorldConfig) -> Result<Self> {
        config.validate()?;
        Ok(init::create_world_core(config))
    }

    pub fn from_config_json(json: &str) -> Result<Self> {
        let config = WorldConfig::from_json(json)?;
        log::debug!("world config loaded: {:?}", config);
        Ok(init::create_world_core(&config))
    }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn body_count(&self) -> usize { self.bodies.len() }

    pub fn collider_count(&self) -> usize { self.colliders.len() }

    /// Bodies in registration order
    pub fn bodies(&self) -> &[Body] { &self.bodies }

    /// Colliders in registration (= resolution) order
    pub fn colliders(&self) -> &[Collider] { &self.colliders }

    pub fn body(&self, id: BodyId) -> Option<&Body> {
        self.body_index.get(&id).map(|&idx| &self.bodies[idx])
    }

    pub fn body_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        match self.body_index.get(&id) {
            Some(&idx) => Some(&mut self.bodies[idx]),
            None => None,
        }
    }

    pub fn contains_body(&self, id: BodyId) -> bool {
        self.body_index.contains_key(&id)
    }

    pub fn collider(&self, id: ColliderId) -> Option<&Collider> {
        self.colliders.iter().find(|c| c.id == id)
    }

    // === SETTINGS ===

    pub fn gravity(&self) -> Vec2 {
        self.gravity
    }

    pub fn set_gravity(&mut self, x: f32, y: f32) {
        settings::set_gravity(self, x, y);
    }

    pub fn world_bounds_restitution(&self) -> f32 {
        self.world_bounds_restitution
    }

    /// Clamped to [0, 1].
    pub fn set_world_bounds_restitution(&mut self, restitution: f32) {
        settings::set_world_bounds_restitution(self, restitution);
    }

    pub fn bounds(&self) -> Option<Bounds> {
        self.bounds
    }

    pub fn set_bounds(&mut self, x: f32, y: f32, width: f32, height: f32) -> Result<()> {
        settings::set_bounds(self, x, y, width, height)
    }

    pub fn clear_bounds(&mut self) {
        self.bounds = None;
    }

    /// Reseed the built-in xorshift source.
    pub fn set_seed(&mut self, seed: u32) {
        self.rng = Box::new(Xorshift32::new(seed));
    }

    /// Replace the source used to pick the bounce axis of corner hits.
    pub fn set_random_source(&mut self, rng: Box<dyn RandomSource>) {
        self.rng = rng;
    }

    pub fn enable_step_stats(&mut self, enabled: bool) {
        settings::enable_step_stats(self, enabled);
    }

    /// Last step snapshot (zeros when stats are disabled)
    pub fn step_stats(&self) -> StepStats {
        self.stats.clone()
    }

    // === REGISTRY ===

    /// Track `body` and hand back its id. Fails with `IdsExhausted` once the id
    /// counter runs out; the world is unchanged.
    pub fn add_body(&mut self, body: Body) -> Result<BodyId> {
        registry::add_body(self, body)
    }

    /// Stop tracking a body, dropping every collider that references it.
    pub fn remove_body(&mut self, id: BodyId) -> Result<Body> {
        registry::remove_body(self, id)
    }

    /// Register a pair. Both sides must currently own a body tracked by this world.
    pub fn add_collider<A, B>(
        &mut self,
        a: &A,
        b: &B,
        callback: Option<ContactCallback>,
        separate: bool,
    ) -> Result<ColliderId>
    where
        A: PhysicsObject + ?Sized,
        B: PhysicsObject + ?Sized,
    {
        registry::add_collider(self, a.body_id(), b.body_id(), callback, separate)
    }

    pub fn remove_collider(&mut self, id: ColliderId) -> Result<()> {
        registry::remove_collider(self, id)
    }

    pub fn colliders_of_body(&self, id: BodyId) -> Vec<ColliderId> {
        registry::colliders_of_body(self, id)
    }

    /// Forget every body and collider. Bodies themselves are dropped untouched.
    pub fn destroy(&mut self) {
        registry::destroy(self);
    }

    // === SIMULATION ===

    /// Advance the world by `delta_ms` milliseconds.
    pub fn step(&mut self, delta_ms: f32) {
        step::step(self, delta_ms);
    }

    /// JSON array describing every body, for debug overlays.
    pub fn snapshot_json(&self) -> Result<String> {
        snapshot::snapshot_json(self)
    }
}

impl Default for WorldCore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
