use wasm_bindgen::prelude::*;

use crate::collision::{ColliderId, ContactCallback};
use crate::rigid_body::{Body, BodyId, MassClass};

use super::perf_stats::StepStats;
use super::WorldCore;

/// JS handle to a physics world. Ids cross the boundary as `u32`, 0 meaning "none".
#[wasm_bindgen]
pub struct World {
    core: WorldCore,
}

#[wasm_bindgen]
impl World {
    /// Create a world with the given gravity and default settings
    #[wasm_bindgen(constructor)]
    pub fn new(gravity_x: f32, gravity_y: f32) -> Self {
        let mut core = WorldCore::new();
        core.set_gravity(gravity_x, gravity_y);
        Self { core }
    }

    /// Create a world from a JSON `WorldConfig`
    #[wasm_bindgen(js_name = fromConfigJson)]
    pub fn from_config_json(json: &str) -> Result<World, JsValue> {
        let core = WorldCore::from_config_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self { core })
    }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> usize { self.core.body_count() }

    #[wasm_bindgen(getter)]
    pub fn collider_count(&self) -> usize { self.core.collider_count() }

    // === SETTINGS ===

    pub fn set_gravity(&mut self, x: f32, y: f32) {
        self.core.set_gravity(x, y);
    }

    pub fn set_world_bounds_restitution(&mut self, restitution: f32) {
        self.core.set_world_bounds_restitution(restitution);
    }

    /// Returns false (and keeps the old bounds) for a degenerate rectangle
    pub fn set_bounds(&mut self, x: f32, y: f32, width: f32, height: f32) -> bool {
        self.core.set_bounds(x, y, width, height).is_ok()
    }

    pub fn clear_bounds(&mut self) {
        self.core.clear_bounds();
    }

    pub fn set_seed(&mut self, seed: u32) {
        self.core.set_seed(seed);
    }

    /// Enable or disable per-step stats (adds timing overhead when enabled)
    pub fn enable_step_stats(&mut self, enabled: bool) {
        self.core.enable_step_stats(enabled);
    }

    /// Get last step stats (zeros when disabled)
    pub fn get_step_stats(&self) -> StepStats {
        self.core.step_stats()
    }

    // === BODIES ===

    /// Add a body with its top-left corner at (x, y).
    /// Returns the body id, or 0 when the size is invalid or ids are exhausted.
    pub fn add_body(&mut self, x: f32, y: f32, width: f32, height: f32, immovable: bool, restitution: f32) -> u32 {
        let mass = if immovable { MassClass::Immovable } else { MassClass::Movable };
        match Body::rect(x, y, width, height, mass, restitution).and_then(|body| self.core.add_body(body)) {
            Ok(id) => id.0,
            Err(err) => {
                log::warn!("add_body rejected: {}", err);
                0
            }
        }
    }

    /// Remove a body and every collider that references it
    pub fn remove_body(&mut self, id: u32) -> bool {
        self.core.remove_body(BodyId(id)).is_ok()
    }

    pub fn set_body_position(&mut self, id: u32, x: f32, y: f32) -> bool {
        self.with_body(id, |b| {
            b.pos.x = x;
            b.pos.y = y;
        })
    }

    pub fn set_body_velocity(&mut self, id: u32, vx: f32, vy: f32) -> bool {
        self.with_body(id, |b| {
            b.velocity.x = vx;
            b.velocity.y = vy;
        })
    }

    pub fn set_body_acceleration(&mut self, id: u32, ax: f32, ay: f32) -> bool {
        self.with_body(id, |b| {
            b.acceleration.x = ax;
            b.acceleration.y = ay;
        })
    }

    pub fn set_body_size(&mut self, id: u32, width: f32, height: f32) -> bool {
        match self.core.body_mut(BodyId(id)) {
            Some(body) => body.set_size(width, height).is_ok(),
            None => false,
        }
    }

    pub fn set_body_friction(&mut self, id: u32, fx: f32, fy: f32) -> bool {
        self.with_body(id, |b| b.set_friction(fx, fy))
    }

    pub fn set_body_restitution(&mut self, id: u32, restitution: f32) -> bool {
        self.with_body(id, |b| b.set_restitution(restitution))
    }

    pub fn set_body_allow_gravity(&mut self, id: u32, allow: bool) -> bool {
        self.with_body(id, |b| b.allow_gravity = allow)
    }

    pub fn set_body_collide_world_bounds(&mut self, id: u32, collide: bool) -> bool {
        self.with_body(id, |b| b.collide_world_bounds = collide)
    }

    pub fn set_body_immovable(&mut self, id: u32, immovable: bool) -> bool {
        self.with_body(id, |b| {
            b.mass = if immovable { MassClass::Immovable } else { MassClass::Movable };
        })
    }

    pub fn body_x(&self, id: u32) -> Option<f32> {
        self.core.body(BodyId(id)).map(|b| b.pos.x)
    }

    pub fn body_y(&self, id: u32) -> Option<f32> {
        self.core.body(BodyId(id)).map(|b| b.pos.y)
    }

    pub fn body_mid_x(&self, id: u32) -> Option<f32> {
        self.core.body(BodyId(id)).map(|b| b.mid_x())
    }

    pub fn body_mid_y(&self, id: u32) -> Option<f32> {
        self.core.body(BodyId(id)).map(|b| b.mid_y())
    }

    pub fn body_vx(&self, id: u32) -> Option<f32> {
        self.core.body(BodyId(id)).map(|b| b.velocity.x)
    }

    pub fn body_vy(&self, id: u32) -> Option<f32> {
        self.core.body(BodyId(id)).map(|b| b.velocity.y)
    }

    /// Blocked sides as a FLAG_* bitmask (0 for an unknown id)
    pub fn body_blocked(&self, id: u32) -> u8 {
        self.core.body(BodyId(id)).map_or(0, |b| b.blocked.bits())
    }

    /// Touching sides as a FLAG_* bitmask (0 for an unknown id)
    pub fn body_touching(&self, id: u32) -> u8 {
        self.core.body(BodyId(id)).map_or(0, |b| b.touching.bits())
    }

    // === COLLIDERS ===

    /// Register a pair. `callback` is called as `callback(aId, bId)` on every
    /// overlapping step. Returns the collider id, or 0 if either body is unknown.
    pub fn add_collider(&mut self, a: u32, b: u32, callback: Option<js_sys::Function>, separate: bool) -> u32 {
        let callback = callback.map(js_contact_callback);
        match self.core.add_collider(&BodyId(a), &BodyId(b), callback, separate) {
            Ok(id) => id.0,
            Err(err) => {
                log::warn!("add_collider rejected: {}", err);
                0
            }
        }
    }

    pub fn remove_collider(&mut self, id: u32) -> bool {
        self.core.remove_collider(ColliderId(id)).is_ok()
    }

    // === SIMULATION ===

    /// Advance one frame. `time` is the frame timestamp, `delta` the elapsed ms.
    pub fn step(&mut self, _time: f64, delta: f32) {
        self.core.step(delta);
    }

    /// JSON array of every body (debug overlays)
    pub fn snapshot_json(&self) -> Result<String, JsValue> {
        self.core.snapshot_json().map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Drop every body and collider
    pub fn destroy(&mut self) {
        self.core.destroy();
    }
}

impl World {
    pub fn core(&self) -> &WorldCore {
        &self.core
    }

    pub fn core_mut(&mut self) -> &mut WorldCore {
        &mut self.core
    }

    fn with_body(&mut self, id: u32, f: impl FnOnce(&mut Body)) -> bool {
        match self.core.body_mut(BodyId(id)) {
            Some(body) => {
                f(body);
                true
            }
            None => false,
        }
    }
}

fn js_contact_callback(f: js_sys::Function) -> ContactCallback {
    Box::new(move |a: &Body, b: &Body| {
        let a_id = JsValue::from(a.id().0);
        let b_id = JsValue::from(b.id().0);
        if let Err(err) = f.call2(&JsValue::NULL, &a_id, &b_id) {
            log::warn!("collider callback threw: {:?}", err);
        }
    })
}
