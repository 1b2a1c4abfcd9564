use crate::core::{PhysicsError, Result};
use crate::rigid_body::BodyId;
use crate::simulation::WorldCore;

use super::clock::FrameClock;
use super::game_object::{BodySlot, GameObject};

/// Scene-side owner of a physics world.
///
/// The scene forwards child lifecycle and frame events here: bodies join the world
/// when their object enters the scene and are handed back when it leaves.
pub struct PhysicsPlugin {
    world: WorldCore,
    clock: FrameClock,
}

impl PhysicsPlugin {
    pub fn new(world: WorldCore) -> Self {
        Self { world, clock: FrameClock::new() }
    }

    pub fn world(&self) -> &WorldCore {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut WorldCore {
        &mut self.world
    }

    /// Start simulating the object's detached body. Returns the new id, or the
    /// existing one if the object is already attached to this world.
    ///
    /// An attached id this world does not know is stale: the slot is emptied and
    /// the object is left untracked.
    pub fn on_child_added(&mut self, object: &mut GameObject) -> Option<BodyId> {
        if let Some(id) = object.attached_id() {
            if self.world.contains_body(id) {
                return Some(id);
            }
            log::warn!("scene child held stale body {:?}; slot cleared", id);
            object.set_slot(BodySlot::Empty);
            return None;
        }
        let body = object.take_detached()?;
        let id = match self.world.add_body(body) {
            Ok(id) => id,
            Err(err) => {
                log::warn!("scene child not attached: {err}");
                return None;
            }
        };
        object.set_slot(BodySlot::Attached(id));
        log::debug!("scene child attached as {:?}", id);
        Some(id)
    }

    /// Stop simulating the object's body (dropping its colliders) and hand it back.
    /// A stale id empties the slot and is reported as `UnknownBody`.
    pub fn on_child_removed(&mut self, object: &mut GameObject) -> Result<()> {
        let Some(id) = object.attached_id() else {
            return Ok(());
        };
        match self.world.remove_body(id) {
            Ok(body) => {
                object.set_slot(BodySlot::Detached(body));
                Ok(())
            }
            Err(err @ PhysicsError::UnknownBody(_)) => {
                object.set_slot(BodySlot::Empty);
                Err(err)
            }
            Err(err) => Err(err),
        }
    }

    /// Frame hook. `delta` is the elapsed time in milliseconds.
    pub fn update(&mut self, time: f64, delta: f32) {
        self.clock.tick(time);
        self.world.step(delta);
    }

    /// Frame hook for callers that only have the absolute timestamp.
    /// Returns the clamped delta that was stepped.
    pub fn advance(&mut self, time: f64) -> f32 {
        let delta = self.clock.tick(time);
        self.world.step(delta);
        delta
    }

    /// Move every attached object to its body after the step.
    pub fn post_update(&self, objects: &mut [GameObject]) {
        for object in objects.iter_mut() {
            object.sync_from_body(&self.world);
        }
    }

    /// Hand every attached body in `objects` back to its object, then clear the world.
    /// Objects can rejoin a later world through `on_child_added`.
    pub fn shutdown(&mut self, objects: &mut [GameObject]) {
        for object in objects.iter_mut() {
            if object.attached_id().is_some() && self.on_child_removed(object).is_err() {
                log::debug!("stale scene child dropped on shutdown");
            }
        }
        self.world.destroy();
        self.clock.reset();
    }
}

impl Default for PhysicsPlugin {
    fn default() -> Self {
        Self::new(WorldCore::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rigid_body::{Body, MassClass};

    fn object_with_body(x: f32, y: f32, mass: MassClass) -> GameObject {
        let mut object = GameObject::new(x, y, 16.0, 16.0);
        object.add_body(Body::new(mass, 0.0)).unwrap();
        object
    }

    #[test]
    fn child_lifecycle_moves_body_in_and_out() {
        let mut plugin = PhysicsPlugin::default();
        let mut hero = object_with_body(50.0, 50.0, MassClass::Movable);
        let mut wall = object_with_body(100.0, 50.0, MassClass::Immovable);

        let hero_id = plugin.on_child_added(&mut hero).unwrap();
        let wall_id = plugin.on_child_added(&mut wall).unwrap();
        assert_eq!(plugin.on_child_added(&mut hero), Some(hero_id));
        assert_eq!(plugin.world().body_count(), 2);

        plugin.world_mut().add_collider(&hero, &wall, None, true).unwrap();
        plugin.on_child_removed(&mut hero).unwrap();

        assert_eq!(plugin.world().body_count(), 1);
        assert_eq!(plugin.world().collider_count(), 0);
        assert!(plugin.world().contains_body(wall_id));
        let body = hero.detached_body_mut().unwrap();
        assert_eq!(body.id(), BodyId::NONE);
        assert_eq!(body.mid_x(), 50.0);
    }

    #[test]
    fn object_without_body_is_not_tracked() {
        let mut plugin = PhysicsPlugin::default();
        let mut label = GameObject::new(0.0, 0.0, 10.0, 10.0);
        assert_eq!(plugin.on_child_added(&mut label), None);
        assert!(plugin.on_child_removed(&mut label).is_ok());
        assert_eq!(plugin.world().body_count(), 0);
    }

    #[test]
    fn advance_steps_with_clamped_delta_and_syncs() {
        let mut plugin = PhysicsPlugin::default();
        let mut ball = object_with_body(0.0, 0.0, MassClass::Movable);
        ball.detached_body_mut().unwrap().velocity.x = 100.0;
        plugin.on_child_added(&mut ball);

        // First frame arrives late: only 200 ms are simulated.
        assert_eq!(plugin.advance(1_000.0), 200.0);
        let mut objects = [ball];
        plugin.post_update(&mut objects);
        assert!((objects[0].x - 20.0).abs() < 1e-4);
        assert_eq!(plugin.world().frame(), 1);
    }

    #[test]
    fn shutdown_clears_world() {
        let mut plugin = PhysicsPlugin::default();
        let mut ball = object_with_body(0.0, 0.0, MassClass::Movable);
        plugin.on_child_added(&mut ball);
        let mut objects = [ball];
        plugin.shutdown(&mut objects);
        assert_eq!(plugin.world().body_count(), 0);
        assert!(!objects[0].sync_from_body(plugin.world()));
    }

    #[test]
    fn scene_restart_reattaches_returned_bodies() {
        let mut plugin = PhysicsPlugin::default();
        let mut hero = object_with_body(50.0, 50.0, MassClass::Movable);
        hero.detached_body_mut().unwrap().velocity.x = 30.0;
        let first = plugin.on_child_added(&mut hero).unwrap();

        let mut objects = [hero];
        plugin.shutdown(&mut objects);
        let [mut hero] = objects;
        assert_eq!(hero.attached_id(), None);
        assert_eq!(hero.detached_body_mut().unwrap().velocity.x, 30.0);

        let second = plugin.on_child_added(&mut hero).unwrap();
        assert_ne!(second, first);
        assert_eq!(plugin.world().body_count(), 1);
        assert_eq!(hero.attached_id(), Some(second));
        assert!(hero.sync_from_body(plugin.world()));
    }

    #[test]
    fn stale_attached_id_is_cleared() {
        let mut other = PhysicsPlugin::default();
        let mut plugin = PhysicsPlugin::default();
        let mut hero = object_with_body(0.0, 0.0, MassClass::Movable);
        let foreign = other.on_child_added(&mut hero).unwrap();
        other.world_mut().destroy();

        assert_eq!(plugin.on_child_added(&mut hero), None);
        assert!(matches!(hero.slot(), BodySlot::Empty));
        assert_eq!(plugin.world().body_count(), 0);

        hero.set_slot(BodySlot::Attached(foreign));
        assert_eq!(plugin.on_child_removed(&mut hero), Err(PhysicsError::UnknownBody(foreign)));
        assert!(matches!(hero.slot(), BodySlot::Empty));
    }
}
