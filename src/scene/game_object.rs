use crate::collision::PhysicsObject;
use crate::core::{PhysicsError, Result};
use crate::rigid_body::{Body, BodyId, Vec2};
use crate::simulation::WorldCore;

/// Where a game object's body currently lives.
#[derive(Debug, Default)]
pub enum BodySlot {
    #[default]
    Empty,
    /// Owned by the object, not simulated yet.
    Detached(Body),
    /// Owned by a world.
    Attached(BodyId),
}

/// A scene child drawn around its center `(x, y)`.
#[derive(Debug)]
pub struct GameObject {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Draw position relative to the body center. Applied when syncing from the
    /// body only; `add_body` centers the body on `(x, y)` itself.
    pub offset_x: f32,
    pub offset_y: f32,
    slot: BodySlot,
}

impl GameObject {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height, offset_x: 0.0, offset_y: 0.0, slot: BodySlot::Empty }
    }

    pub fn slot(&self) -> &BodySlot {
        &self.slot
    }

    /// Give the object a body sized to the object and centered on it.
    /// Replaces a detached body; fails while a body is attached to a world.
    pub fn add_body(&mut self, mut body: Body) -> Result<()> {
        if let BodySlot::Attached(id) = self.slot {
            return Err(PhysicsError::AlreadyAttached(id));
        }
        body.set_size(self.width, self.height)?;
        body.pos = Vec2::new(self.x - body.half_width(), self.y - body.half_height());
        self.slot = BodySlot::Detached(body);
        Ok(())
    }

    /// The body while it is still owned by this object.
    pub fn detached_body_mut(&mut self) -> Option<&mut Body> {
        match &mut self.slot {
            BodySlot::Detached(body) => Some(body),
            _ => None,
        }
    }

    pub fn attached_id(&self) -> Option<BodyId> {
        match self.slot {
            BodySlot::Attached(id) => Some(id),
            _ => None,
        }
    }

    /// Move the object to its simulated body's center. False when not attached to `world`.
    pub fn sync_from_body(&mut self, world: &WorldCore) -> bool {
        let Some(body) = self.attached_id().and_then(|id| world.body(id)) else {
            return false;
        };
        self.x = body.mid_x() + self.offset_x;
        self.y = body.mid_y() + self.offset_y;
        true
    }

    pub(super) fn take_detached(&mut self) -> Option<Body> {
        match std::mem::take(&mut self.slot) {
            BodySlot::Detached(body) => Some(body),
            other => {
                self.slot = other;
                None
            }
        }
    }

    pub(super) fn set_slot(&mut self, slot: BodySlot) {
        self.slot = slot;
    }
}

impl PhysicsObject for GameObject {
    fn body_id(&self) -> Option<BodyId> {
        self.attached_id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rigid_body::MassClass;

    #[test]
    fn add_body_sizes_and_centers_on_object() {
        let mut player = GameObject::new(100.0, 50.0, 20.0, 40.0);
        player.add_body(Body::new(MassClass::Movable, 0.0)).unwrap();

        let body = player.detached_body_mut().unwrap();
        assert_eq!(body.width(), 20.0);
        assert_eq!(body.height(), 40.0);
        assert_eq!(body.mid_x(), 100.0);
        assert_eq!(body.mid_y(), 50.0);
        assert_eq!(player.body_id(), None);
    }

    #[test]
    fn add_body_ignores_draw_offset() {
        let mut sprite = GameObject::new(40.0, 40.0, 10.0, 10.0);
        sprite.offset_x = 3.0;
        sprite.offset_y = -4.0;
        sprite.add_body(Body::default()).unwrap();

        let body = sprite.detached_body_mut().unwrap();
        assert_eq!(body.mid_x(), 40.0);
        assert_eq!(body.mid_y(), 40.0);
        assert_eq!(body.pos, Vec2::new(35.0, 35.0));
    }

    #[test]
    fn degenerate_object_cannot_take_a_body() {
        let mut marker = GameObject::new(0.0, 0.0, 0.0, 10.0);
        assert!(matches!(
            marker.add_body(Body::default()),
            Err(PhysicsError::InvalidDimensions { .. })
        ));
        assert!(matches!(marker.slot(), BodySlot::Empty));
    }

    #[test]
    fn sync_applies_offset() {
        let mut world = WorldCore::new();
        let mut sprite = GameObject::new(0.0, 0.0, 10.0, 10.0);
        sprite.offset_y = -4.0;

        let id = world.add_body(Body::rect(20.0, 30.0, 10.0, 10.0, MassClass::Movable, 0.0).unwrap()).unwrap();
        sprite.set_slot(BodySlot::Attached(id));

        assert!(sprite.sync_from_body(&world));
        assert_eq!(sprite.x, 25.0);
        assert_eq!(sprite.y, 31.0);
    }
}
