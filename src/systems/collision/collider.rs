use std::fmt;

use crate::rigid_body::{Body, BodyId};

/// Handle to a registered collider. 0 is never issued.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ColliderId(pub u32);

/// Called with (A, B) after every step in which the pair overlaps.
pub type ContactCallback = Box<dyn FnMut(&Body, &Body)>;

/// Anything that may own a body tracked by a world.
pub trait PhysicsObject {
    fn body_id(&self) -> Option<BodyId>;
}

impl PhysicsObject for BodyId {
    fn body_id(&self) -> Option<BodyId> {
        if *self == BodyId::NONE {
            None
        } else {
            Some(*self)
        }
    }
}

impl PhysicsObject for Option<BodyId> {
    fn body_id(&self) -> Option<BodyId> {
        self.and_then(|id| id.body_id())
    }
}

/// A registered pair of bodies
pub struct Collider {
    pub(crate) id: ColliderId,
    pub(crate) a: BodyId,
    pub(crate) b: BodyId,
    pub(crate) callback: Option<ContactCallback>,
    /// When false the pair only reports overlaps (trigger).
    pub(crate) separate: bool,
}

impl Collider {
    pub fn id(&self) -> ColliderId {
        self.id
    }

    pub fn bodies(&self) -> (BodyId, BodyId) {
        (self.a, self.b)
    }

    pub fn separates(&self) -> bool {
        self.separate
    }

    pub fn involves(&self, body: BodyId) -> bool {
        self.a == body || self.b == body
    }
}

impl fmt::Debug for Collider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Collider")
            .field("id", &self.id)
            .field("a", &self.a)
            .field("b", &self.b)
            .field("callback", &self.callback.is_some())
            .field("separate", &self.separate)
            .finish()
    }
}
