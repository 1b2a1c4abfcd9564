use crate::collision::{Collider, ColliderId, ContactCallback};
use crate::core::{PhysicsError, Result};
use crate::rigid_body::{Body, BodyId};

use super::WorldCore;

/// Take the next id from `counter`. The counter never wraps, so an id is never reissued.
fn issue(counter: &mut u32, kind: &'static str) -> Result<u32> {
    let id = *counter;
    *counter = id.checked_add(1).ok_or_else(|| {
        log::warn!("{} id space exhausted", kind);
        PhysicsError::IdsExhausted(kind)
    })?;
    Ok(id)
}

pub(super) fn add_body(world: &mut WorldCore, mut body: Body) -> Result<BodyId> {
    let id = BodyId(issue(&mut world.next_body_id, "body")?);

    body.id = id;
    world.body_index.insert(id, world.bodies.len());
    world.bodies.push(body);
    Ok(id)
}

pub(super) fn remove_body(world: &mut WorldCore, id: BodyId) -> Result<Body> {
    let Some(&idx) = world.body_index.get(&id) else {
        log::debug!("remove_body: {:?} is not tracked", id);
        return Err(PhysicsError::UnknownBody(id));
    };

    let before = world.colliders.len();
    world.colliders.retain(|c| !c.involves(id));
    let dropped = before - world.colliders.len();
    if dropped > 0 {
        log::debug!("remove_body: dropped {} collider(s) of {:?}", dropped, id);
    }

    // Ordered removal keeps registration order; shift the index of everything after.
    let mut body = world.bodies.remove(idx);
    world.body_index.remove(&id);
    for (i, b) in world.bodies.iter().enumerate().skip(idx) {
        world.body_index.insert(b.id, i);
    }

    body.id = BodyId::NONE;
    Ok(body)
}

pub(super) fn add_collider(
    world: &mut WorldCore,
    a: Option<BodyId>,
    b: Option<BodyId>,
    callback: Option<ContactCallback>,
    separate: bool,
) -> Result<ColliderId> {
    let (Some(a), Some(b)) = (a, b) else {
        log::debug!("add_collider: a side has no body");
        return Err(PhysicsError::MissingBody);
    };
    if !world.contains_body(a) || !world.contains_body(b) {
        log::debug!("add_collider: {:?} or {:?} is not tracked", a, b);
        return Err(PhysicsError::MissingBody);
    }
    if a == b {
        return Err(PhysicsError::SelfCollider(a));
    }

    let id = ColliderId(issue(&mut world.next_collider_id, "collider")?);
    world.colliders.push(Collider { id, a, b, callback, separate });
    Ok(id)
}

pub(super) fn remove_collider(world: &mut WorldCore, id: ColliderId) -> Result<()> {
    match world.colliders.iter().position(|c| c.id == id) {
        Some(idx) => {
            world.colliders.remove(idx);
            Ok(())
        }
        None => Err(PhysicsError::UnknownCollider(id)),
    }
}

pub(super) fn colliders_of_body(world: &WorldCore, id: BodyId) -> Vec<ColliderId> {
    world
        .colliders
        .iter()
        .filter(|c| c.involves(id))
        .map(|c| c.id)
        .collect()
}

/// Ids keep counting up so handles from before the reset never alias new entries.
pub(super) fn destroy(world: &mut WorldCore) {
    world.colliders.clear();
    world.bodies.clear();
    world.body_index.clear();
}
