use serde::Serialize;

use crate::core::{PhysicsError, Result};
use crate::rigid_body::{Body, ContactFlags, MassClass};

use super::WorldCore;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BodySnapshot<'a> {
    id: u32,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    vx: f32,
    vy: f32,
    mass: MassClass,
    blocked: &'a ContactFlags,
    touching: &'a ContactFlags,
}

impl<'a> From<&'a Body> for BodySnapshot<'a> {
    fn from(body: &'a Body) -> Self {
        Self {
            id: body.id().0,
            x: body.pos.x,
            y: body.pos.y,
            width: body.width(),
            height: body.height(),
            vx: body.velocity.x,
            vy: body.velocity.y,
            mass: body.mass,
            blocked: &body.blocked,
            touching: &body.touching,
        }
    }
}

pub(super) fn snapshot_json(world: &WorldCore) -> Result<String> {
    let bodies: Vec<BodySnapshot<'_>> = world.bodies.iter().map(BodySnapshot::from).collect();
    serde_json::to_string(&bodies).map_err(|e| PhysicsError::Snapshot(e.to_string()))
}
