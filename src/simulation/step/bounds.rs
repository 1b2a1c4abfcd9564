use crate::rigid_body::{Body, Side};

use super::config::Bounds;

/// Clamp opted-in bodies inside `bounds`. Each edge is checked on its own, so a body
/// in a corner is clamped (and bounced) on both axes. Returns the number of clamps.
pub(super) fn contain_bodies(bodies: &mut [Body], bounds: &Bounds, restitution: f32) -> u32 {
    let mut clamps = 0;

    for body in bodies.iter_mut().filter(|b| b.collide_world_bounds) {
        if body.left() < bounds.x {
            body.pos.x = bounds.x;
            body.velocity.x = -body.velocity.x * restitution;
            body.blocked.mark(Side::Left);
            clamps += 1;
        }
        if body.top() < bounds.y {
            body.pos.y = bounds.y;
            body.velocity.y = -body.velocity.y * restitution;
            body.blocked.mark(Side::Top);
            clamps += 1;
        }
        if body.right() > bounds.right() {
            body.pos.x = bounds.right() - body.width();
            body.velocity.x = -body.velocity.x * restitution;
            body.blocked.mark(Side::Right);
            clamps += 1;
        }
        if body.bottom() > bounds.bottom() {
            body.pos.y = bounds.bottom() - body.height();
            body.velocity.y = -body.velocity.y * restitution;
            body.blocked.mark(Side::Bottom);
            clamps += 1;
        }
    }

    clamps
}
