use crate::rigid_body::{Body, Vec2};

/// Semi-implicit Euler for every body, then clear last step's contact flags.
pub(super) fn integrate_bodies(bodies: &mut [Body], gravity: Vec2, dt: f32) {
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        bodies.par_iter_mut().for_each(|body| integrate_body(body, gravity, dt));
    }
    #[cfg(not(feature = "parallel"))]
    {
        for body in bodies.iter_mut() {
            integrate_body(body, gravity, dt);
        }
    }
}

#[inline]
fn integrate_body(body: &mut Body, gravity: Vec2, dt: f32) {
    let mut accel = body.acceleration;
    if body.allow_gravity {
        accel += gravity;
    }
    body.velocity += accel * dt;
    body.pos += body.velocity * dt;

    body.reset_contacts();
}
