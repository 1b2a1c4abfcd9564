use crate::collision::{overlaps, resolve_against_static, resolve_mutual, Resolution};
use crate::rigid_body::Body;

use super::WorldCore;

#[derive(Default)]
pub(super) struct ResolveCounts {
    pub(super) overlapping: u32,
    pub(super) separated: u32,
    pub(super) callbacks: u32,
}

/// Disjoint mutable borrows of two bodies. `i != j` is guaranteed by the registry.
fn pair_mut(bodies: &mut [Body], i: usize, j: usize) -> (&mut Body, &mut Body) {
    debug_assert_ne!(i, j);
    if i < j {
        let (lo, hi) = bodies.split_at_mut(j);
        (&mut lo[i], &mut hi[0])
    } else {
        let (lo, hi) = bodies.split_at_mut(i);
        (&mut hi[0], &mut lo[j])
    }
}

/// Test and resolve every collider in registration order. Later colliders see the
/// positions already corrected by earlier ones.
pub(super) fn resolve_colliders(world: &mut WorldCore, dt: f32) -> ResolveCounts {
    let WorldCore { bodies, body_index, colliders, rng, gravity, .. } = world;
    let gravity = *gravity;
    let mut counts = ResolveCounts::default();

    for collider in colliders.iter_mut() {
        let (Some(&ia), Some(&ib)) = (body_index.get(&collider.a), body_index.get(&collider.b)) else {
            continue;
        };
        if !overlaps(&bodies[ia], &bodies[ib]) {
            continue;
        }
        counts.overlapping += 1;

        if collider.separate {
            let strategy = Resolution::classify(bodies[ia].mass, bodies[ib].mass);
            let (a, b) = pair_mut(bodies, ia, ib);
            match strategy {
                Resolution::AgainstStatic { movable_is_a: true } => {
                    resolve_against_static(a, b, dt, &mut **rng);
                    counts.separated += 1;
                }
                Resolution::AgainstStatic { movable_is_a: false } => {
                    resolve_against_static(b, a, dt, &mut **rng);
                    counts.separated += 1;
                }
                Resolution::Mutual => {
                    resolve_mutual(a, b, gravity, &mut **rng);
                    counts.separated += 1;
                }
                Resolution::Skip => {}
            }
        }

        if let Some(callback) = collider.callback.as_mut() {
            callback(&bodies[ia], &bodies[ib]);
            counts.callbacks += 1;
        }
    }

    counts
}
