//! Collision - overlap tests, collider registry types and pairwise separation
//!
//! Pairs are explicit: nothing here searches for neighbours. Each registered
//! collider is tested with a plain AABB check and, when it separates, resolved by
//! one of two strategies chosen from the bodies' mass classes.

mod collider;
mod overlap;
mod random;
mod separate;

pub use collider::{Collider, ColliderId, ContactCallback, PhysicsObject};
pub use overlap::{overlaps, penetrates};
pub use random::{RandomSource, Xorshift32, DEFAULT_SEED};
pub use separate::{
    reflect, resolve_against_static, resolve_mutual, Resolution, CORNER_AXIS_BIAS,
    CORNER_EPSILON, VELOCITY_EPSILON,
};
