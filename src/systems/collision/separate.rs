//! Pairwise separation of overlapping bodies.
//!
//! The approach direction comes from the center offset normalized by the second
//! body's half-extents. When the normalized offsets are nearly equal the hit is a
//! corner: both axes are pushed out and one of them, picked at random, bounces.
//! Otherwise only the dominant axis is pushed out and bounced.

use crate::rigid_body::{Axis, Body, MassClass, Side, Vec2};

use super::random::RandomSource;

/// Normalized offsets closer than this are treated as a diagonal (corner) approach.
pub const CORNER_EPSILON: f32 = 0.1;
/// Samples below this bounce a corner hit on the x-axis, others on the y-axis.
pub const CORNER_AXIS_BIAS: f32 = 0.5;
/// Reflected velocities smaller than this snap to zero.
pub const VELOCITY_EPSILON: f32 = 0.0004;

/// Resolution strategy for a collider, picked once per step from the mass classes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// One movable body against an immovable one.
    AgainstStatic { movable_is_a: bool },
    /// Two movable bodies share the correction.
    Mutual,
    /// Two immovable bodies: nothing to move.
    Skip,
}

impl Resolution {
    pub fn classify(a: MassClass, b: MassClass) -> Self {
        match (a, b) {
            (MassClass::Movable, MassClass::Immovable) => Resolution::AgainstStatic { movable_is_a: true },
            (MassClass::Immovable, MassClass::Movable) => Resolution::AgainstStatic { movable_is_a: false },
            (MassClass::Movable, MassClass::Movable) => Resolution::Mutual,
            (MassClass::Immovable, MassClass::Immovable) => Resolution::Skip,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Approach {
    Corner,
    Dominant(Axis),
}

/// Center offset of `b` relative to `a`, in units of `b`'s half-extents.
#[inline]
fn normalized_offset(a: &Body, b: &Body) -> Vec2 {
    Vec2::new(
        (b.mid_x() - a.mid_x()) / b.half_width(),
        (b.mid_y() - a.mid_y()) / b.half_height(),
    )
}

fn classify_approach(d: Vec2) -> Approach {
    let abs_dx = d.x.abs();
    let abs_dy = d.y.abs();
    if (abs_dx - abs_dy).abs() < CORNER_EPSILON {
        Approach::Corner
    } else if abs_dx > abs_dy {
        Approach::Dominant(Axis::X)
    } else {
        Approach::Dominant(Axis::Y)
    }
}

fn pick_corner_axis(rng: &mut dyn RandomSource) -> Axis {
    if rng.next_f32() < CORNER_AXIS_BIAS {
        Axis::X
    } else {
        Axis::Y
    }
}

/// Reverse `v` scaled by `restitution`, snapping tiny results to rest.
#[inline]
pub fn reflect(v: f32, restitution: f32) -> f32 {
    let r = -v * restitution;
    if r.abs() < VELOCITY_EPSILON {
        0.0
    } else {
        r
    }
}

/// Move `body` flush against `fixed` along `axis`. `d` < 0 means `body` sits past
/// `fixed`'s far edge (right of / below it).
///
/// `blocked` records the side of `fixed` that was struck: a body landing on a
/// platform gets `blocked.top`, one pushed out to the platform's right `blocked.right`.
fn push_out_of_static(body: &mut Body, fixed: &Body, axis: Axis, d: f32) {
    if d < 0.0 {
        *body.pos.get_mut(axis) = fixed.max_edge(axis);
        body.blocked.mark(Side::on_axis(axis, true));
    } else {
        *body.pos.get_mut(axis) = fixed.min_edge(axis) - body.extent(axis);
        body.blocked.mark(Side::on_axis(axis, false));
    }
}

/// Separate a movable body from an immovable one, moving only `movable`.
///
/// After the bounce, a moving platform drags the body along the orthogonal axis by
/// `fixed.velocity * fixed.friction * dt`. Returns the axis whose velocity was reflected.
pub fn resolve_against_static(
    movable: &mut Body,
    fixed: &Body,
    dt: f32,
    rng: &mut dyn RandomSource,
) -> Axis {
    let d = normalized_offset(movable, fixed);

    let reflected = match classify_approach(d) {
        Approach::Corner => {
            push_out_of_static(movable, fixed, Axis::X, d.x);
            push_out_of_static(movable, fixed, Axis::Y, d.y);
            pick_corner_axis(rng)
        }
        Approach::Dominant(axis) => {
            push_out_of_static(movable, fixed, axis, d.get(axis));
            axis
        }
    };

    let v = movable.velocity.get_mut(reflected);
    *v = reflect(*v, fixed.restitution);

    let drag = reflected.orthogonal();
    *movable.pos.get_mut(drag) += fixed.velocity.get(drag) * fixed.friction.get(drag) * dt;

    reflected
}

/// Split the penetration along `axis` evenly between `a` and `b`. Returns the depth.
fn split_axis(a: &mut Body, b: &mut Body, axis: Axis, d: f32) -> f32 {
    // `a_first`: a lies on the low side of b along this axis.
    let a_first = d >= 0.0;
    let depth = if a_first {
        a.max_edge(axis) - b.min_edge(axis)
    } else {
        b.max_edge(axis) - a.min_edge(axis)
    };
    let half = depth / 2.0;
    let toward_max = if a_first { -half } else { half };

    *a.pos.get_mut(axis) += toward_max;
    *b.pos.get_mut(axis) -= toward_max;

    let a_side = Side::on_axis(axis, a_first);
    a.touching.mark(a_side);
    b.touching.mark(a_side.opposite());
    depth
}

/// Separate two movable bodies, each taking half of the correction.
///
/// Each body bounces with the other's restitution. When gravity acts along the
/// bounce axis, the body resting on top of the other (relative to gravity) loses
/// its orthogonal velocity. Returns the axis whose velocity was reflected.
pub fn resolve_mutual(
    a: &mut Body,
    b: &mut Body,
    gravity: Vec2,
    rng: &mut dyn RandomSource,
) -> Axis {
    let d = normalized_offset(a, b);

    let reflected = match classify_approach(d) {
        Approach::Corner => {
            split_axis(a, b, Axis::X, d.x);
            split_axis(a, b, Axis::Y, d.y);
            pick_corner_axis(rng)
        }
        Approach::Dominant(axis) => {
            split_axis(a, b, axis, d.get(axis));
            axis
        }
    };

    let va = a.velocity.get(reflected);
    let vb = b.velocity.get(reflected);
    *a.velocity.get_mut(reflected) = reflect(va, b.restitution);
    *b.velocity.get_mut(reflected) = reflect(vb, a.restitution);

    let g = gravity.get(reflected);
    if g != 0.0 {
        let a_first = d.get(reflected) >= 0.0;
        // Gravity toward max pushes the low-side body onto the other one.
        let a_rests = (g > 0.0) == a_first;
        let orth = reflected.orthogonal();
        if a_rests {
            *a.velocity.get_mut(orth) = 0.0;
        } else {
            *b.velocity.get_mut(orth) = 0.0;
        }
    }

    reflected
}
