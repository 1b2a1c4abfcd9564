use serde::Serialize;

use crate::core::{PhysicsError, Result};

use super::contact::ContactFlags;
use super::vec2::{Axis, Vec2};

pub const DEFAULT_BODY_SIZE: f32 = 32.0;

/// Handle to a body tracked by a world. `BodyId::NONE` marks a body not yet added.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct BodyId(pub u32);

impl BodyId {
    pub const NONE: BodyId = BodyId(0);
}

/// Whether collision resolution may displace a body.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum MassClass {
    Movable,
    /// Never displaced by resolution. Still integrates its own velocity (moving platforms).
    Immovable,
}

/// Axis-aligned rectangular body
#[derive(Clone, Debug)]
pub struct Body {
    pub(crate) id: BodyId,

    // === Kinematic state ===
    /// Top-left corner
    pub pos: Vec2,
    /// Units per second
    pub velocity: Vec2,
    /// Units per second squared, applied regardless of `allow_gravity`
    pub acceleration: Vec2,

    // === Shape ===
    width: f32,
    height: f32,
    half_width: f32,
    half_height: f32,

    // === Material ===
    pub mass: MassClass,
    /// Bounce given to the *other* body on contact (0 = none, 1 = full reversal)
    pub restitution: f32,
    /// Fraction of this body's velocity dragged onto a body resting against it, per axis
    pub friction: Vec2,
    pub allow_gravity: bool,
    pub collide_world_bounds: bool,

    // === Per-step contact state ===
    /// Sides held by an immovable body or the world bounds
    pub blocked: ContactFlags,
    /// Sides in contact with a movable body
    pub touching: ContactFlags,
}

impl Body {
    /// Default 32x32 body at the origin.
    pub fn new(mass: MassClass, restitution: f32) -> Self {
        let size = DEFAULT_BODY_SIZE;
        Self {
            id: BodyId::NONE,
            pos: Vec2::zero(),
            velocity: Vec2::zero(),
            acceleration: Vec2::zero(),
            width: size,
            height: size,
            half_width: size / 2.0,
            half_height: size / 2.0,
            mass,
            restitution: restitution.clamp(0.0, 1.0),
            friction: Vec2::zero(),
            allow_gravity: false,
            collide_world_bounds: false,
            blocked: ContactFlags::clear(),
            touching: ContactFlags::clear(),
        }
    }

    /// Body with an explicit rectangle. Fails on non-positive or non-finite size.
    pub fn rect(x: f32, y: f32, width: f32, height: f32, mass: MassClass, restitution: f32) -> Result<Self> {
        let mut body = Self::new(mass, restitution);
        body.set_size(width, height)?;
        body.pos = Vec2::new(x, y);
        Ok(body)
    }

    pub fn id(&self) -> BodyId {
        self.id
    }

    pub fn is_movable(&self) -> bool {
        self.mass == MassClass::Movable
    }

    pub fn width(&self) -> f32 { self.width }

    pub fn height(&self) -> f32 { self.height }

    pub fn half_width(&self) -> f32 { self.half_width }

    pub fn half_height(&self) -> f32 { self.half_height }

    pub fn set_width(&mut self, width: f32) -> Result<()> {
        check_dimensions(width, self.height)?;
        self.width = width;
        self.half_width = width / 2.0;
        Ok(())
    }

    pub fn set_height(&mut self, height: f32) -> Result<()> {
        check_dimensions(self.width, height)?;
        self.height = height;
        self.half_height = height / 2.0;
        Ok(())
    }

    /// Set both dimensions, leaving the body untouched if either is invalid.
    pub fn set_size(&mut self, width: f32, height: f32) -> Result<()> {
        check_dimensions(width, height)?;
        self.width = width;
        self.height = height;
        self.half_width = width / 2.0;
        self.half_height = height / 2.0;
        Ok(())
    }

    pub fn set_restitution(&mut self, r: f32) {
        self.restitution = r.clamp(0.0, 1.0);
    }

    pub fn set_friction(&mut self, fx: f32, fy: f32) {
        self.friction = Vec2::new(fx.clamp(0.0, 1.0), fy.clamp(0.0, 1.0));
    }

    // === Derived geometry ===

    #[inline]
    pub fn left(&self) -> f32 { self.pos.x }

    #[inline]
    pub fn right(&self) -> f32 { self.pos.x + self.width }

    #[inline]
    pub fn top(&self) -> f32 { self.pos.y }

    #[inline]
    pub fn bottom(&self) -> f32 { self.pos.y + self.height }

    #[inline]
    pub fn mid_x(&self) -> f32 { self.pos.x + self.half_width }

    #[inline]
    pub fn mid_y(&self) -> f32 { self.pos.y + self.half_height }

    // Axis-generic views used by the resolver.

    #[inline]
    pub(crate) fn extent(&self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.width,
            Axis::Y => self.height,
        }
    }

    #[inline]
    pub(crate) fn half_extent(&self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.half_width,
            Axis::Y => self.half_height,
        }
    }

    /// Left or top edge.
    #[inline]
    pub(crate) fn min_edge(&self, axis: Axis) -> f32 {
        self.pos.get(axis)
    }

    /// Right or bottom edge.
    #[inline]
    pub(crate) fn max_edge(&self, axis: Axis) -> f32 {
        self.pos.get(axis) + self.extent(axis)
    }

    #[inline]
    pub(crate) fn mid(&self, axis: Axis) -> f32 {
        self.pos.get(axis) + self.half_extent(axis)
    }

    /// Clear both contact flag sets. Runs once per body at the start of every step.
    pub(crate) fn reset_contacts(&mut self) {
        self.blocked.reset();
        self.touching.reset();
    }
}

impl Default for Body {
    fn default() -> Self {
        Self::new(MassClass::Immovable, 0.0)
    }
}

fn check_dimensions(width: f32, height: f32) -> Result<()> {
    let valid = |v: f32| v.is_finite() && v > 0.0;
    if valid(width) && valid(height) {
        Ok(())
    } else {
        Err(PhysicsError::InvalidDimensions { width, height })
    }
}
