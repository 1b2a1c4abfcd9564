//! Body - an axis-aligned rectangle that moves as a unit
//!
//! Stores its top-left corner, size and kinematic state. Edges and center are
//! derived on demand so they never drift from the stored fields.

mod body;
mod contact;
mod vec2;

pub use body::{Body, BodyId, MassClass, DEFAULT_BODY_SIZE};
pub use contact::{ContactFlags, Side, FLAG_BOTTOM, FLAG_LEFT, FLAG_NONE, FLAG_RIGHT, FLAG_TOP};
pub use vec2::{Axis, Vec2};
