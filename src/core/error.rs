use thiserror::Error;

use crate::rigid_body::BodyId;
use crate::collision::ColliderId;

/// Errors reported by the world registry and config loader.
///
/// None of these are fatal: the world is left unchanged whenever one is returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PhysicsError {
    /// Width or height was zero, negative or not finite.
    #[error("invalid body dimensions: {width}x{height}")]
    InvalidDimensions { width: f32, height: f32 },

    /// No body with this id is tracked by the world.
    #[error("unknown body: {0:?}")]
    UnknownBody(BodyId),

    /// No collider with this id is registered.
    #[error("unknown collider: {0:?}")]
    UnknownCollider(ColliderId),

    /// One side of a collider does not own a tracked body.
    #[error("collider side has no body attached to the world")]
    MissingBody,

    /// Both sides of a collider name the same body.
    #[error("collider pairs body {0:?} with itself")]
    SelfCollider(BodyId),

    /// The game object already has a body tracked by the world.
    #[error("game object already attached to body {0:?}")]
    AlreadyAttached(BodyId),

    /// The id counter for this kind of entry has no values left.
    #[error("{0} ids exhausted")]
    IdsExhausted(&'static str),

    /// Body state could not be serialized.
    #[error("snapshot error: {0}")]
    Snapshot(String),

    /// Config parsed but holds values outside their allowed range.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Config JSON failed to parse.
    #[error("config parse error: {0}")]
    ConfigParse(String),
}

impl From<serde_json::Error> for PhysicsError {
    fn from(err: serde_json::Error) -> Self {
        PhysicsError::ConfigParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PhysicsError>;
