//! Ambient plumbing shared by every module: error type and console logging.

pub mod error;
pub mod logging;

pub use error::{PhysicsError, Result};
