//! Scene glue - game objects that carry bodies and the plugin that steps them

mod clock;
mod game_object;
mod plugin;

pub use clock::{FrameClock, MAX_FRAME_DELTA_MS};
pub use game_object::{BodySlot, GameObject};
pub use plugin::PhysicsPlugin;
