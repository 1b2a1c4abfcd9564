//! Verf Physics - AABB rigid bodies and pairwise collision resolution in WASM
//!
//! Architecture:
//! - core/        - Error type and console logging
//! - systems/     - Bodies (rigid_body) and pairwise collision (collision)
//! - simulation/  - WorldCore orchestration and the JS-facing World
//! - scene/       - Game objects, frame clock and the scene plugin

pub mod core;
pub mod systems;
pub mod simulation;
pub mod scene;

pub use systems::collision;
pub use systems::rigid_body;

use wasm_bindgen::prelude::*;

// Re-export wasm-bindgen-rayon for thread pool initialization
#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    crate::core::logging::init(log::LevelFilter::Info);

    web_sys::console::log_1(&"Verf physics initialized".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use collision::{ColliderId, ContactCallback, PhysicsObject, RandomSource, Xorshift32};
pub use crate::core::PhysicsError;
pub use rigid_body::{Body, BodyId, ContactFlags, MassClass, Side};
pub use simulation::{Bounds, StepStats, World, WorldConfig, WorldCore};

// Export contact flag bits for JS
#[wasm_bindgen]
pub fn flag_none() -> u8 { rigid_body::FLAG_NONE }
#[wasm_bindgen]
pub fn flag_top() -> u8 { rigid_body::FLAG_TOP }
#[wasm_bindgen]
pub fn flag_right() -> u8 { rigid_body::FLAG_RIGHT }
#[wasm_bindgen]
pub fn flag_bottom() -> u8 { rigid_body::FLAG_BOTTOM }
#[wasm_bindgen]
pub fn flag_left() -> u8 { rigid_body::FLAG_LEFT }
