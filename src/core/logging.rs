//! Logger setup for the `log` facade.
//!
//! On wasm32 records go to the browser console (warn/error keep their console level).
//! Native builds use `env_logger`, so `RUST_LOG` can override the level.

use log::LevelFilter;

#[cfg(target_arch = "wasm32")]
mod console {
    use log::{Log, Metadata, Record};
    use wasm_bindgen::JsValue;

    pub(super) struct ConsoleLogger;

    pub(super) static LOGGER: ConsoleLogger = ConsoleLogger;

    impl Log for ConsoleLogger {
        fn enabled(&self, metadata: &Metadata) -> bool {
            metadata.level() <= log::max_level()
        }

        fn log(&self, record: &Record) {
            if !self.enabled(record.metadata()) {
                return;
            }
            let value = JsValue::from_str(&format!("[verf-physics {}] {}", record.level(), record.args()));
            match record.level() {
                log::Level::Error => web_sys::console::error_1(&value),
                log::Level::Warn => web_sys::console::warn_1(&value),
                _ => web_sys::console::log_1(&value),
            }
        }

        fn flush(&self) {}
    }
}

/// Install the logger. Safe to call more than once; only the first call wins.
#[cfg(target_arch = "wasm32")]
pub fn init(level: LevelFilter) {
    if log::set_logger(&console::LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

/// Install the logger. Safe to call more than once; only the first call wins.
#[cfg(not(target_arch = "wasm32"))]
pub fn init(level: LevelFilter) {
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .try_init();
}
