//! Logger initialization behind the `log` facade.
//!
//! Natively this installs `env_logger` (filter via `RUST_LOG`, defaulting to
//! info); on wasm32 it installs `console_log` so diagnostics land in the
//! browser console.

use std::sync::Once;

static INIT: Once = Once::new();

/// Initialise the global logger once. Subsequent calls are no-ops, so
/// library consumers and tests can call this unconditionally.
pub fn init_logging() {
    INIT.call_once(|| {
        #[cfg(target_arch = "wasm32")]
        console_log::init_with_level(log::Level::Info).expect("couldn't initialise console_log");
        #[cfg(not(target_arch = "wasm32"))]
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    });
}
