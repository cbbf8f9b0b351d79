//! WebAssembly bindings for the visual Bitcoin key generator.
//!
//! This crate provides JavaScript-accessible APIs for:
//! - Editing a 16x16 bit grid (toggle, clear, invert, rotate, random fill)
//! - Deriving the private key, WIF, public key and legacy address
//! - Grid statistics for display

use wasm_bindgen::prelude::*;

pub mod editor;
pub mod state;

// Re-export main types for JS access
pub use editor::{derive_keys, KeyGrid};
pub use state::{GridStats, KeyInfo};

/// Initialize the WASM module with better panic messages.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Log to the browser console.
#[wasm_bindgen]
pub fn console_log(message: &str) {
    log(message);
}

pub(crate) fn log(message: &str) {
    web_sys::console::log_1(&JsValue::from_str(message));
}
