//! Composer's toolkit theory engine
//!
//! Exact, spelling-aware music theory: notes, intervals, chords and modes as
//! value types, plus a WASM API used by the toolkit UI.

pub mod error;
pub mod models;
pub mod rules;
pub mod utils;
pub mod api;

// Re-export commonly used types
pub use error::{Result, TheoryError};
pub use models::*;
pub use utils::range::{range, Spelling};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        crate::wasm_warn!("logger already initialized: {}", err);
    }

    log::info!("Theory engine WASM module initialized");
}
