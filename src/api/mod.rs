//! Theory engine WASM API
//!
//! This module provides the JavaScript-facing API for the theory engine.
//!
//! # Module Structure
//!
//! - `helpers`: console logging macros, serde bridging and error conversion
//! - `types`: the serde shapes exchanged with JavaScript
//! - `core`: the exported functions

pub mod helpers;
pub mod types;
pub mod core;

pub use self::core::*;
