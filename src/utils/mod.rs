//! Utility helpers shared by the models and the WASM API

pub mod range;

pub use range::{range, Spelling};
