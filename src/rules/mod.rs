//! Fixed music-theory tables
//!
//! Semitone sizes, chord shapes and mode patterns are closed lookups written
//! as exhaustive matches. The mode picker catalog is embedded YAML.

pub mod chord_table;
pub mod mode_catalog;
pub mod mode_table;
pub mod semitone_table;
