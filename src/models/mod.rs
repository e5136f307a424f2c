//! Models module for the theory engine
//!
//! Value types from the leaves up: interval parts (quality, degree),
//! spelled notes, note collections, and the chord and mode types built on
//! top of them.

pub mod accidental;
pub mod chord;
pub mod degree;
pub mod interval;
pub mod letter;
pub mod mode;
pub mod mode_kind;
pub mod note;
pub mod note_collection;
pub mod progression;
pub mod quality;

// Re-export commonly used types
pub use accidental::Accidental;
pub use chord::{Chord, ChordIsOptions, ChordJson, ChordType, ModeJson, ResolveAlgorithm, ResolveOptions};
pub use degree::Degree;
pub use interval::Interval;
pub use letter::Letter;
pub use mode::{Mode, ModeGroup, ModeItem, ModeNameOptions};
pub use mode_kind::ModeKind;
pub use note::{Direction, NameOptions, Note, NoteIsOptions};
pub use note_collection::{NoteCollection, OctaveShift, WithGroupOptions};
pub use progression::ProgressionItem;
pub use quality::Quality;
