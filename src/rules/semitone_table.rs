//! Semitone lookup table for intervals
//!
//! Format: (quality, degree) → semitone count
//!
//! This table is the single source of truth for interval sizes. Chord
//! classification and scale spelling both depend on these exact values, so
//! nothing else in the crate computes a semitone count independently.
//!
//! Example:
//!   (Major, 3)   → 4
//!   (Perfect, 5) → 7
//!   (Semitone, 1) → 1   (the one-half-step pseudo interval "S1")

use crate::models::quality::Quality;

/// Semitones spanned by `quality` + `degree`, or `None` if the pair has no entry
pub fn semitones(quality: Quality, degree: u8) -> Option<u8> {
    use Quality::*;

    let count = match (degree, quality) {
        // Unison
        (1, Perfect) => 0,
        (1, Semitone) => 1,

        // 2nd
        (2, Minor) => 1,
        (2, Major) => 2,
        (2, Augmented) => 3,
        (2, DoublyAugmented) => 4,

        // 3rd
        (3, DoublyDiminished) => 1,
        (3, Diminished) => 2,
        (3, Minor) => 3,
        (3, Major) => 4,
        (3, Augmented) => 5,
        (3, DoublyAugmented) => 6,

        // 4th
        (4, DoublyDiminished) => 3,
        (4, Diminished) => 4,
        (4, Perfect) => 5,
        (4, Augmented) => 6,
        (4, DoublyAugmented) => 7,

        // 5th
        (5, DoublyDiminished) => 5,
        (5, Diminished) => 6,
        (5, Perfect) => 7,
        (5, Augmented) => 8,
        (5, DoublyAugmented) => 9,

        // 6th
        (6, DoublyDiminished) => 6,
        (6, Diminished) => 7,
        (6, Minor) => 8,
        (6, Major) => 9,
        (6, Augmented) => 10,
        (6, DoublyAugmented) => 11,

        // 7th
        (7, DoublyDiminished) => 8,
        (7, Diminished) => 9,
        (7, Minor) => 10,
        (7, Major) => 11,
        (7, Augmented) => 12,
        (7, DoublyAugmented) => 13,

        // Octave
        (8, Perfect) => 12,

        _ => return None,
    };

    Some(count)
}

/// Reverse lookup: the quality that spans `count` semitones at `degree`
///
/// Within one degree every semitone count maps to at most one quality.
pub fn quality_for(degree: u8, count: i32) -> Option<Quality> {
    Quality::ALL
        .iter()
        .copied()
        .find(|&quality| semitones(quality, degree).map(i32::from) == Some(count))
}
