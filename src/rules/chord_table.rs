//! Chord classification tables
//!
//! Two fixed lookups drive chord recognition and naming.
//!
//! Degree sequence to (inversion, tonic index). The degrees of the pairwise
//! intervals of the deduplicated notes identify the inversion directly, and
//! likewise for four-note (seventh) chords:
//!
//! ```text
//! [3, 3]  root position, tonic at 0   (C E G)
//! [3, 4]  1st inversion, tonic at 2   (E G C)
//! [4, 3]  2nd inversion, tonic at 1   (G C E)
//! ```
//!
//! Quality sequence to chord suffix. The qualities of successive thirds of
//! the root-position chord pick the suffix written after the tonic
//! ("M-m" is "" for a major triad, "m-M-m" is "m7").

use crate::models::quality::Quality;

/// (inversion ordinal, index of the tonic in the deduplicated notes)
pub fn inversion_and_tonic(degrees: &[u8]) -> Option<(i32, usize)> {
    let entry = match degrees {
        // triads
        [3, 3] => (0, 0),
        [3, 4] => (1, 2),
        [4, 3] => (2, 1),

        // sevenths
        [3, 3, 3] => (0, 0),
        [3, 3, 2] => (1, 3),
        [3, 2, 3] => (2, 2),
        [2, 3, 3] => (3, 1),

        _ => return None,
    };

    Some(entry)
}

/// Label of a third inside a quality sequence
///
/// Qualities without a label are left out of the sequence entirely.
pub fn third_label(quality: Quality) -> Option<&'static str> {
    match quality {
        Quality::Minor => Some("m"),
        Quality::Major => Some("M"),
        Quality::Augmented => Some("aug"),
        Quality::Diminished => Some("dim"),
        _ => None,
    }
}

/// Chord suffix for a dash-joined quality sequence such as "m-M"
pub fn chord_suffix(quality_sequence: &str) -> Option<&'static str> {
    let suffix = match quality_sequence {
        // triads
        "m-m" => "dim",
        "m-M" => "m",
        "M-m" => "",
        "M-M" => "aug",

        // sevenths
        "m-m-m" => "dim7",
        "m-m-M" => "m7(♭5)",
        "m-M-m" => "m7",
        "m-M-M" => "mM7",
        "M-m-m" => "7",
        "M-m-M" => "maj7",
        "M-M-m" => "aug7",
        "M-M-M" => "augM7",

        _ => return None,
    };

    Some(suffix)
}
