//! Interval patterns for every mode kind
//!
//! Each scale note is built by adding one interval of the pattern to the
//! key note, so spelling falls out of `Note::add` (e.g. Eb + m3 = Gb, never
//! F#). Patterns have 6, 7 or 8 entries depending on the mode.

use crate::models::mode_kind::ModeKind;

pub fn intervals(kind: ModeKind) -> &'static [&'static str] {
    match kind {
        // major and minor
        ModeKind::NaturalMajor => &["P1", "M2", "M3", "P4", "P5", "M6", "M7"],
        ModeKind::HarmonicMajor => &["P1", "M2", "M3", "P4", "P5", "m6", "M7"],
        ModeKind::MelodicMajor => &["P1", "M2", "M3", "P4", "P5", "m6", "m7"],
        ModeKind::NaturalMinor => &["P1", "M2", "m3", "P4", "P5", "m6", "m7"],
        ModeKind::HarmonicMinor => &["P1", "M2", "m3", "P4", "P5", "m6", "M7"],
        ModeKind::MelodicMinor => &["P1", "M2", "m3", "P4", "P5", "M6", "M7"],

        // church modes
        ModeKind::Ionian => &["P1", "M2", "M3", "P4", "P5", "M6", "M7"],
        ModeKind::Dorian => &["P1", "M2", "m3", "P4", "P5", "M6", "m7"],
        ModeKind::Phrygian => &["P1", "m2", "m3", "P4", "P5", "m6", "m7"],
        ModeKind::Lydian => &["P1", "M2", "M3", "A4", "P5", "M6", "M7"],
        ModeKind::Mixolydian => &["P1", "M2", "M3", "P4", "P5", "M6", "m7"],
        ModeKind::Aeolian => &["P1", "M2", "m3", "P4", "P5", "m6", "m7"],
        ModeKind::Locrian => &["P1", "m2", "m3", "P4", "d5", "m6", "m7"],

        // jazz
        ModeKind::MajorBlues => &["P1", "M2", "m3", "M3", "P5", "M6"],
        ModeKind::MinorBlues => &["P1", "m3", "P4", "d5", "P5", "m7"],
        ModeKind::JazzMelodicMinor => &["P1", "M2", "m3", "P4", "P5", "M6", "M7"],
        ModeKind::JazzHarmonicMinor => &["P1", "M2", "m3", "P4", "P5", "m6", "M7"],
        ModeKind::Bebop => &["P1", "M2", "M3", "P4", "P5", "M6", "m7", "M7"],
        ModeKind::Diminished => &["P1", "M2", "m3", "P4", "d5", "m6", "M6", "M7"],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::interval::Interval;

    #[test]
    fn test_every_pattern_parses() {
        for kind in ModeKind::ALL {
            for abbr in intervals(kind) {
                assert!(Interval::parse(abbr).is_ok(), "{:?}: {}", kind, abbr);
            }
        }
    }

    #[test]
    fn test_pattern_lengths() {
        assert_eq!(intervals(ModeKind::NaturalMajor).len(), 7);
        assert_eq!(intervals(ModeKind::MajorBlues).len(), 6);
        assert_eq!(intervals(ModeKind::Bebop).len(), 8);
    }
}
