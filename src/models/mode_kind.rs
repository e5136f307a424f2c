//! Mode (scale) kinds
//!
//! The numeric id of each kind is part of the JS contract: the UI stores a
//! mode as `(keyNoteName, modeKindId)`, so ids must never be reordered.
//!
//! Groups:
//! - major and minor (0-5): the only kinds with a parallel/relative mode
//! - church modes (6-12)
//! - jazz (13-18)

use serde_repr::{Deserialize_repr, Serialize_repr};
use std::fmt;
use std::str::FromStr;

use crate::error::TheoryError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum ModeKind {
    // major and minor
    NaturalMajor = 0,
    HarmonicMajor = 1,
    MelodicMajor = 2,
    NaturalMinor = 3,
    HarmonicMinor = 4,
    MelodicMinor = 5,

    // church modes
    Ionian = 6,
    Dorian = 7,
    Phrygian = 8,
    Lydian = 9,
    Mixolydian = 10,
    Aeolian = 11,
    Locrian = 12,

    // jazz
    MajorBlues = 13,
    MinorBlues = 14,
    JazzMelodicMinor = 15,
    JazzHarmonicMinor = 16,
    Bebop = 17,
    Diminished = 18,
}

impl ModeKind {
    pub const ALL: [ModeKind; 19] = [
        ModeKind::NaturalMajor,
        ModeKind::HarmonicMajor,
        ModeKind::MelodicMajor,
        ModeKind::NaturalMinor,
        ModeKind::HarmonicMinor,
        ModeKind::MelodicMinor,
        ModeKind::Ionian,
        ModeKind::Dorian,
        ModeKind::Phrygian,
        ModeKind::Lydian,
        ModeKind::Mixolydian,
        ModeKind::Aeolian,
        ModeKind::Locrian,
        ModeKind::MajorBlues,
        ModeKind::MinorBlues,
        ModeKind::JazzMelodicMinor,
        ModeKind::JazzHarmonicMinor,
        ModeKind::Bebop,
        ModeKind::Diminished,
    ];

    pub fn from_id(id: u8) -> Result<Self, TheoryError> {
        Self::ALL
            .get(id as usize)
            .copied()
            .ok_or_else(|| TheoryError::UnknownModeKind(id.to_string()))
    }

    pub fn id(&self) -> u8 {
        *self as u8
    }

    /// Display label, e.g. "Harmonic Minor" or "Melodic Minor (Jazz)"
    pub fn label(&self) -> &'static str {
        match self {
            ModeKind::NaturalMajor => "Natural Major",
            ModeKind::HarmonicMajor => "Harmonic Major",
            ModeKind::MelodicMajor => "Melodic Major",
            ModeKind::NaturalMinor => "Natural Minor",
            ModeKind::HarmonicMinor => "Harmonic Minor",
            ModeKind::MelodicMinor => "Melodic Minor",
            ModeKind::Ionian => "Ionian",
            ModeKind::Dorian => "Dorian",
            ModeKind::Phrygian => "Phrygian",
            ModeKind::Lydian => "Lydian",
            ModeKind::Mixolydian => "Mixolydian",
            ModeKind::Aeolian => "Aeolian",
            ModeKind::Locrian => "Locrian",
            ModeKind::MajorBlues => "Major Blues",
            ModeKind::MinorBlues => "Minor Blues",
            ModeKind::JazzMelodicMinor => "Melodic Minor (Jazz)",
            ModeKind::JazzHarmonicMinor => "Harmonic Minor (Jazz)",
            ModeKind::Bebop => "Bebop",
            ModeKind::Diminished => "Diminished",
        }
    }

    pub fn is_major(&self) -> bool {
        matches!(
            self,
            ModeKind::NaturalMajor | ModeKind::HarmonicMajor | ModeKind::MelodicMajor
        )
    }

    pub fn is_minor(&self) -> bool {
        matches!(
            self,
            ModeKind::NaturalMinor | ModeKind::HarmonicMinor | ModeKind::MelodicMinor
        )
    }

    /// The paired major/minor kind (NaturalMajor <-> NaturalMinor, ...)
    pub fn counterpart(&self) -> Option<ModeKind> {
        match self {
            ModeKind::NaturalMajor => Some(ModeKind::NaturalMinor),
            ModeKind::HarmonicMajor => Some(ModeKind::HarmonicMinor),
            ModeKind::MelodicMajor => Some(ModeKind::MelodicMinor),
            ModeKind::NaturalMinor => Some(ModeKind::NaturalMajor),
            ModeKind::HarmonicMinor => Some(ModeKind::HarmonicMajor),
            ModeKind::MelodicMinor => Some(ModeKind::MelodicMajor),
            _ => None,
        }
    }
}

impl fmt::Display for ModeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl TryFrom<u8> for ModeKind {
    type Error = TheoryError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Self::from_id(id)
    }
}

impl FromStr for ModeKind {
    type Err = TheoryError;

    /// Accepts a label ("Natural Major") or a numeric id ("0")
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(id) = s.trim().parse::<u8>() {
            return Self::from_id(id);
        }
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| TheoryError::UnknownModeKind(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_stable() {
        for (index, kind) in ModeKind::ALL.iter().enumerate() {
            assert_eq!(kind.id() as usize, index);
            assert_eq!(ModeKind::from_id(index as u8).unwrap(), *kind);
        }
    }

    #[test]
    fn test_unknown_id() {
        assert_eq!(
            ModeKind::from_id(19).unwrap_err().to_string(),
            "unknown mode: 19"
        );
    }

    #[test]
    fn test_counterparts() {
        for kind in ModeKind::ALL {
            match kind.counterpart() {
                Some(other) => {
                    assert!(kind.is_major() || kind.is_minor());
                    assert_eq!(other.counterpart(), Some(kind));
                }
                None => assert!(!kind.is_major() && !kind.is_minor()),
            }
        }
    }

    #[test]
    fn test_from_str() {
        assert_eq!("harmonic minor".parse::<ModeKind>().unwrap(), ModeKind::HarmonicMinor);
        assert_eq!("9".parse::<ModeKind>().unwrap(), ModeKind::Lydian);
        assert!("Hypodorian".parse::<ModeKind>().is_err());
    }

    #[test]
    fn test_serde_numeric_id() {
        assert_eq!(serde_json::to_string(&ModeKind::HarmonicMinor).unwrap(), "4");
        let kind: ModeKind = serde_json::from_str("12").unwrap();
        assert_eq!(kind, ModeKind::Locrian);
        assert!(serde_json::from_str::<ModeKind>("42").is_err());
    }
}
