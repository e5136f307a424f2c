//! Interval quality
//!
//! The "flavor" of an interval independent of its size. Every quality has a
//! unique one/two-letter abbreviation used in interval names (M3, P5, AA4):
//!
//! - `S`  semitone (only ever paired with degree 1, see `Interval`)
//! - `m`  minor, `M` major, `P` perfect
//! - `A`  augmented, `AA` doubly augmented
//! - `d`  diminished, `dd` doubly diminished

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TheoryError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quality {
    #[serde(rename = "S")]
    Semitone,
    #[serde(rename = "m")]
    Minor,
    #[serde(rename = "M")]
    Major,
    #[serde(rename = "P")]
    Perfect,
    #[serde(rename = "A")]
    Augmented,
    #[serde(rename = "AA")]
    DoublyAugmented,
    #[serde(rename = "d")]
    Diminished,
    #[serde(rename = "dd")]
    DoublyDiminished,
}

impl Quality {
    /// All qualities in abbreviation-table order
    pub const ALL: [Quality; 8] = [
        Quality::Semitone,
        Quality::Minor,
        Quality::Major,
        Quality::Perfect,
        Quality::Augmented,
        Quality::DoublyAugmented,
        Quality::Diminished,
        Quality::DoublyDiminished,
    ];

    /// Parse an exact abbreviation (case-sensitive: `m` and `M` differ)
    pub fn from_abbreviation(abbreviation: &str) -> Result<Self, TheoryError> {
        Self::ALL
            .iter()
            .copied()
            .find(|quality| quality.abbreviation() == abbreviation)
            .ok_or_else(|| TheoryError::UnknownQuality {
                given: abbreviation.to_string(),
                supported: Self::ALL
                    .iter()
                    .map(|quality| quality.abbreviation())
                    .collect::<Vec<_>>()
                    .join(","),
            })
    }

    pub fn abbreviation(&self) -> &'static str {
        match self {
            Quality::Semitone => "S",
            Quality::Minor => "m",
            Quality::Major => "M",
            Quality::Perfect => "P",
            Quality::Augmented => "A",
            Quality::DoublyAugmented => "AA",
            Quality::Diminished => "d",
            Quality::DoublyDiminished => "dd",
        }
    }

    /// Human readable name, e.g. "doubly augmented"
    pub fn name(&self) -> &'static str {
        match self {
            Quality::Semitone => "semitone",
            Quality::Minor => "minor",
            Quality::Major => "major",
            Quality::Perfect => "perfect",
            Quality::Augmented => "augmented",
            Quality::DoublyAugmented => "doubly augmented",
            Quality::Diminished => "diminished",
            Quality::DoublyDiminished => "doubly diminished",
        }
    }

    pub fn is_semitone(&self) -> bool {
        *self == Quality::Semitone
    }

    pub fn is_minor(&self) -> bool {
        *self == Quality::Minor
    }

    pub fn is_major(&self) -> bool {
        *self == Quality::Major
    }

    pub fn is_perfect(&self) -> bool {
        *self == Quality::Perfect
    }

    pub fn is_augmented(&self) -> bool {
        *self == Quality::Augmented
    }

    pub fn is_doubly_augmented(&self) -> bool {
        *self == Quality::DoublyAugmented
    }

    pub fn is_diminished(&self) -> bool {
        *self == Quality::Diminished
    }

    pub fn is_doubly_diminished(&self) -> bool {
        *self == Quality::DoublyDiminished
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

impl FromStr for Quality {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_abbreviation(s)
    }
}
