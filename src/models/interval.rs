//! Musical interval: a (quality, degree) pair such as M3 or P5
//!
//! Construction validates the structural rules of interval naming:
//! - an octave must be perfect (P8)
//! - a unison must be perfect (P1) or the semitone pseudo interval (S1)
//! - 4ths and 5ths are never major or minor
//! - a 2nd is never diminished
//!
//! The semitone size of a valid interval always comes from
//! `rules::semitone_table`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TheoryError;
use crate::models::degree::Degree;
use crate::models::quality::Quality;
use crate::rules::semitone_table;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Interval {
    quality: Quality,
    degree: Degree,
    semitones: u8,
}

impl Interval {
    pub fn new(quality: Quality, degree: Degree) -> Result<Self, TheoryError> {
        let abbreviation = format!("{}{}", quality.abbreviation(), degree.value());
        let invalid = |reason: &'static str| TheoryError::InvalidInterval {
            abbreviation: abbreviation.clone(),
            reason,
        };

        match degree.value() {
            1 if !quality.is_perfect() && !quality.is_semitone() => {
                return Err(invalid("only perfect unison(P1) or semitone(S1) is valid"));
            }
            8 if !quality.is_perfect() => {
                return Err(invalid("only perfect octave(P8) is valid"));
            }
            2 if quality.is_diminished() => {
                return Err(invalid("diminished second(d2) is invalid"));
            }
            4 | 5 if quality.is_major() || quality.is_minor() => {
                return Err(invalid("M4/M5/m4/m5 is invalid"));
            }
            _ => {}
        }

        let semitones = semitone_table::semitones(quality, degree.value())
            .ok_or_else(|| invalid("no semitone size for this quality and degree"))?;

        Ok(Self {
            quality,
            degree,
            semitones,
        })
    }

    /// Parse an abbreviation such as "M3", "AA4" or "S1"
    ///
    /// The trailing character is the degree, everything before it is the
    /// quality abbreviation.
    pub fn parse(text: &str) -> Result<Self, TheoryError> {
        let mut chars = text.chars();
        let last = chars
            .next_back()
            .ok_or_else(|| TheoryError::InvalidNumber(text.to_string()))?;
        let prefix = chars.as_str();

        let quality = Quality::from_abbreviation(prefix)?;
        let degree = Degree::parse(&last.to_string())?;

        Self::new(quality, degree)
    }

    /// Reverse lookup from a degree and a semitone count
    ///
    /// A count of zero is always a perfect unison.
    pub fn from_degree_and_semitones(degree: u8, semitones: i32) -> Result<Self, TheoryError> {
        if semitones == 0 {
            return Self::new(Quality::Perfect, Degree::UNISON);
        }

        let unresolvable = TheoryError::UnresolvableInterval { degree, semitones };

        let quality = semitone_table::quality_for(degree, semitones).ok_or(unresolvable.clone())?;
        let degree = Degree::new(i64::from(degree)).map_err(|_| unresolvable)?;

        Self::new(quality, degree)
    }

    pub fn quality(&self) -> Quality {
        self.quality
    }

    pub fn degree(&self) -> Degree {
        self.degree
    }

    pub fn semitones(&self) -> u8 {
        self.semitones
    }

    pub fn abbreviation(&self) -> String {
        format!("{}{}", self.quality.abbreviation(), self.degree.value())
    }

    /// "major 3rd", "perfect octave"
    pub fn name(&self) -> String {
        format!("{} {}", self.quality.name(), self.degree.name())
    }

    /// Compare against an abbreviation such as "m2"
    pub fn is(&self, abbreviation: &str) -> bool {
        self.abbreviation() == abbreviation
    }

    /// The S1 pseudo interval, which cannot be used to move a note
    pub fn is_semitone(&self) -> bool {
        self.quality.is_semitone()
    }

    /// One half step up or down (S1, m2, M7, ...)
    pub fn is_half_step(&self) -> bool {
        self.semitones == 1 || self.semitones == 11
    }

    pub fn is_unison(&self) -> bool {
        self.quality.is_perfect() && self.degree == Degree::UNISON
    }

    pub fn is_major(&self) -> bool {
        self.quality.is_major()
    }

    pub fn is_minor(&self) -> bool {
        self.quality.is_minor()
    }

    pub fn is_perfect(&self) -> bool {
        self.quality.is_perfect()
    }

    pub fn is_augmented(&self) -> bool {
        self.quality.is_augmented()
    }

    pub fn is_doubly_augmented(&self) -> bool {
        self.quality.is_doubly_augmented()
    }

    pub fn is_diminished(&self) -> bool {
        self.quality.is_diminished()
    }

    pub fn is_doubly_diminished(&self) -> bool {
        self.quality.is_doubly_diminished()
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

impl FromStr for Interval {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Interval {
    type Error = TheoryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Interval> for String {
    fn from(interval: Interval) -> Self {
        interval.abbreviation()
    }
}
