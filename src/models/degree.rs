// Scale-step number of an interval, 1 (unison) through 8 (octave)

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TheoryError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Degree(u8);

impl Degree {
    pub const UNISON: Degree = Degree(1);
    pub const SECOND: Degree = Degree(2);
    pub const THIRD: Degree = Degree(3);
    pub const FOURTH: Degree = Degree(4);
    pub const FIFTH: Degree = Degree(5);
    pub const SIXTH: Degree = Degree(6);
    pub const SEVENTH: Degree = Degree(7);
    pub const OCTAVE: Degree = Degree(8);

    pub fn new(n: i64) -> Result<Self, TheoryError> {
        if !(1..=8).contains(&n) {
            return Err(TheoryError::InvalidDegree(n));
        }
        Ok(Degree(n as u8))
    }

    /// Parse a degree from text, e.g. the trailing digit of "M3"
    pub fn parse(text: &str) -> Result<Self, TheoryError> {
        let n: i64 = text
            .trim()
            .parse()
            .map_err(|_| TheoryError::InvalidNumber(text.to_string()))?;
        Self::new(n)
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// "unison", "2nd", ..., "octave"
    pub fn name(&self) -> &'static str {
        match self.0 {
            1 => "unison",
            2 => "2nd",
            3 => "3rd",
            4 => "4th",
            5 => "5th",
            6 => "6th",
            7 => "7th",
            _ => "octave",
        }
    }
}

impl fmt::Display for Degree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Degree {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<i64> for Degree {
    type Error = TheoryError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Degree> for u8 {
    fn from(degree: Degree) -> Self {
        degree.0
    }
}
