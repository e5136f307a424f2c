// Diatonic letter names C through B
//
// Letters carry a 1-based ordinal (C=1 ... B=7). Ordinal arithmetic wraps
// modulo 7 and never yields 0, so stepping past B lands on C again.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Letter {
    C = 1,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl Letter {
    pub const ALL: [Letter; 7] = [
        Letter::C,
        Letter::D,
        Letter::E,
        Letter::F,
        Letter::G,
        Letter::A,
        Letter::B,
    ];

    pub fn ordinal(&self) -> i32 {
        *self as i32
    }

    /// Letter for any ordinal, wrapping with a 1-based remainder
    pub fn from_ordinal(ordinal: i32) -> Letter {
        Self::ALL[(ordinal - 1).rem_euclid(7) as usize]
    }

    /// Case-insensitive letter parse
    pub fn from_char(c: char) -> Option<Letter> {
        match c.to_ascii_uppercase() {
            'C' => Some(Letter::C),
            'D' => Some(Letter::D),
            'E' => Some(Letter::E),
            'F' => Some(Letter::F),
            'G' => Some(Letter::G),
            'A' => Some(Letter::A),
            'B' => Some(Letter::B),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Letter::C => "C",
            Letter::D => "D",
            Letter::E => "E",
            Letter::F => "F",
            Letter::G => "G",
            Letter::A => "A",
            Letter::B => "B",
        }
    }

    /// Pitch class of the unaltered letter (C=0 ... B=11)
    pub fn pitch_class(&self) -> i32 {
        match self {
            Letter::C => 0,
            Letter::D => 2,
            Letter::E => 4,
            Letter::F => 5,
            Letter::G => 7,
            Letter::A => 9,
            Letter::B => 11,
        }
    }

    pub fn next(&self) -> Letter {
        Self::from_ordinal(self.ordinal() + 1)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_ordinal_wraps() {
        assert_eq!(Letter::from_ordinal(1), Letter::C);
        assert_eq!(Letter::from_ordinal(7), Letter::B);
        assert_eq!(Letter::from_ordinal(8), Letter::C);
        assert_eq!(Letter::from_ordinal(0), Letter::B);
        assert_eq!(Letter::from_ordinal(-1), Letter::A);
        assert_eq!(Letter::from_ordinal(15), Letter::C);
    }

    #[test]
    fn test_from_char() {
        assert_eq!(Letter::from_char('c'), Some(Letter::C));
        assert_eq!(Letter::from_char('G'), Some(Letter::G));
        assert_eq!(Letter::from_char('H'), None);
    }

    #[test]
    fn test_next() {
        assert_eq!(Letter::E.next(), Letter::F);
        assert_eq!(Letter::B.next(), Letter::C);
    }
}
