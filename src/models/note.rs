//! Spelled note: letter + accidental + optional octave group
//!
//! A `Note` is a diatonic spelling, not a pitch number: `D#` and `Eb` are
//! different notes. All arithmetic works on letters first and then picks the
//! accidental that makes the semitone distance come out right, which is what
//! keeps scale and chord spellings correct.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TheoryError;
use crate::models::accidental::Accidental;
use crate::models::interval::Interval;
use crate::models::letter::Letter;

/// `<letter><accidental symbols><octave>`; each part is validated separately
/// so that the error names the part that is wrong.
static NOTE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?s)(.)(\D*)(.*)$").expect("note pattern is a valid regex")
});

/// Options for `Note::is`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NoteIsOptions {
    /// Compare octave groups (only when at least one side has one)
    pub check_group: bool,
    /// Compare accidentals (only when at least one side is not natural)
    pub check_accidental: bool,
}

impl Default for NoteIsOptions {
    fn default() -> Self {
        Self {
            check_group: false,
            check_accidental: true,
        }
    }
}

/// Options for note naming
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NameOptions {
    /// Use typographic accidentals (♯ ♭ 𝄪 𝄫 ♮) instead of ASCII
    pub transform_accidental: bool,
}

impl NameOptions {
    pub fn unicode() -> Self {
        Self {
            transform_accidental: true,
        }
    }
}

/// Direction of a transposition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Low,
    High,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Note {
    letter: Letter,
    accidental: Accidental,
    octave: Option<i8>,
}

impl Note {
    pub fn new(letter: Letter, accidental: Accidental, octave: Option<i8>) -> Self {
        Self {
            letter,
            accidental,
            octave,
        }
    }

    /// Parse a note name such as "C", "eb", "F#4" or "B𝄫2"
    pub fn parse(text: &str) -> Result<Self, TheoryError> {
        let captures = NOTE_PATTERN
            .captures(text)
            .ok_or_else(|| TheoryError::InvalidLetter(text.to_string()))?;

        let letter_text = &captures[1];
        let letter = letter_text
            .chars()
            .next()
            .and_then(Letter::from_char)
            .ok_or_else(|| TheoryError::InvalidLetter(text.to_string()))?;

        let accidental_text = &captures[2];
        let accidental = Accidental::parse(accidental_text)
            .ok_or_else(|| TheoryError::InvalidAccidental(accidental_text.to_string()))?;

        let octave_text = &captures[3];
        let octave = match octave_text.as_bytes() {
            [] => None,
            [digit @ b'0'..=b'9'] => Some((digit - b'0') as i8),
            _ => return Err(TheoryError::InvalidOctave(octave_text.to_string())),
        };

        Ok(Self::new(letter, accidental, octave))
    }

    /// Natural note for any letter ordinal, wrapping past B
    pub fn from_index(index: i32) -> Self {
        Self::new(Letter::from_ordinal(index), Accidental::Natural, None)
    }

    pub fn letter(&self) -> Letter {
        self.letter
    }

    /// Letter ordinal, C=1 ... B=7
    pub fn index(&self) -> i32 {
        self.letter.ordinal()
    }

    pub fn accidental(&self) -> Accidental {
        self.accidental
    }

    pub fn octave(&self) -> Option<i8> {
        self.octave
    }

    pub fn with_accidental(&self, accidental: Accidental) -> Self {
        Self {
            accidental,
            ..self.clone()
        }
    }

    pub fn with_octave(&self, octave: Option<i8>) -> Self {
        Self {
            octave,
            ..self.clone()
        }
    }

    pub fn is_natural(&self) -> bool {
        self.accidental.is_natural()
    }

    pub fn is_sharp(&self) -> bool {
        self.accidental == Accidental::Sharp
    }

    pub fn is_double_sharp(&self) -> bool {
        self.accidental == Accidental::DoubleSharp
    }

    pub fn is_flat(&self) -> bool {
        self.accidental == Accidental::Flat
    }

    pub fn is_double_flat(&self) -> bool {
        self.accidental == Accidental::DoubleFlat
    }

    /// Letter + accidental, without octave
    pub fn name(&self, opts: &NameOptions) -> String {
        let accidental = if opts.transform_accidental {
            self.accidental.unicode_symbol()
        } else {
            self.accidental.symbol()
        };
        format!("{}{}", self.letter, accidental)
    }

    /// Letter + accidental + octave (if any)
    pub fn name_with_group(&self, opts: &NameOptions) -> String {
        match self.octave {
            Some(octave) => format!("{}{}", self.name(opts), octave),
            None => self.name(opts),
        }
    }

    /// Configurable equality
    ///
    /// Letters must always match. Natural and explicit natural are never
    /// told apart, whatever the options say.
    pub fn is(&self, other: &Note, opts: &NoteIsOptions) -> bool {
        if self.letter != other.letter {
            return false;
        }

        if opts.check_group
            && (self.octave.is_some() || other.octave.is_some())
            && self.octave != other.octave
        {
            return false;
        }

        if opts.check_accidental
            && (!self.is_natural() || !other.is_natural())
            && self.accidental != other.accidental
        {
            return false;
        }

        true
    }

    /// Interval from this note up to `other`
    ///
    /// Walks the letters upward, so the degree is always 1-7. Same-letter
    /// pairs one half step apart (C to C#, C# to C) give the S1 pseudo
    /// interval.
    pub fn to(&self, other: &Note) -> Result<Interval, TheoryError> {
        let degree = (other.index() - self.index()).rem_euclid(7) + 1;

        // whole steps between white keys, minus E-F and B-C half steps
        let mut semitones = degree * 2 - 2;
        let mut from = self.letter;
        while from != other.letter {
            from = from.next();
            if from == Letter::F || from == Letter::C {
                semitones -= 1;
            }
        }

        semitones -= self.accidental.offset();
        semitones += other.accidental.offset();

        // C# to C is -1, G# to Gb is -2
        let semitones = semitones.abs();

        Interval::from_degree_and_semitones(degree as u8, semitones)
    }

    /// Move up by `interval`, spelling the result on the right letter
    pub fn add(&self, interval: &Interval) -> Result<Note, TheoryError> {
        self.step(interval, Direction::High)
    }

    /// Move down by `interval`, spelling the result on the right letter
    pub fn minus(&self, interval: &Interval) -> Result<Note, TheoryError> {
        self.step(interval, Direction::Low)
    }

    pub fn transpose(&self, direction: Direction, interval: &Interval) -> Result<Note, TheoryError> {
        self.step(interval, direction)
    }

    fn step(&self, interval: &Interval, direction: Direction) -> Result<Note, TheoryError> {
        if interval.is_semitone() {
            return Err(TheoryError::UnsupportedInterval(interval.abbreviation()));
        }
        if interval.is_unison() {
            return Ok(self.clone());
        }

        let degree = i32::from(interval.degree().value());
        let octave_span = if degree == 8 { 12 } else { 0 };

        let absolute = match direction {
            Direction::High => self.index() + degree - 1,
            Direction::Low => self.index() - degree + 1,
        };
        let letter = Letter::from_ordinal(absolute);
        let octave = self
            .octave
            .map(|octave| octave + (absolute - 1).div_euclid(7) as i8);

        // distance spanned by the unaltered target letter, and the offset
        // the target needs so the distance equals the interval exactly
        let offset = match direction {
            Direction::High => {
                let natural = (letter.pitch_class() - self.letter.pitch_class()).rem_euclid(12)
                    + octave_span;
                let current = natural - self.accidental.offset();
                i32::from(interval.semitones()) - current
            }
            Direction::Low => {
                let natural = (self.letter.pitch_class() - letter.pitch_class()).rem_euclid(12)
                    + octave_span;
                let current = natural + self.accidental.offset();
                current - i32::from(interval.semitones())
            }
        };

        let accidental =
            Accidental::from_offset(offset).ok_or_else(|| TheoryError::UnrepresentableNote {
                note: self.to_string(),
                interval: interval.abbreviation(),
                offset,
            })?;

        Ok(Note::new(letter, accidental, octave))
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name_with_group(&NameOptions::default()))
    }
}

impl FromStr for Note {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Note {
    type Error = TheoryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Note> for String {
    fn from(note: Note) -> Self {
        note.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(text: &str) -> Note {
        Note::parse(text).unwrap()
    }

    fn interval(text: &str) -> Interval {
        Interval::parse(text).unwrap()
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(Note::parse(""), Err(TheoryError::InvalidLetter("".into())));
        assert_eq!(Note::parse("H"), Err(TheoryError::InvalidLetter("H".into())));
        assert_eq!(Note::parse("Cx"), Err(TheoryError::InvalidAccidental("x".into())));
        assert_eq!(Note::parse("C10"), Err(TheoryError::InvalidOctave("10".into())));
        assert_eq!(Note::parse("C4b"), Err(TheoryError::InvalidOctave("4b".into())));
    }

    #[test]
    fn test_parse_and_name() {
        assert_eq!(note("c").name(&NameOptions::default()), "C");
        assert_eq!(note("C1").to_string(), "C1");
        assert_eq!(note("Cb1").to_string(), "Cb1");
        assert_eq!(note("C#3").name(&NameOptions::default()), "C#");
        assert_eq!(note("C##").accidental(), Accidental::DoubleSharp);
        assert_eq!(note("E♭3").to_string(), "Eb3");
        assert_eq!(note("F#").name(&NameOptions::unicode()), "F♯");
        assert_eq!(note("A♮").name(&NameOptions::unicode()), "A♮");
    }

    #[test]
    fn test_with_setters() {
        let n = note("C3");
        assert_eq!(n.with_octave(Some(4)).to_string(), "C4");
        assert_eq!(n.with_accidental(Accidental::DoubleFlat).to_string(), "Cbb3");
        assert_eq!(n.to_string(), "C3");
    }

    #[test]
    fn test_is() {
        let defaults = NoteIsOptions::default();
        assert!(note("A").is(&note("A"), &defaults));
        assert!(note("A♮").is(&note("A"), &defaults));
        assert!(!note("A#").is(&note("A"), &defaults));
        assert!(note("A3").is(&note("A4"), &defaults));

        let with_group = NoteIsOptions {
            check_group: true,
            ..defaults
        };
        assert!(!note("A3").is(&note("A4"), &with_group));
        assert!(!note("A3").is(&note("A"), &with_group));
        assert!(note("A").is(&note("A"), &with_group));

        let no_accidental = NoteIsOptions {
            check_accidental: false,
            ..defaults
        };
        assert!(note("A#").is(&note("Ab"), &no_accidental));
    }

    #[test]
    fn test_to() {
        let cases = [
            ("C", "C", "P1"),
            ("D#", "Eb", "P1"),
            ("C", "C#", "S1"),
            ("Cb", "C", "S1"),
            ("C#", "C", "S1"),
            ("B", "B#", "S1"),
            ("C", "D", "M2"),
            ("E", "F", "m2"),
            ("B", "C", "m2"),
            ("C#", "E", "m3"),
            ("A", "Cb", "d3"),
            ("Cb", "F#", "AA4"),
            ("C#", "Fb", "dd4"),
            ("Cb", "G#", "AA5"),
            ("C#", "Gb", "dd5"),
            ("G", "F", "m7"),
        ];
        for (from, to, expected) in cases {
            assert_eq!(
                note(from).to(&note(to)).unwrap().abbreviation(),
                expected,
                "{} -> {}",
                from,
                to
            );
        }
    }

    #[test]
    fn test_to_unresolvable() {
        assert!(matches!(
            note("G#").to(&note("Gb")),
            Err(TheoryError::UnresolvableInterval { degree: 1, semitones: 2 })
        ));
    }

    #[test]
    fn test_add() {
        let c3 = note("C3");
        assert_eq!(c3.add(&interval("P1")).unwrap().to_string(), "C3");
        assert_eq!(c3.add(&interval("P8")).unwrap().to_string(), "C4");
        assert_eq!(c3.add(&interval("M3")).unwrap().to_string(), "E3");
        assert_eq!(note("C#").add(&interval("M2")).unwrap().to_string(), "D#");
        assert_eq!(note("C#").add(&interval("P8")).unwrap().to_string(), "C#");
        assert_eq!(note("B3").add(&interval("m2")).unwrap().to_string(), "C4");
        assert_eq!(note("Eb").add(&interval("P5")).unwrap().to_string(), "Bb");
        assert_eq!(note("B").add(&interval("M7")).unwrap().to_string(), "A#");
    }

    #[test]
    fn test_minus() {
        let c3 = note("C3");
        assert_eq!(c3.minus(&interval("P1")).unwrap().to_string(), "C3");
        let b1 = c3
            .minus(&interval("P8"))
            .and_then(|n| n.minus(&interval("m2")))
            .unwrap();
        assert_eq!(b1.to_string(), "B1");
        assert_eq!(c3.minus(&interval("M3")).unwrap().to_string(), "Ab2");
        assert_eq!(note("C#").minus(&interval("M2")).unwrap().to_string(), "B");
        assert_eq!(note("Eb").minus(&interval("m3")).unwrap().to_string(), "C");
    }

    #[test]
    fn test_semitone_interval_cannot_move() {
        assert_eq!(
            note("C").add(&interval("S1")),
            Err(TheoryError::UnsupportedInterval("S1".into()))
        );
        assert_eq!(
            note("C").minus(&interval("S1")),
            Err(TheoryError::UnsupportedInterval("S1".into()))
        );
    }

    #[test]
    fn test_triple_accidental_rejected() {
        assert!(matches!(
            note("Fbb").minus(&interval("A4")),
            Err(TheoryError::UnrepresentableNote { .. })
        ));
    }

    #[test]
    fn test_serde_as_name() {
        let json = serde_json::to_string(&note("F#4")).unwrap();
        assert_eq!(json, "\"F#4\"");
        let parsed: Note = serde_json::from_str("\"Bb\"").unwrap();
        assert_eq!(parsed, note("Bb"));
    }
}
