//! Chromatic range helper
//!
//! Walks the twelve semitones from one note to another. Each step is a
//! small `NoteCollection` holding the spellings requested for that step,
//! so a black key can come back as `["G#", "Ab"]`.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::TheoryError;
use crate::models::accidental::Accidental;
use crate::models::letter::Letter;
use crate::models::note::{Note, NoteIsOptions};
use crate::models::note_collection::NoteCollection;

/// Which spelling to use for black keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Spelling {
    #[default]
    Sharp,
    Flat,
    Both,
}

impl FromStr for Spelling {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sharp" => Ok(Spelling::Sharp),
            "flat" => Ok(Spelling::Flat),
            "both" => Ok(Spelling::Both),
            _ => Err(TheoryError::InvalidRange(format!("unknown spelling \"{}\"", s))),
        }
    }
}

/// One semitone of the octave: the sharp spelling and, for black keys, the
/// flat spelling
const CHROMATIC: [(Letter, Accidental, Option<(Letter, Accidental)>); 12] = [
    (Letter::C, Accidental::Natural, None),
    (Letter::C, Accidental::Sharp, Some((Letter::D, Accidental::Flat))),
    (Letter::D, Accidental::Natural, None),
    (Letter::D, Accidental::Sharp, Some((Letter::E, Accidental::Flat))),
    (Letter::E, Accidental::Natural, None),
    (Letter::F, Accidental::Natural, None),
    (Letter::F, Accidental::Sharp, Some((Letter::G, Accidental::Flat))),
    (Letter::G, Accidental::Natural, None),
    (Letter::G, Accidental::Sharp, Some((Letter::A, Accidental::Flat))),
    (Letter::A, Accidental::Natural, None),
    (Letter::A, Accidental::Sharp, Some((Letter::B, Accidental::Flat))),
    (Letter::B, Accidental::Natural, None),
];

/// Highest octave a note name can carry
const MAX_OCTAVE: i8 = 9;

fn spellings(index: usize, spelling: Spelling, octave: Option<i8>) -> NoteCollection {
    let (letter, accidental, flat) = CHROMATIC[index];
    let sharp = Note::new(letter, accidental, octave);

    let notes = match (flat, spelling) {
        (None, _) | (Some(_), Spelling::Sharp) => vec![sharp],
        (Some((letter, accidental)), Spelling::Flat) => {
            vec![Note::new(letter, accidental, octave)]
        }
        (Some((letter, accidental)), Spelling::Both) => {
            vec![sharp, Note::new(letter, accidental, octave)]
        }
    };

    NoteCollection::new(notes)
}

/// Position of `note` in the chromatic table, either spelling
fn chromatic_index(note: &Note) -> Option<usize> {
    let opts = NoteIsOptions::default();

    CHROMATIC.iter().position(|(letter, accidental, flat)| {
        note.is(&Note::new(*letter, *accidental, None), &opts)
            || flat.map_or(false, |(letter, accidental)| {
                note.is(&Note::new(letter, accidental, None), &opts)
            })
    })
}

/// Every semitone from `from` up to `to`, both included
///
/// Without octaves the walk stops at the first match of `to` (so `A` to `C`
/// crosses B). With octaves the walk runs until the exact octave is reached.
pub fn range(from: &Note, to: &Note, spelling: Spelling) -> Result<Vec<NoteCollection>, TheoryError> {
    if from.octave().is_some() != to.octave().is_some() {
        return Err(TheoryError::MixedOctave);
    }

    let not_in_table = |note: &Note| TheoryError::InvalidRange(format!("{} is not a chromatic step", note));
    let start = chromatic_index(from).ok_or_else(|| not_in_table(from))?;
    let end = chromatic_index(to).ok_or_else(|| not_in_table(to))?;

    let mut index = start;
    let mut octave = from.octave();
    let mut steps = Vec::new();

    loop {
        steps.push(spellings(index, spelling, octave));

        if index == end && octave == to.octave() {
            return Ok(steps);
        }

        index += 1;
        if index == CHROMATIC.len() {
            index = 0;
            octave = octave.map(|octave| octave + 1);
        }

        let past_end = match (octave, to.octave()) {
            (Some(current), Some(last)) => current > last || current > MAX_OCTAVE,
            _ => steps.len() > CHROMATIC.len(),
        };
        if past_end {
            return Err(TheoryError::InvalidRange(format!("{} is below {}", to, from)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn joined(from: &str, to: &str, spelling: Spelling) -> Vec<String> {
        range(&Note::parse(from).unwrap(), &Note::parse(to).unwrap(), spelling)
            .unwrap()
            .iter()
            .map(|step| step.to_string())
            .collect()
    }

    #[test]
    fn test_mixed_octave() {
        let c4 = Note::parse("C4").unwrap();
        let g = Note::parse("G").unwrap();
        assert_eq!(range(&c4, &g, Spelling::Sharp), Err(TheoryError::MixedOctave));
        assert_eq!(
            range(&g, &c4, Spelling::Sharp).unwrap_err().to_string(),
            "note.group must be both set or not set"
        );
    }

    #[test]
    fn test_with_octave() {
        assert_eq!(joined("C3", "E3", Spelling::Sharp), vec!["C3", "C#3", "D3", "D#3", "E3"]);
        assert_eq!(joined("A3", "C4", Spelling::Sharp), vec!["A3", "A#3", "B3", "C4"]);
    }

    #[test]
    fn test_spellings() {
        assert_eq!(joined("G#", "C", Spelling::Flat), vec!["Ab", "A", "Bb", "B", "C"]);
        assert_eq!(joined("G#", "C", Spelling::Both), vec!["G# Ab", "A", "A# Bb", "B", "C"]);
        assert_eq!(joined("C", "C", Spelling::Sharp), vec!["C"]);
    }

    #[test]
    fn test_full_octave() {
        assert_eq!(joined("C", "B", Spelling::Both).len(), 12);
    }

    #[test]
    fn test_invalid_endpoints() {
        let e_sharp = Note::parse("E#").unwrap();
        let c = Note::parse("C").unwrap();
        assert!(matches!(
            range(&e_sharp, &c, Spelling::Sharp),
            Err(TheoryError::InvalidRange(_))
        ));

        let c4 = Note::parse("C4").unwrap();
        let b3 = Note::parse("B3").unwrap();
        assert!(matches!(
            range(&c4, &b3, Spelling::Sharp),
            Err(TheoryError::InvalidRange(_))
        ));
    }

    #[test]
    fn test_spelling_names() {
        assert_eq!("both".parse::<Spelling>().unwrap(), Spelling::Both);
        assert!("natural".parse::<Spelling>().is_err());
    }
}
