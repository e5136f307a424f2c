//! Chord: a validated set of stacked thirds
//!
//! Construction is a validating parse. The deduplicated notes are reduced to
//! the degrees of their successive intervals and that sequence must match a
//! known triad or seventh shape in `rules::chord_table`. The match fixes the
//! inversion and which note is the tonic.
//!
//! A chord produced by `Mode::chord` also remembers the mode and scale step
//! it came from. `resolve_to` needs that link.

use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};
use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

use crate::error::TheoryError;
use crate::models::mode::Mode;
use crate::models::mode_kind::ModeKind;
use crate::models::note::{NameOptions, Note, NoteIsOptions};
use crate::models::note_collection::NoteCollection;
use crate::rules::chord_table;

/// Shape of a chord built on a scale step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum ChordType {
    #[default]
    Triad = 0,
    Seventh = 1,
}

impl ChordType {
    pub fn from_id(id: u8) -> Result<Self, TheoryError> {
        match id {
            0 => Ok(ChordType::Triad),
            1 => Ok(ChordType::Seventh),
            _ => Err(TheoryError::UnknownChordType(id.to_string())),
        }
    }

    /// 1-based scale offsets stacked on the step
    pub fn indexes(&self) -> &'static [usize] {
        match self {
            ChordType::Triad => &[1, 3, 5],
            ChordType::Seventh => &[1, 3, 5, 7],
        }
    }
}

/// Options for `Chord::is`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChordIsOptions {
    pub check_inversion: bool,
    pub note_options: NoteIsOptions,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ResolveAlgorithm {
    /// Triads of the mode and its closely related modes whose tonic lies a
    /// minor second above one of the chord's notes
    #[default]
    #[serde(rename = "closely-related-modes")]
    CloselyRelatedModes,
}

impl ResolveAlgorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResolveAlgorithm::CloselyRelatedModes => "closely-related-modes",
        }
    }
}

impl FromStr for ResolveAlgorithm {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "closely-related-modes" => Ok(ResolveAlgorithm::CloselyRelatedModes),
            _ => Err(TheoryError::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// Options for `Chord::resolve_to`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolveOptions {
    pub algorithm: ResolveAlgorithm,
}

/// Mode identity inside a chord's JSON form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeJson {
    pub key: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<ModeKind>,
}

/// `{ notes, mode?: { key, type? }, step? }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChordJson {
    pub notes: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<ModeJson>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ChordJson", into = "ChordJson")]
pub struct Chord {
    notes: NoteCollection,
    tonic: Note,
    inversion: i32,
    mode: Option<Mode>,
    step: Option<usize>,
}

impl Chord {
    pub fn new(
        notes: NoteCollection,
        mode: Option<Mode>,
        step: Option<usize>,
    ) -> Result<Self, TheoryError> {
        if notes.count() < 3 {
            return Err(TheoryError::TooFewNotes(notes.count()));
        }

        let dedup = notes.dedup();
        let degrees: Vec<u8> = dedup
            .intervals()?
            .iter()
            .map(|interval| interval.degree().value())
            .collect();

        let not_a_chord = || TheoryError::NotAChord(notes.to_string());

        let (inversion, tonic_index) =
            chord_table::inversion_and_tonic(&degrees).ok_or_else(not_a_chord)?;
        let tonic = dedup.get(tonic_index).cloned().ok_or_else(not_a_chord)?;

        Ok(Self {
            notes,
            tonic,
            inversion,
            mode,
            step,
        })
    }

    /// Chord from note names, without a mode
    pub fn parse<S: AsRef<str>>(names: &[S]) -> Result<Self, TheoryError> {
        Self::new(NoteCollection::parse(names)?, None, None)
    }

    pub fn from_json(json: &ChordJson) -> Result<Self, TheoryError> {
        let notes = NoteCollection::parse(&json.notes)?;

        // a mode without a kind cannot be rebuilt, so it is dropped
        let mode = match &json.mode {
            Some(ModeJson {
                key,
                kind: Some(kind),
            }) => Some(Mode::from_key(&Note::parse(key)?, *kind)?),
            _ => None,
        };

        Self::new(notes, mode, json.step)
    }

    pub fn to_json(&self) -> ChordJson {
        ChordJson {
            notes: self.notes.iter().map(|note| note.to_string()).collect(),
            mode: self.mode.as_ref().map(|mode| ModeJson {
                key: mode.key().to_string(),
                kind: mode.kind(),
            }),
            step: self.step,
        }
    }

    pub fn notes(&self) -> &NoteCollection {
        &self.notes
    }

    pub fn tonic(&self) -> &Note {
        &self.tonic
    }

    /// 0 for root position, 1 for first inversion, ...
    pub fn inversion(&self) -> i32 {
        self.inversion
    }

    pub fn mode(&self) -> Option<&Mode> {
        self.mode.as_ref()
    }

    pub fn step(&self) -> Option<usize> {
        self.step
    }

    /// Chord symbol such as "C", "Cm7(♭5)" or "C/E"
    pub fn to_abbreviation(&self, opts: &NameOptions) -> Result<String, TheoryError> {
        let tonic = self.tonic.name(opts);
        let first = self
            .notes
            .root()
            .map(|note| note.name(opts))
            .unwrap_or_else(|| tonic.clone());

        let root_position = self.root_position()?;
        let sequence: Vec<&str> = root_position
            .notes
            .intervals()?
            .iter()
            .filter_map(|interval| chord_table::third_label(interval.quality()))
            .collect();

        let suffix = chord_table::chord_suffix(&sequence.join("-")).ok_or_else(|| {
            TheoryError::UnrepresentableChord(self.notes.join(" ", &NameOptions::unicode()))
        })?;

        if tonic == first {
            Ok(format!("{}{}", tonic, suffix))
        } else {
            Ok(format!("{}{}/{}", tonic, suffix, first))
        }
    }

    /// Rotate the notes `ordinal` times
    ///
    /// Positive ordinals move the lowest note to the top (one octave up when
    /// it has one), negative ordinals move the highest note to the bottom.
    pub fn inverse(&self, ordinal: i32) -> Result<Chord, TheoryError> {
        let mut notes: VecDeque<Note> = self.notes.iter().cloned().collect();

        for _ in 0..ordinal.unsigned_abs() {
            if ordinal < 0 {
                if let Some(last) = notes.pop_back() {
                    let octave = last.octave().map(|octave| octave.saturating_sub(1));
                    notes.push_front(last.with_octave(octave));
                }
            } else if let Some(first) = notes.pop_front() {
                let octave = first.octave().map(|octave| octave.saturating_add(1));
                notes.push_back(first.with_octave(octave));
            }
        }

        Chord::new(
            NoteCollection::new(notes.into_iter().collect()),
            self.mode.clone(),
            self.step,
        )
    }

    pub fn root_position(&self) -> Result<Chord, TheoryError> {
        if self.inversion == 0 {
            return Ok(self.clone());
        }
        self.inverse(-self.inversion)
    }

    /// Same notes in any order; optionally the same inversion
    pub fn is(&self, other: &Chord, opts: &ChordIsOptions) -> bool {
        if self.notes.count() != other.notes.count() {
            return false;
        }
        if opts.check_inversion && self.inversion != other.inversion {
            return false;
        }

        self.notes
            .iter()
            .all(|note| other.notes.includes(note, &opts.note_options))
    }

    /// Chords this chord can resolve to
    ///
    /// Candidates are the triads of the owning mode, its relative, the
    /// relative's dominant and subdominant, its own dominant and subdominant
    /// and its parallel, in that order. A candidate is kept when its tonic
    /// is a minor second above any note of this chord. The same chord can
    /// appear more than once when it belongs to several of those modes.
    pub fn resolve_to(&self, opts: &ResolveOptions) -> Result<Vec<Chord>, TheoryError> {
        let resolutions = match opts.algorithm {
            ResolveAlgorithm::CloselyRelatedModes => self.resolve_in_related_modes()?,
        };

        log::debug!(
            "resolve {} ({}): {} candidates",
            self.notes,
            opts.algorithm.as_str(),
            resolutions.len()
        );

        Ok(resolutions)
    }

    fn resolve_in_related_modes(&self) -> Result<Vec<Chord>, TheoryError> {
        let mode = self.mode.as_ref().ok_or(TheoryError::NoAssociatedMode)?;
        let relative = mode.relative()?;

        let candidates = [
            mode.clone(),
            relative.clone(),
            relative.dominant()?,
            relative.sub_dominant()?,
            mode.dominant()?,
            mode.sub_dominant()?,
            mode.parallel()?,
        ];

        let mut resolutions = Vec::new();

        for candidate in &candidates {
            for chord in candidate.chords(ChordType::Triad)? {
                if self.is(&chord, &ChordIsOptions::default()) {
                    continue;
                }

                let mut leads_to_tonic = false;
                for note in self.notes.iter() {
                    if note.to(chord.tonic())?.is("m2") {
                        leads_to_tonic = true;
                        break;
                    }
                }

                if leads_to_tonic {
                    resolutions.push(chord);
                }
            }
        }

        Ok(resolutions)
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.notes)
    }
}

impl TryFrom<ChordJson> for Chord {
    type Error = TheoryError;

    fn try_from(json: ChordJson) -> Result<Self, Self::Error> {
        Self::from_json(&json)
    }
}

impl From<Chord> for ChordJson {
    fn from(chord: Chord) -> Self {
        chord.to_json()
    }
}
