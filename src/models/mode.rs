//! Mode: an ordered scale built from a key note and an interval pattern
//!
//! Scale notes are spelled by adding each pattern interval to the key, so a
//! mode on Eb contains Gb and never F#. Related modes (parallel, relative,
//! dominant, subdominant) are always re-derived from a key and a kind.

use serde::{Deserialize, Serialize};

use crate::error::TheoryError;
use crate::models::accidental::Accidental;
use crate::models::chord::{Chord, ChordType};
use crate::models::interval::Interval;
use crate::models::mode_kind::ModeKind;
use crate::models::note::{Direction, NameOptions, Note};
use crate::models::note_collection::NoteCollection;
use crate::rules::{mode_catalog, mode_table};
use crate::utils::range::{range, Spelling};

/// Options for `Mode::name`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ModeNameOptions {
    /// "C Major" instead of "C Natural Major"
    pub short_name: bool,
    pub transform_accidental: bool,
}

/// One selectable entry of the mode picker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeItem {
    pub label: String,
    pub value: ModeKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeGroup {
    pub group: String,
    pub items: Vec<ModeItem>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mode {
    notes: NoteCollection,
    kind: Option<ModeKind>,
}

impl Mode {
    /// Mode over arbitrary notes; `kind` is `None` for a hand-built scale
    pub fn new(notes: NoteCollection, kind: Option<ModeKind>) -> Result<Self, TheoryError> {
        if notes.is_empty() {
            return Err(TheoryError::EmptyMode);
        }
        Ok(Self { notes, kind })
    }

    pub fn from_key(key: &Note, kind: ModeKind) -> Result<Self, TheoryError> {
        let mut notes = mode_table::intervals(kind)
            .iter()
            .map(|abbreviation| key.add(&Interval::parse(abbreviation)?))
            .collect::<Result<Vec<_>, _>>()?;

        // the raised 7th of harmonic minor always shows its natural sign
        if kind == ModeKind::HarmonicMinor {
            if let Some(seventh) = notes.get_mut(6) {
                if seventh.accidental() == Accidental::Natural {
                    *seventh = seventh.with_accidental(Accidental::NaturalExplicit);
                }
            }
        }

        log::debug!("mode {} {}: {} notes", key, kind.label(), notes.len());

        Self::new(NoteCollection::new(notes), Some(kind))
    }

    pub fn parse(key: &str, kind: ModeKind) -> Result<Self, TheoryError> {
        Self::from_key(&Note::parse(key)?, kind)
    }

    /// Mode picker groups in display order
    pub fn modes() -> Vec<ModeGroup> {
        mode_catalog::groups()
            .iter()
            .map(|group| ModeGroup {
                group: group.group.clone(),
                items: group
                    .kinds
                    .iter()
                    .map(|kind| ModeItem {
                        label: kind.label().to_string(),
                        value: *kind,
                    })
                    .collect(),
            })
            .collect()
    }

    /// Playable keys for a kind
    ///
    /// Every chromatic key in both spellings, minus the ones whose scale
    /// needs a double accidental or has no natural note at all.
    pub fn get_keys(kind: ModeKind) -> Result<NoteCollection, TheoryError> {
        let candidates: Vec<Note> = range(&Note::parse("C")?, &Note::parse("B")?, Spelling::Both)?
            .into_iter()
            .flat_map(NoteCollection::into_notes)
            .collect();

        let mut keys = Vec::new();

        for key in candidates {
            let mode = match Self::from_key(&key, kind) {
                Ok(mode) => mode,
                Err(err) => {
                    log::warn!("skipping key {} for {}: {}", key, kind.label(), err);
                    continue;
                }
            };

            let notes = mode.notes();
            if notes.iter().any(|note| note.accidental().is_double()) {
                continue;
            }
            if notes.iter().all(|note| !note.is_natural()) {
                continue;
            }

            keys.push(key);
        }

        Ok(NoteCollection::new(keys))
    }

    /// First scale note
    pub fn key(&self) -> &Note {
        &self.notes.notes()[0]
    }

    pub fn kind(&self) -> Option<ModeKind> {
        self.kind
    }

    pub fn notes(&self) -> &NoteCollection {
        &self.notes
    }

    pub fn is_major(&self) -> bool {
        self.kind.map_or(false, |kind| kind.is_major())
    }

    pub fn is_minor(&self) -> bool {
        self.kind.map_or(false, |kind| kind.is_minor())
    }

    /// Chord stacked on scale step `step` (1-based)
    ///
    /// Indexes past the last scale note wrap around; notes that carry an
    /// octave move up one octave per wrap.
    pub fn chord(&self, step: usize, chord_type: ChordType) -> Result<Chord, TheoryError> {
        let count = self.notes.count();

        if step < 1 || step > count {
            return Err(TheoryError::InvalidStep { step, count });
        }

        let mut notes = Vec::with_capacity(chord_type.indexes().len());

        for offset in chord_type.indexes() {
            let absolute = step + offset - 1;
            let index = (absolute - 1) % count;
            let wraps = ((absolute - 1) / count) as i8;

            let note = self
                .notes
                .get(index)
                .ok_or(TheoryError::InvalidStep { step, count })?;
            let octave = note.octave().map(|octave| octave + wraps);
            notes.push(note.with_octave(octave));
        }

        Chord::new(NoteCollection::new(notes), Some(self.clone()), Some(step))
    }

    /// One chord per scale step
    pub fn chords(&self, chord_type: ChordType) -> Result<Vec<Chord>, TheoryError> {
        (1..=self.notes.count())
            .map(|step| self.chord(step, chord_type))
            .collect()
    }

    /// Move every note in place
    ///
    /// The mode is left untouched when any note cannot be spelled.
    pub fn transpose(
        &mut self,
        direction: Direction,
        interval: &Interval,
    ) -> Result<&mut Self, TheoryError> {
        self.notes = self
            .notes
            .map(|note| note.transpose(direction, interval))?;
        Ok(self)
    }

    pub fn transposed(&self, direction: Direction, interval: &Interval) -> Result<Mode, TheoryError> {
        let mut mode = self.clone();
        mode.transpose(direction, interval)?;
        Ok(mode)
    }

    /// Same key, paired major/minor kind
    pub fn parallel(&self) -> Result<Mode, TheoryError> {
        let counterpart = self
            .kind
            .and_then(|kind| kind.counterpart())
            .ok_or(TheoryError::UnsupportedOperation("parallel"))?;

        Self::from_key(self.key(), counterpart)
    }

    /// Minor third below (major) or above (minor), paired kind
    pub fn relative(&self) -> Result<Mode, TheoryError> {
        let counterpart = self
            .kind
            .and_then(|kind| kind.counterpart())
            .ok_or(TheoryError::UnsupportedOperation("relative"))?;

        let minor_third = Interval::parse("m3")?;
        let key = if self.is_major() {
            self.key().minus(&minor_third)?
        } else {
            self.key().add(&minor_third)?
        };

        Self::from_key(&key, counterpart)
    }

    /// Same kind rooted on the 5th scale note
    pub fn dominant(&self) -> Result<Mode, TheoryError> {
        self.rooted_on(5)
    }

    /// Same kind rooted on the 4th scale note
    pub fn sub_dominant(&self) -> Result<Mode, TheoryError> {
        self.rooted_on(4)
    }

    fn rooted_on(&self, step: usize) -> Result<Mode, TheoryError> {
        let kind = self
            .kind
            .ok_or_else(|| TheoryError::UnknownModeKind("none".to_string()))?;
        let key = self.notes.get(step - 1).ok_or(TheoryError::InvalidStep {
            step,
            count: self.notes.count(),
        })?;

        Self::from_key(key, kind)
    }

    /// "C Natural Major", "E♭ Minor", "C Unknown Mode"
    pub fn name(&self, opts: &ModeNameOptions) -> String {
        let root = self.key().name(&NameOptions {
            transform_accidental: opts.transform_accidental,
        });

        let label = match self.kind {
            Some(kind) => kind.label(),
            None => "Unknown Mode",
        };

        let label = if opts.short_name {
            label
                .replace("Natural ", "")
                .replace("Harmonic ", "")
                .replace("Melodic ", "")
        } else {
            label.to_string()
        };

        format!("{} {}", root, label)
    }
}
