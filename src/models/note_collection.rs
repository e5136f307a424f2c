//! Ordered sequence of notes
//!
//! Insertion order is significant and duplicates are allowed. Chords and
//! modes are both built on top of this type.

use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};
use std::fmt;

use crate::error::TheoryError;
use crate::models::interval::Interval;
use crate::models::letter::Letter;
use crate::models::note::{NameOptions, Note, NoteIsOptions};

/// Octave shortcut applied before groups are assigned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize_repr, Deserialize_repr)]
#[repr(i8)]
pub enum OctaveShift {
    #[default]
    None = 0,
    /// 8va: one octave up
    Up = 8,
    /// 8vb: one octave down
    Down = -8,
}

/// Options for `NoteCollection::with_group`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WithGroupOptions {
    pub octave: OctaveShift,
    /// Notes to drop after groups are assigned
    pub omits: Option<NoteCollection>,
    /// Whether omitted notes must also match by octave
    pub check_group: bool,
    /// Place small chords rooted low in the scale in octave 4
    pub auto_group: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteCollection {
    notes: Vec<Note>,
}

impl NoteCollection {
    pub fn new(notes: Vec<Note>) -> Self {
        Self { notes }
    }

    /// Parse every name, failing on the first invalid one
    pub fn parse<S: AsRef<str>>(names: &[S]) -> Result<Self, TheoryError> {
        let notes = names
            .iter()
            .map(|name| Note::parse(name.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(notes))
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn into_notes(self) -> Vec<Note> {
        self.notes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Note> {
        self.notes.iter()
    }

    pub fn count(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Note> {
        self.notes.get(index)
    }

    /// First note, if any
    pub fn root(&self) -> Option<&Note> {
        self.notes.first()
    }

    /// Interval from each note to the next (n-1 results for n notes)
    pub fn intervals(&self) -> Result<Vec<Interval>, TheoryError> {
        self.notes
            .windows(2)
            .map(|pair| pair[0].to(&pair[1]))
            .collect()
    }

    pub fn map<F>(&self, f: F) -> Result<Self, TheoryError>
    where
        F: FnMut(&Note) -> Result<Note, TheoryError>,
    {
        let notes = self.notes.iter().map(f).collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(notes))
    }

    /// Keep the first occurrence of each letter + accidental, in order
    pub fn dedup(&self) -> Self {
        let mut seen: Vec<String> = Vec::new();
        let mut notes = Vec::new();

        for note in &self.notes {
            let name = note.name(&NameOptions::default());
            if !seen.contains(&name) {
                seen.push(name);
                notes.push(note.clone());
            }
        }

        Self::new(notes)
    }

    pub fn names(&self, opts: &NameOptions) -> Vec<String> {
        self.notes
            .iter()
            .map(|note| note.name_with_group(opts))
            .collect()
    }

    pub fn join(&self, separator: &str, opts: &NameOptions) -> String {
        self.names(opts).join(separator)
    }

    pub fn includes(&self, note: &Note, opts: &NoteIsOptions) -> bool {
        self.notes.iter().any(|item| note.is(item, opts))
    }

    /// Drop every note that matches an entry of `notes`
    pub fn omit(&self, notes: &NoteCollection, opts: &NoteIsOptions) -> Self {
        let kept = self
            .notes
            .iter()
            .filter(|item| !notes.includes(item, opts))
            .cloned()
            .collect();
        Self::new(kept)
    }

    /// Assign ascending octave groups starting at `base`
    ///
    /// The running octave is bumped whenever a note's letter is lower than
    /// the previous one's, so the input must already be in ascending
    /// pitch-class order (e.g. a chord or a scale). Out-of-order input gets
    /// groups that do not reflect its sounding order.
    pub fn with_group(&self, base: i8, opts: &WithGroupOptions) -> Self {
        let mut group = match opts.octave {
            OctaveShift::None => base,
            OctaveShift::Up => base + 1,
            OctaveShift::Down => base - 1,
        };

        if opts.auto_group {
            if let Some(first) = self.notes.first() {
                let size = self.notes.len();
                // triad
                if size <= 3 && first.letter() <= Letter::E {
                    group = 4;
                }
                // seventh
                if size <= 4 && first.letter() == Letter::C {
                    group = 4;
                }
            }
        }

        let mut previous: Option<&Note> = None;
        let notes = self
            .notes
            .iter()
            .map(|note| {
                if let Some(prev) = previous {
                    if note.index() < prev.index() {
                        group += 1;
                    }
                }
                previous = Some(note);
                note.with_octave(Some(group))
            })
            .collect();

        let grouped = Self::new(notes);

        match &opts.omits {
            Some(omits) if !omits.is_empty() => grouped.omit(
                omits,
                &NoteIsOptions {
                    check_accidental: true,
                    check_group: opts.check_group,
                },
            ),
            _ => grouped,
        }
    }
}

impl fmt::Display for NoteCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.join(" ", &NameOptions::default()))
    }
}

impl From<Vec<Note>> for NoteCollection {
    fn from(notes: Vec<Note>) -> Self {
        Self::new(notes)
    }
}

impl<'a> IntoIterator for &'a NoteCollection {
    type Item = &'a Note;
    type IntoIter = std::slice::Iter<'a, Note>;

    fn into_iter(self) -> Self::IntoIter {
        self.notes.iter()
    }
}
