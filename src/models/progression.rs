//! Progression item: a chord placed in a progression with its voicing
//! choices (inversion, omitted notes, octave shift).

use serde::{Deserialize, Serialize};

use crate::error::TheoryError;
use crate::models::chord::Chord;
use crate::models::note_collection::{NoteCollection, OctaveShift, WithGroupOptions};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressionItem {
    pub chord: Chord,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step: Option<usize>,
    #[serde(default)]
    pub inversion: i32,
    #[serde(default)]
    pub omits: NoteCollection,
    #[serde(default)]
    pub octave: OctaveShift,
}

impl ProgressionItem {
    pub fn new(chord: Chord) -> Self {
        let step = chord.step();
        Self {
            chord,
            step,
            inversion: 0,
            omits: NoteCollection::default(),
            octave: OctaveShift::None,
        }
    }

    /// Notes to sound, with octave groups starting at `base`
    pub fn voicing(&self, base: i8) -> Result<NoteCollection, TheoryError> {
        let inverted = self.chord.inverse(self.inversion)?;

        let opts = WithGroupOptions {
            octave: self.octave,
            omits: Some(self.omits.clone()),
            check_group: false,
            auto_group: true,
        };

        Ok(inverted.notes().with_group(base, &opts))
    }
}
