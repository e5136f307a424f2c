//! Shared types for the WASM API
//!
//! Plain serde shapes exchanged with JavaScript. Field names are camelCase
//! on the JS side.

use serde::{Deserialize, Serialize};

use crate::models::{Chord, ChordJson, Interval, Mode, ModeKind, ModeNameOptions, NameOptions, Note};

/// Mode identity as stored by the UI: `{ key: "Eb", type: 0 }`
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ModeRef {
    pub key: String,
    #[serde(rename = "type")]
    pub kind: ModeKind,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NoteInfo {
    pub name: String,
    pub letter: String,
    pub accidental: String,
    pub octave: Option<i8>,
    /// Letter ordinal, C=1 ... B=7
    pub index: i32,
}

impl From<&Note> for NoteInfo {
    fn from(note: &Note) -> Self {
        Self {
            name: note.to_string(),
            letter: note.letter().to_string(),
            accidental: note.accidental().symbol().to_string(),
            octave: note.octave(),
            index: note.index(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct IntervalInfo {
    pub abbreviation: String,
    pub name: String,
    pub degree: u8,
    pub semitones: u8,
}

impl From<&Interval> for IntervalInfo {
    fn from(interval: &Interval) -> Self {
        Self {
            abbreviation: interval.abbreviation(),
            name: interval.name(),
            degree: interval.degree().value(),
            semitones: interval.semitones(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ModeInfo {
    pub key: String,
    #[serde(rename = "type")]
    pub kind: Option<ModeKind>,
    pub name: String,
    pub short_name: String,
    pub notes: Vec<String>,
}

impl From<&Mode> for ModeInfo {
    fn from(mode: &Mode) -> Self {
        Self {
            key: mode.key().to_string(),
            kind: mode.kind(),
            name: mode.name(&ModeNameOptions::default()),
            short_name: mode.name(&ModeNameOptions {
                short_name: true,
                ..Default::default()
            }),
            notes: mode.notes().names(&NameOptions::default()),
        }
    }
}

/// A chord ready for display, plus its JSON form for storing
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChordInfo {
    /// `None` when the chord has no symbol (e.g. C E# G)
    pub abbreviation: Option<String>,
    pub tonic: String,
    pub inversion: i32,
    pub notes: Vec<String>,
    pub json: ChordJson,
}

impl From<&Chord> for ChordInfo {
    fn from(chord: &Chord) -> Self {
        Self {
            abbreviation: chord.to_abbreviation(&NameOptions::unicode()).ok(),
            tonic: chord.tonic().to_string(),
            inversion: chord.inversion(),
            notes: chord.notes().names(&NameOptions::default()),
            json: chord.to_json(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chord_info() {
        let chord = Chord::parse(&["E", "G", "C"]).unwrap();
        let info = ChordInfo::from(&chord);
        assert_eq!(info.abbreviation.as_deref(), Some("C/E"));
        assert_eq!(info.tonic, "C");
        assert_eq!(info.inversion, 1);

        let odd = Chord::parse(&["C", "E#", "G"]).unwrap();
        assert_eq!(ChordInfo::from(&odd).abbreviation, None);
    }

    #[test]
    fn test_mode_info() {
        let mode = Mode::parse("Eb", ModeKind::NaturalMinor).unwrap();
        let info = ModeInfo::from(&mode);
        assert_eq!(info.name, "Eb Natural Minor");
        assert_eq!(info.short_name, "Eb Minor");
        assert_eq!(info.notes.len(), 7);
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["type"], 3);
        assert_eq!(json["shortName"], "Eb Minor");
    }

    #[test]
    fn test_mode_ref() {
        let mode_ref: ModeRef = serde_json::from_str(r#"{"key":"C","type":4}"#).unwrap();
        assert_eq!(mode_ref.kind, ModeKind::HarmonicMinor);
        assert!(serde_json::from_str::<ModeRef>(r#"{"key":"C","type":40}"#).is_err());
    }
}
