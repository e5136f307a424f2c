// Note collections: grouping, chromatic ranges and progression voicings

use compokit_wasm::models::{
    Chord, ChordType, Mode, ModeKind, Note, NoteCollection, NoteIsOptions, OctaveShift,
    ProgressionItem, WithGroupOptions,
};
use compokit_wasm::{range, Spelling, TheoryError};

fn notes(names: &[&str]) -> NoteCollection {
    NoteCollection::parse(names).unwrap()
}

fn steps(from: &str, to: &str, spelling: Spelling) -> Vec<String> {
    range(&Note::parse(from).unwrap(), &Note::parse(to).unwrap(), spelling)
        .unwrap()
        .iter()
        .map(|step| step.to_string())
        .collect()
}

#[test]
fn test_range_examples() {
    assert_eq!(steps("C3", "E3", Spelling::Sharp), vec!["C3", "C#3", "D3", "D#3", "E3"]);
    assert_eq!(steps("A3", "C4", Spelling::Sharp), vec!["A3", "A#3", "B3", "C4"]);
    assert_eq!(steps("G#", "C", Spelling::Flat), vec!["Ab", "A", "Bb", "B", "C"]);
    assert_eq!(steps("G#", "C", Spelling::Both), vec!["G# Ab", "A", "A# Bb", "B", "C"]);
}

#[test]
fn test_range_over_two_octaves() {
    let run = steps("C3", "C5", Spelling::Flat);
    assert_eq!(run.len(), 25);
    assert_eq!(run[1], "Db3");
    assert_eq!(run[24], "C5");
}

#[test]
fn test_range_mixed_groups() {
    let c4 = Note::parse("C4").unwrap();
    let g = Note::parse("G").unwrap();
    assert_eq!(range(&c4, &g, Spelling::Sharp), Err(TheoryError::MixedOctave));
    assert_eq!(range(&g, &c4, Spelling::Both), Err(TheoryError::MixedOctave));
}

#[test]
fn test_with_group_on_scale() {
    let a_minor = Mode::parse("A", ModeKind::NaturalMinor).unwrap();
    let grouped = a_minor.notes().with_group(3, &WithGroupOptions::default());
    assert_eq!(grouped.to_string(), "A3 B3 C4 D4 E4 F4 G4");
}

#[test]
fn test_with_group_omits_by_group() {
    let opts = WithGroupOptions {
        omits: Some(notes(&["C5"])),
        check_group: true,
        ..Default::default()
    };
    assert_eq!(notes(&["G", "C", "E", "G", "C"]).with_group(4, &opts).to_string(), "G4 E5 G5 C6");

    let loose = WithGroupOptions {
        omits: Some(notes(&["C5"])),
        ..Default::default()
    };
    assert_eq!(notes(&["G", "C", "E", "G", "C"]).with_group(4, &loose).to_string(), "G4 E5 G5");
}

#[test]
fn test_with_group_down() {
    let opts = WithGroupOptions {
        octave: OctaveShift::Down,
        ..Default::default()
    };
    assert_eq!(notes(&["F", "A", "C"]).with_group(4, &opts).to_string(), "F3 A3 C4");
}

#[test]
fn test_omit_and_includes() {
    let chord = notes(&["C", "E", "G", "Bb"]);
    let defaults = NoteIsOptions::default();
    assert!(chord.includes(&Note::parse("Bb").unwrap(), &defaults));
    assert!(!chord.includes(&Note::parse("B").unwrap(), &defaults));
    assert_eq!(chord.omit(&notes(&["E", "Bb"]), &defaults).to_string(), "C G");
}

#[test]
fn test_progression_voicings() {
    let c_major = Mode::parse("C", ModeKind::NaturalMajor).unwrap();
    let chords = c_major.chords(ChordType::Triad).unwrap();

    let voicings: Vec<String> = chords
        .iter()
        .map(|chord| ProgressionItem::new(chord.clone()).voicing(3).unwrap().to_string())
        .collect();
    assert_eq!(
        voicings,
        vec!["C4 E4 G4", "D4 F4 A4", "E4 G4 B4", "F3 A3 C4", "G3 B3 D4", "A3 C4 E4", "B3 D4 F4"]
    );
}

#[test]
fn test_progression_item_keeps_step() {
    let c_major = Mode::parse("C", ModeKind::NaturalMajor).unwrap();
    let item = ProgressionItem::new(c_major.chord(4, ChordType::Triad).unwrap());
    assert_eq!(item.step, Some(4));

    let json = serde_json::to_value(&item).unwrap();
    assert_eq!(json["step"], 4);
    assert_eq!(json["octave"], 0);
    assert_eq!(json["chord"]["mode"]["type"], 0);
}

#[test]
fn test_progression_item_from_json() {
    let json = r#"{"chord":{"notes":["G","B","D","F"]},"inversion":1,"omits":["D"],"octave":8}"#;
    let item: ProgressionItem = serde_json::from_str(json).unwrap();
    assert_eq!(item.octave, OctaveShift::Up);
    assert_eq!(item.voicing(3).unwrap().to_string(), "B4 F5 G5");

    let bad = r#"{"chord":{"notes":["G","B"]}}"#;
    assert!(serde_json::from_str::<ProgressionItem>(bad).is_err());
}

#[test]
fn test_voicing_of_chord_without_mode() {
    let chord = Chord::parse(&["E", "G", "C"]).unwrap();
    let mut item = ProgressionItem::new(chord);
    assert_eq!(item.step, None);
    assert_eq!(item.voicing(2).unwrap().to_string(), "E4 G4 C5");

    item.inversion = -1;
    assert_eq!(item.voicing(2).unwrap().to_string(), "C4 E4 G4");
}
