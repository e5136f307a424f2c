//! WASM API smoke tests
//!
//! Run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use compokit_wasm::api::*;
use compokit_wasm::api::types::{ChordInfo, IntervalInfo, ModeInfo, NoteInfo};
use serde::Serialize;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

// plain JS objects, the way the UI passes them
fn js<T: Serialize>(value: &T) -> JsValue {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .unwrap()
}

fn mode_ref(key: &str, kind: u8) -> JsValue {
    js(&serde_json::json!({ "key": key, "type": kind }))
}

#[wasm_bindgen_test]
fn test_parse_note() {
    let info: NoteInfo = serde_wasm_bindgen::from_value(parse_note_info("F#4").unwrap()).unwrap();
    assert_eq!(info.name, "F#4");
    assert_eq!(info.octave, Some(4));
    assert_eq!(info.index, 4);

    let err = parse_note_info("H").unwrap_err();
    assert!(err.as_string().unwrap().contains("invalid note"));
}

#[wasm_bindgen_test]
fn test_note_interval_and_transpose() {
    let info: IntervalInfo = serde_wasm_bindgen::from_value(note_interval("Cb", "F#").unwrap()).unwrap();
    assert_eq!(info.abbreviation, "AA4");
    assert_eq!(info.semitones, 7);

    assert_eq!(transpose_note("Eb", JsValue::from_str("high"), "P5").unwrap(), "Bb");
    assert_eq!(interval_semitones("m6").unwrap(), 8);
    assert!(interval_semitones("M5").is_err());
}

#[wasm_bindgen_test]
fn test_mode_functions() {
    let notes: Vec<String> =
        serde_wasm_bindgen::from_value(mode_notes(mode_ref("Eb", 0), JsValue::UNDEFINED).unwrap()).unwrap();
    assert_eq!(notes.join(" "), "Eb F G Ab Bb C D");

    let name = mode_name(mode_ref("Eb", 0), js(&serde_json::json!({ "shortName": true }))).unwrap();
    assert_eq!(name, "Eb Major");

    let relative: ModeInfo = serde_wasm_bindgen::from_value(mode_relative(mode_ref("C", 0)).unwrap()).unwrap();
    assert_eq!(relative.name, "A Natural Minor");

    let transposed: ModeInfo = serde_wasm_bindgen::from_value(
        mode_transpose(mode_ref("A", 3), JsValue::from_str("high"), "m3").unwrap(),
    )
    .unwrap();
    assert_eq!(transposed.notes.join(" "), "C D Eb F G Ab Bb");

    assert!(mode_parallel(mode_ref("D", 7)).is_err());
}

#[wasm_bindgen_test]
fn test_mode_chords() {
    let chords: Vec<ChordInfo> =
        serde_wasm_bindgen::from_value(mode_chords(mode_ref("C", 0), 0).unwrap()).unwrap();
    let names: Vec<String> = chords.iter().filter_map(|c| c.abbreviation.clone()).collect();
    assert_eq!(names, vec!["C", "Dm", "Em", "F", "G", "Am", "Bdim"]);

    assert!(mode_chord(mode_ref("C", 0), 0, 0).is_err());
    assert!(mode_chords(mode_ref("C", 0), 5).is_err());
}

#[wasm_bindgen_test]
fn test_mode_keys_and_catalog() {
    let keys: Vec<String> = serde_wasm_bindgen::from_value(mode_keys(0).unwrap()).unwrap();
    assert_eq!(keys.len(), 13);
    assert!(mode_keys(19).is_err());

    let catalog: serde_json::Value = serde_wasm_bindgen::from_value(mode_catalog().unwrap()).unwrap();
    assert_eq!(catalog[0]["group"], "Major and Minor");
}

#[wasm_bindgen_test]
fn test_chord_functions() {
    let g7 = js(&serde_json::json!({ "notes": ["G4", "B4", "D5", "F5"] }));
    let inverted: ChordInfo = serde_wasm_bindgen::from_value(chord_inverse(g7, 1).unwrap()).unwrap();
    assert_eq!(inverted.notes.join(" "), "B4 D5 F5 G5");

    let e_g_c = js(&serde_json::json!({ "notes": ["E", "G", "C"] }));
    assert_eq!(chord_abbreviation(e_g_c, JsValue::UNDEFINED).unwrap(), "C/E");

    let a = js(&serde_json::json!({ "notes": ["C", "E", "G"] }));
    let b = js(&serde_json::json!({ "notes": ["E", "G", "C"] }));
    assert!(chord_is(a, b, JsValue::NULL).unwrap());

    let bad = js(&serde_json::json!({ "notes": ["C", "D", "E"] }));
    assert!(chord_root_position(bad).is_err());
}

#[wasm_bindgen_test]
fn test_chord_resolve() {
    let g = js(&serde_json::json!({
        "notes": ["G", "B", "D"],
        "mode": { "key": "C", "type": 0 },
        "step": 5
    }));
    let resolutions: Vec<ChordInfo> =
        serde_wasm_bindgen::from_value(chord_resolve(g, JsValue::UNDEFINED).unwrap()).unwrap();
    assert_eq!(resolutions.len(), 9);

    let free = js(&serde_json::json!({ "notes": ["G", "B", "D"] }));
    assert!(chord_resolve(free, JsValue::UNDEFINED).is_err());
}

#[wasm_bindgen_test]
fn test_collections() {
    let grouped: Vec<String> = serde_wasm_bindgen::from_value(
        notes_with_group(js(&vec!["A", "B", "C"]), 4, JsValue::UNDEFINED).unwrap(),
    )
    .unwrap();
    assert_eq!(grouped.join(" "), "A4 B4 C5");

    let run: Vec<Vec<String>> =
        serde_wasm_bindgen::from_value(chromatic_range("G#", "C", "both").unwrap()).unwrap();
    assert_eq!(run[0], vec!["G#", "Ab"]);
    assert!(chromatic_range("C4", "G", "sharp").is_err());

    let item = js(&serde_json::json!({ "chord": { "notes": ["C", "E", "G"] }, "inversion": 1 }));
    let voicing: Vec<String> = serde_wasm_bindgen::from_value(progression_voicing(item, 3).unwrap()).unwrap();
    assert_eq!(voicing.join(" "), "E4 G4 C5");
}
