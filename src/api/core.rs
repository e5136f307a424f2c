//! Theory engine WASM API
//!
//! Every function takes plain strings or serde values from JavaScript and
//! returns serde values. Errors come back as strings that name the failing
//! call.

use wasm_bindgen::prelude::*;

use crate::api::helpers::{deserialize, mode_from_js, options, parse_note, serialize, theory_error};
use crate::api::types::{ChordInfo, IntervalInfo, ModeInfo, NoteInfo};
use crate::models::{
    Chord, ChordIsOptions, ChordJson, ChordType, Direction, Interval, Mode, ModeKind,
    ModeNameOptions, NameOptions, NoteCollection, ProgressionItem, ResolveOptions,
    WithGroupOptions,
};
use crate::utils::range::{range, Spelling};
use crate::{wasm_info, wasm_log};

fn parse_interval(abbreviation: &str, error_context: &str) -> Result<Interval, JsValue> {
    Interval::parse(abbreviation).map_err(|e| theory_error(error_context, e))
}

fn chord_from_js(value: JsValue, error_context: &str) -> Result<Chord, JsValue> {
    let json: ChordJson = deserialize(value, error_context)?;
    Chord::from_json(&json).map_err(|e| theory_error(error_context, e))
}

fn chord_infos(chords: &[Chord]) -> Vec<ChordInfo> {
    chords.iter().map(ChordInfo::from).collect()
}

// ============================================================================
// Notes and intervals
// ============================================================================

/// Parse a note name ("F#4", "E♭")
#[wasm_bindgen(js_name = parseNote)]
pub fn parse_note_info(name: &str) -> Result<JsValue, JsValue> {
    let note = parse_note(name, "parseNote")?;
    serialize(&NoteInfo::from(&note), "parseNote")
}

/// Interval going up from `from` to `to`
#[wasm_bindgen(js_name = noteInterval)]
pub fn note_interval(from: &str, to: &str) -> Result<JsValue, JsValue> {
    let from = parse_note(from, "noteInterval")?;
    let to = parse_note(to, "noteInterval")?;

    let interval = from.to(&to).map_err(|e| theory_error("noteInterval", e))?;
    serialize(&IntervalInfo::from(&interval), "noteInterval")
}

/// Move a note up ("high") or down ("low") by an interval
#[wasm_bindgen(js_name = transposeNote)]
pub fn transpose_note(note: &str, direction: JsValue, interval: &str) -> Result<String, JsValue> {
    let note = parse_note(note, "transposeNote")?;
    let direction: Direction = deserialize(direction, "transposeNote direction")?;
    let interval = parse_interval(interval, "transposeNote")?;

    note.transpose(direction, &interval)
        .map(|moved| moved.to_string())
        .map_err(|e| theory_error("transposeNote", e))
}

#[wasm_bindgen(js_name = intervalSemitones)]
pub fn interval_semitones(abbreviation: &str) -> Result<u8, JsValue> {
    parse_interval(abbreviation, "intervalSemitones").map(|interval| interval.semitones())
}

// ============================================================================
// Modes
// ============================================================================

/// Scale notes of a `{ key, type }` mode
#[wasm_bindgen(js_name = modeNotes)]
pub fn mode_notes(mode: JsValue, name_options: JsValue) -> Result<JsValue, JsValue> {
    let mode = mode_from_js(mode, "modeNotes")?;
    let opts: NameOptions = options(name_options, "modeNotes options")?;

    serialize(&mode.notes().names(&opts), "modeNotes")
}

#[wasm_bindgen(js_name = modeName)]
pub fn mode_name(mode: JsValue, name_options: JsValue) -> Result<String, JsValue> {
    let mode = mode_from_js(mode, "modeName")?;
    let opts: ModeNameOptions = options(name_options, "modeName options")?;

    Ok(mode.name(&opts))
}

/// One chord per scale step; `chord_type` is 0 (triad) or 1 (seventh)
#[wasm_bindgen(js_name = modeChords)]
pub fn mode_chords(mode: JsValue, chord_type: u8) -> Result<JsValue, JsValue> {
    let mode = mode_from_js(mode, "modeChords")?;
    let chord_type = ChordType::from_id(chord_type).map_err(|e| theory_error("modeChords", e))?;

    let chords = mode
        .chords(chord_type)
        .map_err(|e| theory_error("modeChords", e))?;

    wasm_log!("modeChords: {} -> {} chords", mode.name(&ModeNameOptions::default()), chords.len());
    serialize(&chord_infos(&chords), "modeChords")
}

#[wasm_bindgen(js_name = modeChord)]
pub fn mode_chord(mode: JsValue, step: usize, chord_type: u8) -> Result<JsValue, JsValue> {
    let mode = mode_from_js(mode, "modeChord")?;
    let chord_type = ChordType::from_id(chord_type).map_err(|e| theory_error("modeChord", e))?;

    let chord = mode
        .chord(step, chord_type)
        .map_err(|e| theory_error("modeChord", e))?;
    serialize(&ChordInfo::from(&chord), "modeChord")
}

#[wasm_bindgen(js_name = modeRelative)]
pub fn mode_relative(mode: JsValue) -> Result<JsValue, JsValue> {
    let mode = mode_from_js(mode, "modeRelative")?;
    let relative = mode.relative().map_err(|e| theory_error("modeRelative", e))?;
    serialize(&ModeInfo::from(&relative), "modeRelative")
}

#[wasm_bindgen(js_name = modeParallel)]
pub fn mode_parallel(mode: JsValue) -> Result<JsValue, JsValue> {
    let mode = mode_from_js(mode, "modeParallel")?;
    let parallel = mode.parallel().map_err(|e| theory_error("modeParallel", e))?;
    serialize(&ModeInfo::from(&parallel), "modeParallel")
}

/// Transposed copy of a mode; the input is never modified
#[wasm_bindgen(js_name = modeTranspose)]
pub fn mode_transpose(mode: JsValue, direction: JsValue, interval: &str) -> Result<JsValue, JsValue> {
    let mode = mode_from_js(mode, "modeTranspose")?;
    let direction: Direction = deserialize(direction, "modeTranspose direction")?;
    let interval = parse_interval(interval, "modeTranspose")?;

    let transposed = mode
        .transposed(direction, &interval)
        .map_err(|e| theory_error("modeTranspose", e))?;
    serialize(&ModeInfo::from(&transposed), "modeTranspose")
}

/// Key names offered for a mode kind id
#[wasm_bindgen(js_name = modeKeys)]
pub fn mode_keys(kind: u8) -> Result<JsValue, JsValue> {
    let kind = ModeKind::from_id(kind).map_err(|e| theory_error("modeKeys", e))?;
    let keys = Mode::get_keys(kind).map_err(|e| theory_error("modeKeys", e))?;

    serialize(&keys.names(&NameOptions::default()), "modeKeys")
}

#[wasm_bindgen(js_name = modeCatalog)]
pub fn mode_catalog() -> Result<JsValue, JsValue> {
    serialize(&Mode::modes(), "modeCatalog")
}

// ============================================================================
// Chords
// ============================================================================

#[wasm_bindgen(js_name = chordAbbreviation)]
pub fn chord_abbreviation(chord: JsValue, name_options: JsValue) -> Result<String, JsValue> {
    let chord = chord_from_js(chord, "chordAbbreviation")?;
    let opts: NameOptions = options(name_options, "chordAbbreviation options")?;

    chord
        .to_abbreviation(&opts)
        .map_err(|e| theory_error("chordAbbreviation", e))
}

#[wasm_bindgen(js_name = chordInverse)]
pub fn chord_inverse(chord: JsValue, ordinal: i32) -> Result<JsValue, JsValue> {
    let chord = chord_from_js(chord, "chordInverse")?;
    let inverted = chord
        .inverse(ordinal)
        .map_err(|e| theory_error("chordInverse", e))?;
    serialize(&ChordInfo::from(&inverted), "chordInverse")
}

#[wasm_bindgen(js_name = chordRootPosition)]
pub fn chord_root_position(chord: JsValue) -> Result<JsValue, JsValue> {
    let chord = chord_from_js(chord, "chordRootPosition")?;
    let root = chord
        .root_position()
        .map_err(|e| theory_error("chordRootPosition", e))?;
    serialize(&ChordInfo::from(&root), "chordRootPosition")
}

/// Resolution candidates for a chord that carries its mode
#[wasm_bindgen(js_name = chordResolve)]
pub fn chord_resolve(chord: JsValue, resolve_options: JsValue) -> Result<JsValue, JsValue> {
    let chord = chord_from_js(chord, "chordResolve")?;
    let opts: ResolveOptions = options(resolve_options, "chordResolve options")?;

    let resolutions = chord
        .resolve_to(&opts)
        .map_err(|e| theory_error("chordResolve", e))?;

    wasm_info!("chordResolve: {} -> {} candidates", chord, resolutions.len());
    serialize(&chord_infos(&resolutions), "chordResolve")
}

#[wasm_bindgen(js_name = chordIs)]
pub fn chord_is(chord: JsValue, other: JsValue, is_options: JsValue) -> Result<bool, JsValue> {
    let chord = chord_from_js(chord, "chordIs")?;
    let other = chord_from_js(other, "chordIs")?;
    let opts: ChordIsOptions = options(is_options, "chordIs options")?;

    Ok(chord.is(&other, &opts))
}

// ============================================================================
// Collections
// ============================================================================

/// Assign octave groups to an ascending list of note names
#[wasm_bindgen(js_name = notesWithGroup)]
pub fn notes_with_group(notes: JsValue, base: i8, group_options: JsValue) -> Result<JsValue, JsValue> {
    let names: Vec<String> = deserialize(notes, "notesWithGroup notes")?;
    let collection = NoteCollection::parse(&names).map_err(|e| theory_error("notesWithGroup", e))?;
    let opts: WithGroupOptions = options(group_options, "notesWithGroup options")?;

    let grouped = collection.with_group(base, &opts);
    serialize(&grouped.names(&NameOptions::default()), "notesWithGroup")
}

/// Chromatic steps from `from` to `to`; each step lists its spellings
#[wasm_bindgen(js_name = chromaticRange)]
pub fn chromatic_range(from: &str, to: &str, spelling: &str) -> Result<JsValue, JsValue> {
    let from = parse_note(from, "chromaticRange")?;
    let to = parse_note(to, "chromaticRange")?;
    let spelling: Spelling = spelling
        .parse()
        .map_err(|e| theory_error("chromaticRange", e))?;

    let steps = range(&from, &to, spelling).map_err(|e| theory_error("chromaticRange", e))?;
    let names: Vec<Vec<String>> = steps
        .iter()
        .map(|step| step.names(&NameOptions::default()))
        .collect();

    serialize(&names, "chromaticRange")
}

/// Sounding notes of a progression item
#[wasm_bindgen(js_name = progressionVoicing)]
pub fn progression_voicing(item: JsValue, base: i8) -> Result<JsValue, JsValue> {
    let item: ProgressionItem = deserialize(item, "progressionVoicing")?;
    wasm_log!("progressionVoicing: {} (inversion {})", item.chord, item.inversion);

    let voicing = item
        .voicing(base)
        .map_err(|e| theory_error("progressionVoicing", e))?;
    serialize(&voicing.names(&NameOptions::default()), "progressionVoicing")
}
