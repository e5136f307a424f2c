//! Error types for the theory engine
//!
//! Every failure is a terminal rejection of the requested construction or
//! operation. Variants are grouped the same way callers tend to handle them:
//! malformed text, structural problems with a note set, and domain rules.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TheoryError {
    // ------------------------------------------------------------------
    // Parse errors
    // ------------------------------------------------------------------
    #[error("invalid note: \"{0}\", expected a letter A-G")]
    InvalidLetter(String),

    #[error("invalid accidental: \"{0}\"")]
    InvalidAccidental(String),

    #[error("invalid octave: \"{0}\", must be a single digit 0-9")]
    InvalidOctave(String),

    #[error("unknown quality \"{given}\", supported values: {supported}")]
    UnknownQuality { given: String, supported: String },

    #[error("invalid degree: {0}, must be between 1 and 8")]
    InvalidDegree(i64),

    #[error("invalid number: \"{0}\", must provide an integer")]
    InvalidNumber(String),

    // ------------------------------------------------------------------
    // Interval rules
    // ------------------------------------------------------------------
    /// One of the structural quality/degree rules was violated
    #[error("invalid interval {abbreviation}: {reason}")]
    InvalidInterval {
        abbreviation: String,
        reason: &'static str,
    },

    #[error("cannot determine interval from degree = {degree} and semitones = {semitones}")]
    UnresolvableInterval { degree: u8, semitones: i32 },

    #[error("unsupported interval: {0}")]
    UnsupportedInterval(String),

    /// `add`/`minus` would need more than a double accidental
    #[error("cannot spell {note} moved by {interval}: needs an accidental offset of {offset}")]
    UnrepresentableNote {
        note: String,
        interval: String,
        offset: i32,
    },

    // ------------------------------------------------------------------
    // Chord structure
    // ------------------------------------------------------------------
    #[error("chord must contain at least three notes, got {0}")]
    TooFewNotes(usize),

    #[error("cannot form a chord with these notes: {0}")]
    NotAChord(String),

    #[error("unable to determine the appropriate chord representation for: {0}")]
    UnrepresentableChord(String),

    #[error("this chord is not associated with a mode")]
    NoAssociatedMode,

    #[error("unknown resolve algorithm: \"{0}\"")]
    UnknownAlgorithm(String),

    // ------------------------------------------------------------------
    // Modes
    // ------------------------------------------------------------------
    #[error("unknown mode: {0}")]
    UnknownModeKind(String),

    #[error("unknown chord type: {0}")]
    UnknownChordType(String),

    #[error("step must be between 1 and {count}, but got: {step}")]
    InvalidStep { step: usize, count: usize },

    #[error("mode must contain at least one note")]
    EmptyMode,

    #[error("{0}() only works on major or minor mode")]
    UnsupportedOperation(&'static str),

    // ------------------------------------------------------------------
    // Collections
    // ------------------------------------------------------------------
    #[error("note.group must be both set or not set")]
    MixedOctave,

    #[error("invalid range: {0}")]
    InvalidRange(String),
}

pub type Result<T> = std::result::Result<T, TheoryError>;
