// Accidental enum - the modifiers a note name can carry

use serde::{Deserialize, Serialize};

/// Accidental applied to a letter
///
/// `NaturalExplicit` sounds exactly like `Natural`; it only records that the
/// natural sign should be printed (e.g. the raised 7th of a harmonic minor
/// scale on a natural note).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Accidental {
    #[default]
    Natural,
    NaturalExplicit,
    Sharp,
    Flat,
    DoubleSharp,
    DoubleFlat,
}

impl Accidental {
    /// Parse ASCII (`#`, `##`, `b`, `bb`) or Unicode (♮ ♯ 𝄪 ♭ 𝄫) symbols
    pub fn parse(symbol: &str) -> Option<Accidental> {
        match symbol {
            "" => Some(Accidental::Natural),
            "#" | "♯" => Some(Accidental::Sharp),
            "##" | "𝄪" => Some(Accidental::DoubleSharp),
            "b" | "♭" => Some(Accidental::Flat),
            "bb" | "𝄫" => Some(Accidental::DoubleFlat),
            "♮" => Some(Accidental::NaturalExplicit),
            _ => None,
        }
    }

    /// Accidental producing a given semitone offset, if one exists
    pub fn from_offset(offset: i32) -> Option<Accidental> {
        match offset {
            -2 => Some(Accidental::DoubleFlat),
            -1 => Some(Accidental::Flat),
            0 => Some(Accidental::Natural),
            1 => Some(Accidental::Sharp),
            2 => Some(Accidental::DoubleSharp),
            _ => None,
        }
    }

    /// Semitone offset from the natural letter
    pub fn offset(&self) -> i32 {
        match self {
            Accidental::Natural | Accidental::NaturalExplicit => 0,
            Accidental::Sharp => 1,
            Accidental::Flat => -1,
            Accidental::DoubleSharp => 2,
            Accidental::DoubleFlat => -2,
        }
    }

    /// ASCII spelling used in note names ("C#", "Bbb")
    pub fn symbol(&self) -> &'static str {
        match self {
            Accidental::Natural | Accidental::NaturalExplicit => "",
            Accidental::Sharp => "#",
            Accidental::Flat => "b",
            Accidental::DoubleSharp => "##",
            Accidental::DoubleFlat => "bb",
        }
    }

    /// Typographic spelling ("C♯", "B𝄫")
    pub fn unicode_symbol(&self) -> &'static str {
        match self {
            Accidental::Natural => "",
            Accidental::NaturalExplicit => "♮",
            Accidental::Sharp => "♯",
            Accidental::Flat => "♭",
            Accidental::DoubleSharp => "𝄪",
            Accidental::DoubleFlat => "𝄫",
        }
    }

    pub fn is_natural(&self) -> bool {
        matches!(self, Accidental::Natural | Accidental::NaturalExplicit)
    }

    pub fn is_double(&self) -> bool {
        matches!(self, Accidental::DoubleSharp | Accidental::DoubleFlat)
    }
}
