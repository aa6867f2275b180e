//! # Pitch Classes
//!
//! The twelve equal-tempered pitch classes and their two spellings.
//!
//! ```text
//!  index   0  1   2  3   4  5  6   7  8   9  10  11
//!  sharp   C  C#  D  D#  E  F  F#  G  G#  A  A#  B
//!  flat    C  Db  D  Eb  E  F  Gb  G  Ab  A  Bb  B
//! ```
//!
//! Only these 17 distinct names are recognized. Enharmonic spellings outside
//! the tables (`Cb`, `E#`, `Fb`, `B#`) have no pitch class.

pub const SHARP_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

pub const FLAT_NAMES: [&str; 12] = [
    "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B",
];

/// Accidental written on a root, kept as a hint for respelling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Accidental {
    #[default]
    Natural,
    Sharp,
    Flat,
}

impl Accidental {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '#' => Some(Accidental::Sharp),
            'b' => Some(Accidental::Flat),
            _ => None,
        }
    }
}

/// Which name table to render a pitch class from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Spelling {
    #[default]
    Sharps,
    Flats,
}

impl Spelling {
    /// Explicit flat preference always wins; otherwise a flat-spelled
    /// original stays flat.
    pub fn choose(use_flats: bool, hint: Accidental) -> Self {
        if use_flats || hint == Accidental::Flat {
            Spelling::Flats
        } else {
            Spelling::Sharps
        }
    }

    fn names(self) -> &'static [&'static str; 12] {
        match self {
            Spelling::Sharps => &SHARP_NAMES,
            Spelling::Flats => &FLAT_NAMES,
        }
    }
}

/// Semitone offset from C, always in 0..=11
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PitchClass(u8);

impl PitchClass {
    /// Build from any integer, wrapping modulo 12.
    pub fn new(semitone: i64) -> Self {
        PitchClass(semitone.rem_euclid(12) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Look a note name up in the sharp table, then the flat table.
    pub fn from_name(name: &str) -> Option<Self> {
        SHARP_NAMES
            .iter()
            .position(|n| *n == name)
            .or_else(|| FLAT_NAMES.iter().position(|n| *n == name))
            .map(|index| PitchClass(index as u8))
    }

    /// Shift by a signed semitone count of any magnitude.
    pub fn transpose(self, semitones: i64) -> Self {
        // Reduce first so the addition cannot overflow near the i64 limits.
        PitchClass::new(i64::from(self.0) + semitones.rem_euclid(12))
    }

    pub fn name(self, spelling: Spelling) -> &'static str {
        spelling.names()[self.0 as usize]
    }
}
