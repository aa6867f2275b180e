//! Chord symbol decomposition and transposition
//!
//! A chord symbol is split on `/` into parts (`D/F#` has a root part and a
//! bass part). Each part is decomposed into a root and an opaque suffix:
//!
//! ```text
//! F#maj7  ->  root "F#", suffix "maj7"
//! Bbsus4  ->  root "Bb", suffix "sus4"
//! N.C.    ->  no root, passed through
//! ```
//!
//! The root is a letter `A`-`G` followed by an optional `#` or `b`. Only the
//! root changes under transposition; the suffix is copied verbatim.

use crate::pitch::{Accidental, PitchClass, Spelling};

/// A chord symbol part with a recognized root
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChordToken<'a> {
    pub root: &'a str,
    pub suffix: &'a str,
    pub spelling_hint: Accidental,
}

impl<'a> ChordToken<'a> {
    /// Decompose a single (slash-free) chord part.
    ///
    /// Returns `None` when the part does not start with a root letter.
    pub fn parse(part: &'a str) -> Option<Self> {
        let mut chars = part.chars();
        match chars.next() {
            Some('A'..='G') => {}
            _ => return None,
        }

        // Root letters and accidentals are all single-byte
        let (root_len, spelling_hint) = match chars.next().and_then(Accidental::from_char) {
            Some(accidental) => (2, accidental),
            None => (1, Accidental::Natural),
        };

        Some(ChordToken {
            root: &part[..root_len],
            suffix: &part[root_len..],
            spelling_hint,
        })
    }

    /// Pitch class of the root, if its spelling is in the name tables
    pub fn pitch_class(&self) -> Option<PitchClass> {
        PitchClass::from_name(self.root)
    }

    /// Render this part shifted by `semitones`.
    ///
    /// A root missing from the name tables (`Cb`, `E#`) is kept as written.
    pub fn transpose(&self, semitones: i64, use_flats: bool) -> String {
        let root = match self.pitch_class() {
            Some(pc) => pc
                .transpose(semitones)
                .name(Spelling::choose(use_flats, self.spelling_hint)),
            None => self.root,
        };

        let mut out = String::with_capacity(root.len() + self.suffix.len());
        out.push_str(root);
        out.push_str(self.suffix);
        out
    }
}

/// Transpose a bare chord symbol (no markers).
///
/// Every `/`-separated part is transposed independently, so slash chords
/// keep their bass note in step with the root. Parts without a root are
/// passed through.
///
/// # Example
/// ```
/// use tabshift::transpose_chord;
///
/// assert_eq!(transpose_chord("D/F#", 2, false), "E/G#");
/// assert_eq!(transpose_chord("C", 1, true), "Db");
/// assert_eq!(transpose_chord("N.C.", 5, false), "N.C.");
/// ```
pub fn transpose_chord(chord: &str, semitones: i64, use_flats: bool) -> String {
    chord
        .split('/')
        .map(|part| transpose_part(part, semitones, use_flats))
        .collect::<Vec<_>>()
        .join("/")
}

fn transpose_part(part: &str, semitones: i64, use_flats: bool) -> String {
    match ChordToken::parse(part) {
        Some(token) => token.transpose(semitones, use_flats),
        None => {
            if !part.is_empty() {
                log::trace!("passing through unrecognized chord part {:?}", part);
            }
            part.to_string()
        }
    }
}
