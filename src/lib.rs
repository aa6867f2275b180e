//! # tabshift
//!
//! Chord transposition for guitar chord/tab sheets. Chords are written inline
//! between `[ch]` and `[/ch]` markers:
//!
//! ```text
//! [ch]G[/ch]          [ch]D/F#[/ch]
//! Amazing grace, how sweet the sound
//! ```
//!
//! [`transpose`] shifts every marked chord by a number of semitones and
//! leaves everything else byte-for-byte intact. [`render`] builds the
//! line/segment model a viewer displays, and [`TransposeSettings`] is the
//! offset and flat preference a viewer keeps per song.

pub mod chord;
pub mod error;
pub mod pitch;
pub mod render;
pub mod scanner;
pub mod settings;
pub mod transpose;

pub use chord::{transpose_chord, ChordToken};
pub use error::*;
pub use pitch::{Accidental, PitchClass, Spelling};
pub use render::{render_lines, to_plain_text, Line, Segment};
pub use settings::{parse_offset, TransposeSettings};
pub use transpose::transpose;

/// Transpose a tab sheet with explicit settings.
pub fn transpose_with(source: &str, settings: &TransposeSettings) -> String {
    settings.apply(source)
}
