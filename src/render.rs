//! # Tab Rendering
//!
//! Turns tab text into the line/segment model the viewer draws: each line is
//! a sequence of plain text and chord segments, chords shown bare so they can
//! be styled apart from the lyrics.
//!
//! `[tab]`/`[/tab]` block markers are removed first. Scraped sheets often
//! have them unbalanced, and monospace display already lines up the
//! tablature.

use serde::Serialize;

use crate::scanner::{scan, Span, CHORD_OPEN};

pub const TAB_OPEN: &str = "[tab]";
pub const TAB_CLOSE: &str = "[/tab]";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "lowercase")]
pub enum Segment {
    Text(String),
    Chord(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Line {
    pub segments: Vec<Segment>,
}

impl Line {
    fn from_text(text: &str) -> Self {
        let segments = scan(text)
            .into_iter()
            .map(|span| match span {
                Span::Text(text) => Segment::Text(text.to_string()),
                // A stray opening marker inside a chord is not displayed
                Span::Chord(chord) => Segment::Chord(chord.replace(CHORD_OPEN, "")),
            })
            .collect();
        Line { segments }
    }

    pub fn chords(&self) -> Vec<&str> {
        self.segments
            .iter()
            .filter_map(|segment| match segment {
                Segment::Chord(chord) => Some(chord.as_str()),
                Segment::Text(_) => None,
            })
            .collect()
    }

    /// The line as displayed, chords without markers
    pub fn to_plain_text(&self) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Text(text) | Segment::Chord(text) => out.push_str(text),
            }
        }
        out
    }
}

pub fn strip_tab_markers(text: &str) -> String {
    text.replace(TAB_OPEN, "").replace(TAB_CLOSE, "")
}

/// Split a tab sheet into display lines.
///
/// # Example
/// ```
/// use tabshift::render::{render_lines, Segment};
///
/// let lines = render_lines("[tab][ch]Am[/ch] hello[/tab]");
/// assert_eq!(lines.len(), 1);
/// assert_eq!(
///     lines[0].segments,
///     vec![Segment::Chord("Am".to_string()), Segment::Text(" hello".to_string())]
/// );
/// ```
pub fn render_lines(text: &str) -> Vec<Line> {
    if text.is_empty() {
        return Vec::new();
    }
    strip_tab_markers(text).split('\n').map(Line::from_text).collect()
}

pub fn to_plain_text(text: &str) -> String {
    render_lines(text)
        .iter()
        .map(Line::to_plain_text)
        .collect::<Vec<_>>()
        .join("\n")
}
