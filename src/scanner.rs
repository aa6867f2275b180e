use crate::chord::transpose_chord;

pub const CHORD_OPEN: &str = "[ch]";
pub const CHORD_CLOSE: &str = "[/ch]";

/// A run of tab text, either plain or the inside of a chord marker pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Span<'a> {
    Text(&'a str),
    /// Chord symbol without its `[ch]`/`[/ch]` markers
    Chord(&'a str),
}

impl Span<'_> {
    /// Append this span to `out` with markers restored and chords shifted.
    pub fn write_transposed(&self, out: &mut String, semitones: i64, use_flats: bool) {
        match self {
            Span::Text(text) => out.push_str(text),
            Span::Chord(chord) => {
                out.push_str(CHORD_OPEN);
                out.push_str(&transpose_chord(chord, semitones, use_flats));
                out.push_str(CHORD_CLOSE);
            }
        }
    }
}

fn is_line_break(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

enum Close {
    Found(usize),
    LineEnd(usize),
}

/// Linear scanner splitting tab text into text and chord spans.
///
/// A chord span opens at `[ch]` and closes at the first `[/ch]` on the same
/// line. An opening marker without a closing marker on its line is ordinary
/// text. Concatenating the spans (with markers put back around chords)
/// reproduces the input exactly.
pub struct Scanner<'a> {
    input: &'a str,
    position: usize,
    text_start: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            position: 0,
            text_start: 0,
        }
    }

    /// Walk forward from `from` to whichever comes first: a closing marker
    /// or the end of the line.
    fn find_close(&self, from: usize) -> Close {
        let rest = &self.input[from..];
        for (offset, c) in rest.char_indices() {
            if c == '[' && rest[offset..].starts_with(CHORD_CLOSE) {
                return Close::Found(from + offset);
            }
            if is_line_break(c) {
                return Close::LineEnd(from + offset);
            }
        }
        Close::LineEnd(self.input.len())
    }

    fn next_open(&self) -> Option<usize> {
        self.input[self.position..]
            .find(CHORD_OPEN)
            .map(|offset| self.position + offset)
    }

    pub fn scan(mut self) -> Vec<Span<'a>> {
        let mut spans = Vec::new();

        while let Some(open) = self.next_open() {
            let chord_start = open + CHORD_OPEN.len();
            match self.find_close(chord_start) {
                Close::Found(chord_end) => {
                    if open > self.text_start {
                        spans.push(Span::Text(&self.input[self.text_start..open]));
                    }
                    spans.push(Span::Chord(&self.input[chord_start..chord_end]));
                    self.position = chord_end + CHORD_CLOSE.len();
                    self.text_start = self.position;
                }
                // Nothing later on this line can close either, so the
                // unterminated markers stay in the surrounding text
                Close::LineEnd(line_end) => self.position = line_end,
            }
        }

        if self.text_start < self.input.len() {
            spans.push(Span::Text(&self.input[self.text_start..]));
        }

        spans
    }
}

/// Convenience wrapper around [`Scanner`]
pub fn scan(input: &str) -> Vec<Span<'_>> {
    Scanner::new(input).scan()
}
