use crate::scanner::{scan, Span};

/// Transpose every `[ch]...[/ch]` chord in a tab sheet.
///
/// Text outside chord markers is copied unchanged, as are chords without a
/// recognizable root. Only `semitones` modulo 12 matters; any `i64` is
/// accepted.
///
/// # Example
/// ```
/// use tabshift::transpose;
///
/// let tab = "[ch]G[/ch] verse one [ch]D/F#[/ch]";
/// assert_eq!(transpose(tab, 2, false), "[ch]A[/ch] verse one [ch]E/G#[/ch]");
/// ```
pub fn transpose(source: &str, semitones: i64, use_flats: bool) -> String {
    if source.is_empty() {
        return String::new();
    }

    let spans = scan(source);
    let mut out = String::with_capacity(source.len());
    let mut chords = 0usize;
    for span in &spans {
        if let Span::Chord(_) = span {
            chords += 1;
        }
        span.write_transposed(&mut out, semitones, use_flats);
    }

    log::debug!(
        "transposed {} chord(s) by {} semitone(s){}",
        chords,
        semitones,
        if use_flats { " using flats" } else { "" }
    );

    out
}
