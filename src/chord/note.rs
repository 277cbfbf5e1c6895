//! Root note grammar — `<letter><optional accidental>`, shared by chord
//! extraction and key detection.

/// Accidentals accepted after a root letter: ASCII and Unicode sharp/flat.
pub const ACCIDENTALS: [char; 4] = ['#', 'b', '♯', '♭'];

/// Whether `ch` is a root letter (A–G, uppercase only).
pub fn is_root_letter(ch: char) -> bool {
    matches!(ch, 'A'..='G')
}

/// Whether `ch` is an accidental.
pub fn is_accidental(ch: char) -> bool {
    ACCIDENTALS.contains(&ch)
}

/// Whether `ch` counts as part of a word for boundary checks.
pub fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

/// Parse a root note at the start of `chars`.
///
/// Returns the number of characters consumed by the root letter and, when
/// `with_accidental` is set and one follows, the accidental.
pub fn root_len(chars: &[char], with_accidental: bool) -> Option<usize> {
    let first = *chars.first()?;
    if !is_root_letter(first) {
        return None;
    }
    if with_accidental && chars.get(1).copied().is_some_and(is_accidental) {
        Some(2)
    } else {
        Some(1)
    }
}
