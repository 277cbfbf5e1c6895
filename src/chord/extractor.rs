//! Chord extractor — scans raw text for chord spellings.
//!
//! Grammar: `<root>[accidental][quality][digits][/<root>[accidental]]`,
//! word-bounded on both sides. When the longest spelling at a position is
//! glued to a following word character, shorter spellings are tried in
//! order, so `C-G` yields `C` and `G` rather than nothing.

use tracing::debug;

use super::note::{is_root_letter, is_word_char, root_len};
use super::token::ChordToken;

/// Quality/extension markers, in match-preference order.
pub const QUALITIES: [&str; 12] = [
    "maj", "min", "m", "M", "+", "-", "dim", "aug", "sus", "add", "°", "ø",
];

/// Extract every chord token from `text`, in source order.
pub fn extract_chords(text: &str) -> Vec<ChordToken> {
    let tokens = ChordExtractor::new(text).extract();
    debug!(tokens = tokens.len(), "extracted chord tokens");
    tokens
}

/// Single-pass scanner over the chars of one input text.
pub struct ChordExtractor<'a> {
    source: &'a str,
    chars: Vec<char>,
    offsets: Vec<usize>,
    pos: usize,
}

impl<'a> ChordExtractor<'a> {
    /// Prepare a scan of `source`, starting at its first char.
    pub fn new(source: &'a str) -> Self {
        let (offsets, chars) = source.char_indices().unzip();
        Self {
            source,
            chars,
            offsets,
            pos: 0,
        }
    }

    /// Consume the source and return the non-overlapping chord tokens.
    pub fn extract(&mut self) -> Vec<ChordToken> {
        let mut tokens = Vec::new();

        while !self.is_at_end() {
            if self.at_word_start() && is_root_letter(self.peek()) {
                if let Some(end) = self.match_chord(self.pos) {
                    tokens.push(self.token(self.pos, end));
                    self.pos = end;
                    continue;
                }
            }
            self.pos += 1;
        }

        tokens
    }

    fn peek(&self) -> char {
        self.chars[self.pos]
    }

    fn char_at(&self, idx: usize) -> Option<char> {
        self.chars.get(idx).copied()
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }

    fn at_word_start(&self) -> bool {
        self.pos == 0 || !is_word_char(self.chars[self.pos - 1])
    }

    fn bounded_after(&self, end: usize) -> bool {
        self.char_at(end).map_or(true, |c| !is_word_char(c))
    }

    fn byte_offset(&self, idx: usize) -> usize {
        self.offsets.get(idx).copied().unwrap_or(self.source.len())
    }

    fn token(&self, start: usize, end: usize) -> ChordToken {
        let from = self.byte_offset(start);
        let to = self.byte_offset(end);
        ChordToken::new(&self.source[from..to], from)
    }

    /// Find the end (char index, exclusive) of the preferred chord spelling
    /// starting at `start`, or `None` if no spelling is word-bounded.
    fn match_chord(&self, start: usize) -> Option<usize> {
        let root_lens: &[usize] = match root_len(&self.chars[start..], true)? {
            2 => &[2, 1],
            _ => &[1],
        };

        for &root in root_lens {
            let quality_start = start + root;
            for qual in self.quality_lens(quality_start) {
                let digits_start = quality_start + qual;
                let digits = self.digit_run(digits_start);
                for d in (0..=digits).rev() {
                    let bass_start = digits_start + d;
                    for end in self.bass_ends(bass_start) {
                        if self.bounded_after(end) {
                            return Some(end);
                        }
                    }
                }
            }
        }

        None
    }

    /// Lengths of every quality marker matching at `idx`, in preference
    /// order, followed by 0 (no quality).
    fn quality_lens(&self, idx: usize) -> Vec<usize> {
        let mut lens: Vec<usize> = QUALITIES
            .iter()
            .filter(|q| self.matches_at(idx, q))
            .map(|q| q.chars().count())
            .collect();
        lens.push(0);
        lens
    }

    fn matches_at(&self, idx: usize, word: &str) -> bool {
        word.chars()
            .enumerate()
            .all(|(i, c)| self.char_at(idx + i) == Some(c))
    }

    fn digit_run(&self, idx: usize) -> usize {
        self.chars
            .get(idx..)
            .map_or(0, |rest| rest.iter().take_while(|c| c.is_ascii_digit()).count())
    }

    /// Candidate ends for an optional `/<root>[accidental]` bass note at
    /// `idx`: with accidental, without, then no bass at all.
    fn bass_ends(&self, idx: usize) -> Vec<usize> {
        let mut ends = Vec::with_capacity(3);
        if self.char_at(idx) == Some('/') {
            match root_len(&self.chars[idx + 1..], true) {
                Some(2) => ends.extend([idx + 3, idx + 2]),
                Some(_) => ends.push(idx + 2),
                None => {}
            }
        }
        ends.push(idx);
        ends
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symbols(text: &str) -> Vec<String> {
        extract_chords(text).into_iter().map(|t| t.symbol).collect()
    }

    #[test]
    fn labeled_progression() {
        let tokens = extract_chords("Verse: Am - F - C - G");
        let syms: Vec<&str> = tokens.iter().map(|t| t.symbol.as_str()).collect();
        assert_eq!(syms, vec!["Am", "F", "C", "G"]);
        assert!(tokens.windows(2).all(|w| w[0].offset < w[1].offset));
    }

    #[test]
    fn offsets_point_into_source() {
        let text = "Verse: Am - F";
        for token in extract_chords(text) {
            assert_eq!(&text[token.offset..token.end()], token.symbol);
        }
        assert_eq!(extract_chords(text)[0].offset, 7);
    }

    #[test]
    fn extensions_and_qualities() {
        assert_eq!(
            symbols("Cmaj7 Dm9 E7 Fsus4 Gadd9 Bdim A+ C°7 Bø7"),
            vec!["Cmaj7", "Dm9", "E7", "Fsus4", "Gadd9", "Bdim", "A+", "C°7", "Bø7"]
        );
    }

    #[test]
    fn accidentals_ascii_and_unicode() {
        assert_eq!(symbols("F#m Bb E♭ C♯m7"), vec!["F#m", "Bb", "E♭", "C♯m7"]);
    }

    #[test]
    fn slash_bass() {
        assert_eq!(symbols("C/G D/F# Am7/G"), vec!["C/G", "D/F#", "Am7/G"]);
    }

    #[test]
    fn ignores_letters_inside_words() {
        assert!(symbols("Beautiful day, Garden of Eden").is_empty());
    }

    #[test]
    fn lowercase_root_is_not_a_chord() {
        assert!(symbols("am f c g").is_empty());
    }

    #[test]
    fn hyphen_glued_chords_backtrack() {
        assert_eq!(symbols("C-G-Am"), vec!["C", "G", "Am"]);
    }

    #[test]
    fn minus_quality_when_bounded() {
        assert_eq!(symbols("C- G"), vec!["C-", "G"]);
    }

    #[test]
    fn glued_suffix_rejects_token() {
        assert!(symbols("Cm7b5").is_empty());
    }

    #[test]
    fn no_merging_or_dedup() {
        assert_eq!(symbols("G G G"), vec!["G", "G", "G"]);
    }

    #[test]
    fn multibyte_offsets() {
        let text = "𝄆 Am F 𝄇";
        let tokens = extract_chords(text);
        assert_eq!(tokens.len(), 2);
        for token in &tokens {
            assert_eq!(&text[token.offset..token.end()], token.symbol);
        }
    }

    #[test]
    fn empty_text() {
        assert!(extract_chords("").is_empty());
    }
}
