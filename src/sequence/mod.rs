//! Chord sequences — lines of text that read as runs of chords.
//!
//! Tokens are partitioned by source line; a line holding at least two chords
//! becomes a [`ChordSequence`], anything sparser is treated as prose.

pub mod intensity;
pub mod similarity;

pub use similarity::are_similar;

use tracing::debug;

use crate::chord::ChordToken;

/// Minimum number of chords for a line to count as music.
pub const MIN_CHORDS_PER_LINE: usize = 2;

/// One line of text holding a run of chords.
#[derive(Debug, Clone, PartialEq)]
pub struct ChordSequence {
    line_index: usize,
    chords: Vec<String>,
    raw_text: String,
    intensity: f64,
}

impl ChordSequence {
    /// Build a sequence; intensity is derived from the chords.
    pub fn new(line_index: usize, chords: Vec<String>, raw_text: impl Into<String>) -> Self {
        let intensity = intensity::score(&chords);
        Self {
            line_index,
            chords,
            raw_text: raw_text.into(),
            intensity,
        }
    }

    /// Zero-based index of the source line.
    pub fn line_index(&self) -> usize {
        self.line_index
    }

    /// Chord symbols in source order, duplicates kept.
    pub fn chords(&self) -> &[String] {
        &self.chords
    }

    /// The source line, trimmed.
    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    /// Harmonic intensity, computed once at construction.
    pub fn intensity(&self) -> f64 {
        self.intensity
    }

    /// Chords joined for display: `Am - F - C - G`.
    pub fn display(&self) -> String {
        self.chords.join(" - ")
    }

    pub fn is_similar_to(&self, other: &ChordSequence) -> bool {
        are_similar(&self.chords, &other.chords)
    }
}

/// Group tokens by the line containing them, keeping lines with two or more
/// chords. Output is in ascending line order.
pub fn group_by_line(tokens: &[ChordToken], text: &str) -> Vec<ChordSequence> {
    let mut sequences = Vec::new();
    let mut remaining = tokens;
    let mut line_start = 0;

    for (line_index, line) in text.split('\n').enumerate() {
        let line_end = line_start + line.len();
        let in_line = remaining
            .iter()
            .take_while(|t| t.offset < line_end)
            .filter(|t| t.offset >= line_start)
            .count();
        let (here, rest) = remaining.split_at(in_line);
        remaining = rest;

        if here.len() >= MIN_CHORDS_PER_LINE {
            let chords = here.iter().map(|t| t.symbol.clone()).collect();
            sequences.push(ChordSequence::new(line_index, chords, line.trim()));
        }

        line_start = line_end + 1;
    }

    debug!(sequences = sequences.len(), "grouped chord lines");
    sequences
}
