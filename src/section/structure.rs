//! Arrangement synthesis — a song-form string chosen by song length.
//!
//! The arrangement depends only on how many chord sequences were found, not
//! on which sections were detected.

use std::fmt;

/// Song forms, from shortest to longest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arrangement {
    /// Fewer than 10 sequences.
    Short,
    /// 10 to 19 sequences.
    Extended,
    /// 20 or more sequences.
    Full,
}

impl Arrangement {
    pub fn from_sequence_count(count: usize) -> Self {
        match count {
            0..=9 => Arrangement::Short,
            10..=19 => Arrangement::Extended,
            _ => Arrangement::Full,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Arrangement::Short => "Intro → A → B → A → B → Outro",
            Arrangement::Extended => "Intro → A × 2 → B → A → B → Bridge → B × 2 → Outro",
            Arrangement::Full => "Intro → A × 2 → B → A → B → Bridge → Solo → B × 3 → Outro",
        }
    }
}

impl fmt::Display for Arrangement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The arrangement string for a song with `sequence_count` chord sequences.
pub fn synthesize(sequence_count: usize) -> String {
    Arrangement::from_sequence_count(sequence_count).to_string()
}
