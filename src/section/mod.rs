//! Song sections — classification of chord sequences into intro, verse,
//! chorus, bridge and outro, plus the arrangement string.

pub mod classifier;
pub mod structure;

pub use classifier::classify;
pub use structure::{synthesize, Arrangement};

use crate::sequence::ChordSequence;

/// Separator between sequences in intro/outro.
pub const BAR_SEPARATOR: &str = " | ";

/// Which sequences represent each section.
///
/// Verse and chorus hold the first sequence of a repeating group. Intro and
/// outro hold every sequence at the edges of the song, in order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SectionAssignment<'a> {
    pub intro: Vec<&'a ChordSequence>,
    pub verse: Option<&'a ChordSequence>,
    pub chorus: Option<&'a ChordSequence>,
    pub bridge: Option<&'a ChordSequence>,
    pub outro: Vec<&'a ChordSequence>,
}

impl SectionAssignment<'_> {
    pub fn intro_text(&self) -> String {
        join_sequences(&self.intro)
    }

    pub fn verse_text(&self) -> String {
        self.verse.map(ChordSequence::display).unwrap_or_default()
    }

    pub fn chorus_text(&self) -> String {
        self.chorus.map(ChordSequence::display).unwrap_or_default()
    }

    pub fn bridge_text(&self) -> String {
        self.bridge.map(ChordSequence::display).unwrap_or_default()
    }

    pub fn outro_text(&self) -> String {
        join_sequences(&self.outro)
    }
}

fn join_sequences(sequences: &[&ChordSequence]) -> String {
    sequences
        .iter()
        .map(|s| s.display())
        .collect::<Vec<_>>()
        .join(BAR_SEPARATOR)
}
