//! Chord map — the engine's output record and the analysis pipeline.
//!
//! Text flows through extraction → grouping → classification → arrangement,
//! with metadata scraped independently and merged into one [`ChordMap`].

pub mod export;
pub mod render;

pub use export::{export_filename, read_export, write_export, ChordMapExport, Sections};
pub use render::render_text;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::chord::extract_chords;
use crate::metadata::{self, scan_labels, Labels};
use crate::section::{classify, synthesize};
use crate::sequence::group_by_line;

/// A titled set of song sections plus an arrangement string.
/// Empty strings mean "not found".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChordMap {
    pub title: String,
    pub key: String,
    pub tempo: String,
    pub intro: String,
    pub verse: String,
    pub chorus: String,
    pub bridge: String,
    pub outro: String,
    pub structure: String,
}

impl ChordMap {
    /// Replace fields with any explicitly labeled values. The arrangement is
    /// never overridden.
    pub fn with_labels(mut self, labels: Labels) -> Self {
        let pairs = [
            (&mut self.key, labels.key),
            (&mut self.tempo, labels.tempo),
            (&mut self.intro, labels.intro),
            (&mut self.verse, labels.verse),
            (&mut self.chorus, labels.chorus),
            (&mut self.bridge, labels.bridge),
            (&mut self.outro, labels.outro),
        ];
        for (field, label) in pairs {
            if let Some(value) = label {
                *field = value;
            }
        }
        self
    }
}

/// The analysis pipeline.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChordMapper {
    explicit_labels: bool,
}

impl ChordMapper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Let labeled lines (`Chorus: ...`, `Key: ...`) override inferred fields.
    pub fn with_explicit_labels(mut self, enabled: bool) -> Self {
        self.explicit_labels = enabled;
        self
    }

    /// Infer a chord map from raw text. Deterministic and infallible.
    pub fn analyze(&self, text: &str) -> ChordMap {
        let map = analyze(text);
        if !self.explicit_labels {
            return map;
        }
        let labels = scan_labels(text);
        if labels.is_empty() {
            debug!("no explicit labels found");
            return map;
        }
        debug!(?labels, "applying explicit labels");
        map.with_labels(labels)
    }
}

/// Infer a chord map from raw text using the heuristics alone.
pub fn analyze(text: &str) -> ChordMap {
    let tokens = extract_chords(text);
    let sequences = group_by_line(&tokens, text);
    let sections = classify(&sequences);
    let meta = metadata::extract(text);

    ChordMap {
        title: meta.title,
        key: meta.key,
        tempo: meta.tempo,
        intro: sections.intro_text(),
        verse: sections.verse_text(),
        chorus: sections.chorus_text(),
        bridge: sections.bridge_text(),
        outro: sections.outro_text(),
        structure: synthesize(sequences.len()),
    }
}
