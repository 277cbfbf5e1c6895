//! Section classifier — assigns sequences to song sections by position,
//! intensity, and repetition.
//!
//! Each rule runs once, in order, over the same immutable list. Verse and
//! chorus are independent scans and may pick the same sequence.

use tracing::debug;

use super::SectionAssignment;
use crate::sequence::ChordSequence;

/// Intensity separating verse material (below) from chorus material.
pub const CHORUS_INTENSITY: f64 = 1.5;

const INTRO_SHARE: f64 = 0.15;
const INTRO_MAX: usize = 3;
const OUTRO_SHARE: f64 = 0.1;
const OUTRO_MAX: usize = 2;
const BRIDGE_WINDOW: (f64, f64) = (0.4, 0.7);

/// Classify a full, ordered list of sequences.
pub fn classify(sequences: &[ChordSequence]) -> SectionAssignment<'_> {
    let n = sequences.len();
    if n == 0 {
        return SectionAssignment::default();
    }

    let intro = &sequences[..edge_count(n, INTRO_SHARE, INTRO_MAX)];
    let outro = &sequences[n - edge_count(n, OUTRO_SHARE, OUTRO_MAX)..];
    let verse = find_repeating(sequences, |intensity| intensity < CHORUS_INTENSITY);
    let chorus = find_repeating(sequences, |intensity| intensity >= CHORUS_INTENSITY);
    let bridge = find_bridge(sequences);

    debug!(
        sequences = n,
        intro = intro.len(),
        verse = ?verse.map(ChordSequence::line_index),
        chorus = ?chorus.map(ChordSequence::line_index),
        bridge = ?bridge.map(ChordSequence::line_index),
        outro = outro.len(),
        "classified sections"
    );

    SectionAssignment {
        intro: intro.iter().collect(),
        verse,
        chorus,
        bridge,
        outro: outro.iter().collect(),
    }
}

/// `min(max, ceil(share * n))`.
fn edge_count(n: usize, share: f64, max: usize) -> usize {
    let count = (share * n as f64).ceil() as usize;
    count.min(max)
}

/// First sequence (by position) that repeats later in the list and whose
/// intensity satisfies `accept`.
pub fn find_repeating<F>(sequences: &[ChordSequence], accept: F) -> Option<&ChordSequence>
where
    F: Fn(f64) -> bool,
{
    sequences.iter().enumerate().find_map(|(i, first)| {
        let repeats = sequences[i + 1..].iter().any(|later| first.is_similar_to(later));
        (repeats && accept(first.intensity())).then_some(first)
    })
}

/// The most harmonically distinct sequence in the middle of the song.
///
/// Only sequences in `[floor(0.4n), floor(0.7n))` are candidates; ties keep
/// the earliest. A sequence similar to everything else is never a bridge.
pub fn find_bridge(sequences: &[ChordSequence]) -> Option<&ChordSequence> {
    let n = sequences.len();
    let start = (BRIDGE_WINDOW.0 * n as f64).floor() as usize;
    let end = (BRIDGE_WINDOW.1 * n as f64).floor() as usize;
    if start >= end {
        return None;
    }

    let mut best: Option<(&ChordSequence, f64)> = None;
    for (idx, candidate) in sequences.iter().enumerate().take(end).skip(start) {
        let score = uniqueness(sequences, idx);
        if score > best.map_or(0.0, |(_, s)| s) {
            best = Some((candidate, score));
        }
    }
    best.map(|(seq, _)| seq)
}

/// Fraction of the other sequences that are not similar to `sequences[idx]`.
pub fn uniqueness(sequences: &[ChordSequence], idx: usize) -> f64 {
    let others = sequences.len().saturating_sub(1);
    if others == 0 {
        return 0.0;
    }
    let target = &sequences[idx];
    let distinct = sequences
        .iter()
        .enumerate()
        .filter(|&(j, seq)| j != idx && !target.is_similar_to(seq))
        .count();
    distinct as f64 / others as f64
}
