//! Harmonic intensity — a rough complexity score for a run of chords.

/// Score a chord list: per-chord contributions summed, then averaged.
///
/// Contributions:
/// - extension `7`, `9` or `11`: +2
/// - `maj`/`M`: +1, otherwise `min`/`m`: +0.5
/// - `dim`/`aug`: +3
/// - slash bass: +1
///
/// An empty list scores 0.
pub fn score(chords: &[String]) -> f64 {
    if chords.is_empty() {
        return 0.0;
    }
    let total: f64 = chords.iter().map(|c| chord_weight(c)).sum();
    total / chords.len() as f64
}

fn chord_weight(chord: &str) -> f64 {
    let mut weight = 0.0;

    if chord.contains('7') || chord.contains('9') || chord.contains("11") {
        weight += 2.0;
    }
    if chord.contains("maj") || chord.contains('M') {
        weight += 1.0;
    } else if chord.contains("min") || chord.contains('m') {
        weight += 0.5;
    }
    if chord.contains("dim") || chord.contains("aug") {
        weight += 3.0;
    }
    if chord.contains('/') {
        weight += 1.0;
    }

    weight
}
