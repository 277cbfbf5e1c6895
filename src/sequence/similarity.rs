//! Similarity between chord runs — positional comparison with loose matching.
//!
//! The relation is symmetric but not transitive: `a ~ b` and `b ~ c` say
//! nothing about `a ~ c`.

use crate::chord::normalize_chord;

/// Largest length difference still considered comparable.
pub const MAX_LENGTH_DIFF: usize = 2;

/// Minimum fraction of matching positions.
pub const MIN_MATCH_RATIO: f64 = 0.6;

/// Whether two chord lists read as the same material.
///
/// Positions up to the shorter length are compared; a position matches when
/// the symbols are equal or normalize to the same form.
pub fn are_similar(a: &[String], b: &[String]) -> bool {
    if a.len().abs_diff(b.len()) > MAX_LENGTH_DIFF {
        return false;
    }

    let compared = a.len().min(b.len());
    if compared == 0 {
        return false;
    }

    let matches = a
        .iter()
        .zip(b)
        .filter(|(x, y)| x == y || normalize_chord(x) == normalize_chord(y))
        .count();

    matches as f64 / compared as f64 >= MIN_MATCH_RATIO
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chords(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn identical_runs() {
        let a = chords(&["Am", "F", "C", "G"]);
        assert!(are_similar(&a, &a));
    }

    #[test]
    fn normalized_forms_match() {
        let a = chords(&["Cmaj7", "Am7", "Dm9", "G7"]);
        let b = chords(&["C", "Am", "Dm", "G"]);
        assert!(are_similar(&a, &b));
    }

    #[test]
    fn sixty_percent_threshold() {
        let a = chords(&["C", "G", "Am", "F", "E"]);
        let b = chords(&["C", "G", "Am", "D", "B"]);
        assert!(are_similar(&a, &b));
        let c = chords(&["C", "G", "Bb", "D", "B"]);
        assert!(!are_similar(&a, &c));
    }

    #[test]
    fn length_gap_rejects() {
        let a = chords(&["C", "G"]);
        let b = chords(&["C", "G", "C", "G", "C"]);
        assert!(!are_similar(&a, &b));
    }

    #[test]
    fn compares_up_to_shorter_length() {
        let a = chords(&["C", "G"]);
        let b = chords(&["C", "G", "Am", "F"]);
        assert!(are_similar(&a, &b));
    }

    #[test]
    fn empty_lists_are_not_similar() {
        assert!(!are_similar(&[], &[]));
    }

    #[test]
    fn symmetric() {
        let runs = [
            chords(&["C", "G", "Am", "F"]),
            chords(&["Cmaj7", "G", "Am7", "F"]),
            chords(&["Dm", "Bb", "F", "C"]),
            chords(&["C", "G"]),
            chords(&["Em7", "G", "D", "C", "Am", "B7"]),
        ];
        for a in &runs {
            for b in &runs {
                assert_eq!(are_similar(a, b), are_similar(b, a));
            }
        }
    }
}
