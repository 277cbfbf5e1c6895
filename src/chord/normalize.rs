//! Chord normalization for loose comparison.
//!
//! Strips the major marker, collapses the minor marker to `m`, and drops the
//! extension number. Each rewrite applies to the first occurrence only.

use once_cell::sync::Lazy;
use regex::Regex;

static MAJOR: Lazy<Regex> = Lazy::new(|| Regex::new("maj|M").unwrap());
static MINOR: Lazy<Regex> = Lazy::new(|| Regex::new("min|m").unwrap());
static EXTENSION: Lazy<Regex> = Lazy::new(|| Regex::new("7|9|11|13").unwrap());

/// Reduce a chord symbol to its comparison form.
pub fn normalize_chord(chord: &str) -> String {
    let without_major = MAJOR.replace(chord, "");
    let minor = MINOR.replace(&without_major, "m");
    EXTENSION.replace(&minor, "").into_owned()
}
