//! Song metadata — title, key and tempo scraped from the raw lines.
//!
//! Runs independently of the chord pipeline. Single pass, and each field
//! keeps its first match.

pub mod labels;

pub use labels::{scan_labels, Labels};

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::chord::note::{is_word_char, root_len};

/// Only the first few non-blank lines may hold the title.
pub const TITLE_SCAN_LINES: usize = 5;

/// Quality markers read after a key's root, in match-preference order.
const KEY_QUALITIES: [&str; 4] = ["maj", "min", "m", "M"];

static TITLE: Lazy<Regex> = Lazy::new(|| Regex::new(r#"^[A-Za-z\s\-'".,!?]+$"#).unwrap());
static TEMPO: Lazy<Regex> = Lazy::new(|| Regex::new(r"[♩♪♫]?\s*=\s*([0-9]+)").unwrap());

/// Title, key and tempo; empty strings when not found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata {
    pub title: String,
    pub key: String,
    pub tempo: String,
}

/// Scan the non-blank lines of `text`.
pub fn extract(text: &str) -> Metadata {
    let lines: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
    extract_metadata(&lines)
}

/// Scan `lines` in order. Blank lines are skipped but still counted toward
/// the title window.
pub fn extract_metadata(lines: &[&str]) -> Metadata {
    let mut meta = Metadata::default();

    for (index, line) in lines.iter().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        if meta.title.is_empty() && index < TITLE_SCAN_LINES && is_title(trimmed) {
            meta.title = trimmed.to_string();
            continue;
        }

        if meta.tempo.is_empty() {
            if let Some(bpm) = parse_tempo(trimmed) {
                meta.tempo = bpm;
            }
        }

        if meta.key.is_empty() {
            if let Some(key) = parse_key(trimmed) {
                meta.key = key;
            }
        }
    }

    debug!(title = %meta.title, key = %meta.key, tempo = %meta.tempo, "extracted metadata");
    meta
}

fn is_title(line: &str) -> bool {
    let len = line.chars().count();
    len > 3 && len < 50 && !line.contains('=') && TITLE.is_match(line)
}

/// `♩ = 120` style tempo marks, rendered as `♩ = <digits>`.
pub fn parse_tempo(line: &str) -> Option<String> {
    TEMPO
        .captures(line)
        .map(|caps| format!("♩ = {}", &caps[1]))
}

/// First word-bounded root note on the line, with `min`/`m` read as minor
/// and anything else as major: `Am` → `A min`, `F#` → `F# maj`.
///
/// Uses the same root grammar and boundary rule as chord extraction. A
/// spelling glued to a following word character is skipped, so `Cmaj7`
/// yields no key.
pub fn parse_key(line: &str) -> Option<String> {
    let chars: Vec<char> = line.chars().collect();
    (0..chars.len()).find_map(|start| key_at(&chars, start))
}

fn key_at(chars: &[char], start: usize) -> Option<String> {
    if start > 0 && is_word_char(chars[start - 1]) {
        return None;
    }
    let rest = &chars[start..];
    let root_lens: &[usize] = match root_len(rest, true)? {
        2 => &[2, 1],
        _ => &[1],
    };

    for &root in root_lens {
        let qualities = KEY_QUALITIES
            .iter()
            .copied()
            .filter(|q| starts_with(&rest[root..], q))
            .map(Some)
            .chain([None]);
        for quality in qualities {
            let end = root + quality.map_or(0, |q| q.chars().count());
            if rest.get(end).map_or(true, |&c| !is_word_char(c)) {
                let tonic: String = rest[..root].iter().collect();
                let mode = match quality {
                    Some("min") | Some("m") => "min",
                    _ => "maj",
                };
                return Some(format!("{tonic} {mode}"));
            }
        }
    }

    None
}

fn starts_with(chars: &[char], word: &str) -> bool {
    word.chars()
        .enumerate()
        .all(|(i, c)| chars.get(i) == Some(&c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_from_first_line() {
        let meta = extract("My Song\nAm F C G");
        assert_eq!(meta.title, "My Song");
    }

    #[test]
    fn title_not_overwritten() {
        let meta = extract("My Song\nAnother Title");
        assert_eq!(meta.title, "My Song");
    }

    #[test]
    fn title_only_in_first_five_lines() {
        let meta = extract("1\n2\n3\n4\n5\nLate Title");
        assert_eq!(meta.title, "");
    }

    #[test]
    fn blank_lines_do_not_count_toward_window() {
        let meta = extract("\n\n\n\n\n\nMy Song");
        assert_eq!(meta.title, "My Song");
    }

    #[test]
    fn title_length_bounds() {
        assert!(!is_title("Abc"));
        assert!(is_title("Abcd"));
        assert!(!is_title(&"a".repeat(50)));
        assert!(is_title(&"a".repeat(49)));
    }

    #[test]
    fn title_rejects_digits_and_colons() {
        assert!(!is_title("Tempo: 120"));
        assert!(!is_title("Track 2"));
        assert!(is_title("Don't Stop, Believin'!"));
    }

    #[test]
    fn tempo_mark() {
        assert_eq!(parse_tempo("♩ = 96").as_deref(), Some("♩ = 96"));
        assert_eq!(parse_tempo("=120").as_deref(), Some("♩ = 120"));
        assert_eq!(parse_tempo("Tempo: 120"), None);
    }

    #[test]
    fn tempo_first_match_wins() {
        let meta = extract("My Song\n♩ = 96\n♪ = 140");
        assert_eq!(meta.tempo, "♩ = 96");
    }

    #[test]
    fn key_from_first_root() {
        assert_eq!(parse_key("Key: C maj").as_deref(), Some("C maj"));
        assert_eq!(parse_key("Am F C G").as_deref(), Some("A min"));
        assert_eq!(parse_key("F#min").as_deref(), Some("F# min"));
        assert_eq!(parse_key("Bbmaj").as_deref(), Some("Bb maj"));
        assert_eq!(parse_key("nothing here"), None);
    }

    #[test]
    fn key_keeps_sharp_at_end_of_line() {
        assert_eq!(parse_key("Key: F#").as_deref(), Some("F# maj"));
    }

    #[test]
    fn key_with_unicode_accidentals() {
        assert_eq!(parse_key("F♯m E").as_deref(), Some("F♯ min"));
        assert_eq!(parse_key("Key: B♭m").as_deref(), Some("B♭ min"));
        assert_eq!(parse_key("E♭ Bb").as_deref(), Some("E♭ maj"));
    }

    #[test]
    fn key_root_must_start_a_word() {
        assert_eq!(parse_key("xC G").as_deref(), Some("G maj"));
    }

    #[test]
    fn key_skips_glued_spellings() {
        assert_eq!(parse_key("Cmaj7 G").as_deref(), Some("G maj"));
    }

    #[test]
    fn title_line_not_scanned_for_key() {
        let meta = extract("A Song\nEm G");
        assert_eq!(meta.title, "A Song");
        assert_eq!(meta.key, "E min");
    }

    #[test]
    fn key_first_match_wins() {
        let meta = extract("My Song\nKey: D\nAm F");
        assert_eq!(meta.key, "D maj");
    }

    #[test]
    fn empty_input() {
        assert_eq!(extract(""), Metadata::default());
    }
}
