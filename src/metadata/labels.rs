//! Explicit labels — lines like `Chorus: Am F C G` or `Tonalità: Re min`.
//!
//! Recognizes English and Italian labels, case-insensitively. Each line
//! yields at most one label, tried in field order; each field keeps its
//! first match.

use once_cell::sync::Lazy;
use regex::Regex;

static KEY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:key|tonalità|chiave):\s*([A-Gb#]+(?:\s*(?:maj|major|min|minor|m|M))?)")
        .unwrap()
});
static TEMPO: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?:tempo|time):\s*([0-9]+/[0-9]+|[0-9]+)").unwrap());
static INTRO: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?:intro|introduzione):\s*(.+)").unwrap());
static VERSE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?:verse|strofa|vers):\s*(.+)").unwrap());
static CHORUS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?:chorus|ritornello|refrain|rit):\s*(.+)").unwrap());
static BRIDGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?:bridge|ponte|middle):\s*(.+)").unwrap());
static OUTRO: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?:outro|finale|end|coda):\s*(.+)").unwrap());

/// Values found on labeled lines. `None` means no such label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Labels {
    pub key: Option<String>,
    pub tempo: Option<String>,
    pub intro: Option<String>,
    pub verse: Option<String>,
    pub chorus: Option<String>,
    pub bridge: Option<String>,
    pub outro: Option<String>,
}

impl Labels {
    /// True when no line carried a label.
    pub fn is_empty(&self) -> bool {
        *self == Labels::default()
    }

    fn slots(&mut self) -> [(&'static Lazy<Regex>, &mut Option<String>); 7] {
        [
            (&KEY, &mut self.key),
            (&TEMPO, &mut self.tempo),
            (&INTRO, &mut self.intro),
            (&VERSE, &mut self.verse),
            (&CHORUS, &mut self.chorus),
            (&BRIDGE, &mut self.bridge),
            (&OUTRO, &mut self.outro),
        ]
    }
}

/// Scan every non-blank line of `text` for labels.
pub fn scan_labels(text: &str) -> Labels {
    let mut labels = Labels::default();

    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        for (pattern, slot) in labels.slots() {
            if let Some(caps) = pattern.captures(trimmed) {
                let value = caps[1].trim();
                if slot.is_none() && !value.is_empty() {
                    *slot = Some(value.to_string());
                }
                break;
            }
        }
    }

    labels
}
