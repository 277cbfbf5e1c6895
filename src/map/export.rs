//! JSON export — the chord map with sections nested, optionally stamped
//! with an export date, and read back for re-rendering.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::ChordMap;
use crate::error::{Error, Result};

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Section chords of an export.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sections {
    #[serde(default)]
    pub intro: String,
    #[serde(default)]
    pub verse: String,
    #[serde(default)]
    pub chorus: String,
    #[serde(default)]
    pub bridge: String,
    #[serde(default)]
    pub outro: String,
}

/// The on-disk export document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChordMapExport {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub tempo: String,
    pub sections: Sections,
    #[serde(default)]
    pub structure: String,
    #[serde(
        rename = "exportDate",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub export_date: Option<DateTime<Utc>>,
}

impl ChordMapExport {
    pub fn new(map: &ChordMap, export_date: Option<DateTime<Utc>>) -> Self {
        Self {
            title: map.title.clone(),
            key: map.key.clone(),
            tempo: map.tempo.clone(),
            sections: Sections {
                intro: map.intro.clone(),
                verse: map.verse.clone(),
                chorus: map.chorus.clone(),
                bridge: map.bridge.clone(),
                outro: map.outro.clone(),
            },
            structure: map.structure.clone(),
            export_date,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::InvalidExport(e.to_string()))
    }
}

impl From<ChordMapExport> for ChordMap {
    fn from(export: ChordMapExport) -> Self {
        ChordMap {
            title: export.title,
            key: export.key,
            tempo: export.tempo,
            intro: export.sections.intro,
            verse: export.sections.verse,
            chorus: export.sections.chorus,
            bridge: export.sections.bridge,
            outro: export.sections.outro,
            structure: export.structure,
        }
    }
}

/// `<title>_chord_map.json`, whitespace runs in the title replaced by `_`.
pub fn export_filename(title: &str) -> String {
    let title = title.trim();
    let stem = if title.is_empty() {
        "untitled".into()
    } else {
        WHITESPACE.replace_all(title, "_")
    };
    format!("{stem}_chord_map.json")
}

/// Write `map` as a JSON export into `dir`, creating it as needed.
/// Returns the path written.
pub fn write_export(
    dir: &Path,
    map: &ChordMap,
    export_date: Option<DateTime<Utc>>,
) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(export_filename(&map.title));
    let json = ChordMapExport::new(map, export_date).to_json()?;
    std::fs::write(&path, json)?;
    info!(path = %path.display(), "wrote chord map export");
    Ok(path)
}

/// Load a JSON export back into a chord map. The export date is dropped.
pub fn read_export(path: &Path) -> Result<ChordMap> {
    let content = std::fs::read_to_string(path)?;
    Ok(ChordMapExport::from_json(&content)?.into())
}
