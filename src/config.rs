//! Configuration — loads optional ~/.chordmap/config.yaml.

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// How the CLI prints a chord map.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
    Text,
}

/// Settings loaded from ~/.chordmap/config.yaml.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    /// Let labeled lines (`Chorus: ...`) override inferred sections.
    #[serde(default)]
    pub explicit_labels: bool,
    /// Output format for `analyze`.
    #[serde(default)]
    pub format: OutputFormat,
    /// Directory to also write JSON exports into.
    #[serde(default)]
    pub export_dir: Option<PathBuf>,
}

impl Config {
    /// Load from `path` when given (it must exist), otherwise from the
    /// default path.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load_from(p),
            None => Self::load(),
        }
    }

    /// Load from the default path. A missing file yields defaults.
    pub fn load() -> Result<Self> {
        match default_config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load from an explicit path, which must exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("{}: {e}", path.display())))?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty document deserializes to unit, not a mapping.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml).map_err(|e| Error::Config(e.to_string()))
    }
}

/// Command-line values for `analyze`; `None`/`false` defers to the config.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overrides {
    pub format: Option<OutputFormat>,
    /// Force explicit labels on.
    pub labels: bool,
    /// Force explicit labels off.
    pub no_labels: bool,
    pub export_dir: Option<PathBuf>,
}

/// Effective settings for one `analyze` run.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub explicit_labels: bool,
    pub format: OutputFormat,
    pub export_dir: Option<PathBuf>,
}

impl Settings {
    /// Merge config values with command-line overrides. Flags win.
    pub fn resolve(config: &Config, overrides: &Overrides) -> Self {
        let explicit_labels = if overrides.no_labels {
            false
        } else {
            overrides.labels || config.explicit_labels
        };
        Self {
            explicit_labels,
            format: overrides.format.unwrap_or(config.format),
            export_dir: overrides
                .export_dir
                .clone()
                .or_else(|| config.export_dir.clone()),
        }
    }
}

/// ~/.chordmap/config.yaml
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".chordmap").join("config.yaml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert!(!config.explicit_labels);
        assert_eq!(config.format, OutputFormat::Json);
        assert!(config.export_dir.is_none());
    }

    #[test]
    fn parse_yaml_config() {
        let yaml = r#"
explicit_labels: true
format: text
export_dir: /tmp/chordmaps
"#;
        let config = Config::from_yaml(yaml).unwrap();
        assert!(config.explicit_labels);
        assert_eq!(config.format, OutputFormat::Text);
        assert_eq!(config.export_dir, Some(PathBuf::from("/tmp/chordmaps")));
    }

    #[test]
    fn partial_yaml_config() {
        let config = Config::from_yaml("format: yaml\n").unwrap();
        assert_eq!(config.format, OutputFormat::Yaml);
        assert!(!config.explicit_labels);
    }

    #[test]
    fn empty_file_is_default() {
        assert_eq!(Config::from_yaml("").unwrap(), Config::default());
    }

    #[test]
    fn bad_format_is_config_error() {
        let err = Config::from_yaml("format: pdf\n").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "explicit_labels: true").unwrap();
        let config = Config::load_from(file.path()).unwrap();
        assert!(config.explicit_labels);
    }

    #[test]
    fn load_from_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load_from(&dir.path().join("nope.yaml")).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn explicit_missing_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.yaml");
        assert!(Config::load_or_default(Some(missing.as_path())).is_err());
    }

    #[test]
    fn explicit_path_is_loaded() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "format: text").unwrap();
        let config = Config::load_or_default(Some(file.path())).unwrap();
        assert_eq!(config.format, OutputFormat::Text);
    }

    fn labeled_config() -> Config {
        Config {
            explicit_labels: true,
            format: OutputFormat::Yaml,
            export_dir: Some(PathBuf::from("/srv/maps")),
        }
    }

    #[test]
    fn settings_default_to_config() {
        let settings = Settings::resolve(&labeled_config(), &Overrides::default());
        assert!(settings.explicit_labels);
        assert_eq!(settings.format, OutputFormat::Yaml);
        assert_eq!(settings.export_dir, Some(PathBuf::from("/srv/maps")));
    }

    #[test]
    fn flags_override_config() {
        let overrides = Overrides {
            format: Some(OutputFormat::Text),
            export_dir: Some(PathBuf::from("out")),
            ..Default::default()
        };
        let settings = Settings::resolve(&labeled_config(), &overrides);
        assert_eq!(settings.format, OutputFormat::Text);
        assert_eq!(settings.export_dir, Some(PathBuf::from("out")));
    }

    #[test]
    fn labels_flag_turns_labels_on() {
        let overrides = Overrides {
            labels: true,
            ..Default::default()
        };
        assert!(Settings::resolve(&Config::default(), &overrides).explicit_labels);
        assert!(!Settings::resolve(&Config::default(), &Overrides::default()).explicit_labels);
    }

    #[test]
    fn no_labels_flag_beats_config() {
        let overrides = Overrides {
            no_labels: true,
            ..Default::default()
        };
        assert!(!Settings::resolve(&labeled_config(), &overrides).explicit_labels);
    }

    #[test]
    fn load_default_path_does_not_panic() {
        // Depends on the test runner's home directory; only check it returns.
        let _ = Config::load();
    }
}
