use std::{fs, path::Path};

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Tunables for the cloud computation.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Settings {
    /// Smallest font size a tag renders at.
    pub min_font_size: u32,
    /// Largest font size a tag renders at, must exceed the smallest.
    pub max_font_size: u32,
    /// Only count notes modified within this many days, zero counts
    /// every note regardless of age.
    pub days_back: u32,
    /// Occurrences a tag needs before it shows up in the cloud.
    pub min_occurrences: usize,
    /// Tags left out of the cloud, matched case-insensitively.
    pub ignore_tags: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            min_font_size: 12,
            max_font_size: 36,
            days_back: 7,
            min_occurrences: 5,
            ignore_tags: Vec::new(),
        }
    }
}

impl Settings {
    /// Load settings from an IDM file.
    ///
    /// Fields missing from the file keep their default values.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Ok(idm::from_str(&fs::read_to_string(path)?)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let settings = Settings::default();

        assert_eq!(settings.min_font_size, 12);
        assert_eq!(settings.max_font_size, 36);
        assert_eq!(settings.days_back, 7);
        assert_eq!(settings.min_occurrences, 5);
        assert!(settings.ignore_tags.is_empty());
    }

    #[test]
    fn settings_survive_idm() {
        let settings = Settings {
            days_back: 30,
            ignore_tags: vec!["daily".into(), "journal".into()],
            ..Default::default()
        };

        let text = idm::to_string(&settings).unwrap();
        let parsed: Settings = idm::from_str(&text).unwrap();
        assert_eq!(parsed, settings);
    }
}
