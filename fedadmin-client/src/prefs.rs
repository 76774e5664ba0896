//! UI preferences
//!
//! Locale and theme choice, persisted next to the session file.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use shared::Locale;

use crate::error::ClientResult;

const PREFS_FILE: &str = "prefs.json";

/// Dashboard color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Persisted UI preferences
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Preferences {
    pub locale: Locale,
    pub theme: Theme,
}

/// File-backed preferences store
#[derive(Debug, Clone)]
pub struct PrefsStore {
    path: PathBuf,
}

impl PrefsStore {
    pub fn new(state_dir: impl Into<PathBuf>) -> Self {
        let path = state_dir.into().join(PREFS_FILE);
        Self { path }
    }

    /// Load preferences; a missing or corrupt file yields the defaults
    pub fn load(&self) -> Preferences {
        std::fs::read_to_string(&self.path)
            .ok()
            .and_then(|json| serde_json::from_str(&json).ok())
            .unwrap_or_default()
    }

    pub fn save(&self, prefs: &Preferences) -> ClientResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(prefs)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_when_missing() {
        let dir = TempDir::new().unwrap();
        let store = PrefsStore::new(dir.path());
        let prefs = store.load();
        assert_eq!(prefs.locale, Locale::En);
        assert_eq!(prefs.theme, Theme::Light);
    }

    #[test]
    fn save_and_reload() {
        let dir = TempDir::new().unwrap();
        let store = PrefsStore::new(dir.path());

        let prefs = Preferences {
            locale: Locale::Ar,
            theme: Theme::Dark,
        };
        store.save(&prefs).unwrap();

        let loaded = store.load();
        assert_eq!(loaded.locale, Locale::Ar);
        assert_eq!(loaded.theme, Theme::Dark);
    }

    #[test]
    fn theme_toggles() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }
}
