//! Persisted UI theme preference.
//!
//! A single `light`/`dark` value; absent on first run, which reads as light.

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

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
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("theme preference I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("theme preference is malformed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Storage of the theme preference across sessions.
pub trait ThemeStore: Send + Sync {
    /// The stored theme, `None` when nothing was saved yet.
    fn load(&self) -> Result<Option<Theme>, ThemeError>;
    fn save(&self, theme: Theme) -> Result<(), ThemeError>;
}

#[derive(Debug, Serialize, Deserialize)]
struct Preference {
    theme: Theme,
}

/// Theme preference kept in a small JSON file.
#[derive(Debug, Clone)]
pub struct JsonThemeStore {
    path: PathBuf,
}

impl JsonThemeStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ThemeStore for JsonThemeStore {
    fn load(&self) -> Result<Option<Theme>, ThemeError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let preference: Preference = serde_json::from_str(&raw)?;
        Ok(Some(preference.theme))
    }

    fn save(&self, theme: Theme) -> Result<(), ThemeError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string(&Preference { theme })?)?;
        log::debug!("saved theme {:?} to {}", theme, self.path.display());
        Ok(())
    }
}

/// In-process store for hosts without persistence.
#[derive(Debug, Default)]
pub struct MemoryThemeStore {
    theme: Mutex<Option<Theme>>,
}

impl MemoryThemeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(theme: Theme) -> Self {
        Self {
            theme: Mutex::new(Some(theme)),
        }
    }
}

impl ThemeStore for MemoryThemeStore {
    fn load(&self) -> Result<Option<Theme>, ThemeError> {
        Ok(*self.theme.lock())
    }

    fn save(&self, theme: Theme) -> Result<(), ThemeError> {
        *self.theme.lock() = Some(theme);
        Ok(())
    }
}

/// Stored theme, falling back to light when absent or unreadable.
pub fn load_or_default(store: &dyn ThemeStore) -> Theme {
    match store.load() {
        Ok(theme) => theme.unwrap_or_default(),
        Err(e) => {
            log::warn!("could not read theme preference, using light: {}", e);
            Theme::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_first_run_is_light() {
        let dir = TempDir::new().unwrap();
        let store = JsonThemeStore::new(dir.path().join("theme.json"));
        assert_eq!(store.load().unwrap(), None);
        assert_eq!(load_or_default(&store), Theme::Light);
    }

    #[test]
    fn test_json_store_persists() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("theme.json");
        JsonThemeStore::new(&path).save(Theme::Dark).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), r#"{"theme":"dark"}"#);
        assert_eq!(JsonThemeStore::new(&path).load().unwrap(), Some(Theme::Dark));
    }

    #[test]
    fn test_malformed_file_falls_back() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("theme.json");
        fs::write(&path, "not json").unwrap();
        let store = JsonThemeStore::new(&path);

        assert!(matches!(store.load(), Err(ThemeError::Json(_))));
        assert_eq!(load_or_default(&store), Theme::Light);
    }

    #[test]
    fn test_toggle() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }
}
