//! Typed key-value settings.

mod backend;
mod sqlite;

pub use backend::SettingsBackend;
pub use sqlite::SqliteBackend;

use std::sync::Arc;

use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;

/// Key under which the theme mode is stored.
pub const THEME_KEY: &str = "theme.mode";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
    #[error("serialization error: {0}")]
    Serialization(bincode::Error),
    #[error("deserialization error: {0}")]
    Deserialization(bincode::Error),
}

/// Wraps a [`SettingsBackend`] with typed serialization via bincode.
#[derive(Clone)]
pub struct SettingsProvider {
    backend: Arc<dyn SettingsBackend>,
}

impl SettingsProvider {
    pub fn new(backend: impl SettingsBackend + 'static) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }

    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, SettingsError> {
        match self.backend.get_bytes(key)? {
            Some(bytes) => Ok(Some(
                bincode::deserialize(&bytes).map_err(SettingsError::Deserialization)?,
            )),
            None => Ok(None),
        }
    }

    /// Like [`get`](Self::get), with `default` for a missing key.
    pub fn get_or<T: DeserializeOwned>(&self, key: &str, default: T) -> Result<T, SettingsError> {
        Ok(self.get(key)?.unwrap_or(default))
    }

    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), SettingsError> {
        let bytes = bincode::serialize(value).map_err(SettingsError::Serialization)?;
        self.backend.set_bytes(key, bytes)
    }
}

#[cfg(test)]
mod tests {
    use lutable::ThemeMode;

    use super::*;

    fn provider() -> SettingsProvider {
        SettingsProvider::new(SqliteBackend::in_memory().unwrap())
    }

    #[test]
    fn test_theme_round_trip() {
        let settings = provider();
        assert_eq!(
            settings.get_or(THEME_KEY, ThemeMode::Light).unwrap(),
            ThemeMode::Light
        );

        settings.set(THEME_KEY, &ThemeMode::Dark).unwrap();
        assert_eq!(settings.get::<ThemeMode>(THEME_KEY).unwrap(), Some(ThemeMode::Dark));
    }

    #[test]
    fn test_garbage_bytes_fail_to_decode() {
        let backend = SqliteBackend::in_memory().unwrap();
        backend.set_bytes(THEME_KEY, vec![9, 9, 9, 9]).unwrap();
        let settings = SettingsProvider::new(backend);

        assert!(matches!(
            settings.get::<ThemeMode>(THEME_KEY),
            Err(SettingsError::Deserialization(_))
        ));
    }
}
