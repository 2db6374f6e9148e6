//! Settings backend trait.

use super::SettingsError;

/// Raw byte storage behind a [`SettingsProvider`](super::SettingsProvider).
pub trait SettingsBackend: Send + Sync {
    fn get_bytes(&self, key: &str) -> Result<Option<Vec<u8>>, SettingsError>;

    /// Insert or replace the bytes stored under `key`.
    fn set_bytes(&self, key: &str, value: Vec<u8>) -> Result<(), SettingsError>;
}
