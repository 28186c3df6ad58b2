//! Read access to the developer Pro override.
//!
//! The override lives in the extension's key-value settings under a single key. Only a JSON
//! `true` switches it on; `false`, `null` and a missing key all mean "ask the license check".
//! Any other value is reported as [`OverrideState::Invalid`] and does not enable Pro.

use crate::error::{LicenseError, LicenseErrorExt};
use fxhash::FxHashMap;
use parking_lot::RwLock;
use raft_domain::constants::PRO_OVERRIDE_KEY;
use serde_json::{Map, Value};
use std::future::Future;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Observed value of the override key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverrideState {
    /// Key missing or `null`.
    Absent,
    /// Key explicitly `false`.
    Disabled,
    /// Key explicitly `true`.
    Enabled,
    /// Key holds a non-boolean value (kept verbatim for diagnostics).
    Invalid(String),
}

impl OverrideState {
    /// Classifies a raw settings value.
    #[must_use]
    pub fn from_value(value: Option<&Value>) -> Self {
        match value {
            None | Some(Value::Null) => Self::Absent,
            Some(Value::Bool(true)) => Self::Enabled,
            Some(Value::Bool(false)) => Self::Disabled,
            Some(other) => Self::Invalid(other.to_string()),
        }
    }

    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        matches!(self, Self::Enabled)
    }
}

/// Source of the developer override flag.
pub trait OverrideStore: Send + Sync {
    /// Reads the current override state.
    ///
    /// # Errors
    /// Returns a [`LicenseError`] if the backing storage cannot be read or parsed.
    fn read_override(&self) -> impl Future<Output = Result<OverrideState, LicenseError>> + Send;
}

/// Settings exported from extension storage as a single JSON object file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    key: String,
}

impl JsonFileStore {
    /// Reads the default override key from `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), key: PRO_OVERRIDE_KEY.to_owned() }
    }

    /// Uses a different key name.
    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl OverrideStore for JsonFileStore {
    async fn read_override(&self) -> Result<OverrideState, LicenseError> {
        let raw = match tokio::fs::read(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "Settings file missing, override absent");
                return Ok(OverrideState::Absent);
            },
            Err(e) => {
                return Err(e).context(format!("Failed to read {}", self.path.display()));
            },
        };

        let settings: Map<String, Value> = serde_json::from_slice(&raw)
            .context(format!("Settings file {} is not a JSON object", self.path.display()))?;

        Ok(OverrideState::from_value(settings.get(&self.key)))
    }
}

/// In-process settings map.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<FxHashMap<String, Value>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose override key is already set to `enabled`.
    #[must_use]
    pub fn with_override(enabled: bool) -> Self {
        let store = Self::new();
        store.set(PRO_OVERRIDE_KEY, Value::Bool(enabled));
        store
    }

    pub fn set(&self, key: impl Into<String>, value: Value) {
        self.entries.write().insert(key.into(), value);
    }

    pub fn remove(&self, key: &str) -> Option<Value> {
        self.entries.write().remove(key)
    }
}

impl OverrideStore for MemoryStore {
    async fn read_override(&self) -> Result<OverrideState, LicenseError> {
        Ok(OverrideState::from_value(self.entries.read().get(PRO_OVERRIDE_KEY)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn only_true_enables_the_override() {
        assert_eq!(OverrideState::from_value(Some(&json!(true))), OverrideState::Enabled);
        assert_eq!(OverrideState::from_value(Some(&json!(false))), OverrideState::Disabled);
        assert_eq!(OverrideState::from_value(Some(&Value::Null)), OverrideState::Absent);
        assert_eq!(OverrideState::from_value(None), OverrideState::Absent);
        assert_eq!(
            OverrideState::from_value(Some(&json!("yes"))),
            OverrideState::Invalid("\"yes\"".to_owned())
        );
        assert!(!OverrideState::from_value(Some(&json!(1))).is_enabled());
    }

    #[tokio::test]
    async fn memory_store_reflects_updates() {
        let store = MemoryStore::with_override(true);
        assert_eq!(store.read_override().await.unwrap(), OverrideState::Enabled);

        store.remove(PRO_OVERRIDE_KEY);
        assert_eq!(store.read_override().await.unwrap(), OverrideState::Absent);
    }
}
