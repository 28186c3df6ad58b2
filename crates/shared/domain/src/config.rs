use crate::constants::{LICENSE_KEY_FILE, PRO_OVERRIDE_KEY, SETTINGS_FILE};
use serde::Deserialize;
use std::path::PathBuf;

/// Top-level configuration shared by the popup shell and the feature resolver.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RaftConfig {
    pub settings: SettingsConfig,
    pub license: LicenseConfig,
    pub logging: LoggingConfig,
}

/// Where the extension's key-value settings live.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SettingsConfig {
    /// JSON object file exported from extension local storage.
    pub path: PathBuf,
    /// Key of the developer Pro override inside that object.
    pub override_key: String,
}

/// Offline license verification settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LicenseConfig {
    /// File containing the license key string.
    pub key_path: PathBuf,
    /// Hex-encoded Ed25519 public key. Without it every key is treated as unlicensed.
    pub public_key: Option<String>,
}

/// Logging knobs.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default level directive (`error`, `warn`, `info`, `debug`, `trace`).
    pub level: String,
    /// Extra `EnvFilter` directives, e.g. `raft_licensing=debug`.
    pub filter: Option<String>,
    /// Directory for rolling log files. Console only when unset.
    pub directory: Option<PathBuf>,
    /// Emit file logs as JSON lines.
    pub json: bool,
}

// --- Default ---

impl Default for SettingsConfig {
    fn default() -> Self {
        Self { path: PathBuf::from(SETTINGS_FILE), override_key: PRO_OVERRIDE_KEY.to_owned() }
    }
}

impl Default for LicenseConfig {
    fn default() -> Self {
        Self { key_path: PathBuf::from(LICENSE_KEY_FILE), public_key: None }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), filter: None, directory: None, json: false }
    }
}
