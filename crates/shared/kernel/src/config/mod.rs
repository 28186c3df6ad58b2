use config::{Config, Environment, File};
use raft_domain::constants::ENV_PREFIX;
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// File name (without extension) looked up when no explicit path is given.
const DEFAULT_CONFIG: &str = "raft";

/// Errors raised while assembling configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

impl From<config::ConfigError> for ConfigError {
    fn from(source: config::ConfigError) -> Self {
        Self::Config { source, context: None }
    }
}

/// Attaches a human-readable context to configuration failures.
pub trait ConfigErrorExt<T> {
    /// # Errors
    /// Returns the original error wrapped in [`ConfigError`] with `context` set.
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, ConfigError>;
}

impl<T> ConfigErrorExt<T> for Result<T, config::ConfigError> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, ConfigError> {
        self.map_err(|source| ConfigError::Config { source, context: Some(context.into()) })
    }
}

fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}

/// Loads configuration from a file overlaid with `RAFT__`-prefixed environment variables.
///
/// 1. **Base File**: the given path (format picked from the extension: `.toml`, `.json`,
///    `.yaml`). Without a path, `raft.*` in the working directory is used if present.
/// 2. **Environment Overrides**: `RAFT__LICENSE__PUBLIC_KEY` maps to `license.public_key`.
///
/// Missing fields fall back to the target type's `#[serde(default)]` values.
///
/// # Errors
/// Returns [`ConfigError::Config`] if an explicitly given file is missing, or if the merged
/// sources cannot be deserialized into `T`.
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let (effective_path, required) = path.map_or_else(
        || (PathBuf::from(DEFAULT_CONFIG), false),
        |p| (p.as_ref().to_path_buf(), true),
    );

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(required))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .convert_case(config::Case::Snake),
        );

    info!("Loading config from {}", effective_path.display());

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
