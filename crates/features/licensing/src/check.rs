//! License checks consulted when no developer override is active.

use crate::SignedLicense;
use crate::error::{LicenseError, LicenseErrorExt};
use crate::validator::{decode_public_key, validate_license};
use raft_domain::config::LicenseConfig;
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Answer of a license check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LicenseStatus {
    pub is_pro: bool,
}

impl LicenseStatus {
    pub const FREE: Self = Self { is_pro: false };
    pub const PRO: Self = Self { is_pro: true };
}

/// Something that can tell whether this installation holds a Pro license.
pub trait LicenseCheck: Send + Sync {
    /// Performs the check.
    ///
    /// "Not licensed" is `Ok(LicenseStatus::FREE)`, not an error. Errors are reserved for
    /// checks that could not complete.
    ///
    /// # Errors
    /// Returns a [`LicenseError`] when the license state cannot be determined.
    fn check(&self) -> impl Future<Output = Result<LicenseStatus, LicenseError>> + Send;
}

/// A check with a fixed answer, for offline mode and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticCheck(pub LicenseStatus);

impl LicenseCheck for StaticCheck {
    async fn check(&self) -> Result<LicenseStatus, LicenseError> {
        Ok(self.0)
    }
}

/// Verifies a stored license key offline.
#[derive(Debug, Clone)]
pub struct LicenseKeyCheck {
    key_path: PathBuf,
    public_key: Option<[u8; 32]>,
}

impl LicenseKeyCheck {
    /// Checks the key stored at `key_path` against `public_key`.
    pub fn new(key_path: impl Into<PathBuf>, public_key: [u8; 32]) -> Self {
        Self { key_path: key_path.into(), public_key: Some(public_key) }
    }

    /// Builds the check from configuration.
    ///
    /// Without a configured public key no license can verify, so every check answers Free.
    ///
    /// # Errors
    /// Returns [`LicenseError::MalformedKey`] if the configured public key is not valid hex.
    pub fn from_config(config: &LicenseConfig) -> Result<Self, LicenseError> {
        let public_key = config.public_key.as_deref().map(decode_public_key).transpose()?;
        Ok(Self { key_path: config.key_path.clone(), public_key })
    }

    #[must_use]
    pub fn key_path(&self) -> &Path {
        &self.key_path
    }
}

impl LicenseCheck for LicenseKeyCheck {
    async fn check(&self) -> Result<LicenseStatus, LicenseError> {
        let Some(public_key) = self.public_key else {
            debug!("No vendor public key configured, treating installation as unlicensed");
            return Ok(LicenseStatus::FREE);
        };

        let key = match tokio::fs::read_to_string(&self.key_path).await {
            Ok(key) if key.trim().is_empty() => return Ok(LicenseStatus::FREE),
            Ok(key) => key,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.key_path.display(), "No license key stored");
                return Ok(LicenseStatus::FREE);
            },
            Err(e) => {
                return Err(e).context(format!("Failed to read {}", self.key_path.display()));
            },
        };

        let license = SignedLicense::from_key(&key)?;
        validate_license(&license, &public_key)?;

        debug!(tier = %license.data.tier, expires = license.data.expires, "License key verified");
        Ok(LicenseStatus { is_pro: license.data.tier.is_pro() })
    }
}
