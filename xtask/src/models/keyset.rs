use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default location of the signing keyset, relative to the workspace root.
pub const KEYSET_PATH: &str = "private/keyset";

/// Ed25519 signing material, stored postcard-encoded.
#[derive(Debug, Serialize, Deserialize)]
pub struct Keyset {
    pub master_key: [u8; 32],
    pub public_key: [u8; 32],
}

impl Keyset {
    /// Reads a keyset written by `cargo xtask keygen`.
    ///
    /// # Errors
    /// Returns an error if the file is missing or not a postcard-encoded keyset.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path).with_context(|| {
            format!("Failed to read keyset {}; run 'cargo xtask keygen' first", path.display())
        })?;
        postcard::from_bytes(&bytes).context("Failed to deserialize keyset")
    }

    /// Writes the keyset, creating parent directories.
    ///
    /// # Errors
    /// Returns an error if serialization or the write fails.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let bytes = postcard::to_stdvec(self).context("Binary serialization failed")?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, bytes).with_context(|| format!("Failed to write {}", path.display()))
    }

    /// Hex form of the public key, as expected by `license.public_key`.
    #[must_use]
    pub fn public_key_hex(&self) -> String {
        hex::encode(self.public_key)
    }
}
