//! # Licensing & Feature Gating
//!
//! This crate decides which Raft capabilities a user may use.
//!
//! ## Architecture
//!
//! 1.  **Resolution ([`resolver`]):** [`FeatureResolver`] combines a local developer override
//!     ([`store`]) with a license check ([`check`]) and yields the free or pro
//!     [`FeatureFlags`]. It fails closed: anything short of a confirmed Pro license is Free.
//! 2.  **Validation ([`validator`]):** Offline verification of signed license keys
//!     (expiry + Ed25519 signature). Used by [`check::LicenseKeyCheck`].
//! 3.  **Generation ([`generator`]):** Key issuance used only by the vendor (via `xtask`).
//!     Gated behind the `issuance` feature.
//!
//! ## License keys
//!
//! A license key is the Base64 (URL-safe, no padding) encoding of the Postcard-encoded
//! [`SignedLicense`]. The signature covers the Postcard encoding of [`LicenseData`].

pub mod check;
mod error;
#[cfg(feature = "issuance")]
pub mod generator;
pub mod resolver;
pub mod store;
pub mod validator;

pub use crate::check::{LicenseCheck, LicenseKeyCheck, LicenseStatus, StaticCheck};
pub use crate::error::{LicenseError, LicenseErrorExt};
pub use crate::resolver::FeatureResolver;
pub use crate::store::{JsonFileStore, MemoryStore, OverrideState, OverrideStore};
pub use raft_domain::{FeatureFlag, FeatureFlags, Tier};

use base64::{Engine as _, engine::general_purpose};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Parses a feature slug coming from config or the command line.
///
/// # Errors
/// Returns [`LicenseError::UnknownFeature`] if `name` is not one of the [`FeatureFlag`] slugs.
pub fn parse_feature(name: &str) -> Result<FeatureFlag, LicenseError> {
    FeatureFlag::from_str(name.trim())
        .map_err(|_| LicenseError::UnknownFeature { name: name.trim().to_owned() })
}

/// A license payload together with its Ed25519 signature.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignedLicense {
    /// The license information (customer, tier, validity window).
    pub data: LicenseData,
    /// The Ed25519 signature of the `data` field, encoded as a Base64 string in JSON.
    #[serde(with = "bytes_as_base64")]
    pub signature: Vec<u8>,
}

impl SignedLicense {
    /// Serializes the signed license into a compact binary format using Postcard.
    ///
    /// # Errors
    /// Returns [`LicenseError::PostcardSerialize`] if serialization fails.
    pub fn encode_bin(&self) -> Result<Vec<u8>, LicenseError> {
        postcard::to_stdvec(self).map_err(LicenseError::from)
    }

    /// Deserializes a signed license from a binary buffer.
    ///
    /// # Errors
    /// Returns [`LicenseError::PostcardSerialize`] if the buffer is corrupted or invalid.
    pub fn decode_bin(bytes: &[u8]) -> Result<Self, LicenseError> {
        postcard::from_bytes(bytes).map_err(LicenseError::from)
    }

    /// Encodes the license as the key string users paste into the extension.
    ///
    /// # Errors
    /// Returns [`LicenseError::PostcardSerialize`] if serialization fails.
    pub fn to_key(&self) -> Result<String, LicenseError> {
        Ok(general_purpose::URL_SAFE_NO_PAD.encode(self.encode_bin()?))
    }

    /// Decodes a license key string. Surrounding whitespace is ignored.
    ///
    /// # Errors
    /// Returns [`LicenseError::MalformedKey`] for invalid Base64 and
    /// [`LicenseError::PostcardSerialize`] for an undecodable payload.
    pub fn from_key(key: &str) -> Result<Self, LicenseError> {
        let bytes = general_purpose::URL_SAFE_NO_PAD.decode(key.trim()).map_err(|e| {
            LicenseError::MalformedKey {
                message: e.to_string().into(),
                context: Some("License key is not valid Base64".into()),
            }
        })?;
        Self::decode_bin(&bytes)
    }

    /// Serializes the signed license into a human-readable JSON string.
    ///
    /// # Errors
    /// Returns [`LicenseError::SerdeSerialize`] if serialization fails.
    pub fn to_json(&self) -> Result<String, LicenseError> {
        serde_json::to_string(self).map_err(LicenseError::from)
    }

    /// Deserializes a signed license from a JSON string.
    ///
    /// # Errors
    /// Returns [`LicenseError::SerdeSerialize`] if the JSON is malformed or
    /// contains invalid Base64 data.
    pub fn from_json(json: &str) -> Result<Self, LicenseError> {
        serde_json::from_str(json).map_err(LicenseError::from)
    }

    /// Verifies expiry and signature against the vendor public key.
    ///
    /// # Errors
    /// See [`validator::validate_license`].
    pub fn validate(&self, key: &[u8; 32]) -> Result<(), LicenseError> {
        validator::validate_license(self, key)
    }

    /// Wipes customer data and the signature from memory.
    pub fn secure_clear(mut self) {
        use zeroize::Zeroize;
        self.data.customer.zeroize();
        self.data.email.zeroize();
        self.data.salt.zeroize();
        self.signature.zeroize();
    }
}

/// The signed part of a license.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LicenseData {
    /// Name of the licensee.
    pub customer: String,
    /// Contact address the license was purchased with.
    pub email: String,
    /// Tier unlocked by this license.
    pub tier: Tier,
    /// Per-license salt so identical orders never share a signature.
    #[serde(with = "bytes_as_base64")]
    pub salt: Vec<u8>,
    /// UNIX timestamp (seconds) of issuance.
    pub issued: i64,
    /// UNIX timestamp (seconds) after which the license is expired.
    pub expires: i64,
}

/// Serde adapter storing byte buffers as Base64 strings.
#[allow(clippy::redundant_pub_crate)]
pub mod bytes_as_base64 {
    use base64::{Engine as _, engine::general_purpose};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[allow(clippy::ptr_arg)]
    pub(super) fn serialize<S: Serializer>(v: &Vec<u8>, s: S) -> Result<S::Ok, S::Error> {
        String::serialize(&general_purpose::STANDARD_NO_PAD.encode(v), s)
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<u8>, D::Error> {
        general_purpose::STANDARD_NO_PAD
            .decode(String::deserialize(d)?)
            .map_err(|e| serde::de::Error::custom(format!("Invalid Base64: {e}")))
    }
}
