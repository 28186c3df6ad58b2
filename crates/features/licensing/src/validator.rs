//! # License Validation
//!
//! Offline verification of license keys, compiled into every build.
//!
//! Validation runs two steps in order:
//! 1. **Temporal Check**: the current time must lie inside `[issued, expires]`.
//! 2. **Cryptographic Check**: the Postcard encoding of [`LicenseData`](crate::LicenseData)
//!    must carry a valid Ed25519 signature from the vendor key.

use crate::SignedLicense;
use crate::error::{LicenseError, LicenseErrorExt};
use ed25519_dalek::{Signature, Verifier, VerifyingKey};
use std::time::{SystemTime, UNIX_EPOCH};

/// Validates a signed license against the vendor public key.
///
/// # Errors
/// * [`LicenseError::Internal`] if the system clock is unreadable or earlier than the issue date.
/// * [`LicenseError::Expired`] if the license is past its `expires` timestamp.
/// * [`LicenseError::InvalidSignature`] if the public key is invalid or the data was tampered with.
pub fn validate_license(license: &SignedLicense, key: &[u8; 32]) -> Result<(), LicenseError> {
    check_validity_window(license, unix_now()?)?;
    verify_signature(license, key)
}

/// Decodes a hex-encoded Ed25519 public key as stored in configuration.
///
/// # Errors
/// Returns [`LicenseError::MalformedKey`] if the string is not 64 hex characters.
pub fn decode_public_key(hex_key: &str) -> Result<[u8; 32], LicenseError> {
    let bytes = hex::decode(hex_key.trim()).map_err(|e| LicenseError::MalformedKey {
        message: e.to_string().into(),
        context: Some("Public key is not valid hex".into()),
    })?;

    bytes.try_into().map_err(|bytes: Vec<u8>| LicenseError::MalformedKey {
        message: format!("expected 32 bytes, got {}", bytes.len()).into(),
        context: Some("Public key length".into()),
    })
}

fn unix_now() -> Result<i64, LicenseError> {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| LicenseError::Internal {
            message: e.to_string().into(),
            context: Some("Failed to get current system time".into()),
        })?
        .as_secs();
    Ok(secs.cast_signed())
}

fn check_validity_window(license: &SignedLicense, now: i64) -> Result<(), LicenseError> {
    if now < license.data.issued {
        return Err(LicenseError::Internal {
            message: "System clock is set before license issuance date".into(),
            context: Some("Current time comparison failed".into()),
        });
    }

    if now > license.data.expires {
        return Err(LicenseError::Expired {
            message: format!("License expired at Unix timestamp {}", license.data.expires).into(),
            context: Some("Expiration Check".into()),
        });
    }

    Ok(())
}

fn verify_signature(license: &SignedLicense, public_key: &[u8; 32]) -> Result<(), LicenseError> {
    let verifying_key = VerifyingKey::from_bytes(public_key).context("Invalid vendor public key")?;
    let signature = Signature::from_slice(&license.signature).context("Malformed signature")?;

    let data_bytes = postcard::to_stdvec(&license.data).context("Binary serialization failed")?;

    verifying_key.verify(&data_bytes, &signature).context("Signature verification")?;

    Ok(())
}
