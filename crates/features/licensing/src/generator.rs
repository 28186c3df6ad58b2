//! # License Issuance
//!
//! Signing routines for the vendor side. Gated behind the `issuance` feature so that private
//! key handling never ships inside the extension or the popup shell.
//!
//! Keep `private/keyset` out of version control: whoever holds the signing key can mint
//! Pro licenses.

use crate::error::LicenseError;
use crate::{LicenseData, SignedLicense};
use ed25519_dalek::{Signer, SigningKey, VerifyingKey};
use getrandom::fill;
use raft_domain::Tier;
use std::time::{SystemTime, UNIX_EPOCH};
use zeroize::Zeroize;

const SECONDS_PER_DAY: u64 = 24 * 3600;

/// Generates a 32-byte secret from the OS CSPRNG, used as a per-license salt.
///
/// # Errors
/// Returns [`LicenseError::Internal`] if the system RNG fails.
pub fn generate_secret() -> Result<[u8; 32], LicenseError> {
    let mut secret = [0u8; 32];
    fill(&mut secret).map_err(|e| LicenseError::Internal {
        message: e.to_string().into(),
        context: Some("Failed to generate secret".into()),
    })?;
    Ok(secret)
}

/// Creates a fresh Ed25519 keypair for signing license keys.
///
/// The intermediate seed is zeroed once the keypair is derived.
///
/// # Errors
/// Returns [`LicenseError::Internal`] if the system RNG fails.
pub fn generate_keypair() -> Result<(SigningKey, VerifyingKey), LicenseError> {
    let mut seed = generate_secret()?;
    let signing_key = SigningKey::from_bytes(&seed);
    seed.zeroize();

    let verifying_key = signing_key.verifying_key();
    Ok((signing_key, verifying_key))
}

/// What a license key should grant.
#[derive(Debug)]
pub struct LicenseRequest {
    /// Name of the licensee.
    pub customer: String,
    /// Contact address of the licensee.
    pub email: String,
    /// Tier to unlock.
    pub tier: Tier,
    /// Validity in days, counted from now.
    pub days: u64,
    /// Unique salt for this license.
    pub salt: [u8; 32],
}

/// Signs a license for `request` with the vendor private key.
///
/// # Errors
/// Returns [`LicenseError::Internal`] if the clock is unreadable or the validity window
/// overflows, and [`LicenseError::PostcardSerialize`] if the payload cannot be encoded.
pub fn issue_license(
    private_key: &[u8; 32],
    request: LicenseRequest,
) -> Result<SignedLicense, LicenseError> {
    let signing_key = SigningKey::from_bytes(private_key);

    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| LicenseError::Internal {
            message: e.to_string().into(),
            context: Some("Failed to calculate current time".into()),
        })?
        .as_secs();
    let expires = request
        .days
        .checked_mul(SECONDS_PER_DAY)
        .and_then(|span| now.checked_add(span))
        .and_then(|expires| i64::try_from(expires).ok())
        .ok_or_else(|| LicenseError::Internal {
            message: format!("{} days overflows the expiry timestamp", request.days).into(),
            context: None,
        })?;
    let issued = i64::try_from(now).map_err(|e| LicenseError::Internal {
        message: e.to_string().into(),
        context: Some("Current time does not fit a timestamp".into()),
    })?;

    let data = LicenseData {
        customer: request.customer,
        email: request.email,
        tier: request.tier,
        salt: request.salt.to_vec(),
        issued,
        expires,
    };

    let bytes = postcard::to_stdvec(&data)?;
    let signature = signing_key.sign(&bytes).to_bytes().to_vec();

    Ok(SignedLicense { data, signature })
}
