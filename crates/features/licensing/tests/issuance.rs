#![cfg(feature = "issuance")]

use raft_licensing::generator::{LicenseRequest, generate_keypair, generate_secret, issue_license};
use raft_licensing::{LicenseError, SignedLicense, Tier};

fn request(days: u64) -> LicenseRequest {
    LicenseRequest {
        customer: "Acme".to_owned(),
        email: "ops@acme.test".to_owned(),
        tier: Tier::Pro,
        days,
        salt: generate_secret().unwrap(),
    }
}

#[test]
fn issued_key_verifies_with_matching_public_key() {
    let (signing, verifying) = generate_keypair().unwrap();
    let license = issue_license(&signing.to_bytes(), request(30)).unwrap();

    assert_eq!(license.data.expires - license.data.issued, 30 * 24 * 3600);

    let decoded = SignedLicense::from_key(&license.to_key().unwrap()).unwrap();
    decoded.validate(&verifying.to_bytes()).unwrap();
    assert_eq!(decoded.data.tier, Tier::Pro);
}

#[test]
fn other_keypair_rejects_the_signature() {
    let (signing, _) = generate_keypair().unwrap();
    let (_, other) = generate_keypair().unwrap();
    let license = issue_license(&signing.to_bytes(), request(1)).unwrap();

    let err = license.validate(&other.to_bytes()).unwrap_err();
    assert!(matches!(err, LicenseError::InvalidSignature { .. }));
}

#[test]
fn overflowing_validity_is_rejected() {
    let (signing, _) = generate_keypair().unwrap();
    let err = issue_license(&signing.to_bytes(), request(u64::MAX)).unwrap_err();
    assert!(matches!(err, LicenseError::Internal { .. }));
}

#[test]
fn secrets_differ() {
    assert_ne!(generate_secret().unwrap(), generate_secret().unwrap());
}

#[test]
fn expiry_beyond_signed_timestamps_is_rejected() {
    let (signing, _) = generate_keypair().unwrap();

    // fits u64 seconds but not i64
    let err = issue_license(&signing.to_bytes(), request(150_000_000_000_000)).unwrap_err();
    assert!(matches!(err, LicenseError::Internal { .. }), "unexpected error: {err}");

    let license = issue_license(&signing.to_bytes(), request(100 * 365)).unwrap();
    assert!(license.data.expires > license.data.issued);
}
