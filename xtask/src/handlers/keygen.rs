use crate::models::keyset::{KEYSET_PATH, Keyset};
use anyhow::Result;
use raft_licensing::generator::generate_keypair;
use std::path::Path;

/// `cargo xtask keygen`
///
/// Creates `private/keyset` unless it already exists, then prints the public key to put into
/// `license.public_key`.
///
/// # Errors
/// Returns an error if the RNG fails or the keyset cannot be read or written.
pub fn generate_keyset() -> Result<()> {
    let path = Path::new(KEYSET_PATH);

    let keyset = if path.exists() {
        println!("✅ Keyset already present: '{KEYSET_PATH}'.");
        Keyset::load(path)?
    } else {
        let (master_key, public_key) = generate_keypair()?;
        let keyset =
            Keyset { master_key: master_key.to_bytes(), public_key: public_key.to_bytes() };
        keyset.save(path)?;

        println!("🔑 Generated keyset successfully: '{KEYSET_PATH}'.");
        println!("⚠️ Attention! This keyset is sensitive and should be kept private.");
        keyset
    };

    println!("Public key (license.public_key): {}", keyset.public_key_hex());
    Ok(())
}
