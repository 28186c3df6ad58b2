use crate::models::keyset::{KEYSET_PATH, Keyset};
use anyhow::{Context, Result};
use raft_licensing::generator::{LicenseRequest, generate_secret, issue_license};
use raft_licensing::{SignedLicense, Tier};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

const LICENSES_DIR: &str = "private/licenses";

/// `cargo xtask lic`
///
/// Writes the license key to `private/licenses/<email>.key`. Re-issuing for the same email
/// keeps the salt of the previous key.
///
/// # Errors
/// Returns an error if the keyset is missing, the previous key is corrupt, or signing or
/// writing fails.
pub fn generate_license(customer: &str, email: &str, tier: Tier, days: u64) -> Result<()> {
    let path = license_path(email);
    fs::create_dir_all(LICENSES_DIR).with_context(|| format!("Failed to create {LICENSES_DIR}"))?;

    let salt: [u8; 32] = match fs::read_to_string(&path) {
        Ok(previous) => {
            let previous = SignedLicense::from_key(&previous)
                .with_context(|| format!("Failed to decode existing {}", path.display()))?;
            previous
                .data
                .salt
                .as_slice()
                .try_into()
                .context("Existing license has an invalid salt length")?
        },
        Err(e) if e.kind() == ErrorKind::NotFound => generate_secret()?,
        Err(e) => return Err(e).with_context(|| format!("Failed to read {}", path.display())),
    };

    let keyset = Keyset::load(KEYSET_PATH)?;
    let request = LicenseRequest {
        customer: customer.to_owned(),
        email: email.to_owned(),
        tier,
        days,
        salt,
    };

    let signed = issue_license(&keyset.master_key, request)?;
    signed.validate(&keyset.public_key).context("Freshly issued license failed verification")?;

    let mut key = signed.to_key()?;
    key.push('\n');
    fs::write(&path, key).with_context(|| format!("Failed to write {}", path.display()))?;

    println!(
        "✅ {} license generated for {} ({} days): {}",
        signed.data.tier,
        signed.data.customer,
        days,
        path.display()
    );
    signed.secure_clear();

    Ok(())
}

fn license_path(email: &str) -> PathBuf {
    let file_name: String = email
        .trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '@' | '.' | '-' | '_') { c } else { '_' }
        })
        .collect();
    PathBuf::from(LICENSES_DIR).join(format!("{file_name}.key"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_becomes_a_safe_file_name() {
        assert_eq!(
            license_path("ana@example.com"),
            PathBuf::from("private/licenses/ana@example.com.key")
        );
        assert_eq!(license_path(" ../evil/x "), PathBuf::from("private/licenses/.._evil_x.key"));
    }
}
