use crate::services::utils::{display_name, read_json_object, write_pretty_json};
use anyhow::{Context, Result};
use serde_json::Value;
use std::path::Path;

/// Result of comparing the package and manifest versions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The manifest was rewritten. `from` is `None` if it had no version.
    Updated { from: Option<String>, to: String },
    /// Nothing written.
    InSync(String),
}

/// Copies `version` from `package` into `manifest` if they differ.
///
/// Other manifest keys keep their order; the file is rewritten as 2-space JSON.
///
/// # Errors
/// Returns an error if either file is missing or malformed, or if `package` has no
/// `version` string.
pub fn sync_manifest_version(package: &Path, manifest: &Path) -> Result<SyncOutcome> {
    let package_json = read_json_object(package)?;
    let version = package_json
        .get("version")
        .and_then(Value::as_str)
        .with_context(|| format!("{} has no \"version\" string", package.display()))?
        .to_owned();

    let mut manifest_json = read_json_object(manifest)?;
    let current = manifest_json.get("version").and_then(Value::as_str).map(str::to_owned);

    if current.as_deref() == Some(version.as_str()) {
        return Ok(SyncOutcome::InSync(version));
    }

    manifest_json.insert("version".to_owned(), Value::String(version.clone()));
    write_pretty_json(manifest, &manifest_json)?;

    Ok(SyncOutcome::Updated { from: current, to: version })
}

/// `cargo xtask version-sync`
///
/// # Errors
/// See [`sync_manifest_version`].
pub fn sync_versions(package: &Path, manifest: &Path) -> Result<()> {
    let name = display_name(manifest);

    match sync_manifest_version(package, manifest)? {
        SyncOutcome::Updated { from, to } => {
            let from = from.as_deref().unwrap_or("(none)");
            println!("🔄 Synced {name} version: {from} -> {to}");
        },
        SyncOutcome::InSync(version) => {
            println!("✅ {name} version already in sync ({version})");
        },
    }

    Ok(())
}
