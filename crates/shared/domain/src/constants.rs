//! Well-known names shared by the extension, the tooling and the tests.

/// Settings key of the developer override that forces the Pro tier.
pub const PRO_OVERRIDE_KEY: &str = "raft_pro_override";

/// Default location of the exported extension settings.
pub const SETTINGS_FILE: &str = "raft-storage.json";

/// Default location of the stored license key.
pub const LICENSE_KEY_FILE: &str = "license.key";

/// Prefix of environment variables that override configuration values.
pub const ENV_PREFIX: &str = "RAFT";
