use raft_domain::constants::{ENV_PREFIX, LICENSE_KEY_FILE, PRO_OVERRIDE_KEY, SETTINGS_FILE};

#[test]
fn constants_match_storage_names() {
    assert_eq!(PRO_OVERRIDE_KEY, "raft_pro_override");
    assert_eq!(SETTINGS_FILE, "raft-storage.json");
    assert_eq!(LICENSE_KEY_FILE, "license.key");
    assert_eq!(ENV_PREFIX, "RAFT");
}
