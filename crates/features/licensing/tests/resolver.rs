use raft_licensing::*;
use serde_json::json;
use std::fs;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Fails the test if the resolver consults it.
#[derive(Debug)]
struct MustNotBeCalled;

impl LicenseCheck for MustNotBeCalled {
    async fn check(&self) -> Result<LicenseStatus, LicenseError> {
        panic!("license check must not run while the override is on");
    }
}

#[derive(Debug, Default)]
struct CountingCheck {
    answer: LicenseStatus,
    calls: AtomicUsize,
}

impl LicenseCheck for CountingCheck {
    async fn check(&self) -> Result<LicenseStatus, LicenseError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.answer)
    }
}

#[derive(Debug)]
struct FailingCheck;

impl LicenseCheck for FailingCheck {
    async fn check(&self) -> Result<LicenseStatus, LicenseError> {
        Err(LicenseError::from("license server unreachable"))
    }
}

#[derive(Debug)]
struct BrokenStore;

impl OverrideStore for BrokenStore {
    async fn read_override(&self) -> Result<OverrideState, LicenseError> {
        Err(LicenseError::from("storage unavailable"))
    }
}

#[tokio::test]
async fn override_short_circuits_the_license_check() {
    let resolver = FeatureResolver::new(MemoryStore::with_override(true), MustNotBeCalled);

    assert!(resolver.is_pro_user().await);
    assert_eq!(resolver.feature_flags().await, FeatureFlags::PRO);
    assert!(resolver.can_use_cloud_sync().await);
}

#[tokio::test]
async fn no_override_and_free_license_yields_free_flags() {
    let resolver = FeatureResolver::new(MemoryStore::new(), StaticCheck(LicenseStatus::FREE));

    assert!(!resolver.is_pro_user().await);
    assert_eq!(resolver.feature_flags().await, FeatureFlags::FREE);
    assert!(!resolver.can_use_cloud_sync().await);
    assert!(resolver.can_use_feature(FeatureFlag::ImportExport).await);
}

#[tokio::test]
async fn disabled_override_defers_to_the_license_check() {
    let check = CountingCheck { answer: LicenseStatus::PRO, ..CountingCheck::default() };
    let resolver = FeatureResolver::new(MemoryStore::with_override(false), check);

    assert_eq!(resolver.tier().await, Tier::Pro);
    assert_eq!(resolver.license_check().calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn non_boolean_override_does_not_enable_pro() {
    let store = MemoryStore::new();
    store.set(raft_domain::constants::PRO_OVERRIDE_KEY, json!("true"));
    let resolver = FeatureResolver::new(store, CountingCheck::default());

    assert!(!resolver.is_pro_user().await);
    assert_eq!(resolver.license_check().calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn failing_check_fails_closed() {
    let resolver = FeatureResolver::new(MemoryStore::new(), FailingCheck);

    assert!(!resolver.is_pro_user().await);
    assert_eq!(resolver.feature_flags().await, FeatureFlags::FREE);
}

#[tokio::test]
async fn unreadable_store_still_consults_the_check() {
    let resolver = FeatureResolver::new(BrokenStore, StaticCheck(LicenseStatus::PRO));
    assert!(resolver.is_pro_user().await);
}

#[tokio::test]
async fn every_call_re_evaluates() {
    let resolver = FeatureResolver::new(MemoryStore::new(), CountingCheck::default());

    assert!(!resolver.can_use_cloud_sync().await);
    resolver.store().set(raft_domain::constants::PRO_OVERRIDE_KEY, json!(true));
    assert!(resolver.can_use_cloud_sync().await);

    assert_eq!(resolver.license_check().calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn json_file_store_reads_exported_settings() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("raft-storage.json");

    let store = JsonFileStore::new(&path);
    assert_eq!(store.read_override().await.unwrap(), OverrideState::Absent);

    fs::write(&path, json!({ "theme": "dark", "raft_pro_override": true }).to_string()).unwrap();
    let resolver = FeatureResolver::new(store, MustNotBeCalled);
    assert_eq!(resolver.feature_flags().await, FeatureFlags::PRO);
}

#[tokio::test]
async fn json_file_store_honours_custom_key() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, r#"{ "dev_pro": false, "raft_pro_override": true }"#).unwrap();

    let store = JsonFileStore::new(&path).with_key("dev_pro");
    assert_eq!(store.read_override().await.unwrap(), OverrideState::Disabled);
}

#[tokio::test]
async fn malformed_settings_fall_back_to_free() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("raft-storage.json");
    fs::write(&path, "[1, 2, 3]").unwrap();

    let store = JsonFileStore::new(&path);
    assert!(matches!(store.read_override().await, Err(LicenseError::SerdeSerialize { .. })));

    let resolver = FeatureResolver::new(store, StaticCheck(LicenseStatus::FREE));
    assert_eq!(resolver.feature_flags().await, FeatureFlags::FREE);
}
