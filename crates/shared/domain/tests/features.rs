use proptest::prelude::*;
use raft_domain::{FeatureFlag, FeatureFlags, Tier};
use serde_json::json;
use std::str::FromStr;

#[test]
fn pro_is_a_superset_of_free() {
    assert!(FeatureFlags::PRO.contains(FeatureFlags::FREE));
    for flag in FeatureFlag::all() {
        if FeatureFlags::FREE.enabled(flag) {
            assert!(FeatureFlags::PRO.enabled(flag), "{flag} is free but not pro");
        }
    }
}

#[test]
fn exactly_two_flags_differ_between_tiers() {
    let differing: Vec<FeatureFlag> = FeatureFlag::all()
        .filter(|flag| FeatureFlags::FREE.enabled(*flag) != FeatureFlags::PRO.enabled(*flag))
        .collect();

    assert_eq!(differing, vec![FeatureFlag::CloudSync, FeatureFlag::UnlimitedSessions]);
}

#[test]
fn every_flag_is_on_in_pro() {
    assert!(FeatureFlag::all().all(|flag| FeatureFlags::PRO.enabled(flag)));
}

#[test]
fn min_tier_agrees_with_static_sets() {
    for flag in FeatureFlag::all() {
        assert_eq!(Tier::Free.flags().enabled(flag), flag.min_tier() == Tier::Free);
    }
}

#[test]
fn flags_serialize_as_a_complete_record() {
    let value = serde_json::to_value(FeatureFlags::FREE).expect("serialize");
    assert_eq!(
        value,
        json!({
            "saveSessions": true,
            "organizeTabs": true,
            "importExport": true,
            "keyboardShortcuts": true,
            "cloudSync": false,
            "unlimitedSessions": false
        })
    );
}

#[test]
fn unknown_slug_is_rejected() {
    assert!(FeatureFlag::from_str("teleport").is_err());
    assert_eq!(FeatureFlag::from_str("cloudSync").ok(), Some(FeatureFlag::CloudSync));

    let err = serde_json::from_value::<FeatureFlags>(json!({ "teleport": true }));
    assert!(err.is_err());
}

#[test]
fn tier_parses_case_insensitively() {
    assert_eq!(Tier::from_str("PRO").ok(), Some(Tier::Pro));
    assert_eq!(Tier::from_str(" free ").ok(), Some(Tier::Free));
    assert!(Tier::from_str("enterprise").is_err());
    assert_eq!(Tier::from(true), Tier::Pro);
}

fn any_flag() -> impl Strategy<Value = FeatureFlag> {
    proptest::sample::select(FeatureFlag::all().collect::<Vec<_>>())
}

proptest! {
    #[test]
    fn flag_sets_survive_json(flags in proptest::collection::vec(any_flag(), 0..6)) {
        let set: FeatureFlags = flags.iter().copied().collect();
        let json = serde_json::to_string(&set).expect("serialize");
        let back: FeatureFlags = serde_json::from_str(&json).expect("deserialize");
        prop_assert_eq!(back, set);
    }

    #[test]
    fn collected_flags_are_enabled(flags in proptest::collection::vec(any_flag(), 1..6)) {
        let set: FeatureFlags = flags.iter().copied().collect();
        for flag in flags {
            prop_assert!(set.enabled(flag));
        }
    }
}
