//! # Raft Popup
//!
//! The popup is the only place the free/pro split becomes visible. This crate wires the
//! feature resolver to the accessibility primitives: flags are resolved once per render and
//! the result is prerendered to static markup.

use dioxus::prelude::*;
use raft_a11y::{A11yStyles, DEFAULT_SKIP_TARGET, Dialog, LiveRegion, SkipLink, VisuallyHidden};
use raft_domain::config::RaftConfig;
use raft_domain::{FeatureFlag, FeatureFlags, Tier};
use raft_licensing::{
    FeatureResolver, JsonFileStore, LicenseCheck, LicenseError, LicenseKeyCheck, OverrideStore,
};
use tracing::info;

const UPGRADE_TITLE_ID: &str = "raft-upgrade-title";
const UPGRADE_DESC_ID: &str = "raft-upgrade-desc";

/// Resolver over the settings file and stored license key named in `config`.
///
/// # Errors
/// Returns [`LicenseError::MalformedKey`] if the configured public key is not valid hex.
pub fn resolver_from_config(
    config: &RaftConfig,
) -> Result<FeatureResolver<JsonFileStore, LicenseKeyCheck>, LicenseError> {
    let store = JsonFileStore::new(&config.settings.path).with_key(&config.settings.override_key);
    let check = LicenseKeyCheck::from_config(&config.license)?;
    Ok(FeatureResolver::new(store, check))
}

/// What the popup shows for one resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopupState {
    pub tier: Tier,
    pub flags: FeatureFlags,
}

impl PopupState {
    /// Resolves the tier once and derives the flags from it.
    pub async fn resolve<S, C>(resolver: &FeatureResolver<S, C>) -> Self
    where
        S: OverrideStore,
        C: LicenseCheck,
    {
        let tier = resolver.tier().await;
        Self { tier, flags: tier.flags() }
    }

    /// Status line announced through the live region.
    #[must_use]
    pub const fn status_message(self) -> &'static str {
        match self.tier {
            Tier::Pro => "Raft Pro is active. All features are unlocked.",
            Tier::Free => "You are on the free plan.",
        }
    }
}

impl From<Tier> for PopupState {
    fn from(tier: Tier) -> Self {
        Self { tier, flags: tier.flags() }
    }
}

/// Popup body. The upgrade dialog only opens for free users.
#[component]
pub fn Popup(state: PopupState, #[props(default)] upgrade_open: bool) -> Element {
    let status = state.status_message();

    rsx! {
        A11yStyles {}
        SkipLink {}
        header { class: "raft-header",
            h1 { "Raft" }
        }
        LiveRegion { id: "raft-status", "{status}" }
        main { id: DEFAULT_SKIP_TARGET, tabindex: "-1",
            ul { class: "raft-features",
                for (flag, enabled) in state.flags.entries() {
                    FeatureItem { key: "{flag}", flag, enabled }
                }
            }
        }
        Dialog {
            open: upgrade_open && !state.tier.is_pro(),
            title: "Upgrade to Raft Pro",
            title_id: UPGRADE_TITLE_ID,
            description_id: UPGRADE_DESC_ID,
            h2 { id: UPGRADE_TITLE_ID, "Upgrade to Raft Pro" }
            p { id: UPGRADE_DESC_ID, "Cloud sync and unlimited sessions are part of Raft Pro." }
        }
    }
}

#[component]
fn FeatureItem(flag: FeatureFlag, enabled: bool) -> Element {
    let slug = flag.as_str();
    let label = flag.label();

    if enabled {
        rsx! {
            li { class: "raft-feature", "data-feature": slug, "{label}" }
        }
    } else {
        rsx! {
            li {
                class: "raft-feature raft-feature-locked",
                "data-feature": slug,
                "aria-disabled": "true",
                "{label}"
                VisuallyHidden { " (requires Raft Pro)" }
            }
        }
    }
}

/// Renders a complete HTML document for `state`.
#[must_use]
pub fn render_document(state: PopupState, upgrade_open: bool) -> String {
    let body = dioxus_ssr::render_element(rsx! {
        Popup { state, upgrade_open }
    });

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>Raft</title>\n</head>\n<body>{body}</body>\n</html>\n"
    )
}

/// Resolves flags for `config` and renders the popup document.
///
/// # Errors
/// Returns [`LicenseError`] if the resolver cannot be built from `config`. Resolution
/// itself never fails: unreadable settings or licenses render the free tier.
pub async fn render_popup(config: &RaftConfig, upgrade_open: bool) -> Result<String, LicenseError> {
    let resolver = resolver_from_config(config)?;
    let state = PopupState::resolve(&resolver).await;
    info!(tier = %state.tier, "Rendering popup");
    Ok(render_document(state, upgrade_open))
}
