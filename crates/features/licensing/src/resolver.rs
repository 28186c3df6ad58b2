//! # Feature Resolver
//!
//! Turns "who is this user" into "what may they use".
//!
//! Resolution is a two-step short circuit:
//!
//! 1. The developer override is read from the [`OverrideStore`]. If it is on, the user is Pro
//!    and the [`LicenseCheck`] is never invoked.
//! 2. Otherwise the [`LicenseCheck`] decides.
//!
//! Nothing here returns an error to the caller. A store that cannot be read counts as "no
//! override", a check that fails counts as "not Pro". Results are not cached: each call
//! re-reads the store and re-runs the check.

use crate::check::LicenseCheck;
use crate::store::{OverrideState, OverrideStore};
use raft_domain::{FeatureFlag, FeatureFlags, Tier};
use tracing::{debug, warn};

/// Derives the enabled [`FeatureFlags`] from the override store and the license check.
#[derive(Debug, Clone)]
pub struct FeatureResolver<S, C> {
    store: S,
    check: C,
}

impl<S, C> FeatureResolver<S, C>
where
    S: OverrideStore,
    C: LicenseCheck,
{
    pub const fn new(store: S, check: C) -> Self {
        Self { store, check }
    }

    /// Whether this installation is Pro.
    pub async fn is_pro_user(&self) -> bool {
        match self.store.read_override().await {
            Ok(OverrideState::Enabled) => {
                debug!("Pro override is on, skipping license check");
                return true;
            },
            Ok(OverrideState::Invalid(raw)) => {
                warn!(value = %raw, "Ignoring non-boolean Pro override");
            },
            Ok(OverrideState::Absent | OverrideState::Disabled) => {},
            Err(e) => {
                warn!(error = %e, "Could not read Pro override, assuming none");
            },
        }

        match self.check.check().await {
            Ok(status) => {
                debug!(is_pro = status.is_pro, "License check completed");
                status.is_pro
            },
            Err(e) => {
                warn!(error = %e, "License check failed, falling back to free tier");
                false
            },
        }
    }

    /// The tier derived from [`Self::is_pro_user`].
    pub async fn tier(&self) -> Tier {
        Tier::from(self.is_pro_user().await)
    }

    /// [`FeatureFlags::PRO`] for Pro users, [`FeatureFlags::FREE`] otherwise.
    pub async fn feature_flags(&self) -> FeatureFlags {
        self.tier().await.flags()
    }

    /// Whether `feature` is enabled for this user.
    pub async fn can_use_feature(&self, feature: FeatureFlag) -> bool {
        self.feature_flags().await.enabled(feature)
    }

    /// Shorthand for `can_use_feature(FeatureFlag::CloudSync)`.
    pub async fn can_use_cloud_sync(&self) -> bool {
        self.can_use_feature(FeatureFlag::CloudSync).await
    }

    pub const fn store(&self) -> &S {
        &self.store
    }

    pub const fn license_check(&self) -> &C {
        &self.check
    }
}
