use bitflags::bitflags;
use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use strum::{EnumCount, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

/// A single gated product capability.
///
/// The set is closed: adding a capability means adding a variant here, a bit in
/// [`FeatureFlags`], and deciding which tier unlocks it.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    EnumIter,
    EnumCount,
    EnumString,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub enum FeatureFlag {
    // ── Free ──────────────────────────────────────────────────
    SaveSessions,
    OrganizeTabs,
    ImportExport,
    KeyboardShortcuts,

    // ── Pro ───────────────────────────────────────────────────
    CloudSync,
    UnlimitedSessions,
}

impl FeatureFlag {
    /// Slug used in config files, CLI arguments and logs (e.g. `cloudSync`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// Lowest tier that unlocks this capability.
    #[must_use]
    pub const fn min_tier(self) -> Tier {
        match self {
            Self::SaveSessions
            | Self::OrganizeTabs
            | Self::ImportExport
            | Self::KeyboardShortcuts => Tier::Free,
            Self::CloudSync | Self::UnlimitedSessions => Tier::Pro,
        }
    }

    /// Short human-readable label for upgrade prompts.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::SaveSessions => "Save sessions",
            Self::OrganizeTabs => "Organize tabs",
            Self::ImportExport => "Import and export",
            Self::KeyboardShortcuts => "Keyboard shortcuts",
            Self::CloudSync => "Cloud sync",
            Self::UnlimitedSessions => "Unlimited sessions",
        }
    }

    /// Iterates every capability in declaration order.
    pub fn all() -> impl Iterator<Item = Self> {
        Self::iter()
    }
}

impl fmt::Display for FeatureFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

bitflags! {
    /// The resolved capability switches for one user.
    ///
    /// Serialized as a record with one boolean per [`FeatureFlag`] slug, so the
    /// UI always sees every key.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct FeatureFlags: u32 {
        const SAVE_SESSIONS = 1 << 0;
        const ORGANIZE_TABS = 1 << 1;
        const IMPORT_EXPORT = 1 << 2;
        const KEYBOARD_SHORTCUTS = 1 << 3;
        const CLOUD_SYNC = 1 << 4;
        const UNLIMITED_SESSIONS = 1 << 5;

        const FREE = Self::SAVE_SESSIONS.bits()
            | Self::ORGANIZE_TABS.bits()
            | Self::IMPORT_EXPORT.bits()
            | Self::KEYBOARD_SHORTCUTS.bits();
        const PRO = Self::FREE.bits() | Self::CLOUD_SYNC.bits() | Self::UNLIMITED_SESSIONS.bits();
    }
}

impl From<FeatureFlag> for FeatureFlags {
    fn from(flag: FeatureFlag) -> Self {
        match flag {
            FeatureFlag::SaveSessions => Self::SAVE_SESSIONS,
            FeatureFlag::OrganizeTabs => Self::ORGANIZE_TABS,
            FeatureFlag::ImportExport => Self::IMPORT_EXPORT,
            FeatureFlag::KeyboardShortcuts => Self::KEYBOARD_SHORTCUTS,
            FeatureFlag::CloudSync => Self::CLOUD_SYNC,
            FeatureFlag::UnlimitedSessions => Self::UNLIMITED_SESSIONS,
        }
    }
}

impl FromIterator<FeatureFlag> for FeatureFlags {
    fn from_iter<I: IntoIterator<Item = FeatureFlag>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), |acc, flag| acc | Self::from(flag))
    }
}

impl FeatureFlags {
    /// Returns `true` if `flag` is switched on.
    #[must_use]
    pub fn enabled(self, flag: FeatureFlag) -> bool {
        self.contains(flag.into())
    }

    /// Every capability paired with its switch, in declaration order.
    pub fn entries(self) -> impl Iterator<Item = (FeatureFlag, bool)> {
        FeatureFlag::iter().map(move |flag| (flag, self.enabled(flag)))
    }
}

impl Serialize for FeatureFlags {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(FeatureFlag::COUNT))?;
        for (flag, on) in self.entries() {
            map.serialize_entry(flag.as_str(), &on)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for FeatureFlags {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct FlagsVisitor;

        impl<'de> Visitor<'de> for FlagsVisitor {
            type Value = FeatureFlags;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of feature slugs to booleans")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut flags = FeatureFlags::empty();
                while let Some((key, on)) = access.next_entry::<String, bool>()? {
                    let flag = FeatureFlag::from_str(&key)
                        .map_err(|_| de::Error::unknown_field(&key, FIELD_NAMES))?;
                    flags.set(flag.into(), on);
                }
                Ok(flags)
            }
        }

        deserializer.deserialize_map(FlagsVisitor)
    }
}

const FIELD_NAMES: &[&str] = &[
    "saveSessions",
    "organizeTabs",
    "importExport",
    "keyboardShortcuts",
    "cloudSync",
    "unlimitedSessions",
];

/// Licensing tier of a user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    #[default]
    Free,
    Pro,
}

impl Tier {
    /// The static flag set unlocked by this tier.
    #[must_use]
    pub const fn flags(self) -> FeatureFlags {
        match self {
            Self::Free => FeatureFlags::FREE,
            Self::Pro => FeatureFlags::PRO,
        }
    }

    #[must_use]
    pub const fn is_pro(self) -> bool {
        matches!(self, Self::Pro)
    }
}

impl From<bool> for Tier {
    fn from(is_pro: bool) -> Self {
        if is_pro { Self::Pro } else { Self::Free }
    }
}

impl FromStr for Tier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "free" => Ok(Self::Free),
            "pro" => Ok(Self::Pro),
            other => Err(format!("unknown tier '{other}', expected 'free' or 'pro'")),
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Free => "free",
            Self::Pro => "pro",
        })
    }
}
