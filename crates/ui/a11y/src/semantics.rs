//! Renderer-independent attribute and keyboard decisions.

use dioxus::prelude::Key;

/// Class applied to content that is hidden visually but kept in the accessibility tree.
pub const SR_ONLY_CLASS: &str = "raft-sr-only";

/// Additional class that reveals [`SR_ONLY_CLASS`] content while it has keyboard focus.
pub const SR_ONLY_FOCUSABLE_CLASS: &str = "raft-sr-only-focusable";

/// Class list for visually hidden content.
#[must_use]
pub const fn visually_hidden_class(focusable: bool) -> &'static str {
    if focusable { "raft-sr-only raft-sr-only-focusable" } else { SR_ONLY_CLASS }
}

/// How urgently a live region is announced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Politeness {
    /// Wait until the user is idle.
    #[default]
    Polite,
    /// Interrupt whatever is being read.
    Assertive,
}

impl Politeness {
    /// Value of `aria-live`.
    #[must_use]
    pub const fn aria_live(self) -> &'static str {
        match self {
            Self::Polite => "polite",
            Self::Assertive => "assertive",
        }
    }

    /// Implicit ARIA role matching the politeness.
    #[must_use]
    pub const fn role(self) -> &'static str {
        match self {
            Self::Polite => "status",
            Self::Assertive => "alert",
        }
    }
}

/// Value of `aria-atomic`: whether the whole region is re-read on any change.
#[must_use]
pub const fn aria_atomic(atomic: bool) -> &'static str {
    if atomic { "true" } else { "false" }
}

/// Role exposed by a modal container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogRole {
    Dialog,
    /// An interruption that needs an immediate answer.
    AlertDialog,
}

impl DialogRole {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dialog => "dialog",
            Self::AlertDialog => "alertdialog",
        }
    }
}

/// Attributes of an open dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogSemantics {
    pub role: DialogRole,
    /// `aria-labelledby`
    pub labelled_by: String,
    /// `aria-describedby`, omitted when `None`.
    pub described_by: Option<String>,
    /// `aria-label`
    pub label: String,
}

impl DialogSemantics {
    /// Resolves the attributes for a dialog, or `None` while it is closed.
    ///
    /// An empty `description_id` counts as absent.
    #[must_use]
    pub fn resolve(
        open: bool,
        role: DialogRole,
        title: &str,
        title_id: &str,
        description_id: &str,
    ) -> Option<Self> {
        if !open {
            return None;
        }

        let described_by =
            (!description_id.trim().is_empty()).then(|| description_id.trim().to_owned());

        Some(Self {
            role,
            labelled_by: title_id.to_owned(),
            described_by,
            label: title.to_owned(),
        })
    }
}

/// What a dialog did with a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Escape: the close callback ran and the default action must be suppressed.
    Dismissed,
    /// Any other key: left alone.
    Ignored,
}

impl KeyOutcome {
    #[must_use]
    pub const fn prevents_default(self) -> bool {
        matches!(self, Self::Dismissed)
    }
}

/// Runs `on_close` once if `key` is Escape.
pub fn dismiss_on_escape(key: &Key, on_close: impl FnOnce()) -> KeyOutcome {
    if *key == Key::Escape {
        on_close();
        KeyOutcome::Dismissed
    } else {
        KeyOutcome::Ignored
    }
}
