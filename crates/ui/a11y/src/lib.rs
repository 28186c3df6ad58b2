//! # Accessibility Primitives
//!
//! Stateless Dioxus components that give the popup correct assistive-technology semantics.
//! None of them own state or timers: every render is a pure function of the props, and
//! mounting/unmounting is entirely up to the caller.
//!
//! * [`VisuallyHidden`]: text for screen readers only, optionally revealed on focus.
//! * [`LiveRegion`]: announces content changes politely or assertively.
//! * [`SkipLink`]: lets keyboard users jump past repeated navigation.
//! * [`Dialog`] / [`AlertDialog`]: modal containers that render nothing while closed and
//!   dismiss on Escape.
//!
//! The attribute decisions live in [`semantics`] so they can be tested without a renderer.
//! Render [`A11yStyles`] once near the root so the `raft-sr-only` classes take effect.

mod dialog;
mod live_region;
pub mod semantics;
mod skip_link;
mod visually_hidden;

pub use dialog::{AlertDialog, Dialog};
pub use live_region::LiveRegion;
pub use semantics::{DialogRole, DialogSemantics, KeyOutcome, Politeness, dismiss_on_escape};
pub use skip_link::{DEFAULT_SKIP_LABEL, DEFAULT_SKIP_TARGET, SkipLink};
pub use visually_hidden::{A11Y_STYLESHEET, A11yStyles, VisuallyHidden};
