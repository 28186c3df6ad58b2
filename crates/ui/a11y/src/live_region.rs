use crate::semantics::{Politeness, aria_atomic};
use dioxus::prelude::*;

/// A region whose content changes are announced without moving focus.
///
/// * `priority`: [`Politeness::Polite`] waits for the user to be idle,
///   [`Politeness::Assertive`] interrupts.
/// * `atomic`: re-read the whole region on change (default) instead of only the diff.
/// * `id`: optional element id, omitted when empty.
#[component]
pub fn LiveRegion(
    #[props(default)] priority: Politeness,
    #[props(default = true)] atomic: bool,
    #[props(into, default)] id: String,
    children: Element,
) -> Element {
    let id = (!id.is_empty()).then_some(id);

    rsx! {
        div {
            id,
            role: priority.role(),
            "aria-live": priority.aria_live(),
            "aria-atomic": aria_atomic(atomic),
            {children}
        }
    }
}
