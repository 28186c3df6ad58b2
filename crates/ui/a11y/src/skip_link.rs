use crate::visually_hidden::VisuallyHidden;
use dioxus::prelude::*;

/// Element id the skip link jumps to unless told otherwise.
pub const DEFAULT_SKIP_TARGET: &str = "main-content";

/// Link text unless told otherwise.
pub const DEFAULT_SKIP_LABEL: &str = "Skip to main content";

/// A link that lets keyboard users jump straight to `target`.
///
/// Hidden until focused, so it is the first Tab stop without cluttering the layout.
#[component]
pub fn SkipLink(
    #[props(into, default = DEFAULT_SKIP_TARGET.to_owned())] target: String,
    #[props(into, default = DEFAULT_SKIP_LABEL.to_owned())] label: String,
) -> Element {
    let href = format!("#{}", target.trim_start_matches('#'));

    rsx! {
        VisuallyHidden { focusable: true,
            a { class: "raft-skip-link", href, "{label}" }
        }
    }
}
