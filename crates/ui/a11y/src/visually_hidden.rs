use crate::semantics::visually_hidden_class;
use dioxus::prelude::*;

/// Rules backing the `raft-sr-only` classes.
///
/// Content stays in the accessibility tree but occupies a clipped 1px box. The focusable
/// variant drops the clipping while the element or one of its children has focus.
pub const A11Y_STYLESHEET: &str = "\
.raft-sr-only{position:absolute;width:1px;height:1px;padding:0;margin:-1px;overflow:hidden;\
clip:rect(0,0,0,0);white-space:nowrap;border:0}\
.raft-sr-only-focusable:focus,.raft-sr-only-focusable:focus-within{position:static;width:auto;\
height:auto;margin:0;overflow:visible;clip:auto;white-space:normal}";

/// Injects [`A11Y_STYLESHEET`]. Render once per document.
#[component]
pub fn A11yStyles() -> Element {
    rsx! {
        style { {A11Y_STYLESHEET} }
    }
}

/// Hides `children` visually while keeping them readable by assistive technology.
///
/// With `focusable`, the content becomes visible while it holds keyboard focus, which is
/// what skip links need.
#[component]
pub fn VisuallyHidden(#[props(default)] focusable: bool, children: Element) -> Element {
    rsx! {
        span { class: visually_hidden_class(focusable), {children} }
    }
}
