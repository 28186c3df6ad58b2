use crate::semantics::{DialogRole, DialogSemantics, dismiss_on_escape};
use dioxus::prelude::*;

/// A modal dialog.
///
/// Renders nothing while `open` is false. When open, the container is labelled by
/// `title_id`, optionally described by `description_id`, and named by `title`. Escape runs
/// `on_close` and suppresses the browser's default handling.
#[component]
pub fn Dialog(
    open: bool,
    #[props(into)] title: String,
    #[props(into)] title_id: String,
    #[props(into, default)] description_id: String,
    on_close: Option<EventHandler>,
    children: Element,
) -> Element {
    let semantics =
        DialogSemantics::resolve(open, DialogRole::Dialog, &title, &title_id, &description_id);
    render_modal(semantics, on_close, children)
}

/// A modal that interrupts the user and needs an immediate answer (e.g. destructive confirms).
///
/// Same contract as [`Dialog`], except the role is `alertdialog` and a description is mandatory.
#[component]
pub fn AlertDialog(
    open: bool,
    #[props(into)] title: String,
    #[props(into)] title_id: String,
    #[props(into)] description_id: String,
    on_close: Option<EventHandler>,
    children: Element,
) -> Element {
    let semantics =
        DialogSemantics::resolve(open, DialogRole::AlertDialog, &title, &title_id, &description_id);
    render_modal(semantics, on_close, children)
}

fn render_modal(
    semantics: Option<DialogSemantics>,
    on_close: Option<EventHandler>,
    children: Element,
) -> Element {
    let Some(DialogSemantics { role, labelled_by, described_by, label }) = semantics else {
        return rsx! {};
    };

    rsx! {
        div {
            class: "raft-dialog",
            role: role.as_str(),
            tabindex: "-1",
            "aria-modal": "true",
            "aria-labelledby": labelled_by,
            "aria-describedby": described_by,
            "aria-label": label,
            onkeydown: move |evt: KeyboardEvent| {
                let outcome = dismiss_on_escape(&evt.key(), || {
                    if let Some(handler) = on_close {
                        handler.call(());
                    }
                });
                if outcome.prevents_default() {
                    evt.prevent_default();
                }
            },
            {children}
        }
    }
}
