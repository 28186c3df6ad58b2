use dioxus::prelude::*;
use raft_a11y::*;

fn render(element: Element) -> String {
    dioxus_ssr::render_element(element)
}

#[test]
fn closed_dialog_renders_nothing() {
    let html = render(rsx! {
        Dialog { open: false, title: "Settings", title_id: "settings-title",
            p { "body" }
        }
    });

    assert!(!html.contains("dialog"), "unexpected output: {html}");
    assert!(!html.contains("body"), "children must not render: {html}");
}

#[test]
fn open_dialog_exposes_modal_semantics() {
    let html = render(rsx! {
        Dialog {
            open: true,
            title: "Settings",
            title_id: "settings-title",
            description_id: "settings-desc",
            h2 { id: "settings-title", "Settings" }
        }
    });

    assert!(html.contains(r#"role="dialog""#), "{html}");
    assert!(html.contains(r#"aria-modal="true""#), "{html}");
    assert!(html.contains(r#"aria-labelledby="settings-title""#), "{html}");
    assert!(html.contains(r#"aria-describedby="settings-desc""#), "{html}");
    assert!(html.contains(r#"aria-label="Settings""#), "{html}");
    assert!(html.contains("<h2"), "{html}");
}

#[test]
fn dialog_without_description_omits_describedby() {
    let html = render(rsx! {
        Dialog { open: true, title: "Export", title_id: "export-title", "Choose a format" }
    });

    assert!(!html.contains("aria-describedby"), "{html}");
    assert!(html.contains("Choose a format"), "{html}");
}

#[test]
fn alert_dialog_uses_alertdialog_role() {
    let html = render(rsx! {
        AlertDialog {
            open: true,
            title: "Delete session?",
            title_id: "confirm-title",
            description_id: "confirm-desc",
            p { id: "confirm-desc", "This cannot be undone." }
        }
    });

    assert!(html.contains(r#"role="alertdialog""#), "{html}");
    assert!(html.contains(r#"aria-describedby="confirm-desc""#), "{html}");
}

#[test]
fn closed_alert_dialog_renders_nothing() {
    let html = render(rsx! {
        AlertDialog {
            open: false,
            title: "Delete session?",
            title_id: "confirm-title",
            description_id: "confirm-desc",
            "This cannot be undone."
        }
    });

    assert!(!html.contains("alertdialog"), "{html}");
}

#[test]
fn live_region_defaults_to_polite_and_atomic() {
    let html = render(rsx! {
        LiveRegion { "3 tabs saved" }
    });

    assert!(html.contains(r#"aria-live="polite""#), "{html}");
    assert!(html.contains(r#"role="status""#), "{html}");
    assert!(html.contains(r#"aria-atomic="true""#), "{html}");
    assert!(html.contains("3 tabs saved"), "{html}");
    assert!(!html.contains("id="), "{html}");
}

#[test]
fn assertive_live_region_interrupts() {
    let html = render(rsx! {
        LiveRegion { priority: Politeness::Assertive, atomic: false, id: "errors", "Sync failed" }
    });

    assert!(html.contains(r#"aria-live="assertive""#), "{html}");
    assert!(html.contains(r#"role="alert""#), "{html}");
    assert!(html.contains(r#"aria-atomic="false""#), "{html}");
    assert!(html.contains(r#"id="errors""#), "{html}");
}

#[test]
fn skip_link_uses_defaults() {
    let html = render(rsx! {
        SkipLink {}
    });

    assert!(html.contains("href=\"#main-content\""), "{html}");
    assert!(html.contains(DEFAULT_SKIP_LABEL), "{html}");
    assert!(html.contains("raft-sr-only-focusable"), "{html}");
}

#[test]
fn skip_link_accepts_custom_target() {
    let html = render(rsx! {
        SkipLink { target: "#session-list", label: "Skip to sessions" }
    });

    assert!(html.contains("href=\"#session-list\""), "{html}");
    assert!(html.contains("Skip to sessions"), "{html}");
}

#[test]
fn visually_hidden_keeps_content_in_markup() {
    let html = render(rsx! {
        VisuallyHidden { "Pro feature" }
    });

    assert!(html.contains(r#"class="raft-sr-only""#), "{html}");
    assert!(html.contains("Pro feature"), "{html}");
}

#[test]
fn stylesheet_defines_both_classes() {
    let html = render(rsx! {
        A11yStyles {}
    });

    assert!(html.contains("<style>"), "{html}");
    assert!(html.contains(".raft-sr-only{"), "{html}");
    assert!(html.contains(".raft-sr-only-focusable:focus"), "{html}");
}
