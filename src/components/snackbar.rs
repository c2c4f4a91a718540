use dioxus::prelude::*;

/// Dismissible transient notice for failed searches.
///
/// Rendered only while a notice is up; the controller also auto-dismisses
/// it after a fixed delay.
#[component]
pub fn Snackbar(message: String, on_dismiss: EventHandler<()>) -> Element {
    rsx! {
        div { class: "fs-snackbar", role: "alert",
            span { class: "fs-snackbar-text", "{message}" }
            button {
                class: "fs-snackbar-dismiss",
                onclick: move |_| on_dismiss.call(()),
                "aria-label": "Dismiss notice",
                "\u{2715}" // Unicode X
            }
        }
    }
}
