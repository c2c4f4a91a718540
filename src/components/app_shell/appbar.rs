use dioxus::prelude::*;

/// Global app bar with the wordmark and tagline
#[component]
pub fn AppBar() -> Element {
    rsx! {
        header { class: "fs-appbar",
            div { class: "fs-logo",
                span { class: "fs-logo-word", "Firm" }
                span { class: "fs-logo-word fs-logo-word--accent", "scope" }
            }
            span { class: "fs-appbar-tagline", "Company research at a glance" }
        }
    }
}
