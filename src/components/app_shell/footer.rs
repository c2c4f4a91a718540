use dioxus::prelude::*;

/// Footer with session-only messaging
#[component]
pub fn Footer() -> Element {
    rsx! {
        footer { class: "fs-footer",
            span { class: "fs-footer-text",
                "Session-only • History and results are discarded when the page closes."
            }
        }
    }
}
