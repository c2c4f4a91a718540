use dioxus::prelude::*;

/// Search input row with submit and display-mode toggle triggers.
///
/// The input stays editable while a request is in flight; only the Search
/// button is disabled. No validation happens here: an empty query submits.
#[component]
pub fn SearchBar(
    query: String,
    loading: bool,
    on_input: EventHandler<String>,
    on_submit: EventHandler<()>,
    on_toggle_mode: EventHandler<()>,
) -> Element {
    let handle_keypress = move |evt: KeyboardEvent| {
        if evt.key() == Key::Enter && !loading {
            on_submit.call(());
        }
    };

    rsx! {
        div { class: "fs-search-row",
            input {
                class: "fs-search-input",
                r#type: "text",
                placeholder: "Search for a company…",
                value: "{query}",
                oninput: move |evt| on_input.call(evt.value()),
                onkeypress: handle_keypress,
            }
            button {
                class: "fs-btn fs-btn--primary",
                disabled: loading,
                onclick: move |_| on_submit.call(()),
                if loading {
                    "Searching…"
                } else {
                    "Search"
                }
            }
            button {
                class: "fs-btn fs-btn--ghost fs-mode-toggle",
                onclick: move |_| on_toggle_mode.call(()),
                "aria-label": "Toggle dark mode",
                "◐"
            }
        }
    }
}
