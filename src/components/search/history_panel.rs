use dioxus::prelude::*;

use crate::session::HistoryEntry;

/// Ordered list of past searches, newest first.
///
/// Selecting an entry asks the controller to redisplay that entry's
/// results; the list itself is never reordered or mutated here.
#[component]
pub fn HistoryPanel(history: Vec<HistoryEntry>, on_select: EventHandler<HistoryEntry>) -> Element {
    rsx! {
        aside { class: "fs-history",
            h2 { class: "fs-history-title", "Search History" }
            if history.is_empty() {
                p { class: "fs-history-empty", "No search history" }
            } else {
                ul { class: "fs-history-list",
                    for (idx, entry) in history.into_iter().enumerate() {
                        HistoryItem { key: "{idx}", entry, on_select }
                    }
                }
            }
        }
    }
}

/// Single history row. Forwards the full entry on click.
#[component]
fn HistoryItem(entry: HistoryEntry, on_select: EventHandler<HistoryEntry>) -> Element {
    let entry_for_click = entry.clone();
    rsx! {
        li { class: "fs-history-item",
            button {
                class: "fs-history-link",
                onclick: move |_| on_select.call(entry_for_click.clone()),
                "{entry.company_name}"
            }
        }
    }
}
