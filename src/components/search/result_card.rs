use dioxus::prelude::*;

use crate::session::ResultSet;

/// Card list for the currently displayed findings.
///
/// One card per field, in the order the server sent them. An empty result
/// set renders nothing at all.
#[component]
pub fn ResultsSection(results: ResultSet) -> Element {
    if results.is_empty() {
        return rsx! {
            Fragment {}
        };
    }

    rsx! {
        section { class: "fs-results",
            for (label, value) in results.iter() {
                ResultCard {
                    key: "{label}",
                    label: label.clone(),
                    value: value.clone(),
                }
            }
        }
    }
}

/// One labeled finding.
#[component]
fn ResultCard(label: String, value: String) -> Element {
    rsx! {
        article { class: "fs-result-card",
            h3 { class: "fs-result-label", "{label}" }
            p { class: "fs-result-value", "{value}" }
        }
    }
}
