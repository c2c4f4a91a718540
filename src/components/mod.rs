//! UI components for the Firmscope application.
//!
//! # Component Architecture
//!
//! - `app_shell`: AppBar, Footer
//! - `search`: SearchBar, HistoryPanel, ResultsSection
//! - `snackbar`: dismissible transient failure notice
//!
//! The root [`App`] component owns the whole [`Session`] inside a signal
//! and hands the presentation components cloned snapshots plus callback
//! handles. Nothing below `App` holds state of its own.
//!
//! # Context Providers
//!
//! Components use Dioxus context for shared state:
//!
//! ```ignore
//! // Session signal from any component
//! let session = use_session();
//!
//! // Dispatch a search from an event handler
//! use_search_task().send(SearchMessage::Submit);
//! ```

mod app_shell;
pub mod search;
mod snackbar;

pub use app_shell::{AppBar, Footer};
pub use search::{HistoryPanel, ResultsSection, SearchBar};
pub use snackbar::Snackbar;

use std::time::Duration;

use dioxus::logger::tracing::{error, info};
use dioxus::prelude::*;
use futures_channel::mpsc::UnboundedReceiver;
use futures_util::StreamExt;

use crate::api;
use crate::session::{HistoryEntry, Session};
use crate::utils::{timing, SignalExt};

/// Messages for the search coroutine
pub enum SearchMessage {
    Submit,
}

/// How long a failure notice stays up before auto-dismissal.
const NOTICE_TTL: Duration = Duration::from_secs(6);

/// Session state context provider
pub fn use_session() -> Signal<Session> {
    use_context::<Signal<Session>>()
}

/// Search coroutine context provider
pub fn use_search_task() -> Coroutine<SearchMessage> {
    use_context::<Coroutine<SearchMessage>>()
}

#[component]
pub fn App() -> Element {
    let mut session = use_signal(Session::new);
    use_context_provider(|| session);

    // Search coroutine - every submit flows through here, one at a time
    let search_task = use_coroutine({
        let mut session = session;
        move |mut rx: UnboundedReceiver<SearchMessage>| async move {
            while let Some(msg) = rx.next().await {
                match msg {
                    SearchMessage::Submit => {
                        let mut accepted = false;
                        session.mutate(|s| accepted = s.begin_search());
                        if !accepted {
                            // A request is already in flight; this submit is dropped.
                            info!("submit ignored: search already in flight");
                            continue;
                        }

                        // Capture the query as dispatched; the input stays
                        // editable while the request is in flight.
                        let query = session.read().query.clone();
                        info!("searching for company '{}'", query);

                        match api::search_company(&query).await {
                            Ok(results) => {
                                info!("search completed: {} fields", results.len());
                                session.mutate(|s| s.complete_search(query, results));
                            }
                            Err(e) => {
                                error!("search failed: {}", e);
                                let mut seq = 0;
                                session.mutate(|s| seq = s.fail_search());

                                // Auto-dismiss, unless a newer notice replaced this one.
                                spawn(async move {
                                    timing::sleep(NOTICE_TTL).await;
                                    session.mutate(|s| s.dismiss_notice_if(seq));
                                });
                            }
                        }
                    }
                }
            }
        }
    });
    use_context_provider(|| search_task);

    let snapshot = session.read().clone();
    let app_class = if snapshot.mode.is_dark() {
        "fs-app fs-app--dark"
    } else {
        "fs-app"
    };

    rsx! {
        div { class: app_class,
            AppBar {}

            main { class: "fs-main",
                HistoryPanel {
                    history: snapshot.history.clone(),
                    on_select: move |entry: HistoryEntry| {
                        session.mutate(|s| s.select_history_entry(&entry));
                    },
                }

                section { class: "fs-content",
                    h1 { class: "fs-page-title", "Company research" }

                    SearchBar {
                        query: snapshot.query.clone(),
                        loading: snapshot.loading,
                        on_input: move |text: String| session.mutate(|s| s.update_query(text)),
                        on_submit: move |_| search_task.send(SearchMessage::Submit),
                        on_toggle_mode: move |_| session.mutate(|s| s.toggle_display_mode()),
                    }

                    if snapshot.loading {
                        div { class: "fs-spinner", "aria-label": "Loading results" }
                    }

                    ResultsSection { results: snapshot.results.clone() }

                    if let Some(message) = snapshot.notice.clone() {
                        Snackbar {
                            message,
                            on_dismiss: move |_| session.mutate(|s| s.dismiss_notice()),
                        }
                    }
                }
            }

            Footer {}
        }
    }
}
