//! Session state for the Firmscope application.
//!
//! One owned value, [`Session`], holds everything the page can display:
//! the query text, the currently shown results, the search history, the
//! in-flight flag, the failure notice, and the display mode. Every state
//! transition is a synchronous method on `Session`; the UI layer owns the
//! value inside a signal and applies transitions through it. Presentation
//! components only ever see cloned snapshots.
//!
//! A search moves through `Idle -> Loading -> {Success, Failure} -> Idle`:
//! [`Session::begin_search`] enters Loading, and exactly one of
//! [`Session::complete_search`] or [`Session::fail_search`] leaves it.
//! There is no cancelled state; a dispatched request runs to settlement.

use indexmap::IndexMap;

/// User-facing notice shown when the outbound search call fails, whatever
/// the underlying cause.
pub const FETCH_FAILED_NOTICE: &str = "Failed fetching data. Please try again.";

/// Labeled findings for one company, in the order the server sent them.
pub type ResultSet = IndexMap<String, String>;

/// A past search: the query as dispatched and the results it produced.
#[derive(Clone, Debug, PartialEq)]
pub struct HistoryEntry {
    pub company_name: String,
    pub results: ResultSet,
}

/// Light/dark presentation toggle. Session-scoped, never persisted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DisplayMode {
    #[default]
    Light,
    Dark,
}

impl DisplayMode {
    /// The other mode. Toggling twice returns the original.
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

/// All mutable state for one page session.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    /// Current search text. Replaced verbatim on every input event and
    /// never reset, so it survives a submit.
    pub query: String,
    /// Findings currently on screen, freshly fetched or recalled from
    /// history. Replaced wholesale, never merged.
    pub results: ResultSet,
    /// Past successful searches, newest first. Unbounded; lost on reload.
    pub history: Vec<HistoryEntry>,
    /// True strictly between request dispatch and its resolution.
    pub loading: bool,
    /// Failure notice, if one is up.
    pub notice: Option<String>,
    /// Bumped each time a notice is raised, so a stale auto-dismiss timer
    /// cannot clear a newer notice.
    notice_seq: u64,
    pub mode: DisplayMode,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the query text unconditionally. Empty input is permitted;
    /// no trimming or other transformation happens here.
    pub fn update_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
    }

    /// Enters the Loading state. Returns `false` without changing anything
    /// when a request is already in flight: additional submissions while
    /// one is outstanding are ignored, not queued.
    pub fn begin_search(&mut self) -> bool {
        if self.loading {
            return false;
        }
        self.loading = true;
        true
    }

    /// Records a successful search. `query` is the text as dispatched, not
    /// the current input (the user may have kept typing mid-flight).
    /// Prepends the history entry, replaces the displayed results, and
    /// leaves the Loading state.
    pub fn complete_search(&mut self, query: String, results: ResultSet) {
        self.history.insert(
            0,
            HistoryEntry {
                company_name: query,
                results: results.clone(),
            },
        );
        self.results = results;
        self.loading = false;
    }

    /// Records a failed search: raises the fixed notice and leaves the
    /// Loading state. Displayed results and history are untouched. Returns
    /// the notice sequence number for [`Session::dismiss_notice_if`].
    pub fn fail_search(&mut self) -> u64 {
        self.notice = Some(FETCH_FAILED_NOTICE.to_string());
        self.notice_seq += 1;
        self.loading = false;
        self.notice_seq
    }

    /// Redisplays a past result set. Query, history, loading flag, notice,
    /// and display mode are all left alone; this cannot fail.
    pub fn select_history_entry(&mut self, entry: &HistoryEntry) {
        self.results = entry.results.clone();
    }

    pub fn toggle_display_mode(&mut self) {
        self.mode = self.mode.toggled();
    }

    /// Clears the notice. Idempotent.
    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Clears the notice only if `seq` still names the current one. The
    /// auto-dismiss timer goes through here so it cannot clobber a notice
    /// raised by a later failure.
    pub fn dismiss_notice_if(&mut self, seq: u64) {
        if self.notice_seq == seq {
            self.notice = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result_set(pairs: &[(&str, &str)]) -> ResultSet {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_update_query_replaces_verbatim() {
        let mut session = Session::new();
        session.update_query("Acme");
        session.update_query("  Acme Corp  ");
        assert_eq!(session.query, "  Acme Corp  ");
        session.update_query("");
        assert_eq!(session.query, "");
    }

    #[test]
    fn test_begin_search_enters_loading_once() {
        let mut session = Session::new();
        assert!(session.begin_search());
        assert!(session.loading);
        // Second submit while in flight is ignored at the data level.
        assert!(!session.begin_search());
        assert!(session.loading);
    }

    #[test]
    fn test_complete_search_prepends_history_and_clears_loading() {
        let mut session = Session::new();
        session.update_query("Acme");
        assert!(session.begin_search());

        let results = result_set(&[("Revenue", "$1M")]);
        session.complete_search("Acme".to_string(), results.clone());

        assert!(!session.loading);
        assert_eq!(session.results, results);
        assert_eq!(session.history.len(), 1);
        assert_eq!(session.history[0].company_name, "Acme");
        assert_eq!(session.history[0].results, results);
        // Query persists after submit.
        assert_eq!(session.query, "Acme");
    }

    #[test]
    fn test_complete_search_records_query_as_dispatched() {
        let mut session = Session::new();
        session.update_query("Acme");
        assert!(session.begin_search());
        // User keeps typing while the request is in flight.
        session.update_query("Acme Corp");

        session.complete_search("Acme".to_string(), result_set(&[("Revenue", "$1M")]));

        assert_eq!(session.history[0].company_name, "Acme");
        assert_eq!(session.query, "Acme Corp");
    }

    #[test]
    fn test_history_is_newest_first() {
        let mut session = Session::new();
        session.begin_search();
        session.complete_search("First".to_string(), result_set(&[("A", "1")]));
        session.begin_search();
        session.complete_search("Second".to_string(), result_set(&[("B", "2")]));

        assert_eq!(session.history.len(), 2);
        assert_eq!(session.history[0].company_name, "Second");
        assert_eq!(session.history[1].company_name, "First");
    }

    #[test]
    fn test_fail_search_preserves_results_and_history() {
        let mut session = Session::new();
        session.begin_search();
        session.complete_search("Acme".to_string(), result_set(&[("Revenue", "$1M")]));
        let before = session.clone();

        session.update_query("Acme");
        assert!(session.begin_search());
        session.fail_search();

        assert!(!session.loading);
        assert_eq!(session.notice.as_deref(), Some(FETCH_FAILED_NOTICE));
        assert_eq!(session.results, before.results);
        assert_eq!(session.history, before.history);
    }

    #[test]
    fn test_select_history_entry_replaces_results_only() {
        let mut session = Session::new();
        session.begin_search();
        session.complete_search("First".to_string(), result_set(&[("A", "1")]));
        session.begin_search();
        session.complete_search("Second".to_string(), result_set(&[("B", "2")]));

        let older = session.history[1].clone();
        let history_before = session.history.clone();
        session.update_query("typing");

        session.select_history_entry(&older);

        assert_eq!(session.results, older.results);
        assert_eq!(session.history, history_before);
        assert_eq!(session.query, "typing");
        assert!(!session.loading);
        assert_eq!(session.notice, None);
    }

    #[test]
    fn test_toggle_display_mode_is_involution() {
        let mut session = Session::new();
        assert_eq!(session.mode, DisplayMode::Light);
        session.toggle_display_mode();
        assert_eq!(session.mode, DisplayMode::Dark);
        assert!(session.mode.is_dark());
        session.toggle_display_mode();
        assert_eq!(session.mode, DisplayMode::Light);
    }

    #[test]
    fn test_dismiss_notice_is_idempotent() {
        let mut session = Session::new();
        session.dismiss_notice();
        assert_eq!(session.notice, None);

        session.begin_search();
        session.fail_search();
        session.dismiss_notice();
        assert_eq!(session.notice, None);
        session.dismiss_notice();
        assert_eq!(session.notice, None);
    }

    #[test]
    fn test_stale_auto_dismiss_keeps_newer_notice() {
        let mut session = Session::new();
        session.begin_search();
        let first = session.fail_search();

        // A second failure raises a fresh notice before the first timer fires.
        session.begin_search();
        let second = session.fail_search();

        session.dismiss_notice_if(first);
        assert_eq!(session.notice.as_deref(), Some(FETCH_FAILED_NOTICE));

        session.dismiss_notice_if(second);
        assert_eq!(session.notice, None);
    }

    #[test]
    fn test_search_failure_scenario() {
        let mut session = Session::new();
        session.begin_search();
        session.complete_search("Initech".to_string(), result_set(&[("Sector", "Software")]));
        let results_before = session.results.clone();

        session.update_query("Acme");
        assert!(session.begin_search());
        session.fail_search();

        assert_eq!(session.results, results_before);
        assert_eq!(session.notice.as_deref(), Some(FETCH_FAILED_NOTICE));
        assert!(!session.loading);
        assert_eq!(session.history.len(), 1);
    }
}
