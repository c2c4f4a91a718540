//! Extension trait for Dioxus signals to reduce mutation boilerplate.
//!
//! Every session transition is a single mutation of one owned value. The
//! raw signal API makes each of those three lines (read-clone, mutate,
//! write back); `SignalExt::mutate` collapses the pattern so event handlers
//! and the search coroutine read as one expression:
//!
//! ```ignore
//! session.mutate(|s| s.toggle_display_mode());
//!
//! session.mutate(|s| s.complete_search(query, results));
//! ```

use dioxus::prelude::*;

/// Mutation helper for `Signal<T>`.
pub trait SignalExt<T: Clone + 'static> {
    /// Clones the current value, applies `f`, and writes the result back,
    /// notifying subscribers once.
    fn mutate<F>(&mut self, f: F)
    where
        F: FnOnce(&mut T);
}

impl<T: Clone + 'static> SignalExt<T> for Signal<T> {
    fn mutate<F>(&mut self, f: F)
    where
        F: FnOnce(&mut T),
    {
        let mut value = self.read().clone();
        f(&mut value);
        self.set(value);
    }
}

// Note: Tests for SignalExt are omitted because they require a Dioxus
// runtime. The method is a thin wrapper around Signal::read()/Signal::set(),
// which are already tested by Dioxus.
