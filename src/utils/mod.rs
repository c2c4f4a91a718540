//! Utility modules for common patterns.

pub mod signal_ext;
pub mod timing;

pub use signal_ext::SignalExt;
