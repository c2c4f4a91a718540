//! Firmscope - Single-page company research client.
//!
//! A Dioxus application that submits a company name to a remote research
//! endpoint and renders the returned findings as labeled cards, with a
//! session-only history of past searches and a light/dark display toggle.
//!
//! # Architecture
//!
//! - **Session**: one owned state value holding the query, the displayed
//!   results, the history, the in-flight flag, the failure notice, and the
//!   display mode
//! - **Search coroutine**: every submit flows through a single background
//!   task that issues the one outbound HTTP call
//! - **Presentation**: stateless components fed read-only snapshots plus
//!   callback handles
//!
//! # Platform Support
//!
//! - **Web (WASM)**: primary target, runs in the browser
//! - **Desktop**: webview shell for local use

// Enforce memory safety: forbid all unsafe code
#![forbid(unsafe_code)]

pub mod api;
pub mod components;
pub mod session;
pub mod utils;
