//! Runtime settings for the scanner binary.
//!
//! The scanner takes no flags, so everything here comes from the
//! environment:
//!
//! - `WLP4SCAN_LOG` (falls back to `RUST_LOG`): tracing filter directive
//! - `WLP4SCAN_LOG_FORMAT`: `text` (default) or `json`
//! - `WLP4SCAN_TERSE_ERRORS`: print a bare `ERROR` line on failure
//!
//! Log output always goes to stderr so stdout carries only tokens.

pub mod config;
pub mod logging;
