//! # Logging Module
//!
//! This module provides logging utilities for gl:
//! - Verbose logging that can be enabled/disabled
//! - Quiet mode for the messages printed by [`output`](crate::output)
//! - Tracing subscriber setup for diagnostics
//!
//! Verbose logs go to stderr, so the license text printed by `--dry-run` can
//! still be piped cleanly.
//!
//! ## Example
//!
//! ```rust
//! use gl_license::logging::{ColorMode, set_verbose};
//! use gl_license::verbose_log;
//!
//! set_verbose();
//! ColorMode::Auto.apply();
//!
//! // Goes to stderr
//! verbose_log!("Resolved output path: {}", "/tmp/LICENSE");
//! ```

mod modes;

pub use modes::{ColorMode, default_directive, init_tracing, is_quiet, is_verbose, set_quiet, set_verbose};

/// Logs a message to stderr if verbose mode is enabled.
///
/// Uses the same format string syntax as [`eprintln!`].
#[macro_export]
macro_rules! verbose_log {
    ($($arg:tt)*) => {
        if $crate::logging::is_verbose() {
            eprintln!($($arg)*);
        }
    };
}
