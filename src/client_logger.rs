//! Logging trait for Gemini client operations.
//!
//! This module provides the [`ClientLogger`] trait that allows users to capture
//! and log every exchange passing through the [`GeminiClient`](crate::GeminiClient).

use crate::Error;

/// A trait for logging Gemini client operations.
///
/// # Example
///
/// ```rust,ignore
/// use chatquiz::{ClientLogger, Error};
/// use std::io::Write;
/// use std::sync::Mutex;
///
/// struct FileLogger {
///     file: Mutex<std::fs::File>,
/// }
///
/// impl ClientLogger for FileLogger {
///     fn log_request(&self, input: &str) {
///         let mut file = self.file.lock().unwrap();
///         writeln!(file, "> {input}").unwrap();
///     }
///
///     fn log_response(&self, text: &str) {
///         let mut file = self.file.lock().unwrap();
///         writeln!(file, "< {text}").unwrap();
///     }
///
///     fn log_error(&self, error: &Error) {
///         let mut file = self.file.lock().unwrap();
///         writeln!(file, "! {error}").unwrap();
///     }
/// }
/// ```
pub trait ClientLogger: Send + Sync {
    /// Log the user utterance about to be sent.
    ///
    /// Called only when the request is actually attempted, so never for
    /// configuration errors.
    fn log_request(&self, input: &str);

    /// Log the (already truncated) reply text of a successful call.
    fn log_response(&self, text: &str);

    /// Log any error the call returns, including configuration errors.
    fn log_error(&self, error: &Error);
}
