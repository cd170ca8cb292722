//! Response source abstraction for receiving analytics payloads.
//!
//! This module provides a trait-based abstraction for receiving saved or
//! piped analytics responses (files, stdin, any reader).

mod file;
mod reader;

pub use file::FileSource;
pub use reader::ReaderSource;

use std::fmt::Debug;

use bucketchart_projectors::AnalyticsResponse;

/// Trait for receiving analytics responses from various sources.
///
/// # Example
///
/// ```
/// use bucketchart::{FileSource, ResponseSource};
///
/// let mut source = FileSource::new("response.json");
/// if let Some(response) = source.poll() {
///     println!("Got a {} response", response.kind());
/// }
/// ```
pub trait ResponseSource: Debug {
    /// Poll for the latest response.
    ///
    /// Returns `Some(response)` if new data is available, `None` otherwise.
    /// This method should not block beyond reading what is already there.
    fn poll(&mut self) -> Option<AnalyticsResponse>;

    /// Returns a human-readable description of the source.
    fn description(&self) -> &str;

    /// Check if the source has encountered an error.
    ///
    /// Returns the error message if an error occurred during the last poll.
    fn error(&self) -> Option<&str>;
}
