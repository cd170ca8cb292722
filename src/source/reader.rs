//! Reader-based response source.
//!
//! Reads a single analytics response from any `Read` implementation,
//! typically stdin.

use std::fmt;
use std::io::{self, Read};

use bucketchart_projectors::AnalyticsResponse;

use super::ResponseSource;

/// A one-shot source that reads a response from a reader.
///
/// The reader is consumed on the first poll; later polls return `None`.
///
/// # Example
///
/// ```
/// use std::io::Cursor;
/// use bucketchart::{ReaderSource, ResponseSource};
///
/// let mut source = ReaderSource::new(Cursor::new(r#"{ "metrics": [] }"#), "inline");
/// assert!(source.poll().is_some());
/// assert!(source.poll().is_none());
/// ```
pub struct ReaderSource<R> {
    reader: Option<R>,
    description: String,
    last_error: Option<String>,
}

impl<R: Read> ReaderSource<R> {
    /// Create a source reading from `reader`.
    pub fn new(reader: R, source_description: &str) -> Self {
        Self {
            reader: Some(reader),
            description: format!("reader: {}", source_description),
            last_error: None,
        }
    }
}

impl ReaderSource<io::Stdin> {
    /// Create a source reading from standard input.
    pub fn stdin() -> Self {
        Self::new(io::stdin(), "stdin")
    }
}

impl<R> fmt::Debug for ReaderSource<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReaderSource")
            .field("description", &self.description)
            .field("consumed", &self.reader.is_none())
            .field("last_error", &self.last_error)
            .finish()
    }
}

impl<R: Read> ResponseSource for ReaderSource<R> {
    fn poll(&mut self) -> Option<AnalyticsResponse> {
        let mut reader = self.reader.take()?;

        let mut content = String::new();
        if let Err(e) = reader.read_to_string(&mut content) {
            self.last_error = Some(format!("Read error: {}", e));
            return None;
        }

        match AnalyticsResponse::from_json(&content) {
            Ok(response) => {
                self.last_error = None;
                Some(response)
            }
            Err(e) => {
                self.last_error = Some(format!("Parse error: {}", e));
                None
            }
        }
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}
