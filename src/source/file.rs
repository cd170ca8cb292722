//! File-based response source.
//!
//! Polls a JSON file holding an analytics response.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use bucketchart_projectors::AnalyticsResponse;

use super::ResponseSource;

/// A source that reads analytics responses from a JSON file.
///
/// The source tracks the file's modification time and only returns new data
/// when the file has been updated, so a watcher re-projects exactly once per
/// write.
#[derive(Debug)]
pub struct FileSource {
    path: PathBuf,
    description: String,
    last_error: Option<String>,
    last_modified: Option<SystemTime>,
}

impl FileSource {
    /// Create a new file source for the given path.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let description = format!("file: {}", path.display());
        Self {
            path,
            description,
            last_error: None,
            last_modified: None,
        }
    }

    /// Returns the path being read.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn get_modified_time(&self) -> Option<SystemTime> {
        fs::metadata(&self.path).ok()?.modified().ok()
    }

    fn read_file(&mut self) -> Option<AnalyticsResponse> {
        match fs::read_to_string(&self.path) {
            Ok(content) => match AnalyticsResponse::from_json(&content) {
                Ok(response) => {
                    self.last_error = None;
                    Some(response)
                }
                Err(e) => {
                    self.last_error = Some(format!("Parse error: {}", e));
                    None
                }
            },
            Err(e) => {
                self.last_error = Some(format!("Read error: {}", e));
                None
            }
        }
    }
}

impl ResponseSource for FileSource {
    fn poll(&mut self) -> Option<AnalyticsResponse> {
        let current_modified = self.get_modified_time();

        let file_changed = match (&self.last_modified, &current_modified) {
            (None, _) => true,        // First poll, always read
            (Some(_), None) => false, // File disappeared, keep the last output
            (Some(last), Some(current)) => current > last,
        };

        if !file_changed {
            return None;
        }

        let response = self.read_file();
        // A failed read keeps the old mtime so a half-written file is retried.
        if response.is_some() {
            self.last_modified = current_modified;
        }
        response
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn sample_json() -> &'static str {
        r#"{
            "metrics": [{
                "name": "HTTP_REQUESTS",
                "buckets": [
                    { "key": "2xx", "measures": [{ "name": "COUNT", "value": 100 }] }
                ]
            }]
        }"#
    }

    #[test]
    fn test_file_source_new() {
        let source = FileSource::new("/tmp/response.json");
        assert_eq!(source.path(), Path::new("/tmp/response.json"));
        assert_eq!(source.description(), "file: /tmp/response.json");
        assert!(source.error().is_none());
    }

    #[test]
    fn test_file_source_poll_reads_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{}", sample_json()).unwrap();

        let mut source = FileSource::new(file.path());

        // First poll should return data
        let response = source.poll().unwrap();
        assert_eq!(response.kind(), "bucket");

        // Second poll without file change should return None
        assert!(source.poll().is_none());
        assert!(source.error().is_none());
    }

    #[test]
    fn test_file_source_reads_histogram() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"{{ "timestamp": {{ "from": 0, "to": 100, "interval": 10 }}, "values": [] }}"#
        )
        .unwrap();

        let mut source = FileSource::new(file.path());
        assert_eq!(source.poll().unwrap().kind(), "histogram");
    }

    #[test]
    fn test_file_source_missing_file() {
        let mut source = FileSource::new("/nonexistent/path/response.json");

        assert!(source.poll().is_none());
        assert!(source.error().unwrap().contains("Read error"));
    }

    #[test]
    fn test_file_source_invalid_json() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "not valid json").unwrap();

        let mut source = FileSource::new(file.path());

        assert!(source.poll().is_none());
        assert!(source.error().unwrap().contains("Parse error"));
    }

    #[test]
    fn test_file_source_retries_after_parse_error() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{{ \"metrics\": [").unwrap();
        file.flush().unwrap();

        let mut source = FileSource::new(file.path());
        assert!(source.poll().is_none());
        assert!(source.error().unwrap().contains("Parse error"));

        // Completed in place; the mtime may not have moved.
        fs::write(file.path(), sample_json()).unwrap();
        let response = source.poll().unwrap();
        assert_eq!(response.kind(), "bucket");
        assert!(source.error().is_none());

        assert!(source.poll().is_none());
    }

    #[test]
    fn test_file_source_unrecognized_shape() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[1, 2, 3]").unwrap();

        let mut source = FileSource::new(file.path());

        assert!(source.poll().is_none());
        assert!(source.error().unwrap().contains("Unrecognized response shape"));
    }
}
