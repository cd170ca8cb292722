//! Projection loop state.
//!
//! [`App`] ties a [`ResponseSource`] to a [`Projection`] for one chart kind.
//! Each [`reload`](App::reload) polls the source once and projects whatever
//! arrived.

use anyhow::{anyhow, Result};
use bucketchart_projectors::{ChartKind, Projection};
use bucketchart_types::ChartSeries;
use tracing::{debug, info};

use crate::source::ResponseSource;

/// Polls a response source and projects each new response.
#[derive(Debug)]
pub struct App {
    source: Box<dyn ResponseSource>,
    projection: Projection,
    chart: ChartKind,
    /// Source error already returned to the caller.
    reported_error: Option<String>,
}

impl App {
    /// Create an app projecting responses from `source` for `chart`.
    pub fn new(source: Box<dyn ResponseSource>, projection: Projection, chart: ChartKind) -> Self {
        Self {
            source,
            projection,
            chart,
            reported_error: None,
        }
    }

    /// The chart kind being projected.
    pub fn chart(&self) -> ChartKind {
        self.chart
    }

    /// Description of the underlying source.
    pub fn source_description(&self) -> &str {
        self.source.description()
    }

    /// Poll the source and project a new response, if any.
    ///
    /// Returns `Ok(None)` when nothing new arrived. A source error is
    /// returned once and then suppressed until it changes or clears.
    pub fn reload(&mut self) -> Result<Option<ChartSeries>> {
        let Some(response) = self.source.poll() else {
            return match self.source.error() {
                Some(err) if self.reported_error.as_deref() != Some(err) => {
                    self.reported_error = Some(err.to_owned());
                    Err(anyhow!("{}: {}", self.source.description(), err))
                }
                _ => Ok(None),
            };
        };
        self.reported_error = None;

        debug!(kind = response.kind(), chart = %self.chart, "projecting response");
        let series = self.projection.project(self.chart, &response)?;

        if series.is_blank() {
            info!(chart = %self.chart, "no data to display");
        }
        Ok(Some(series))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{FileSource, ReaderSource};
    use bucketchart_projectors::ProjectionError;
    use std::io::Cursor;

    const FACETS: &str = r#"{
        "metrics": [{
            "name": "HTTP_REQUESTS",
            "buckets": [
                { "key": "2xx", "measures": [{ "name": "COUNT", "value": 100 }] },
                { "key": "5xx", "measures": [{ "name": "COUNT", "value": 3 }] }
            ]
        }]
    }"#;

    fn reader_app(json: &'static str, chart: ChartKind) -> App {
        App::new(
            Box::new(ReaderSource::new(Cursor::new(json), "test")),
            Projection::default(),
            chart,
        )
    }

    #[test]
    fn projects_once_per_response() {
        let mut app = reader_app(FACETS, ChartKind::Pie);
        assert_eq!(app.source_description(), "reader: test");

        let series = app.reload().unwrap().unwrap();
        assert_eq!(series.labels, ["2xx", "5xx"]);
        assert_eq!(series.datasets[0].data, vec![100.0, 3.0]);

        assert!(app.reload().unwrap().is_none());
    }

    #[test]
    fn blank_projection_is_not_an_error() {
        let mut app = reader_app(r#"{ "metrics": [] }"#, ChartKind::Line);
        let series = app.reload().unwrap().unwrap();
        assert!(series.is_blank());
    }

    #[test]
    fn projection_errors_propagate() {
        let mut app = reader_app(
            r#"{ "timestamp": { "from": 0, "to": 10, "interval": 1 }, "values": [] }"#,
            ChartKind::Pie,
        );
        let err = app.reload().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ProjectionError>(),
            Some(ProjectionError::UnsupportedChart { .. })
        ));
    }

    #[test]
    fn source_error_reported_once() {
        let mut app = App::new(
            Box::new(FileSource::new("/nonexistent/response.json")),
            Projection::default(),
            ChartKind::Line,
        );

        let err = app.reload().unwrap_err();
        assert!(err.to_string().contains("Read error"));
        assert!(app.reload().unwrap().is_none());
    }
}
