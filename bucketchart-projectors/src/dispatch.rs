//! Response-shape detection and chart-kind dispatch.
//!
//! The caller knows which chart it is about to draw; the payload tells us
//! which layout the backend used. Together they select exactly one
//! projector:
//!
//! ```text
//!                     ┌───────────────┬──────────────────────┐
//!                     │ temporal chart│ category chart       │
//! ┌───────────────────┼───────────────┼──────────────────────┤
//! │ bucket response   │ TimeSeries    │ Facet                │
//! │ legacy histogram  │ Histogram     │ UnsupportedChart     │
//! └───────────────────┴───────────────┴──────────────────────┘
//! ```

use std::fmt;
use std::str::FromStr;

use bucketchart_types::{BucketResponse, ChartSeries, HistogramResponse};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    BucketProjector, FacetProjector, HistogramProjector, ProjectionError, ProjectorConfig,
    TimeSeriesProjector,
};

/// The kind of chart a projection is rendered into.
///
/// Serializes as its kebab-case name. Deserializes through [`FromStr`], so
/// config values accept the same spellings as the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", try_from = "String")]
pub enum ChartKind {
    /// Line chart over time slots.
    Line,
    /// Filled line chart over time slots.
    Area,
    /// Bar chart over time slots.
    Bar,
    /// Pie chart of categories.
    Pie,
    /// Pie chart with a hollow centre.
    Doughnut,
    /// Radial chart of categories.
    PolarArea,
}

impl ChartKind {
    /// All chart kinds.
    pub const ALL: [ChartKind; 6] = [
        ChartKind::Line,
        ChartKind::Area,
        ChartKind::Bar,
        ChartKind::Pie,
        ChartKind::Doughnut,
        ChartKind::PolarArea,
    ];

    /// True for charts drawn along a time axis.
    pub fn is_temporal(&self) -> bool {
        matches!(self, ChartKind::Line | ChartKind::Area | ChartKind::Bar)
    }

    /// Canonical name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartKind::Line => "line",
            ChartKind::Area => "area",
            ChartKind::Bar => "bar",
            ChartKind::Pie => "pie",
            ChartKind::Doughnut => "doughnut",
            ChartKind::PolarArea => "polar-area",
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for ChartKind {
    type Error = ProjectionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl FromStr for ChartKind {
    type Err = ProjectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        match normalized.as_str() {
            "line" => Ok(ChartKind::Line),
            "area" => Ok(ChartKind::Area),
            "bar" => Ok(ChartKind::Bar),
            "pie" => Ok(ChartKind::Pie),
            "doughnut" | "donut" => Ok(ChartKind::Doughnut),
            "polar-area" | "polararea" | "polar" => Ok(ChartKind::PolarArea),
            _ => Err(ProjectionError::UnknownChart(s.to_string())),
        }
    }
}

/// A decoded analytics payload in one of the supported layouts.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalyticsResponse {
    /// `{ "metrics": [...] }` - time-series or facets.
    Buckets(BucketResponse),
    /// `{ "timestamp": {...}, "values": [...] }` - legacy dense histogram.
    Histogram(HistogramResponse),
}

impl AnalyticsResponse {
    /// Detect the layout of a JSON payload and decode it.
    ///
    /// Objects carrying both `timestamp` and `values` are legacy histograms.
    /// Any other object is a bucket response; a missing `metrics` field
    /// decodes as no metrics.
    pub fn detect(value: Value) -> Result<Self, ProjectionError> {
        let Value::Object(map) = &value else {
            return Err(ProjectionError::UnrecognizedShape(format!(
                "expected a JSON object, found {}",
                json_type(&value)
            )));
        };

        if map.contains_key("timestamp") && map.contains_key("values") {
            Ok(AnalyticsResponse::Histogram(serde_json::from_value(value)?))
        } else {
            Ok(AnalyticsResponse::Buckets(serde_json::from_value(value)?))
        }
    }

    /// Parse and detect a JSON document.
    pub fn from_json(json: &str) -> Result<Self, ProjectionError> {
        Self::detect(serde_json::from_str(json)?)
    }

    /// Short name of the layout, for logs and errors.
    pub fn kind(&self) -> &'static str {
        match self {
            AnalyticsResponse::Buckets(_) => "bucket",
            AnalyticsResponse::Histogram(_) => "histogram",
        }
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Selects and runs the projector for a chart kind and payload layout.
///
/// # Example
///
/// ```rust
/// use bucketchart_projectors::{AnalyticsResponse, ChartKind, Projection};
///
/// let response = AnalyticsResponse::from_json(r#"{
///     "metrics": [{
///         "name": "HTTP_REQUESTS",
///         "buckets": [
///             { "key": "2xx", "measures": [{ "name": "COUNT", "value": 100 }] },
///             { "key": "5xx", "measures": [{ "name": "COUNT", "value": 3 }] }
///         ]
///     }]
/// }"#)?;
///
/// let chart = Projection::default().project(ChartKind::Pie, &response)?;
/// assert_eq!(chart.labels, ["2xx", "5xx"]);
/// assert_eq!(chart.datasets[0].data, [100.0, 3.0]);
/// # Ok::<(), bucketchart_projectors::ProjectionError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Projection {
    time_series: TimeSeriesProjector,
    facets: FacetProjector,
    histogram: HistogramProjector,
}

impl Projection {
    /// Create a dispatcher whose projectors share one configuration.
    pub fn new(config: ProjectorConfig) -> Self {
        Self {
            time_series: TimeSeriesProjector::with_config(config.clone()),
            facets: FacetProjector::with_config(config.clone()),
            histogram: HistogramProjector::with_config(config),
        }
    }

    /// Project `response` for a `chart`.
    pub fn project(
        &self,
        chart: ChartKind,
        response: &AnalyticsResponse,
    ) -> Result<ChartSeries, ProjectionError> {
        match (response, chart.is_temporal()) {
            (AnalyticsResponse::Buckets(r), true) => self.time_series.project(r),
            (AnalyticsResponse::Buckets(r), false) => self.facets.project(r),
            (AnalyticsResponse::Histogram(r), true) => self.histogram.project(r),
            (AnalyticsResponse::Histogram(_), false) => Err(ProjectionError::UnsupportedChart {
                chart: chart.to_string(),
                response: response.kind(),
            }),
        }
    }
}
