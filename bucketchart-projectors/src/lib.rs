//! # bucketchart-projectors
//!
//! Projectors that turn bucketed API analytics responses into flat,
//! renderer-agnostic chart series.
//!
//! ## Projectors
//!
//! - [`TimeSeriesProjector`] - time-slot buckets, optionally grouped, into
//!   one label per slot and one dataset per metric or per group
//! - [`FacetProjector`] - category buckets into one label per category and a
//!   single dataset
//! - [`HistogramProjector`] - the legacy dense histogram layout, folded into
//!   the bucket model and projected as a time series
//!
//! All three implement [`BucketProjector`]. [`Projection`] picks one from the
//! chart kind and the detected payload layout.
//!
//! ## Quick Start
//!
//! ```rust
//! use bucketchart_projectors::{BucketProjector, TimeSeriesProjector};
//! use bucketchart_types::TimeSeriesResponse;
//!
//! let response = TimeSeriesResponse::builder()
//!     .metric("HTTP_REQUESTS", |m| {
//!         m.bucket("t1", |b| b.measure("COUNT", 10.0))
//!             .bucket("t2", |b| b.measure("COUNT", 20.0))
//!     })
//!     .build();
//!
//! let chart = TimeSeriesProjector::new().project(&response)?;
//! assert_eq!(chart.labels, ["t1", "t2"]);
//! assert_eq!(chart.datasets[0].data, [10.0, 20.0]);
//! # Ok::<(), bucketchart_projectors::ProjectionError>(())
//! ```

pub mod axis;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod facets;
pub mod histogram;
pub mod projector;
pub mod shape;
pub mod timeseries;

pub use axis::TimeAxis;
pub use config::{AxisCheck, ProjectorConfig};
pub use dispatch::{AnalyticsResponse, ChartKind, Projection};
pub use error::ProjectionError;
pub use facets::FacetProjector;
pub use histogram::HistogramProjector;
pub use projector::BucketProjector;
pub use shape::MetricShape;
pub use timeseries::TimeSeriesProjector;

// Re-export types for convenience
pub use bucketchart_types::{
    Bucket, ChartSeries, Dataset, FacetsResponse, HistogramResponse, Measure, Metric,
    TimeSeriesResponse,
};
