//! Metrics and the response envelope that carries them.

use crate::{Bucket, BucketBuilder};

/// One measured quantity (e.g. request count), optionally sliced by time
/// and/or group.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metric {
    /// Metric name, e.g. `HTTP_REQUESTS`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,

    /// Top-level buckets: time slots for time-series responses, categories
    /// for facet responses.
    #[cfg_attr(feature = "serde", serde(default))]
    pub buckets: Vec<Bucket>,
}

impl Metric {
    /// Create a metric with no buckets.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            buckets: Vec::new(),
        }
    }

    /// Create a builder for a metric.
    pub fn builder(name: impl Into<String>) -> MetricBuilder {
        MetricBuilder::new(name)
    }

    /// True if the metric has no top-level buckets.
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Number of top-level buckets.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }
}

/// Envelope of a bucketed analytics response.
///
/// The same wire shape serves both time-series and facet queries; the two
/// aliases below name the intended reading.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BucketResponse {
    /// Metrics in request order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub metrics: Vec<Metric>,
}

/// A response whose top-level buckets are time slots.
pub type TimeSeriesResponse = BucketResponse;

/// A response whose top-level buckets are mutually exclusive categories.
pub type FacetsResponse = BucketResponse;

impl BucketResponse {
    /// Create an empty response.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder for a response.
    pub fn builder() -> BucketResponseBuilder {
        BucketResponseBuilder::new()
    }

    /// True if the response has no metrics.
    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }

    /// The first metric with at least one bucket.
    pub fn first_populated(&self) -> Option<&Metric> {
        self.metrics.iter().find(|m| !m.is_empty())
    }
}

// ============================================================================
// Builders
// ============================================================================

/// Builder for `Metric`.
#[derive(Debug, Default)]
pub struct MetricBuilder {
    metric: Metric,
}

impl MetricBuilder {
    /// Create a new builder.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            metric: Metric::new(name),
        }
    }

    /// Append a bucket built using a closure.
    pub fn bucket<F>(mut self, key: impl Into<String>, f: F) -> Self
    where
        F: FnOnce(BucketBuilder) -> BucketBuilder,
    {
        self.metric.buckets.push(f(BucketBuilder::new(key)).build());
        self
    }

    /// Append a pre-built bucket.
    pub fn push(mut self, bucket: Bucket) -> Self {
        self.metric.buckets.push(bucket);
        self
    }

    /// Build the metric.
    pub fn build(self) -> Metric {
        self.metric
    }
}

/// Builder for `BucketResponse`.
#[derive(Debug, Default)]
pub struct BucketResponseBuilder {
    metrics: Vec<Metric>,
}

impl BucketResponseBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a metric built using a closure.
    pub fn metric<F>(mut self, name: impl Into<String>, f: F) -> Self
    where
        F: FnOnce(MetricBuilder) -> MetricBuilder,
    {
        self.metrics.push(f(MetricBuilder::new(name)).build());
        self
    }

    /// Append a pre-built metric.
    pub fn push(mut self, metric: Metric) -> Self {
        self.metrics.push(metric);
        self
    }

    /// Build the response.
    pub fn build(self) -> BucketResponse {
        BucketResponse {
            metrics: self.metrics,
        }
    }
}
