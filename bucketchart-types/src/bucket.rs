//! Buckets and measures - the nodes of the backend's aggregation tree.
//!
//! A bucket is either a *leaf* carrying measures, a *branch* carrying nested
//! group-by buckets, or an empty data point carrying neither. The helpers in
//! this module read a bucket the same way regardless of which it is, and
//! never fail: missing data reads as `0` or as the bucket key.

use crate::timestamp::format_epoch_millis;

/// A named numeric observation attached to a bucket.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Measure {
    /// Aggregation name, e.g. `COUNT` or `AVG`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,

    /// Observed value.
    pub value: f64,
}

impl Measure {
    /// Create a new measure.
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// A node in the aggregation tree.
///
/// `key` is the stable machine identifier; `name` is an optional human label
/// that takes precedence over `key` for display. `timestamp` (epoch
/// milliseconds) is present only on time-slot buckets.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bucket {
    /// Stable machine identifier.
    #[cfg_attr(feature = "serde", serde(default))]
    pub key: String,

    /// Optional display label.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub name: Option<String>,

    /// Time-slot identity in epoch milliseconds.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub timestamp: Option<f64>,

    /// Measures carried by a leaf bucket.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Vec::is_empty"))]
    pub measures: Vec<Measure>,

    /// Nested group-by buckets carried by a branch bucket.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Vec::is_empty"))]
    pub buckets: Vec<Bucket>,
}

impl Bucket {
    /// Create an empty bucket with the given key.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Default::default()
        }
    }

    /// Create a builder for a bucket with the given key.
    pub fn builder(key: impl Into<String>) -> BucketBuilder {
        BucketBuilder::new(key)
    }

    /// True if this bucket has at least one measure.
    pub fn has_measures(&self) -> bool {
        !self.measures.is_empty()
    }

    /// True if this bucket has nested group-by buckets.
    pub fn is_branch(&self) -> bool {
        !self.buckets.is_empty()
    }

    /// True if this bucket carries neither measures nor nested buckets.
    pub fn is_blank(&self) -> bool {
        self.measures.is_empty() && self.buckets.is_empty()
    }

    /// Value of the first measure, if any.
    pub fn first_measure(&self) -> Option<f64> {
        self.measures.first().map(|m| m.value)
    }

    /// See [`display_name`].
    pub fn display_name(&self) -> &str {
        display_name(self)
    }

    /// See [`primary_value`].
    pub fn primary_value(&self) -> f64 {
        primary_value(self)
    }

    /// See [`time_label`].
    pub fn time_label(&self) -> String {
        time_label(self)
    }
}

/// Human label of a bucket: its `name` when non-empty, otherwise its `key`.
///
/// Returns an empty string when both are empty.
pub fn display_name(bucket: &Bucket) -> &str {
    match bucket.name.as_deref() {
        Some(name) if !name.is_empty() => name,
        _ => &bucket.key,
    }
}

/// The single number a bucket contributes to a chart.
///
/// The first measure wins. A bucket without measures contributes the sum of
/// its children's primary values, recursively. A blank bucket contributes `0`.
pub fn primary_value(bucket: &Bucket) -> f64 {
    if let Some(value) = bucket.first_measure() {
        return value;
    }
    bucket.buckets.iter().map(primary_value).sum()
}

/// True iff the first bucket of the sequence has nested group-by buckets.
///
/// This only inspects the first element. Use it as a quick hint; callers
/// that need a reliable answer must look at every bucket.
pub fn has_grouped_children(buckets: &[Bucket]) -> bool {
    buckets.first().is_some_and(Bucket::is_branch)
}

/// Label of a time-slot bucket.
///
/// A finite timestamp renders as ISO-8601 UTC. Anything else (absent,
/// non-finite, out of range) falls back to [`display_name`].
pub fn time_label(bucket: &Bucket) -> String {
    bucket
        .timestamp
        .and_then(format_epoch_millis)
        .unwrap_or_else(|| String::from(display_name(bucket)))
}

// ============================================================================
// Builders
// ============================================================================

/// Builder for `Bucket`.
#[derive(Debug, Default)]
pub struct BucketBuilder {
    bucket: Bucket,
}

impl BucketBuilder {
    /// Create a new builder.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            bucket: Bucket::new(key),
        }
    }

    /// Set the display name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.bucket.name = Some(name.into());
        self
    }

    /// Set the time-slot timestamp (epoch milliseconds).
    pub fn timestamp(mut self, millis: f64) -> Self {
        self.bucket.timestamp = Some(millis);
        self
    }

    /// Append a measure.
    pub fn measure(mut self, name: impl Into<String>, value: f64) -> Self {
        self.bucket.measures.push(Measure::new(name, value));
        self
    }

    /// Append a nested bucket built using a closure.
    pub fn bucket<F>(mut self, key: impl Into<String>, f: F) -> Self
    where
        F: FnOnce(BucketBuilder) -> BucketBuilder,
    {
        self.bucket.buckets.push(f(BucketBuilder::new(key)).build());
        self
    }

    /// Append a pre-built nested bucket.
    pub fn child(mut self, bucket: Bucket) -> Self {
        self.bucket.buckets.push(bucket);
        self
    }

    /// Build the bucket.
    pub fn build(self) -> Bucket {
        self.bucket
    }
}
