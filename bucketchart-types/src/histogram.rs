//! Legacy histogram layout.
//!
//! Older analytics endpoints return time series as dense arrays instead of
//! time-slot buckets: one `data` array per series, with the time axis given
//! once as `from` + `interval`. These types describe that layout so it can be
//! folded into the bucket model.

use std::collections::BTreeMap;

/// Time axis of a histogram: slot `i` starts at `from + i * interval`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HistogramTimestamp {
    /// Start of the first slot, epoch milliseconds.
    pub from: i64,

    /// End of the queried range, epoch milliseconds.
    #[cfg_attr(feature = "serde", serde(default))]
    pub to: i64,

    /// Slot width in milliseconds.
    pub interval: i64,
}

impl HistogramTimestamp {
    /// Start of slot `index`, epoch milliseconds.
    pub fn slot_start(&self, index: usize) -> i64 {
        let index = i64::try_from(index).unwrap_or(i64::MAX);
        self.from
            .saturating_add(index.saturating_mul(self.interval))
    }
}

/// One dense series.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HistogramBucket {
    /// Series identity (e.g. an application id, or `all`).
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,

    /// One value per time slot.
    #[cfg_attr(feature = "serde", serde(default))]
    pub data: Vec<f64>,
}

/// Display metadata for a series identity.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BucketMetadata {
    /// Human-readable name.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub name: Option<String>,
}

/// One aggregation of a histogram response.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HistogramValue {
    /// Aggregated field, e.g. `gateway-response-time-ms`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub field: String,

    /// Aggregation name, e.g. `avg_gateway-response-time-ms`.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub name: Option<String>,

    /// Series of this aggregation, one per value of the grouping field.
    #[cfg_attr(feature = "serde", serde(default))]
    pub buckets: Vec<HistogramBucket>,

    /// Display metadata keyed by series identity.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "BTreeMap::is_empty"))]
    pub metadata: BTreeMap<String, BucketMetadata>,
}

impl HistogramValue {
    /// The aggregation's display name: `name` when non-empty, else `field`.
    pub fn series_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => &self.field,
        }
    }

    /// Metadata display name for a series identity, if any.
    pub fn metadata_name(&self, identity: &str) -> Option<&str> {
        self.metadata
            .get(identity)
            .and_then(|m| m.name.as_deref())
            .filter(|name| !name.is_empty())
    }

    /// Length of the longest series.
    pub fn slot_count(&self) -> usize {
        self.buckets.iter().map(|b| b.data.len()).max().unwrap_or(0)
    }
}

/// A histogram response in the legacy dense layout.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HistogramResponse {
    /// Shared time axis.
    pub timestamp: HistogramTimestamp,

    /// Aggregations in request order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub values: Vec<HistogramValue>,
}

impl HistogramResponse {
    /// Number of time slots: the longest series across all aggregations.
    pub fn slot_count(&self) -> usize {
        self.values
            .iter()
            .map(HistogramValue::slot_count)
            .max()
            .unwrap_or(0)
    }
}
