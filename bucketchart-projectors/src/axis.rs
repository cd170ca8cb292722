//! Shared time axis of a time-series response.

use bucketchart_types::{time_label, Metric};
use tracing::warn;

use crate::{AxisCheck, ProjectionError};

/// Ordered time-slot labels taken from a reference metric.
///
/// A slot's label doubles as its identity: two slots are the same slot when
/// their labels are equal (same timestamp, or same name/key when the
/// timestamp is unusable).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TimeAxis {
    labels: Vec<String>,
}

impl TimeAxis {
    /// Derive the axis from a metric's top-level buckets, in order.
    pub fn of(metric: &Metric) -> Self {
        Self {
            labels: metric.buckets.iter().map(time_label).collect(),
        }
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// True if the axis has no slots.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Slot labels.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Consume the axis, returning its labels.
    pub fn into_labels(self) -> Vec<String> {
        self.labels
    }

    /// Check that `metric` lies on this axis.
    ///
    /// With [`AxisCheck::Off`] a mismatch is only logged.
    pub fn check(&self, metric: &Metric, mode: AxisCheck) -> Result<(), ProjectionError> {
        if metric.len() != self.len() {
            if mode == AxisCheck::Off {
                warn!(
                    metric = %metric.name,
                    expected = self.len(),
                    found = metric.len(),
                    "time axis length differs, aligning by index"
                );
                return Ok(());
            }
            return Err(ProjectionError::TimeAxisMismatch {
                metric: metric.name.clone(),
                expected: format!("{} slots", self.len()),
                found: format!("{} slots", metric.len()),
            });
        }

        if mode != AxisCheck::Strict {
            return Ok(());
        }

        for (index, (expected, bucket)) in self.labels.iter().zip(&metric.buckets).enumerate() {
            let found = time_label(bucket);
            if *expected != found {
                return Err(ProjectionError::TimeAxisMismatch {
                    metric: metric.name.clone(),
                    expected: format!("slot {index} = {expected}"),
                    found: format!("slot {index} = {found}"),
                });
            }
        }
        Ok(())
    }
}
