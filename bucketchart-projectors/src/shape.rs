//! Metric shape classification.
//!
//! A time-series metric is either *simple* (each time slot carries its own
//! measures) or *grouped* (each time slot carries nested group buckets).
//! Every slot is inspected, not just the first, so a metric that mixes both
//! layouts is reported instead of being half-projected.

use bucketchart_types::{has_grouped_children, Bucket, Metric};
use tracing::trace;

use crate::ProjectionError;

/// The projected layout of a metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricShape {
    /// No top-level buckets. Contributes no dataset.
    Empty,
    /// One dataset, one value per slot.
    Simple,
    /// One dataset per group identity.
    Grouped,
}

impl MetricShape {
    /// Classify a metric by looking at all of its top-level buckets.
    ///
    /// Blank slots (neither measures nor nested buckets) agree with either
    /// shape. A metric made only of blank slots is `Simple`.
    pub fn classify(metric: &Metric) -> Result<Self, ProjectionError> {
        if metric.is_empty() {
            return Ok(MetricShape::Empty);
        }

        let mut shape = None;
        for (index, bucket) in metric.buckets.iter().enumerate() {
            let Some(slot_shape) = Self::of_slot(bucket) else {
                continue;
            };
            match shape {
                None => shape = Some(slot_shape),
                Some(current) if current == slot_shape => {}
                Some(_) => {
                    return Err(ProjectionError::InconsistentMetricShape {
                        metric: metric.name.clone(),
                        slot: index,
                    })
                }
            }
        }

        let shape = shape.unwrap_or(MetricShape::Simple);
        if has_grouped_children(&metric.buckets) != (shape == MetricShape::Grouped) {
            trace!(metric = %metric.name, ?shape, "first slot is blank, shape taken from later slots");
        }
        Ok(shape)
    }

    fn of_slot(bucket: &Bucket) -> Option<Self> {
        if bucket.is_branch() {
            Some(MetricShape::Grouped)
        } else if bucket.has_measures() {
            Some(MetricShape::Simple)
        } else {
            None
        }
    }
}
