//! Time-series projector.
//!
//! Converts a multi-metric, time-bucketed response into a label axis (one
//! label per time slot) plus one dataset per simple metric and one dataset
//! per group of each grouped metric.
//!
//! ## Projection
//!
//! ```text
//! metric "HTTP_REQUESTS" (grouped)        labels:   t1   t2
//!   t1: [A=5, B=7]                  ──▶    A:       5    9
//!   t2: [A=9]                              B:       7    0   (zero-fill)
//! ```
//!
//! Every dataset has exactly one value per label. A group absent from a slot
//! reads as `0` at that slot.

use std::collections::HashMap;

use bucketchart_types::{display_name, primary_value, ChartSeries, Dataset, Metric, TimeSeriesResponse};
use tracing::debug;

use crate::{BucketProjector, MetricShape, ProjectionError, ProjectorConfig, TimeAxis};

/// Projects [`TimeSeriesResponse`]s for line, area and bar charts.
#[derive(Debug, Clone, Default)]
pub struct TimeSeriesProjector {
    config: ProjectorConfig,
}

impl TimeSeriesProjector {
    /// Create a projector with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a projector with the given configuration.
    pub fn with_config(config: ProjectorConfig) -> Self {
        Self { config }
    }
}

impl BucketProjector for TimeSeriesProjector {
    type Response = TimeSeriesResponse;

    fn project(&self, response: &TimeSeriesResponse) -> Result<ChartSeries, ProjectionError> {
        let Some(reference) = response.first_populated() else {
            debug!(metrics = response.metrics.len(), "no time slots to project");
            return Ok(ChartSeries::empty());
        };

        let axis = TimeAxis::of(reference);
        let mut datasets = Vec::new();

        for metric in &response.metrics {
            let shape = MetricShape::classify(metric)?;
            if shape == MetricShape::Empty {
                debug!(metric = %metric.name, "skipping metric without buckets");
                continue;
            }

            axis.check(metric, self.config.axis_check)?;

            if shape == MetricShape::Grouped {
                datasets.extend(project_grouped(metric, axis.len()));
            } else {
                datasets.push(project_simple(metric, axis.len()));
            }
        }

        debug!(
            labels = axis.len(),
            datasets = datasets.len(),
            "projected time series"
        );
        Ok(ChartSeries::new(axis.into_labels(), datasets))
    }
}

fn project_simple(metric: &Metric, slots: usize) -> Dataset {
    let mut data: Vec<f64> = metric.buckets.iter().take(slots).map(primary_value).collect();
    data.resize(slots, 0.0);
    Dataset::labelled(metric.name.as_str(), data)
}

fn project_grouped(metric: &Metric, slots: usize) -> Vec<Dataset> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut datasets: Vec<Dataset> = Vec::new();

    for (slot, bucket) in metric.buckets.iter().take(slots).enumerate() {
        for group in &bucket.buckets {
            let identity = display_name(group);
            let position = *index.entry(identity).or_insert_with(|| {
                datasets.push(Dataset::zeroed(identity, slots));
                datasets.len() - 1
            });
            // Last bucket wins when a group repeats within one slot.
            datasets[position].data[slot] = primary_value(group);
        }
    }

    datasets
}
