//! Legacy histogram projector.
//!
//! The legacy layout carries dense `data` arrays and a `from`/`interval`
//! time axis. Rather than projecting it with a second algorithm, it is
//! folded into the bucket model and handed to the [`TimeSeriesProjector`]:
//!
//! ```text
//! values[v].buckets[s].data[i]  ──▶  metrics[v].buckets[i]            (time slot)
//!                                      .timestamp = from + i * interval
//!                                      .buckets[s].measures[0]        (one aggregation)
//!                                    or .measures[0] from buckets[0]  (several aggregations)
//! ```
//!
//! With one aggregation every series is its own dataset, named from the
//! metadata or the series name. With several, each aggregation is one
//! dataset named after the aggregation, read from its first series.
//!
//! Series shorter than the longest one leave blank slots, which project as
//! zeros.

use bucketchart_types::{
    Bucket, ChartSeries, HistogramResponse, HistogramValue, Measure, Metric, TimeSeriesResponse,
};
use tracing::debug;

use crate::{BucketProjector, ProjectionError, ProjectorConfig, TimeSeriesProjector};

/// Projects legacy [`HistogramResponse`]s through the time-series projector.
#[derive(Debug, Clone, Default)]
pub struct HistogramProjector {
    inner: TimeSeriesProjector,
}

impl HistogramProjector {
    /// Create a projector with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a projector with the given configuration.
    pub fn with_config(config: ProjectorConfig) -> Self {
        Self {
            inner: TimeSeriesProjector::with_config(config),
        }
    }
}

impl BucketProjector for HistogramProjector {
    type Response = HistogramResponse;

    fn project(&self, response: &HistogramResponse) -> Result<ChartSeries, ProjectionError> {
        let converted = to_time_series(response);
        debug!(
            aggregations = response.values.len(),
            slots = response.slot_count(),
            "converted legacy histogram"
        );
        self.inner.project(&converted)
    }
}

/// Fold a legacy histogram into the bucket model.
///
/// Each aggregation becomes one metric named after the aggregation. Every
/// metric gets the same number of slots: the longest series in the response.
/// Series become groups exactly when the response has one aggregation.
pub fn to_time_series(response: &HistogramResponse) -> TimeSeriesResponse {
    let slots = response.slot_count();
    let grouped = response.values.len() == 1;
    let metrics = response
        .values
        .iter()
        .map(|value| to_metric(response, value, slots, grouped))
        .collect();
    TimeSeriesResponse { metrics }
}

fn to_metric(
    response: &HistogramResponse,
    value: &HistogramValue,
    slots: usize,
    grouped: bool,
) -> Metric {
    let mut metric = Metric::new(value.series_name());

    for index in 0..slots {
        let start = response.timestamp.slot_start(index);
        let mut slot = Bucket::new(start.to_string());
        slot.timestamp = Some(start as f64);

        if grouped {
            for series in &value.buckets {
                let Some(point) = series.data.get(index) else {
                    continue;
                };
                let mut group = Bucket::new(series.name.as_str());
                group.name = value.metadata_name(&series.name).map(str::to_owned);
                group.measures.push(Measure::new(value.field.as_str(), *point));
                slot.buckets.push(group);
            }
        } else if let Some(point) = value.buckets.first().and_then(|s| s.data.get(index)) {
            slot.measures.push(Measure::new(value.field.as_str(), *point));
        }

        metric.buckets.push(slot);
    }

    metric
}
