//! Facet projector.
//!
//! Converts a non-temporal bucketed response (one bucket per category) into
//! category labels plus one dataset, for pie, doughnut and polar-area charts.
//!
//! A category bucket without any measure is dropped from both the labels
//! and the data, never zero-filled, so the two stay in lock-step.

use std::collections::HashMap;

use bucketchart_types::{display_name, ChartSeries, Dataset, FacetsResponse, Metric};
use tracing::{debug, trace, warn};

use crate::{BucketProjector, ProjectionError, ProjectorConfig};

/// Projects [`FacetsResponse`]s for category charts. Projection never fails.
#[derive(Debug, Clone, Default)]
pub struct FacetProjector {
    config: ProjectorConfig,
}

impl FacetProjector {
    /// Create a projector with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a projector with the given configuration.
    pub fn with_config(config: ProjectorConfig) -> Self {
        Self { config }
    }
}

impl BucketProjector for FacetProjector {
    type Response = FacetsResponse;

    fn project(&self, response: &FacetsResponse) -> Result<ChartSeries, ProjectionError> {
        let series = match response.metrics.as_slice() {
            [] => ChartSeries::new(Vec::new(), vec![Dataset::new(Vec::new())]),
            [metric] => project_single(metric),
            [first, rest @ ..] if !self.config.supports_multiple_metrics => {
                warn!(
                    metric = %first.name,
                    ignored = rest.len(),
                    "facet chart renders only the first metric"
                );
                project_single(first)
            }
            metrics => project_multiple(metrics),
        };

        debug!(
            categories = series.labels.len(),
            datasets = series.datasets.len(),
            "projected facets"
        );
        Ok(series)
    }
}

fn project_single(metric: &Metric) -> ChartSeries {
    let mut labels = Vec::with_capacity(metric.len());
    let mut data = Vec::with_capacity(metric.len());

    for bucket in &metric.buckets {
        match bucket.first_measure() {
            Some(value) => {
                labels.push(display_name(bucket).to_owned());
                data.push(value);
            }
            None => trace!(key = %bucket.key, "dropping category without measures"),
        }
    }

    ChartSeries::new(labels, vec![Dataset::new(data)])
}

/// One labelled dataset per metric over the union of their categories.
fn project_multiple(metrics: &[Metric]) -> ChartSeries {
    let mut labels: Vec<String> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut values: Vec<Vec<(usize, f64)>> = Vec::with_capacity(metrics.len());

    for metric in metrics {
        let mut observed = Vec::with_capacity(metric.len());
        for bucket in &metric.buckets {
            let Some(value) = bucket.first_measure() else {
                trace!(metric = %metric.name, key = %bucket.key, "dropping category without measures");
                continue;
            };
            let category = display_name(bucket);
            let position = *index.entry(category).or_insert_with(|| {
                labels.push(category.to_owned());
                labels.len() - 1
            });
            observed.push((position, value));
        }
        values.push(observed);
    }

    let datasets = metrics
        .iter()
        .zip(values)
        .map(|(metric, observed)| {
            let mut dataset = Dataset::zeroed(metric.name.as_str(), labels.len());
            for (position, value) in observed {
                dataset.data[position] = value;
            }
            dataset
        })
        .collect();

    ChartSeries::new(labels, datasets)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_codes(name: &str, counts: &[(&str, Option<f64>)]) -> Metric {
        counts
            .iter()
            .fold(Metric::builder(name), |m, (key, count)| {
                m.bucket(*key, |b| match count {
                    Some(v) => b.name(*key).measure("COUNT", *v),
                    None => b.name(*key),
                })
            })
            .build()
    }

    fn project(response: &FacetsResponse) -> ChartSeries {
        FacetProjector::new().project(response).unwrap()
    }

    #[test]
    fn empty_response_yields_one_empty_dataset() {
        let series = project(&FacetsResponse::new());
        assert!(series.labels.is_empty());
        assert_eq!(series.datasets, vec![Dataset::new(Vec::new())]);
    }

    #[test]
    fn categories_in_bucket_order() {
        let response = FacetsResponse::builder()
            .push(status_codes("HTTP_REQUESTS", &[("2xx", Some(100.0)), ("4xx", Some(10.0))]))
            .build();

        let series = project(&response);
        assert_eq!(series.labels, ["2xx", "4xx"]);
        assert_eq!(series.datasets, vec![Dataset::new(vec![100.0, 10.0])]);
        assert!(series.datasets[0].label.is_none());
    }

    #[test]
    fn bucket_without_measures_is_dropped_in_pairs() {
        let response = FacetsResponse::builder()
            .push(status_codes("HTTP_REQUESTS", &[("x", Some(1.0)), ("y", None), ("z", Some(3.0))]))
            .build();

        let series = project(&response);
        assert_eq!(series.labels, ["x", "z"]);
        assert_eq!(series.datasets[0].data, vec![1.0, 3.0]);
        assert!(series.is_rectangular());
    }

    #[test]
    fn nested_buckets_do_not_stand_in_for_measures() {
        let response = FacetsResponse::builder()
            .metric("HTTP_REQUESTS", |m| {
                m.bucket("grouped", |b| b.bucket("inner", |i| i.measure("COUNT", 4.0)))
                    .bucket("leaf", |b| b.measure("COUNT", 2.0))
            })
            .build();

        let series = project(&response);
        assert_eq!(series.labels, ["leaf"]);
        assert_eq!(series.datasets[0].data, vec![2.0]);
    }

    #[test]
    fn label_falls_back_to_key() {
        let response = FacetsResponse::builder()
            .metric("HTTP_REQUESTS", |m| m.bucket("GET", |b| b.measure("COUNT", 5.0)))
            .build();

        assert_eq!(project(&response).labels, ["GET"]);
    }

    #[test]
    fn only_first_metric_by_default() {
        let response = FacetsResponse::builder()
            .push(status_codes("FIRST", &[("a", Some(1.0))]))
            .push(status_codes("SECOND", &[("b", Some(2.0))]))
            .build();

        let series = project(&response);
        assert_eq!(series.labels, ["a"]);
        assert_eq!(series.datasets.len(), 1);
    }

    #[test]
    fn multiple_metrics_share_zero_filled_categories() {
        let response = FacetsResponse::builder()
            .push(status_codes("TODAY", &[("2xx", Some(90.0)), ("5xx", Some(10.0))]))
            .push(status_codes("YESTERDAY", &[("4xx", Some(3.0)), ("2xx", Some(80.0)), ("5xx", None)]))
            .build();

        let projector = FacetProjector::with_config(ProjectorConfig::new().with_multiple_metrics(true));
        let series = projector.project(&response).unwrap();

        assert_eq!(series.labels, ["2xx", "5xx", "4xx"]);
        assert_eq!(
            series.datasets,
            vec![
                Dataset::labelled("TODAY", vec![90.0, 10.0, 0.0]),
                Dataset::labelled("YESTERDAY", vec![80.0, 0.0, 3.0]),
            ]
        );
    }

    #[test]
    fn multiple_metrics_flag_with_single_metric_is_unchanged() {
        let response = FacetsResponse::builder()
            .push(status_codes("HTTP_REQUESTS", &[("x", Some(1.0)), ("y", None)]))
            .build();

        let projector = FacetProjector::with_config(ProjectorConfig::new().with_multiple_metrics(true));
        assert_eq!(projector.project(&response).unwrap(), project(&response));
    }

    #[test]
    fn projection_is_deterministic() {
        let response = FacetsResponse::builder()
            .push(status_codes("HTTP_REQUESTS", &[("x", Some(1.0)), ("y", None), ("z", Some(3.0))]))
            .build();
        assert_eq!(project(&response), project(&response));
    }
}
