//! Chart series - the renderer-agnostic projection output.

/// One named array of values, aligned with [`ChartSeries::labels`].
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dataset {
    /// Series name. Facet charts leave this unset.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub label: Option<String>,

    /// One value per label.
    #[cfg_attr(feature = "serde", serde(default))]
    pub data: Vec<f64>,
}

impl Dataset {
    /// Create an unlabelled dataset.
    pub fn new(data: Vec<f64>) -> Self {
        Self { label: None, data }
    }

    /// Create a labelled dataset.
    pub fn labelled(label: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            label: Some(label.into()),
            data,
        }
    }

    /// Create a labelled dataset of `len` zeros.
    pub fn zeroed(label: impl Into<String>, len: usize) -> Self {
        Self::labelled(label, vec![0.0; len])
    }

    /// Sum of all values.
    pub fn total(&self) -> f64 {
        self.data.iter().sum()
    }
}

/// Ordered labels plus one or more datasets.
///
/// Every dataset holds exactly one value per label, so the structure can be
/// handed to a charting library as-is.
///
/// # Example
///
/// ```rust
/// use bucketchart_types::{ChartSeries, Dataset};
///
/// let series = ChartSeries::new(
///     vec!["t1".into(), "t2".into()],
///     vec![Dataset::labelled("HTTP_REQUESTS", vec![10.0, 20.0])],
/// );
/// assert!(series.is_rectangular());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChartSeries {
    /// Axis labels: time slots or category names.
    #[cfg_attr(feature = "serde", serde(default))]
    pub labels: Vec<String>,

    /// Datasets in projection order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub datasets: Vec<Dataset>,
}

impl ChartSeries {
    /// Create a series from labels and datasets.
    pub fn new(labels: Vec<String>, datasets: Vec<Dataset>) -> Self {
        Self { labels, datasets }
    }

    /// No labels, no datasets.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of labels.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// True if there are no labels.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// True if every dataset has exactly one value per label.
    pub fn is_rectangular(&self) -> bool {
        self.datasets.iter().all(|d| d.data.len() == self.labels.len())
    }

    /// True if there is nothing worth drawing: no datasets, or every value
    /// of every dataset is zero.
    pub fn is_blank(&self) -> bool {
        self.datasets
            .iter()
            .all(|d| d.data.iter().all(|v| *v == 0.0))
    }

    /// Find a dataset by label.
    pub fn dataset(&self, label: &str) -> Option<&Dataset> {
        self.datasets
            .iter()
            .find(|d| d.label.as_deref() == Some(label))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| String::from(*s)).collect()
    }

    #[test]
    fn empty_series_is_rectangular_and_blank() {
        let s = ChartSeries::empty();
        assert!(s.is_empty());
        assert!(s.is_rectangular());
        assert!(s.is_blank());
    }

    #[test]
    fn detects_ragged_dataset() {
        let s = ChartSeries::new(
            labels(&["a", "b"]),
            vec![Dataset::new(vec![1.0, 2.0]), Dataset::new(vec![1.0])],
        );
        assert!(!s.is_rectangular());
    }

    #[test]
    fn all_zero_series_is_blank() {
        let s = ChartSeries::new(
            labels(&["a", "b"]),
            vec![Dataset::zeroed("x", 2), Dataset::zeroed("y", 2)],
        );
        assert!(s.is_blank());

        let s = ChartSeries::new(
            labels(&["a", "b"]),
            vec![Dataset::zeroed("x", 2), Dataset::labelled("y", vec![0.0, 3.0])],
        );
        assert!(!s.is_blank());
    }

    #[test]
    fn dataset_lookup_by_label() {
        let s = ChartSeries::new(
            labels(&["a"]),
            vec![Dataset::labelled("A", vec![5.0]), Dataset::new(vec![1.0])],
        );
        assert_eq!(s.dataset("A").map(Dataset::total), Some(5.0));
        assert!(s.dataset("missing").is_none());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn unlabelled_dataset_omits_label_field() {
        let s = ChartSeries::new(labels(&["x"]), vec![Dataset::new(vec![1.0])]);
        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "labels": ["x"], "datasets": [{ "data": [1.0] }] })
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn labelled_dataset_serializes_label() {
        let s = ChartSeries::new(
            labels(&["t1"]),
            vec![Dataset::labelled("HTTP_REQUESTS", vec![10.0])],
        );
        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(json["datasets"][0]["label"], "HTTP_REQUESTS");
    }
}
