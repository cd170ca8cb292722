//! Projector configuration.

use serde::{Deserialize, Serialize};

/// How strictly the time-series projector checks that all metrics share one
/// time axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisCheck {
    /// Same slot count and same per-slot identity as the first metric.
    #[default]
    Strict,
    /// Same slot count only.
    Length,
    /// No check. Short metrics are zero-padded, long ones truncated.
    Off,
}

/// Options shared by all projectors.
///
/// Deserializes with defaults for every missing field, so an empty config
/// section is valid.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectorConfig {
    /// Time-axis precondition for multi-metric time series.
    pub axis_check: AxisCheck,

    /// Whether a facet chart may render more than the first metric.
    pub supports_multiple_metrics: bool,
}

impl ProjectorConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the time-axis check.
    pub fn with_axis_check(mut self, axis_check: AxisCheck) -> Self {
        self.axis_check = axis_check;
        self
    }

    /// Allow facet charts with one dataset per metric.
    pub fn with_multiple_metrics(mut self, enabled: bool) -> Self {
        self.supports_multiple_metrics = enabled;
        self
    }
}
