//! Error types for projectors.
//!
//! Missing or malformed data inside a response is never an error; it is
//! recovered locally as `0`, a key fallback, or a paired omission. Errors are
//! reserved for responses whose overall shape cannot be projected without
//! guessing.

use thiserror::Error;

/// Errors that can occur when projecting a response.
#[derive(Debug, Error)]
pub enum ProjectionError {
    /// A metric mixes leaf time slots and grouped time slots.
    #[error("Inconsistent shape in metric '{metric}': slot {slot} disagrees with earlier slots")]
    InconsistentMetricShape {
        /// Metric name.
        metric: String,
        /// Index of the first slot whose shape disagrees.
        slot: usize,
    },

    /// A metric's time axis differs from the first metric's.
    #[error("Time axis of metric '{metric}' does not match: expected {expected}, found {found}")]
    TimeAxisMismatch {
        /// Metric name.
        metric: String,
        /// What the reference axis has.
        expected: String,
        /// What this metric has.
        found: String,
    },

    /// The payload is neither a bucket response nor a legacy histogram.
    #[error("Unrecognized response shape: {0}")]
    UnrecognizedShape(String),

    /// The requested chart cannot be drawn from this kind of response.
    #[error("Chart '{chart}' is not supported for {response} responses")]
    UnsupportedChart {
        /// Requested chart kind.
        chart: String,
        /// Detected response kind.
        response: &'static str,
    },

    /// Unknown chart kind name.
    #[error("Unknown chart kind: {0}")]
    UnknownChart(String),

    /// Failed to decode the payload.
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}
