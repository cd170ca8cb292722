//! The interface shared by all projectors.

use bucketchart_types::ChartSeries;

use crate::ProjectionError;

/// Projects one layout of analytics response into a [`ChartSeries`].
///
/// Implementations are pure: they read the response, allocate the output,
/// and keep nothing between calls, so one projector can serve many widgets
/// concurrently. Missing or malformed data inside a response is recovered
/// locally; `Err` is reserved for responses whose shape would force the
/// projector to guess.
pub trait BucketProjector {
    /// The response layout this projector reads.
    type Response;

    /// Project a response. Every returned dataset has one value per label.
    fn project(&self, response: &Self::Response) -> Result<ChartSeries, ProjectionError>;
}
