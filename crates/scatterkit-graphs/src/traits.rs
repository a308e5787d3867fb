//! Renderer trait consumed by [`crate::ScatterDataset::render_with`].

use crate::series::NormalizedSeries;
use scatterkit_common::Result;
use scatterkit_config::ScatterGeometry;

/// Trait for renderers that draw normalized scatter series.
pub trait ScatterRenderer {
    /// Renders the series with the given geometry, returning encoded output.
    fn render(&self, series: &[NormalizedSeries], geometry: &ScatterGeometry) -> Result<Vec<u8>>;

    /// Gets the name of this renderer.
    fn name(&self) -> &'static str;
}
