//! Configuration schema definitions using serde.

use scatterkit_common::Color;
use serde::{Deserialize, Serialize};

/// Scatter-specific rendering options.
///
/// Every field except the two baseline colors defaults to unset or `false`.
/// Missing keys take their defaults when deserializing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScatterGeometry {
    /// Color of the vertical baseline marker.
    pub baseline_x_color: Color,
    /// Color of the horizontal baseline marker.
    pub baseline_y_color: Color,
    /// Position of the vertical baseline marker.
    pub baseline_x_value: Option<f64>,
    /// Position of the horizontal baseline marker.
    pub baseline_y_value: Option<f64>,
    /// Radius of each point marker.
    pub circle_radius: Option<f64>,
    /// Skip significant-figure rounding of x-axis labels.
    pub disable_significant_rounding_x_axis: bool,
    /// Draw vertical line markers at each x-axis marker.
    pub enable_vertical_line_markers: bool,
    /// Target number of x-axis markers.
    pub marker_x_count: Option<u32>,
    /// Override for the largest x value shown.
    pub maximum_x_value: Option<f64>,
    /// Override for the smallest x value shown.
    pub minimum_x_value: Option<f64>,
    /// Width of marker strokes.
    pub stroke_width: Option<f64>,
    /// Rotate x-axis labels to vertical.
    pub use_vertical_x_labels: bool,
    /// Format string for x-axis labels.
    pub x_axis_label_format: Option<String>,
    /// Margin between the x axis and its labels.
    pub x_label_margin: Option<f64>,
    /// Format string for y-axis labels.
    pub y_axis_label_format: Option<String>,
}

impl ScatterGeometry {
    /// Creates a geometry with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the x-axis label format.
    #[must_use]
    pub fn with_x_axis_label_format(mut self, format: impl Into<String>) -> Self {
        self.x_axis_label_format = Some(format.into());
        self
    }

    /// Sets the y-axis label format.
    #[must_use]
    pub fn with_y_axis_label_format(mut self, format: impl Into<String>) -> Self {
        self.y_axis_label_format = Some(format.into());
        self
    }

    /// Sets the target number of x-axis markers.
    #[must_use]
    pub fn with_marker_x_count(mut self, count: u32) -> Self {
        self.marker_x_count = Some(count);
        self
    }

    /// Sets the x-axis extrema overrides.
    #[must_use]
    pub fn with_x_range(mut self, minimum: f64, maximum: f64) -> Self {
        self.minimum_x_value = Some(minimum);
        self.maximum_x_value = Some(maximum);
        self
    }
}
