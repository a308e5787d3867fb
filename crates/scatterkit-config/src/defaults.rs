//! Default values for the scatter geometry.

use crate::schema::ScatterGeometry;
use scatterkit_common::Color;

/// Color used for both baseline markers unless overridden.
pub const DEFAULT_BASELINE_COLOR: &str = "red";

impl Default for ScatterGeometry {
    fn default() -> Self {
        Self {
            baseline_x_color: Color::from(DEFAULT_BASELINE_COLOR),
            baseline_y_color: Color::from(DEFAULT_BASELINE_COLOR),
            baseline_x_value: None,
            baseline_y_value: None,
            circle_radius: None,
            disable_significant_rounding_x_axis: false,
            enable_vertical_line_markers: false,
            marker_x_count: None,
            maximum_x_value: None,
            minimum_x_value: None,
            stroke_width: None,
            use_vertical_x_labels: false,
            x_axis_label_format: None,
            x_label_margin: None,
            y_axis_label_format: None,
        }
    }
}
