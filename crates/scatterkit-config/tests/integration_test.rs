//! Integration tests for scatterkit-config.
//!
//! These tests verify that the geometry record can be embedded in a
//! renderer's own configuration in the usual serde formats.

use scatterkit_common::Color;
use scatterkit_config::{ScatterGeometry, DEFAULT_BASELINE_COLOR};

#[test]
fn test_setters_accept_any_value() {
    let mut geometry = ScatterGeometry::default();
    geometry.baseline_x_color = Color::from("#00ff00");
    geometry.circle_radius = Some(-3.0);
    geometry.stroke_width = Some(0.0);
    geometry.marker_x_count = Some(0);
    geometry.use_vertical_x_labels = true;
    geometry.minimum_x_value = Some(10.0);
    geometry.maximum_x_value = Some(-10.0);

    assert_eq!(geometry.baseline_x_color.as_str(), "#00ff00");
    assert_eq!(geometry.baseline_y_color.as_str(), DEFAULT_BASELINE_COLOR);
    assert_eq!(geometry.circle_radius, Some(-3.0));
    assert_eq!(geometry.minimum_x_value, Some(10.0));
    assert_eq!(geometry.maximum_x_value, Some(-10.0));
    assert!(geometry.use_vertical_x_labels);
}

#[test]
fn test_builder_methods() {
    let geometry = ScatterGeometry::new()
        .with_x_axis_label_format("%.2f")
        .with_y_axis_label_format("%d")
        .with_marker_x_count(5)
        .with_x_range(0.0, 100.0);

    assert_eq!(geometry.x_axis_label_format.as_deref(), Some("%.2f"));
    assert_eq!(geometry.y_axis_label_format.as_deref(), Some("%d"));
    assert_eq!(geometry.marker_x_count, Some(5));
    assert_eq!(geometry.minimum_x_value, Some(0.0));
    assert_eq!(geometry.maximum_x_value, Some(100.0));
}

#[test]
fn test_partial_yaml_takes_defaults() {
    let yaml = r"
circle_radius: 4.5
enable_vertical_line_markers: true
x_axis_label_format: '%.1f'
";
    let geometry: ScatterGeometry = serde_yaml::from_str(yaml).unwrap();

    assert_eq!(geometry.circle_radius, Some(4.5));
    assert!(geometry.enable_vertical_line_markers);
    assert_eq!(geometry.x_axis_label_format.as_deref(), Some("%.1f"));
    assert_eq!(geometry.baseline_x_color.as_str(), "red");
    assert_eq!(geometry.baseline_y_color.as_str(), "red");
    assert!(geometry.marker_x_count.is_none());
}

#[test]
fn test_toml_overrides_colors() {
    let source = r##"
baseline_x_color = "#123456"
marker_x_count = 8
use_vertical_x_labels = true
"##;
    let geometry: ScatterGeometry = toml::from_str(source).unwrap();

    assert_eq!(geometry.baseline_x_color.as_str(), "#123456");
    assert_eq!(geometry.baseline_y_color.as_str(), "red");
    assert_eq!(geometry.marker_x_count, Some(8));
    assert!(geometry.use_vertical_x_labels);
}

#[test]
fn test_empty_json_is_default() {
    let geometry: ScatterGeometry = serde_json::from_str("{}").unwrap();
    assert_eq!(geometry, ScatterGeometry::default());
}

#[test]
fn test_json_roundtrip_preserves_fields() {
    let geometry = ScatterGeometry::new()
        .with_x_range(-1.0, 1.0)
        .with_y_axis_label_format("%.3f");

    let serialized = serde_json::to_string(&geometry).unwrap();
    assert!(serialized.contains("\"baseline_x_color\":\"red\""));

    let deserialized: ScatterGeometry = serde_json::from_str(&serialized).unwrap();
    assert_eq!(deserialized, geometry);
}
