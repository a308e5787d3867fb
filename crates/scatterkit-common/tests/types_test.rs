//! Tests for core type definitions in scatterkit-common.
//!
//! This test suite covers:
//! - Newtype wrappers implementing expected traits (Display, Debug, Serialize, Deserialize)
//! - Error messages staying literal for each rejection reason

use scatterkit_common::{spread, Color, InvalidDataError, ScatterError, SeriesName};
use std::collections::HashMap;

#[cfg(test)]
mod newtype_trait_tests {
    use super::*;

    #[test]
    fn test_color_implements_expected_traits() {
        let color = Color::new("#ff0000");

        assert_eq!(format!("{:?}", color), "Color(\"#ff0000\")");
        assert_eq!(format!("{}", color), "#ff0000");
        assert_eq!(color.as_str(), "#ff0000");

        let cloned = color.clone();
        assert_eq!(color, cloned);

        let mut map = HashMap::new();
        map.insert(color.clone(), "red");
        assert_eq!(map.get(&color), Some(&"red"));
    }

    #[test]
    fn test_color_serializes_transparently() {
        let color = Color::from("red");
        let serialized = serde_json::to_string(&color).unwrap();
        assert_eq!(serialized, "\"red\"");

        let deserialized: Color = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, color);
    }

    #[test]
    fn test_series_name_conversions() {
        let from_str = SeriesName::from("apples");
        let from_string = SeriesName::from(String::from("apples"));
        assert_eq!(from_str, from_string);
        assert_eq!(from_str.to_string(), "apples");
        assert_eq!(serde_json::to_string(&from_str).unwrap(), "\"apples\"");
    }
}

#[cfg(test)]
mod error_tests {
    use super::*;

    #[test]
    fn test_each_rejection_has_distinct_message() {
        let messages: Vec<String> = [
            InvalidDataError::MissingValue,
            InvalidDataError::EmptyX,
            InvalidDataError::EmptyY,
            InvalidDataError::LengthMismatch { x_len: 1, y_len: 2 },
        ]
        .iter()
        .map(ToString::to_string)
        .collect();

        for (i, a) in messages.iter().enumerate() {
            for b in &messages[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_render_error_display() {
        let err = ScatterError::Render("backend unavailable".to_string());
        assert_eq!(err.to_string(), "Render error: backend unavailable");
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_spread_is_always_positive(
            min in -1.0e9..1.0e9_f64,
            max in -1.0e9..1.0e9_f64,
        ) {
            prop_assert!(spread(Some(min), Some(max)) > 0.0);
        }

        #[test]
        fn test_color_roundtrip_serialization(value in "#[0-9a-f]{6}") {
            let color = Color::new(value);
            let serialized = serde_json::to_string(&color).unwrap();
            let deserialized: Color = serde_json::from_str(&serialized).unwrap();
            prop_assert_eq!(color, deserialized);
        }
    }
}
