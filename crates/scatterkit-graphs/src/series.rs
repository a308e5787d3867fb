//! Raw and normalized series records.

use scatterkit_common::{Color, SeriesName};
use serde::{Deserialize, Serialize};

/// One named dataset as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    /// Dataset name.
    pub name: SeriesName,
    /// Raw y values.
    pub y_values: Vec<f64>,
    /// Explicit color, or `None` to let the renderer's theme pick one.
    pub color: Option<Color>,
    /// Raw x values, same length as `y_values`.
    pub x_values: Vec<f64>,
}

impl Series {
    /// Number of points in the series.
    pub fn len(&self) -> usize {
        self.y_values.len()
    }

    /// Returns true if the series holds no points.
    pub fn is_empty(&self) -> bool {
        self.y_values.is_empty()
    }
}

/// A series rescaled into `[0, 1]` on both axes.
///
/// Fields are declared, and therefore serialized, in the order renderers
/// consume them: name, y values, color, x values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedSeries {
    /// Dataset name, copied unchanged.
    pub name: SeriesName,
    /// Normalized y values.
    pub norm_y_values: Vec<f64>,
    /// Color, copied unchanged.
    pub color: Option<Color>,
    /// Normalized x values.
    pub norm_x_values: Vec<f64>,
}

impl NormalizedSeries {
    /// Iterates `(x, y)` pairs in input order.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.norm_x_values
            .iter()
            .copied()
            .zip(self.norm_y_values.iter().copied())
    }
}
