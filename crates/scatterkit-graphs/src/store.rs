//! Y-axis series storage shared by every chart type.

use crate::extrema::AxisExtrema;
use crate::series::Series;
use scatterkit_common::{Color, SeriesName};

/// Ordered series storage with running y-axis extrema.
///
/// Callers validate values before handing them over; the store only
/// records them.
#[derive(Debug, Clone, Default)]
pub struct SeriesStore {
    series: Vec<Series>,
    y: AxisExtrema,
    has_data: bool,
}

impl SeriesStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a series with no x values yet and widens the y extrema.
    ///
    /// Returns the new record so the caller can attach further axes.
    pub fn add_series(
        &mut self,
        name: SeriesName,
        y_values: Vec<f64>,
        color: Option<Color>,
    ) -> &mut Series {
        self.y.widen(&y_values);
        self.has_data = true;

        let index = self.series.len();
        self.series.push(Series {
            name,
            y_values,
            color,
            x_values: Vec::new(),
        });
        &mut self.series[index]
    }

    /// `max_y - min_y`, or 1 when that is not positive.
    pub fn calculate_spread(&self) -> f64 {
        self.y.spread()
    }

    /// Stored series in insertion order.
    pub fn series(&self) -> &[Series] {
        &self.series
    }

    /// Running y-axis extrema.
    pub const fn extrema(&self) -> &AxisExtrema {
        &self.y
    }

    /// Returns true once any series has been added.
    pub const fn has_data(&self) -> bool {
        self.has_data
    }

    /// Number of stored series.
    pub fn len(&self) -> usize {
        self.series.len()
    }

    /// Returns true if no series has been added.
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}
