//! Running per-axis extrema and the scale derived from them.

use scatterkit_common::{normalize_value, spread};

/// Running minimum and maximum of one axis.
///
/// Both bounds are unset until the first series is folded in; afterwards
/// they only ever widen.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AxisExtrema {
    min: Option<f64>,
    max: Option<f64>,
}

impl AxisExtrema {
    /// Creates unset extrema.
    pub const fn new() -> Self {
        Self {
            min: None,
            max: None,
        }
    }

    /// Smallest value seen so far.
    pub const fn min(&self) -> Option<f64> {
        self.min
    }

    /// Largest value seen so far.
    pub const fn max(&self) -> Option<f64> {
        self.max
    }

    /// Returns true once any values have been folded in.
    pub const fn is_set(&self) -> bool {
        self.min.is_some() || self.max.is_some()
    }

    /// Folds a non-empty, finite series into the extrema.
    ///
    /// On first use both bounds start at `values[0]`, then the series max and
    /// min are compared against them. Empty input leaves the extrema untouched.
    pub fn widen(&mut self, values: &[f64]) {
        let Some(&first) = values.first() else {
            return;
        };

        if self.min.is_none() && self.max.is_none() {
            self.min = Some(first);
            self.max = Some(first);
        }

        let series_max = values.iter().copied().fold(first, f64::max);
        let series_min = values.iter().copied().fold(first, f64::min);

        self.max = self.max.map(|current| if series_max > current { series_max } else { current });
        self.min = self.min.map(|current| if series_min < current { series_min } else { current });
    }

    /// `max - min`, or 1 when that is not positive or nothing has been seen.
    pub fn spread(&self) -> f64 {
        spread(self.min, self.max)
    }

    /// The scale used to map raw values of this axis into `[0, 1]`.
    pub fn scale(&self) -> AxisScale {
        AxisScale {
            min: self.min.unwrap_or(0.0),
            spread: self.spread(),
        }
    }
}

/// Offset and divisor for normalizing one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisScale {
    /// Value mapped to 0.
    pub min: f64,
    /// Divisor, always positive.
    pub spread: f64,
}

impl AxisScale {
    /// Maps a raw value via `(value - min) / spread`.
    #[inline]
    pub fn apply(&self, value: f64) -> f64 {
        normalize_value(value, self.min, self.spread)
    }

    /// Maps every value of a series.
    pub fn apply_all(&self, values: &[f64]) -> Vec<f64> {
        values.iter().map(|&v| self.apply(v)).collect()
    }
}

/// The spreads of both axes at one point in time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisSpreads {
    /// Spread of the x axis.
    pub x: f64,
    /// Spread of the y axis.
    pub y: f64,
}
