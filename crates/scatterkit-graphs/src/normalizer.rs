//! Cached normalization of stored series into `[0, 1]`.

use crate::extrema::AxisScale;
use crate::series::{NormalizedSeries, Series};
use std::sync::Arc;
use tracing::{debug, trace};

/// Everything a normalization pass reads, computed by the dataset.
#[derive(Debug, Clone, Copy)]
pub struct NormalizeInput<'a> {
    /// Series in insertion order.
    pub series: &'a [Series],
    /// Whether any series was ever added.
    pub has_data: bool,
    /// Y-axis minimum and spread.
    pub y: AxisScale,
    /// X-axis minimum and spread.
    pub x: AxisScale,
}

/// Holds the last normalized result and whether it is stale.
#[derive(Debug, Clone)]
pub struct Normalizer {
    cached: Option<Arc<[NormalizedSeries]>>,
    dirty: bool,
}

impl Normalizer {
    /// Creates a normalizer with nothing cached.
    pub const fn new() -> Self {
        Self {
            cached: None,
            dirty: true,
        }
    }

    /// Marks the cached result stale so the next pass recomputes.
    pub fn invalidate(&mut self) {
        self.dirty = true;
    }

    /// Returns true if the next non-forced pass will recompute.
    pub const fn is_dirty(&self) -> bool {
        self.dirty || self.cached.is_none()
    }

    /// The last computed result, if any.
    pub const fn cached(&self) -> Option<&Arc<[NormalizedSeries]>> {
        self.cached.as_ref()
    }

    /// Returns the cached result unless it is stale or `force` is set, in
    /// which case every series is rescaled first.
    pub fn normalize(&mut self, input: NormalizeInput<'_>, force: bool) -> Arc<[NormalizedSeries]> {
        if let Some(cached) = &self.cached {
            if !self.dirty && !force {
                trace!("Reusing cached normalization of {} series", cached.len());
                return Arc::clone(cached);
            }
        }

        let result: Arc<[NormalizedSeries]> = if input.has_data {
            input
                .series
                .iter()
                .map(|series| normalize_series(series, input.y, input.x))
                .collect()
        } else {
            Arc::from(Vec::new())
        };

        debug!(
            "Normalized {} series (x: min {}, spread {}; y: min {}, spread {})",
            result.len(),
            input.x.min,
            input.x.spread,
            input.y.min,
            input.y.spread
        );

        self.cached = Some(Arc::clone(&result));
        self.dirty = false;
        result
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

fn normalize_series(series: &Series, y: AxisScale, x: AxisScale) -> NormalizedSeries {
    NormalizedSeries {
        name: series.name.clone(),
        norm_y_values: y.apply_all(&series.y_values),
        color: series.color.clone(),
        norm_x_values: x.apply_all(&series.x_values),
    }
}
