//! Scatter dataset: validated (x, y) series with extrema on both axes.

use crate::extrema::{AxisExtrema, AxisSpreads};
use crate::normalizer::{NormalizeInput, Normalizer};
use crate::series::{NormalizedSeries, Series};
use crate::store::SeriesStore;
use crate::traits::ScatterRenderer;
use scatterkit_common::{finite_value, Color, DataValue, InvalidDataError, Result, SeriesName};
use scatterkit_config::ScatterGeometry;
use std::sync::Arc;
use tracing::{debug, warn};

/// Accumulates named scatter series and derives their normalized form.
///
/// The y axis is handled by an inner [`SeriesStore`]; this type attaches x
/// values to each record and tracks the x extrema itself.
///
/// ```
/// use scatterkit_graphs::ScatterDataset;
///
/// let mut dataset = ScatterDataset::new();
/// dataset.add_points("apples", &[1, 2, 3], &[3, 2, 1], None).unwrap();
/// dataset.add_points("oranges", &[1, 1, 1], &[2, 3, 4], None).unwrap();
///
/// let normalized = dataset.normalize(false);
/// assert_eq!(normalized.len(), 2);
/// assert_eq!(normalized[0].norm_x_values, vec![0.0, 0.5, 1.0]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScatterDataset {
    store: SeriesStore,
    x: AxisExtrema,
    normalizer: Normalizer,
}

impl ScatterDataset {
    /// Creates an empty dataset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates and appends one series.
    ///
    /// Checks run in this order and the first failure is returned: a missing
    /// or non-finite entry on either axis, empty x values, empty y values,
    /// and differing lengths. Entries may be any primitive integer or float,
    /// see [`DataValue`].
    ///
    /// # Errors
    ///
    /// Returns [`InvalidDataError`] when any check fails; the dataset is
    /// left unchanged in that case.
    pub fn add_series<X, Y>(
        &mut self,
        name: impl Into<SeriesName>,
        x_values: &[Option<X>],
        y_values: &[Option<Y>],
        color: Option<Color>,
    ) -> std::result::Result<(), InvalidDataError>
    where
        X: DataValue,
        Y: DataValue,
    {
        let name = name.into();
        let (x_values, y_values) = match validate_axes(x_values, y_values) {
            Ok(axes) => axes,
            Err(e) => {
                warn!("Rejected series {}: {}", name, e);
                return Err(e);
            }
        };

        let point_count = x_values.len();
        let record = self.store.add_series(name, y_values, color);
        record.x_values = x_values;
        self.x.widen(&record.x_values);
        let name = record.name.clone();
        self.normalizer.invalidate();

        debug!(
            "Added series {} with {} points (x: {:?}..{:?}, y: {:?}..{:?})",
            name,
            point_count,
            self.x.min(),
            self.x.max(),
            self.store.extrema().min(),
            self.store.extrema().max()
        );
        Ok(())
    }

    /// Appends a series whose values are all present.
    ///
    /// Accepts any primitive integer or float, see [`DataValue`].
    ///
    /// # Errors
    ///
    /// Same as [`ScatterDataset::add_series`].
    pub fn add_points<X, Y>(
        &mut self,
        name: impl Into<SeriesName>,
        x_values: &[X],
        y_values: &[Y],
        color: Option<Color>,
    ) -> std::result::Result<(), InvalidDataError>
    where
        X: DataValue,
        Y: DataValue,
    {
        let x: Vec<Option<X>> = x_values.iter().copied().map(Some).collect();
        let y: Vec<Option<Y>> = y_values.iter().copied().map(Some).collect();
        self.add_series(name, &x, &y, color)
    }

    /// Spreads of both axes, each floored to 1 when not positive.
    pub fn calculate_spread(&self) -> AxisSpreads {
        AxisSpreads {
            x: self.x.spread(),
            y: self.store.calculate_spread(),
        }
    }

    /// Rescales every series into `[0, 1]` on both axes.
    ///
    /// The result is cached: repeated calls return the same [`Arc`] until a
    /// series is added or `force` is set. An empty dataset yields an empty
    /// result.
    pub fn normalize(&mut self, force: bool) -> Arc<[NormalizedSeries]> {
        let input = NormalizeInput {
            series: self.store.series(),
            has_data: self.store.has_data(),
            y: self.store.extrema().scale(),
            x: self.x.scale(),
        };
        self.normalizer.normalize(input, force)
    }

    /// Normalizes and hands the result to `renderer`.
    ///
    /// # Errors
    ///
    /// Propagates whatever the renderer reports.
    pub fn render_with<R>(
        &mut self,
        renderer: &R,
        geometry: &ScatterGeometry,
        force: bool,
    ) -> Result<Vec<u8>>
    where
        R: ScatterRenderer + ?Sized,
    {
        let normalized = self.normalize(force);
        debug!("Rendering {} series with {}", normalized.len(), renderer.name());
        renderer.render(&normalized, geometry)
    }

    /// Stored series in insertion order.
    pub fn series(&self) -> &[Series] {
        self.store.series()
    }

    /// Running x-axis extrema.
    pub const fn x_extrema(&self) -> &AxisExtrema {
        &self.x
    }

    /// Running y-axis extrema.
    pub const fn y_extrema(&self) -> &AxisExtrema {
        self.store.extrema()
    }

    /// Returns true once any series has been added.
    pub const fn has_data(&self) -> bool {
        self.store.has_data()
    }

    /// Number of stored series.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Returns true if no series has been added.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

fn validate_axes<X, Y>(
    x_values: &[Option<X>],
    y_values: &[Option<Y>],
) -> std::result::Result<(Vec<f64>, Vec<f64>), InvalidDataError>
where
    X: DataValue,
    Y: DataValue,
{
    let x: Option<Vec<f64>> = x_values.iter().map(|&v| finite_value(v)).collect();
    let y: Option<Vec<f64>> = y_values.iter().map(|&v| finite_value(v)).collect();
    let (Some(x), Some(y)) = (x, y) else {
        return Err(InvalidDataError::MissingValue);
    };

    if x.is_empty() {
        return Err(InvalidDataError::EmptyX);
    }
    if y.is_empty() {
        return Err(InvalidDataError::EmptyY);
    }
    if x.len() != y.len() {
        return Err(InvalidDataError::LengthMismatch {
            x_len: x.len(),
            y_len: y.len(),
        });
    }

    Ok((x, y))
}
