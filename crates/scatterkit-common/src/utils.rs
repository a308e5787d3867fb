//! Shared numeric helpers.

/// Spread substituted when `max - min` is not positive.
pub const FALLBACK_SPREAD: f64 = 1.0;

/// Computes `max - min`, falling back to [`FALLBACK_SPREAD`] when the result
/// is not positive or either bound is unset.
///
/// Finite bounds further apart than `f64::MAX` overflow to an infinite
/// spread, which normalizes the largest value to NaN.
pub fn spread(min: Option<f64>, max: Option<f64>) -> f64 {
    let raw = max.unwrap_or(0.0) - min.unwrap_or(0.0);
    if raw > 0.0 {
        raw
    } else {
        FALLBACK_SPREAD
    }
}

/// Rescales `value` via `(value - min) / spread`.
#[inline]
pub fn normalize_value(value: f64, min: f64, spread: f64) -> f64 {
    (value - min) / spread
}

/// A numeric input accepted as a data point.
///
/// Implemented for every primitive integer and float. Integers wider than
/// 53 bits round to the nearest representable `f64`.
pub trait DataValue: Copy {
    /// Converts the value to `f64`.
    fn to_f64(self) -> f64;
}

macro_rules! impl_data_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl DataValue for $ty {
                #[inline]
                #[allow(clippy::cast_precision_loss, clippy::cast_lossless, clippy::unnecessary_cast)]
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_data_value!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

/// Converts an optional input entry to `f64`, treating `None` and non-finite
/// values as missing.
#[inline]
pub fn finite_value<T: DataValue>(entry: Option<T>) -> Option<f64> {
    entry.map(DataValue::to_f64).filter(|v| v.is_finite())
}
