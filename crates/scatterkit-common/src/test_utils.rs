//! Test utilities and shared test helpers for scatterkit.
//!
//! This module provides logging setup, float assertions, and sample series
//! that can be used across all crates in the workspace.

use std::sync::Once;

#[cfg(feature = "tracing-subscriber")]
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize test logging once per test run.
static INIT: Once = Once::new();

/// Initialize logging for tests with a sensible default configuration.
/// This function is safe to call multiple times and will only initialize once.
#[cfg(feature = "tracing-subscriber")]
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        let _ = fmt().with_test_writer().with_env_filter(filter).try_init();
    });
}

/// No-op version when tracing-subscriber is not available
#[cfg(not(feature = "tracing-subscriber"))]
pub fn init_test_logging() {
    INIT.call_once(|| {});
}

/// Assert that two floating point numbers are approximately equal within a tolerance.
pub fn assert_approx_eq(left: f64, right: f64, tolerance: f64) {
    let diff = (left - right).abs();
    assert!(
        diff <= tolerance,
        "assertion failed: `{left}` is not approximately equal to `{right}` (tolerance: {tolerance}, diff: {diff})"
    );
}

/// Assert that two slices of floats are element-wise approximately equal.
pub fn assert_slice_approx_eq(left: &[f64], right: &[f64], tolerance: f64) {
    assert_eq!(left.len(), right.len(), "slice lengths differ");
    for (l, r) in left.iter().zip(right) {
        assert_approx_eq(*l, *r, tolerance);
    }
}

/// Sample series for dataset tests.
pub mod fixtures {
    /// A named pair of complete axes.
    #[derive(Debug, Clone)]
    pub struct SampleSeries {
        /// Series name.
        pub name: &'static str,
        /// X values.
        pub x: Vec<f64>,
        /// Y values, same length as `x`.
        pub y: Vec<f64>,
        /// Explicit color, if any.
        pub color: Option<&'static str>,
    }

    /// Three small fruit datasets, the last with an explicit color.
    pub fn fruit_series() -> Vec<SampleSeries> {
        vec![
            SampleSeries {
                name: "apples",
                x: vec![1.0, 2.0, 3.0],
                y: vec![3.0, 2.0, 1.0],
                color: None,
            },
            SampleSeries {
                name: "oranges",
                x: vec![1.0, 1.0, 1.0],
                y: vec![2.0, 3.0, 4.0],
                color: None,
            },
            SampleSeries {
                name: "bitter_melon",
                x: vec![3.0, 5.0, 6.0],
                y: vec![6.0, 7.0, 8.0],
                color: Some("#000000"),
            },
        ]
    }

    /// Generate `count` points on a noisy line, useful for larger datasets.
    pub fn generate_line(count: usize, slope: f64, offset: f64) -> (Vec<f64>, Vec<f64>) {
        (0..count)
            .map(|i| {
                let x = i as f64;
                (x, slope.mul_add(x, offset) + x.sin())
            })
            .unzip()
    }

    /// Wraps every entry in `Some`.
    pub fn complete(values: &[f64]) -> Vec<Option<f64>> {
        values.iter().copied().map(Some).collect()
    }
}

/// Property-testing strategies shared across crates.
#[cfg(feature = "proptest")]
pub mod strategies {
    use proptest::prelude::*;

    /// Equal-length, non-empty pairs of finite axes.
    pub fn axes(max_len: usize) -> impl Strategy<Value = (Vec<f64>, Vec<f64>)> {
        (1..=max_len).prop_flat_map(|len| {
            (
                prop::collection::vec(-1.0e6..1.0e6_f64, len),
                prop::collection::vec(-1.0e6..1.0e6_f64, len),
            )
        })
    }
}
