//! # Scatterkit Graphs
//!
//! Scatter-plot dataset ingestion and normalization.
//!
//! Series are validated and accumulated in a [`ScatterDataset`], which
//! tracks running extrema on both axes and derives a cached, normalized copy
//! of every series for an external [`ScatterRenderer`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod dataset;
pub mod extrema;
pub mod normalizer;
pub mod series;
pub mod store;
pub mod traits;

pub use dataset::*;
pub use extrema::*;
pub use normalizer::*;
pub use series::*;
pub use store::*;
pub use traits::*;
