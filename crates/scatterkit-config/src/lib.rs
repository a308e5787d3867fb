//! # Scatterkit Config
//!
//! Scatter-plot rendering options for scatterkit.
//!
//! This crate holds the [`ScatterGeometry`] record handed to renderers
//! alongside normalized series. It performs no validation; any value can be
//! assigned to any field.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod defaults;
pub mod schema;

pub use defaults::*;
pub use schema::*;
