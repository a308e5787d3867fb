//! # Scatterkit Common
//!
//! Shared types, errors, and numeric helpers for scatterkit.
//!
//! This crate provides the foundational types used across the other crates
//! in the scatterkit workspace.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod types;
pub mod utils;

#[cfg(any(test, feature = "testing"))]
pub mod test_utils;

pub use error::*;
pub use types::*;
pub use utils::*;
