//! Common type definitions and newtype wrappers for domain modeling.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A color value, usually a hex string like `#ff0000` or a named color.
///
/// Resolution of an absent color is left to the renderer's theme.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(pub String);

impl Color {
    /// Creates a color from anything string-like.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the color as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Color {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Color {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// The name of a series. Not required to be unique within a dataset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeriesName(pub String);

impl SeriesName {
    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SeriesName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SeriesName {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for SeriesName {
    fn from(value: String) -> Self {
        Self(value)
    }
}
