//! Error types for the packing engine.
//!
//! Every error is raised during validation, before any placement work begins.
//! A packing call either returns a complete layout or one of these errors, never a partial layout.

use std::fmt;
use thiserror::Error;

/// Errors that abort a packing call.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PackError {
    /// A design does not fit on an empty sheet.
    #[error(
        "design '{label}' has a {dimension} of {value}in, which exceeds the usable {dimension} of {limit}in"
    )]
    DimensionExceeded {
        label: String,
        dimension: Dimension,
        value: f64,
        limit: f64,
    },

    /// The total number of requested copies exceeds the hard cap.
    #[error("{requested} designs requested, which exceeds the limit of {limit} per packing run")]
    PlacementOverflow { requested: usize, limit: usize },

    /// A design has a non-finite or non-positive width or height.
    #[error("design '{label}' has invalid dimensions: {width}in x {height}in")]
    InvalidDimensions {
        label: String,
        width: f64,
        height: f64,
    },

    /// The sheet configuration leaves no usable area.
    #[error("invalid sheet configuration: {0}")]
    InvalidSheetConfig(String),

    /// Hexagonal packing was requested for designs that are not round with a single diameter.
    #[error("design '{label}' can not be hex packed: all designs must be round with the same diameter")]
    NotUniformCircles { label: String },
}

/// The sheet axis along which a design was found to be too large.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Width,
    Height,
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimension::Width => write!(f, "width"),
            Dimension::Height => write!(f, "height"),
        }
    }
}

/// Result type alias for packing operations.
pub type PackResult<T> = Result<T, PackError>;
