//! Gang-sheet layout engine for direct-to-film (DTF) transfer printing.
//!
//! Arranges copies of rectangular and circular artwork onto fixed-width roll material,
//! splitting the roll into sheets of bounded length while keeping a uniform margin
//! around and between every design.

/// Entities to model design requests and packed gang sheets
pub mod entities;

/// Errors raised when a set of design requests can not be packed
pub mod error;

/// Axis-aligned geometric primitives used by the packers and the layout checks
pub mod geometry;

/// Importing jobs into and exporting layouts out of this library
pub mod io;

/// Packing strategies and the dispatcher choosing between them
pub mod pack;

/// Helper functions which do not belong to any specific module
pub mod util;
