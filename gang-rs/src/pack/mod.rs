/// Design Expander & Validator
pub mod expand;

/// Shelf (row based) packing
pub mod shelf;

/// Hexagonal close-packing of uniform circles
pub mod hex;

/// Maximal rectangles bin packing
pub mod max_rects;

/// Shape-aware routing between the packers
pub mod dispatch;

mod strategy;

#[doc(inline)]
pub use strategy::Strategy;
