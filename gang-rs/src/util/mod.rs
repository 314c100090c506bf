/// Set of functions used throughout to assure the correctness of the library.
pub mod assertions;

mod config;
mod fpa;

#[doc(inline)]
pub use config::PackingMode;
#[doc(inline)]
pub use config::SheetConfig;
#[doc(inline)]
pub use fpa::BOUNDS_TOLERANCE;
#[doc(inline)]
pub use fpa::FPA;
#[doc(inline)]
pub use fpa::ROW_EPSILON;
#[doc(inline)]
pub use fpa::same_row;
