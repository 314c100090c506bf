mod design;
mod layout;
mod placed_design;
mod sheet;
mod unit;

#[doc(inline)]
pub use design::DesignRequest;

#[doc(inline)]
pub use design::Shape;

#[doc(inline)]
pub use unit::DesignUnit;

#[doc(inline)]
pub use placed_design::PlacedDesign;

#[doc(inline)]
pub use sheet::PackedSheet;

#[doc(inline)]
pub use layout::PackedLayout;
