mod circle;
mod rect;

#[doc(inline)]
pub use circle::Circle;

#[doc(inline)]
pub use rect::Rect;
