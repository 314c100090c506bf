use crate::entities::Shape;
use crate::geometry::{Circle, Rect};

/// A physical instance of a design, positioned on a sheet.
/// Coordinates are sheet-local, in inches, with `(x, y)` the top-left corner of the bounding box.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedDesign {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub label: String,
    /// Used by renderers to choose between drawing a rectangle or a circle
    pub shape: Shape,
}

impl PlacedDesign {
    pub fn bbox(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// The inscribed circle of the bounding box, if the design is round.
    pub fn circle(&self) -> Option<Circle> {
        match self.shape {
            Shape::Round => Some(Circle::inscribed(self.bbox())),
            Shape::Box => None,
        }
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}
