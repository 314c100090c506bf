use crate::geometry::Rect;

/// Geometric primitive representing a circle
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Circle {
    pub center: (f64, f64),
    pub radius: f64,
}

impl Circle {
    pub fn new(center: (f64, f64), radius: f64) -> Self {
        debug_assert!(
            radius.is_finite() && radius >= 0.0,
            "invalid circle radius: {radius}"
        );
        Self { center, radius }
    }

    /// The largest circle centered in `rect` that fits inside it
    pub fn inscribed(rect: Rect) -> Self {
        let center = (
            (rect.x_min + rect.x_max) / 2.0,
            (rect.y_min + rect.y_max) / 2.0,
        );
        Circle::new(center, f64::min(rect.width(), rect.height()) / 2.0)
    }

    /// Distance between the edges of both circles, negative if they overlap
    pub fn surface_gap(&self, other: &Circle) -> f64 {
        let dx = self.center.0 - other.center.0;
        let dy = self.center.1 - other.center.1;
        dx.hypot(dy) - self.radius - other.radius
    }

    /// Distance between the edge of the circle and the closest point of `rect`, negative if they overlap
    pub fn gap_to_rect(&self, rect: &Rect) -> f64 {
        let (cx, cy) = self.center;
        let dx = f64::max(rect.x_min - cx, cx - rect.x_max).max(0.0);
        let dy = f64::max(rect.y_min - cy, cy - rect.y_max).max(0.0);
        dx.hypot(dy) - self.radius
    }
}
