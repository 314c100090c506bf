use crate::util::FPA;

///Axis-aligned rectangle, with the y-axis pointing down the roll
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Rect {
    pub x_min: f64,
    pub y_min: f64,
    pub x_max: f64,
    pub y_max: f64,
}

impl Rect {
    /// Creates a rectangle from its top-left corner and its dimensions.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        debug_assert!(
            width >= 0.0 && height >= 0.0,
            "invalid rectangle dimensions: {width} x {height}"
        );
        Rect {
            x_min: x,
            y_min: y,
            x_max: x + width,
            y_max: y + height,
        }
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// Whether a `width` x `height` rectangle fits inside `self` (within tolerance).
    pub fn fits(&self, width: f64, height: f64) -> bool {
        FPA(width) <= FPA(self.width()) && FPA(height) <= FPA(self.height())
    }

    /// Whether `other` lies entirely within `self` (within tolerance).
    pub fn contains(&self, other: &Rect) -> bool {
        FPA(self.x_min) <= FPA(other.x_min)
            && FPA(self.y_min) <= FPA(other.y_min)
            && FPA(self.x_max) >= FPA(other.x_max)
            && FPA(self.y_max) >= FPA(other.y_max)
    }

    /// Whether the interiors of both rectangles overlap. Touching edges do not count as a collision.
    pub fn collides_with(&self, other: &Rect) -> bool {
        FPA(self.x_min) < FPA(other.x_max)
            && FPA(other.x_min) < FPA(self.x_max)
            && FPA(self.y_min) < FPA(other.y_max)
            && FPA(other.y_min) < FPA(self.y_max)
    }

    /// Signed gap between two rectangles: the largest of the horizontal and vertical clearance.
    /// Negative if the rectangles overlap.
    pub fn gap(&self, other: &Rect) -> f64 {
        let x_gap = f64::max(other.x_min - self.x_max, self.x_min - other.x_max);
        let y_gap = f64::max(other.y_min - self.y_max, self.y_min - other.y_max);
        f64::max(x_gap, y_gap)
    }

    /// Returns the parts of `self` not covered by `used`, as (possibly overlapping) maximal rectangles.
    /// Returns `None` if `used` does not collide with `self`.
    pub fn subtract(&self, used: &Rect) -> Option<Vec<Rect>> {
        if !self.collides_with(used) {
            return None;
        }
        let mut remains = Vec::with_capacity(4);
        if FPA(used.x_min) > FPA(self.x_min) {
            //left
            remains.push(Rect {
                x_max: used.x_min,
                ..*self
            });
        }
        if FPA(used.x_max) < FPA(self.x_max) {
            //right
            remains.push(Rect {
                x_min: used.x_max,
                ..*self
            });
        }
        if FPA(used.y_min) > FPA(self.y_min) {
            //above
            remains.push(Rect {
                y_max: used.y_min,
                ..*self
            });
        }
        if FPA(used.y_max) < FPA(self.y_max) {
            //below
            remains.push(Rect {
                y_min: used.y_max,
                ..*self
            });
        }
        Some(remains)
    }
}
