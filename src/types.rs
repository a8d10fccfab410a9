use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    pub fn offset_from(&self, origin: Point) -> Point {
        Point::new(self.x - origin.x, self.y - origin.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}

impl Dimensions {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn square(side: f64) -> Self {
        Self::new(side, side)
    }
}

/// Area that placed elements must stay inside, in playground-local pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Clamp a top-left position so a box of `size` lies fully inside.
    ///
    /// When the box is larger than the bounds on an axis, that axis pins to 0.
    pub fn clamp(&self, position: Point, size: Dimensions) -> Point {
        Point::new(
            clamp_axis(position.x, self.width - size.width),
            clamp_axis(position.y, self.height - size.height),
        )
    }

    pub fn contains(&self, position: Point, size: Dimensions) -> bool {
        position.x >= 0.0
            && position.y >= 0.0
            && position.x + size.width <= self.width
            && position.y + size.height <= self.height
    }
}

fn clamp_axis(value: f64, max: f64) -> f64 {
    value.min(max).max(0.0)
}
