use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Immutable axis-aligned rectangle in chart coordinates.
///
/// `y` grows downwards, so `y1` is the top edge and `y2` the bottom edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Boundary {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Boundary {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[must_use]
    pub const fn empty() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    #[must_use]
    pub fn x1(self) -> f64 {
        self.x
    }

    #[must_use]
    pub fn y1(self) -> f64 {
        self.y
    }

    #[must_use]
    pub fn x2(self) -> f64 {
        self.x + self.width
    }

    #[must_use]
    pub fn y2(self) -> f64 {
        self.y + self.height
    }

    /// Inclusive point containment test.
    #[must_use]
    pub fn contains(self, x: f64, y: f64) -> bool {
        self.x <= x && x <= self.x2() && self.y <= y && y <= self.y2()
    }

    #[must_use]
    pub fn translate(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    /// Grows the rectangle by `padding` on every side.
    #[must_use]
    pub fn outset(self, padding: f64) -> Self {
        Self::new(
            self.x - padding,
            self.y - padding,
            self.width + padding * 2.0,
            self.height + padding * 2.0,
        )
    }

    /// Smallest rectangle covering both inputs.
    #[must_use]
    pub fn union(self, other: Self) -> Self {
        let x1 = self.x1().min(other.x1());
        let y1 = self.y1().min(other.y1());
        let x2 = self.x2().max(other.x2());
        let y2 = self.y2().max(other.y2());
        Self::new(x1, y1, x2 - x1, y2 - y1)
    }

    /// Union over an iterator; `None` when the iterator is empty.
    #[must_use]
    pub fn union_all(boxes: impl IntoIterator<Item = Self>) -> Option<Self> {
        boxes.into_iter().reduce(Self::union)
    }

    /// Viewport descriptor in `"x y width height"` form.
    #[must_use]
    pub fn view_box(self) -> String {
        format!("{} {} {} {}", self.x, self.y, self.width, self.height)
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.width.is_finite() && self.height.is_finite()
    }

    pub fn validate_area(self) -> ChartResult<Self> {
        if !self.is_finite() || self.width <= 0.0 || self.height <= 0.0 {
            return Err(ChartError::InvalidViewport {
                width: self.width,
                height: self.height,
            });
        }
        Ok(self)
    }
}
