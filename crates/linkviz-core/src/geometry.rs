//! Geometric primitives for list layout and connector routing.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate in canvas space
//! - [`Size`] - Width and height dimensions
//! - [`Bounds`] - A rectangular bounding box defined by minimum and maximum coordinates
//!
//! # Coordinate System
//!
//! linkviz uses a coordinate system consistent with SVG:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! - **Origin**: Top-left corner of the canvas at `(0, 0)`
//! - **X-axis**: Increases rightward
//! - **Y-axis**: Increases downward, so later rows have larger `y`

/// A 2D point representing a position on the canvas.
///
/// # Examples
///
/// ```
/// # use linkviz_core::geometry::Point;
/// let p1 = Point::new(10.0, 20.0);
/// let p2 = Point::new(5.0, 5.0);
///
/// let moved = p1.shift_x(p2.x()).shift_y(p2.y());
/// assert_eq!(moved.x(), 15.0);
/// assert_eq!(moved.y(), 25.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Returns this point moved horizontally by `dx`.
    ///
    /// ```
    /// # use linkviz_core::geometry::Point;
    /// let p = Point::new(100.0, 40.0).shift_x(-25.0);
    /// assert_eq!(p, Point::new(75.0, 40.0));
    /// ```
    pub fn shift_x(self, dx: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y,
        }
    }

    /// Returns this point moved vertically by `dy`
    pub fn shift_y(self, dy: f32) -> Self {
        Self {
            x: self.x,
            y: self.y + dy,
        }
    }

    /// Converts a point and size into a bounds rectangle centered on the point
    pub fn to_bounds(self, size: Size) -> Bounds {
        Bounds::new_from_center(self, size)
    }
}

/// Represents the dimensions of an element with width and height
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }
}

/// Represents a rectangular bounding box with minimum and maximum coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Bounds {
    /// Creates a new bounds from a center point and a size
    pub fn new_from_center(center: Point, size: Size) -> Self {
        let half_width = size.width / 2.0;
        let half_height = size.height / 2.0;
        Self {
            min_x: center.x - half_width,
            min_y: center.y - half_height,
            max_x: center.x + half_width,
            max_y: center.y + half_height,
        }
    }

    /// Returns the minimum x-coordinate of the bounds
    pub fn min_x(self) -> f32 {
        self.min_x
    }

    /// Returns the minimum y-coordinate of the bounds
    pub fn min_y(self) -> f32 {
        self.min_y
    }

    /// Returns the maximum x-coordinate of the bounds
    pub fn max_x(self) -> f32 {
        self.max_x
    }

    /// Returns the maximum y-coordinate of the bounds
    pub fn max_y(self) -> f32 {
        self.max_y
    }

    /// Returns the width of the bounds
    pub fn width(self) -> f32 {
        self.max_x - self.min_x
    }

    /// Returns the height of the bounds
    pub fn height(self) -> f32 {
        self.max_y - self.min_y
    }
}


#[cfg(test)]
mod proptest_tests {
    use float_cmp::approx_eq;
    use proptest::prelude::*;

    use super::*;

    fn point_strategy() -> impl Strategy<Value = Point> {
        (-1000.0f32..1000.0, -1000.0f32..1000.0).prop_map(|(x, y)| Point::new(x, y))
    }

    fn size_strategy() -> impl Strategy<Value = Size> {
        (1.0f32..500.0, 1.0f32..500.0).prop_map(|(w, h)| Size::new(w, h))
    }

    fn check_shift_inverse(p: Point, dx: f32, dy: f32) -> Result<(), TestCaseError> {
        let result = p.shift_x(dx).shift_y(dy).shift_x(-dx).shift_y(-dy);
        prop_assert!(approx_eq!(f32, result.x(), p.x(), epsilon = 0.001));
        prop_assert!(approx_eq!(f32, result.y(), p.y(), epsilon = 0.001));
        Ok(())
    }

    fn check_bounds_keep_size(center: Point, size: Size) -> Result<(), TestCaseError> {
        let bounds = center.to_bounds(size);
        prop_assert!(approx_eq!(f32, bounds.width(), size.width(), epsilon = 0.001));
        prop_assert!(approx_eq!(f32, bounds.height(), size.height(), epsilon = 0.001));
        prop_assert!(bounds.min_x() <= center.x() && center.x() <= bounds.max_x());
        prop_assert!(bounds.min_y() <= center.y() && center.y() <= bounds.max_y());
        Ok(())
    }

    proptest! {
        #[test]
        fn shift_inverse(p in point_strategy(), dx in -500.0f32..500.0, dy in -500.0f32..500.0) {
            check_shift_inverse(p, dx, dy)?;
        }

        #[test]
        fn bounds_keep_size(center in point_strategy(), size in size_strategy()) {
            check_bounds_keep_size(center, size)?;
        }
    }
}
