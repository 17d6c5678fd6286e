//! Wheel geometry in the host's local coordinate space.
//!
//! The radius and center of the wheel are always derived from the current
//! bounds size, so a `Geometry` can never carry a stale radius.

use crate::error::{Result, WheelError};

/// A 2D point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: Point) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// A 2D size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Check that both dimensions are finite and strictly positive.
    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// A rectangle defined by position and size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rectangle {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Edges are inclusive.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }

    /// Get the center point of this rectangle.
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// The largest square that fits inside this rectangle, centered on it.
    ///
    /// This is where a square image lands when displayed aspect-fit.
    pub fn fit_square(&self) -> Rectangle {
        let side = self.width.min(self.height);
        let center = self.center();
        Rectangle::new(center.x - side / 2.0, center.y - side / 2.0, side, side)
    }
}

/// Geometry of a wheel hosted in a view: bounds size plus border inset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    size: Size,
    border_width: f32,
}

impl Geometry {
    /// Create geometry for bounds of the given size with no border.
    pub fn new(width: f32, height: f32) -> Result<Self> {
        let size = Size::new(width, height);
        if !size.is_valid() {
            return Err(WheelError::InvalidDimensions { width, height });
        }
        Ok(Self {
            size,
            border_width: 0.0,
        })
    }

    /// Builder: set the border inset. Points inside the border band never
    /// report a wheel color.
    pub fn with_border_width(mut self, border_width: f32) -> Result<Self> {
        if !border_width.is_finite() || border_width < 0.0 {
            return Err(WheelError::InvalidBorderWidth(border_width));
        }
        self.border_width = border_width;
        Ok(self)
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn border_width(&self) -> f32 {
        self.border_width
    }

    /// Bounds rectangle in local coordinates (origin at 0,0).
    pub fn bounds(&self) -> Rectangle {
        Rectangle::new(0.0, 0.0, self.size.width, self.size.height)
    }

    /// Half of the smaller bounds dimension.
    pub fn radius(&self) -> f32 {
        self.size.width.min(self.size.height) / 2.0
    }

    /// Bounds midpoint.
    pub fn center(&self) -> Point {
        self.bounds().center()
    }

    pub fn diameter(&self) -> f32 {
        self.radius() * 2.0
    }
}
