//! Screen metrics and ellipse geometry (pure Rust, no state).
//!
//! Angles are in degrees, 0° at 3 o'clock, positive values turning
//! clockwise on screen (y grows downward).

use thiserror::Error;

/// Error returned when the host reports an unusable screen size.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetricsError {
    #[error("screen metrics must be positive, got {width}x{height}")]
    NonPositive { width: i64, height: i64 },
}

/// Screen size in pixels. Both dimensions are always > 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenMetrics {
    width: u32,
    height: u32,
}

impl ScreenMetrics {
    /// Validates raw host dimensions.
    pub fn new(width: i64, height: i64) -> Result<Self, MetricsError> {
        if width <= 0 || height <= 0 || width > u32::MAX as i64 || height > u32::MAX as i64 {
            return Err(MetricsError::NonPositive { width, height });
        }
        Ok(Self {
            width: width as u32,
            height: height as u32,
        })
    }

    pub fn width(&self) -> f64 {
        self.width as f64
    }

    pub fn height(&self) -> f64 {
        self.height as f64
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle as (left, top, right, bottom).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundingBox {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl BoundingBox {
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }
}

/// Ellipse the spin is traced around.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Circle {
    pub center_x: f64,
    pub center_y: f64,
    pub radius_x: f64,
    pub radius_y: f64,
}

impl Circle {
    /// Builds a circle, folding negative radii to their magnitude.
    pub fn new(center_x: f64, center_y: f64, radius_x: f64, radius_y: f64) -> Self {
        Self {
            center_x,
            center_y,
            radius_x: radius_x.abs(),
            radius_y: radius_y.abs(),
        }
    }

    /// Places a circle at a fractional position of the screen.
    pub fn on_screen(
        metrics: &ScreenMetrics,
        center_x_ratio: f64,
        center_y_ratio: f64,
        radius_x: f64,
        radius_y: f64,
    ) -> Self {
        Self::new(
            metrics.width() * center_x_ratio,
            metrics.height() * center_y_ratio,
            radius_x,
            radius_y,
        )
    }

    /// The ellipse inscribed in `bbox`.
    pub fn inscribed_in(bbox: &BoundingBox) -> Self {
        Self::new(
            (bbox.left + bbox.right) / 2.0,
            (bbox.top + bbox.bottom) / 2.0,
            bbox.width() / 2.0,
            bbox.height() / 2.0,
        )
    }

    pub fn center(&self) -> Point {
        Point::new(self.center_x, self.center_y)
    }

    pub fn bounding_box(&self) -> BoundingBox {
        bounding_box(self.center_x, self.center_y, self.radius_x, self.radius_y)
    }

    pub fn point_at(&self, angle_deg: f64) -> Point {
        point_on_ellipse(
            self.center_x,
            self.center_y,
            self.radius_x,
            self.radius_y,
            angle_deg,
        )
    }
}

/// Parametric ellipse point. `angle_deg` and `angle_deg + 360` give the
/// same point because the angle is reduced before evaluation.
pub fn point_on_ellipse(cx: f64, cy: f64, rx: f64, ry: f64, angle_deg: f64) -> Point {
    let theta = angle_deg.rem_euclid(360.0).to_radians();
    Point::new(cx + rx * theta.cos(), cy + ry * theta.sin())
}

pub fn bounding_box(cx: f64, cy: f64, rx: f64, ry: f64) -> BoundingBox {
    BoundingBox {
        left: cx - rx,
        top: cy - ry,
        right: cx + rx,
        bottom: cy + ry,
    }
}
