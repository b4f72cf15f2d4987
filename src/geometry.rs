//! Plane geometry for the dial: pointer angles around a center point and
//! wraparound-safe angular deltas.

/// A point in client (viewport) coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned bounding box, as reported by `getBoundingClientRect`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn center(&self) -> Point {
        Point::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

/// Angle of `pointer` around `center` in degrees, normalized to `[0, 360)`.
///
/// Client coordinates grow downwards, so increasing angles run clockwise on
/// screen. A pointer exactly on the center yields `atan2(0, 0) = 0`.
pub fn pointer_angle(pointer: Point, center: Point) -> f64 {
    let dx = pointer.x - center.x;
    let dy = pointer.y - center.y;
    let angle = dy.atan2(dx).to_degrees();
    let angle = if angle < 0.0 { angle + 360.0 } else { angle };
    // A tiny negative angle rounds up to exactly 360 after the shift.
    if angle >= 360.0 {
        0.0
    } else {
        angle
    }
}

/// Signed difference `to - from`, folded once so a step across the 0°/360°
/// seam reads as the short way round.
pub fn angular_delta(from: f64, to: f64) -> f64 {
    let delta = to - from;
    if delta > 180.0 {
        delta - 360.0
    } else if delta < -180.0 {
        delta + 360.0
    } else {
        delta
    }
}
