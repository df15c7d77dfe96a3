//! Pointer geometry.
//!
//! Angles are in degrees, 0° along +x (3 o'clock) and increasing toward +y.
//! With screen coordinates (y pointing down) that is clockwise, the same sense
//! in which slices are laid out and drawn.

use crate::slice::{FULL_CIRCLE_DEG, Slice};

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

/// Rectangle the pie is inscribed in.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_size(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn radius(&self) -> f64 {
        self.width.min(self.height) / 2.0
    }

    fn offset(&self, point: Point) -> (f64, f64) {
        let center = self.center();
        (point.x - center.x, point.y - center.y)
    }
}

pub fn distance_from_center(point: Point, bounds: &Bounds) -> f64 {
    let (dx, dy) = bounds.offset(point);
    dx.hypot(dy)
}

/// Whether `point` lies in the circle inscribed in `bounds` (edge included).
pub fn is_inside(point: Point, bounds: &Bounds) -> bool {
    distance_from_center(point, bounds) <= bounds.radius()
}

/// Angle of `point` around the bounds center, in `[0, 360)`. The center itself
/// maps to 0.
pub fn angle_of(point: Point, bounds: &Bounds) -> f64 {
    let (dx, dy) = bounds.offset(point);
    let angle = dy.atan2(dx).to_degrees().rem_euclid(FULL_CIRCLE_DEG);
    // rem_euclid can round tiny negatives up to exactly 360
    if angle >= FULL_CIRCLE_DEG { 0.0 } else { angle }
}

/// Index of the first slice strictly containing `angle_deg`.
pub fn slice_at(angle_deg: f64, slices: &[Slice]) -> Option<usize> {
    slices.iter().position(|s| s.contains_angle(angle_deg))
}

/// Slice under the pointer, if the pointer is inside the pie at all.
pub fn hit(point: Point, bounds: &Bounds, slices: &[Slice]) -> Option<usize> {
    is_inside(point, bounds)
        .then(|| slice_at(angle_of(point, bounds), slices))
        .flatten()
}
