//! Shapes in normalized drawing-surface space.
//!
//! Both axes span `[-1, 1]`, `x` grows to the right and `y` grows upward.

mod intersect;
mod mapping;

pub use intersect::{DEFAULT_TANGENT_TOLERANCE, Hit, Intersections, Tangency, intersect};
pub use mapping::SurfaceMapper;

use serde::Serialize;
use std::f64::consts::TAU;

use crate::util::usize_to_f64;

/// Number of outline vertices used when a circle is drawn as a polygon.
pub const DEFAULT_CIRCLE_SEGMENTS: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Circle given by its center and one point on its boundary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Circle {
    pub center: Point,
    pub boundary: Point,
}

impl Circle {
    pub const fn new(center: Point, boundary: Point) -> Self {
        Self { center, boundary }
    }

    /// Radius is always derived from the two defining points.
    pub fn radius(&self) -> f64 {
        self.center.distance(self.boundary)
    }

    /// Evenly spaced boundary vertices, starting at angle zero and running
    /// counter-clockwise. Returns an empty outline for `segments == 0`.
    pub fn outline(&self, segments: usize) -> Vec<Point> {
        if segments == 0 {
            return Vec::new();
        }
        let r = self.radius();
        let step = TAU / usize_to_f64(segments);
        (0..segments)
            .map(|i| {
                let angle = step * usize_to_f64(i);
                Point::new(
                    r.mul_add(angle.cos(), self.center.x),
                    r.mul_add(angle.sin(), self.center.y),
                )
            })
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LineSegment {
    pub start: Point,
    pub end: Point,
}

impl LineSegment {
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Point at parameter `t`, where `t = 0` is `start` and `t = 1` is `end`.
    pub fn point_at(&self, t: f64) -> Point {
        Point::new(
            (self.end.x - self.start.x).mul_add(t, self.start.x),
            (self.end.y - self.start.y).mul_add(t, self.start.y),
        )
    }

    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }
}
