//! Quadratic Bezier sampling for curved seams.
//!
//! Rise and hip curves are drawn as quadratic Beziers and flattened into
//! point lists at a fixed number of uniform parameter steps:
//!
//! ```text
//! B(t) = (1-t)² · start + 2(1-t)t · control + t² · end,   t = i / resolution
//! ```
//!
//! The first and last samples are the curve's endpoints, bit for bit, so
//! a sampled curve joins the neighbouring straight seams without gaps.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::DraftingError;
use crate::geometry::Point;

/// Number of intervals used when no resolution is given (21 points).
pub const DEFAULT_RESOLUTION: usize = 20;

/// Finest sampling accepted; keeps every curve's point buffer bounded.
pub const MAX_RESOLUTION: usize = 10_000;

/// A quadratic Bezier segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuadraticBezier {
    pub start: Point,
    pub control: Point,
    pub end: Point,
}

impl QuadraticBezier {
    pub fn new(start: Point, control: Point, end: Point) -> Self {
        Self {
            start,
            control,
            end,
        }
    }

    /// Evaluates the curve at parameter `t`.
    pub fn point_at(&self, t: f64) -> Point {
        // Expanded around `start`: a curve whose three points coincide
        // evaluates to exactly that point for every t.
        let b = 2.0 * (1.0 - t) * t;
        let c = t * t;
        Point::new(
            self.start.x + b * (self.control.x - self.start.x) + c * (self.end.x - self.start.x),
            self.start.y + b * (self.control.y - self.start.y) + c * (self.end.y - self.start.y),
        )
    }

    /// Samples `resolution + 1` points at uniform parameter steps.
    ///
    /// Returns [`DraftingError::DegenerateCurve`] unless
    /// `1 <= resolution <= MAX_RESOLUTION`.
    pub fn sample(&self, resolution: usize) -> Result<Vec<Point>, DraftingError> {
        check_resolution(resolution)?;

        let mut points = Vec::with_capacity(resolution + 1);
        points.push(self.start);
        for i in 1..resolution {
            let t = i as f64 / resolution as f64;
            points.push(self.point_at(t));
        }
        points.push(self.end);
        Ok(points)
    }
}

/// Rejects resolutions outside `1..=MAX_RESOLUTION`.
pub fn check_resolution(resolution: usize) -> Result<(), DraftingError> {
    if (1..=MAX_RESOLUTION).contains(&resolution) {
        Ok(())
    } else {
        warn!(resolution, max = MAX_RESOLUTION, "Rejected curve resolution");
        Err(DraftingError::DegenerateCurve { resolution })
    }
}

/// Samples the quadratic Bezier through `start` and `end` pulled toward
/// `control`.
pub fn sample_quadratic(
    start: Point,
    end: Point,
    control: Point,
    resolution: usize,
) -> Result<Vec<Point>, DraftingError> {
    QuadraticBezier::new(start, control, end).sample(resolution)
}
