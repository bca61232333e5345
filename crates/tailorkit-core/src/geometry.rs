//! 2-D geometry primitives for pattern pieces.
//!
//! Pattern space uses a fixed orientation: +X runs across the body's
//! half-width, +Y runs up toward the waist. Every closed outline produced
//! by [`PolygonBuilder::finish`] repeats its first point at the end and
//! winds counter-clockwise.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A point in pattern space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Creates a new point with the given X and Y coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The origin (0, 0).
    pub fn origin() -> Self {
        Self::default()
    }

    /// Returns this point expressed relative to `origin`.
    pub fn relative_to(&self, origin: &Point) -> Self {
        Self::new(self.x - origin.x, self.y - origin.y)
    }

    /// Whether both coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    /// Creates a bounding box from its corners.
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Smallest box containing all `points`, or `None` for an empty slice.
    pub fn from_points(points: &[Point]) -> Option<Self> {
        let first = points.first()?;
        let mut bounds = Self::new(first.x, first.y, first.x, first.y);
        for p in &points[1..] {
            bounds.min_x = bounds.min_x.min(p.x);
            bounds.min_y = bounds.min_y.min(p.y);
            bounds.max_x = bounds.max_x.max(p.x);
            bounds.max_y = bounds.max_y.max(p.y);
        }
        Some(bounds)
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn center(&self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// Smallest box containing both boxes.
    pub fn union(&self, other: &Bounds) -> Bounds {
        Bounds::new(
            self.min_x.min(other.min_x),
            self.min_y.min(other.min_y),
            self.max_x.max(other.max_x),
            self.max_y.max(other.max_y),
        )
    }

    /// Whether `other` lies entirely inside this box (edges included).
    pub fn contains(&self, other: &Bounds) -> bool {
        other.min_x >= self.min_x
            && other.min_y >= self.min_y
            && other.max_x <= self.max_x
            && other.max_y <= self.max_y
    }
}

/// An ordered outline of points.
///
/// Outlines built through [`PolygonBuilder`] are closed (first == last)
/// and wind counter-clockwise.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Polygon {
    points: Vec<Point>,
}

impl Polygon {
    /// Wraps an existing point list as-is.
    pub fn from_points(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<&Point> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&Point> {
        self.points.last()
    }

    /// Whether the outline ends where it starts.
    pub fn is_closed(&self) -> bool {
        self.points.len() >= 2 && self.points.first() == self.points.last()
    }

    /// Appends the first point if the outline is not closed yet.
    pub fn close(&mut self) {
        if let Some(first) = self.points.first().copied() {
            if self.points.last() != Some(&first) || self.points.len() == 1 {
                self.points.push(first);
            }
        }
    }

    /// Distinct vertices: the point list without its closing repeat.
    pub fn vertices(&self) -> &[Point] {
        if self.is_closed() {
            &self.points[..self.points.len() - 1]
        } else {
            &self.points
        }
    }

    /// Shoelace area; positive for counter-clockwise outlines.
    pub fn signed_area(&self) -> f64 {
        let vertices = self.vertices();
        let n = vertices.len();
        if n < 3 {
            return 0.0;
        }
        let mut twice_area = 0.0;
        for i in 0..n {
            let a = vertices[i];
            let b = vertices[(i + 1) % n];
            twice_area += a.x * b.y - b.x * a.y;
        }
        twice_area / 2.0
    }

    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    pub fn is_ccw(&self) -> bool {
        self.signed_area() > 0.0
    }

    /// Reverses the winding in place when the outline runs clockwise.
    pub fn ensure_ccw(&mut self) {
        if self.signed_area() < 0.0 {
            self.points.reverse();
        }
    }

    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::from_points(&self.points)
    }

    /// Whether no two edges of the outline cross or touch, other than
    /// neighbours sharing their common vertex. An edge that doubles back
    /// over its neighbour also counts as an intersection.
    pub fn is_simple(&self) -> bool {
        let v = self.vertices();
        let n = v.len();
        if n < 3 {
            return false;
        }

        for i in 0..n {
            let a1 = v[i];
            let a2 = v[(i + 1) % n];
            if a1 == a2 {
                return false;
            }
            for j in (i + 1)..n {
                let b1 = v[j];
                let b2 = v[(j + 1) % n];
                let adjacent = j == i + 1 || (i == 0 && j == n - 1);
                if adjacent {
                    // Shared vertex is fine; folding back onto the neighbour is not.
                    let (d1, d2) = if j == i + 1 {
                        (sub(a2, a1), sub(b2, b1))
                    } else {
                        (sub(b2, b1), sub(a2, a1))
                    };
                    if cross(d1, d2) == 0.0 && dot(d1, d2) < 0.0 {
                        return false;
                    }
                    continue;
                }
                if segments_intersect(a1, a2, b1, b2) {
                    return false;
                }
            }
        }
        true
    }
}

impl fmt::Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Polygon[{} points]", self.points.len())
    }
}

/// Incrementally assembles an outline from anchors and curve samples.
#[derive(Debug, Default)]
pub struct PolygonBuilder {
    points: Vec<Point>,
}

impl PolygonBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts an outline at `start`.
    pub fn starting_at(start: Point) -> Self {
        let mut builder = Self::new();
        builder.push(start);
        builder
    }

    /// Adds a point, skipping it when it repeats the previous one.
    pub fn push(&mut self, point: Point) -> &mut Self {
        if self.points.last() != Some(&point) {
            self.points.push(point);
        }
        self
    }

    /// Adds every point of `points` in order.
    pub fn extend<I>(&mut self, points: I) -> &mut Self
    where
        I: IntoIterator<Item = Point>,
    {
        for p in points {
            self.push(p);
        }
        self
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Closes the outline and normalises it to counter-clockwise winding.
    pub fn finish(self) -> Polygon {
        let mut polygon = Polygon::from_points(self.points);
        polygon.close();
        polygon.ensure_ccw();
        polygon
    }
}

fn sub(a: Point, b: Point) -> (f64, f64) {
    (a.x - b.x, a.y - b.y)
}

fn cross(a: (f64, f64), b: (f64, f64)) -> f64 {
    a.0 * b.1 - a.1 * b.0
}

fn dot(a: (f64, f64), b: (f64, f64)) -> f64 {
    a.0 * b.0 + a.1 * b.1
}

fn orientation(p: Point, q: Point, r: Point) -> f64 {
    cross(sub(q, p), sub(r, p))
}

fn on_segment(p: Point, q: Point, r: Point) -> bool {
    // q is collinear with p-r; check it lies within the segment's box
    q.x >= p.x.min(r.x) && q.x <= p.x.max(r.x) && q.y >= p.y.min(r.y) && q.y <= p.y.max(r.y)
}

/// Whether segments `p1-p2` and `q1-q2` share at least one point.
pub fn segments_intersect(p1: Point, p2: Point, q1: Point, q2: Point) -> bool {
    let o1 = orientation(p1, p2, q1);
    let o2 = orientation(p1, p2, q2);
    let o3 = orientation(q1, q2, p1);
    let o4 = orientation(q1, q2, p2);

    if ((o1 > 0.0 && o2 < 0.0) || (o1 < 0.0 && o2 > 0.0))
        && ((o3 > 0.0 && o4 < 0.0) || (o3 < 0.0 && o4 > 0.0))
    {
        return true;
    }

    (o1 == 0.0 && on_segment(p1, q1, p2))
        || (o2 == 0.0 && on_segment(p1, q2, p2))
        || (o3 == 0.0 && on_segment(q1, p1, q2))
        || (o4 == 0.0 && on_segment(q1, p2, q2))
}
