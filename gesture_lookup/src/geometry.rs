use serde_derive::{Deserialize, Serialize};

use super::Point;

/// Axis-aligned rectangle. Doubles as the caller-supplied normalization
/// region (only its size matters there) and as a computed bounding box.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Rect {
        Rect {
            x,
            y,
            width,
            height,
        }
    }
}

// Gets distance between two points
pub(crate) fn dist(a: Point, b: Point) -> f32 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt()
}

// Arithmetic mean of the points. Callers guarantee a non-empty stroke.
pub(crate) fn centroid(points: &[Point]) -> Point {
    let mut x = 0f32;
    let mut y = 0f32;
    for pt in points {
        x += pt.x;
        y += pt.y;
    }
    Point {
        x: x / points.len() as f32,
        y: y / points.len() as f32,
    }
}

// Minimal axis-aligned rectangle containing all points
pub(crate) fn bounding_rect(points: &[Point]) -> Rect {
    let mut left = f32::MAX;
    let mut right = f32::MIN;
    let mut top = f32::MAX;
    let mut bottom = f32::MIN;
    for pt in points {
        if pt.x < left {
            left = pt.x;
        }
        if pt.x > right {
            right = pt.x;
        }
        if pt.y < top {
            top = pt.y;
        }
        if pt.y > bottom {
            bottom = pt.y;
        }
    }
    Rect::new(left, top, right - left, bottom - top)
}

// Sum of distances between consecutive points
pub(crate) fn path_length(points: &[Point]) -> f32 {
    let mut total = 0f32;
    for i in 1..points.len() {
        total += dist(points[i - 1], points[i]);
    }
    total
}

// Mean pointwise distance between two index-aligned strokes.
// Resampling guarantees equal cardinality before this is ever called.
pub(crate) fn path_distance(a: &[Point], b: &[Point]) -> f32 {
    assert!(a.len() == b.len(), "Expected strokes with equal point counts.");
    let mut total = 0f32;
    for i in 0..a.len() {
        total += dist(a[i], b[i]);
    }
    total / a.len() as f32
}

// Rotates every point about the stroke's centroid
pub(crate) fn rotate_by(points: &[Point], radians: f32) -> Vec<Point> {
    let c = centroid(points);
    let (sin, cos) = radians.sin_cos();
    let mut res: Vec<Point> = Vec::with_capacity(points.len());
    for pt in points {
        let dx = pt.x - c.x;
        let dy = pt.y - c.y;
        res.push(Point {
            x: dx * cos - dy * sin + c.x,
            y: dx * sin + dy * cos + c.y,
        });
    }
    res
}
