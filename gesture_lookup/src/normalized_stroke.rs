use super::geometry::{self, Rect};
use super::{Error, Point};

/// Number of points every normalized stroke is resampled to.
pub const NUM_POINTS: usize = 64;

// Below this, a bounding-box dimension counts as collapsed and that axis
// is left at unit scale.
const MIN_BOX_DIM: f32 = 1e-6;

/// A stroke after the full normalization pipeline: resampled to
/// [`NUM_POINTS`] points, rotated so the centroid-to-first-point vector
/// lies on the positive x axis, scaled to the reference square, and
/// translated so the centroid sits at the origin.
///
/// Templates and queries must pass through this exact same pipeline for
/// the path-distance metric between them to mean anything.
pub struct NormalizedStroke {
    points: Vec<Point>,
}

impl NormalizedStroke {
    /// Runs the pipeline on a raw stroke. Rejects strokes with fewer than
    /// two points or with no extent at all.
    pub fn new(points: &[Point], region: &Rect) -> Result<NormalizedStroke, Error> {
        validate(points)?;
        Ok(NormalizedStroke::from_validated(points, region))
    }

    // Pipeline body; `points` has already passed `validate`.
    pub(crate) fn from_validated(points: &[Point], region: &Rect) -> NormalizedStroke {
        let resampled = resample(points, NUM_POINTS);
        let angle = indicative_angle(&resampled);
        let rotated = geometry::rotate_by(&resampled, -angle);
        let scaled = scale_to(&rotated, region);
        let translated = translate_to_origin(&scaled);
        NormalizedStroke { points: translated }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }
}

fn validate(points: &[Point]) -> Result<(), Error> {
    if points.len() < 2 || geometry::path_length(points) <= 0f32 {
        return Err(Error::TooShort);
    }
    Ok(())
}

// Produces exactly `n` points spaced evenly along the stroke's path,
// interpolating linearly inside the original segments.
fn resample(points: &[Point], n: usize) -> Vec<Point> {
    let interval = geometry::path_length(points) / (n - 1) as f32;
    let mut work: Vec<Point> = points.to_vec();
    let mut res: Vec<Point> = Vec::with_capacity(n);
    res.push(work[0]);

    let mut acc = 0f32;
    let mut i = 1;
    while i < work.len() {
        let d = geometry::dist(work[i - 1], work[i]);
        if acc + d >= interval && d > 0f32 {
            let t = (interval - acc) / d;
            let q = Point {
                x: work[i - 1].x + t * (work[i].x - work[i - 1].x),
                y: work[i - 1].y + t * (work[i].y - work[i - 1].y),
            };
            res.push(q);
            // The interpolated point becomes the start of the next segment.
            work.insert(i, q);
            acc = 0f32;
        } else {
            acc += d;
        }
        i += 1;
    }

    // Accumulated rounding can leave the final point (or two) unplaced.
    while res.len() < n {
        res.push(work[work.len() - 1]);
    }
    res.truncate(n);
    res
}

// Angle from the stroke's centroid to its first point.
fn indicative_angle(points: &[Point]) -> f32 {
    let c = geometry::centroid(points);
    (c.y - points[0].y).atan2(c.x - points[0].x)
}

// Non-uniform scale so the bounding box matches the reference square.
// A collapsed dimension (perfectly horizontal or vertical stroke) stays
// at unit scale instead of dividing by zero.
fn scale_to(points: &[Point], region: &Rect) -> Vec<Point> {
    let b = geometry::bounding_rect(points);
    let sx = if b.width > MIN_BOX_DIM {
        region.width / b.width
    } else {
        1f32
    };
    let sy = if b.height > MIN_BOX_DIM {
        region.height / b.height
    } else {
        1f32
    };
    let mut res: Vec<Point> = Vec::with_capacity(points.len());
    for pt in points {
        res.push(Point {
            x: pt.x * sx,
            y: pt.y * sy,
        });
    }
    res
}

// Recenters the stroke so its centroid is exactly at the origin.
fn translate_to_origin(points: &[Point]) -> Vec<Point> {
    let c = geometry::centroid(points);
    let mut res: Vec<Point> = Vec::with_capacity(points.len());
    for pt in points {
        res.push(Point {
            x: pt.x - c.x,
            y: pt.y - c.y,
        });
    }
    res
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::super::Point;
    use super::*;

    // These samples were hand-drawn on a 250x250 canvas

    // A check mark
    static CHECK: &str = "[[62,140],[64,144],[68,150],[73,157],[79,164],[84,170],[88,175],[91,178],[95,174],[101,164],[108,151],[116,136],[124,120],[133,104],[142,88],[150,74],[157,62],[162,53],[166,46],[168,42]]";

    // A full circle, drawn clockwise from the right
    static CIRCLE: &str = "[[195,125],[193,143],[187,160],[177,174],[163,185],[147,192],[129,195],[111,193],[94,186],[80,175],[70,160],[65,143],[64,125],[66,108],[73,92],[84,79],[98,70],[114,64],[131,63],[148,66],[163,74],[176,86],[185,101],[191,113],[194,124]]";

    fn parse_sample(str_points: &str) -> Vec<Point> {
        let raw: Vec<Vec<f32>> = serde_json::from_str(str_points).unwrap();
        let mut points: Vec<Point> = Vec::new();
        for pair in &raw {
            points.push(Point {
                x: pair[0],
                y: pair[1],
            });
        }
        points
    }

    fn region() -> Rect {
        Rect::new(0.0, 0.0, 100.0, 100.0)
    }

    #[test]
    fn test_resample_cardinality() {
        for sample in &[CHECK, CIRCLE] {
            let points = parse_sample(sample);
            let resampled = resample(&points, NUM_POINTS);
            assert_eq!(resampled.len(), NUM_POINTS);
        }
        // Two points are enough
        let line = vec![Point { x: 0.0, y: 0.0 }, Point { x: 10.0, y: 0.0 }];
        assert_eq!(resample(&line, NUM_POINTS).len(), NUM_POINTS);
    }

    #[test]
    fn test_resample_equidistant() {
        // Spacing is measured along the path, so a span that crosses a
        // sharp corner comes out chord-shortened; the check sticks to
        // smooth strokes.
        let line = vec![Point { x: 0.0, y: 0.0 }, Point { x: 10.0, y: 4.0 }];
        for points in &[parse_sample(CIRCLE), line] {
            let resampled = resample(points, NUM_POINTS);
            let interval = geometry::path_length(points) / (NUM_POINTS - 1) as f32;
            for pair in resampled.windows(2) {
                let d = geometry::dist(pair[0], pair[1]);
                assert_relative_eq!(d, interval, max_relative = 0.02);
            }
        }
    }

    #[test]
    fn test_normalized_centroid_at_origin() {
        for sample in &[CHECK, CIRCLE] {
            let points = parse_sample(sample);
            let normalized = NormalizedStroke::new(&points, &region()).unwrap();
            let c = geometry::centroid(normalized.points());
            assert_relative_eq!(c.x, 0.0, epsilon = 1e-2);
            assert_relative_eq!(c.y, 0.0, epsilon = 1e-2);
        }
    }

    #[test]
    fn test_normalized_box_matches_region() {
        for sample in &[CHECK, CIRCLE] {
            let points = parse_sample(sample);
            let normalized = NormalizedStroke::new(&points, &region()).unwrap();
            let b = geometry::bounding_rect(normalized.points());
            assert_relative_eq!(b.width, 100.0, max_relative = 1e-3);
            assert_relative_eq!(b.height, 100.0, max_relative = 1e-3);
        }
    }

    #[test]
    fn test_normalized_first_point_on_positive_x_axis() {
        let points = parse_sample(CHECK);
        let resampled = resample(&points, NUM_POINTS);
        let angle = indicative_angle(&resampled);
        let rotated = geometry::rotate_by(&resampled, -angle);
        // After the rotation the centroid-to-first-point angle is zero.
        assert_relative_eq!(indicative_angle(&rotated), 0.0, epsilon = 1e-3);
    }

    #[test]
    fn test_degenerate_horizontal_stroke() {
        let line = vec![Point { x: 0.0, y: 0.0 }, Point { x: 10.0, y: 0.0 }];
        let normalized = NormalizedStroke::new(&line, &region()).unwrap();
        let b = geometry::bounding_rect(normalized.points());
        // The collapsed axis is left alone; the other is scaled to the region.
        assert_relative_eq!(b.width, 100.0, max_relative = 1e-3);
        assert_relative_eq!(b.height, 0.0, epsilon = 1e-4);
        for pt in normalized.points() {
            assert!(pt.x.is_finite() && pt.y.is_finite());
        }
    }

    #[test]
    fn test_rejects_degenerate_strokes() {
        let one = vec![Point { x: 3.0, y: 3.0 }];
        assert_eq!(
            NormalizedStroke::new(&one, &region()).err(),
            Some(Error::TooShort)
        );
        let stationary = vec![Point { x: 3.0, y: 3.0 }, Point { x: 3.0, y: 3.0 }];
        assert_eq!(
            NormalizedStroke::new(&stationary, &region()).err(),
            Some(Error::TooShort)
        );
    }
}
