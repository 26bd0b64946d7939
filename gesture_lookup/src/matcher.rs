use std::f32::consts::PI;

use super::geometry;
use super::normalized_stroke::NormalizedStroke;

// Rotation search bracket: a query is compared to each template at angles
// up to 45 degrees either side of its indicative-angle correction.
const ANGLE_RANGE: f32 = 45.0 / 180.0 * PI;

// Bracket width at which the search stops.
const ANGLE_PRECISION: f32 = 2.0 / 180.0 * PI;

// Golden Ratio
const PHI: f32 = 0.61803399;

/// Distance between a query and one template, minimized over a bounded
/// rotation offset. The indicative-angle step already removed the bulk of
/// rotational variation; the search here absorbs the start-point jitter
/// that step cannot.
pub(crate) fn distance_at_best_angle(
    query: &NormalizedStroke,
    template: &NormalizedStroke,
) -> f32 {
    golden_section_min(
        |radians| distance_at_angle(query, template, radians),
        -ANGLE_RANGE,
        ANGLE_RANGE,
        ANGLE_PRECISION,
    )
}

fn distance_at_angle(query: &NormalizedStroke, template: &NormalizedStroke, radians: f32) -> f32 {
    let rotated = geometry::rotate_by(query.points(), radians);
    geometry::path_distance(&rotated, template.points())
}

// Derivative-free minimization of a unimodal function over [a, b]:
// interior probes placed with the golden ratio, bracket shrunk by a
// constant factor per iteration until narrower than `threshold`.
pub(crate) fn golden_section_min<F>(f: F, mut a: f32, mut b: f32, threshold: f32) -> f32
where
    F: Fn(f32) -> f32,
{
    let mut x1 = PHI * a + (1.0 - PHI) * b;
    let mut f1 = f(x1);
    let mut x2 = (1.0 - PHI) * a + PHI * b;
    let mut f2 = f(x2);
    while (b - a).abs() > threshold {
        if f1 < f2 {
            b = x2;
            x2 = x1;
            f2 = f1;
            x1 = PHI * a + (1.0 - PHI) * b;
            f1 = f(x1);
        } else {
            a = x1;
            x1 = x2;
            f1 = f2;
            x2 = (1.0 - PHI) * a + PHI * b;
            f2 = f(x2);
        }
    }
    f32::min(f1, f2)
}
