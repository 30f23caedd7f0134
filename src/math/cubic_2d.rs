use crate::error::{GeometryError, Result};

use super::{Point2, Vector2, TOLERANCE};

/// Power-basis coefficients of a cubic Bézier: `a t³ + b t² + c t + d`.
///
/// The derivative along one axis is the quadratic `3a t² + 2b t + c`
/// in that axis' components.
#[must_use]
pub fn cubic_parameters(
    p0: &Point2,
    p1: &Point2,
    p2: &Point2,
    p3: &Point2,
) -> (Vector2, Vector2, Vector2, Point2) {
    let c = (p1 - p0) * 3.0;
    let b = (p2 - p1) * 3.0 - c;
    let a = (p3 - p0) - c - b;
    (a, b, c, *p0)
}

/// Real roots of `a x² + b x + c = 0`.
///
/// Degenerates to the linear case when `|a|` is below tolerance; a
/// near-constant equation has no roots. A double root is reported twice.
#[must_use]
pub fn solve_quadratic(a: f64, b: f64, c: f64) -> Vec<f64> {
    if a.abs() < TOLERANCE {
        if b.abs() < TOLERANCE {
            return Vec::new();
        }
        return vec![-c / b];
    }
    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return Vec::new();
    }
    let sqrt = discriminant.sqrt();
    vec![(-b + sqrt) / (2.0 * a), (-b - sqrt) / (2.0 * a)]
}

/// Parameters in `[0, 1)` where the cubic's tangent is parallel to an axis.
///
/// `horizontal` enables the X-derivative root set, `vertical` the
/// Y-derivative root set. Returns the union, sorted ascending, with
/// duplicate values preserved.
#[must_use]
pub fn cubic_extrema(
    p0: &Point2,
    p1: &Point2,
    p2: &Point2,
    p3: &Point2,
    horizontal: bool,
    vertical: bool,
) -> Vec<f64> {
    let (a, b, c, _) = cubic_parameters(p0, p1, p2, p3);
    let mut roots = Vec::new();
    if horizontal {
        roots.extend(solve_quadratic(a.x * 3.0, b.x * 2.0, c.x));
    }
    if vertical {
        roots.extend(solve_quadratic(a.y * 3.0, b.y * 2.0, c.y));
    }
    roots.retain(|t| (0.0..1.0).contains(t));
    roots.sort_unstable_by(f64::total_cmp);
    roots
}

/// Linear interpolation between two points.
fn lerp(a: &Point2, b: &Point2, t: f64) -> Point2 {
    a + (b - a) * t
}

/// Evaluates a cubic Bézier at parameter `t` by de Casteljau reduction.
#[must_use]
pub fn cubic_point_at(points: &[Point2; 4], t: f64) -> Point2 {
    let q0 = lerp(&points[0], &points[1], t);
    let q1 = lerp(&points[1], &points[2], t);
    let q2 = lerp(&points[2], &points[3], t);
    let r0 = lerp(&q0, &q1, t);
    let r1 = lerp(&q1, &q2, t);
    lerp(&r0, &r1, t)
}

/// Splits a cubic at `t`, producing the head and tail sub-cubics.
fn subdivide(points: &[Point2; 4], t: f64) -> ([Point2; 4], [Point2; 4]) {
    let q0 = lerp(&points[0], &points[1], t);
    let q1 = lerp(&points[1], &points[2], t);
    let q2 = lerp(&points[2], &points[3], t);
    let r0 = lerp(&q0, &q1, t);
    let r1 = lerp(&q1, &q2, t);
    let s = lerp(&r0, &r1, t);
    ([points[0], q0, r0, s], [s, r1, q2, points[3]])
}

/// Partitions a cubic at each parameter, yielding `params.len() + 1`
/// consecutive sub-cubics whose concatenation reproduces the curve.
///
/// Parameters must be strictly increasing and strictly inside `(0, 1)`;
/// 0 and 1 denote the curve endpoints and are never valid split points.
///
/// # Errors
///
/// Returns an error if a parameter lies outside `(0, 1)` or the
/// sequence is not strictly increasing.
pub fn split_cubic_at(
    p0: &Point2,
    p1: &Point2,
    p2: &Point2,
    p3: &Point2,
    params: &[f64],
) -> Result<Vec<[Point2; 4]>> {
    let mut previous = 0.0;
    for &t in params {
        if t <= 0.0 || t >= 1.0 {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "t",
                value: t,
                min: 0.0,
                max: 1.0,
            }
            .into());
        }
        if t <= previous {
            return Err(GeometryError::UnorderedSplitParameters.into());
        }
        previous = t;
    }

    let mut groups = Vec::with_capacity(params.len() + 1);
    let mut current = [*p0, *p1, *p2, *p3];
    let mut consumed = 0.0;
    for &t in params {
        // Renormalize into the remaining tail's parameter range.
        let local = (t - consumed) / (1.0 - consumed);
        let (head, tail) = subdivide(&current, local);
        groups.push(head);
        current = tail;
        consumed = t;
    }
    groups.push(current);
    Ok(groups)
}
