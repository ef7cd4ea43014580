//! Enclosing circles for a set of placed circles.
//!
//! Two methods are available:
//!
//! - [`minimal_enclosing_circle`]: the farthest-pair heuristic. It spans the
//!   pair of circles with the largest boundary-to-boundary extent and ignores
//!   every other circle, so for some layouts (e.g. three mutually tangent equal
//!   circles) the result does not cover all circles. This is the default
//!   bundle measure.
//! - [`exact_enclosing_circle`]: the true smallest circle containing all
//!   circles, found by checking every support set of one, two and three
//!   circles.

use crate::geometry::{Circle, Role};
use nalgebra::Point2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Method used to compute the bundle circle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EnclosingMethod {
    /// Farthest-pair heuristic (see [`minimal_enclosing_circle`]).
    #[default]
    FarthestPair,
    /// Smallest enclosing circle (see [`exact_enclosing_circle`]).
    Exact,
}

impl EnclosingMethod {
    /// Computes the enclosing circle of `circles` with this method.
    pub fn enclose(self, circles: &[Circle], tolerance: f64) -> Option<Circle> {
        match self {
            EnclosingMethod::FarthestPair => minimal_enclosing_circle(circles),
            EnclosingMethod::Exact => exact_enclosing_circle(circles, tolerance),
        }
    }
}

/// Farthest-pair enclosing circle.
///
/// Picks the pair `(i, j)`, `i < j`, maximizing `|c_i c_j| + r_i + r_j` (the
/// first maximum in lexicographic pair order wins), pushes each center of the
/// pair outward along the pair axis by its own radius, and returns the circle
/// whose diameter is the segment between the two pushed points.
///
/// Returns `None` for an empty slice. The result is tagged [`Role::Enclosing`].
pub fn minimal_enclosing_circle(circles: &[Circle]) -> Option<Circle> {
    let (first, second) = match circles {
        [] => return None,
        [only] => return Some(only.with_role(Role::Enclosing)),
        _ => farthest_pair(circles)?,
    };

    let axis = second.center() - first.center();
    let length = axis.norm();
    if length == 0.0 {
        let radius = first.radius().max(second.radius());
        return Some(Circle::at(first.center(), radius).with_role(Role::Enclosing));
    }

    let direction = axis / length;
    let far_second = second.center() + direction * second.radius();
    let far_first = first.center() - direction * first.radius();

    Some(diametral(far_first, far_second).with_role(Role::Enclosing))
}

fn farthest_pair(circles: &[Circle]) -> Option<(Circle, Circle)> {
    let mut best: Option<(Circle, Circle)> = None;
    let mut longest = f64::MIN;

    for (i, a) in circles.iter().enumerate() {
        for b in &circles[i + 1..] {
            let extent = a.center_distance(b) + a.radius() + b.radius();
            if extent > longest {
                longest = extent;
                best = Some((*a, *b));
            }
        }
    }

    best
}

/// Circle with the segment `p`–`q` as diameter.
fn diametral(p: Point2<f64>, q: Point2<f64>) -> Circle {
    let center = nalgebra::center(&p, &q);
    Circle::at(center, (q - p).norm() / 2.0)
}

/// Smallest circle containing every circle in `circles`.
///
/// The optimum touches at most three of the input circles from inside, so the
/// candidates are: each single circle, the diametral circle of each pair, and
/// the circle internally tangent to each triple. The smallest candidate that
/// contains all circles (within the relative `tolerance`) wins.
///
/// Returns `None` for an empty slice. The result is tagged [`Role::Enclosing`].
pub fn exact_enclosing_circle(circles: &[Circle], tolerance: f64) -> Option<Circle> {
    if circles.is_empty() {
        return None;
    }

    let covers = |candidate: &Circle| circles.iter().all(|c| candidate.contains(c, tolerance));
    let mut best: Option<Circle> = None;
    let mut consider = |candidate: Circle| {
        let smaller = best.map_or(true, |b| candidate.radius() < b.radius());
        if candidate.radius() > 0.0 && smaller && covers(&candidate) {
            best = Some(candidate);
        }
    };

    for c in circles {
        consider(*c);
    }

    let n = circles.len();
    for i in 0..n {
        for j in (i + 1)..n {
            if let Some(pair) = minimal_enclosing_circle(&[circles[i], circles[j]]) {
                consider(pair);
            }
            for k in (j + 1)..n {
                for candidate in internally_tangent(&circles[i], &circles[j], &circles[k]) {
                    consider(candidate);
                }
            }
        }
    }

    if best.is_none() {
        log::debug!("no enclosing candidate covers all {} circles", n);
    }
    best.map(|c| c.with_role(Role::Enclosing))
}

/// Circles tangent from outside-in to three circles: `|p - c_i| = R - r_i`.
///
/// Subtracting the first equation from the other two leaves a linear system in
/// `(x, y)` parameterized by `R`; substituting back gives a quadratic in `R`.
/// Collinear centers yield no candidates (the pair candidates cover them).
fn internally_tangent(a: &Circle, b: &Circle, c: &Circle) -> Vec<Circle> {
    let (x1, y1, r1) = (a.x(), a.y(), a.radius());
    let power = |k: &Circle| k.x() * k.x() + k.y() * k.y() - k.radius() * k.radius();

    // a_i x + b_i y + c_i R = d_i, for i in {b, c}
    let row = |k: &Circle| {
        (
            2.0 * (x1 - k.x()),
            2.0 * (y1 - k.y()),
            2.0 * (k.radius() - r1),
            power(a) - power(k),
        )
    };
    let (a2, b2, c2, d2) = row(b);
    let (a3, b3, c3, d3) = row(c);

    let det = a2 * b3 - a3 * b2;
    if det.abs() <= f64::EPSILON * (a2 * b3).abs().max((a3 * b2).abs()) {
        return Vec::new();
    }

    // x = e0 + e1 R, y = f0 + f1 R
    let e0 = (d2 * b3 - d3 * b2) / det;
    let e1 = (c3 * b2 - c2 * b3) / det;
    let f0 = (a2 * d3 - a3 * d2) / det;
    let f1 = (a3 * c2 - a2 * c3) / det;

    let (gx, gy) = (e0 - x1, f0 - y1);
    let qa = e1 * e1 + f1 * f1 - 1.0;
    let qb = 2.0 * (gx * e1 + gy * f1 + r1);
    let qc = gx * gx + gy * gy - r1 * r1;

    let roots: Vec<f64> = if qa.abs() < f64::EPSILON {
        if qb.abs() < f64::EPSILON {
            Vec::new()
        } else {
            vec![-qc / qb]
        }
    } else {
        let disc = qb * qb - 4.0 * qa * qc;
        if disc < 0.0 {
            Vec::new()
        } else {
            let sq = disc.sqrt();
            vec![(-qb + sq) / (2.0 * qa), (-qb - sq) / (2.0 * qa)]
        }
    };

    let max_inner = r1.max(b.radius()).max(c.radius());
    roots
        .into_iter()
        .filter(|r| r.is_finite() && *r >= max_inner)
        .map(|r| {
            let center = Point2::new(e0 + e1 * r, f0 + f1 * r);
            Circle::at(center, r)
        })
        .collect()
}

/// Returns the enclosing circle's radius or `0.0` for an empty slice.
pub fn enclosing_radius(circles: &[Circle], method: EnclosingMethod, tolerance: f64) -> f64 {
    method
        .enclose(circles, tolerance)
        .map_or(0.0, |c| c.radius())
}
