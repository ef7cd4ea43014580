//! Circle geometry: the value type, pairwise relations and tangent construction.

use crate::{Error, Result};
use nalgebra::{Point2, Vector2};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default relative tolerance for the equality tests in [`classify_relation`].
pub const DEFAULT_TOLERANCE: f64 = 1.0e-9;

/// Role of a circle inside a bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Role {
    /// A cable.
    #[default]
    Inner,
    /// The bundle circle around all cables.
    Enclosing,
}

/// An immutable circle with a role tag.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Circle {
    x: f64,
    y: f64,
    radius: f64,
    role: Role,
}

impl Circle {
    /// Creates an inner circle. The radius is expected to be positive.
    #[inline]
    pub fn new(x: f64, y: f64, radius: f64) -> Self {
        debug_assert!(radius > 0.0, "circle radius must be positive");
        Self {
            x,
            y,
            radius,
            role: Role::Inner,
        }
    }

    /// Creates an inner circle, rejecting non-positive or non-finite values.
    pub fn try_new(x: f64, y: f64, radius: f64) -> Result<Self> {
        if !x.is_finite() || !y.is_finite() {
            return Err(Error::InvalidInput(format!(
                "circle center ({}, {}) is not finite",
                x, y
            )));
        }
        if !(radius.is_finite() && radius > 0.0) {
            return Err(Error::InvalidRadius {
                index: 0,
                value: radius,
            });
        }
        Ok(Self::new(x, y, radius))
    }

    /// Creates an inner circle centered at `center`.
    #[inline]
    pub fn at(center: Point2<f64>, radius: f64) -> Self {
        Self::new(center.x, center.y, radius)
    }

    /// Returns a copy of this circle with the given role.
    #[inline]
    pub fn with_role(self, role: Role) -> Self {
        Self { role, ..self }
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.y
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    #[inline]
    pub fn role(&self) -> Role {
        self.role
    }

    #[inline]
    pub fn center(&self) -> Point2<f64> {
        Point2::new(self.x, self.y)
    }

    /// Returns true if this is the bundle circle.
    #[inline]
    pub fn is_enclosing(&self) -> bool {
        self.role == Role::Enclosing
    }

    /// Distance between the two centers.
    #[inline]
    pub fn center_distance(&self, other: &Circle) -> f64 {
        (other.center() - self.center()).norm()
    }

    /// Returns true if `other` lies inside this circle, allowing a relative `tolerance`.
    pub fn contains(&self, other: &Circle, tolerance: f64) -> bool {
        let reach = self.center_distance(other) + other.radius;
        reach <= self.radius * (1.0 + tolerance)
    }

    /// Returns a copy moved by `(dx, dy)`.
    pub fn translated(self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    /// Returns a copy with center and radius multiplied by `factor`.
    pub fn scaled(self, factor: f64) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
            radius: self.radius * factor,
            role: self.role,
        }
    }

    /// Area of the disc.
    pub fn area(&self) -> f64 {
        std::f64::consts::PI * self.radius * self.radius
    }
}

/// Spatial relation between two circles `a` and `b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Relation {
    /// `b` lies inside `a` (boundaries may touch).
    BInsideA,
    /// `a` lies inside `b` (boundaries may touch).
    AInsideB,
    /// Externally tangent.
    Touching,
    /// Overlapping discs.
    Intersecting,
    /// No common point.
    Disjoint,
    /// Same center and radius.
    Identical,
}

impl Relation {
    /// Returns true for relations that forbid placing both circles in one bundle.
    #[inline]
    pub fn is_overlap(self) -> bool {
        matches!(self, Relation::Intersecting | Relation::Identical)
    }

    /// The relation seen from the other circle.
    pub fn mirrored(self) -> Self {
        match self {
            Relation::BInsideA => Relation::AInsideB,
            Relation::AInsideB => Relation::BInsideA,
            other => other,
        }
    }
}

/// Classifies the relation between `a` and `b` using [`DEFAULT_TOLERANCE`].
pub fn classify_relation(a: &Circle, b: &Circle) -> Relation {
    classify_relation_with_tolerance(a, b, DEFAULT_TOLERANCE)
}

/// Classifies the relation between `a` and `b`.
///
/// `Identical` is decided first. The remaining relations are tested in a fixed
/// priority order and the first true predicate wins:
/// `BInsideA`, `AInsideB`, `Touching`, `Disjoint`, `Intersecting`.
///
/// Only the two equality tests (`Identical`, `Touching`) use `tolerance`, scaled
/// by `r_a + r_b` so it stays relative at every size. A tolerance of `0.0` gives
/// exact comparisons.
pub fn classify_relation_with_tolerance(a: &Circle, b: &Circle, tolerance: f64) -> Relation {
    let d = a.center_distance(b);
    let (ra, rb) = (a.radius, b.radius);
    let eps = tolerance * (ra + rb);

    if d <= eps && (ra - rb).abs() <= eps {
        return Relation::Identical;
    }

    let predicates = [
        (Relation::BInsideA, d <= ra - rb),
        (Relation::AInsideB, d <= rb - ra),
        (Relation::Touching, (d - (ra + rb)).abs() <= eps),
        (Relation::Disjoint, d > ra + rb || d < (ra - rb).abs()),
        (Relation::Intersecting, d < ra + rb),
    ];

    predicates
        .iter()
        .find(|(_, holds)| *holds)
        .map(|(relation, _)| *relation)
        // NaN distance: nothing holds, refuse the pair
        .unwrap_or(Relation::Intersecting)
}

/// Computes the two circles of radius `r3` externally tangent to the circles
/// `(p1, r1)` and `(p2, r2)`.
///
/// The new center is the third vertex of a triangle with sides `r1 + r3` (from
/// `p1`), `r2 + r3` (from `p2`) and `|p1 p2|`, found with the law of cosines.
/// The first solution lies to the left of the directed line `p1 -> p2`, the
/// second to the right.
///
/// Returns `None` if the triangle cannot be formed.
pub fn third_tangent_circles(
    p1: Point2<f64>,
    r1: f64,
    p2: Point2<f64>,
    r2: f64,
    r3: f64,
) -> Option<(Circle, Circle)> {
    let axis = p2 - p1;
    let d = axis.norm();
    let side1 = r1 + r3;
    let side2 = r2 + r3;

    // Projection of the p1 side onto the axis, then the triangle height.
    let k = (d * d + side1 * side1 - side2 * side2) / (2.0 * d);
    let h = (side1 * side1 - k * k).sqrt();

    let along = axis * (k / d);
    let normal = Vector2::new(-axis.y, axis.x) * (h / d);

    let first = p1 + along + normal;
    let second = p1 + along - normal;

    let finite = [first.x, first.y, second.x, second.y]
        .iter()
        .all(|v| v.is_finite());
    if !finite {
        return None;
    }

    Some((Circle::at(first, r3), Circle::at(second, r3)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_circle_accessors() {
        let c = Circle::new(1.0, 2.0, 3.0);
        assert_eq!(c.x(), 1.0);
        assert_eq!(c.y(), 2.0);
        assert_eq!(c.radius(), 3.0);
        assert_eq!(c.role(), Role::Inner);
        assert!(!c.is_enclosing());
        assert!(c.with_role(Role::Enclosing).is_enclosing());
    }

    #[test]
    fn test_try_new_rejects_bad_radius() {
        assert!(Circle::try_new(0.0, 0.0, 1.0).is_ok());
        assert!(Circle::try_new(0.0, 0.0, 0.0).is_err());
        assert!(Circle::try_new(0.0, 0.0, -2.0).is_err());
        assert!(Circle::try_new(0.0, 0.0, f64::NAN).is_err());
        assert!(Circle::try_new(f64::INFINITY, 0.0, 1.0).is_err());
    }

    #[test]
    fn test_relation_touching() {
        let a = Circle::new(0.0, 0.0, 3.0);
        let b = Circle::new(8.0, 0.0, 5.0);
        assert_eq!(classify_relation(&a, &b), Relation::Touching);
        assert_eq!(classify_relation(&b, &a), Relation::Touching);
    }

    #[test]
    fn test_relation_intersecting_and_disjoint() {
        let a = Circle::new(0.0, 0.0, 3.0);
        let b = Circle::new(4.0, 0.0, 3.0);
        assert_eq!(classify_relation(&a, &b), Relation::Intersecting);

        let c = Circle::new(10.0, 0.0, 3.0);
        assert_eq!(classify_relation(&a, &c), Relation::Disjoint);
    }

    #[test]
    fn test_relation_containment_is_mirrored() {
        let big = Circle::new(0.0, 0.0, 10.0);
        let small = Circle::new(1.0, 1.0, 2.0);
        assert_eq!(classify_relation(&big, &small), Relation::BInsideA);
        assert_eq!(classify_relation(&small, &big), Relation::AInsideB);
        assert_eq!(Relation::BInsideA.mirrored(), Relation::AInsideB);
    }

    #[test]
    fn test_relation_identical_counts_as_overlap() {
        let a = Circle::new(2.0, 2.0, 1.5);
        let b = Circle::new(2.0, 2.0, 1.5);
        let rel = classify_relation(&a, &b);
        assert_eq!(rel, Relation::Identical);
        assert!(rel.is_overlap());
        assert!(Relation::Intersecting.is_overlap());
        assert!(!Relation::Touching.is_overlap());
    }

    #[test]
    fn test_relation_exact_mode_rejects_rounding() {
        // 0.1 + 0.2 != 0.3 in binary floating point
        let a = Circle::new(0.0, 0.0, 0.1);
        let b = Circle::new(0.3, 0.0, 0.2);
        assert_eq!(classify_relation(&a, &b), Relation::Touching);
        assert_ne!(
            classify_relation_with_tolerance(&a, &b, 0.0),
            Relation::Touching
        );
    }

    #[test]
    fn test_tolerance_is_relative_for_small_circles() {
        let a = Circle::new(0.0, 0.0, 1.0e-6);
        let b = Circle::new(5.0e-10, 0.0, 1.0e-6);
        assert_eq!(classify_relation(&a, &b), Relation::Intersecting);

        // 1e-12 overlap on micro radii is a real overlap
        let c = Circle::new(2.0e-6 - 1.0e-12, 0.0, 1.0e-6);
        assert_eq!(classify_relation(&a, &c), Relation::Intersecting);

        let scaled_a = a.scaled(1.0e6);
        let scaled_c = c.scaled(1.0e6);
        assert_eq!(
            classify_relation(&scaled_a, &scaled_c),
            classify_relation(&a, &c)
        );
    }

    #[test]
    fn test_relation_symmetry() {
        let samples = [
            Circle::new(0.0, 0.0, 1.0),
            Circle::new(2.0, 0.0, 1.0),
            Circle::new(1.0, 1.0, 0.5),
            Circle::new(0.0, 0.0, 4.0),
            Circle::new(10.0, -3.0, 2.0),
            Circle::new(0.0, 0.0, 1.0),
        ];
        for a in &samples {
            for b in &samples {
                assert_eq!(
                    classify_relation(a, b),
                    classify_relation(b, a).mirrored(),
                    "{:?} vs {:?}",
                    a,
                    b
                );
            }
        }
    }

    #[test]
    fn test_third_tangent_distances() {
        let (r1, r2) = (3.0, 5.0);
        let p1 = Point2::new(0.0, 0.0);
        let p2 = Point2::new(r1 + r2, 0.0);
        for r3 in [0.5, 1.0, 3.0, 7.5, 20.0] {
            let (a, b) = third_tangent_circles(p1, r1, p2, r2, r3).unwrap();
            for c in [a, b] {
                assert_relative_eq!((c.center() - p1).norm(), r1 + r3, epsilon = 1e-9);
                assert_relative_eq!((c.center() - p2).norm(), r2 + r3, epsilon = 1e-9);
                assert_eq!(c.radius(), r3);
            }
            // first solution on the left of p1 -> p2
            assert!(a.y() > 0.0);
            assert!(b.y() < 0.0);
        }
    }

    #[test]
    fn test_third_tangent_infeasible_triangle() {
        // Centers too far apart for a circle of radius 1 to reach both.
        let p1 = Point2::new(0.0, 0.0);
        let p2 = Point2::new(100.0, 0.0);
        assert!(third_tangent_circles(p1, 1.0, p2, 1.0, 1.0).is_none());

        // Coincident centers.
        assert!(third_tangent_circles(p1, 1.0, p1, 1.0, 1.0).is_none());
    }

    #[test]
    fn test_contains_and_transforms() {
        let outer = Circle::new(0.0, 0.0, 5.0);
        assert!(outer.contains(&Circle::new(2.0, 0.0, 3.0), 1e-9));
        assert!(!outer.contains(&Circle::new(2.5, 0.0, 3.0), 1e-9));

        let moved = Circle::new(1.0, 1.0, 2.0).translated(1.0, -1.0);
        assert_eq!(moved.center(), Point2::new(2.0, 0.0));

        let scaled = Circle::new(1.0, 2.0, 3.0).scaled(0.5);
        assert_relative_eq!(scaled.radius(), 1.5);
        assert_relative_eq!(scaled.y(), 1.0);
    }
}
