//! Constructive bundle placement for one ordering of radii.

use u_bundle_core::enclosing::EnclosingMethod;
use u_bundle_core::geometry::{classify_relation_with_tolerance, third_tangent_circles, Circle};
use u_bundle_core::{combinations, Config, Placement, DEFAULT_TOLERANCE};

/// Options for [`build_bundle_with`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BuildOptions {
    /// How the bundle circle is computed.
    pub enclosing: EnclosingMethod,
    /// Relative tolerance for tangency and identity tests.
    pub tolerance: f64,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            enclosing: EnclosingMethod::default(),
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl From<&Config> for BuildOptions {
    fn from(config: &Config) -> Self {
        Self {
            enclosing: config.enclosing,
            tolerance: config.tolerance,
        }
    }
}

/// Builds a bundle for `radii` in the given order with default options.
pub fn build_bundle(radii: &[f64]) -> Option<Placement> {
    build_bundle_with(radii, &BuildOptions::default())
}

/// Builds a bundle for `radii` in the given order.
///
/// The first two circles are placed side by side on the x axis, the first at
/// the origin. Every following circle is attached tangent to a pair of circles
/// already placed: pairs are tried in combination order, and for each pair the
/// first then the second tangent solution. The first candidate that overlaps
/// no placed circle is kept; there is no backtracking.
///
/// Returns `None` for fewer than two radii, for a radius that is not a
/// positive finite number, or if some radius cannot be attached anywhere.
pub fn build_bundle_with(radii: &[f64], options: &BuildOptions) -> Option<Placement> {
    if radii.len() < 2 {
        return None;
    }
    if radii.iter().any(|r| !(r.is_finite() && *r > 0.0)) {
        log::debug!("rejecting non-positive radius in {:?}", radii);
        return None;
    }

    let (r1, r2) = (radii[0], radii[1]);
    let mut circles = Vec::with_capacity(radii.len());
    circles.push(Circle::new(0.0, 0.0, r1));
    circles.push(Circle::new(r1 + r2, 0.0, r2));

    for (index, &radius) in radii.iter().enumerate().skip(2) {
        match attach(&circles, radius, options.tolerance) {
            Some(circle) => circles.push(circle),
            None => {
                log::debug!(
                    "radius {} (index {}) could not be attached to {:?}",
                    radius,
                    index,
                    radii
                );
                return None;
            }
        }
    }

    if circles.len() != radii.len() {
        log::debug!(
            "placed {} of {} circles for {:?}",
            circles.len(),
            radii.len(),
            radii
        );
        return None;
    }

    let enclosing = options.enclosing.enclose(&circles, options.tolerance)?;
    Some(Placement::new(circles, enclosing))
}

/// Finds the first admissible circle of `radius` tangent to a placed pair.
fn attach(circles: &[Circle], radius: f64, tolerance: f64) -> Option<Circle> {
    for pair in combinations(circles, 2) {
        let (a, b) = (&pair[0], &pair[1]);
        let Some((first, second)) =
            third_tangent_circles(a.center(), a.radius(), b.center(), b.radius(), radius)
        else {
            continue;
        };

        for candidate in [first, second] {
            if fits(circles, &candidate, tolerance) {
                return Some(candidate);
            }
        }
    }
    None
}

/// Returns true if `candidate` overlaps none of `circles`.
fn fits(circles: &[Circle], candidate: &Circle, tolerance: f64) -> bool {
    circles.iter().all(|placed| {
        !classify_relation_with_tolerance(placed, candidate, tolerance).is_overlap()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use u_bundle_core::classify_relation;

    #[test]
    fn test_single_radius_has_no_bundle() {
        assert!(build_bundle(&[4.0]).is_none());
        assert!(build_bundle(&[]).is_none());
    }

    #[test]
    fn test_invalid_radius_has_no_bundle() {
        assert!(build_bundle(&[2.0, -1.0, 3.0]).is_none());
        assert!(build_bundle(&[2.0, f64::NAN]).is_none());
    }

    #[test]
    fn test_two_radii_seed() {
        let placement = build_bundle(&[3.0, 5.0]).unwrap();
        let inner = placement.inner();
        assert_eq!(inner.len(), 2);
        assert_eq!((inner[0].x(), inner[0].y()), (0.0, 0.0));
        assert_eq!((inner[1].x(), inner[1].y()), (8.0, 0.0));
        assert_relative_eq!(inner[0].center_distance(&inner[1]), 8.0);
        assert_relative_eq!(placement.enclosing_radius(), 8.0, epsilon = 1e-12);
    }

    #[test]
    fn test_three_equal_radii_form_triangle() {
        let placement = build_bundle(&[2.0, 2.0, 2.0]).unwrap();
        let inner = placement.inner();
        assert_eq!(inner.len(), 3);

        // Third circle sits on the first tangent solution, above the seed pair.
        assert_relative_eq!(inner[2].x(), 2.0, epsilon = 1e-9);
        assert_relative_eq!(inner[2].y(), 2.0 * (3.0_f64).sqrt(), epsilon = 1e-9);
        for i in 0..3 {
            for j in (i + 1)..3 {
                assert_relative_eq!(inner[i].center_distance(&inner[j]), 4.0, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_exact_enclosing_option() {
        let options = BuildOptions {
            enclosing: EnclosingMethod::Exact,
            ..Default::default()
        };
        let placement = build_bundle_with(&[2.0, 2.0, 2.0], &options).unwrap();
        let expected = 2.0 * (1.0 + 2.0 / (3.0_f64).sqrt());
        assert_relative_eq!(placement.enclosing_radius(), expected, epsilon = 1e-9);
    }

    #[test]
    fn test_tangent_rounding_is_accepted() {
        let placement = build_bundle(&[0.1, 0.2, 0.3]).unwrap();
        assert_eq!(placement.inner_count(), 3);
    }

    #[test]
    fn test_no_overlaps_in_larger_bundle() {
        let radii = [5.0, 3.0, 4.0, 2.0, 6.0, 1.5];
        let placement = build_bundle(&radii).unwrap();
        assert_eq!(placement.inner_count(), radii.len());
        assert_eq!(placement.radii(), radii.to_vec());
        let inner = placement.inner();
        for i in 0..inner.len() {
            for j in (i + 1)..inner.len() {
                assert!(!classify_relation(&inner[i], &inner[j]).is_overlap());
            }
        }
        assert!(placement.validate(DEFAULT_TOLERANCE).is_ok());
    }

    #[test]
    fn test_each_attached_circle_touches_two() {
        let placement = build_bundle(&[4.0, 3.0, 2.0, 2.5, 1.0]).unwrap();
        let inner = placement.inner();
        for (k, c) in inner.iter().enumerate().skip(2) {
            let touching = inner[..k]
                .iter()
                .filter(|other| {
                    classify_relation(other, c) == u_bundle_core::Relation::Touching
                })
                .count();
            assert!(touching >= 2, "circle {} touches {} earlier circles", k, touching);
        }
    }
}
