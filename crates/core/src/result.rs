//! Placement and search result representation.

use crate::geometry::{classify_relation_with_tolerance, Circle, Role};
use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One candidate bundle: the placed cables followed by the bundle circle.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawPlacement"))]
pub struct Placement {
    /// Inner circles in placement order, then the enclosing circle last.
    circles: Vec<Circle>,
}

impl Placement {
    /// Assembles a placement from the inner circles and the bundle circle.
    pub fn new(inner: Vec<Circle>, enclosing: Circle) -> Self {
        let mut circles: Vec<Circle> = inner
            .into_iter()
            .map(|c| c.with_role(Role::Inner))
            .collect();
        circles.push(enclosing.with_role(Role::Enclosing));
        Self { circles }
    }

    /// Rebuilds a placement from a flat list, inner circles first and the
    /// enclosing circle last.
    ///
    /// The list must hold at least the enclosing circle, every circle but the
    /// last must be [`Role::Inner`], the last must be [`Role::Enclosing`], and
    /// every radius must be positive and finite.
    pub fn from_circles(circles: Vec<Circle>) -> Result<Self> {
        let Some((last, inner)) = circles.split_last() else {
            return Err(Error::InvalidInput(
                "placement needs an enclosing circle".into(),
            ));
        };
        if !last.is_enclosing() {
            return Err(Error::InvalidInput(
                "last circle of a placement must be the enclosing circle".into(),
            ));
        }
        if let Some(index) = inner.iter().position(Circle::is_enclosing) {
            return Err(Error::InvalidInput(format!(
                "circle {} is tagged as enclosing but is not last",
                index
            )));
        }
        if let Some((index, c)) = circles
            .iter()
            .enumerate()
            .find(|(_, c)| !(c.radius().is_finite() && c.radius() > 0.0))
        {
            return Err(Error::InvalidRadius {
                index,
                value: c.radius(),
            });
        }
        Ok(Self { circles })
    }

    /// All circles, inner first and the enclosing circle last.
    pub fn circles(&self) -> &[Circle] {
        &self.circles
    }

    /// The cable circles in placement order.
    pub fn inner(&self) -> &[Circle] {
        &self.circles[..self.circles.len() - 1]
    }

    /// The bundle circle.
    pub fn enclosing(&self) -> &Circle {
        &self.circles[self.circles.len() - 1]
    }

    pub fn enclosing_radius(&self) -> f64 {
        self.enclosing().radius()
    }

    /// Bundle diameter.
    pub fn diameter(&self) -> f64 {
        2.0 * self.enclosing_radius()
    }

    /// Number of cables.
    pub fn inner_count(&self) -> usize {
        self.circles.len() - 1
    }

    /// Radii of the cables in placement order.
    pub fn radii(&self) -> Vec<f64> {
        self.inner().iter().map(|c| c.radius()).collect()
    }

    /// `(x, y, radius, role)` rows for rendering.
    pub fn to_tuples(&self) -> Vec<(f64, f64, f64, Role)> {
        self.circles
            .iter()
            .map(|c| (c.x(), c.y(), c.radius(), c.role()))
            .collect()
    }

    /// Returns a copy with every coordinate and radius multiplied by `factor`.
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            circles: self.circles.iter().map(|c| c.scaled(factor)).collect(),
        }
    }

    /// Returns a copy moved by `(dx, dy)`.
    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        Self {
            circles: self.circles.iter().map(|c| c.translated(dx, dy)).collect(),
        }
    }

    /// Returns a copy moved so the enclosing circle is centered at the origin.
    pub fn centered(&self) -> Self {
        let ec = self.enclosing();
        self.translated(-ec.x(), -ec.y())
    }

    /// Ratio of cable area to bundle area.
    pub fn fill_ratio(&self) -> f64 {
        let inner: f64 = self.inner().iter().map(Circle::area).sum();
        let outer = self.enclosing().area();
        if outer > 0.0 {
            inner / outer
        } else {
            0.0
        }
    }

    /// Re-checks that no two cables overlap.
    pub fn validate(&self, tolerance: f64) -> Result<()> {
        let inner = self.inner();
        for (i, a) in inner.iter().enumerate() {
            for (j, b) in inner.iter().enumerate().skip(i + 1) {
                let relation = classify_relation_with_tolerance(a, b, tolerance);
                if relation.is_overlap() {
                    return Err(Error::Internal(format!(
                        "cables {} and {} overlap ({:?})",
                        i, j, relation
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Unchecked wire form of [`Placement`].
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawPlacement {
    circles: Vec<Circle>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawPlacement> for Placement {
    type Error = Error;

    fn try_from(raw: RawPlacement) -> Result<Self> {
        Placement::from_circles(raw.circles)
    }
}

/// Result of a bundle search.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchOutcome {
    /// Smallest bundle found, `None` if every permutation failed.
    pub best: Option<Placement>,

    /// Number of permutations evaluated.
    pub permutations_evaluated: usize,

    /// Number of permutations that produced a placement.
    pub feasible_count: usize,

    /// Computation time in milliseconds.
    pub computation_time_ms: u64,
}

impl SearchOutcome {
    /// Creates an empty outcome.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if some permutation produced a placement.
    pub fn is_successful(&self) -> bool {
        self.best.is_some()
    }

    /// Enclosing radius of the best placement.
    pub fn best_radius(&self) -> Option<f64> {
        self.best.as_ref().map(Placement::enclosing_radius)
    }

    /// Takes the best placement, leaving `None`.
    pub fn into_best(self) -> Option<Placement> {
        self.best
    }
}
