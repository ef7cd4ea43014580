//! Solver trait and configuration.

use crate::enclosing::EnclosingMethod;
use crate::geometry::DEFAULT_TOLERANCE;
use crate::result::SearchOutcome;
use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for the bundle search.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// How the bundle circle is computed.
    pub enclosing: EnclosingMethod,

    /// Relative tolerance for tangency and identity tests (0 = exact).
    pub tolerance: f64,

    /// Number of worker threads (0 = rayon global pool).
    pub threads: usize,

    /// Maximum number of radii accepted by [`Solver::solve`] (0 = unlimited).
    pub max_radii: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            enclosing: EnclosingMethod::default(),
            tolerance: DEFAULT_TOLERANCE,
            threads: 0,
            max_radii: 9,
        }
    }
}

impl Config {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the enclosing circle method.
    pub fn with_enclosing(mut self, method: EnclosingMethod) -> Self {
        self.enclosing = method;
        self
    }

    /// Sets the relative tolerance. Negative values are treated as 0.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance.max(0.0);
        self
    }

    /// Sets the number of worker threads.
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    /// Sets the maximum number of radii.
    pub fn with_max_radii(mut self, max_radii: usize) -> Self {
        self.max_radii = max_radii;
        self
    }

    /// Checks that `radii` can be searched under this configuration.
    pub fn validate_radii(&self, radii: &[f64]) -> Result<()> {
        if radii.is_empty() {
            return Err(Error::InvalidInput("no radii supplied".into()));
        }
        if let Some((index, &value)) = radii
            .iter()
            .enumerate()
            .find(|(_, r)| !(r.is_finite() && **r > 0.0))
        {
            return Err(Error::InvalidRadius { index, value });
        }
        if self.max_radii > 0 && radii.len() > self.max_radii {
            return Err(Error::TooManyRadii {
                count: radii.len(),
                limit: self.max_radii,
            });
        }
        Ok(())
    }
}

/// Progress callback, called once per evaluated permutation.
pub type ProgressCallback = Box<dyn Fn(ProgressInfo) + Send + Sync>;

/// Progress information during a search.
#[derive(Debug, Clone, Default)]
pub struct ProgressInfo {
    /// Permutations evaluated so far.
    pub evaluated: usize,
    /// Total permutations in the batch.
    pub total: usize,
    /// Permutations that produced a placement.
    pub feasible: usize,
    /// Best enclosing radius found so far, `None` until some unit finds a placement.
    pub best_radius: Option<f64>,
}

impl ProgressInfo {
    /// Progress as a fraction in `0.0..=1.0`.
    pub fn progress_percent(&self) -> f64 {
        if self.total > 0 {
            self.evaluated as f64 / self.total as f64
        } else {
            0.0
        }
    }

    /// Returns true once every permutation has been evaluated.
    pub fn is_finished(&self) -> bool {
        self.evaluated >= self.total
    }
}

/// Trait for bundle solvers.
pub trait Solver {
    /// Validates `radii`, then searches every ordering for the smallest bundle.
    fn solve(&self, radii: &[f64]) -> Result<SearchOutcome>;

    /// Like [`Solver::solve`], reporting progress after each permutation.
    fn solve_with_progress(&self, radii: &[f64], callback: ProgressCallback)
        -> Result<SearchOutcome>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = Config::new()
            .with_enclosing(EnclosingMethod::Exact)
            .with_tolerance(-1.0)
            .with_threads(4)
            .with_max_radii(0);
        assert_eq!(config.enclosing, EnclosingMethod::Exact);
        assert_eq!(config.tolerance, 0.0);
        assert_eq!(config.threads, 4);
        assert_eq!(config.max_radii, 0);
    }

    #[test]
    fn test_validate_radii() {
        let config = Config::default();
        assert!(config.validate_radii(&[1.0, 2.0, 3.0]).is_ok());
        assert!(matches!(
            config.validate_radii(&[]),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            config.validate_radii(&[1.0, 0.0]),
            Err(Error::InvalidRadius { index: 1, .. })
        ));
        assert!(matches!(
            config.validate_radii(&[f64::NAN]),
            Err(Error::InvalidRadius { index: 0, .. })
        ));
        assert!(matches!(
            config.validate_radii(&[1.0; 10]),
            Err(Error::TooManyRadii { count: 10, limit: 9 })
        ));
        assert!(Config::new()
            .with_max_radii(0)
            .validate_radii(&[1.0; 10])
            .is_ok());
    }

    #[test]
    fn test_progress_percent() {
        let info = ProgressInfo {
            evaluated: 3,
            total: 12,
            ..Default::default()
        };
        assert_eq!(info.progress_percent(), 0.25);
        assert!(!info.is_finished());
        assert_eq!(ProgressInfo::default().progress_percent(), 0.0);
    }
}
