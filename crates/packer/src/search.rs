//! Parallel search over radius permutations.
//!
//! Every permutation is an independent unit of work on a rayon pool. A unit
//! that produces a placement enters one mutex-guarded section and replaces the
//! shared best only if its enclosing radius is strictly smaller. When several
//! permutations tie exactly, whichever reaches the lock first is kept.

use crate::builder::{build_bundle_with, BuildOptions};
use rayon::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Instant;
use u_bundle_core::solver::{Config, ProgressCallback, ProgressInfo, Solver};
use u_bundle_core::{build_permutations, Error, Placement, Result, SearchOutcome};

/// Best placement seen so far.
#[derive(Debug)]
struct BestBundle {
    placement: Option<Placement>,
    radius: f64,
}

impl BestBundle {
    fn new() -> Self {
        Self {
            placement: None,
            radius: f64::MAX,
        }
    }

    /// Keeps `placement` if it is strictly smaller. Returns the current best radius.
    fn offer(&mut self, placement: Placement) -> f64 {
        let radius = placement.enclosing_radius();
        if radius < self.radius {
            self.radius = radius;
            self.placement = Some(placement);
        }
        self.radius
    }

    /// Radius of the best placement kept so far.
    fn current(&self) -> Option<f64> {
        self.placement.as_ref().map(|_| self.radius)
    }
}

/// Searches `permutations` for the smallest bundle with the default configuration.
///
/// Returns `None` if no permutation yields a placement. An internal failure
/// of the search is logged and also reported as `None`; use
/// [`BundleSearch::search`] to tell the two apart.
pub fn search_minimal_bundle(permutations: &[Vec<f64>]) -> Option<Placement> {
    match BundleSearch::default_config().search(permutations) {
        Ok(outcome) => outcome.into_best(),
        Err(e) => {
            log::warn!("bundle search failed: {}", e);
            None
        }
    }
}

/// Exhaustive bundle solver.
///
/// # Example
///
/// ```rust
/// use u_bundle_packer::{BundleSearch, Config, Solver};
///
/// let search = BundleSearch::new(Config::default());
/// let outcome = search.solve(&[3.0, 5.0]).unwrap();
/// assert_eq!(outcome.best_radius(), Some(8.0));
/// ```
pub struct BundleSearch {
    config: Config,
}

impl BundleSearch {
    /// Creates a search with the given configuration.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Creates a search with default configuration.
    pub fn default_config() -> Self {
        Self::new(Config::default())
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Evaluates every sequence in `permutations` and keeps the smallest bundle.
    ///
    /// Sequences are not validated here; [`Solver::solve`] does that.
    pub fn search(&self, permutations: &[Vec<f64>]) -> Result<SearchOutcome> {
        self.run(permutations, None)
    }

    /// Like [`BundleSearch::search`], reporting progress after each sequence.
    pub fn search_with_progress(
        &self,
        permutations: &[Vec<f64>],
        callback: &ProgressCallback,
    ) -> Result<SearchOutcome> {
        self.run(permutations, Some(callback))
    }

    fn run(
        &self,
        permutations: &[Vec<f64>],
        callback: Option<&ProgressCallback>,
    ) -> Result<SearchOutcome> {
        let start = Instant::now();
        let options = BuildOptions::from(&self.config);
        let best = Mutex::new(BestBundle::new());
        let evaluated = AtomicUsize::new(0);
        let feasible = AtomicUsize::new(0);
        let total = permutations.len();

        log::info!(
            "searching {} permutations (enclosing: {:?})",
            total,
            options.enclosing
        );

        let evaluate = || -> Result<()> {
            permutations.par_iter().try_for_each(|radii| -> Result<()> {
                let lock = || {
                    best.lock().map_err(|e| {
                        Error::Internal(format!("Failed to acquire best bundle lock: {}", e))
                    })
                };

                let mut best_radius = None;
                if let Some(placement) = build_bundle_with(radii, &options) {
                    feasible.fetch_add(1, Ordering::Relaxed);
                    best_radius = Some(lock()?.offer(placement));
                } else if callback.is_some() {
                    best_radius = lock()?.current();
                }

                let done = evaluated.fetch_add(1, Ordering::Relaxed) + 1;
                if let Some(cb) = callback {
                    cb(ProgressInfo {
                        evaluated: done,
                        total,
                        feasible: feasible.load(Ordering::Relaxed),
                        best_radius,
                    });
                }
                Ok(())
            })
        };

        if self.config.threads > 0 {
            match rayon::ThreadPoolBuilder::new()
                .num_threads(self.config.threads)
                .build()
            {
                Ok(pool) => pool.install(evaluate)?,
                Err(e) => {
                    log::warn!(
                        "Failed to build a {}-thread pool ({}), using the global pool",
                        self.config.threads,
                        e
                    );
                    evaluate()?
                }
            }
        } else {
            evaluate()?;
        }

        let best = best
            .into_inner()
            .map_err(|e| Error::Internal(format!("Best bundle lock poisoned: {}", e)))?;

        let outcome = SearchOutcome {
            best: best.placement,
            permutations_evaluated: evaluated.into_inner(),
            feasible_count: feasible.into_inner(),
            computation_time_ms: start.elapsed().as_millis() as u64,
        };

        match outcome.best_radius() {
            Some(radius) => log::info!(
                "best bundle radius {:.4} ({} of {} permutations feasible, {} ms)",
                radius,
                outcome.feasible_count,
                outcome.permutations_evaluated,
                outcome.computation_time_ms
            ),
            None => log::info!(
                "no feasible bundle among {} permutations",
                outcome.permutations_evaluated
            ),
        }

        Ok(outcome)
    }
}

impl Default for BundleSearch {
    fn default() -> Self {
        Self::default_config()
    }
}

impl Solver for BundleSearch {
    fn solve(&self, radii: &[f64]) -> Result<SearchOutcome> {
        self.config.validate_radii(radii)?;
        let permutations = build_permutations(radii);
        self.search(&permutations)
    }

    fn solve_with_progress(
        &self,
        radii: &[f64],
        callback: ProgressCallback,
    ) -> Result<SearchOutcome> {
        self.config.validate_radii(radii)?;
        let permutations = build_permutations(radii);
        self.search_with_progress(&permutations, &callback)
    }
}
