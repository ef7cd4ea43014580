//! # U-Bundle Packer
//!
//! Constructive circle placement and exhaustive parallel search for the
//! U-Bundle cable bundling engine.
//!
//! For each ordering of the cable radii, [`build_bundle`] places the circles
//! one by one, each tangent to two circles already placed, and measures the
//! bundle circle. [`BundleSearch`] runs this over every ordering on a rayon
//! pool and keeps the smallest bundle.
//!
//! ## Quick Start
//!
//! ```rust
//! use u_bundle_packer::{BundleSearch, Config, Solver};
//!
//! let search = BundleSearch::new(Config::new().with_threads(2));
//! let outcome = search.solve(&[2.0, 2.0, 2.0]).unwrap();
//!
//! let best = outcome.best.expect("three equal cables always fit");
//! for (x, y, r, role) in best.to_tuples() {
//!     println!("{:?} at ({:.2}, {:.2}) r={:.2}", role, x, y, r);
//! }
//! ```
//!
//! ## Lower-level API
//!
//! ```rust
//! use u_bundle_packer::{build_permutations, search_minimal_bundle};
//!
//! let permutations = build_permutations(&[5.0, 3.0, 4.0]);
//! let best = search_minimal_bundle(&permutations).unwrap();
//! assert_eq!(best.inner_count(), 3);
//! ```
//!
//! The search is exhaustive: `n` radii give `n!` orderings, so inputs beyond
//! about ten cables are impractical. Equal radii are not deduplicated.

pub mod builder;
pub mod search;

// Re-exports
pub use builder::{build_bundle, build_bundle_with, BuildOptions};
pub use search::{search_minimal_bundle, BundleSearch};
pub use u_bundle_core::{
    build_permutations, Circle, Config, EnclosingMethod, Error, Placement, ProgressCallback,
    ProgressInfo, Relation, Result, Role, SearchOutcome, Solver,
};
