//! # U-Bundle Core
//!
//! Core geometry, combinatorics and result types for the U-Bundle cable
//! bundling engine.
//!
//! Given the radii of N round cables, U-Bundle searches every ordering of the
//! radii, builds one tangent-circle packing per ordering, and keeps the packing
//! with the smallest bundle circle. This crate holds the pieces shared by the
//! search: the circle kernel, the enclosing-circle computations, the
//! combinatorics, the solver configuration and the result types.
//!
//! ## Core Components
//!
//! - **Geometry kernel**: [`Circle`], [`Relation`], [`classify_relation`],
//!   [`third_tangent_circles`]
//! - **Enclosing circles**: [`minimal_enclosing_circle`] (farthest-pair
//!   heuristic, default) and [`exact_enclosing_circle`]
//! - **Combinatorics**: [`combinations`], [`permutations`], [`build_permutations`]
//! - **Solver trait**: [`Solver`] with [`Config`]
//! - **Results**: [`Placement`], [`SearchOutcome`]
//!
//! ## Configuration
//!
//! ```rust
//! use u_bundle_core::{Config, EnclosingMethod};
//!
//! let config = Config::new()
//!     .with_enclosing(EnclosingMethod::Exact)
//!     .with_threads(4)
//!     .with_max_radii(8);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod combinatorics;
pub mod enclosing;
pub mod error;
pub mod geometry;
pub mod result;
pub mod solver;

// Re-exports
pub use combinatorics::{
    build_permutations, combination_count, combinations, permutation_count, permutations,
};
pub use enclosing::{
    enclosing_radius, exact_enclosing_circle, minimal_enclosing_circle, EnclosingMethod,
};
pub use error::{Error, Result};
pub use geometry::{
    classify_relation, classify_relation_with_tolerance, third_tangent_circles, Circle, Relation,
    Role, DEFAULT_TOLERANCE,
};
pub use result::{Placement, SearchOutcome};
pub use solver::{Config, ProgressCallback, ProgressInfo, Solver};
