//! Error types for U-Bundle.

use thiserror::Error;

/// Result type alias using the U-Bundle [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported before or outside the bundle search.
///
/// Infeasible orderings and degenerate tangent triangles are not errors: they
/// surface as `None` from the constructor and the search.
#[derive(Debug, Error)]
pub enum Error {
    /// A radius is not a positive, finite number.
    #[error("invalid radius at index {index}: {value} (radii must be positive and finite)")]
    InvalidRadius {
        /// Position of the offending radius in the input.
        index: usize,
        /// The rejected value.
        value: f64,
    },

    /// The input cannot be searched at all.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The permutation space is larger than the configured limit allows.
    #[error("{count} radii exceed the configured limit of {limit} ({count}! permutations)")]
    TooManyRadii {
        /// Number of radii supplied.
        count: usize,
        /// Configured maximum.
        limit: usize,
    },

    /// Internal failure (e.g. a poisoned lock).
    #[error("internal error: {0}")]
    Internal(String),
}
