//! Solve outcomes that are not results.

use thiserror::Error;

/// Failure modes shared by both exact solvers.
///
/// Each variant demands different caller handling, so they are never
/// collapsed into a generic failure: invalid input is a caller bug,
/// infeasibility is a property of the matrix, capacity and cancellation
/// suggest retrying with a smaller instance or falling back to a heuristic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    /// The cost matrix or a solver configuration is malformed.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// No closed tour through every location exists.
    #[error("no closed tour exists for this cost matrix")]
    Infeasible,

    /// The Held-Karp table for `n` locations would exceed the configured
    /// capacity bound.
    #[error("{n} locations exceeds the dynamic-programming capacity bound of {max}")]
    CapacityExceeded { n: usize, max: usize },

    /// A budget or cancel flag stopped the solve before any complete tour
    /// was found. A solve cancelled *after* a tour was found returns that
    /// tour as a best-effort result instead of this error.
    #[error("solve cancelled before any complete tour was found")]
    Cancelled,
}
