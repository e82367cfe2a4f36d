//! Closed tour produced by the solvers.

use std::fmt;

use super::CostMatrix;

/// An ordered visiting sequence over all locations, starting and ending at
/// location 0, together with its total cost.
///
/// `route` has length `n + 1`: each location exactly once, then location 0
/// again to close the cycle.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tour {
    /// Visiting order, `route[0] == route[n] == 0`.
    pub route: Vec<usize>,
    /// Total cost of the closed cycle.
    pub cost: f64,
}

impl Tour {
    /// Number of locations visited (excluding the closing return).
    pub fn n(&self) -> usize {
        self.route.len() - 1
    }

    /// Re-sums the route's edge costs against a matrix. Useful for
    /// verifying a reported cost independently of the solver that
    /// produced it.
    pub fn cost_on(&self, matrix: &CostMatrix) -> f64 {
        self.route
            .windows(2)
            .map(|leg| matrix.cost(leg[0], leg[1]))
            .sum()
    }
}

impl fmt::Display for Tour {
    /// Renders the reporter format: `route = [0, 1, 0], cost = 10`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "route = [")?;
        for (i, loc) in self.route.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{loc}")?;
        }
        write!(f, "], cost = {}", self.cost)
    }
}
