//! Validated pairwise travel-cost matrix.

use crate::error::SolveError;

/// Immutable square matrix of non-negative travel costs over `n ≥ 1`
/// locations. Location 0 is the fixed tour start.
///
/// Costs may be asymmetric. The diagonal is never traversed and is
/// normalized to zero at construction. An absent edge is stored explicitly
/// as [`CostMatrix::ABSENT`], so a legitimate zero-cost edge is always
/// distinguishable from "no edge".
///
/// # Examples
///
/// ```
/// use tsp_exact::model::CostMatrix;
///
/// let matrix = CostMatrix::from_rows(vec![
///     vec![0.0, 5.0],
///     vec![5.0, 0.0],
/// ]).unwrap();
///
/// assert_eq!(matrix.n(), 2);
/// assert_eq!(matrix.cost(0, 1), 5.0);
/// assert!(matrix.is_integral());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CostMatrix {
    n: usize,
    /// Row-major, length `n * n`.
    costs: Vec<f64>,
}

impl CostMatrix {
    /// Marker for a missing edge.
    pub const ABSENT: f64 = f64::INFINITY;

    /// Builds a matrix from row vectors.
    ///
    /// Every entry must be a non-negative number; off-diagonal entries may
    /// be [`CostMatrix::ABSENT`]. Rejects empty input, ragged rows, NaN
    /// and negative costs with [`SolveError::InvalidInput`].
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, SolveError> {
        let n = rows.len();
        if n == 0 {
            return Err(SolveError::InvalidInput("matrix has no locations".into()));
        }

        let mut costs = Vec::with_capacity(n * n);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(SolveError::InvalidInput(format!(
                    "row {} has length {}, expected {}",
                    i,
                    row.len(),
                    n
                )));
            }
            for (j, &c) in row.iter().enumerate() {
                if c.is_nan() {
                    return Err(SolveError::InvalidInput(format!("cost[{i}][{j}] is NaN")));
                }
                if c < 0.0 {
                    return Err(SolveError::InvalidInput(format!(
                        "cost[{i}][{j}] is negative ({c})"
                    )));
                }
                // The diagonal is never traversed; keep it at the
                // conventional zero regardless of the input value.
                costs.push(if i == j { 0.0 } else { c });
            }
        }

        Ok(Self { n, costs })
    }

    /// Builds a matrix from rows where an off-diagonal zero means
    /// "no edge" (the convention of adjacency-style data sources).
    /// Those zeros are mapped to [`CostMatrix::ABSENT`].
    pub fn from_rows_zero_as_absent(rows: Vec<Vec<f64>>) -> Result<Self, SolveError> {
        let mapped = rows
            .into_iter()
            .enumerate()
            .map(|(i, row)| {
                row.into_iter()
                    .enumerate()
                    .map(|(j, c)| if i != j && c == 0.0 { Self::ABSENT } else { c })
                    .collect()
            })
            .collect();
        Self::from_rows(mapped)
    }

    /// Number of locations.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Travel cost from `from` to `to`; [`CostMatrix::ABSENT`] if the edge
    /// is missing.
    #[inline]
    pub fn cost(&self, from: usize, to: usize) -> f64 {
        self.costs[from * self.n + to]
    }

    /// Whether a traversable edge from `from` to `to` exists.
    #[inline]
    pub fn has_edge(&self, from: usize, to: usize) -> bool {
        from != to && self.cost(from, to).is_finite()
    }

    /// Whether every present cost is an integer value. The branch-and-bound
    /// root bound may only be rounded up when this holds; rounding a
    /// fractional bound would make it inadmissible.
    pub fn is_integral(&self) -> bool {
        self.costs
            .iter()
            .filter(|c| c.is_finite())
            .all(|c| c.fract() == 0.0)
    }
}
