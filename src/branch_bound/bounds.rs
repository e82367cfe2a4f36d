//! Per-location edge minima and the admissible lower bound.
//!
//! Every tour enters and leaves each location exactly once, so half the
//! sum of each location's two cheapest incident edges can never exceed the
//! cost of any tour. For symmetric matrices the two cheapest outgoing
//! edges stand in for both directions; for asymmetric matrices the two
//! slots must be the cheapest outgoing and the cheapest incoming edge,
//! otherwise the bound can overshoot and prune a true optimum.

use crate::model::CostMatrix;

/// Cheapest edges per location, precomputed once per solve.
///
/// A location with fewer than two usable edges contributes zero for the
/// missing slot; underestimating keeps the bound admissible.
pub(crate) struct EdgeMins {
    out_first: Vec<f64>,
    out_second: Vec<f64>,
    in_first: Vec<f64>,
    symmetric: bool,
}

impl EdgeMins {
    pub(crate) fn new(matrix: &CostMatrix) -> Self {
        let n = matrix.n();
        let mut out_first = vec![f64::INFINITY; n];
        let mut out_second = vec![f64::INFINITY; n];
        let mut in_first = vec![f64::INFINITY; n];
        let mut symmetric = true;

        for i in 0..n {
            for j in 0..n {
                if i == j {
                    continue;
                }
                let c = matrix.cost(i, j);
                if c != matrix.cost(j, i) {
                    symmetric = false;
                }
                if !c.is_finite() {
                    continue;
                }
                if c <= out_first[i] {
                    out_second[i] = out_first[i];
                    out_first[i] = c;
                } else if c < out_second[i] {
                    out_second[i] = c;
                }
                if c < in_first[j] {
                    in_first[j] = c;
                }
            }
        }

        Self {
            out_first,
            out_second,
            in_first,
            symmetric,
        }
    }

    /// Lower bound on any complete tour. Rounded up only for integral
    /// matrices; ceiling a fractional half-sum could exceed the true
    /// optimum.
    pub(crate) fn root_bound(&self, matrix: &CostMatrix) -> f64 {
        let n = matrix.n();
        let mut sum = 0.0;
        for i in 0..n {
            sum += if self.symmetric {
                finite_or_zero(self.out_first[i]) + finite_or_zero(self.out_second[i])
            } else {
                finite_or_zero(self.out_first[i]) + finite_or_zero(self.in_first[i])
            };
        }
        let half = sum / 2.0;
        if matrix.is_integral() {
            half.ceil()
        } else {
            half
        }
    }

    /// Amount to subtract from a parent bound when committing the edge
    /// `last -> next` at the given level (1 = first edge out of the
    /// start). Committing an edge consumes one edge slot at each endpoint,
    /// releasing the slots priced into the root bound.
    ///
    /// Slot bookkeeping keeps the bound admissible at every depth: the
    /// partial-path interior keeps nothing, the start keeps its cheapest
    /// slot for the eventual closing edge, the new endpoint keeps its
    /// cheapest slot for the edge that will leave it, and unvisited
    /// locations keep both slots. So the tail releases its cheapest slot
    /// when it becomes interior (its *second* at level 1, where the start
    /// instead holds back the cheapest), and the head releases its second.
    /// Releasing the more expensive slot here would leave the bound
    /// pricing edges a completion never has to pay, which over-prunes.
    pub(crate) fn edge_reduction(&self, level: usize, last: usize, next: usize) -> f64 {
        let released = if self.symmetric {
            let tail = if level == 1 {
                finite_or_zero(self.out_second[last])
            } else {
                finite_or_zero(self.out_first[last])
            };
            tail + finite_or_zero(self.out_second[next])
        } else {
            finite_or_zero(self.out_first[last]) + finite_or_zero(self.in_first[next])
        };
        released / 2.0
    }
}

#[inline]
fn finite_or_zero(c: f64) -> f64 {
    if c.is_finite() {
        c
    } else {
        0.0
    }
}
