//! Held-Karp execution.
//!
//! # Algorithm
//!
//! 1. `dp[mask][last]` = cheapest way to visit exactly the set `mask`
//!    (always containing the start) and stand at `last`; base case
//!    `dp[{0}][0] = 0`
//! 2. Sweep masks in increasing numeric order — every subset of a mask is
//!    final before the mask is extended, which is a correctness
//!    requirement, not an optimization
//! 3. Relax every `(mask, last) -> next` edge, recording the predecessor
//!    of each improvement
//! 4. Close the cycle over `dp[full][last] + cost(last, 0)` and walk the
//!    parent table backward to reconstruct the tour
//!
//! Costs are summed losslessly; nothing is rounded at any point.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use super::config::HkConfig;
use super::table::DpTable;
use crate::error::SolveError;
use crate::model::{CostMatrix, Tour};

/// Result of a Held-Karp solve. The tour is always a proven optimum;
/// unlike branch-and-bound there is no best-effort outcome, because a
/// partially filled table proves nothing.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HkResult {
    /// The optimal tour.
    pub tour: Tour,

    /// Edge relaxations attempted while filling the table.
    pub transitions: u64,
}

/// Executes the Held-Karp dynamic program.
pub struct HkRunner;

impl HkRunner {
    /// Solves the matrix to proven optimality.
    ///
    /// # Examples
    ///
    /// ```
    /// use tsp_exact::held_karp::{HkConfig, HkRunner};
    /// use tsp_exact::model::CostMatrix;
    ///
    /// let matrix = CostMatrix::from_rows(vec![
    ///     vec![0.0, 5.0],
    ///     vec![5.0, 0.0],
    /// ]).unwrap();
    ///
    /// let result = HkRunner::run(&matrix, &HkConfig::default()).unwrap();
    /// assert_eq!(result.tour.cost, 10.0);
    /// assert_eq!(result.tour.route, vec![0, 1, 0]);
    /// ```
    pub fn run(matrix: &CostMatrix, config: &HkConfig) -> Result<HkResult, SolveError> {
        Self::run_with_cancel(matrix, config, None)
    }

    /// Runs the solve with an optional cancellation token.
    pub fn run_with_cancel(
        matrix: &CostMatrix,
        config: &HkConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<HkResult, SolveError> {
        config.validate().map_err(SolveError::InvalidInput)?;

        let n = matrix.n();
        if n > config.max_locations {
            // Fail fast, before the exponential table is allocated.
            return Err(SolveError::CapacityExceeded {
                n,
                max: config.max_locations,
            });
        }
        if n == 1 {
            return Ok(HkResult {
                tour: Tour {
                    route: vec![0, 0],
                    cost: 0.0,
                },
                transitions: 0,
            });
        }

        let mut table = DpTable::new(n).ok_or(SolveError::CapacityExceeded {
            n,
            max: config.max_locations,
        })?;
        table.set(1, 0, 0.0, DpTable::NO_PARENT);

        let deadline = match config.time_limit_ms {
            0 => None,
            ms => Some(Instant::now() + Duration::from_millis(ms)),
        };
        let full = (1usize << n) - 1;
        let mut transitions = 0u64;
        let mut masks_processed = 0u64;

        for mask in 1..=full {
            // Reachable states always contain the start.
            if mask & 1 == 0 {
                continue;
            }

            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    return Err(SolveError::Cancelled);
                }
            }
            masks_processed += 1;
            if let Some(deadline) = deadline {
                if masks_processed % 1024 == 0 && Instant::now() >= deadline {
                    return Err(SolveError::Cancelled);
                }
            }

            for last in 0..n {
                if mask & (1 << last) == 0 {
                    continue;
                }
                let here = table.cost(mask, last);
                if !here.is_finite() {
                    continue;
                }
                for next in 0..n {
                    if mask & (1 << next) != 0 || !matrix.has_edge(last, next) {
                        continue;
                    }
                    transitions += 1;
                    let candidate = here + matrix.cost(last, next);
                    let extended = mask | (1 << next);
                    if candidate < table.cost(extended, next) {
                        table.set(extended, next, candidate, last as u32);
                    }
                }
            }
        }

        // Close the cycle; the first of equal-cost finishers wins.
        let mut best_cost = f64::INFINITY;
        let mut best_last = 0;
        for last in 1..n {
            if !matrix.has_edge(last, 0) {
                continue;
            }
            let candidate = table.cost(full, last) + matrix.cost(last, 0);
            if candidate < best_cost {
                best_cost = candidate;
                best_last = last;
            }
        }
        if !best_cost.is_finite() {
            return Err(SolveError::Infeasible);
        }

        // Walk the parent table backward from the full set, then reverse
        // and append the start to close the cycle.
        let mut route = Vec::with_capacity(n + 1);
        let mut mask = full;
        let mut last = best_last;
        loop {
            route.push(last);
            let p = table.parent(mask, last);
            if p == DpTable::NO_PARENT {
                break;
            }
            mask ^= 1 << last;
            last = p as usize;
        }
        route.reverse();
        route.push(0);

        Ok(HkResult {
            tour: Tour {
                route,
                cost: best_cost,
            },
            transitions,
        })
    }
}
