//! Branch-and-bound execution.
//!
//! # Algorithm
//!
//! 1. Precompute each location's cheapest edges and the root lower bound
//! 2. Depth-first recursion over partial tours anchored at location 0:
//!    a. Extend the path with every unvisited, reachable location
//!    b. Tighten the inherited bound by the edge slots the extension consumes
//!    c. Recurse only while `bound + accumulated cost` can still beat the
//!       best complete tour (strict comparison; ties keep the first find)
//!    d. At full depth, close the cycle back to 0 and record improvements
//! 3. Backtracking restores path, visited set and accumulated cost exactly

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use super::bounds::EdgeMins;
use super::config::BbConfig;
use crate::error::SolveError;
use crate::model::{CostMatrix, Tour};

/// Result of a branch-and-bound solve.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BbResult {
    /// The best tour found.
    pub tour: Tour,

    /// `true` when the search ran to completion, so the tour is a proven
    /// optimum. `false` when a budget or cancel flag stopped the search
    /// early and the tour is only the best found so far.
    pub proven_optimal: bool,

    /// Search nodes expanded (recursion frames entered).
    pub nodes_expanded: u64,

    /// Branches discarded by the bound test.
    pub nodes_pruned: u64,

    /// Complete tours evaluated at the bottom of the tree.
    pub tours_found: u64,
}

/// Executes the branch-and-bound search.
pub struct BbRunner;

impl BbRunner {
    /// Solves the matrix to proven optimality (or until a configured
    /// budget runs out).
    ///
    /// # Examples
    ///
    /// ```
    /// use tsp_exact::branch_bound::{BbConfig, BbRunner};
    /// use tsp_exact::model::CostMatrix;
    ///
    /// let matrix = CostMatrix::from_rows(vec![
    ///     vec![0.0, 5.0],
    ///     vec![5.0, 0.0],
    /// ]).unwrap();
    ///
    /// let result = BbRunner::run(&matrix, &BbConfig::default()).unwrap();
    /// assert_eq!(result.tour.cost, 10.0);
    /// assert_eq!(result.tour.route, vec![0, 1, 0]);
    /// assert!(result.proven_optimal);
    /// ```
    pub fn run(matrix: &CostMatrix, config: &BbConfig) -> Result<BbResult, SolveError> {
        Self::run_with_cancel(matrix, config, None)
    }

    /// Runs the search with an optional cancellation token.
    ///
    /// When a budget or the token stops the search early, the best tour
    /// found so far is returned with `proven_optimal == false`; if no
    /// complete tour has been seen yet the solve fails with
    /// [`SolveError::Cancelled`].
    pub fn run_with_cancel(
        matrix: &CostMatrix,
        config: &BbConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<BbResult, SolveError> {
        config.validate().map_err(SolveError::InvalidInput)?;

        let n = matrix.n();
        if n == 1 {
            return Ok(BbResult {
                tour: Tour {
                    route: vec![0, 0],
                    cost: 0.0,
                },
                proven_optimal: true,
                nodes_expanded: 0,
                nodes_pruned: 0,
                tours_found: 1,
            });
        }

        let mins = EdgeMins::new(matrix);
        let root_bound = mins.root_bound(matrix);

        let mut path = Vec::with_capacity(n + 1);
        path.push(0);
        let mut visited = vec![false; n];
        visited[0] = true;

        let mut search = Search {
            matrix,
            mins: &mins,
            config,
            cancel,
            deadline: match config.time_limit_ms {
                0 => None,
                ms => Some(Instant::now() + Duration::from_millis(ms)),
            },
            path,
            visited,
            best_cost: f64::INFINITY,
            best_route: Vec::new(),
            nodes_expanded: 0,
            nodes_pruned: 0,
            tours_found: 0,
            stopped: false,
        };

        search.descend(root_bound, 0.0, 1);

        let found = search.best_cost.is_finite();
        match (found, search.stopped) {
            (true, stopped) => Ok(BbResult {
                tour: Tour {
                    route: search.best_route,
                    cost: search.best_cost,
                },
                proven_optimal: !stopped,
                nodes_expanded: search.nodes_expanded,
                nodes_pruned: search.nodes_pruned,
                tours_found: search.tours_found,
            }),
            (false, true) => Err(SolveError::Cancelled),
            (false, false) => Err(SolveError::Infeasible),
        }
    }
}

/// All mutable search state for one solve invocation. One instance per
/// call; nothing is shared across invocations.
struct Search<'a> {
    matrix: &'a CostMatrix,
    mins: &'a EdgeMins,
    config: &'a BbConfig,
    cancel: Option<Arc<AtomicBool>>,
    deadline: Option<Instant>,

    /// Committed partial path; push/pop discipline mirrors the recursion.
    path: Vec<usize>,
    visited: Vec<bool>,

    best_cost: f64,
    best_route: Vec<usize>,

    nodes_expanded: u64,
    nodes_pruned: u64,
    tours_found: u64,
    stopped: bool,
}

impl Search<'_> {
    /// Checks node, time and cancellation budgets. Once any budget trips,
    /// every pending frame unwinds without further work.
    fn out_of_budget(&mut self) -> bool {
        if self.stopped {
            return true;
        }
        if self.config.max_nodes > 0 && self.nodes_expanded >= self.config.max_nodes {
            self.stopped = true;
        } else if let Some(ref flag) = self.cancel {
            if flag.load(Ordering::Relaxed) {
                self.stopped = true;
            }
        }
        if !self.stopped {
            if let Some(deadline) = self.deadline {
                // Amortize the clock read over a batch of nodes.
                if self.nodes_expanded % 1024 == 0 && Instant::now() >= deadline {
                    self.stopped = true;
                }
            }
        }
        self.stopped
    }

    fn descend(&mut self, bound: f64, accumulated: f64, level: usize) {
        if self.out_of_budget() {
            return;
        }
        self.nodes_expanded += 1;

        let n = self.matrix.n();
        let last = self.path[level - 1];

        if level == n {
            // Close the cycle back to the start, if that edge exists.
            if self.matrix.has_edge(last, 0) {
                self.tours_found += 1;
                let total = accumulated + self.matrix.cost(last, 0);
                if total < self.best_cost {
                    self.best_cost = total;
                    self.best_route.clear();
                    self.best_route.extend_from_slice(&self.path);
                    self.best_route.push(0);
                }
            }
            return;
        }

        for next in 0..n {
            if self.visited[next] || !self.matrix.has_edge(last, next) {
                continue;
            }

            let child_bound = bound - self.mins.edge_reduction(level, last, next);
            let child_cost = accumulated + self.matrix.cost(last, next);

            if self.config.pruning && child_bound + child_cost >= self.best_cost {
                self.nodes_pruned += 1;
                continue;
            }

            self.path.push(next);
            self.visited[next] = true;

            self.descend(child_bound, child_cost, level + 1);

            self.visited[next] = false;
            self.path.pop();

            if self.stopped {
                return;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(rows: Vec<Vec<f64>>) -> CostMatrix {
        CostMatrix::from_rows(rows).unwrap()
    }

    fn classic_four() -> CostMatrix {
        matrix(vec![
            vec![0.0, 10.0, 15.0, 20.0],
            vec![10.0, 0.0, 35.0, 25.0],
            vec![15.0, 35.0, 0.0, 30.0],
            vec![20.0, 25.0, 30.0, 0.0],
        ])
    }

    #[test]
    fn test_single_location() {
        let m = matrix(vec![vec![0.0]]);
        let result = BbRunner::run(&m, &BbConfig::default()).unwrap();
        assert_eq!(result.tour.route, vec![0, 0]);
        assert_eq!(result.tour.cost, 0.0);
        assert!(result.proven_optimal);
    }

    #[test]
    fn test_two_locations() {
        let m = matrix(vec![vec![0.0, 5.0], vec![5.0, 0.0]]);
        let result = BbRunner::run(&m, &BbConfig::default()).unwrap();
        assert_eq!(result.tour.cost, 10.0);
        assert_eq!(result.tour.route, vec![0, 1, 0]);
    }

    #[test]
    fn test_classic_four_city() {
        let result = BbRunner::run(&classic_four(), &BbConfig::default()).unwrap();
        assert_eq!(result.tour.cost, 80.0);
        // Two optima exist; the first one found in depth-first order wins.
        assert_eq!(result.tour.route, vec![0, 1, 3, 2, 0]);
        assert!(result.proven_optimal);
    }

    #[test]
    fn test_asymmetric_ring() {
        let m = matrix(vec![
            vec![0.0, 1.0, 10.0],
            vec![10.0, 0.0, 1.0],
            vec![1.0, 10.0, 0.0],
        ]);
        let result = BbRunner::run(&m, &BbConfig::default()).unwrap();
        assert_eq!(result.tour.cost, 3.0);
        assert_eq!(result.tour.route, vec![0, 1, 2, 0]);
    }

    #[test]
    fn test_zero_cost_edge_is_traversable() {
        // With explicit absence markers, a zero off-diagonal cost is a
        // real (free) edge.
        let m = matrix(vec![
            vec![0.0, 0.0, 5.0],
            vec![0.0, 0.0, 5.0],
            vec![5.0, 5.0, 0.0],
        ]);
        let result = BbRunner::run(&m, &BbConfig::default()).unwrap();
        assert_eq!(result.tour.cost, 10.0);
    }

    #[test]
    fn test_infeasible_isolated_location() {
        let a = CostMatrix::ABSENT;
        let m = matrix(vec![
            vec![0.0, 1.0, a],
            vec![1.0, 0.0, a],
            vec![a, a, 0.0],
        ]);
        let result = BbRunner::run(&m, &BbConfig::default());
        assert_eq!(result.unwrap_err(), SolveError::Infeasible);
    }

    #[test]
    fn test_infeasible_missing_closing_edge() {
        let a = CostMatrix::ABSENT;
        // The only Hamiltonian path is 0 -> 1 -> 2, but 2 -> 0 is missing.
        let m = matrix(vec![
            vec![0.0, 1.0, a],
            vec![a, 0.0, 1.0],
            vec![a, a, 0.0],
        ]);
        let result = BbRunner::run(&m, &BbConfig::default());
        assert_eq!(result.unwrap_err(), SolveError::Infeasible);
    }

    #[test]
    fn test_pruning_is_sound() {
        // Pruning must never change the reported optimum, only the work.
        let m = matrix(vec![
            vec![0.0, 29.0, 82.0, 46.0, 68.0, 52.0],
            vec![29.0, 0.0, 55.0, 46.0, 42.0, 43.0],
            vec![82.0, 55.0, 0.0, 68.0, 46.0, 55.0],
            vec![46.0, 46.0, 68.0, 0.0, 82.0, 15.0],
            vec![68.0, 42.0, 46.0, 82.0, 0.0, 74.0],
            vec![52.0, 43.0, 55.0, 15.0, 74.0, 0.0],
        ]);

        let pruned = BbRunner::run(&m, &BbConfig::default()).unwrap();
        let exhaustive = BbRunner::run(&m, &BbConfig::default().with_pruning(false)).unwrap();

        assert_eq!(pruned.tour.cost, exhaustive.tour.cost);
        assert!(pruned.nodes_expanded <= exhaustive.nodes_expanded);
        assert!(pruned.nodes_pruned > 0);
        assert_eq!(exhaustive.nodes_pruned, 0);
    }

    #[test]
    fn test_idempotent() {
        let m = classic_four();
        let first = BbRunner::run(&m, &BbConfig::default()).unwrap();
        let second = BbRunner::run(&m, &BbConfig::default()).unwrap();
        assert_eq!(first.tour, second.tour);
        assert_eq!(first.nodes_expanded, second.nodes_expanded);
    }

    #[test]
    fn test_reported_cost_matches_route() {
        let m = classic_four();
        let result = BbRunner::run(&m, &BbConfig::default()).unwrap();
        assert_eq!(result.tour.cost_on(&m), result.tour.cost);
    }

    #[test]
    fn test_node_budget_without_any_tour() {
        // One node is not enough to complete a single tour.
        let config = BbConfig::default().with_max_nodes(1);
        let result = BbRunner::run(&classic_four(), &config);
        assert_eq!(result.unwrap_err(), SolveError::Cancelled);
    }

    #[test]
    fn test_node_budget_returns_best_effort() {
        // Enough nodes to close the first depth-first tour, nowhere near
        // enough to prove optimality.
        let m = matrix(vec![
            vec![0.0, 29.0, 82.0, 46.0, 68.0],
            vec![29.0, 0.0, 55.0, 46.0, 42.0],
            vec![82.0, 55.0, 0.0, 68.0, 46.0],
            vec![46.0, 46.0, 68.0, 0.0, 82.0],
            vec![68.0, 42.0, 46.0, 82.0, 0.0],
        ]);
        let config = BbConfig::default().with_max_nodes(6);
        let result = BbRunner::run(&m, &config).unwrap();

        assert!(!result.proven_optimal);
        assert!(result.tour.cost.is_finite());
        assert_eq!(result.tour.cost_on(&m), result.tour.cost);
        assert_eq!(result.tour.route.len(), 6);
    }

    #[test]
    fn test_time_budget_stops_early() {
        // Exhaustive enumeration of 12 locations is hours of work; a 1 ms
        // deadline must stop the search at an amortized clock check and
        // come back with either a labeled best-effort tour or a clean
        // cancellation, never an unlabeled partial answer.
        let n = 12;
        let mut rows = vec![vec![0.0; n]; n];
        for (i, row) in rows.iter_mut().enumerate() {
            for (j, cost) in row.iter_mut().enumerate() {
                if i != j {
                    *cost = ((i * 7 + j * 13) % 40 + 1) as f64;
                }
            }
        }
        let m = CostMatrix::from_rows(rows).unwrap();
        let config = BbConfig::default().with_pruning(false).with_time_limit_ms(1);

        match BbRunner::run(&m, &config) {
            Ok(result) => {
                assert!(!result.proven_optimal);
                assert_eq!(result.tour.cost_on(&m), result.tour.cost);
                assert_eq!(result.tour.route.len(), n + 1);
            }
            Err(err) => assert_eq!(err, SolveError::Cancelled),
        }
    }

    #[test]
    fn test_cancellation() {
        // Set the cancel flag before running — ensures deterministic
        // cancellation regardless of how fast the solver completes.
        let cancel = Arc::new(AtomicBool::new(true));
        let result =
            BbRunner::run_with_cancel(&classic_four(), &BbConfig::default(), Some(cancel));
        assert_eq!(result.unwrap_err(), SolveError::Cancelled);
    }

    #[test]
    fn test_fractional_costs() {
        let m = matrix(vec![
            vec![0.0, 1.5, 2.25],
            vec![1.5, 0.0, 3.75],
            vec![2.25, 3.75, 0.0],
        ]);
        let result = BbRunner::run(&m, &BbConfig::default()).unwrap();
        assert_eq!(result.tour.cost, 1.5 + 3.75 + 2.25);
    }
}
