//! Exact solvers for the Traveling Salesman Problem.
//!
//! Provides two independent exact strategies over the same cost-matrix
//! abstraction:
//!
//! - **Branch and bound** (`branch_bound`): depth-first search over
//!   partial tours, pruned by an admissible lower bound built from each
//!   location's cheapest edges. Supports node and wall-clock budgets with
//!   explicitly labeled best-effort results.
//! - **Held-Karp** (`held_karp`): bottom-up dynamic programming over
//!   (visited-set, last-location) states with parent-table tour
//!   reconstruction. `O(n² · 2^n)` time and `O(n · 2^n)` space, so
//!   instances are capped by a configured capacity bound.
//!
//! Both consume a [`model::CostMatrix`] and produce a [`model::Tour`]; on
//! the same matrix they report the same optimal cost (routes may differ
//! only when multiple optima exist).
//!
//! # Scope
//!
//! Problem-file parsing, route plotting, timing and CLI handling are left
//! to callers: build a `CostMatrix`, hand it to exactly one runner, and
//! consume the `(route, cost)` pair or its `Display` rendering. Heuristic
//! and approximate methods are out of scope for this crate.
//!
//! # Examples
//!
//! ```
//! use tsp_exact::branch_bound::{BbConfig, BbRunner};
//! use tsp_exact::held_karp::{HkConfig, HkRunner};
//! use tsp_exact::model::CostMatrix;
//!
//! let matrix = CostMatrix::from_rows(vec![
//!     vec![0.0, 10.0, 15.0, 20.0],
//!     vec![10.0, 0.0, 35.0, 25.0],
//!     vec![15.0, 35.0, 0.0, 30.0],
//!     vec![20.0, 25.0, 30.0, 0.0],
//! ])?;
//!
//! let bb = BbRunner::run(&matrix, &BbConfig::default())?;
//! let hk = HkRunner::run(&matrix, &HkConfig::default())?;
//!
//! assert_eq!(bb.tour.cost, 80.0);
//! assert_eq!(hk.tour.cost, bb.tour.cost);
//! assert_eq!(bb.tour.to_string(), "route = [0, 1, 3, 2, 0], cost = 80");
//! # Ok::<(), tsp_exact::SolveError>(())
//! ```

pub mod branch_bound;
pub mod error;
pub mod held_karp;
pub mod model;

pub use error::SolveError;
