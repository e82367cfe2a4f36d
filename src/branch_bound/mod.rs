//! Branch-and-bound exact solver.
//!
//! Depth-first search over partial tours, pruned by an admissible lower
//! bound derived from each location's two cheapest outgoing edges. Exact:
//! always returns a provably optimal tour when allowed to run to
//! completion.
//!
//! # References
//!
//! - Little, Murty, Sweeney & Karel (1963), "An Algorithm for the
//!   Traveling Salesman Problem"
//! - Reduced two-edge bound as presented in Horowitz & Sahni,
//!   *Fundamentals of Computer Algorithms*, ch. 8

mod bounds;
mod config;
mod runner;

pub use config::BbConfig;
pub use runner::{BbResult, BbRunner};
