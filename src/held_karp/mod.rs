//! Held-Karp exact solver.
//!
//! Bottom-up dynamic programming over (visited-set, last-location) states,
//! with a parent table for tour reconstruction. Always optimal, but time
//! and space are exponential in the number of locations — `O(n² · 2^n)`
//! and `O(n · 2^n)` respectively — so instances are capped by a configured
//! capacity bound. This is a hard operating constraint of the algorithm,
//! not a tunable.
//!
//! # References
//!
//! - Held & Karp (1962), "A Dynamic Programming Approach to Sequencing
//!   Problems"
//! - Bellman (1962), "Dynamic Programming Treatment of the Travelling
//!   Salesman Problem"

mod config;
mod runner;
mod table;

pub use config::HkConfig;
pub use runner::{HkResult, HkRunner};
