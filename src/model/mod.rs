//! Shared problem and result types.
//!
//! Both solvers consume a [`CostMatrix`] and produce a [`Tour`]; neither
//! solver depends on the other.

mod matrix;
mod tour;

pub use matrix::CostMatrix;
pub use tour::Tour;
