//! MNA (Modified Nodal Analysis) solver.
//!
//! This module provides the numerical engine for DC analysis.
//!
//! ## Modified Nodal Analysis
//!
//! MNA assembles a system of equations Ax = z where:
//! - x contains node voltages and voltage source branch currents
//! - A is the conductance/coefficient matrix
//! - z is the source vector
//!
//! The matrix structure is:
//! ```text
//! [ G   B ] [ v ]   [ i ]
//! [ C   D ] [ j ] = [ e ]
//! ```
//!
//! where:
//! - G is the conductance matrix (node equations)
//! - B connects voltage sources to nodes, C is its transpose
//! - D is zero for ideal voltage sources
//! - v is the vector of node voltages
//! - j is the vector of voltage source currents
//! - i is the sum of current sources into each node
//! - e is the vector of voltage source values
//!
//! The pipeline runs once per call with no state between calls:
//! index nodes, stamp G, stamp B and e, stamp i, assemble, solve.

mod dc;
mod linear;
mod mna;
mod stamp;

pub use dc::{AssembledSystem, DcAnalysis, DcConfig, DcSolution};
pub use linear::solve_dense;
pub use mna::MnaSystem;
pub use stamp::{stamp_conductance, stamp_current_source, stamp_voltage_source};

/// Default relative pivot threshold for singularity detection.
pub const PIVOT_TOLERANCE: f64 = 1e-12;
