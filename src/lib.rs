//! # MNA Core
//!
//! A DC operating-point solver for linear resistive circuits.
//!
//! This library provides:
//! - Resistors, ideal voltage sources and ideal current sources keyed by node labels
//! - Deterministic node enumeration with a single reference (ground) node
//! - Modified Nodal Analysis (MNA) matrix stamping and dense LU solving
//!
//! ## Architecture
//!
//! - [`circuit`] - Component types, node indexing and validation
//! - [`solver`] - MNA block stamping, assembly and the linear solve
//! - [`error`] - The unified error type
//!
//! ## Usage
//!
//! ```
//! use mna_core::solve_dc;
//!
//! // 10 V across two 5 ohm resistors
//! let x = solve_dc(
//!     [(1, 2, 5.0), (2, 0, 5.0)],
//!     [(0, 1, 10.0)],
//!     Vec::<(u32, u32, f64)>::new(),
//! )
//! .unwrap();
//!
//! assert!((x[0] - 10.0).abs() < 1e-12);
//! assert!((x[1] - 5.0).abs() < 1e-12);
//! ```
//!
//! ## Solution Layout
//!
//! The returned vector has `n_n + n_vs` entries: the voltage of every
//! non-reference node in ascending label order, then the branch current
//! of every voltage source in input order. The reference is the least
//! node label unless [`DcConfig::with_reference`] picks another.
//!
//! ## Sign Conventions
//!
//! - A current source `(neg, pos, I)` drives `I` through itself from
//!   `neg` to `pos`.
//! - A voltage source `(neg, pos, V)` holds `V(pos) - V(neg) = V`. Its
//!   branch current is positive when flowing from the external circuit
//!   into `pos`, so a source delivering power reads negative.

pub mod circuit;
pub mod error;
pub mod solver;

// Re-export main types for convenience
pub use circuit::{Circuit, CurrentSource, Element, NodeLabel, Resistor, VoltageSource};
pub use error::{MnaError, Result};
pub use solver::{DcAnalysis, DcConfig, DcSolution};

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::WasmDcSolver;

/// Solve the DC operating point of a resistive circuit.
///
/// Each list holds `(node, node, value)` triples: resistors as
/// `(a, b, ohms)`, sources as `(neg, pos, value)`. Returns the unknown
/// vector described in the crate docs.
pub fn solve_dc<N, R, V, I>(resistors: R, voltage_sources: V, current_sources: I) -> Result<Vec<f64>>
where
    N: NodeLabel,
    R: IntoIterator,
    R::Item: Into<Resistor<N>>,
    V: IntoIterator,
    V::Item: Into<VoltageSource<N>>,
    I: IntoIterator,
    I::Item: Into<CurrentSource<N>>,
{
    let circuit = Circuit::from_parts(resistors, voltage_sources, current_sources);
    Ok(DcAnalysis::new(&circuit).solve()?.into_vec())
}
