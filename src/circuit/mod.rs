//! Circuit representation and validation.
//!
//! This module holds the solver's view of a circuit: three ordered
//! component lists, the node enumeration derived from them, and the
//! checks that run before any matrix is built.

mod graph;
mod nodes;
mod types;
mod validate;

pub use graph::Circuit;
pub use nodes::{NodeIndex, ReferenceChoice};
pub use types::*;
pub use validate::validate_circuit;
pub(crate) use validate::check_resistance;
