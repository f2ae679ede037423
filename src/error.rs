//! Error types for the MNA solver.
//!
//! This module provides a unified error type [`MnaError`] that covers
//! every failure the DC pipeline can surface: malformed components,
//! empty circuits, unknown nodes and singular systems.

use thiserror::Error;

/// Result type alias using [`MnaError`].
pub type Result<T> = std::result::Result<T, MnaError>;

/// Unified error type for all MNA operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MnaError {
    // ============ Circuit Construction Errors ============
    /// No components were supplied, so there is no node to solve for
    #[error("Circuit is empty - at least one component is required")]
    EmptyCircuit,

    /// A component carries a value the solver cannot stamp
    #[error("Invalid {kind} at position {index}: {message}")]
    InvalidComponent {
        kind: &'static str,
        index: usize,
        message: String,
    },

    /// A node label was referenced that no component terminal introduces
    #[error("Node '{node}' not found in circuit")]
    UnknownNode { node: String },

    // ============ Solve Errors ============
    /// The assembled system has no unique solution
    #[error("Singular {size}x{size} system - circuit may contain a floating node or conflicting voltage sources")]
    SingularSystem { size: usize },

    /// The linear solver was handed inconsistent dimensions
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}

impl MnaError {
    /// Create an invalid component error
    pub fn invalid_component(kind: &'static str, index: usize, message: impl Into<String>) -> Self {
        Self::InvalidComponent {
            kind,
            index,
            message: message.into(),
        }
    }

    /// Create an unknown node error from any debuggable label
    pub fn unknown_node(node: &impl std::fmt::Debug) -> Self {
        Self::UnknownNode {
            node: format!("{node:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_component_message() {
        let err = MnaError::invalid_component("resistor", 2, "resistance must be positive, got 0");
        assert_eq!(
            err.to_string(),
            "Invalid resistor at position 2: resistance must be positive, got 0"
        );
    }

    #[test]
    fn test_unknown_node_uses_debug_label() {
        assert_eq!(
            MnaError::unknown_node(&"out"),
            MnaError::UnknownNode {
                node: "\"out\"".to_string()
            }
        );
        assert_eq!(MnaError::unknown_node(&7u32).to_string(), "Node '7' not found in circuit");
    }
}
