//! Node enumeration and reference-node elimination.

use std::collections::{BTreeSet, HashMap};

use super::graph::Circuit;
use super::types::NodeLabel;
use crate::error::{MnaError, Result};

/// How the reference (ground) node is chosen.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ReferenceChoice<N> {
    /// The node label that compares least.
    #[default]
    Lowest,
    /// A specific node, which must appear on some terminal.
    Node(N),
}

/// Dense index mapping for the non-reference nodes of a circuit.
///
/// Non-reference nodes are numbered `0..len()` in ascending label
/// order, so identical inputs always produce identical numbering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeIndex<N: NodeLabel> {
    reference: N,
    /// Non-reference labels, sorted; position is the matrix index
    nodes: Vec<N>,
    lookup: HashMap<N, usize>,
}

impl<N: NodeLabel> NodeIndex<N> {
    /// Enumerate every node in `circuit` and pick the reference.
    pub fn build(circuit: &Circuit<N>, choice: &ReferenceChoice<N>) -> Result<Self> {
        let mut all: BTreeSet<N> = circuit.nodes().cloned().collect();

        let reference = match choice {
            ReferenceChoice::Lowest => all.pop_first().ok_or(MnaError::EmptyCircuit)?,
            ReferenceChoice::Node(node) => {
                if all.is_empty() {
                    return Err(MnaError::EmptyCircuit);
                }
                all.take(node).ok_or_else(|| MnaError::unknown_node(node))?
            }
        };

        let nodes: Vec<N> = all.into_iter().collect();
        let lookup = nodes
            .iter()
            .enumerate()
            .map(|(idx, node)| (node.clone(), idx))
            .collect();

        Ok(Self {
            reference,
            nodes,
            lookup,
        })
    }

    /// The reference node, whose voltage is fixed at zero.
    pub fn reference(&self) -> &N {
        &self.reference
    }

    /// Number of non-reference nodes (`n_n`).
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when the reference is the only node.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Check if `node` is the reference node.
    pub fn is_reference(&self, node: &N) -> bool {
        *node == self.reference
    }

    /// Check if `node` appears anywhere in the circuit.
    pub fn contains(&self, node: &N) -> bool {
        self.is_reference(node) || self.lookup.contains_key(node)
    }

    /// Matrix index of a node. Returns `None` for the reference node.
    ///
    /// Fails with `UnknownNode` for labels the circuit never mentioned.
    pub fn index(&self, node: &N) -> Result<Option<usize>> {
        if self.is_reference(node) {
            return Ok(None);
        }
        self.lookup
            .get(node)
            .copied()
            .map(Some)
            .ok_or_else(|| MnaError::unknown_node(node))
    }

    /// Label of the node at matrix index `idx`.
    pub fn node(&self, idx: usize) -> Option<&N> {
        self.nodes.get(idx)
    }

    /// Non-reference labels in index order.
    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }
}
