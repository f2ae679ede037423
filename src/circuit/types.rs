//! Core types for circuit representation.

use std::fmt;
use std::hash::Hash;

/// Bound satisfied by anything usable as a node identifier.
///
/// Labels only need to be comparable (to pick a deterministic reference
/// and index order), hashable (for direct index lookup) and printable
/// (for error messages). Integers, `&str` and `String` all qualify.
pub trait NodeLabel: Clone + Ord + Hash + fmt::Debug {}

impl<T: Clone + Ord + Hash + fmt::Debug> NodeLabel for T {}

/// A linear resistor between two nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct Resistor<N> {
    pub nodes: [N; 2],
    /// Resistance in ohms, must be strictly positive
    pub resistance: f64,
}

impl<N> Resistor<N> {
    /// Create a new resistor.
    pub fn new(a: N, b: N, resistance: f64) -> Self {
        Self {
            nodes: [a, b],
            resistance,
        }
    }

    /// Get the conductance (1/R).
    pub fn conductance(&self) -> f64 {
        1.0 / self.resistance
    }
}

impl<N> From<(N, N, f64)> for Resistor<N> {
    fn from((a, b, resistance): (N, N, f64)) -> Self {
        Self::new(a, b, resistance)
    }
}

/// An ideal independent voltage source.
///
/// Each source adds one branch-current unknown to the MNA system and
/// enforces `V[pos] - V[neg] = voltage`.
#[derive(Debug, Clone, PartialEq)]
pub struct VoltageSource<N> {
    pub nodes: [N; 2], // [negative, positive]
    pub voltage: f64,
}

impl<N> VoltageSource<N> {
    /// Create a new voltage source from its negative and positive terminals.
    pub fn new(neg: N, pos: N, voltage: f64) -> Self {
        Self {
            nodes: [neg, pos],
            voltage,
        }
    }

    pub fn negative(&self) -> &N {
        &self.nodes[0]
    }

    pub fn positive(&self) -> &N {
        &self.nodes[1]
    }
}

impl<N> From<(N, N, f64)> for VoltageSource<N> {
    fn from((neg, pos, voltage): (N, N, f64)) -> Self {
        Self::new(neg, pos, voltage)
    }
}

/// An ideal independent current source.
///
/// Drives `current` through itself from the negative terminal to the
/// positive one, so it injects into `pos` and draws from `neg`.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentSource<N> {
    pub nodes: [N; 2], // [negative, positive]
    pub current: f64,
}

impl<N> CurrentSource<N> {
    /// Create a new current source from its negative and positive terminals.
    pub fn new(neg: N, pos: N, current: f64) -> Self {
        Self {
            nodes: [neg, pos],
            current,
        }
    }

    pub fn negative(&self) -> &N {
        &self.nodes[0]
    }

    pub fn positive(&self) -> &N {
        &self.nodes[1]
    }
}

impl<N> From<(N, N, f64)> for CurrentSource<N> {
    fn from((neg, pos, current): (N, N, f64)) -> Self {
        Self::new(neg, pos, current)
    }
}

/// Any component the DC solver understands.
#[derive(Debug, Clone, PartialEq)]
pub enum Element<N> {
    Resistor(Resistor<N>),
    VoltageSource(VoltageSource<N>),
    CurrentSource(CurrentSource<N>),
}

impl<N> Element<N> {
    /// Both terminals of the element, in declaration order.
    pub fn nodes(&self) -> &[N; 2] {
        match self {
            Element::Resistor(r) => &r.nodes,
            Element::VoltageSource(v) => &v.nodes,
            Element::CurrentSource(i) => &i.nodes,
        }
    }

    /// Short human-readable kind name.
    pub fn kind(&self) -> &'static str {
        match self {
            Element::Resistor(_) => "resistor",
            Element::VoltageSource(_) => "voltage source",
            Element::CurrentSource(_) => "current source",
        }
    }
}

impl<N> From<Resistor<N>> for Element<N> {
    fn from(value: Resistor<N>) -> Self {
        Self::Resistor(value)
    }
}

impl<N> From<VoltageSource<N>> for Element<N> {
    fn from(value: VoltageSource<N>) -> Self {
        Self::VoltageSource(value)
    }
}

impl<N> From<CurrentSource<N>> for Element<N> {
    fn from(value: CurrentSource<N>) -> Self {
        Self::CurrentSource(value)
    }
}
